//! Conversion slug parsing and generation.
//!
//! A conversion is addressed by a two-token slug, `<from>-to-<to>`, e.g.
//! `jpeg-to-png`. This module is the single place that grammar lives: it
//! splits a slug into its tokens and resolves them against the catalog, and
//! it produces the slug for a known-valid pair.
//!
//! ## Grammar
//!
//! A slug matches when the whole string (case-insensitively) is two runs of
//! ASCII letters joined by a literal `-to-`. No partial matches, no extra
//! separators: `jpegpng` has no delimiter, `a-to-b-to-c` leaves a dash in a
//! token, both are rejected.
//!
//! ## Token resolution
//!
//! Tokens are resolved independently after lowercasing:
//! - the source token against the full catalog, canonical value first and
//!   extension alias second — so `jpg-to-webp` works without `jpg` being a
//!   catalog entry;
//! - the target token the same way but only against encodable formats, so a
//!   user-typed URL can never name an output the browser cannot produce
//!   (`png-to-gif` does not parse).
//!
//! Parsing is total: malformed or unresolvable input yields `None`, never a
//! panic. Translating `None` into a user-facing not-found is the caller's
//! job ([`crate::route`] does it for the page contract).

use crate::catalog::Catalog;
use serde::Serialize;

/// A resolved (source, target) conversion, by canonical format value.
///
/// Derived on demand, never persisted. `from != to` holds for every pair
/// the enumerator emits; `parse` can return a self-pair only if the user
/// types one, and page rendering treats that as any other valid route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionPair {
    pub from: &'static str,
    pub to: &'static str,
}

/// Split a slug into its lowercased `(from, to)` tokens, grammar only.
///
/// Equivalent to anchored, case-insensitive `^([a-z]+)-to-([a-z]+)$`.
/// Returns `None` without consulting the catalog — use [`parse`] for full
/// resolution. The distinction matters to error reporting: a grammar miss
/// is "invalid slug", a resolution miss is "unsupported format".
pub fn split_slug(slug: &str) -> Option<(String, String)> {
    let slug = slug.to_lowercase();
    let (from, to) = slug.split_once("-to-")?;
    let is_token = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase());
    // Tokens are letter-runs only, so a second "-to-" (now inside `to`)
    // fails the token check rather than needing lookahead.
    if is_token(from) && is_token(to) {
        Some((from.to_string(), to.to_string()))
    } else {
        None
    }
}

/// Parse a slug into a resolved [`ConversionPair`].
///
/// Returns `None` on grammar mismatch, an unknown source token, or a target
/// token that does not resolve to an encodable format.
pub fn parse(slug: &str, catalog: &Catalog) -> Option<ConversionPair> {
    let (from_token, to_token) = split_slug(slug)?;
    let from = catalog.resolve_input(&from_token)?;
    let to = catalog.resolve_output(&to_token)?;
    Some(ConversionPair {
        from: from.value,
        to: to.value,
    })
}

/// Render the slug for a pair. Pure templating, no validation — the caller
/// supplies catalog-valid values (the enumerator always does).
pub fn generate(from: &str, to: &str) -> String {
    format!("{from}-to-{to}")
}
