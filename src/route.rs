//! The conversion-page route contract.
//!
//! Bridges a raw URL path segment and a renderable page: parse the slug,
//! fetch both descriptors, and template the page title and meta description.
//! This is the layer that turns the codec's `None` into a user-facing
//! not-found, and it distinguishes the two failure classes the site shows
//! different copy for: a string that isn't a slug at all, versus a
//! well-formed slug naming formats we don't support.

use crate::catalog::{Catalog, FormatDescriptor};
use crate::slug::{self, ConversionPair};
use thiserror::Error;

/// Not-found conditions for a conversion URL. Messages are user-facing;
/// neither variant identifies which token failed (deliberately — the
/// contract stays simple and leaks nothing about the catalog).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Invalid conversion format. Please use a format like \"jpeg-to-png\".")]
    InvalidSlug,
    #[error("Unsupported image format.")]
    UnsupportedFormat,
}

/// Everything a conversion landing page needs.
#[derive(Debug)]
pub struct ConversionRoute {
    pub pair: ConversionPair,
    pub from: &'static FormatDescriptor,
    pub to: &'static FormatDescriptor,
    /// `<title>` text.
    pub title: String,
    /// Meta description text.
    pub description: String,
}

/// Resolve a URL slug into a renderable route.
///
/// Grammar mismatch → [`RouteError::InvalidSlug`]; unresolvable token or
/// non-encodable target → [`RouteError::UnsupportedFormat`].
pub fn resolve_route(
    raw_slug: &str,
    catalog: &Catalog,
    site_name: &str,
) -> Result<ConversionRoute, RouteError> {
    let (from_token, to_token) = slug::split_slug(raw_slug).ok_or(RouteError::InvalidSlug)?;
    let from = catalog
        .resolve_input(&from_token)
        .ok_or(RouteError::UnsupportedFormat)?;
    let to = catalog
        .resolve_output(&to_token)
        .ok_or(RouteError::UnsupportedFormat)?;

    Ok(ConversionRoute {
        pair: ConversionPair {
            from: from.value,
            to: to.value,
        },
        from,
        to,
        title: format!(
            "Convert {} to {} - Free Online Converter | {site_name}",
            from.label, to.label
        ),
        description: format!(
            "Convert {} images to {} format online for free. {}. \
             Fast, secure, and works entirely in your browser.",
            from.label, to.label, from.description
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(slug: &str) -> Result<ConversionRoute, RouteError> {
        resolve_route(slug, &Catalog::builtin(), "Imgaize")
    }

    #[test]
    fn valid_slug_resolves_with_title() {
        let route = resolve("jpeg-to-png").unwrap();
        assert_eq!(route.pair.from, "jpeg");
        assert_eq!(route.pair.to, "png");
        assert_eq!(
            route.title,
            "Convert JPEG to PNG - Free Online Converter | Imgaize"
        );
        assert!(route.description.starts_with("Convert JPEG images to PNG format"));
        assert!(route.description.contains("Joint Photographic Experts Group"));
        assert!(route.description.ends_with("works entirely in your browser."));
    }

    #[test]
    fn alias_source_resolves_to_canonical() {
        let route = resolve("jpg-to-webp").unwrap();
        assert_eq!(route.pair.from, "jpeg");
        assert_eq!(route.from.label, "JPEG");
    }

    #[test]
    fn syntax_and_format_errors_are_distinct() {
        assert_eq!(resolve("jpegpng").unwrap_err(), RouteError::InvalidSlug);
        assert_eq!(
            resolve("foo-to-png").unwrap_err(),
            RouteError::UnsupportedFormat
        );
        // Valid value, but not an encodable target.
        assert_eq!(
            resolve("png-to-gif").unwrap_err(),
            RouteError::UnsupportedFormat
        );
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            RouteError::InvalidSlug.to_string(),
            "Invalid conversion format. Please use a format like \"jpeg-to-png\"."
        );
        assert_eq!(
            RouteError::UnsupportedFormat.to_string(),
            "Unsupported image format."
        );
    }

    #[test]
    fn site_name_flows_into_title() {
        let route = resolve_route("png-to-webp", &Catalog::builtin(), "TestSite").unwrap();
        assert!(route.title.ends_with("| TestSite"));
    }
}
