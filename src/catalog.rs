//! The static format catalog.
//!
//! One [`FormatDescriptor`] per image format the site knows about. The table
//! is the single source of truth for everything downstream: slug resolution,
//! conversion enumeration, page copy, and the sitemap all read from it.
//!
//! ## Catalog order is a contract
//!
//! The declaration order of [`FORMATS`] is significant, not incidental:
//!
//! - [`Catalog::by_extension`] returns the *first* descriptor whose extension
//!   set contains the query, so order is the tie-break if two formats ever
//!   share an extension.
//! - Conversion enumeration iterates in catalog order, so the sitemap is
//!   byte-stable across builds and its diffs stay reviewable.
//!
//! Reorder the table and you change public URLs' ordering and extension
//! resolution. Append new formats at the end.
//!
//! ## Inputs vs outputs
//!
//! Every catalog format can be *decoded* by browsers, so the full table is
//! the input set. Only formats with `can_encode` can be produced via
//! `canvas.toBlob()`, so the output set is the encodable subset. `can_encode`
//! is a static declaration of browser capability, not a runtime probe.

use serde::Serialize;

/// Static metadata for one supported image format.
#[derive(Debug, Serialize)]
pub struct FormatDescriptor {
    /// Canonical lowercase identifier, the primary key (e.g. `"jpeg"`).
    pub value: &'static str,
    /// Display name (e.g. `"JPEG"`).
    pub label: &'static str,
    /// MIME type (e.g. `"image/jpeg"`).
    pub mime: &'static str,
    /// File extensions, lowercase, no leading dot. Order matters for display.
    pub extensions: &'static [&'static str],
    /// One-line human-readable summary, used in page copy and meta tags.
    pub description: &'static str,
    /// Whether the format carries an alpha channel.
    pub supports_transparency: bool,
    /// Whether browsers can encode (export) this format.
    pub can_encode: bool,
}

/// The builtin catalog. Order is part of the public contract (see module doc).
pub const FORMATS: &[FormatDescriptor] = &[
    FormatDescriptor {
        value: "png",
        label: "PNG",
        mime: "image/png",
        extensions: &["png"],
        description: "Portable Network Graphics - Lossless compression with transparency",
        supports_transparency: true,
        can_encode: true,
    },
    FormatDescriptor {
        value: "jpeg",
        label: "JPEG",
        mime: "image/jpeg",
        extensions: &["jpg", "jpeg"],
        description: "Joint Photographic Experts Group - Best for photographs",
        supports_transparency: false,
        can_encode: true,
    },
    FormatDescriptor {
        value: "webp",
        label: "WebP",
        mime: "image/webp",
        extensions: &["webp"],
        description: "Modern format with excellent compression and transparency",
        supports_transparency: true,
        can_encode: true,
    },
    FormatDescriptor {
        value: "gif",
        label: "GIF",
        mime: "image/gif",
        extensions: &["gif"],
        description: "Graphics Interchange Format - Supports animation",
        supports_transparency: true,
        can_encode: false,
    },
    FormatDescriptor {
        value: "bmp",
        label: "BMP",
        mime: "image/bmp",
        extensions: &["bmp"],
        description: "Bitmap Image - Uncompressed raster graphics",
        supports_transparency: false,
        can_encode: true,
    },
    FormatDescriptor {
        value: "avif",
        label: "AVIF",
        mime: "image/avif",
        extensions: &["avif"],
        description: "AV1 Image Format - Superior compression, modern browsers",
        supports_transparency: true,
        can_encode: true,
    },
    FormatDescriptor {
        value: "tiff",
        label: "TIFF",
        mime: "image/tiff",
        extensions: &["tiff", "tif"],
        description: "Tagged Image File Format - Professional quality",
        supports_transparency: true,
        can_encode: false,
    },
    FormatDescriptor {
        value: "ico",
        label: "ICO",
        mime: "image/x-icon",
        extensions: &["ico"],
        description: "Icon format for Windows applications",
        supports_transparency: true,
        can_encode: false,
    },
    FormatDescriptor {
        value: "heic",
        label: "HEIC",
        mime: "image/heic",
        extensions: &["heic", "heif"],
        description: "High Efficiency Image Format - Used by Apple devices",
        supports_transparency: true,
        can_encode: false,
    },
];

/// Read-only view over the format table.
///
/// Built once at startup and passed by reference into every consumer. All
/// data is `'static` and immutable, so a `Catalog` is freely shareable
/// across threads without synchronization.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    formats: &'static [FormatDescriptor],
}

impl Catalog {
    /// The catalog backed by the builtin [`FORMATS`] table.
    pub fn builtin() -> Self {
        Self { formats: FORMATS }
    }

    /// Exact match on canonical `value`. No normalization — callers that
    /// accept user input should lowercase first (the slug codec does).
    pub fn by_value(&self, value: &str) -> Option<&'static FormatDescriptor> {
        self.formats.iter().find(|f| f.value == value)
    }

    /// Look up by file extension. Lowercases the query and strips a single
    /// leading dot, so `"JPG"`, `".jpg"`, and `"jpg"` all resolve alike.
    /// First descriptor in catalog order wins if extensions ever overlap.
    pub fn by_extension(&self, ext: &str) -> Option<&'static FormatDescriptor> {
        let ext = ext.to_lowercase();
        let ext = ext.strip_prefix('.').unwrap_or(&ext);
        self.formats
            .iter()
            .find(|f| f.extensions.contains(&ext))
    }

    /// Every format the site accepts as conversion *input* — the full table,
    /// since browsers decode all of them.
    pub fn input_formats(&self) -> &'static [FormatDescriptor] {
        self.formats
    }

    /// Formats the site can produce as conversion *output*, in catalog order.
    pub fn output_formats(&self) -> impl Iterator<Item = &'static FormatDescriptor> {
        self.formats.iter().filter(|f| f.can_encode)
    }

    /// Resolve a lowercase token to an input format: canonical `value` first,
    /// then extension alias (`"jpg"` → jpeg).
    pub fn resolve_input(&self, token: &str) -> Option<&'static FormatDescriptor> {
        self.by_value(token)
            .or_else(|| self.by_extension(token))
    }

    /// Resolve a lowercase token to an output format. Same value-then-alias
    /// rule, but only the encodable subset is searched — a format the
    /// browser cannot export is never a valid target, even via alias.
    pub fn resolve_output(&self, token: &str) -> Option<&'static FormatDescriptor> {
        self.output_formats()
            .find(|f| f.value == token)
            .or_else(|| self.output_formats().find(|f| f.extensions.contains(&token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_value_exact_match() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_value("jpeg").unwrap().label, "JPEG");
        assert!(catalog.by_value("JPEG").is_none()); // no normalization
        assert!(catalog.by_value("bogus").is_none());
    }

    #[test]
    fn by_extension_normalizes_case_and_dot() {
        let catalog = Catalog::builtin();
        let upper = catalog.by_extension("JPG").unwrap();
        let dotted = catalog.by_extension(".jpg").unwrap();
        let bare = catalog.by_extension("jpg").unwrap();
        assert_eq!(upper.value, "jpeg");
        assert_eq!(dotted.value, "jpeg");
        assert_eq!(bare.value, "jpeg");
    }

    #[test]
    fn by_extension_strips_only_one_dot() {
        let catalog = Catalog::builtin();
        assert!(catalog.by_extension("..jpg").is_none());
    }

    #[test]
    fn heif_alias_resolves_to_heic() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_extension("heif").unwrap().value, "heic");
    }

    #[test]
    fn values_are_unique() {
        let catalog = Catalog::builtin();
        let mut seen = std::collections::HashSet::new();
        for f in catalog.input_formats() {
            assert!(seen.insert(f.value), "duplicate value {}", f.value);
        }
    }

    #[test]
    fn output_formats_are_encodable_subset_in_order() {
        let catalog = Catalog::builtin();
        let outputs: Vec<_> = catalog.output_formats().map(|f| f.value).collect();
        assert_eq!(outputs, vec!["png", "jpeg", "webp", "bmp", "avif"]);
    }

    #[test]
    fn resolve_input_prefers_value_over_alias() {
        let catalog = Catalog::builtin();
        // "jpeg" is both a value and an extension of the same format; either
        // path lands on the same descriptor.
        assert_eq!(catalog.resolve_input("jpeg").unwrap().value, "jpeg");
        // "tif" is extension-only.
        assert_eq!(catalog.resolve_input("tif").unwrap().value, "tiff");
    }

    #[test]
    fn resolve_output_rejects_non_encodable() {
        let catalog = Catalog::builtin();
        assert!(catalog.resolve_output("gif").is_none());
        assert!(catalog.resolve_output("tif").is_none()); // alias gated too
        assert_eq!(catalog.resolve_output("webp").unwrap().value, "webp");
    }
}
