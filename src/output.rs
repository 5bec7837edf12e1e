//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity (format label, conversion slug), with machine
//! details (MIME type, extensions) as indented secondary context.
//!
//! # Output Format
//!
//! ## Formats
//!
//! ```text
//! Formats (9 total, 5 encodable)
//! 001 PNG [in/out]
//!     image/png · .png · transparency
//! 002 JPEG [in/out]
//!     image/jpeg · .jpg, .jpeg
//! 004 GIF [in]
//!     image/gif · .gif · transparency
//! ```
//!
//! ## Conversions
//!
//! ```text
//! Conversions (40)
//! 001 jpeg-to-png
//! 002 jpeg-to-webp
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::catalog::{Catalog, FormatDescriptor};
use crate::conversions::Conversion;
use crate::generate::GenerateStats;
use crate::route::ConversionRoute;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Secondary context line for a format: MIME, extensions, capabilities.
fn format_detail(f: &FormatDescriptor) -> String {
    let extensions = f
        .extensions
        .iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(", ");
    let mut line = format!("    {} · {}", f.mime, extensions);
    if f.supports_transparency {
        line.push_str(" · transparency");
    }
    line
}

pub fn format_formats_output(catalog: &Catalog) -> Vec<String> {
    let total = catalog.input_formats().len();
    let encodable = catalog.output_formats().count();
    let mut lines = vec![format!("Formats ({} total, {} encodable)", total, encodable)];
    for (idx, f) in catalog.input_formats().iter().enumerate() {
        let role = if f.can_encode { "[in/out]" } else { "[in]" };
        lines.push(format!("{} {} {}", format_index(idx + 1), f.label, role));
        lines.push(format_detail(f));
    }
    lines
}

pub fn format_conversions_output(conversions: &[Conversion]) -> Vec<String> {
    let mut lines = vec![format!("Conversions ({})", conversions.len())];
    for (idx, c) in conversions.iter().enumerate() {
        lines.push(format!("{} {}", format_index(idx + 1), c.slug));
    }
    lines
}

pub fn format_route_output(route: &ConversionRoute) -> Vec<String> {
    vec![
        format!("{} → {}", route.from.label, route.to.label),
        format!("    From: {} ({})", route.pair.from, route.from.mime),
        format!("    To: {} ({})", route.pair.to, route.to.mime),
        format!("    Title: {}", route.title),
        format!("    Description: {}", route.description),
    ]
}

pub fn format_generate_output(stats: &GenerateStats) -> Vec<String> {
    vec![format!(
        "Generated index, {} conversion pages, sitemap with {} URLs",
        stats.conversion_pages, stats.sitemap_urls
    )]
}

pub fn print_formats_output(catalog: &Catalog) {
    for line in format_formats_output(catalog) {
        println!("{}", line);
    }
}

pub fn print_conversions_output(conversions: &[Conversion]) {
    for line in format_conversions_output(conversions) {
        println!("{}", line);
    }
}

pub fn print_route_output(route: &ConversionRoute) {
    for line in format_route_output(route) {
        println!("{}", line);
    }
}

pub fn print_generate_output(stats: &GenerateStats) {
    for line in format_generate_output(stats) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversions::all_conversions;
    use crate::route::resolve_route;

    #[test]
    fn formats_header_and_roles() {
        let lines = format_formats_output(&Catalog::builtin());
        assert_eq!(lines[0], "Formats (9 total, 5 encodable)");
        assert_eq!(lines[1], "001 PNG [in/out]");
        assert!(lines.iter().any(|l| l == "004 GIF [in]"));
    }

    #[test]
    fn format_detail_lists_extensions() {
        let catalog = Catalog::builtin();
        let jpeg = catalog.by_value("jpeg").unwrap();
        assert_eq!(format_detail(jpeg), "    image/jpeg · .jpg, .jpeg");
        let png = catalog.by_value("png").unwrap();
        assert_eq!(format_detail(png), "    image/png · .png · transparency");
    }

    #[test]
    fn conversions_are_indexed() {
        let conversions = all_conversions(&Catalog::builtin());
        let lines = format_conversions_output(&conversions);
        assert_eq!(lines[0], "Conversions (40)");
        assert_eq!(lines[1], "001 png-to-jpeg");
        assert_eq!(lines.len(), 41);
    }

    #[test]
    fn route_output_shows_canonical_values() {
        let route = resolve_route("jpg-to-webp", &Catalog::builtin(), "Imgaize").unwrap();
        let lines = format_route_output(&route);
        assert_eq!(lines[0], "JPEG → WebP");
        assert_eq!(lines[1], "    From: jpeg (image/jpeg)");
        assert!(lines[3].starts_with("    Title: Convert JPEG to WebP"));
    }
}
