//! Static site generation.
//!
//! Renders the deployable site from the catalog and config: one landing
//! page per valid conversion, an index linking them all, and the sitemap.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Format overview + conversion directory
//! ├── sitemap.xml
//! ├── jpeg-to-png/
//! │   └── index.html             # One landing page per conversion
//! ├── jpeg-to-webp/
//! │   └── index.html
//! └── ...
//! ```
//!
//! Each conversion lives at `/{slug}/` so the canonical URLs work on any
//! static file server without rewrite rules.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. The
//! stylesheet is embedded at compile time and inlined into every page —
//! no asset pipeline, no extra requests.
//!
//! Generation is deterministic: identical config and catalog produce a
//! byte-identical tree.

use crate::catalog::{Catalog, FormatDescriptor};
use crate::config::SiteConfig;
use crate::conversions::{self, Conversion};
use crate::route::{self, RouteError};
use crate::sitemap;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    // Enumerated slugs always resolve; hitting this means the catalog and
    // the enumerator disagree.
    #[error("Enumerated conversion failed to resolve: {0}")]
    Route(#[from] RouteError),
}

const CSS: &str = include_str!("../static/style.css");

/// Counts for CLI reporting.
#[derive(Debug)]
pub struct GenerateStats {
    pub conversion_pages: usize,
    pub sitemap_urls: usize,
}

/// Generate the full site into `output_dir`.
pub fn generate(
    config: &SiteConfig,
    catalog: &Catalog,
    output_dir: &Path,
) -> Result<GenerateStats, GenerateError> {
    let conversions = conversions::all_conversions(catalog);

    fs::create_dir_all(output_dir)?;

    let index_html = render_index(config, catalog, &conversions);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;

    for c in &conversions {
        let route = route::resolve_route(&c.slug, catalog, &config.site_name)?;
        let page_dir = output_dir.join(&c.slug);
        fs::create_dir_all(&page_dir)?;
        let page_html = render_conversion_page(config, &route);
        fs::write(page_dir.join("index.html"), page_html.into_string())?;
    }

    let xml = sitemap::build_sitemap(
        &config.base_url,
        &conversions,
        config.sitemap.lastmod.as_deref(),
    );
    fs::write(output_dir.join("sitemap.xml"), xml)?;

    Ok(GenerateStats {
        conversion_pages: conversions.len(),
        sitemap_urls: conversions.len() + 1,
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
fn base_document(title: &str, description: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}

fn site_header(site_name: &str) -> Markup {
    html! {
        header.site-header {
            h1 { a href="/" { (site_name) } }
            p.tagline { "Convert images right in your browser. No uploads, no accounts." }
        }
    }
}

/// One capability line for a format, shown on cards and landing pages.
fn format_meta(f: &FormatDescriptor) -> Markup {
    let extensions = f
        .extensions
        .iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(", ");
    html! {
        p.format-meta {
            (f.mime)
            " · "
            (extensions)
            " · "
            @if f.supports_transparency { "transparency" } @else { "no transparency" }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the index page: every source format with its conversion links.
pub fn render_index(config: &SiteConfig, catalog: &Catalog, conversions: &[Conversion]) -> Markup {
    let content = html! {
        (site_header(&config.site_name))
        main.index-page {
            @for from in catalog.input_formats() {
                section.source-section {
                    h2 { "Convert " (from.label) }
                    (format_meta(from))
                    p { (from.description) }
                    ul.conversion-list {
                        @for c in conversions.iter().filter(|c| c.from == from.value) {
                            li {
                                a href={ "/" (c.slug) "/" } {
                                    (from.label) " → " (display_label(catalog, c.to))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    let description = format!(
        "Free online image converter. Convert between {} formats entirely in your browser.",
        catalog.input_formats().len()
    );
    let title = format!("{} - Free Online Image Converter", config.site_name);
    base_document(&title, &description, content)
}

/// Renders one conversion landing page.
pub fn render_conversion_page(config: &SiteConfig, route: &route::ConversionRoute) -> Markup {
    let content = html! {
        (site_header(&config.site_name))
        main.conversion-page {
            h1 { "Convert " (route.from.label) " to " (route.to.label) }
            p.lead { (route.description) }
            div.format-grid {
                div.format-card {
                    h2 { (route.from.label) }
                    (format_meta(route.from))
                    p { (route.from.description) }
                }
                div.format-card {
                    h2 { (route.to.label) }
                    (format_meta(route.to))
                    p { (route.to.description) }
                }
            }
            @if route.from.supports_transparency && !route.to.supports_transparency {
                p.transparency-note {
                    "Note: " (route.to.label) " does not support transparency. "
                    "Transparent areas will be flattened onto a background color."
                }
            }
            p { a href="/" { "← All conversions" } }
        }
    };

    base_document(&route.title, &route.description, content)
}

fn display_label(catalog: &Catalog, value: &str) -> &'static str {
    // Enumerated values always come from the catalog.
    catalog.by_value(value).map(|f| f.label).unwrap_or("?")
}
