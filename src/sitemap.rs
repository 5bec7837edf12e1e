//! XML sitemap generation.
//!
//! Serializes the enumerated conversions into a sitemap-protocol document
//! (namespace `http://www.sitemaps.org/schemas/sitemap/0.9`): one `<url>`
//! for the site root, then one per conversion in enumeration order.
//!
//! Output is deterministic: no clock reads, no randomness. A `lastmod`
//! date, when wanted, comes from config — the operator bumps it on deploy —
//! so two builds from the same inputs are byte-identical and sitemap diffs
//! only show real changes.
//!
//! [`SitemapResponse`] packages the document with the headers an HTTP
//! collaborator should serve it with; this crate never opens a socket.

use crate::conversions::Conversion;

/// Root entry hints. Conversion pages change less often than the homepage.
const ROOT_CHANGEFREQ: &str = "weekly";
const ROOT_PRIORITY: &str = "1.0";
const PAGE_CHANGEFREQ: &str = "monthly";
const PAGE_PRIORITY: &str = "0.8";

/// Build the sitemap document.
///
/// `base_url` must not end with `/` (config validation strips it).
/// `lastmod` is emitted verbatim on every entry when present.
pub fn build_sitemap(base_url: &str, conversions: &[Conversion], lastmod: Option<&str>) -> String {
    let mut xml = String::with_capacity(256 + conversions.len() * 160);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    push_url(
        &mut xml,
        &format!("{base_url}/"),
        lastmod,
        ROOT_CHANGEFREQ,
        ROOT_PRIORITY,
    );
    for c in conversions {
        push_url(
            &mut xml,
            &format!("{base_url}/{}", c.slug),
            lastmod,
            PAGE_CHANGEFREQ,
            PAGE_PRIORITY,
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: Option<&str>, changefreq: &str, priority: &str) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_text(loc)));
    if let Some(date) = lastmod {
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_text(date)));
    }
    xml.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
    xml.push_str(&format!("    <priority>{priority}</priority>\n"));
    xml.push_str("  </url>\n");
}

/// Escape XML text content. Slugs are `[a-z-]` only so this is a no-op for
/// them today, but `<loc>` also carries the configured base URL, and a
/// query-string base (`?` + `&`) must not corrupt the document.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// The sitemap endpoint contract for an external HTTP server: body plus the
/// headers it should be served with. Safe to produce concurrently — pure
/// function of catalog and config.
#[derive(Debug)]
pub struct SitemapResponse {
    pub body: String,
    /// `Content-Type` value.
    pub content_type: &'static str,
    /// `Cache-Control` value: edge and intermediate caches hold the document
    /// for an hour.
    pub cache_control: &'static str,
    /// `X-Robots-Tag` value: crawlers should follow the listed pages but not
    /// index the sitemap resource itself.
    pub robots_tag: &'static str,
}

impl SitemapResponse {
    pub fn new(base_url: &str, conversions: &[Conversion], lastmod: Option<&str>) -> Self {
        Self {
            body: build_sitemap(base_url, conversions, lastmod),
            content_type: "application/xml",
            cache_control: "public, max-age=3600, s-maxage=3600",
            robots_tag: "noindex",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::conversions::all_conversions;

    const BASE: &str = "https://imgaize.app";

    #[test]
    fn contains_root_and_every_conversion() {
        let conversions = all_conversions(&Catalog::builtin());
        let xml = build_sitemap(BASE, &conversions, None);
        // 1 root + 40 conversions for the builtin catalog.
        assert_eq!(xml.matches("<url>").count(), 41);
        assert_eq!(xml.matches("</url>").count(), 41);
        assert!(xml.contains("<loc>https://imgaize.app/</loc>"));
        assert!(xml.contains("<loc>https://imgaize.app/jpeg-to-png</loc>"));
        assert!(xml.contains("<loc>https://imgaize.app/heic-to-avif</loc>"));
    }

    #[test]
    fn declares_sitemap_namespace() {
        let xml = build_sitemap(BASE, &[], None);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
    }

    #[test]
    fn lastmod_only_when_supplied() {
        let conversions = all_conversions(&Catalog::builtin());
        let without = build_sitemap(BASE, &conversions, None);
        assert!(!without.contains("<lastmod>"));
        let with = build_sitemap(BASE, &conversions, Some("2026-08-01"));
        assert_eq!(with.matches("<lastmod>2026-08-01</lastmod>").count(), 41);
    }

    #[test]
    fn root_and_page_hints_differ() {
        let conversions = all_conversions(&Catalog::builtin());
        let xml = build_sitemap(BASE, &conversions, None);
        assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 1);
        assert_eq!(xml.matches("<changefreq>monthly</changefreq>").count(), 40);
        assert_eq!(xml.matches("<priority>1.0</priority>").count(), 1);
        assert_eq!(xml.matches("<priority>0.8</priority>").count(), 40);
    }

    #[test]
    fn byte_identical_across_builds() {
        let conversions = all_conversions(&Catalog::builtin());
        let a = build_sitemap(BASE, &conversions, Some("2026-08-01"));
        let b = build_sitemap(BASE, &conversions, Some("2026-08-01"));
        assert_eq!(a, b);
    }

    #[test]
    fn escapes_loc_text() {
        let xml = build_sitemap("https://example.com/?a=1&b=2", &[], None);
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2/</loc>"));
    }

    #[test]
    fn response_headers() {
        let resp = SitemapResponse::new(BASE, &[], None);
        assert_eq!(resp.content_type, "application/xml");
        assert_eq!(resp.cache_control, "public, max-age=3600, s-maxage=3600");
        assert_eq!(resp.robots_tag, "noindex");
        assert!(resp.body.contains("<urlset"));
    }
}
