//! End-to-end build test: config on disk → generated site tree.

use imgaize::catalog::Catalog;
use imgaize::{config, generate, slug};
use std::fs;
use tempfile::TempDir;

#[test]
fn build_from_config_produces_complete_site() {
    let site = TempDir::new().unwrap();
    let dist = TempDir::new().unwrap();
    fs::write(
        site.path().join("config.toml"),
        r#"
base_url = "https://convert.example/"
site_name = "Convertly"

[sitemap]
lastmod = "2026-08-01"
"#,
    )
    .unwrap();

    let config = config::load_config(site.path()).unwrap();
    // Trailing slash normalized away at load time.
    assert_eq!(config.base_url, "https://convert.example");

    let catalog = Catalog::builtin();
    let stats = generate::generate(&config, &catalog, dist.path()).unwrap();
    assert_eq!(stats.conversion_pages, 40);
    assert_eq!(stats.sitemap_urls, 41);

    // Every sitemap <loc> resolves to a page that exists on disk, and its
    // slug parses back to a valid pair.
    let xml = fs::read_to_string(dist.path().join("sitemap.xml")).unwrap();
    assert!(xml.contains(r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
    assert_eq!(xml.matches("<lastmod>2026-08-01</lastmod>").count(), 41);

    let prefix = "<loc>https://convert.example/";
    let mut page_count = 0;
    for line in xml.lines() {
        let Some(loc) = line.trim().strip_prefix(prefix) else {
            continue;
        };
        let loc = loc.strip_suffix("</loc>").unwrap();
        if loc.is_empty() {
            continue; // site root
        }
        page_count += 1;
        assert!(
            dist.path().join(loc).join("index.html").exists(),
            "sitemap lists {loc} but no page was generated"
        );
        assert!(slug::parse(loc, &catalog).is_some(), "unparseable slug {loc}");
    }
    assert_eq!(page_count, 40);

    // Site name from config flows into generated titles.
    let page = fs::read_to_string(dist.path().join("jpeg-to-png/index.html")).unwrap();
    assert!(page.contains("Convert JPEG to PNG - Free Online Converter | Convertly"));
}

#[test]
fn build_with_default_config_omits_lastmod() {
    let site = TempDir::new().unwrap();
    let dist = TempDir::new().unwrap();

    let config = config::load_config(site.path()).unwrap();
    generate::generate(&config, &Catalog::builtin(), dist.path()).unwrap();

    let xml = fs::read_to_string(dist.path().join("sitemap.xml")).unwrap();
    assert!(!xml.contains("<lastmod>"));
    assert!(xml.contains("<loc>https://imgaize.app/jpeg-to-png</loc>"));
}
