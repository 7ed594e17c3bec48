//! Search-engine metadata derived from the catalog: schema.org JSON-LD for a
//! single listing, a sitemap covering every listing page, and robots.txt.

use crate::error::{RealtyError, Result};
use crate::model::Product;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};
use std::fmt::Write as _;

/// schema.org `Product` with a single in-stock `Offer`.
pub fn structured_data(product: &Product, currency: &str) -> Value {
    json!({
        "@context": "https://schema.org/",
        "@type": "Product",
        "name": product.name,
        "description": product.description,
        "image": product.image_url,
        "category": product.category,
        "offers": {
            "@type": "Offer",
            "price": product.price,
            "priceCurrency": currency,
            "availability": "https://schema.org/InStock"
        }
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Paths crawlers are asked to skip: the editing pages.
const DISALLOWED_PATHS: [&str; 2] = ["/edit-product/", "/add-product"];

fn site_root(base_url: &str) -> Result<&str> {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(RealtyError::Config("base_url is not set".to_string()));
    }
    Ok(base)
}

/// Listing home, the add page, then one detail page per product.
pub fn sitemap(base_url: &str, products: &[Product], now: DateTime<Utc>) -> Result<Vec<SitemapEntry>> {
    let base = site_root(base_url)?;

    let entry = |url: String, change_frequency, priority| SitemapEntry {
        url,
        last_modified: now,
        change_frequency,
        priority,
    };

    let mut entries = vec![
        entry(base.to_string(), ChangeFrequency::Daily, 1.0),
        entry(format!("{}/add-product", base), ChangeFrequency::Monthly, 0.5),
    ];
    entries.extend(
        products
            .iter()
            .map(|p| entry(format!("{}/product/{}", base, p.id), ChangeFrequency::Weekly, 0.8)),
    );
    Ok(entries)
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for e in entries {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&e.url),
            e.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            e.change_frequency.as_str(),
            e.priority
        );
    }
    out.push_str("</urlset>\n");
    out
}

/// robots.txt allowing everything but the editing pages, and naming the sitemap.
pub fn robots(base_url: &str) -> Result<String> {
    let base = site_root(base_url)?;
    let mut out = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED_PATHS {
        let _ = writeln!(out, "Disallow: {}", path);
    }
    let _ = writeln!(out, "\nSitemap: {}/sitemap.xml", base);
    Ok(out)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn villa() -> Product {
        Product::new("1", "Sea View", "Big", 500000.0, "Villa", "/i.jpg")
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn structured_data_has_offer() {
        let v = structured_data(&villa(), "USD");
        assert_eq!(v["@type"], "Product");
        assert_eq!(v["image"], "/i.jpg");
        assert_eq!(v["offers"]["price"], 500000.0);
        assert_eq!(v["offers"]["priceCurrency"], "USD");
        assert_eq!(v["offers"]["availability"], "https://schema.org/InStock");
    }

    #[test]
    fn sitemap_lists_static_pages_then_products() {
        let entries = sitemap("https://homes.example/", &[villa()], fixed_now()).unwrap();
        let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://homes.example",
                "https://homes.example/add-product",
                "https://homes.example/product/1",
            ]
        );
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[1].change_frequency, ChangeFrequency::Monthly);
        assert_eq!(entries[2].change_frequency, ChangeFrequency::Weekly);
    }

    #[test]
    fn sitemap_needs_base_url() {
        assert!(matches!(
            sitemap("  ", &[], fixed_now()),
            Err(RealtyError::Config(_))
        ));
    }

    #[test]
    fn robots_skips_editing_pages() {
        let txt = robots("https://homes.example/").unwrap();
        assert_eq!(
            txt,
            "User-agent: *\nAllow: /\nDisallow: /edit-product/\nDisallow: /add-product\n\nSitemap: https://homes.example/sitemap.xml\n"
        );
        assert!(matches!(robots(""), Err(RealtyError::Config(_))));
    }

    #[test]
    fn xml_is_escaped() {
        let mut odd = villa();
        odd.id = "a&b".into();
        let entries = sitemap("https://h.example", &[odd], fixed_now()).unwrap();
        let xml = render_sitemap_xml(&entries);
        assert!(xml.contains("<loc>https://h.example/product/a&amp;b</loc>"));
        assert!(xml.contains("<lastmod>2024-05-01T12:00:00Z</lastmod>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
