//! Static Responses
//!
//! Fixed bodies served next to the lookup API: the browser landing page and the
//! crawler/favicon files.

use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};

pub const INDEX_HTML: &str = include_str!("index.html");

pub const ROBOTS_TXT: &str = "User-agent: *
Allow: /
Sitemap: https://enellerett.se/sitemap.xml";

pub const SITEMAP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
    <url>
        <loc>https://enellerett.se/</loc>
        <lastmod>2025-06-08</lastmod>
        <changefreq>weekly</changefreq>
        <priority>1.0</priority>
    </url>
</urlset>"#;

pub const FAVICON_SVG: &str = r##"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#667eea;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#764ba2;stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="32" height="32" rx="6" fill="url(#grad)"/>
  <text x="16" y="23" font-family="Arial, sans-serif" font-size="20" font-weight="bold" text-anchor="middle" fill="white">e</text>
</svg>"##;

pub fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn handle_robots() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/plain")], ROBOTS_TXT)
}

pub async fn handle_sitemap() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/xml")], SITEMAP_XML)
}

pub async fn handle_favicon() -> impl IntoResponse {
    ([(CONTENT_TYPE, "image/svg+xml")], FAVICON_SVG)
}
