use crate::error::{Error, Result};
use crate::fetcher::PageFetcher;
use crate::parsers;

/// Maximum URLs taken from one sitemap
pub const MAX_SITEMAP_ENTRIES: usize = 50;

/// Fetches a flat `<urlset>` sitemap and returns its first fifty URLs in
/// document order. Sitemap indexes are not followed.
pub async fn resolve_sitemap(fetcher: &PageFetcher, sitemap_url: &str) -> Result<Vec<String>> {
    ::log::info!("Fetching sitemap: {}", sitemap_url);

    let xml = fetcher
        .fetch(sitemap_url)
        .await
        .map_err(|e| sitemap_error(sitemap_url, e.to_string()))?;

    let urls = urls_from_document(&xml).map_err(|reason| sitemap_error(sitemap_url, reason))?;
    ::log::info!("Found {} URLs in sitemap {}", urls.len(), sitemap_url);
    Ok(urls)
}

/// Parses a sitemap document and applies the entry cap
pub fn urls_from_document(xml: &str) -> std::result::Result<Vec<String>, String> {
    let mut urls = parsers::parse_urlset(xml)?;
    urls.truncate(MAX_SITEMAP_ENTRIES);
    Ok(urls)
}

fn sitemap_error(url: &str, reason: String) -> Error {
    ::log::error!("Could not read sitemap {}: {}", url, reason);
    Error::SitemapParse {
        url: url.to_string(),
        reason,
    }
}
