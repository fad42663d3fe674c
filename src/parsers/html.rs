use crate::parsers::classify;
use crate::results::{Heading, ImageRef, MAX_HEADINGS_PER_LEVEL, MAX_IMAGES, PageSignal};
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;
use url::Url;

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="description"]"#));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static JSON_LD: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"script[type="application/ld+json"]"#));
static HEADINGS: LazyLock<[Selector; 6]> = LazyLock::new(|| {
    [
        selector("h1"),
        selector("h2"),
        selector("h3"),
        selector("h4"),
        selector("h5"),
        selector("h6"),
    ]
});

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selectors are valid")
}

/// Extracts a [`PageSignal`] from raw HTML served at `source_url`.
///
/// Never fails: anything missing from the document comes back empty.
pub fn extract(html: &str, source_url: &str) -> PageSignal {
    let doc = Html::parse_document(html);

    let signal = PageSignal {
        url: source_url.to_string(),
        title: extract_title(&doc),
        meta_description: extract_meta_description(&doc),
        headings: extract_headings(&doc),
        images: extract_images(&doc, source_url),
        content_type: classify::classify(&doc),
        existing_structured_data: extract_structured_data(&doc),
        error: None,
    };

    ::log::debug!(
        "Extracted {}: {} headings, {} images, {} JSON-LD documents",
        source_url,
        signal.headings.len(),
        signal.images.len(),
        signal.existing_structured_data.len()
    );

    signal
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn extract_title(doc: &Html) -> String {
    doc.select(&TITLE).next().map(element_text).unwrap_or_default()
}

fn extract_meta_description(doc: &Html) -> String {
    doc.select(&META_DESCRIPTION)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

/// Up to five headings per level, levels 1 through 6 in order.
/// Empty headings are kept, with empty text.
fn extract_headings(doc: &Html) -> Vec<Heading> {
    HEADINGS
        .iter()
        .zip(1u8..)
        .flat_map(|(sel, level)| {
            doc.select(sel)
                .take(MAX_HEADINGS_PER_LEVEL)
                .map(move |el| Heading {
                    level,
                    text: element_text(el),
                })
        })
        .collect()
}

/// First ten images that carry a `src`, resolved against the page URL
fn extract_images(doc: &Html, source_url: &str) -> Vec<ImageRef> {
    let base = Url::parse(source_url).ok();

    doc.select(&IMG)
        .filter_map(|img| {
            let attrs = img.value();
            let src = attrs.attr("src").filter(|s| !s.trim().is_empty())?;
            Some(ImageRef {
                src: resolve(base.as_ref(), src.trim()),
                alt: attrs.attr("alt").unwrap_or_default().to_string(),
                title: attrs.attr("title").unwrap_or_default().to_string(),
            })
        })
        .take(MAX_IMAGES)
        .collect()
}

fn resolve(base: Option<&Url>, src: &str) -> String {
    match base.map(|b| b.join(src)) {
        Some(Ok(resolved)) => resolved.to_string(),
        _ => src.to_string(),
    }
}

/// Parses one embedded JSON-LD script body
fn parse_embedded(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(raw.trim())
}

/// Every JSON-LD script that parses; malformed scripts are skipped
fn extract_structured_data(doc: &Html) -> Vec<Value> {
    doc.select(&JSON_LD)
        .map(|script| parse_embedded(&script.text().collect::<String>()))
        .filter_map(|parsed| match parsed {
            Ok(value) => Some(value),
            Err(e) => {
                ::log::debug!("Dropping malformed JSON-LD script: {}", e);
                None
            }
        })
        .collect()
}
