use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};

/// XML namespace of `<urlset>` sitemaps
pub const SITEMAP_NAMESPACE: &[u8] = b"http://www.sitemaps.org/schemas/sitemap/0.9";

fn in_sitemap_namespace(ns: &ResolveResult<'_>) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == SITEMAP_NAMESPACE)
}

/// Parses a `<urlset>` document and returns the text of every `url/loc`, in
/// document order, trimmed. Only elements in the sitemap namespace count.
///
/// Fails on malformed XML, including documents without a root element,
/// documents that end with elements still open and content after the root.
pub fn parse_urlset(xml: &str) -> Result<Vec<String>, String> {
    let mut reader = NsReader::from_str(xml);
    let mut buf = Vec::new();
    let mut urls = Vec::new();

    let mut depth = 0usize;
    let mut seen_root = false;
    let mut root_closed = false;
    // Depth of the open <url> element, if any
    let mut url_depth: Option<usize> = None;
    // Text of the open <loc> element, if any
    let mut loc: Option<String> = None;

    loop {
        match reader.read_resolved_event_into(&mut buf) {
            Ok((_, Event::Start(_) | Event::Empty(_))) if root_closed => {
                return Err("content after the root element".to_string());
            }
            Ok((_, Event::Text(t))) if root_closed && !t.iter().all(u8::is_ascii_whitespace) => {
                return Err("text after the root element".to_string());
            }
            Ok((ns, Event::Start(e))) => {
                seen_root = true;
                depth += 1;
                if in_sitemap_namespace(&ns) {
                    match e.local_name().as_ref() {
                        b"url" => url_depth = Some(depth),
                        b"loc" if url_depth.is_some_and(|d| d + 1 == depth) => {
                            loc = Some(String::new())
                        }
                        _ => {}
                    }
                }
            }
            Ok((_, Event::Empty(_))) => {
                seen_root = true;
                root_closed = depth == 0;
            }
            Ok((_, Event::Text(t))) => {
                if let Some(text) = loc.as_mut() {
                    text.push_str(&t.unescape().map_err(|e| e.to_string())?);
                }
            }
            Ok((_, Event::CData(c))) => {
                if let Some(text) = loc.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Ok((ns, Event::End(e))) => {
                if in_sitemap_namespace(&ns) {
                    match e.local_name().as_ref() {
                        b"loc" => {
                            if let Some(text) = loc.take() {
                                let trimmed = text.trim();
                                if !trimmed.is_empty() {
                                    urls.push(trimmed.to_string());
                                }
                            }
                        }
                        b"url" if url_depth == Some(depth) => url_depth = None,
                        _ => {}
                    }
                }
                depth = depth.saturating_sub(1);
                root_closed = depth == 0;
            }
            Ok((_, Event::Eof)) => break,
            Err(e) => {
                return Err(format!(
                    "malformed XML at position {}: {}",
                    reader.buffer_position(),
                    e
                ));
            }
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err("document has no root element".to_string());
    }
    if depth != 0 {
        return Err("document ended with unclosed elements".to_string());
    }

    Ok(urls)
}
