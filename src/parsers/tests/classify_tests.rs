use crate::parsers::{classify, extract};
use crate::results::ContentType;
use scraper::Html;

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_html(html: &str) -> ContentType {
        classify(&Html::parse_document(html))
    }

    #[test]
    fn test_price_marker_is_product() {
        assert_eq!(
            classify_html(r#"<div class="product-price">€ 12</div>"#),
            ContentType::Product
        );
        assert_eq!(
            classify_html(r#"<span class="Prezzo">12</span>"#),
            ContentType::Product
        );
    }

    #[test]
    fn test_id_marker_counts() {
        assert_eq!(
            classify_html(r#"<div id="shop-address">Main St</div>"#),
            ContentType::LocalBusiness
        );
    }

    #[test]
    fn test_article_markers() {
        assert_eq!(
            classify_html(r#"<article class="blog-entry">text</article>"#),
            ContentType::Article
        );
        assert_eq!(
            classify_html(r#"<div class="post">text</div>"#),
            ContentType::Article
        );
    }

    #[test]
    fn test_event_markers() {
        assert_eq!(
            classify_html(r#"<span class="event-date">May 3</span>"#),
            ContentType::Event
        );
    }

    #[test]
    fn test_address_only_is_local_business() {
        assert_eq!(
            classify_html(r#"<div class="contact-info">Call us</div>"#),
            ContentType::LocalBusiness
        );
    }

    #[test]
    fn test_price_beats_address() {
        let html = r#"<div class="address">Main St 1</div><span class="price">9.99</span>"#;
        assert_eq!(classify_html(html), ContentType::Product);
    }

    #[test]
    fn test_article_beats_event() {
        let html = r#"<div class="event">Gig</div><article class="blog">Review</article>"#;
        assert_eq!(classify_html(html), ContentType::Article);
    }

    #[test]
    fn test_marker_on_other_tags_is_ignored() {
        // Only div/span carry price markers
        assert_eq!(
            classify_html(r#"<p class="price">9</p><section class="address">x</section>"#),
            ContentType::Webpage
        );
    }

    #[test]
    fn test_no_markers_is_webpage() {
        assert_eq!(
            classify_html("<div class=\"hero\"><span>Hello</span></div>"),
            ContentType::Webpage
        );
    }

    #[test]
    fn test_extract_uses_classification() {
        let page = extract(r#"<div class="price">5</div>"#, "https://x.test/");
        assert_eq!(page.content_type, ContentType::Product);
    }
}
