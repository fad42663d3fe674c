use crate::results::ContentType;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// One content-type rule: any of `tags` whose class or id matches `pattern`
struct ClassificationRule {
    content_type: ContentType,
    tags: &'static str,
    pattern: &'static str,
}

/// Evaluated top to bottom, first match wins. A page with both a price block
/// and an address block is a product.
const RULES: [ClassificationRule; 4] = [
    ClassificationRule {
        content_type: ContentType::Product,
        tags: "div, span",
        pattern: r"(?i)price|prezzo",
    },
    ClassificationRule {
        content_type: ContentType::Article,
        tags: "article, div",
        pattern: r"(?i)article|post|blog",
    },
    ClassificationRule {
        content_type: ContentType::Event,
        tags: "div, span",
        pattern: r"(?i)event|evento|data",
    },
    ClassificationRule {
        content_type: ContentType::LocalBusiness,
        tags: "div, span",
        pattern: r"(?i)address|indirizzo|contact",
    },
];

struct CompiledRule {
    content_type: ContentType,
    selector: Selector,
    pattern: Regex,
}

impl CompiledRule {
    fn matches(&self, element: &ElementRef<'_>) -> bool {
        let value = element.value();
        [value.attr("class"), value.attr("id")]
            .into_iter()
            .flatten()
            .any(|attr| self.pattern.is_match(attr))
    }
}

static COMPILED_RULES: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|rule| CompiledRule {
            content_type: rule.content_type,
            selector: Selector::parse(rule.tags).expect("rule selectors are valid"),
            pattern: Regex::new(rule.pattern).expect("rule patterns are valid"),
        })
        .collect()
});

/// Classifies a parsed document; pages matching no rule are plain web pages
pub fn classify(doc: &Html) -> ContentType {
    for rule in COMPILED_RULES.iter() {
        if doc.select(&rule.selector).any(|el| rule.matches(&el)) {
            ::log::debug!("Classified page as {}", rule.content_type);
            return rule.content_type;
        }
    }
    ContentType::Webpage
}
