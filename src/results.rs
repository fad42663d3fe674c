use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Maximum headings kept per level (h1..h6)
pub const MAX_HEADINGS_PER_LEVEL: usize = 5;

/// Maximum images kept per page
pub const MAX_IMAGES: usize = 10;

/// Coarse classification of what a page is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Product,
    Article,
    Event,
    LocalBusiness,
    Webpage,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Product => "product",
            ContentType::Article => "article",
            ContentType::Event => "event",
            ContentType::LocalBusiness => "local_business",
            ContentType::Webpage => "webpage",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heading found on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1 through 6
    pub level: u8,
    pub text: String,
}

/// An image reference with its `src` made absolute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    pub title: String,
}

/// Normalized description of one page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSignal {
    /// URL of the page
    pub url: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub meta_description: String,

    /// Headings grouped by level, in document order within a level
    #[serde(default)]
    pub headings: Vec<Heading>,

    #[serde(default)]
    pub images: Vec<ImageRef>,

    pub content_type: ContentType,

    /// JSON-LD documents already embedded in the page
    #[serde(default)]
    pub existing_structured_data: Vec<Value>,

    /// Set when the page could not be retrieved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageSignal {
    /// A signal for a page that could not be retrieved; only `url` is meaningful
    pub fn failed(url: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            meta_description: String::new(),
            headings: Vec::new(),
            images: Vec::new(),
            content_type: ContentType::Webpage,
            existing_structured_data: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// Whether this page may be used in a suggestion or generation prompt
    pub fn is_usable(&self) -> bool {
        self.error.is_none()
    }

    pub fn headings_at(&self, level: u8) -> impl Iterator<Item = &Heading> {
        self.headings.iter().filter(move |h| h.level == level)
    }

    /// Schema.org `@type` values declared by the embedded JSON-LD, in order, without repeats
    pub fn existing_schema_types(&self) -> Vec<String> {
        let mut types = Vec::new();
        for doc in &self.existing_structured_data {
            collect_types(doc, &mut types);
        }
        types
    }
}

fn collect_types(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| collect_types(item, out)),
        Value::Object(map) => {
            match map.get("@type") {
                Some(Value::String(t)) => push_unique(out, t),
                Some(Value::Array(ts)) => ts
                    .iter()
                    .filter_map(Value::as_str)
                    .for_each(|t| push_unique(out, t)),
                _ => {}
            }
            if let Some(graph) = map.get("@graph") {
                collect_types(graph, out);
            }
        }
        _ => {}
    }
}

fn push_unique(out: &mut Vec<String>, value: &str) {
    if !out.iter().any(|existing| existing == value) {
        out.push(value.to_string());
    }
}

/// Relative importance of a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl From<Option<String>> for Priority {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("high") => Priority::High,
            Some("low") => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

/// Treats an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A markup type recommended by the generation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub schema_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Outcome of analyzing a batch of pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub pages: Vec<PageSignal>,
    pub suggestions: Vec<Suggestion>,
    /// Why `suggestions` is empty, when it is empty because generation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_error: Option<String>,
}

/// Wraps generated JSON-LD in the script element pasted into a page's `<head>`
pub fn wrap_in_script_tag(markup: &str) -> String {
    format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        markup.trim()
    )
}
