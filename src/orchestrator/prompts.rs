use crate::results::PageSignal;
use crate::schema::SchemaFields;
use std::fmt::Write;

/// Headings quoted per page in the suggestion summary
pub const MAX_SUMMARY_HEADINGS: usize = 3;

const SUGGESTION_SHAPE: &str = r#"{
    "suggestions": [
        {
            "schema_type": "Product",
            "pages": ["url1", "url2"],
            "reason": "Why this markup fits these pages",
            "priority": "high|medium|low"
        }
    ]
}"#;

/// Short description of one page for the suggestion prompt
pub fn page_summary(page: &PageSignal) -> String {
    let headings: Vec<&str> = page
        .headings
        .iter()
        .take(MAX_SUMMARY_HEADINGS)
        .map(|h| h.text.as_str())
        .collect();

    let mut summary = format!(
        "URL: {}\nTitle: {}\nType: {}\nHeadings: {}",
        page.url,
        page.title,
        page.content_type,
        serde_json::to_string(&headings).unwrap_or_default()
    );

    let existing = page.existing_schema_types();
    if !existing.is_empty() {
        let _ = write!(summary, "\nExisting structured data: {}", existing.join(", "));
    }
    summary
}

pub fn suggestion_prompt(pages: &[&PageSignal]) -> String {
    let summaries: Vec<String> = pages.iter().map(|p| page_summary(p)).collect();

    format!(
        "Analyze these web pages and suggest the best Schema.org structured data types to implement:\n\n\
         {}\n\n\
         Give specific suggestions for each kind of page identified, considering:\n\
         1. The structured data types that are most effective for SEO\n\
         2. Eligibility for Google rich results\n\
         3. Schema.org best practices\n\n\
         Reply with JSON only, using exactly this structure:\n\
         {}",
        summaries.join("\n\n"),
        SUGGESTION_SHAPE
    )
}

pub fn markup_prompt(page: &PageSignal, schema_type: &str, fields: Option<SchemaFields>) -> String {
    let mut prompt = format!(
        "Generate SEO-optimized JSON-LD structured data using the Schema.org type \"{}\" for this page:\n\n\
         URL: {}\nTitle: {}\nMeta description: {}\n",
        schema_type, page.url, page.title, page.meta_description
    );

    prompt.push_str("Headings:\n");
    if page.headings.is_empty() {
        prompt.push_str("(none)\n");
    }
    for heading in &page.headings {
        let _ = writeln!(prompt, "- h{}: {}", heading.level, heading.text);
    }

    prompt.push_str("Images:\n");
    if page.images.is_empty() {
        prompt.push_str("(none)\n");
    }
    for image in &page.images {
        let _ = writeln!(
            prompt,
            "- {} (alt: \"{}\", title: \"{}\")",
            image.src, image.alt, image.title
        );
    }

    let required = fields
        .map(|f| format!(": {}", f.required.join(", ")))
        .unwrap_or_default();
    let recommended = fields
        .map(|f| format!(" ({})", f.recommended.join(", ")))
        .unwrap_or_default();

    let _ = write!(
        prompt,
        "\nRequirements:\n\
         1. Use the JSON-LD format\n\
         2. Include every property required for {schema_type}{required}\n\
         3. Add recommended properties{recommended} whenever they can be derived from the page\n\
         4. Optimize for Google rich results eligibility\n\
         5. Use absolute URLs for images\n\
         6. Follow Schema.org best practices\n\n\
         Produce complete, valid JSON-LD."
    );
    prompt
}
