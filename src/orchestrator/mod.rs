pub mod prompts;


use serde::Deserialize;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::generation::CompletionClient;
use crate::results::{PageSignal, Suggestion};
use crate::schema::SchemaCatalog;

/// Pages summarized in one suggestion prompt
pub const MAX_PAGES_PER_PROMPT: usize = 5;

#[derive(Deserialize)]
struct SuggestionEnvelope {
    suggestions: Vec<Suggestion>,
}

/// Turns page signals into generation-service prompts and normalizes the replies
pub struct MarkupOrchestrator<C> {
    client: C,
    catalog: SchemaCatalog,
    suggestion_temperature: f32,
    markup_temperature: f32,
}

impl<C: CompletionClient> MarkupOrchestrator<C> {
    pub fn new(client: C, llm: &LlmConfig) -> Self {
        Self {
            client,
            catalog: SchemaCatalog,
            suggestion_temperature: llm.suggestion_temperature(),
            markup_temperature: llm.markup_temperature(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Asks the service which markup types fit `pages`.
    ///
    /// Failed pages are dropped before the first five are taken. With no usable
    /// page the service is not contacted and the result is empty.
    pub async fn try_suggest_types(&self, pages: &[PageSignal]) -> Result<Vec<Suggestion>> {
        let usable: Vec<&PageSignal> = pages
            .iter()
            .filter(|p| p.is_usable())
            .take(MAX_PAGES_PER_PROMPT)
            .collect();

        if usable.is_empty() {
            ::log::info!("No usable pages, skipping suggestion request");
            return Ok(Vec::new());
        }

        ::log::info!("Requesting markup suggestions for {} pages", usable.len());
        let prompt = prompts::suggestion_prompt(&usable);
        let reply = self
            .client
            .complete(&prompt, self.suggestion_temperature)
            .await
            .map_err(|e| Error::SuggestionGeneration(e.to_string()))?;

        let envelope: SuggestionEnvelope = serde_json::from_str(reply.trim())
            .map_err(|e| Error::SuggestionGeneration(format!("unexpected reply shape: {}", e)))?;

        ::log::info!("Received {} suggestions", envelope.suggestions.len());
        Ok(envelope.suggestions)
    }

    /// Like [`try_suggest_types`](Self::try_suggest_types), but a failure is
    /// logged and degrades to no suggestions
    pub async fn suggest_types(&self, pages: &[PageSignal]) -> Vec<Suggestion> {
        match self.try_suggest_types(pages).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                ::log::error!("{}", e);
                Vec::new()
            }
        }
    }

    /// Requests JSON-LD for `page`. A non-empty `custom_schema_type` replaces
    /// `schema_type`. The reply is returned exactly as received.
    pub async fn generate_markup(
        &self,
        page: &PageSignal,
        schema_type: &str,
        custom_schema_type: Option<&str>,
    ) -> Result<String> {
        if let Some(reason) = &page.error {
            return Err(Error::InvalidInput(format!(
                "page {} could not be retrieved: {}",
                page.url, reason
            )));
        }

        let effective = effective_schema_type(schema_type, custom_schema_type)
            .ok_or_else(|| Error::InvalidInput("no schema type selected".to_string()))?;

        ::log::info!("Generating {} markup for {}", effective, page.url);
        let prompt = prompts::markup_prompt(page, effective, self.catalog.fields_for(effective));

        self.client
            .complete(&prompt, self.markup_temperature)
            .await
            .map_err(|e| {
                ::log::error!("Markup generation for {} failed: {}", page.url, e);
                Error::MarkupGeneration(e)
            })
    }
}

/// The custom type when one is given, otherwise the selected type
pub fn effective_schema_type<'a>(
    schema_type: &'a str,
    custom: Option<&'a str>,
) -> Option<&'a str> {
    custom
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .or_else(|| Some(schema_type.trim()).filter(|s| !s.is_empty()))
}
