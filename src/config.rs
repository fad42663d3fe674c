use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// Upper bound on pages fetched in one batch, whatever the configuration says.
pub const MAX_PAGES_PER_BATCH: usize = 10;

const MIN_TEMPERATURE: f32 = 0.2;
const MAX_TEMPERATURE: f32 = 0.3;

/// Configuration for the page analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// User-Agent header sent with every fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout for page and sitemap fetches
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Delay between successive page fetches in one batch
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,

    /// Maximum number of pages fetched per batch (capped at 10)
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// URL attributed to raw markup when the caller gives none
    #[serde(default = "default_reference_url")]
    pub default_reference_url: String,

    /// Generation service settings
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Configuration for the OpenAI-compatible generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the chat completions API
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API key (usually supplied through OPENAI_API_KEY)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "default_suggestion_temperature")]
    pub suggestion_temperature: f32,

    #[serde(default = "default_markup_temperature")]
    pub markup_temperature: f32,
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_pacing_delay_ms() -> u64 {
    500
}

fn default_max_pages() -> usize {
    MAX_PAGES_PER_BATCH
}

fn default_reference_url() -> String {
    "https://example.com".to_string()
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4".to_string()
}

fn default_suggestion_temperature() -> f32 {
    0.3
}

fn default_markup_temperature() -> f32 {
    0.2
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            api_key: None,
            suggestion_temperature: default_suggestion_temperature(),
            markup_temperature: default_markup_temperature(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
            pacing_delay_ms: default_pacing_delay_ms(),
            max_pages: default_max_pages(),
            default_reference_url: default_reference_url(),
            llm: LlmConfig::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let read_error =
            |e: std::io::Error| Error::Config(format!("cannot read {}: {}", path.display(), e));
        let mut file = File::open(path).map_err(read_error)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(read_error)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Override generation service settings from OPENAI_* environment variables
    pub fn apply_env(mut self) -> Self {
        if let Some(key) = non_empty_env("OPENAI_API_KEY") {
            self.llm.api_key = Some(key);
        }
        if let Some(base_url) = non_empty_env("OPENAI_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(model) = non_empty_env("OPENAI_MODEL") {
            self.llm.model = model;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }

    /// Pages per batch, never above [`MAX_PAGES_PER_BATCH`]
    pub fn page_limit(&self) -> usize {
        self.max_pages.min(MAX_PAGES_PER_BATCH)
    }
}

impl LlmConfig {
    pub fn suggestion_temperature(&self) -> f32 {
        clamp_temperature(self.suggestion_temperature)
    }

    pub fn markup_temperature(&self) -> f32 {
        clamp_temperature(self.markup_temperature)
    }
}

fn clamp_temperature(value: f32) -> f32 {
    if value.is_nan() {
        return MIN_TEMPERATURE;
    }
    value.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
