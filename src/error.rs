use thiserror::Error;

/// Failure retrieving a single URL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl { url, .. }
            | Self::Timeout { url }
            | Self::Status { url, .. }
            | Self::Network { url, .. } => url,
        }
    }
}

/// Failure talking to the generation service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    #[error("no API key configured for the generation service")]
    MissingApiKey,
    #[error("generation service rejected the credentials")]
    Auth,
    #[error("generation service rate limited the request")]
    RateLimited,
    #[error("generation service timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not read sitemap {url}: {reason}")]
    SitemapParse { url: String, reason: String },
    #[error("suggestion generation failed: {0}")]
    SuggestionGeneration(String),
    #[error("markup generation failed: {0}")]
    MarkupGeneration(#[source] CompletionError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "FETCH_ERROR",
            Self::SitemapParse { .. } => "SITEMAP_PARSE_ERROR",
            Self::SuggestionGeneration(_) => "SUGGESTION_GENERATION_ERROR",
            Self::MarkupGeneration(_) => "MARKUP_GENERATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
