// Re-export modules
pub mod config;
pub mod error;
pub mod fetcher;
pub mod generation;
pub mod orchestrator;
pub mod parsers;
pub mod results;
pub mod schema;
pub mod sitemap;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use generation::{CompletionClient, OpenAiClient};
pub use results::{Analysis, ContentType, PageSignal, Suggestion};

use fetcher::PageFetcher;
use orchestrator::MarkupOrchestrator;
use std::io::Read;
use std::path::Path;

/// Reads page source from a file, or from stdin when `path` is `-`
pub fn read_page_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let read_error =
        |e: std::io::Error| Error::InvalidInput(format!("cannot read {}: {}", path.display(), e));

    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(read_error)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}

/// Entry points used by the presentation layer: analyze a site, then
/// generate markup for one of its pages
pub struct Analyzer<C = OpenAiClient> {
    config: AnalyzerConfig,
    fetcher: PageFetcher,
    orchestrator: MarkupOrchestrator<C>,
}

impl Analyzer<OpenAiClient> {
    /// Create an analyzer backed by the configured OpenAI-compatible service
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let client = OpenAiClient::new(&config.llm)?;
        Self::with_client(config, client)
    }
}

impl<C: CompletionClient> Analyzer<C> {
    /// Create an analyzer that talks to the given generation service
    pub fn with_client(config: AnalyzerConfig, client: C) -> Result<Self> {
        let fetcher = PageFetcher::new(&config)?;
        let orchestrator = MarkupOrchestrator::new(client, &config.llm);
        Ok(Self {
            config,
            fetcher,
            orchestrator,
        })
    }

    pub fn orchestrator(&self) -> &MarkupOrchestrator<C> {
        &self.orchestrator
    }

    /// Resolve a sitemap, analyze its first pages and ask for markup suggestions.
    /// A sitemap that cannot be fetched or parsed fails the whole request.
    pub async fn analyze_sitemap(&self, sitemap_url: &str) -> Result<Analysis> {
        let urls = sitemap::resolve_sitemap(&self.fetcher, sitemap_url).await?;
        Ok(self.analyze_urls(&urls).await)
    }

    /// Analyze a list of URLs and ask for markup suggestions.
    /// Pages that fail to load are reported in the result, not as an error.
    pub async fn analyze_urls<S: AsRef<str>>(&self, urls: &[S]) -> Analysis {
        let pages = self.fetch_pages(urls).await;

        let (suggestions, suggestion_error) =
            match self.orchestrator.try_suggest_types(&pages).await {
                Ok(suggestions) => (suggestions, None),
                Err(e) => {
                    ::log::error!("{}", e);
                    (Vec::new(), Some(e.to_string()))
                }
            };

        Analysis {
            pages,
            suggestions,
            suggestion_error,
        }
    }

    /// Fetch and extract pages one at a time, pausing between fetches
    pub async fn fetch_pages<S: AsRef<str>>(&self, urls: &[S]) -> Vec<PageSignal> {
        let urls: Vec<&str> = urls
            .iter()
            .map(|u| u.as_ref().trim())
            .filter(|u| !u.is_empty())
            .take(self.config.page_limit())
            .collect();

        let mut pages = Vec::with_capacity(urls.len());
        for (i, url) in urls.iter().enumerate() {
            if i > 0 && !self.config.pacing_delay().is_zero() {
                tokio::time::sleep(self.config.pacing_delay()).await;
            }
            ::log::info!("Analyzing page {}/{}: {}", i + 1, urls.len(), url);
            pages.push(self.fetch_page(url).await);
        }
        pages
    }

    /// Fetch one page; a failed fetch yields a signal with `error` set
    pub async fn fetch_page(&self, url: &str) -> PageSignal {
        match self.fetcher.fetch(url).await {
            Ok(html) => parsers::extract(&html, url),
            Err(e) => {
                ::log::error!("Failed to fetch {}: {}", url, e);
                PageSignal::failed(url, e)
            }
        }
    }

    /// Fetch `url` and generate JSON-LD for it
    pub async fn generate_for_url(
        &self,
        url: &str,
        schema_type: &str,
        custom_schema_type: Option<&str>,
    ) -> Result<String> {
        let html = self.fetcher.fetch(url.trim()).await.map_err(|e| {
            ::log::error!("Failed to fetch {}: {}", url, e);
            Error::from(e)
        })?;
        let page = parsers::extract(&html, url.trim());
        self.orchestrator
            .generate_markup(&page, schema_type, custom_schema_type)
            .await
    }

    /// Generate JSON-LD for page source supplied directly. Relative image
    /// URLs resolve against `reference_url`, or the configured default when
    /// it is empty.
    pub async fn generate_for_raw_markup(
        &self,
        raw_markup: &str,
        reference_url: &str,
        schema_type: &str,
        custom_schema_type: Option<&str>,
    ) -> Result<String> {
        if raw_markup.trim().is_empty() {
            return Err(Error::InvalidInput("no page source given".to_string()));
        }
        let reference_url = match reference_url.trim() {
            "" => self.config.default_reference_url.as_str(),
            url => url,
        };
        let page = parsers::extract(raw_markup, reference_url);
        self.orchestrator
            .generate_markup(&page, schema_type, custom_schema_type)
            .await
    }
}
