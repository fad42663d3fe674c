use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-markup")]
#[command(about = "Suggests and generates Schema.org JSON-LD markup for web pages")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the pages listed in a sitemap and suggest markup types
    Sitemap {
        /// Sitemap URL
        url: String,
    },
    /// Analyze specific pages and suggest markup types
    Urls {
        /// Page URLs
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Generate JSON-LD for a page URL
    Generate {
        /// Page URL
        url: String,
        #[command(flatten)]
        schema: SchemaArgs,
    },
    /// Generate JSON-LD from page source ("-" reads stdin)
    GenerateRaw {
        /// File containing the page HTML
        file: PathBuf,
        /// URL the source was taken from
        #[arg(long, default_value = "")]
        reference_url: String,
        #[command(flatten)]
        schema: SchemaArgs,
    },
    /// List the supported markup types
    Schemas,
}

#[derive(clap::Args, Debug)]
pub struct SchemaArgs {
    /// Schema.org type to generate (e.g. Product, Article)
    #[arg(short, long)]
    pub schema: String,

    /// Custom Schema.org type, used instead of --schema
    #[arg(long)]
    pub custom: Option<String>,

    /// Wrap the output in a <script type="application/ld+json"> element
    #[arg(long)]
    pub wrap: bool,
}
