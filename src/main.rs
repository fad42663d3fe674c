use clap::Parser;
use env_logger::Env;
use page_markup::schema::SchemaCatalog;
use page_markup::{Analyzer, AnalyzerConfig, results};
use std::process::ExitCode;

mod args;
use args::{Args, Command, SchemaArgs};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> page_markup::Result<()> {
    let config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::new(),
    }
    .apply_env();

    if let Command::Schemas = args.command {
        return print_json(&SchemaCatalog.menu());
    }

    let analyzer = Analyzer::new(config)?;

    match args.command {
        Command::Sitemap { url } => {
            let analysis = analyzer.analyze_sitemap(&url).await?;
            print_json(&analysis)
        }
        Command::Urls { urls } => {
            let analysis = analyzer.analyze_urls(&urls).await;
            print_json(&analysis)
        }
        Command::Generate { url, schema } => {
            let markup = analyzer
                .generate_for_url(&url, &schema.schema, schema.custom.as_deref())
                .await?;
            print_markup(&markup, &schema);
            Ok(())
        }
        Command::GenerateRaw {
            file,
            reference_url,
            schema,
        } => {
            let source = page_markup::read_page_source(&file)?;
            let markup = analyzer
                .generate_for_raw_markup(
                    &source,
                    &reference_url,
                    &schema.schema,
                    schema.custom.as_deref(),
                )
                .await?;
            print_markup(&markup, &schema);
            Ok(())
        }
        Command::Schemas => Ok(()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> page_markup::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| page_markup::Error::InvalidInput(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn print_markup(markup: &str, schema: &SchemaArgs) {
    if schema.wrap {
        println!("{}", results::wrap_in_script_tag(markup));
    } else {
        println!("{}", markup);
    }
}
