use anyhow::{Context, Error};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;

use hearing_qa::config::{FetchConfig, ParserConfig};
use hearing_qa::{analyze, fetch, report};

#[derive(Parser, Debug)]
#[command(
    name = "hearing_qa",
    about = "Pair senators' questions with the witness's answers in a hearing transcript"
)]
struct CliArgs {
    /// Read the transcript from a saved file instead of downloading it
    #[arg(long)]
    file: Option<PathBuf>,

    /// Transcript URL
    #[arg(long)]
    url: Option<String>,

    /// Download timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Text right before the section to analyze
    #[arg(long)]
    start_marker: Option<String>,

    /// Text right after the section to analyze
    #[arg(long)]
    end_marker: Option<String>,

    /// Speaker whose turns are answers
    #[arg(long)]
    answerer: Option<String>,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

impl CliArgs {
    fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::default();
        if let Some(marker) = &self.start_marker {
            config.start_marker = marker.clone();
        }
        if let Some(marker) = &self.end_marker {
            config.end_marker = marker.clone();
        }
        if let Some(name) = &self.answerer {
            config.answerer_name = name.clone();
        }
        config
    }

    fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig::default();
        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        config
    }
}

fn main() -> Result<(), Error> {
    // $ cargo run -- --file ./hearing.htm
    let args = CliArgs::parse();

    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let document = match &args.file {
        Some(path) => fetch::read_document(path)?,
        None => fetch::fetch_document(&args.fetch_config())
            .context("Unable to download the hearing transcript")?,
    };

    let analysis = analyze(&document, &args.parser_config())
        .context("Unable to parse the hearing transcript")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        report::render_json(&mut out, &analysis)?;
    } else {
        report::render_text(&mut out, &analysis)?;
    }
    out.flush()?;

    Ok(())
}
