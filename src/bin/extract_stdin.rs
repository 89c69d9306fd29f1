//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin [URL] [--categories=a,b | QUERY...]`
//!
//! Pass `-` as URL when the page origin is unknown. Logs go to stderr and
//! follow `RUST_LOG`.

use std::io::{self, Read};

use html_harvest::{extract_with_options, CategorySet, ExtractionFailure, NamedTable, Options, PageMetadata};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Serialize)]
struct Output<'a> {
    metadata: &'a PageMetadata,
    categories: &'a CategorySet,
    failures: &'a [ExtractionFailure],
    tables: Vec<NamedTable>,
}

fn options_from_args(args: &[String]) -> Result<Options, html_harvest::Error> {
    let mut options = Options::default();
    let mut rest = args.iter();

    if let Some(url) = rest.next().filter(|u| u.as_str() != "-") {
        options.url = Some(url.clone());
    }

    let rest: Vec<&String> = rest.collect();
    if let Some(list) = rest.first().and_then(|a| a.strip_prefix("--categories=")) {
        options.categories = CategorySet::parse(list.split(','))?;
    } else if !rest.is_empty() {
        options.query = Some(rest.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(" "));
    }

    Ok(options)
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match options_from_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let result = match extract_with_options(&html, &options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let output = Output {
        metadata: &result.metadata,
        categories: &result.categories,
        failures: &result.failures,
        tables: result.tables().into_iter().collect(),
    };

    match serde_json::to_string(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
