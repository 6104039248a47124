use booksearch::{
    load_collections, prompt_for_algorithm, search, Algorithm, BookSearchConfig, SearchError,
};
use clap::{error::ErrorKind, Parser};
use std::{io, path::PathBuf, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, SearchError>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog of available books (id,language,category per line)
    catalog: PathBuf,

    /// Books to look up in the catalog
    requests: PathBuf,

    /// File receiving the match count [default: found.dat]
    result: Option<PathBuf>,

    /// Search method (l|linear, b|binary, r|recursive); skips the prompt
    #[arg(short = 'm', long)]
    method: Option<String>,

    /// Additional configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            eprintln!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(SearchError::InvalidMethod(method)) => {
            eprintln!("Invalid search method: {}", method);
            eprintln!("{}", usage());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn usage() -> String {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    format!(
        "Usage: {} <newBooks.dat> <request.dat> [<result_file.dat>]",
        program
    )
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Only fails if a global subscriber is already set; logging is optional
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let config = BookSearchConfig::load_from(cli.config.as_deref())?;
    init_logging(&config.log_level);
    debug!("Loaded configuration: {:?}", config);

    // Validate the flag before touching any file
    let method = cli
        .method
        .as_deref()
        .map(str::parse::<Algorithm>)
        .transpose()?
        .or(config.method);
    let parser = config.record_parser()?;
    let result_path = cli.result.unwrap_or(config.result_file);

    let (mut catalog, requests) = load_collections(&cli.catalog, &cli.requests, &parser)?;

    let algorithm = match method {
        Some(algorithm) => algorithm,
        None => {
            let stdin = io::stdin();
            prompt_for_algorithm(stdin.lock(), io::stdout(), io::stderr())?
        }
    };

    let report = search(algorithm, &mut catalog, &requests);
    println!("{}", report.matches);
    println!("CPU time: {:.3} microseconds", report.elapsed_micros());

    report.write_count(&result_path)?;
    Ok(())
}
