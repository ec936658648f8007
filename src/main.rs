use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use circuitc::{
    display_error,
    errors::errors::LoadError,
    lexer::{lexer::tokenize, registry::Registry},
};
use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Tokenize a .circuit source file", long_about = None)]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// JSON recognizer definitions to use instead of the built-in set
    #[arg(short, long)]
    tokens: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{0:?} does not end with .circuit")]
    NotACircuit(PathBuf),
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load recognizers: {0}")]
    Load(#[from] LoadError),
}

/// Returns whether any lexical error was reported.
fn run(cli: &Cli) -> Result<bool, CliError> {
    if cli.file.extension().and_then(|ext| ext.to_str()) != Some("circuit") {
        return Err(CliError::NotACircuit(cli.file.clone()));
    }

    let registry = match &cli.tokens {
        Some(path) => Registry::from_path(path)?,
        None => Registry::builtin()?,
    };
    info!("{} recognizers loaded", registry.len());

    let source = read_to_string(&cli.file).map_err(|source| CliError::Read {
        path: cli.file.clone(),
        source,
    })?;
    debug!("read {} bytes from {:?}", source.len(), cli.file);

    let (tokens, errors) = tokenize(&source, &registry);

    for token in &tokens {
        println!("{}", token);
    }

    let file_name = cli.file.to_string_lossy();
    for error in &errors {
        display_error(error, &file_name, &source);
    }

    Ok(!errors.is_empty())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
