use basic_tokenizer::{
    config::ToolConfig,
    formatter::{FormatterVisitor, OutputFormat},
    InternalResult, TokenKind, Tokenizer,
};
use clap::Parser;
use std::{
    io::{self, Read, Write},
    path::PathBuf,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "List the tokens of a text file", long_about = None)]
struct Cli {
    /// File to tokenize, `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Path to config file
    #[arg(short, long, default_value = "basic-tokenizer.json")]
    config: PathBuf,

    /// Output format (text, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Include line and column of each token
    #[arg(long)]
    spans: bool,

    /// Token kind to leave out of the listing, may be repeated
    #[arg(long = "skip", value_name = "KIND")]
    skip_kinds: Vec<TokenKind>,

    /// Leave spaces, tabs and line breaks out of the listing
    #[arg(long)]
    no_whitespace: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(filter: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Reads the input as bytes. Invalid UTF-8 sequences become U+FFFD, which the
/// tokenizer reports as unrecognized characters.
fn read_input(path: &PathBuf) -> InternalResult<String> {
    let bytes = if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        bytes
    } else {
        std::fs::read(path)?
    };

    let input = match String::from_utf8(bytes) {
        Ok(input) => input,
        Err(e) => {
            warn!(
                "input {} is not valid UTF-8, invalid sequences replaced with U+FFFD",
                path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(input)
}

fn run(cli: Cli, mut config: ToolConfig) -> InternalResult<()> {
    if let Some(format) = cli.format {
        config.formatter.format = format;
    }
    if cli.spans {
        config.formatter.include_spans = true;
    }
    if cli.no_whitespace {
        config.formatter.skip_whitespace = true;
    }
    config.formatter.skip_kinds.extend(cli.skip_kinds);
    debug!("config: {:?}", config);

    let input = read_input(&cli.input)?;
    info!(bytes = input.len(), "input loaded");

    let mut tokenizer = Tokenizer::new(&input);
    let listing = FormatterVisitor::new(config.formatter).format_tokens(&mut tokenizer)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(listing.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let config = match ToolConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_filter, cli.verbose);

    if let Err(e) = run(cli, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
