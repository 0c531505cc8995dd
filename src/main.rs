//! MoMo SMS Filter CLI
//!
//! Reads an inbox export (CSV with `body,date,address` columns) and prints the
//! mobile-money transaction messages, newest first.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- inbox.csv > transactions.json
//! cargo run -- inbox.csv --format csv --sender "MTN MoMo" --keyword "cash in"
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use clap::{Parser, ValueEnum};
use log::info;
use momo_sms_filter::{
    CsvInboxSource, CsvSink, FilterConfig, JsonSink, MessageSource, Result, ResultSink,
    TransactionMessageFilter,
};
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "momo-sms-filter")]
#[command(about = "Extract mobile-money transaction messages from an SMS inbox export", long_about = None)]
struct Cli {
    /// Inbox export with body, date and address columns
    #[arg(value_name = "INBOX_CSV")]
    input: PathBuf,

    /// JSON config file with `sender` and `keywords`
    #[arg(long, short, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Sender identifier, matched exactly (overrides the config file)
    #[arg(long, value_name = "ID")]
    sender: Option<String>,

    /// Body keyword, matched ignoring case; repeat to give several (replaces configured keywords)
    #[arg(long = "keyword", short, value_name = "TEXT")]
    keywords: Vec<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => FilterConfig::from_file(path)?,
        None => FilterConfig::default(),
    };
    if let Some(sender) = cli.sender {
        config.sender = sender;
    }
    if !cli.keywords.is_empty() {
        config.keywords = cli.keywords;
    }

    let filter = TransactionMessageFilter::new(config)?;
    let inbox = CsvInboxSource::open(&cli.input)?.read_inbox_messages()?;
    let transactions = filter.filter(&inbox);
    info!(
        "Found {} {} transactions out of {} messages",
        transactions.len(),
        filter.sender(),
        inbox.len()
    );

    let stdout = io::stdout();
    let handle = stdout.lock();
    match cli.format {
        OutputFormat::Json if cli.pretty => JsonSink::new(handle).pretty().accept(&transactions)?,
        OutputFormat::Json => JsonSink::new(handle).accept(&transactions)?,
        OutputFormat::Csv => CsvSink::new(handle).accept(&transactions)?,
    }

    Ok(())
}
