mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    caret, classify, close_tag, init, instrument, suggest, CaretArgs, ClassifyArgs, CloseTagArgs,
    InitArgs, InstrumentArgs, SuggestArgs,
};
use config::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Jovibe CLI - inspect the editor's view of an HTML document
#[derive(Parser, Debug)]
#[command(name = "jovibe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a starter document and config
    Init(InitArgs),

    /// Show the language context and open tags at the cursor
    Classify(ClassifyArgs),

    /// List completions at the cursor
    Suggest(SuggestArgs),

    /// Close the innermost open tag at the cursor
    CloseTag(CloseTagArgs),

    /// Compute the caret's pixel position on a monospace surface
    Caret(CaretArgs),

    /// Inject the console bridge into a document for previewing
    Instrument(InstrumentArgs),
}

fn run(command: Command, cwd: &str) -> anyhow::Result<()> {
    let config = Config::load(cwd)?;
    debug!(cwd, lexicon = ?config.lexicon, "Loaded config");

    match command {
        Command::Init(args) => init(args, cwd),
        Command::Classify(args) => classify(args, cwd, &config.load_lexicon(cwd)?),
        Command::Suggest(args) => suggest(args, cwd, &config.load_lexicon(cwd)?),
        Command::CloseTag(args) => close_tag(args, cwd, &config.load_lexicon(cwd)?),
        Command::Caret(args) => caret(args, cwd, &config),
        Command::Instrument(args) => instrument(args, cwd),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| run(cli.command, &cwd.display().to_string()));

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
