use super::resolve;
use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InstrumentArgs {
    /// Input .html file
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn instrument(args: InstrumentArgs, cwd: &str) -> Result<()> {
    let input = resolve(cwd, &args.input);
    let document = std::fs::read_to_string(&input)
        .with_context(|| format!("Cannot read {}", input.display()))?;
    let instrumented = jovibe_preview::instrument(&document);

    match args.output {
        Some(output) => {
            let output = resolve(cwd, &output);
            std::fs::write(&output, instrumented)?;
            println!("  {} Wrote {}", "✓".green(), output.display());
        }
        None => print!("{}", instrumented),
    }
    Ok(())
}
