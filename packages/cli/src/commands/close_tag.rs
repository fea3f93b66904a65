use super::{resolve, DocumentArgs, OutputFormat};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use jovibe_assist::close_nearest_tag;
use jovibe_lexicon::Lexicon;

#[derive(Args, Debug)]
pub struct CloseTagArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Write the result back to the input file
    #[arg(short, long)]
    pub write: bool,
}

pub fn close_tag(args: CloseTagArgs, cwd: &str, lexicon: &Lexicon) -> Result<()> {
    let (text, cursor) = args.document.read(cwd)?;
    let insertion = close_nearest_tag(&text, cursor, lexicon);

    if args.write {
        let (updated, _) = insertion.apply_with_cursor(&text);
        let path = resolve(cwd, &args.document.input);
        std::fs::write(&path, updated)?;
        println!("  {} Inserted {} into {}", "✓".green(), insertion.text.cyan(), path.display());
        return Ok(());
    }

    match args.document.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&insertion)?),
        OutputFormat::Text => println!("{}", insertion.text),
    }
    Ok(())
}
