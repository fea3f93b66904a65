use super::{DocumentArgs, OutputFormat};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use jovibe_lexicon::Lexicon;
use jovibe_scanner::TagStack;
use serde_json::json;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub document: DocumentArgs,
}

pub fn classify(args: ClassifyArgs, cwd: &str, lexicon: &Lexicon) -> Result<()> {
    let (text, cursor) = args.document.read(cwd)?;
    let context = jovibe_scanner::classify(&text, cursor);
    let stack = TagStack::scan(&text[..cursor], |name| lexicon.is_void(name));

    match args.document.format {
        OutputFormat::Json => {
            let output = json!({
                "cursor": cursor,
                "context": context.label(),
                "openTags": stack.names(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{} {}", "Context:".bright_white().bold(), context.label().cyan());
            println!("{} {}", "Cursor:".bright_white().bold(), cursor);
            if stack.is_empty() {
                println!("{} {}", "Open tags:".bright_white().bold(), "(none)".dimmed());
            } else {
                println!(
                    "{} {}",
                    "Open tags:".bright_white().bold(),
                    stack.names().join(" > ")
                );
            }
        }
    }
    Ok(())
}
