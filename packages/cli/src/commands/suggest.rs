use super::{DocumentArgs, OutputFormat};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use jovibe_assist::{quick_actions, Assistance};
use jovibe_lexicon::Lexicon;
use jovibe_scanner::Context;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// List the quick-insert palette for the context instead of completions
    #[arg(short, long)]
    pub quick: bool,
}

pub fn suggest(args: SuggestArgs, cwd: &str, lexicon: &Lexicon) -> Result<()> {
    let (text, cursor) = args.document.read(cwd)?;
    let context = jovibe_scanner::classify(&text, cursor);

    if args.quick {
        return print_quick_actions(context, args.document.format);
    }

    let assistance = jovibe_assist::suggest(&text, cursor, context, lexicon);

    if args.document.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&assistance)?);
        return Ok(());
    }

    println!("{} {}", "Context:".bright_white().bold(), context.label().cyan());
    match &assistance {
        Assistance::ColorPicker(request) => {
            println!("{} {}", "Color picker for".bright_white().bold(), request.partial.yellow());
            for swatch in request.palette_matches().take(10) {
                println!("  {}", swatch);
            }
        }
        Assistance::Suggestions { items, .. } if items.is_empty() => {
            println!("{}", "No suggestions".dimmed());
        }
        Assistance::Suggestions { items, match_start } => {
            println!(
                "{} {}",
                "Replacing:".bright_white().bold(),
                format!("{:?}", &text[*match_start..cursor]).dimmed()
            );
            for item in items {
                println!("  {} {}", item.label.green(), format!("{:?}", item.insert_text).dimmed());
            }
        }
    }
    Ok(())
}

fn print_quick_actions(context: Context, format: OutputFormat) -> Result<()> {
    print!("{}", render_quick_actions(context, format)?);
    Ok(())
}

fn render_quick_actions(context: Context, format: OutputFormat) -> Result<String> {
    let actions = quick_actions(context);

    if format == OutputFormat::Json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(actions)?));
    }

    let mut out = format!(
        "{} {}\n{}\n",
        "Context:".bright_white().bold(),
        context.label().cyan(),
        "Quick insert:".bright_white().bold()
    );
    for action in actions {
        out.push_str(&format!("  {} {}\n", action.label.green(), format!("{:?}", action.value).dimmed()));
    }
    Ok(out)
}
