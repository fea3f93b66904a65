use super::{DocumentArgs, OutputFormat};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use jovibe_caret::caret_position;

#[derive(Args, Debug)]
pub struct CaretArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Vertical scroll offset of the surface
    #[arg(long, default_value_t = 0.0)]
    pub scroll_top: f64,

    /// Horizontal scroll offset of the surface
    #[arg(long, default_value_t = 0.0)]
    pub scroll_left: f64,
}

pub fn caret(args: CaretArgs, cwd: &str, config: &Config) -> Result<()> {
    let (text, cursor) = args.document.read(cwd)?;
    let mut surface = config.surface.clone();
    let position = caret_position(&mut surface, &text, cursor)?.in_viewport(args.scroll_top, args.scroll_left);

    match args.document.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&position)?),
        OutputFormat::Text => {
            println!("{} {}px", "Top:".bright_white().bold(), position.top);
            println!("{} {}px", "Left:".bright_white().bold(), position.left);
            println!("{} {}px", "Line height:".bright_white().bold(), position.line_height);
        }
    }
    Ok(())
}
