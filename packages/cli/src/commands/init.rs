use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use jovibe_editor::{DEFAULT_PROJECT_NAME, DEFAULT_SOURCE_DOC};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Jovibe project...".bright_blue().bold());

    let project_file = PathBuf::from(cwd).join(DEFAULT_PROJECT_NAME);
    if !project_file.exists() {
        fs::write(&project_file, DEFAULT_SOURCE_DOC.trim_start())?;
        println!("  {} Created {}", "✓".green(), DEFAULT_PROJECT_NAME);
    }

    let config_json = serde_json::to_string_pretty(&Config::default())?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", DEFAULT_PROJECT_NAME);
    println!("  2. Run: jovibe suggest {} --line 12 --column 5", DEFAULT_PROJECT_NAME);
    println!("  3. Run: jovibe instrument {} -o preview.html", DEFAULT_PROJECT_NAME);

    Ok(())
}
