use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use config::BuildConfig;

use crate::output;

#[derive(Args)]
pub struct InitArgs {
    #[arg(short, long, help = "Directory to initialize (defaults to current)")]
    pub path: Option<PathBuf>,

    #[arg(long, help = "Force overwrite existing weft.toml")]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let target_dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let config_file = target_dir.join("weft.toml");

    if config_file.exists() && !args.force {
        output::warn(&format!(
            "Configuration already exists at {}",
            config_file.display()
        ));
        output::info("Use --force to overwrite");
        return Ok(());
    }

    let config = BuildConfig::default();
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;

    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    fs::write(&config_file, rendered)
        .with_context(|| format!("Failed to write {}", config_file.display()))?;

    println!(
        "{} Initialized Weft at {}",
        "✓".green().bold(),
        config_file.display()
    );

    println!("\n{}", "Declared configuration:".bold());
    output::kv("content", &format!("{} glob(s)", config.content.len()));
    for (category, tokens) in &config.theme.extend {
        for (token, value) in tokens {
            output::kv(&format!("theme.{category}.{token}"), value);
        }
    }
    for plugin in &config.plugins {
        output::kv("plugin", plugin.as_str());
    }

    println!(
        "\n{}",
        "Run 'weft check' to validate the configuration.".dimmed()
    );

    Ok(())
}
