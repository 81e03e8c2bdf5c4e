//! @acp:module "Init Command"
//! @acp:summary "Write a starting qset configuration"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `qset init` for project initialization.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to write
    pub config_path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Taxonomy file path
    pub taxonomy: Option<PathBuf>,
    /// Generator working directory
    pub working_dir: Option<PathBuf>,
    /// Skip interactive prompts
    pub yes: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = &options.config_path;

    if config_path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        bail!("{} already exists", config_path.display());
    }

    let mut config = Config::default();

    // Interactive mode if no CLI options and not using --yes
    let interactive = !options.yes && options.taxonomy.is_none() && options.working_dir.is_none();

    if interactive {
        run_interactive_init(&mut config)?;
    } else {
        apply_cli_options(&mut config, &options);
    }

    config.save(config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    if !config.taxonomy.exists() {
        println!(
            "{} Taxonomy {} not found yet",
            style("!").yellow(),
            config.taxonomy.display()
        );
    }

    // Print next steps
    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} to see the domains and skills",
        style("qset show").cyan()
    );
    println!(
        "  2. Run {} to build the generator input",
        style("qset export --output <name>").cyan()
    );

    Ok(())
}

fn run_interactive_init(config: &mut Config) -> Result<()> {
    println!("{} qset Project Setup\n", style("→").cyan());

    let taxonomy: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Skill taxonomy file")
        .default(config.taxonomy.display().to_string())
        .interact_text()?;
    config.taxonomy = PathBuf::from(taxonomy.trim());

    let working_dir: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Generator working directory")
        .default(config.generator.working_dir.display().to_string())
        .interact_text()?;
    config.generator.working_dir = PathBuf::from(working_dir.trim());

    Ok(())
}

fn apply_cli_options(config: &mut Config, options: &InitOptions) {
    if let Some(taxonomy) = &options.taxonomy {
        config.taxonomy = taxonomy.clone();
    }
    if let Some(working_dir) = &options.working_dir {
        config.generator.working_dir = working_dir.clone();
    }
}
