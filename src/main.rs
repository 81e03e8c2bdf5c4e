#![forbid(unsafe_code)]
//! qset Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use qset::commands::{
    execute_edit, execute_export, execute_init, execute_show, execute_submit, execute_validate,
    EditOptions, ExportOptions, InitOptions, ShowOptions, SubmitOptions, ValidateOptions,
};
use qset::config::DEFAULT_CONFIG_FILE;
use qset::{Config, Subject};

#[derive(Parser)]
#[command(name = "qset")]
#[command(about = "Choose question counts per skill and export them for the question set generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the taxonomy file from the config
    #[arg(long, global = true, env = "QSET_TAXONOMY")]
    taxonomy: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starting config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Generator working directory
        #[arg(long)]
        working_dir: Option<PathBuf>,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show domains, skills and counts
    Show {
        /// Edits file to replay first
        #[arg(short, long)]
        edits: Option<PathBuf>,

        /// Only show one subject (rw, math)
        #[arg(short, long)]
        subject: Option<Subject>,

        /// Also list skills of bulk domains
        #[arg(long)]
        all_skills: bool,
    },

    /// Build the export document
    Export {
        /// Output PDF filename (".pdf" is appended when missing)
        #[arg(short, long)]
        output: String,

        /// Edits file to replay first
        #[arg(short, long)]
        edits: Option<PathBuf>,

        /// Question id to always include (can specify multiple)
        #[arg(long = "id")]
        ids: Vec<String>,

        /// Write the document to this file instead of stdout
        #[arg(long)]
        to: Option<PathBuf>,
    },

    /// Export and run the question set generator
    Submit {
        /// Output PDF filename (".pdf" is appended when missing)
        #[arg(short, long)]
        output: String,

        /// Edits file to replay first
        #[arg(short, long)]
        edits: Option<PathBuf>,

        /// Question id to always include (can specify multiple)
        #[arg(long = "id")]
        ids: Vec<String>,
    },

    /// Validate an export document
    Validate {
        /// Document to validate
        file: PathBuf,
    },

    /// Interactive filter form
    Edit {
        /// Edits file to replay first
        #[arg(short, long)]
        edits: Option<PathBuf>,

        /// Question id to always include (can specify multiple)
        #[arg(long = "id")]
        ids: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "qset=debug" } else { "qset=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // init writes the config, so it must not depend on the existing file parsing
    if let Commands::Init { force, working_dir, yes } = cli.command {
        let options = InitOptions {
            config_path: cli.config,
            force,
            taxonomy: cli.taxonomy,
            working_dir,
            yes,
        };
        return execute_init(options);
    }

    let config = Config::resolve(&cli.config, cli.taxonomy)?;

    match cli.command {
        Commands::Init { .. } => unreachable!("handled above"),

        Commands::Show { edits, subject, all_skills } => {
            let options = ShowOptions { edits, subject, all_skills };
            execute_show(options, &config).await?;
        }

        Commands::Export { output, edits, ids, to } => {
            let options = ExportOptions { output, edits, ids, to };
            execute_export(options, &config).await?;
        }

        Commands::Submit { output, edits, ids } => {
            let options = SubmitOptions { output, edits, ids };
            execute_submit(options, &config).await?;
        }

        Commands::Validate { file } => {
            let options = ValidateOptions { file };
            execute_validate(options)?;
        }

        Commands::Edit { edits, ids } => {
            if !config.taxonomy.exists() {
                eprintln!(
                    "{} Taxonomy {} not found",
                    style("✗").red(),
                    config.taxonomy.display()
                );
                eprintln!("  Run 'qset init' or pass --taxonomy <FILE>");
                std::process::exit(1);
            }
            execute_edit(EditOptions { edits, ids }, &config).await?;
        }
    }

    Ok(())
}
