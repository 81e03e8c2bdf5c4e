//! @acp:module "Submit Command"
//! @acp:summary "Export and run the question set generator"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use super::export::report_generator_checks;
use super::session::load_session;
use crate::config::Config;
use crate::export::ExportBuilder;
use crate::relay::GeneratorRelay;

/// Options for the submit command
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// Output PDF name
    pub output: String,
    /// Edits file replayed before exporting
    pub edits: Option<PathBuf>,
    /// Specific question ids to include
    pub ids: Vec<String>,
}

/// Execute the submit command
pub async fn execute_submit(options: SubmitOptions, config: &Config) -> Result<()> {
    let session = load_session(config, options.edits.as_deref()).await?;

    let document = ExportBuilder::new()
        .with_chosen_ids(&options.ids)
        .build(session.store.current(), &options.output)?;
    report_generator_checks(&document, &session.taxonomy);

    let relay = GeneratorRelay::new(config);
    println!(
        "{} Running {} on {}...",
        style("→").cyan(),
        config.generator.program,
        config.document_path().display()
    );

    match relay.submit(&document).await {
        Ok(outcome) => {
            let stdout = outcome.stdout.trim();
            if !stdout.is_empty() {
                println!("{}", stdout);
            }
            println!(
                "{} Generated {} ({} questions)",
                style("✓").green(),
                outcome.pdf_path.display(),
                document.total_questions
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} Generator failed: {}", style("✗").red(), e);
            Err(e.into())
        }
    }
}
