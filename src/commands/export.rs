//! @acp:module "Export Command"
//! @acp:summary "Build the generator input document"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use super::session::load_session;
use crate::config::Config;
use crate::export::{
    check_capacity, check_chosen_ids, CapacityWarning, ChosenIdsWarning, ExportBuilder,
    ExportDocument,
};
use crate::taxonomy::SkillTaxonomy;

/// Options for the export command
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Output PDF name
    pub output: String,
    /// Edits file replayed before exporting
    pub edits: Option<PathBuf>,
    /// Specific question ids to include
    pub ids: Vec<String>,
    /// Write the document here instead of printing it
    pub to: Option<PathBuf>,
}

/// Execute the export command
pub async fn execute_export(options: ExportOptions, config: &Config) -> Result<()> {
    let session = load_session(config, options.edits.as_deref()).await?;

    let document = match ExportBuilder::new()
        .with_chosen_ids(&options.ids)
        .build(session.store.current(), &options.output)
    {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            return Err(e.into());
        }
    };

    match &options.to {
        Some(path) => {
            document.write_json(path, config.export.indent)?;
            println!("{} Export written to {}", style("✓").green(), path.display());
            println!("  Output PDF: {}", document.output_path);
            println!("  Questions: {}", document.total_questions);
        }
        None => println!("{}", document.to_json(config.export.indent)?),
    }

    report_generator_checks(&document, &session.taxonomy);
    Ok(())
}

/// Run both generator-side checks on a document and print what they find
pub fn report_generator_checks(document: &ExportDocument, taxonomy: &SkillTaxonomy) {
    let warnings = check_capacity(document, taxonomy);
    print_capacity_warnings(&warnings);
    print_chosen_ids_warning(check_chosen_ids(document, &warnings).as_ref());
}

/// Report skills the generator will skip
pub fn print_capacity_warnings(warnings: &[CapacityWarning]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!(
        "{} {} skill(s) request at least as many questions as exist:",
        style("!").yellow(),
        warnings.len()
    );
    for warning in warnings {
        eprintln!("  {}", warning);
    }
}

/// Report chosen ids that do not fit in the requested total
pub fn print_chosen_ids_warning(warning: Option<&ChosenIdsWarning>) {
    let Some(warning) = warning else {
        return;
    };
    if warning.exceeds_total() {
        eprintln!("{} {}", style("✗").red(), warning);
        eprintln!("  The generator will reject this document; raise the counts or drop ids");
    } else {
        eprintln!("{} {}", style("!").yellow(), warning);
    }
}
