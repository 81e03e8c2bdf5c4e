//! @acp:module "Validate Command"
//! @acp:summary "Validate an export document against the schema and allocation invariants"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::schema;

/// Options for the validate command
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// File to validate
    pub file: PathBuf,
}

/// Execute the validate command
pub fn execute_validate(options: ValidateOptions) -> Result<()> {
    let content = std::fs::read_to_string(&options.file)
        .with_context(|| format!("Failed to read {:?}", options.file))?;

    match schema::validate_export(&content) {
        Ok(document) => {
            println!(
                "{} {} is valid",
                style("✓").green(),
                options.file.display()
            );
            println!("  Output PDF: {}", document.output_path);
            println!(
                "  Questions: {} ({} RW domains, {} Math domains)",
                document.total_questions,
                document.rw.len(),
                document.math.len()
            );
            if !document.chosen_ids.is_empty() {
                println!("  Chosen ids: {}", document.chosen_ids.len());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            Err(e.into())
        }
    }
}
