//! @acp:module "Generator Relay"
//! @acp:summary "Hand an export document to the question set generator process"
//! @acp:domain cli
//! @acp:layer io
//!
//! The relay writes the document verbatim to the configured path inside the
//! generator's working directory, then runs the generator with that path as
//! its last argument and waits for it to finish.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::config::{Config, GeneratorConfig};
use crate::error::{QsetError, Result};
use crate::export::ExportDocument;

/// Result of a successful generator run
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Where the document was written
    pub document_path: PathBuf,
    /// Where the generator was asked to put the PDF
    pub pdf_path: PathBuf,
    /// Generator stdout
    pub stdout: String,
}

/// Runs the configured generator on export documents
#[derive(Debug, Clone)]
pub struct GeneratorRelay {
    generator: GeneratorConfig,
    document_name: PathBuf,
    document_path: PathBuf,
    indent: usize,
}

impl GeneratorRelay {
    pub fn new(config: &Config) -> Self {
        Self {
            generator: config.generator.clone(),
            document_name: config.export.document_path.clone(),
            document_path: config.document_path(),
            indent: config.export.indent,
        }
    }

    /// Write the document and run the generator on it
    pub async fn submit(&self, document: &ExportDocument) -> Result<SubmitOutcome> {
        let document_path = self.document_path.clone();
        tokio::fs::write(&document_path, document.to_json(self.indent)?).await?;
        tracing::info!(path = %document_path.display(), "Wrote generator input");

        tracing::debug!(
            program = %self.generator.program,
            args = ?self.generator.args,
            "Running generator"
        );
        let output = Command::new(&self.generator.program)
            .args(&self.generator.args)
            .arg(&self.document_name)
            .current_dir(&self.generator.working_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                QsetError::Generator(format!("failed to start {}: {}", self.generator.program, e))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            let detail = if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            };
            return Err(QsetError::Generator(detail));
        }
        if !stderr.is_empty() {
            tracing::warn!(stderr = %stderr, "Generator wrote to stderr");
            return Err(QsetError::Generator(stderr));
        }

        Ok(SubmitOutcome {
            document_path,
            pdf_path: self.generator.working_dir.join(&document.output_path),
            stdout,
        })
    }
}
