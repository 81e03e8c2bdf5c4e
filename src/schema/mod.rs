//! @acp:module "Schema Validation"
//! @acp:summary "Validate export documents against the bundled JSON Schema"
//! @acp:domain cli
//! @acp:layer validation
//!
//! Validation runs in two passes: the structural JSON Schema first, then
//! the invariants a schema cannot express (totals add up, no empty
//! domains, a normalized output path).

use serde_json::Value;

use crate::error::{QsetError, Result};
use crate::export::{normalize_output_path, ExportDocument};
use crate::taxonomy::Subject;

/// Export document schema, bundled at compile time
pub const EXPORT_SCHEMA: &str = include_str!("../../schemas/v1/export.schema.json");

/// Structural problems reported by the JSON Schema
pub fn schema_errors(instance: &Value) -> Result<Vec<String>> {
    let schema: Value = serde_json::from_str(EXPORT_SCHEMA)?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| QsetError::SchemaValidation(format!("invalid bundled schema: {}", e)))?;

    Ok(validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect())
}

/// Invariants of a well-formed export
pub fn semantic_errors(document: &ExportDocument) -> Vec<String> {
    let mut errors = Vec::new();

    match normalize_output_path(&document.output_path) {
        Ok(normalized) if normalized == document.output_path => {}
        _ => errors.push(format!(
            "outputPath {:?} is not a trimmed path ending in .pdf",
            document.output_path
        )),
    }

    let emitted = document.emitted_total();
    if emitted != document.total_questions {
        errors.push(format!(
            "totalQuestions is {} but the skill counts add up to {}",
            document.total_questions, emitted
        ));
    }

    for subject in Subject::all() {
        for (domain, skills) in document.subject(*subject).iter() {
            if skills.values().all(|qty| *qty == 0) {
                errors.push(format!(
                    "{} domain '{}' is present but requests no questions",
                    subject.export_key(),
                    domain
                ));
            }
        }
    }

    errors
}

/// Validate export document text, returning the parsed document
pub fn validate_export(content: &str) -> Result<ExportDocument> {
    let instance: Value = serde_json::from_str(content)?;
    let structural = schema_errors(&instance)?;
    if !structural.is_empty() {
        return Err(QsetError::SchemaValidation(structural.join("; ")));
    }

    let document = ExportDocument::from_json(content)?;
    let semantic = semantic_errors(&document);
    if !semantic.is_empty() {
        return Err(QsetError::SchemaValidation(semantic.join("; ")));
    }

    Ok(document)
}
