//! @acp:module "Export Builder"
//! @acp:summary "Flatten filter state into the generator's input document"
//! @acp:domain cli
//! @acp:layer logic
//! @acp:stability stable
//!
//! # Export
//!
//! The export document is rebuilt from scratch on every request:
//!
//! 1. domains with a zero quantity are left out entirely;
//! 2. expanded domains emit each enabled skill with its own count;
//! 3. bulk domains spread their total over all skills (see [`crate::allocation`]);
//! 4. every emitted domain adds its quantity to `totalQuestions`.
//!
//! ```json
//! {
//!     "outputPath": "algebra-drill.pdf",
//!     "totalQuestions": 10,
//!     "RW": {},
//!     "Math": { "Algebra": { "A": 3, "B": 3, "C": 4 } },
//!     "chosenIds": []
//! }
//! ```

mod capacity;

pub use capacity::{check_capacity, check_chosen_ids, CapacityWarning, ChosenIdsWarning};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::allocation;
use crate::error::{QsetError, Result};
use crate::filter::{DomainFilter, FilterCollection, Quantity};
use crate::ordered::OrderedMap;
use crate::taxonomy::Subject;

/// Default indentation of the written document
pub const DEFAULT_INDENT: usize = 4;

const PDF_SUFFIX: &str = ".pdf";

/// Skill name → count
pub type SkillAllocation = OrderedMap<Quantity>;

/// Domain name → per-skill counts
pub type SubjectAllocation = OrderedMap<SkillAllocation>;

/// Document handed to the question set generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub output_path: String,
    pub total_questions: u64,
    #[serde(rename = "RW")]
    pub rw: SubjectAllocation,
    #[serde(rename = "Math")]
    pub math: SubjectAllocation,
    /// Question ids always included, on top of the skill allocation
    #[serde(default)]
    pub chosen_ids: Vec<String>,
}

impl ExportDocument {
    /// Section of the document for a subject
    pub fn subject(&self, subject: Subject) -> &SubjectAllocation {
        match subject {
            Subject::ReadingWriting => &self.rw,
            Subject::Math => &self.math,
        }
    }

    fn subject_mut(&mut self, subject: Subject) -> &mut SubjectAllocation {
        match subject {
            Subject::ReadingWriting => &mut self.rw,
            Subject::Math => &mut self.math,
        }
    }

    /// Sum of every emitted skill count
    pub fn emitted_total(&self) -> u64 {
        Subject::all()
            .iter()
            .flat_map(|s| self.subject(*s).values())
            .flat_map(|skills| skills.values())
            .map(|qty| u64::from(*qty))
            .sum()
    }

    /// Pretty JSON with `indent` spaces per level
    pub fn to_json(&self, indent: usize) -> Result<String> {
        let indent = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever writes UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Write the document to a file
    pub fn write_json<P: AsRef<Path>>(&self, path: P, indent: usize) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json(indent)?)?;
        tracing::info!(path = %path.display(), total = self.total_questions, "Wrote export document");
        Ok(())
    }
}

/// Trim the user's output path and make sure it ends in `.pdf`
pub fn normalize_output_path(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QsetError::EmptyOutputPath);
    }
    if trimmed.ends_with(PDF_SUFFIX) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{}{}", trimmed, PDF_SUFFIX))
    }
}

/// Builds [`ExportDocument`]s from filter state
#[derive(Debug, Clone, Default)]
pub struct ExportBuilder {
    chosen_ids: Vec<String>,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add specific question ids. Ids are trimmed; blanks and repeats are dropped.
    pub fn with_chosen_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            let id = id.as_ref().trim();
            if !id.is_empty() && !self.chosen_ids.iter().any(|existing| existing == id) {
                self.chosen_ids.push(id.to_string());
            }
        }
        self
    }

    /// Build the export document.
    ///
    /// Fails only when the output path is blank; nothing is built in that case.
    pub fn build(&self, filters: &FilterCollection, output_path: &str) -> Result<ExportDocument> {
        let output_path = normalize_output_path(output_path)?;

        let mut document = ExportDocument {
            output_path,
            total_questions: 0,
            rw: SubjectAllocation::new(),
            math: SubjectAllocation::new(),
            chosen_ids: self.chosen_ids.clone(),
        };

        for domain in filters.domains() {
            if domain.qty == 0 {
                continue;
            }

            let (qty, skills) = allocate_domain(domain);
            document.subject_mut(domain.subject).insert(domain.name.clone(), skills);
            document.total_questions += u64::from(qty);
        }

        tracing::debug!(
            total = document.total_questions,
            rw_domains = document.rw.len(),
            math_domains = document.math.len(),
            "Built export document"
        );
        Ok(document)
    }
}

/// Resolve one non-zero domain into its quantity and per-skill counts
fn allocate_domain(domain: &DomainFilter) -> (Quantity, SkillAllocation) {
    if domain.is_expanded() {
        // Sum-rule refresh on a local copy; the collection itself stays untouched
        let qty = domain.enabled_skill_total();
        let skills = domain
            .skills
            .iter()
            .filter(|s| s.enabled)
            .map(|s| (s.name.clone(), s.qty))
            .collect();
        (qty, skills)
    } else {
        let skills = allocation::distribute_over(domain.qty, &domain.skills)
            .into_iter()
            .map(|(name, share)| (name.to_string(), share))
            .collect();
        (domain.qty, skills)
    }
}
