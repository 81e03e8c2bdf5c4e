//! @acp:module "Skill Taxonomy"
//! @acp:summary "Subject → Domain → Skill tree loaded once at startup"
//! @acp:domain cli
//! @acp:layer io
//!
//! The taxonomy is the static input the filter state is derived from:
//!
//! ```json
//! {
//!     "Reading and Writing": { "Craft and Structure": { "Words in Context": 152 } },
//!     "Math": { "Algebra": { "Linear equations in one variable": [40, 31, 12] } }
//! }
//! ```
//!
//! Skill weights are question counts, either a single total or an
//! `[easy, medium, hard]` split. Allocation never reads them; they only
//! feed the capacity check at export time.

mod subject;

pub use subject::Subject;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QsetError, Result};
use crate::ordered::OrderedMap;

/// Domains of one subject, each mapping skill name → weight
pub type SubjectTree = OrderedMap<OrderedMap<SkillWeight>>;

/// Weight attached to a skill leaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillWeight {
    /// Total number of questions available
    Count(u64),
    /// Questions available per difficulty: easy, medium, hard
    ByDifficulty([u64; 3]),
    /// Any other value; enumerated but carries no capacity
    Other(serde_json::Value),
}

impl SkillWeight {
    /// Number of questions available for the skill, when known
    pub fn available(&self) -> Option<u64> {
        match self {
            SkillWeight::Count(n) => Some(*n),
            SkillWeight::ByDifficulty(levels) => Some(levels.iter().sum()),
            SkillWeight::Other(_) => None,
        }
    }
}

/// Two-subject skill taxonomy with file key order preserved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillTaxonomy {
    #[serde(rename = "Reading and Writing")]
    pub reading_writing: SubjectTree,
    #[serde(rename = "Math")]
    pub math: SubjectTree,
}

impl SkillTaxonomy {
    /// Parse a taxonomy from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let taxonomy: SkillTaxonomy = serde_json::from_str(content)?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Load the taxonomy file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let taxonomy = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            domains = taxonomy.domain_count(),
            skills = taxonomy.skill_count(),
            "Loaded skill taxonomy"
        );
        Ok(taxonomy)
    }

    /// Domains of a subject, in file order
    pub fn subject(&self, subject: Subject) -> &SubjectTree {
        match subject {
            Subject::ReadingWriting => &self.reading_writing,
            Subject::Math => &self.math,
        }
    }

    /// Look up the weight of a single skill
    pub fn skill_weight(&self, subject: Subject, domain: &str, skill: &str) -> Option<&SkillWeight> {
        self.subject(subject).get(domain)?.get(skill)
    }

    pub fn domain_count(&self) -> usize {
        self.reading_writing.len() + self.math.len()
    }

    pub fn skill_count(&self) -> usize {
        Subject::all()
            .iter()
            .flat_map(|s| self.subject(*s).values())
            .map(|skills| skills.len())
            .sum()
    }

    // Distribution needs at least one skill per domain
    fn validate(&self) -> Result<()> {
        for subject in Subject::all() {
            for (domain, skills) in self.subject(*subject).iter() {
                if skills.is_empty() {
                    return Err(QsetError::InvalidTaxonomy(format!(
                        "domain '{}' in {} has no skills",
                        domain,
                        subject.name()
                    )));
                }
            }
        }
        Ok(())
    }
}
