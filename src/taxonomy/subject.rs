//! @acp:module "Subject"
//! @acp:summary "The two test subjects and their taxonomy/export keys"
//! @acp:domain cli
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Test subject a domain belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "RW", alias = "Reading and Writing", alias = "ReadingWriting")]
    ReadingWriting,
    #[serde(rename = "Math")]
    Math,
}

impl Subject {
    /// Both subjects, in collection order
    pub fn all() -> &'static [Subject] {
        &[Subject::ReadingWriting, Subject::Math]
    }

    /// Top-level key in the taxonomy file
    pub fn taxonomy_key(&self) -> &'static str {
        match self {
            Subject::ReadingWriting => "Reading and Writing",
            Subject::Math => "Math",
        }
    }

    /// Key of the subject's section in the export document
    pub fn export_key(&self) -> &'static str {
        match self {
            Subject::ReadingWriting => "RW",
            Subject::Math => "Math",
        }
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        self.taxonomy_key()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rw" | "reading-writing" | "reading and writing" | "readingwriting" => {
                Ok(Subject::ReadingWriting)
            }
            "math" => Ok(Subject::Math),
            _ => Err(format!("Unknown subject: {} (expected rw or math)", s)),
        }
    }
}
