//! @acp:module "Filter Actions"
//! @acp:summary "Serializable mutation requests and edits-file loading"
//! @acp:domain cli
//! @acp:layer model
//!
//! An edits file is a JSON array of actions replayed over the initial state:
//!
//! ```json
//! [
//!     { "action": "toggleDomain", "subject": "Math", "domain": "Algebra" },
//!     { "action": "toggleSkill", "domain": "Algebra", "skill": 0 },
//!     { "action": "setSkillQty", "domain": "Algebra", "skill": 0, "qty": "4" },
//!     { "action": "setDomainQty", "subject": "RW", "domain": "Craft and Structure", "qty": 10 }
//! ]
//! ```
//!
//! `subject` is optional; without it the first domain with that name wins.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::quantity::QuantityInput;
use super::FilterCollection;
use crate::taxonomy::Subject;

/// One of the four store mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum FilterAction {
    ToggleDomain {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subject: Option<Subject>,
        domain: String,
    },
    ToggleSkill {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subject: Option<Subject>,
        domain: String,
        skill: usize,
    },
    SetSkillQty {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subject: Option<Subject>,
        domain: String,
        skill: usize,
        qty: QuantityInput,
    },
    SetDomainQty {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subject: Option<Subject>,
        domain: String,
        qty: QuantityInput,
    },
}

impl FilterAction {
    /// Name of the targeted domain
    pub fn domain(&self) -> &str {
        match self {
            FilterAction::ToggleDomain { domain, .. }
            | FilterAction::ToggleSkill { domain, .. }
            | FilterAction::SetSkillQty { domain, .. }
            | FilterAction::SetDomainQty { domain, .. } => domain,
        }
    }

    fn subject(&self) -> Option<Subject> {
        match self {
            FilterAction::ToggleDomain { subject, .. }
            | FilterAction::ToggleSkill { subject, .. }
            | FilterAction::SetSkillQty { subject, .. }
            | FilterAction::SetDomainQty { subject, .. } => *subject,
        }
    }

    /// Apply to `filters`, returning the next collection.
    ///
    /// Quantity validation happens before anything changes; a rejected
    /// quantity leaves the caller's collection as it was.
    pub fn apply(&self, filters: &FilterCollection) -> crate::Result<FilterCollection> {
        let domain = self.domain();
        let Some(subject) = self.subject().or_else(|| filters.resolve_subject(domain)) else {
            tracing::debug!(domain, "Ignoring action for unknown domain");
            return Ok(filters.clone());
        };

        let next = match self {
            FilterAction::ToggleDomain { .. } => filters.toggle_domain(subject, domain),
            FilterAction::ToggleSkill { skill, .. } => filters.toggle_skill(subject, domain, *skill),
            FilterAction::SetSkillQty { skill, qty, .. } => {
                let qty = qty.normalize()?;
                filters.set_skill_qty(subject, domain, *skill, qty)
            }
            FilterAction::SetDomainQty { qty, .. } => {
                let qty = qty.normalize()?;
                filters.set_domain_qty(subject, domain, qty)
            }
        };
        Ok(next)
    }
}

/// Parse an edits document
pub fn parse_edits(content: &str) -> crate::Result<Vec<FilterAction>> {
    Ok(serde_json::from_str(content)?)
}

/// Load an edits file
pub fn load_edits(path: &Path) -> Result<Vec<FilterAction>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edits from {:?}", path))?;
    parse_edits(&content).with_context(|| format!("Failed to parse edits from {:?}", path))
}
