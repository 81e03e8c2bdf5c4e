//! @acp:module "Filter State"
//! @acp:summary "Per-domain enable flags and question counts derived from the taxonomy"
//! @acp:domain cli
//! @acp:layer model
//! @acp:stability stable
//!
//! A [`FilterCollection`] holds one [`DomainFilter`] per taxonomy domain,
//! Reading and Writing domains first, then Math. Transitions never mutate a
//! collection in place: each returns a new collection, and the caller
//! replaces the old one.
//!
//! A domain is either in *expanded* mode (`enabled`), where its quantity is
//! the sum of its enabled skills, or in *bulk* mode, where its quantity is a
//! single user-supplied aggregate.

mod action;
mod quantity;
mod store;

pub use action::{load_edits, parse_edits, FilterAction};
pub use quantity::{normalize_number, parse_quantity, Quantity, QuantityInput};
pub use store::{FilterStore, ReplayReport};

use serde::{Deserialize, Serialize};

use crate::allocation;
use crate::taxonomy::{SkillTaxonomy, Subject};

/// A skill row inside a domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Load-time id, unique across both subjects
    pub id: u32,
    pub name: String,
    pub enabled: bool,
    pub qty: Quantity,
}

/// A domain row with its skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFilter {
    pub name: String,
    pub subject: Subject,
    /// Expanded mode: per-skill counts are chosen directly
    pub enabled: bool,
    pub qty: Quantity,
    pub skills: Vec<SkillEntry>,
}

impl DomainFilter {
    fn new(name: &str, subject: Subject, skills: Vec<SkillEntry>) -> Self {
        Self {
            name: name.to_string(),
            subject,
            enabled: false,
            qty: 0,
            skills,
        }
    }

    /// Whether the domain is in expanded mode
    pub fn is_expanded(&self) -> bool {
        self.enabled
    }

    /// Live sum of the enabled skills' quantities
    pub fn enabled_skill_total(&self) -> Quantity {
        allocation::sum_enabled(&self.skills)
    }

    /// Apply the sum rule
    pub fn recompute_qty(&mut self) {
        self.qty = self.enabled_skill_total();
    }
}

/// Every domain of both subjects, in taxonomy order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCollection {
    domains: Vec<DomainFilter>,
}

impl FilterCollection {
    /// Build the initial state: everything disabled, every quantity zero
    pub fn from_taxonomy(taxonomy: &SkillTaxonomy) -> Self {
        let mut next_id: u32 = 0;
        let mut domains = Vec::with_capacity(taxonomy.domain_count());

        for subject in Subject::all() {
            for (domain_name, skills) in taxonomy.subject(*subject).iter() {
                let skills = skills
                    .keys()
                    .map(|skill_name| {
                        let entry = SkillEntry {
                            id: next_id,
                            name: skill_name.to_string(),
                            enabled: false,
                            qty: 0,
                        };
                        next_id += 1;
                        entry
                    })
                    .collect();
                domains.push(DomainFilter::new(domain_name, *subject, skills));
            }
        }

        Self { domains }
    }

    pub fn domains(&self) -> &[DomainFilter] {
        &self.domains
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Domains of one subject, in collection order
    pub fn by_subject(&self, subject: Subject) -> impl Iterator<Item = &DomainFilter> {
        self.domains.iter().filter(move |d| d.subject == subject)
    }

    /// Look up a domain by its `(subject, name)` key
    pub fn find(&self, subject: Subject, name: &str) -> Option<&DomainFilter> {
        self.domains
            .iter()
            .find(|d| d.subject == subject && d.name == name)
    }

    /// Subject of the first domain with this name
    pub fn resolve_subject(&self, name: &str) -> Option<Subject> {
        self.domains.iter().find(|d| d.name == name).map(|d| d.subject)
    }

    /// Sum of every domain quantity
    pub fn total_qty(&self) -> u64 {
        self.domains.iter().map(|d| u64::from(d.qty)).sum()
    }

    /// Flip expanded mode and re-derive the quantity from current skill values
    pub fn toggle_domain(&self, subject: Subject, name: &str) -> Self {
        self.with_domain(subject, name, |domain| {
            domain.enabled = !domain.enabled;
            domain.recompute_qty();
        })
    }

    /// Flip a skill on or off
    pub fn toggle_skill(&self, subject: Subject, name: &str, skill_index: usize) -> Self {
        self.with_skill(subject, name, skill_index, |skill| {
            skill.enabled = !skill.enabled;
        })
    }

    /// Set a skill's count
    pub fn set_skill_qty(
        &self,
        subject: Subject,
        name: &str,
        skill_index: usize,
        qty: Quantity,
    ) -> Self {
        self.with_skill(subject, name, skill_index, |skill| {
            skill.qty = qty;
        })
    }

    /// Set the aggregate count of a bulk-mode domain
    pub fn set_domain_qty(&self, subject: Subject, name: &str, qty: Quantity) -> Self {
        self.with_domain(subject, name, |domain| {
            if domain.enabled {
                tracing::debug!(
                    domain = %domain.name,
                    "Ignoring aggregate quantity for expanded domain"
                );
                return;
            }
            domain.qty = qty;
        })
    }

    /// Copy of the collection with one domain replaced by `update(domain)`
    fn with_domain<F>(&self, subject: Subject, name: &str, update: F) -> Self
    where
        F: FnOnce(&mut DomainFilter),
    {
        let Some(index) = self.position(subject, name) else {
            tracing::debug!(%subject, domain = name, "Ignoring edit for unknown domain");
            return self.clone();
        };

        let mut domains = self.domains.clone();
        update(&mut domains[index]);
        Self { domains }
    }

    // Expanded domains re-apply the sum rule after any skill change
    fn with_skill<F>(&self, subject: Subject, name: &str, skill_index: usize, update: F) -> Self
    where
        F: FnOnce(&mut SkillEntry),
    {
        self.with_domain(subject, name, |domain| {
            let Some(skill) = domain.skills.get_mut(skill_index) else {
                tracing::debug!(
                    domain = %domain.name,
                    skill_index,
                    "Ignoring edit for out-of-range skill"
                );
                return;
            };
            update(skill);
            if domain.enabled {
                domain.recompute_qty();
            }
        })
    }

    fn position(&self, subject: Subject, name: &str) -> Option<usize> {
        self.domains
            .iter()
            .position(|d| d.subject == subject && d.name == name)
    }
}
