//! @acp:module "Filter Store"
//! @acp:summary "Owns the current filter collection and applies mutation requests"
//! @acp:domain cli
//! @acp:layer logic

use crate::error::QsetError;
use crate::taxonomy::{SkillTaxonomy, Subject};

use super::{FilterAction, FilterCollection, Quantity, QuantityInput};

/// Outcome of replaying a batch of actions
#[derive(Debug, Default)]
pub struct ReplayReport {
    /// Actions that went through
    pub applied: usize,
    /// Rejected actions by position in the batch
    pub rejected: Vec<(usize, QsetError)>,
}

impl ReplayReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Single owner of the current [`FilterCollection`].
///
/// Each request publishes a whole new collection; a reference taken from
/// [`FilterStore::current`] before a request keeps seeing the old state.
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    current: FilterCollection,
}

impl FilterStore {
    pub fn new(filters: FilterCollection) -> Self {
        Self { current: filters }
    }

    pub fn from_taxonomy(taxonomy: &SkillTaxonomy) -> Self {
        Self::new(FilterCollection::from_taxonomy(taxonomy))
    }

    pub fn current(&self) -> &FilterCollection {
        &self.current
    }

    /// Apply one action. On error the current collection is kept.
    pub fn dispatch(&mut self, action: &FilterAction) -> crate::Result<&FilterCollection> {
        let next = action.apply(&self.current)?;
        self.current = next;
        Ok(&self.current)
    }

    /// Apply actions in order, skipping the ones that are rejected
    pub fn replay<'a, I>(&mut self, actions: I) -> ReplayReport
    where
        I: IntoIterator<Item = &'a FilterAction>,
    {
        let mut report = ReplayReport::default();
        for (index, action) in actions.into_iter().enumerate() {
            match self.dispatch(action) {
                Ok(_) => report.applied += 1,
                Err(e) => {
                    tracing::warn!(index, domain = action.domain(), "Rejected edit: {}", e);
                    report.rejected.push((index, e));
                }
            }
        }
        report
    }

    pub fn toggle_domain(&mut self, subject: Subject, domain: &str) -> &FilterCollection {
        self.current = self.current.toggle_domain(subject, domain);
        &self.current
    }

    pub fn toggle_skill(&mut self, subject: Subject, domain: &str, skill: usize) -> &FilterCollection {
        self.current = self.current.toggle_skill(subject, domain, skill);
        &self.current
    }

    /// Set a skill count from raw field input
    pub fn set_skill_qty(
        &mut self,
        subject: Subject,
        domain: &str,
        skill: usize,
        qty: impl Into<QuantityInput>,
    ) -> crate::Result<&FilterCollection> {
        let qty: Quantity = qty.into().normalize()?;
        self.current = self.current.set_skill_qty(subject, domain, skill, qty);
        Ok(&self.current)
    }

    /// Set a bulk domain's aggregate count from raw field input
    pub fn set_domain_qty(
        &mut self,
        subject: Subject,
        domain: &str,
        qty: impl Into<QuantityInput>,
    ) -> crate::Result<&FilterCollection> {
        let qty: Quantity = qty.into().normalize()?;
        self.current = self.current.set_domain_qty(subject, domain, qty);
        Ok(&self.current)
    }
}
