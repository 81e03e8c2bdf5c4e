//! @acp:module "Session Loading"
//! @acp:summary "Load the taxonomy and replay an optional edits file"
//! @acp:domain cli
//! @acp:layer handler

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::filter::{load_edits, FilterStore};
use crate::taxonomy::SkillTaxonomy;

/// Taxonomy plus the filter state after replaying edits
pub struct Session {
    pub taxonomy: SkillTaxonomy,
    pub store: FilterStore,
}

/// Load the configured taxonomy and apply `edits` if given.
///
/// Rejected edits are reported and skipped.
pub async fn load_session(config: &Config, edits: Option<&Path>) -> Result<Session> {
    let taxonomy = SkillTaxonomy::load(&config.taxonomy)
        .await
        .with_context(|| format!("Failed to load taxonomy from {:?}", config.taxonomy))?;
    let mut store = FilterStore::from_taxonomy(&taxonomy);

    if let Some(path) = edits {
        let actions = load_edits(path)?;
        let report = store.replay(&actions);
        for (index, err) in &report.rejected {
            eprintln!(
                "{} Edit #{} ({}) skipped: {}",
                style("!").yellow(),
                index + 1,
                actions[*index].domain(),
                err
            );
        }
        tracing::debug!(applied = report.applied, rejected = report.rejected.len(), "Replayed edits");
    }

    Ok(Session { taxonomy, store })
}
