#![forbid(unsafe_code)]

//! @acp:module "qset Library"
//! @acp:summary "Question-quantity configuration and export for the SSQB generator"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # qset
//!
//! Choose how many questions to draw from each skill of the SAT skill
//! taxonomy, and export the result as the JSON document the question set
//! generator consumes.
//!
//! ## Features
//!
//! - **Filter state**: enable domains and skills, assign counts, every edit
//!   producing a fresh consistent state
//! - **Allocation**: exact even distribution of bulk domain totals
//! - **Export**: normalized document with totals, plus capacity and chosen-id warnings
//! - **Relay**: write the document and run the generator
//!
//! ## Example
//!
//! ```rust,no_run
//! use qset::{ExportBuilder, FilterStore, SkillTaxonomy, Subject};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let taxonomy = SkillTaxonomy::load("skill-tree.json").await?;
//!     let mut store = FilterStore::from_taxonomy(&taxonomy);
//!
//!     store.set_domain_qty(Subject::Math, "Algebra", "10")?;
//!
//!     let document = ExportBuilder::new().build(store.current(), "algebra")?;
//!     document.write_json("input.json", 4)?;
//!
//!     Ok(())
//! }
//! ```

pub mod allocation;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod ordered;
pub mod relay;
pub mod schema;
pub mod taxonomy;

// Re-exports
pub use allocation::{distribute_evenly, distribute_over, sum_enabled};
pub use config::Config;
pub use error::{QsetError, Result};
pub use export::{
    check_capacity, check_chosen_ids, normalize_output_path, CapacityWarning, ChosenIdsWarning,
    ExportBuilder, ExportDocument,
};
pub use filter::{
    DomainFilter, FilterAction, FilterCollection, FilterStore, Quantity, QuantityInput,
    ReplayReport, SkillEntry,
};
pub use ordered::OrderedMap;
pub use relay::{GeneratorRelay, SubmitOutcome};
pub use taxonomy::{SkillTaxonomy, SkillWeight, Subject};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
