//! @acp:module "Show Command"
//! @acp:summary "Print the filter state as a tree"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;

use super::output::TreeRenderer;
use super::session::load_session;
use crate::config::Config;
use crate::taxonomy::Subject;

/// Options for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Edits file replayed before showing
    pub edits: Option<PathBuf>,
    /// Only show one subject
    pub subject: Option<Subject>,
    /// Also list skills of bulk-mode domains
    pub all_skills: bool,
}

/// Execute the show command
pub async fn execute_show(options: ShowOptions, config: &Config) -> Result<()> {
    let session = load_session(config, options.edits.as_deref()).await?;

    let renderer = TreeRenderer {
        show_collapsed: options.all_skills,
    };
    print!("{}", renderer.render(session.store.current(), options.subject));

    Ok(())
}
