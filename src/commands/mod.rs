//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod edit;
pub mod export;
pub mod init;
pub mod output;
pub mod session;
pub mod show;
pub mod submit;
pub mod validate;

pub use edit::{execute_edit, EditOptions};
pub use export::{
    execute_export, print_capacity_warnings, print_chosen_ids_warning, report_generator_checks,
    ExportOptions,
};
pub use init::{execute_init, InitOptions};
pub use output::TreeRenderer;
pub use session::{load_session, Session};
pub use show::{execute_show, ShowOptions};
pub use submit::{execute_submit, SubmitOptions};
pub use validate::{execute_validate, ValidateOptions};
