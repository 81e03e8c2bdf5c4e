//! @acp:module "Output Formatting"
//! @acp:summary "Tree rendering of filter state for terminal output"
//! @acp:domain cli
//! @acp:layer presentation

use console::style;

use crate::filter::{DomainFilter, FilterCollection};
use crate::taxonomy::Subject;

/// Renders filter state as a box-drawing tree, one subject per block
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    /// Show skills of bulk-mode domains too
    pub show_collapsed: bool,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, filters: &FilterCollection, only: Option<Subject>) -> String {
        let mut out = String::new();
        for subject in Subject::all() {
            if only.is_some_and(|s| s != *subject) {
                continue;
            }
            let domains: Vec<&DomainFilter> = filters.by_subject(*subject).collect();
            out.push_str(&format!("{}\n", style(subject.name()).bold()));
            for (i, domain) in domains.iter().enumerate() {
                let last = i + 1 == domains.len();
                self.render_domain(&mut out, domain, last);
            }
            out.push('\n');
        }
        out.push_str(&format!("Total: {} questions\n", filters.total_qty()));
        out
    }

    fn render_domain(&self, out: &mut String, domain: &DomainFilter, last: bool) {
        let branch = if last { "└── " } else { "├── " };
        let mode = if domain.is_expanded() {
            style("expanded").cyan()
        } else {
            style("bulk").dim()
        };
        out.push_str(&format!("{}{} [{}] {}\n", branch, domain.name, mode, domain.qty));

        if !domain.is_expanded() && !self.show_collapsed {
            return;
        }

        let indent = if last { "    " } else { "│   " };
        for (i, skill) in domain.skills.iter().enumerate() {
            let skill_branch = if i + 1 == domain.skills.len() { "└── " } else { "├── " };
            let marker = if skill.enabled {
                style("+").green()
            } else {
                style("-").red()
            };
            let qty = if skill.enabled {
                skill.qty.to_string()
            } else {
                style("off").dim().to_string()
            };
            out.push_str(&format!(
                "{}{}{} {}. {} {}\n",
                indent, skill_branch, marker, i, skill.name, qty
            ));
        }
    }
}
