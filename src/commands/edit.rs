//! @acp:module "Edit Command"
//! @acp:summary "Interactive form for enabling domains and skills and setting counts"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `qset edit`: the terminal version of the filter form. Every
//! change goes through the [`FilterStore`], so the state shown after each
//! step is always a freshly recomputed collection.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::export::report_generator_checks;
use super::output::TreeRenderer;
use super::session::load_session;
use crate::config::Config;
use crate::export::ExportBuilder;
use crate::filter::{DomainFilter, FilterStore};
use crate::taxonomy::{SkillTaxonomy, Subject};

/// Options for the edit command
#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    /// Edits file replayed before the form opens
    pub edits: Option<PathBuf>,
    /// Specific question ids to include in the export
    pub ids: Vec<String>,
}

enum DomainChoice {
    ToggleMode,
    SetQty,
    ToggleSkill(usize),
    SetSkillQty(usize),
    Back,
}

/// Execute the edit command
pub async fn execute_edit(options: EditOptions, config: &Config) -> Result<()> {
    let session = load_session(config, options.edits.as_deref()).await?;
    let taxonomy = session.taxonomy;
    let mut store = session.store;
    let theme = ColorfulTheme::default();

    if store.current().is_empty() {
        println!("{} Taxonomy has no domains", style("!").yellow());
        return Ok(());
    }

    loop {
        let domains = store.current().domains();
        let mut items: Vec<String> = domains.iter().map(domain_label).collect();
        items.push(style("Export").green().to_string());
        items.push("Quit".to_string());

        let selection = Select::with_theme(&theme)
            .with_prompt(format!("Domains ({} questions)", store.current().total_qty()))
            .items(&items)
            .default(0)
            .interact()?;

        if selection == domains.len() {
            export_interactive(&store, &taxonomy, config, &options.ids, &theme)?;
        } else if selection == domains.len() + 1 {
            return Ok(());
        } else {
            let domain = &domains[selection];
            let key = (domain.subject, domain.name.clone());
            edit_domain(&mut store, key, &theme)?;
        }
    }
}

fn domain_label(domain: &DomainFilter) -> String {
    let mode = if domain.is_expanded() { "▾" } else { "▸" };
    format!(
        "{} {:<4} {} ({})",
        mode,
        domain.subject.export_key(),
        domain.name,
        domain.qty
    )
}

fn edit_domain(store: &mut FilterStore, key: (Subject, String), theme: &ColorfulTheme) -> Result<()> {
    let (subject, name) = key;

    loop {
        let Some(domain) = store.current().find(subject, &name) else {
            return Ok(());
        };
        print!("{}", TreeRenderer::new().render(store.current(), Some(subject)));

        let mut choices = vec![DomainChoice::ToggleMode];
        let mut items = vec![if domain.is_expanded() {
            "Collapse (set one total)".to_string()
        } else {
            "Expand (choose per skill)".to_string()
        }];

        if domain.is_expanded() {
            for (i, skill) in domain.skills.iter().enumerate() {
                let verb = if skill.enabled { "Remove" } else { "Add" };
                choices.push(DomainChoice::ToggleSkill(i));
                items.push(format!("{} {}", verb, skill.name));
                if skill.enabled {
                    choices.push(DomainChoice::SetSkillQty(i));
                    items.push(format!("Set {} ({})", skill.name, skill.qty));
                }
            }
        } else {
            choices.push(DomainChoice::SetQty);
            items.push(format!("Set total ({})", domain.qty));
        }
        choices.push(DomainChoice::Back);
        items.push("Back".to_string());

        let selection = Select::with_theme(theme)
            .with_prompt(format!("{} / {}", subject, name))
            .items(&items)
            .default(0)
            .interact()?;

        match choices[selection] {
            DomainChoice::ToggleMode => {
                store.toggle_domain(subject, &name);
            }
            DomainChoice::ToggleSkill(i) => {
                store.toggle_skill(subject, &name, i);
            }
            DomainChoice::SetQty => {
                let raw = prompt_quantity(theme, "Questions for this domain")?;
                if let Err(e) = store.set_domain_qty(subject, &name, raw.as_str()) {
                    eprintln!("{} {}", style("✗").red(), e);
                }
            }
            DomainChoice::SetSkillQty(i) => {
                let raw = prompt_quantity(theme, "Questions for this skill")?;
                if let Err(e) = store.set_skill_qty(subject, &name, i, raw.as_str()) {
                    eprintln!("{} {}", style("✗").red(), e);
                }
            }
            DomainChoice::Back => return Ok(()),
        }
    }
}

fn prompt_quantity(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()?)
}

fn export_interactive(
    store: &FilterStore,
    taxonomy: &SkillTaxonomy,
    config: &Config,
    ids: &[String],
    theme: &ColorfulTheme,
) -> Result<()> {
    let output: String = Input::with_theme(theme)
        .with_prompt("Output PDF filename")
        .allow_empty(true)
        .interact_text()?;

    let document = match ExportBuilder::new()
        .with_chosen_ids(ids)
        .build(store.current(), &output)
    {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            return Ok(());
        }
    };

    println!("{}", document.to_json(config.export.indent)?);
    report_generator_checks(&document, taxonomy);

    let document_path = config.document_path();
    let write = Confirm::with_theme(theme)
        .with_prompt(format!("Write to {}?", document_path.display()))
        .default(true)
        .interact()?;
    if write {
        document.write_json(&document_path, config.export.indent)?;
        println!("{} Export written to {}", style("✓").green(), document_path.display());
    }

    Ok(())
}
