//! @acp:module "Capacity Check"
//! @acp:summary "Compare requested skill counts with the questions the taxonomy says exist"
//! @acp:domain cli
//! @acp:layer analysis
//!
//! The generator skips a skill outright when the request is not strictly
//! below the number of matching questions, so a request equal to the
//! available count is already flagged. The check only reports; it never
//! changes the allocation.
//!
//! Chosen ids count toward `totalQuestions` on the generator side: the
//! random draw fills the per-skill requests, then every chosen id the draw
//! did not already pick is added, and the result must stay within the total.

use std::fmt;

use super::ExportDocument;
use crate::filter::Quantity;
use crate::taxonomy::{SkillTaxonomy, Subject};

/// A skill whose request the generator will not be able to satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityWarning {
    pub subject: Subject,
    pub domain: String,
    pub skill: String,
    pub requested: Quantity,
    pub available: u64,
}

impl fmt::Display for CapacityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}: requested {} but only {} available",
            self.subject, self.domain, self.skill, self.requested, self.available
        )
    }
}

/// Chosen ids that can push the generated set past `totalQuestions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenIdsWarning {
    pub chosen: usize,
    pub total: u64,
    /// Questions left over after the draw fills every satisfiable skill
    pub headroom: u64,
}

impl ChosenIdsWarning {
    /// More ids than requested questions; the generator fails regardless of the draw
    pub fn exceeds_total(&self) -> bool {
        self.chosen as u64 > self.total
    }
}

impl fmt::Display for ChosenIdsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exceeds_total() {
            write!(
                f,
                "{} chosen id(s) but only {} question(s) requested",
                self.chosen, self.total
            )
        } else {
            write!(
                f,
                "{} chosen id(s) but only {} of {} question(s) left after the random draw; \
                 ids the draw does not pick push the set past the total",
                self.chosen, self.headroom, self.total
            )
        }
    }
}

/// Check that the chosen ids fit in `totalQuestions`.
///
/// Skills listed in `capacity` are skipped by the generator, so their
/// requests are the only room left for chosen ids.
pub fn check_chosen_ids(
    document: &ExportDocument,
    capacity: &[CapacityWarning],
) -> Option<ChosenIdsWarning> {
    let chosen = document.chosen_ids.len();
    if chosen == 0 {
        return None;
    }

    let skipped: u64 = capacity.iter().map(|w| u64::from(w.requested)).sum();
    let headroom = skipped.min(document.total_questions);
    if chosen as u64 <= headroom {
        return None;
    }

    let warning = ChosenIdsWarning {
        chosen,
        total: document.total_questions,
        headroom,
    };
    tracing::warn!("{}", warning);
    Some(warning)
}

/// Find every non-zero request that meets or exceeds the skill's capacity
pub fn check_capacity(document: &ExportDocument, taxonomy: &SkillTaxonomy) -> Vec<CapacityWarning> {
    let mut warnings = Vec::new();

    for subject in Subject::all() {
        for (domain, skills) in document.subject(*subject).iter() {
            for (skill, requested) in skills.iter() {
                if *requested == 0 {
                    continue;
                }
                let Some(available) = taxonomy
                    .skill_weight(*subject, domain, skill)
                    .and_then(|w| w.available())
                else {
                    continue;
                };

                if u64::from(*requested) >= available {
                    let warning = CapacityWarning {
                        subject: *subject,
                        domain: domain.to_string(),
                        skill: skill.to_string(),
                        requested: *requested,
                        available,
                    };
                    tracing::warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportBuilder;
    use crate::filter::FilterCollection;

    #[test]
    fn test_flags_requests_at_or_over_capacity() {
        let taxonomy = SkillTaxonomy::from_json(
            r#"{
                "Reading and Writing": {},
                "Math": {"Algebra": {"A": 2, "B": [1, 1, 1], "C": 50}}
            }"#,
        )
        .unwrap();
        let filters = FilterCollection::from_taxonomy(&taxonomy).set_domain_qty(
            Subject::Math,
            "Algebra",
            9,
        );
        // A=3, B=3, C=3
        let doc = ExportBuilder::new().build(&filters, "cap").unwrap();

        let warnings = check_capacity(&doc, &taxonomy);
        let flagged: Vec<_> = warnings.iter().map(|w| w.skill.as_str()).collect();
        assert_eq!(flagged, vec!["A", "B"]);
        assert_eq!(warnings[1].available, 3);
    }

    #[test]
    fn test_zero_requests_and_unknown_weights_ignored() {
        let taxonomy = SkillTaxonomy::from_json(
            r#"{"Reading and Writing": {"D": {"S": 0, "T": "n/a"}}, "Math": {}}"#,
        )
        .unwrap();
        let filters = FilterCollection::from_taxonomy(&taxonomy).set_domain_qty(
            Subject::ReadingWriting,
            "D",
            1,
        );
        // S=0, T=1
        let doc = ExportBuilder::new().build(&filters, "cap").unwrap();
        assert!(check_capacity(&doc, &taxonomy).is_empty());
    }

    #[test]
    fn test_chosen_ids_over_empty_allocation() {
        let doc = ExportBuilder::new()
            .with_chosen_ids(["q-1", "q-2"])
            .build(&FilterCollection::default(), "ids")
            .unwrap();
        assert_eq!(doc.total_questions, 0);

        let warning = check_chosen_ids(&doc, &[]).unwrap();
        assert!(warning.exceeds_total());
        assert_eq!(warning.chosen, 2);
        assert_eq!(warning.headroom, 0);
    }

    #[test]
    fn test_chosen_ids_fit_only_in_skipped_requests() {
        let taxonomy = SkillTaxonomy::from_json(
            r#"{
                "Reading and Writing": {},
                "Math": {"Algebra": {"A": 2, "B": 40, "C": 40}}
            }"#,
        )
        .unwrap();
        let filters = FilterCollection::from_taxonomy(&taxonomy).set_domain_qty(
            Subject::Math,
            "Algebra",
            9,
        );
        // A=3 is skipped by the generator, leaving room for three ids
        let capacity_of = |ids: &[&str]| {
            let doc = ExportBuilder::new()
                .with_chosen_ids(ids)
                .build(&filters, "ids")
                .unwrap();
            let capacity = check_capacity(&doc, &taxonomy);
            check_chosen_ids(&doc, &capacity)
        };

        assert_eq!(capacity_of(&[]), None);
        assert_eq!(capacity_of(&["q-1", "q-2", "q-3"]), None);

        let warning = capacity_of(&["q-1", "q-2", "q-3", "q-4"]).unwrap();
        assert!(!warning.exceeds_total());
        assert_eq!(warning.headroom, 3);
        assert_eq!(warning.total, 9);
    }

    #[test]
    fn test_chosen_ids_with_fully_drawn_allocation() {
        let taxonomy = SkillTaxonomy::from_json(
            r#"{"Reading and Writing": {"D": {"S": 100}}, "Math": {}}"#,
        )
        .unwrap();
        let filters = FilterCollection::from_taxonomy(&taxonomy).set_domain_qty(
            Subject::ReadingWriting,
            "D",
            5,
        );
        let doc = ExportBuilder::new()
            .with_chosen_ids(["q-1"])
            .build(&filters, "ids")
            .unwrap();

        let warning = check_chosen_ids(&doc, &check_capacity(&doc, &taxonomy)).unwrap();
        assert_eq!(warning.headroom, 0);
        assert!(warning.to_string().contains("push the set past the total"));
    }
}
