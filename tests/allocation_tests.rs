//! Allocation property tests
//!
//! Invariants of the distribution rule and the filter store under random
//! sequences of edits.

use proptest::prelude::*;

use qset::{distribute_evenly, ExportBuilder, FilterStore, SkillTaxonomy, Subject};

const TAXONOMY: &str = r#"{
    "Reading and Writing": {
        "Information and Ideas": {"Inferences": 1, "Command of Evidence": 1, "Central Ideas": 1},
        "Expression of Ideas": {"Transitions": 1, "Rhetorical Synthesis": 1}
    },
    "Math": {
        "Algebra": {"Linear functions": 1, "Linear equations": 1, "Systems": 1, "Inequalities": 1},
        "Problem-Solving and Data Analysis": {"Percentages": 1}
    }
}"#;

const DOMAINS: &[(Subject, &str, usize)] = &[
    (Subject::ReadingWriting, "Information and Ideas", 3),
    (Subject::ReadingWriting, "Expression of Ideas", 2),
    (Subject::Math, "Algebra", 4),
    (Subject::Math, "Problem-Solving and Data Analysis", 1),
];

#[derive(Debug, Clone)]
enum Edit {
    ToggleDomain(usize),
    ToggleSkill(usize, usize),
    SetSkillQty(usize, usize, u32),
    SetDomainQty(usize, u32),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0..DOMAINS.len()).prop_map(Edit::ToggleDomain),
        (0..DOMAINS.len(), 0usize..5).prop_map(|(d, s)| Edit::ToggleSkill(d, s)),
        (0..DOMAINS.len(), 0usize..5, 0u32..50).prop_map(|(d, s, q)| Edit::SetSkillQty(d, s, q)),
        (0..DOMAINS.len(), 0u32..200).prop_map(|(d, q)| Edit::SetDomainQty(d, q)),
    ]
}

fn apply(store: &mut FilterStore, edit: &Edit) {
    match *edit {
        Edit::ToggleDomain(d) => {
            store.toggle_domain(DOMAINS[d].0, DOMAINS[d].1);
        }
        Edit::ToggleSkill(d, s) => {
            store.toggle_skill(DOMAINS[d].0, DOMAINS[d].1, s);
        }
        Edit::SetSkillQty(d, s, q) => {
            store.set_skill_qty(DOMAINS[d].0, DOMAINS[d].1, s, q).unwrap();
        }
        Edit::SetDomainQty(d, q) => {
            store.set_domain_qty(DOMAINS[d].0, DOMAINS[d].1, q).unwrap();
        }
    }
}

proptest! {
    #[test]
    fn prop_distribution_sums_to_total(total in 0u32..100_000, n in 1usize..64) {
        let shares = distribute_evenly(total, n);
        prop_assert_eq!(shares.len(), n);

        let sum: u64 = shares.iter().map(|s| u64::from(*s)).sum();
        prop_assert_eq!(sum, u64::from(total));

        let base = total / n as u32;
        prop_assert!(shares[..n - 1].iter().all(|s| *s == base));
        prop_assert!(shares[n - 1] >= base);
    }

    #[test]
    fn prop_expanded_domains_keep_sum(edits in prop::collection::vec(edit_strategy(), 0..60)) {
        let taxonomy = SkillTaxonomy::from_json(TAXONOMY).unwrap();
        let mut store = FilterStore::from_taxonomy(&taxonomy);

        for edit in &edits {
            apply(&mut store, edit);
            for domain in store.current().domains() {
                if domain.enabled {
                    prop_assert_eq!(domain.qty, domain.enabled_skill_total());
                }
            }
        }
    }

    #[test]
    fn prop_export_total_matches_nonzero_domains(edits in prop::collection::vec(edit_strategy(), 0..60)) {
        let taxonomy = SkillTaxonomy::from_json(TAXONOMY).unwrap();
        let mut store = FilterStore::from_taxonomy(&taxonomy);
        for edit in &edits {
            apply(&mut store, edit);
        }

        let doc = ExportBuilder::new().build(store.current(), "prop").unwrap();
        let expected: u64 = store.current().domains().iter().map(|d| u64::from(d.qty)).sum();
        prop_assert_eq!(doc.total_questions, expected);
        prop_assert_eq!(doc.emitted_total(), expected);

        for domain in store.current().domains() {
            let present = doc.subject(domain.subject).contains_key(&domain.name);
            prop_assert_eq!(present, domain.qty != 0);
        }
    }
}
