//! Export integration tests
//!
//! End-to-end checks from taxonomy load through edits to the written document.

use pretty_assertions::assert_eq;
use qset::filter::parse_edits;
use qset::schema::validate_export;
use qset::{ExportBuilder, ExportDocument, FilterStore, SkillTaxonomy, Subject};

const TAXONOMY: &str = r#"{
    "Reading and Writing": {
        "Vocabulary": {"X": 40, "Y": 40, "Z": 3},
        "Craft and Structure": {"Words in Context": 152, "Text Structure and Purpose": 70}
    },
    "Math": {
        "Algebra": {"A": 30, "B": [10, 10, 10], "C": 2},
        "Geometry and Trigonometry": {"Circles": 25}
    }
}"#;

fn store() -> FilterStore {
    FilterStore::from_taxonomy(&SkillTaxonomy::from_json(TAXONOMY).unwrap())
}

// =============================================================================
// Scenarios
// =============================================================================

mod scenario_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bulk_algebra_distribution() {
        let mut store = store();
        store.set_domain_qty(Subject::Math, "Algebra", 10u32).unwrap();

        let doc = ExportBuilder::new().build(store.current(), "algebra").unwrap();
        let algebra: Vec<_> = doc.math.get("Algebra").unwrap().iter().collect();
        assert_eq!(algebra, vec![("A", &3), ("B", &3), ("C", &4)]);
        assert_eq!(doc.total_questions, 10);
        assert!(doc.rw.is_empty());
    }

    #[test]
    fn test_expanded_vocabulary_omits_disabled_skill() {
        let mut store = store();
        store.toggle_domain(Subject::ReadingWriting, "Vocabulary");
        store.toggle_skill(Subject::ReadingWriting, "Vocabulary", 0);
        store.set_skill_qty(Subject::ReadingWriting, "Vocabulary", 0, 5u32).unwrap();
        store.set_skill_qty(Subject::ReadingWriting, "Vocabulary", 1, 9u32).unwrap();
        store.toggle_skill(Subject::ReadingWriting, "Vocabulary", 2);
        store.set_skill_qty(Subject::ReadingWriting, "Vocabulary", 2, 2u32).unwrap();

        let vocab = store.current().find(Subject::ReadingWriting, "Vocabulary").unwrap();
        assert_eq!(vocab.qty, 7);

        let doc = ExportBuilder::new().build(store.current(), "vocab").unwrap();
        let entries: Vec<_> = doc.rw.get("Vocabulary").unwrap().iter().collect();
        assert_eq!(entries, vec![("X", &5), ("Z", &2)]);
    }

    #[test]
    fn test_all_zero_document() {
        let doc = ExportBuilder::new().build(store().current(), "nothing").unwrap();
        let json = doc.to_json(4).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["RW"], serde_json::json!({}));
        assert_eq!(value["Math"], serde_json::json!({}));
        assert_eq!(value["totalQuestions"], 0);
        assert_eq!(value["outputPath"], "nothing.pdf");
    }

    #[test]
    fn test_zero_domains_skipped_and_total_matches() {
        let mut store = store();
        store.set_domain_qty(Subject::Math, "Algebra", 4u32).unwrap();
        store
            .set_domain_qty(Subject::ReadingWriting, "Craft and Structure", 5u32)
            .unwrap();
        store.toggle_domain(Subject::ReadingWriting, "Vocabulary");

        let doc = ExportBuilder::new().build(store.current(), "mixed").unwrap();
        let rw: Vec<_> = doc.rw.keys().collect();
        let math: Vec<_> = doc.math.keys().collect();
        assert_eq!(rw, vec!["Craft and Structure"]);
        assert_eq!(math, vec!["Algebra"]);
        assert_eq!(doc.total_questions, 9);
        assert_eq!(doc.total_questions, store.current().total_qty());
        assert_eq!(doc.emitted_total(), 9);
    }

    #[test]
    fn test_export_is_idempotent() {
        let mut store = store();
        store.set_domain_qty(Subject::Math, "Algebra", 11u32).unwrap();
        store.toggle_domain(Subject::Math, "Geometry and Trigonometry");
        store.toggle_skill(Subject::Math, "Geometry and Trigonometry", 0);
        store
            .set_skill_qty(Subject::Math, "Geometry and Trigonometry", 0, "6")
            .unwrap();

        let builder = ExportBuilder::new().with_chosen_ids(["q-17"]);
        let first = builder.build(store.current(), "twice").unwrap().to_json(4).unwrap();
        let second = builder.build(store.current(), "twice").unwrap().to_json(4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_blank_output_path_builds_nothing() {
        let err = ExportBuilder::new().build(store().current(), "   ").unwrap_err();
        assert_eq!(err.to_string(), "Please type an output path for the pdf");
    }
}

// =============================================================================
// Edits files and written documents
// =============================================================================

mod file_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replayed_edits_export_validates() {
        let actions = parse_edits(
            r#"[
                {"action": "toggleDomain", "subject": "RW", "domain": "Vocabulary"},
                {"action": "toggleSkill", "domain": "Vocabulary", "skill": 1},
                {"action": "setSkillQty", "domain": "Vocabulary", "skill": 1, "qty": "8"},
                {"action": "setSkillQty", "domain": "Vocabulary", "skill": 1, "qty": "eight"},
                {"action": "setDomainQty", "subject": "Math", "domain": "Algebra", "qty": 7.9}
            ]"#,
        )
        .unwrap();

        let mut store = store();
        let report = store.replay(&actions);
        assert_eq!(report.applied, 4);
        assert_eq!(report.rejected.len(), 1);

        let doc = ExportBuilder::new().build(store.current(), " weekly ").unwrap();
        assert_eq!(doc.output_path, "weekly.pdf");
        assert_eq!(doc.total_questions, 15);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        doc.write_json(&path, 4).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let validated = validate_export(&content).unwrap();
        assert_eq!(validated, doc);
    }

    #[test]
    fn test_written_document_keeps_collection_order() {
        let mut store = store();
        store.set_domain_qty(Subject::Math, "Geometry and Trigonometry", 1u32).unwrap();
        store.set_domain_qty(Subject::Math, "Algebra", 3u32).unwrap();

        let doc = ExportBuilder::new().build(store.current(), "order").unwrap();
        let json = doc.to_json(2).unwrap();
        let algebra = json.find("\"Algebra\"").unwrap();
        let geometry = json.find("\"Geometry and Trigonometry\"").unwrap();
        assert!(algebra < geometry);

        let parsed = ExportDocument::from_json(&json).unwrap();
        let math: Vec<_> = parsed.math.keys().collect();
        assert_eq!(math, vec!["Algebra", "Geometry and Trigonometry"]);
    }

    #[tokio::test]
    async fn test_load_taxonomy_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skill-tree.json");
        std::fs::write(&path, TAXONOMY).unwrap();

        let taxonomy = SkillTaxonomy::load(&path).await.unwrap();
        let store = FilterStore::from_taxonomy(&taxonomy);
        let names: Vec<_> = store.current().domains().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Vocabulary", "Craft and Structure", "Algebra", "Geometry and Trigonometry"]
        );
    }

    #[tokio::test]
    async fn test_missing_taxonomy_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SkillTaxonomy::load(dir.path().join("absent.json")).await.is_err());
    }
}
