//! End-to-end integration tests for the converter.
//!
//! Tests the complete pipeline from scheme and link files to JSON records
//! using the fixture data in `tests/fixtures/cpc`.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::tempdir;

use cpc_converter::converter::{convert_batch, BatchRequest, ExportMode};
use cpc_converter::output::{generate_json, to_record};
use cpc_converter::{convert_section, export_section, ConverterError, Level};

/// Directory holding the fixture scheme files.
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("cpc")
}

/// Assert that no object in the record holds null or an empty string.
fn assert_pruned(value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map {
                assert!(!field.is_null(), "{key} is null");
                assert_ne!(field.as_str(), Some(""), "{key} is an empty string");
                assert_pruned(field);
            }
        }
        Value::Array(items) => items.iter().for_each(assert_pruned),
        _ => {}
    }
}

#[test]
fn test_two_file_section() {
    let section = convert_section(&fixtures_dir(), "A").expect("section A converts");

    assert_eq!(
        to_record(&section),
        json!({
            "cpcSectionCode": "A",
            "cpcSectionName": "HUMAN NECESSITIES",
            "cpcSubsections": [{
                "cpcSubsectionName": "AGRICULTURE",
                "cpcClasses": [{
                    "cpcClassCode": "A01",
                    "cpcClassName": "AGRICULTURE; FORESTRY; ANIMAL HUSBANDRY; HUNTING; TRAPPING; FISHING",
                    "cpcSubClasses": [{
                        "cpcSubClassCode": "A01B",
                        "cpcSubClassName": "SOIL WORKING IN AGRICULTURE OR FORESTRY; PARTS, DETAILS, OR ACCESSORIES OF AGRICULTURAL MACHINES OR IMPLEMENTS, IN GENERAL",
                        "cpcGroups": [{
                            "cpcGroupCode": "1/00",
                            "cpcGroupName": "Soil working",
                            "cpcSubGroups": []
                        }]
                    }]
                }]
            }]
        })
    );
}

#[test]
fn test_level_six_contributes_no_records() {
    let section = convert_section(&fixtures_dir(), "Y").expect("section Y converts");
    let subclass = section
        .find(Level::Subclass, "Y02A")
        .expect("subclass Y02A present");

    let codes: Vec<_> = subclass
        .children
        .iter()
        .map(|group| (group.level, group.code.as_deref()))
        .collect();
    assert_eq!(
        codes,
        vec![
            (Level::Group, Some("10/00")),
            (Level::Group, Some("20/00")),
            (Level::Group, Some("40/00")),
        ]
    );
}

#[test]
fn test_self_referential_section_title() {
    let section = convert_section(&fixtures_dir(), "Y").expect("section Y converts");

    let expected = "GENERAL TAGGING OF NEW TECHNOLOGICAL DEVELOPMENTS; \
                    GENERAL TAGGING OF CROSS-SECTIONAL TECHNOLOGIES SPANNING OVER SEVERAL SECTIONS OF THE IPC";
    assert_eq!(section.name.as_deref(), Some(expected));
    assert_eq!(section.children[0].name.as_deref(), Some(expected));
}

#[test]
fn test_deep_subgroups_keep_full_codes() {
    let section = convert_section(&fixtures_dir(), "Y").expect("section Y converts");

    let deepest = section
        .find(Level::NestedSubGroup(2), "Y02A20/131")
        .expect("level 10 entry present");
    assert_eq!(deepest.name.as_deref(), Some("Reverse-osmosis"));
    assert!(deepest.is_leaf());

    let record = to_record(&section);
    let group = &record["cpcSubsections"][0]["cpcClasses"][0]["cpcSubClasses"][0]["cpcGroups"][1];
    assert_eq!(group["cpcGroupCode"], "20/00");
    assert_eq!(
        group["cpcSubGroups"][0]["cpcLevel1SubGroups"][0]["cpcLevel1SubGroupCode"],
        "Y02A20/124"
    );
    assert_eq!(
        group["cpcSubGroups"][0]["cpcLevel1SubGroups"][0]["cpcLevel2SubGroups"][0],
        json!({
            "cpcLevel2SubGroupCode": "Y02A20/131",
            "cpcLevel2SubGroupName": "Reverse-osmosis",
            "cpcLevel3SubGroups": []
        })
    );
}

#[test]
fn test_untitled_subgroup_is_pruned() {
    let section = convert_section(&fixtures_dir(), "Y").expect("section Y converts");
    let record = to_record(&section);

    let group = &record["cpcSubsections"][0]["cpcClasses"][0]["cpcSubClasses"][0]["cpcGroups"][2];
    assert_eq!(
        group["cpcSubGroups"][0],
        json!({ "cpcSubGroupCode": "Y02A40/10", "cpcLevel1SubGroups": [] })
    );
    assert_pruned(&record);
}

#[test]
fn test_multi_part_group_title() {
    let section = convert_section(&fixtures_dir(), "Y").expect("section Y converts");
    let subclass = section
        .find(Level::Subclass, "Y02A")
        .expect("subclass Y02A present");

    assert_eq!(
        subclass.children[0].name.as_deref(),
        Some("at coastal zones; at river basins")
    );
}

#[test]
fn test_output_is_idempotent() {
    let first = generate_json(&convert_section(&fixtures_dir(), "Y").unwrap()).unwrap();
    let second = generate_json(&convert_section(&fixtures_dir(), "Y").unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_link_file() {
    let err = convert_section(&fixtures_dir(), "B").unwrap_err();

    match &err {
        ConverterError::FileNotFound { path } => {
            assert!(path.ends_with("cpc-scheme-B01D.xml"));
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
    assert!(err.to_string().contains("cpc-scheme-B01D.xml"));
}

#[test]
fn test_missing_link_file_writes_nothing() {
    let out = tempdir().unwrap();

    assert!(export_section(&fixtures_dir(), "B", out.path()).is_err());
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_export_section_file_name() {
    let out = tempdir().unwrap();
    let path = export_section(&fixtures_dir(), "A", out.path()).unwrap();

    assert_eq!(path, out.path().join("A.json"));
    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["cpcSectionCode"], "A");
    assert_pruned(&parsed);
}

#[test]
fn test_batch_continues_after_failure() {
    let out = tempdir().unwrap();
    let request = BatchRequest {
        data_dir: fixtures_dir(),
        output_dir: out.path().to_path_buf(),
        sections: vec!["A".to_string(), "B".to_string(), "Y".to_string()],
        mode: ExportMode::PerSection,
    };

    let report = convert_batch(&request, |_| {}).unwrap();

    assert_eq!(report.converted, vec!["A", "Y"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].code, "B");
    assert!(out.path().join("A.json").exists());
    assert!(!out.path().join("B.json").exists());
    assert!(out.path().join("Y.json").exists());
}

#[test]
fn test_batch_combined_keeps_request_order() {
    let out = tempdir().unwrap();
    let request = BatchRequest {
        data_dir: fixtures_dir(),
        output_dir: out.path().to_path_buf(),
        sections: vec!["Y".to_string(), "A".to_string()],
        mode: ExportMode::Combined,
    };

    let report = convert_batch(&request, |_| {}).unwrap();
    assert!(report.is_success());

    let content = fs::read_to_string(out.path().join("all.json")).unwrap();
    let parsed: Value = serde_json::from_str(&content).unwrap();
    let codes: Vec<_> = parsed["cpcSections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|section| section["cpcSectionCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["Y", "A"]);
}
