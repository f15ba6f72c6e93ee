// Integration tests for the template store
//
// These tests verify the merge of built-in and persisted templates, the
// save/reload round trip, and the validation rules.

use anyhow::Result;
use scriven::{TemplateCategory, TemplateRecord, TemplateStore};
use std::fs;
use tempfile::tempdir;

fn sample_record(name: &str) -> TemplateRecord {
    TemplateRecord {
        name: name.to_string(),
        category: TemplateCategory::Business,
        system_prompt: "You are a meeting minutes generator.".to_string(),
        instruction: "Generate structured meeting minutes".to_string(),
        temperature: 0.4,
        focus_topics: Some(vec!["decisions".to_string(), "attendees".to_string()]),
        output_format: Some("# Minutes".to_string()),
        description: Some("Generates formatted meeting minutes".to_string()),
        version: "1.0".to_string(),
    }
}

#[test]
fn test_builtin_defaults_registered() -> Result<()> {
    let dir = tempdir()?;
    let store = TemplateStore::open(dir.path())?;

    for name in ["default", "summary", "qa", "sentiment"] {
        assert!(store.get(name).is_some(), "Built-in '{}' should exist", name);
    }

    Ok(())
}

#[test]
fn test_save_then_get_round_trip() -> Result<()> {
    let dir = tempdir()?;
    let mut store = TemplateStore::open(dir.path())?;

    let record = sample_record("minutes");
    store.save(record.clone())?;

    assert_eq!(store.get("minutes"), Some(&record));

    // The record must survive a re-open that reloads from disk.
    let reopened = TemplateStore::open(dir.path())?;
    assert_eq!(reopened.get("minutes"), Some(&record));

    Ok(())
}

#[test]
fn test_save_overwrites_existing_name() -> Result<()> {
    let dir = tempdir()?;
    let mut store = TemplateStore::open(dir.path())?;

    store.save(sample_record("minutes"))?;

    let replacement = TemplateRecord {
        system_prompt: "You are a decisions-only summarizer.".to_string(),
        focus_topics: None,
        output_format: None,
        description: None,
        ..sample_record("minutes")
    };
    store.save(replacement.clone())?;

    // Last write wins entirely: no field from the old record remains.
    let current = store.get("minutes").expect("record should exist");
    assert_eq!(current, &replacement);
    assert_eq!(current.focus_topics, None);

    let names = store.list(None);
    assert_eq!(
        names.iter().filter(|n| **n == "minutes").count(),
        1,
        "Overwriting must not duplicate the listing entry"
    );

    Ok(())
}

#[test]
fn test_custom_record_overrides_builtin_of_same_name() -> Result<()> {
    let dir = tempdir()?;

    {
        let mut store = TemplateStore::open(dir.path())?;
        let custom_summary = TemplateRecord {
            category: TemplateCategory::Analysis,
            system_prompt: "You are a one-line summarizer.".to_string(),
            ..sample_record("summary")
        };
        store.save(custom_summary)?;
    }

    let store = TemplateStore::open(dir.path())?;
    let summary = store.get("summary").expect("summary should exist");
    assert_eq!(summary.system_prompt, "You are a one-line summarizer.");

    Ok(())
}

#[test]
fn test_list_filters_by_category() -> Result<()> {
    let dir = tempdir()?;
    let mut store = TemplateStore::open(dir.path())?;
    store.save(sample_record("minutes"))?;

    let business = store.list(Some(TemplateCategory::Business));
    for name in &business {
        let record = store.get(name).expect("listed name should resolve");
        assert_eq!(record.category, TemplateCategory::Business);
    }
    assert!(business.contains(&"minutes"));
    assert!(!business.contains(&"summary"));

    let all = store.list(None);
    assert!(all.contains(&"minutes"));
    assert!(all.contains(&"summary"));

    let mut deduped = all.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), all.len(), "Listing must not contain duplicates");

    // Category subsets partition the full listing.
    let by_category: usize = TemplateCategory::ALL
        .iter()
        .map(|cat| store.list(Some(*cat)).len())
        .sum();
    assert_eq!(by_category, all.len());

    Ok(())
}

#[test]
fn test_malformed_record_is_skipped() -> Result<()> {
    let empty = tempdir()?;
    let baseline = TemplateStore::open(empty.path())?.list(None).len();

    let dir = tempdir()?;
    let good = sample_record("minutes");
    fs::write(
        dir.path().join("minutes.json"),
        serde_json::to_string_pretty(&good)?,
    )?;
    fs::write(dir.path().join("broken.json"), "{ not valid json")?;

    let store = TemplateStore::open(dir.path())?;
    assert_eq!(store.get("minutes"), Some(&good));
    assert!(store.get("broken").is_none());
    assert_eq!(
        store.list(None).len(),
        baseline + 1,
        "Exactly one custom record should load beyond the defaults"
    );

    Ok(())
}

#[test]
fn test_unknown_category_fails_to_load() -> Result<()> {
    let empty = tempdir()?;
    let baseline = TemplateStore::open(empty.path())?.list(None).len();

    let dir = tempdir()?;
    fs::write(
        dir.path().join("odd.json"),
        r#"{
            "name": "odd",
            "category": "mystery",
            "system_prompt": "p",
            "instruction": "i",
            "temperature": 0.5
        }"#,
    )?;

    let store = TemplateStore::open(dir.path())?;
    assert!(store.get("odd").is_none());
    assert_eq!(store.list(None).len(), baseline);

    Ok(())
}

#[test]
fn test_optional_fields_default_on_load() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("bare.json"),
        r#"{
            "name": "bare",
            "category": "custom",
            "system_prompt": "p",
            "instruction": "i",
            "temperature": 0.5
        }"#,
    )?;

    let store = TemplateStore::open(dir.path())?;
    let record = store.get("bare").expect("bare record should load");
    assert_eq!(record.version, "1.0");
    assert_eq!(record.focus_topics, None);
    assert_eq!(record.output_format, None);
    assert_eq!(record.description, None);

    Ok(())
}

#[test]
fn test_validate_accepts_well_formed_record() -> Result<()> {
    let dir = tempdir()?;
    let store = TemplateStore::open(dir.path())?;

    assert!(store.validate(&sample_record("minutes")).is_empty());

    Ok(())
}

#[test]
fn test_validate_rejects_bad_name() -> Result<()> {
    let dir = tempdir()?;
    let store = TemplateStore::open(dir.path())?;

    for bad in ["", "has space", "dash-ed", "dot.ted"] {
        let errors = store.validate(&sample_record(bad));
        assert_eq!(errors.len(), 1, "Name '{}' should fail exactly one rule", bad);
        assert!(errors[0].contains("alphanumeric"));
    }

    Ok(())
}

#[test]
fn test_validate_rejects_out_of_range_temperature() -> Result<()> {
    let dir = tempdir()?;
    let store = TemplateStore::open(dir.path())?;

    for bad in [-0.1, 1.5] {
        let record = TemplateRecord {
            temperature: bad,
            ..sample_record("minutes")
        };
        let errors = store.validate(&record);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("between 0 and 1"));
    }

    // The boundaries themselves are valid.
    for ok in [0.0, 1.0] {
        let record = TemplateRecord {
            temperature: ok,
            ..sample_record("minutes")
        };
        assert!(store.validate(&record).is_empty());
    }

    Ok(())
}

#[test]
fn test_validate_rejects_empty_prompts() -> Result<()> {
    let dir = tempdir()?;
    let store = TemplateStore::open(dir.path())?;

    let record = TemplateRecord {
        system_prompt: String::new(),
        ..sample_record("minutes")
    };
    let errors = store.validate(&record);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("required"));

    let record = TemplateRecord {
        instruction: String::new(),
        ..sample_record("minutes")
    };
    assert_eq!(store.validate(&record).len(), 1);

    Ok(())
}

#[test]
fn test_validate_reports_all_violations() -> Result<()> {
    let dir = tempdir()?;
    let store = TemplateStore::open(dir.path())?;

    let record = TemplateRecord {
        name: "not a name".to_string(),
        temperature: 2.0,
        system_prompt: String::new(),
        instruction: String::new(),
        ..sample_record("x")
    };

    // Checks are independent, not short-circuited.
    assert_eq!(store.validate(&record).len(), 3);

    Ok(())
}

#[test]
fn test_musical_pack_installs_and_persists() -> Result<()> {
    let dir = tempdir()?;
    let mut store = TemplateStore::open(dir.path())?;

    scriven::install_musical_templates(&mut store)?;

    for name in [
        "musicalsummary",
        "hiphopsummary",
        "countrysummary",
        "balladsummary",
    ] {
        let record = store.get(name).unwrap_or_else(|| panic!("{} missing", name));
        assert_eq!(record.category, TemplateCategory::Custom);
        assert!(dir.path().join(format!("{}.json", name)).exists());
    }

    Ok(())
}

#[test]
fn test_persisted_shape_matches_contract() -> Result<()> {
    let dir = tempdir()?;
    let mut store = TemplateStore::open(dir.path())?;
    store.save(sample_record("minutes"))?;

    let raw = fs::read_to_string(dir.path().join("minutes.json"))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;

    assert_eq!(value["name"], "minutes");
    assert_eq!(value["category"], "business");
    let temperature = value["temperature"].as_f64().expect("temperature is a number");
    assert!((temperature - 0.4).abs() < 1e-6);
    assert_eq!(value["version"], "1.0");
    assert!(value["focus_topics"].is_array());

    // Absent optionals serialize as null, per the record contract.
    let bare = TemplateRecord {
        focus_topics: None,
        output_format: None,
        description: None,
        ..sample_record("bare")
    };
    store.save(bare)?;
    let raw = fs::read_to_string(dir.path().join("bare.json"))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert!(value["focus_topics"].is_null());
    assert!(value["output_format"].is_null());
    assert!(value["description"].is_null());

    Ok(())
}

#[test]
fn test_validate_does_not_persist() -> Result<()> {
    let dir = tempdir()?;
    let store = TemplateStore::open(dir.path())?;

    store.validate(&sample_record("minutes"));

    assert!(
        !dir.path().join("minutes.json").exists(),
        "Validation must not write anything"
    );
    assert!(store.get("minutes").is_none());

    Ok(())
}
