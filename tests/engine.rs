use std::{sync::Arc, thread};

use tempfile::TempDir;
use triage_assistant::{config::Settings, engine::TriageEngine};

fn settings_in(dir: &TempDir) -> Settings {
    Settings {
        dataset_path: dir.path().join("training.csv"),
        artifact_path: dir.path().join("condition_model.bin"),
        data_dir: dir.path().to_path_buf(),
    }
}

fn write_dataset(settings: &Settings) {
    let mut content = String::from("itching,skin_rash,prognosis\n");
    for _ in 0..10 {
        content.push_str("1,0,Dermatitis\n");
        content.push_str("0,1,Fungal infection\n");
    }
    std::fs::write(&settings.dataset_path, content).unwrap();
}

#[test]
fn predicts_a_known_symptom() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);
    write_dataset(&settings);

    let engine = TriageEngine::new(settings);
    let result = engine.predict(&["itching".to_string()]);

    assert_eq!(result.error(), None);
    assert!(result.confidence() > 0.0);
    match result {
        triage_assistant::engine::PredictionResult::Predicted {
            condition,
            matched_symptoms,
            ranking,
            ..
        } => {
            assert_eq!(matched_symptoms, vec!["itching".to_string()]);
            assert_eq!(condition, "Dermatitis");
            assert_eq!(ranking[0].condition, condition);
            for pair in ranking.windows(2) {
                assert!(pair[0].probability >= pair[1].probability);
            }
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unknown_tokens_report_no_match_without_touching_the_model() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);
    write_dataset(&settings);

    let engine = TriageEngine::new(settings);
    let result = engine.predict(&["completely_unknown_token".to_string()]);
    assert_eq!(result.error(), Some("no matching symptoms"));
    assert_eq!(result.confidence(), 0.0);
}

#[test]
fn missing_dataset_and_artifact_is_deterministically_unavailable() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);

    let engine = TriageEngine::new(settings);
    let first = engine.get_or_build().unwrap_err();
    let second = engine.get_or_build().unwrap_err();
    assert_eq!(first.reason(), second.reason());

    let result = engine.predict(&["itching".to_string()]);
    assert_eq!(result.error(), Some("model unavailable"));
    assert_eq!(result.confidence(), 0.0);
}

#[test]
fn concurrent_first_use_builds_one_bundle() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);
    write_dataset(&settings);

    let engine = Arc::new(TriageEngine::new(settings));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = engine.clone();
            thread::spawn(move || engine.get_or_build().unwrap())
        })
        .collect();

    let bundles: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    for bundle in &bundles[1..] {
        assert!(Arc::ptr_eq(&bundles[0], bundle));
    }
}

#[test]
fn artifact_reload_restores_vocabularies() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);
    write_dataset(&settings);

    let first = TriageEngine::new(settings.clone());
    first.get_or_build().unwrap();
    let symptoms = first.list_symptoms();
    let diseases = first.list_diseases();
    drop(first);

    // Remove the dataset to prove the second engine reads the artifact.
    std::fs::remove_file(&settings.dataset_path).unwrap();
    let second = TriageEngine::new(settings);
    second.get_or_build().unwrap();
    assert_eq!(second.list_symptoms(), symptoms);
    assert_eq!(second.list_diseases(), diseases);
}

#[test]
fn suggest_degrades_to_the_fallback_vocabulary() {
    let dir = TempDir::new().unwrap();
    let engine = TriageEngine::new(settings_in(&dir));

    let matches = engine.suggest("itch");
    assert!(matches.contains(&"itching".to_string()));
    assert!(engine.list_diseases().is_empty());
}
