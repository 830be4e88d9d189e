use std::path::PathBuf;

use tempfile::TempDir;
use triage_assistant::{data, error::DatasetError};

fn write_csv(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("training.csv");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn vocabulary_matches_non_label_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "itching,skin_rash,prognosis\n1,0,Fungal infection\n1,0,Fungal infection\n0,1,Allergy\n0,1,Allergy\n",
    );
    let data = data::load_dataset(&path).unwrap();
    assert_eq!(data.symptoms.len(), 2);
    assert_eq!(data.symptoms.entries(), ["itching", "skin_rash"]);
    assert_eq!(data.records.dim(), (4, 2));
    // Codes follow alphabetical label order.
    assert_eq!(data.diseases.names(), ["Allergy", "Fungal infection"]);
    assert_eq!(data.targets.to_vec(), vec![1, 1, 0, 0]);
}

#[test]
fn label_column_can_sit_anywhere() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "prognosis,itching\nFlu,1\nFlu,0\n");
    let data = data::load_dataset(&path).unwrap();
    assert_eq!(data.symptoms.entries(), ["itching"]);
    assert_eq!(data.records.dim(), (2, 1));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = data::load_dataset(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DatasetError::Missing(_)));
}

#[test]
fn label_column_is_required() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "itching,skin_rash\n1,0\n");
    let err = data::load_dataset(&path).unwrap_err();
    assert!(matches!(err, DatasetError::MissingLabelColumn(_)));
}

#[test]
fn empty_dataset_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "itching,prognosis\n");
    let err = data::load_dataset(&path).unwrap_err();
    assert!(matches!(err, DatasetError::Empty));
}

#[test]
fn malformed_cells_fail_the_load() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "itching,prognosis\nyes,Flu\n");
    let err = data::load_dataset(&path).unwrap_err();
    match err {
        DatasetError::BadValue { row, column, value } => {
            assert_eq!(row, 0);
            assert_eq!(column, "itching");
            assert_eq!(value, "yes");
        }
        other => panic!("unexpected error: {other}"),
    }
}
