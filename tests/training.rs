use ndarray::{array, Array1, Array2};
use triage_assistant::{
    data::TrainingData,
    error::TrainingError,
    model::train,
    vocab::{DiseaseVocabulary, SymptomVocabulary},
};

fn toy_data(rows_per_class: usize) -> TrainingData {
    let mut cells = Vec::new();
    let mut labels = Vec::new();
    for _ in 0..rows_per_class {
        cells.extend_from_slice(&[1.0, 0.0, 0.0]);
        labels.push("Dermatitis".to_string());
        cells.extend_from_slice(&[0.0, 1.0, 0.0]);
        labels.push("Influenza".to_string());
    }
    let records = Array2::from_shape_vec((labels.len(), 3), cells).unwrap();
    let (diseases, codes) = DiseaseVocabulary::fit_transform(&labels);
    TrainingData {
        records,
        targets: Array1::from_vec(codes),
        symptoms: SymptomVocabulary::from_columns(vec![
            "itching".into(),
            "high_fever".into(),
            "cough".into(),
        ]),
        diseases,
    }
}

#[test]
fn training_fits_and_reports() {
    let data = toy_data(10);
    let trained = train::train(&data).unwrap();
    assert!(trained.report.accuracy >= 0.0 && trained.report.accuracy <= 1.0);
    assert_eq!(trained.report.per_class.len(), 2);
    assert_eq!(
        trained.report.train_examples + trained.report.holdout_examples,
        20
    );
    assert_eq!(trained.feature_importance.len(), 3);
}

#[test]
fn separable_data_scores_high_on_holdout() {
    let data = toy_data(10);
    let trained = train::train(&data).unwrap();
    assert!(trained.report.accuracy > 0.9);
}

#[test]
fn too_few_examples_per_class_is_rejected() {
    let records = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
    let labels = vec![
        "Dermatitis".to_string(),
        "Influenza".to_string(),
        "Influenza".to_string(),
    ];
    let (diseases, codes) = DiseaseVocabulary::fit_transform(&labels);
    let data = TrainingData {
        records,
        targets: Array1::from_vec(codes),
        symptoms: SymptomVocabulary::from_columns(vec![
            "itching".into(),
            "high_fever".into(),
            "cough".into(),
        ]),
        diseases,
    };
    let err = train::train(&data).unwrap_err();
    assert!(matches!(err, TrainingError::TooFewExamples { count: 1, .. }));
}

#[test]
fn training_is_reproducible() {
    let data = toy_data(10);
    let first = train::train(&data).unwrap();
    let second = train::train(&data).unwrap();
    assert_eq!(first.report.accuracy, second.report.accuracy);
    assert_eq!(first.feature_importance, second.feature_importance);

    let probe = array![1.0, 0.0, 0.0];
    assert_eq!(
        first.forest.predict_proba(probe.view()),
        second.forest.predict_proba(probe.view())
    );
}

#[test]
fn probabilities_form_a_distribution() {
    let data = toy_data(10);
    let trained = train::train(&data).unwrap();
    let probe = array![1.0, 0.0, 0.0];
    let proba = trained.forest.predict_proba(probe.view());
    assert_eq!(proba.len(), 2);
    let sum: f64 = proba.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn predicted_class_matches_the_pattern() {
    let data = toy_data(10);
    let trained = train::train(&data).unwrap();
    let dermatitis = data.diseases.code_of("Dermatitis").unwrap();
    let predicted = trained.forest.predict(&array![[1.0, 0.0, 0.0]]);
    assert_eq!(predicted, vec![dermatitis]);
}
