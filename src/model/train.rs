//! Stratified training and holdout evaluation for the condition forest.

use indexmap::IndexMap;
use ndarray::{Array1, Axis};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::{
    data::TrainingData, error::TrainingError, model::forest::ConditionForest,
    vocab::DiseaseVocabulary,
};

/// Fixed seed keeping splits and bootstraps reproducible per dataset.
pub const SEED: u64 = 42;
/// Fraction of examples held out for evaluation.
pub const HOLDOUT_RATIO: f64 = 0.2;

/// Per-condition holdout diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    pub condition: String,
    pub precision: f64,
    pub recall: f64,
    pub support: usize,
}

/// Build-time evaluation summary; not needed at inference time.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub accuracy: f64,
    pub train_examples: usize,
    pub holdout_examples: usize,
    pub per_class: Vec<ClassReport>,
}

/// Fitted ensemble plus its build-time diagnostics.
#[derive(Debug)]
pub struct TrainedModel {
    pub forest: ConditionForest,
    pub report: EvaluationReport,
    pub feature_importance: Vec<f64>,
}

/// Fit the ensemble on a stratified 80/20 split of `data`.
pub fn train(data: &TrainingData) -> Result<TrainedModel, TrainingError> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let (train_idx, holdout_idx) =
        stratified_split(&data.targets, HOLDOUT_RATIO, &data.diseases, &mut rng)?;

    let train_x = data.records.select(Axis(0), &train_idx);
    let train_y = data.targets.select(Axis(0), &train_idx);
    let holdout_x = data.records.select(Axis(0), &holdout_idx);
    let holdout_y = data.targets.select(Axis(0), &holdout_idx);

    let forest = ConditionForest::fit(&train_x, &train_y, data.diseases.len(), &mut rng)?;

    let predicted = forest.predict(&holdout_x);
    let report = evaluate(&holdout_y, &predicted, &data.diseases, train_idx.len());
    let feature_importance = forest.feature_importance(data.symptoms.len());

    info!(
        accuracy = report.accuracy,
        train = report.train_examples,
        holdout = report.holdout_examples,
        "trained condition forest"
    );
    Ok(TrainedModel {
        forest,
        report,
        feature_importance,
    })
}

/// Shuffle each class's rows and carve out the holdout share, keeping at
/// least one example per class on each side of the split.
fn stratified_split(
    targets: &Array1<usize>,
    holdout_ratio: f64,
    diseases: &DiseaseVocabulary,
    rng: &mut StdRng,
) -> Result<(Vec<usize>, Vec<usize>), TrainingError> {
    // Group in row order so the shuffles consume the RNG deterministically.
    let mut by_class: IndexMap<usize, Vec<usize>> = IndexMap::new();
    for (row, &code) in targets.iter().enumerate() {
        by_class.entry(code).or_default().push(row);
    }

    let mut train_idx = Vec::new();
    let mut holdout_idx = Vec::new();
    for (code, mut rows) in by_class {
        if rows.len() < 2 {
            return Err(TrainingError::TooFewExamples {
                label: diseases.name_of(code).unwrap_or("?").to_string(),
                count: rows.len(),
            });
        }
        rows.shuffle(rng);
        let holdout =
            ((rows.len() as f64 * holdout_ratio).round() as usize).clamp(1, rows.len() - 1);
        holdout_idx.extend(rows.drain(..holdout));
        train_idx.extend(rows);
    }
    train_idx.sort_unstable();
    holdout_idx.sort_unstable();
    Ok((train_idx, holdout_idx))
}

fn evaluate(
    truth: &Array1<usize>,
    predicted: &[usize],
    diseases: &DiseaseVocabulary,
    train_examples: usize,
) -> EvaluationReport {
    let total = truth.len();
    let correct = truth
        .iter()
        .zip(predicted)
        .filter(|(t, p)| *t == *p)
        .count();
    let accuracy = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    };

    let mut per_class = Vec::with_capacity(diseases.len());
    for (code, name) in diseases.names().iter().enumerate() {
        let tp = truth
            .iter()
            .zip(predicted)
            .filter(|(t, p)| **t == code && **p == code)
            .count();
        let fp = predicted.iter().filter(|&&p| p == code).count() - tp;
        let support = truth.iter().filter(|&&t| t == code).count();
        let missed = support - tp;

        let precision = if tp + fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            0.0
        };
        let recall = if tp + missed > 0 {
            tp as f64 / (tp + missed) as f64
        } else {
            0.0
        };
        per_class.push(ClassReport {
            condition: name.clone(),
            precision,
            recall,
            support,
        });
    }

    EvaluationReport {
        accuracy,
        train_examples,
        holdout_examples: total,
        per_class,
    }
}
