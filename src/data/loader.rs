//! Tabular dataset ingestion for the training pipeline.

use std::path::Path;

use ndarray::{Array1, Array2};
use tracing::info;

use crate::{
    error::DatasetError,
    vocab::{DiseaseVocabulary, SymptomVocabulary},
};

/// Name of the label column carrying the diagnosed condition.
pub const LABEL_COLUMN: &str = "prognosis";

/// Loader output consumed by the training pipeline.
#[derive(Debug, Clone)]
pub struct TrainingData {
    pub records: Array2<f64>,
    pub targets: Array1<usize>,
    pub symptoms: SymptomVocabulary,
    pub diseases: DiseaseVocabulary,
}

/// Read a CSV dataset into a binary feature matrix and encoded labels.
///
/// Every column except [`LABEL_COLUMN`] is treated as a 0/1 symptom
/// indicator in file order. Malformed rows fail the whole load rather than
/// being silently dropped.
pub fn load_dataset(path: &Path) -> Result<TrainingData, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::Missing(path.to_path_buf()));
    }
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let label_idx = headers
        .iter()
        .position(|header| header == LABEL_COLUMN)
        .ok_or(DatasetError::MissingLabelColumn(LABEL_COLUMN))?;

    let symptom_columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != label_idx)
        .map(|(_, name)| name.trim().to_string())
        .collect();
    let symptoms = SymptomVocabulary::from_columns(symptom_columns);

    let mut cells = Vec::new();
    let mut labels = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        for (col_idx, value) in record.iter().enumerate() {
            if col_idx == label_idx {
                labels.push(value.trim().to_string());
                continue;
            }
            let indicator: f64 = value.trim().parse().map_err(|_| DatasetError::BadValue {
                row: row_idx,
                column: headers.get(col_idx).unwrap_or("?").to_string(),
                value: value.to_string(),
            })?;
            cells.push(indicator);
        }
    }
    if labels.is_empty() {
        return Err(DatasetError::Empty);
    }

    let (diseases, codes) = DiseaseVocabulary::fit_transform(&labels);
    let records = Array2::from_shape_vec((labels.len(), symptoms.len()), cells)
        .map_err(|err| DatasetError::Shape(err.to_string()))?;
    let targets = Array1::from_vec(codes);

    info!(
        rows = targets.len(),
        symptoms = symptoms.len(),
        diseases = diseases.len(),
        "loaded training dataset"
    );
    Ok(TrainingData {
        records,
        targets,
        symptoms,
        diseases,
    })
}
