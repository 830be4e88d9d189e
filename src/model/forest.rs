//! Bagged decision-tree ensemble over the symptom feature schema.

use linfa::{
    prelude::{Fit, Predict},
    Dataset,
};
use linfa_trees::{DecisionTree, SplitQuality};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

use crate::error::TrainingError;

/// Number of trees in the ensemble.
pub const TREE_COUNT: usize = 100;
/// Depth cap keeping fit time bounded on small per-class counts.
pub const MAX_DEPTH: usize = 10;
const MIN_WEIGHT_SPLIT: f32 = 5.0;
const MIN_WEIGHT_LEAF: f32 = 2.0;

/// Trained ensemble mapping a binary feature vector to a probability
/// distribution over condition codes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConditionForest {
    trees: Vec<DecisionTree<f64, usize>>,
    n_classes: usize,
}

impl ConditionForest {
    /// Fit [`TREE_COUNT`] trees, one per bootstrap resample drawn from `rng`.
    pub fn fit(
        records: &Array2<f64>,
        targets: &Array1<usize>,
        n_classes: usize,
        rng: &mut StdRng,
    ) -> Result<Self, TrainingError> {
        let rows = records.nrows();
        let mut trees = Vec::with_capacity(TREE_COUNT);
        for _ in 0..TREE_COUNT {
            let indices: Vec<usize> = (0..rows).map(|_| rng.gen_range(0..rows)).collect();
            let sample = Dataset::new(
                records.select(Axis(0), &indices),
                targets.select(Axis(0), &indices),
            );
            let tree = DecisionTree::params()
                .split_quality(SplitQuality::Gini)
                .max_depth(Some(MAX_DEPTH))
                .min_weight_split(MIN_WEIGHT_SPLIT)
                .min_weight_leaf(MIN_WEIGHT_LEAF)
                .fit(&sample)
                .map_err(|err| TrainingError::Fit(err.to_string()))?;
            trees.push(tree);
        }
        Ok(Self { trees, n_classes })
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Vote-share probability distribution for a single feature vector.
    pub fn predict_proba(&self, features: ArrayView1<'_, f64>) -> Vec<f64> {
        let row = features.to_owned().insert_axis(Axis(0));
        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            let predicted = tree.predict(&row);
            if let Some(&code) = predicted.get(0) {
                if code < self.n_classes {
                    votes[code] += 1;
                }
            }
        }
        let total = self.trees.len().max(1) as f64;
        votes.into_iter().map(|count| count as f64 / total).collect()
    }

    /// Majority-vote class codes for a batch of feature vectors.
    pub fn predict(&self, records: &Array2<f64>) -> Vec<usize> {
        (0..records.nrows())
            .map(|idx| argmax(&self.predict_proba(records.row(idx))))
            .collect()
    }

    /// Mean per-feature impurity-decrease importance across trees.
    pub fn feature_importance(&self, n_features: usize) -> Vec<f64> {
        let mut totals = vec![0.0f64; n_features];
        for tree in &self.trees {
            for (slot, value) in tree.feature_importance().into_iter().enumerate() {
                if slot < n_features {
                    totals[slot] += value;
                }
            }
        }
        let count = self.trees.len().max(1) as f64;
        totals.into_iter().map(|total| total / count).collect()
    }
}

/// Index of the largest probability; ties resolve to the lowest code.
pub fn argmax(proba: &[f64]) -> usize {
    let mut best = 0usize;
    for (idx, &value) in proba.iter().enumerate() {
        if value > proba[best] {
            best = idx;
        }
    }
    best
}
