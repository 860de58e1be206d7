//! Pre-trained purchase-amount regressor loaded from a JSON dump.
//!
//! The model is a sum of gradient-boosted decision stumps on top of a bias
//! term. This program only consumes it: training lives in the export
//! pipeline that produced the dump.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid model: {0}")]
    Invalid(String),
}

/// Single-node decision tree used as a weak learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stump {
    /// Feature index used for the split.
    pub feature_index: u16,
    /// Threshold in feature units.
    pub threshold: f32,
    /// Contribution for `feature <= threshold`.
    pub left_value: f32,
    /// Contribution for `feature > threshold`.
    pub right_value: f32,
}

impl Stump {
    pub fn predict(&self, features: &[f32]) -> f32 {
        let value = features.get(self.feature_index as usize).copied().unwrap_or(0.0);
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Gradient-boosted stump ensemble predicting a purchase amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseModel {
    /// Model format version.
    pub model_version: i64,
    /// Number of `f32` values per input row.
    pub feature_len: usize,
    /// Base prediction before any boosting rounds.
    pub bias: f32,
    /// Learning rate applied to each stump contribution.
    pub learning_rate: f32,
    /// Boosting rounds in application order.
    pub stumps: Vec<Stump>,
}

impl PurchaseModel {
    /// Load a model dump and validate its structural invariants.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path)?;
        let model: Self = serde_json::from_slice(&bytes)?;
        model.validate()?;
        debug!(
            path = %path.display(),
            feature_len = model.feature_len,
            rounds = model.stumps.len(),
            "Model loaded"
        );
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.feature_len == 0 {
            return Err(ModelError::Invalid("feature_len must be positive".into()));
        }
        if !self.bias.is_finite() || !self.learning_rate.is_finite() {
            return Err(ModelError::Invalid("bias and learning_rate must be finite".into()));
        }
        for (round, stump) in self.stumps.iter().enumerate() {
            if stump.feature_index as usize >= self.feature_len {
                return Err(ModelError::Invalid(format!(
                    "round {round} splits on feature {} but feature_len is {}",
                    stump.feature_index, self.feature_len
                )));
            }
            if !stump.threshold.is_finite()
                || !stump.left_value.is_finite()
                || !stump.right_value.is_finite()
            {
                return Err(ModelError::Invalid(format!("round {round} has non-finite parameters")));
            }
        }
        Ok(())
    }

    /// Predict the purchase amount for a single feature row.
    pub fn predict(&self, features: &[f32]) -> f32 {
        let mut raw = self.bias;
        for stump in &self.stumps {
            raw += self.learning_rate * stump.predict(features);
        }
        raw
    }

    /// Predict purchase amounts for a batch of rows.
    pub fn predict_batch(&self, rows: &[Vec<f32>]) -> Vec<f32> {
        rows.iter().map(|row| self.predict(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_round_model() -> PurchaseModel {
        PurchaseModel {
            model_version: 1,
            feature_len: 2,
            bias: 100.0,
            learning_rate: 0.5,
            stumps: vec![
                Stump {
                    feature_index: 0,
                    threshold: 0.5,
                    left_value: 20.0,
                    right_value: -20.0,
                },
                Stump {
                    feature_index: 1,
                    threshold: 0.0,
                    left_value: -10.0,
                    right_value: 30.0,
                },
            ],
        }
    }

    #[test]
    fn stump_predict_branches() {
        let stump = Stump {
            feature_index: 0,
            threshold: 0.5,
            left_value: -1.0,
            right_value: 2.0,
        };
        assert_eq!(stump.predict(&[0.0]), -1.0);
        assert_eq!(stump.predict(&[0.5]), -1.0);
        assert_eq!(stump.predict(&[0.6]), 2.0);
    }

    #[test]
    fn predict_sums_bias_and_scaled_rounds() {
        let model = two_round_model();
        // 100 + 0.5*20 + 0.5*(-10)
        assert_eq!(model.predict(&[0.0, 0.0]), 105.0);
        // 100 + 0.5*(-20) + 0.5*30
        assert_eq!(model.predict(&[1.0, 1.0]), 105.0);
        assert_eq!(model.predict(&[0.0, 1.0]), 125.0);
    }

    #[test]
    fn predict_batch_matches_single_rows() {
        let model = two_round_model();
        let rows = vec![vec![0.0, 0.0], vec![0.0, 1.0]];
        let batch = model.predict_batch(&rows);
        assert_eq!(batch, vec![model.predict(&rows[0]), model.predict(&rows[1])]);
    }

    #[test]
    fn validate_rejects_out_of_range_split() {
        let mut model = two_round_model();
        model.stumps[1].feature_index = 2;
        assert!(matches!(model.validate(), Err(ModelError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_non_finite_parameters() {
        let mut model = two_round_model();
        model.stumps[0].threshold = f32::NAN;
        assert!(matches!(model.validate(), Err(ModelError::Invalid(_))));
    }

    #[test]
    fn load_roundtrips_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let model = two_round_model();
        std::fs::write(&path, serde_json::to_vec(&model).unwrap()).unwrap();

        let first = PurchaseModel::load(&path).unwrap();
        let second = PurchaseModel::load(&path).unwrap();
        assert_eq!(first.feature_len, model.feature_len);
        assert_eq!(first.stumps.len(), model.stumps.len());
        assert_eq!(first.predict(&[0.0, 1.0]), second.predict(&[0.0, 1.0]));
    }

    #[test]
    fn load_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, b"not json").unwrap();
        assert!(matches!(PurchaseModel::load(&path), Err(ModelError::Json(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::path::Path::new("does/not/exist.json");
        assert!(matches!(PurchaseModel::load(path), Err(ModelError::Io(_))));
    }
}
