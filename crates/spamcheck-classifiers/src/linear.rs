//! Logistic regression classifier

use crate::classifier::{argmax, sigmoid, softmax, Classifier};
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use spamcheck_core::{ClassId, Error, Result};

/// Fitted logistic regression parameters as stored in the model artifact.
///
/// A binary model carries a single coefficient row scoring the second class;
/// a multinomial model carries one row per class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegressionParams {
    pub classes: Vec<ClassId>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct LogisticRegression {
    classes: Vec<ClassId>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    n_features: usize,
}

impl LogisticRegression {
    pub fn from_params(params: LogisticRegressionParams) -> Result<Self> {
        let LogisticRegressionParams {
            classes,
            coef,
            intercept,
        } = params;

        if classes.len() < 2 {
            return Err(Error::artifact(format!(
                "logistic regression needs at least 2 classes, got {}",
                classes.len()
            )));
        }

        let binary_shape = classes.len() == 2 && coef.len() == 1;
        if !binary_shape && coef.len() != classes.len() {
            return Err(Error::artifact(format!(
                "logistic regression has {} coefficient rows for {} classes",
                coef.len(),
                classes.len()
            )));
        }

        if intercept.len() != coef.len() {
            return Err(Error::artifact(format!(
                "logistic regression has {} intercepts for {} coefficient rows",
                intercept.len(),
                coef.len()
            )));
        }

        let n_features = coef[0].len();
        if n_features == 0 || coef.iter().any(|row| row.len() != n_features) {
            return Err(Error::artifact(
                "logistic regression coefficient rows must be non-empty and equally sized",
            ));
        }

        let all_finite = coef.iter().flatten().chain(intercept.iter()).all(|v| v.is_finite());
        if !all_finite {
            return Err(Error::artifact(
                "logistic regression parameters contain non-finite values",
            ));
        }

        Ok(Self {
            classes,
            coef,
            intercept,
            n_features,
        })
    }

    pub fn classes(&self) -> &[ClassId] {
        &self.classes
    }

    /// Width of the feature rows this model accepts
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Raw linear scores, one per coefficient row
    pub fn decision_function(&self, row: &FeatureVector) -> Result<Vec<f64>> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(weights, bias)| Ok(row.dot(weights)? + bias))
            .collect()
    }

    fn row_proba(&self, row: &FeatureVector) -> Result<Vec<f64>> {
        let scores = self.decision_function(row)?;
        if scores.len() == 1 {
            let p = sigmoid(scores[0]);
            Ok(vec![1.0 - p, p])
        } else {
            Ok(softmax(&scores))
        }
    }
}

impl Classifier for LogisticRegression {
    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<ClassId>> {
        self.predict_proba(features)?
            .iter()
            .map(|row| {
                argmax(row)
                    .map(|index| self.classes[index])
                    .ok_or_else(|| Error::classifier("empty probability row"))
            })
            .collect()
    }

    fn predict_proba(&self, features: &[FeatureVector]) -> Result<Vec<Vec<f64>>> {
        features.iter().map(|row| self.row_proba(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_model() -> LogisticRegression {
        LogisticRegression::from_params(LogisticRegressionParams {
            classes: vec![0, 1],
            coef: vec![vec![2.0, -3.0, 0.0]],
            intercept: vec![-0.5],
        })
        .unwrap()
    }

    #[test]
    fn test_binary_probabilities() {
        let model = binary_model();
        let rows = vec![
            FeatureVector::from_dense(&[1.0, 0.0, 0.0]),
            FeatureVector::from_dense(&[0.0, 1.0, 0.0]),
        ];

        let proba = model.predict_proba(&rows).unwrap();
        assert!((proba[0][1] - sigmoid(1.5)).abs() < 1e-12);
        assert!((proba[0][0] + proba[0][1] - 1.0).abs() < 1e-12);
        assert!(proba[1][0] > 0.9);

        assert_eq!(model.predict(&rows).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_zero_row_uses_intercept() {
        let model = binary_model();
        let proba = model.predict_proba(&[FeatureVector::zeros(3)]).unwrap();
        assert!((proba[0][1] - sigmoid(-0.5)).abs() < 1e-12);
        assert_eq!(model.predict(&[FeatureVector::zeros(3)]).unwrap(), vec![0]);
    }

    #[test]
    fn test_multinomial_softmax() {
        let model = LogisticRegression::from_params(LogisticRegressionParams {
            classes: vec![0, 1, 2],
            coef: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]],
            intercept: vec![0.0, 0.0, 0.0],
        })
        .unwrap();

        let proba = model
            .predict_proba(&[FeatureVector::from_dense(&[0.0, 4.0])])
            .unwrap();
        assert_eq!(proba[0].len(), 3);
        assert!((proba[0].iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(
            model.predict(&[FeatureVector::from_dense(&[0.0, 4.0])]).unwrap(),
            vec![1]
        );
    }

    #[test]
    fn test_dimension_mismatch_at_prediction_time() {
        let model = binary_model();
        let err = model
            .predict_proba(&[FeatureVector::zeros(5)])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 3,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_params() {
        let bad = [
            LogisticRegressionParams {
                classes: vec![1],
                coef: vec![vec![1.0]],
                intercept: vec![0.0],
            },
            LogisticRegressionParams {
                classes: vec![0, 1, 2],
                coef: vec![vec![1.0]],
                intercept: vec![0.0],
            },
            LogisticRegressionParams {
                classes: vec![0, 1],
                coef: vec![vec![1.0]],
                intercept: vec![],
            },
            LogisticRegressionParams {
                classes: vec![0, 1],
                coef: vec![vec![1.0, 2.0], vec![1.0]],
                intercept: vec![0.0, 0.0],
            },
            LogisticRegressionParams {
                classes: vec![0, 1],
                coef: vec![vec![f64::INFINITY]],
                intercept: vec![0.0],
            },
        ];

        for params in bad {
            assert!(LogisticRegression::from_params(params).is_err());
        }
    }
}
