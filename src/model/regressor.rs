use serde::Deserialize;

use crate::input::N_POLLUTANTS;
use crate::model::{AqiRegressor, FeatureVector};

pub const LEAF: i64 = -1;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regressor {
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    /// Mean of the tree outputs.
    RandomForest { trees: Vec<RegressionTree> },
    /// `init + learning_rate * sum(tree outputs)`.
    GradientBoosting {
        init: f64,
        learning_rate: f64,
        trees: Vec<RegressionTree>,
    },
}

/// Binary regression tree stored as parallel node arrays. Node 0 is the
/// root; `children_left == -1` marks a leaf; an internal node sends a row
/// left when `row[feature] <= threshold`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegressionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl RegressionTree {
    pub fn n_nodes(&self) -> usize {
        self.value.len()
    }

    /// Children must point forward, which rules out cycles and keeps
    /// `evaluate` terminating.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.n_nodes();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.children_left.len() != n
            || self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
        {
            return Err(format!(
                "tree node arrays differ in length (left={}, right={}, feature={}, threshold={}, value={})",
                self.children_left.len(),
                self.children_right.len(),
                self.feature.len(),
                self.threshold.len(),
                n
            ));
        }
        for node in 0..n {
            if !self.value[node].is_finite() {
                return Err(format!("node {} value is not finite", node));
            }
            let left = self.children_left[node];
            let right = self.children_right[node];
            if left == LEAF && right == LEAF {
                continue;
            }
            if left == LEAF || right == LEAF {
                return Err(format!("node {} has exactly one child", node));
            }
            for child in [left, right] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(format!("node {} has out-of-order child {}", node, child));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature >= N_POLLUTANTS as i64 {
                return Err(format!("node {} splits on unknown feature {}", node, feature));
            }
            if !self.threshold[node].is_finite() {
                return Err(format!("node {} threshold is not finite", node));
            }
        }
        Ok(())
    }

    pub fn evaluate(&self, row: &FeatureVector) -> f64 {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            node = if row[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        self.value[node]
    }
}

impl Regressor {
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Regressor::Linear {
                coefficients,
                intercept,
            } => {
                if coefficients.len() != N_POLLUTANTS {
                    return Err(format!(
                        "linear model has {} coefficients, expected {}",
                        coefficients.len(),
                        N_POLLUTANTS
                    ));
                }
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    return Err("linear model has non-finite parameters".to_string());
                }
                Ok(())
            }
            Regressor::RandomForest { trees } => validate_trees(trees),
            Regressor::GradientBoosting {
                init,
                learning_rate,
                trees,
            } => {
                if !init.is_finite() || !learning_rate.is_finite() {
                    return Err("boosting init/learning_rate is not finite".to_string());
                }
                validate_trees(trees)
            }
        }
    }

    fn predict_row(&self, row: &FeatureVector) -> f64 {
        match self {
            Regressor::Linear {
                coefficients,
                intercept,
            } => {
                intercept
                    + coefficients
                        .iter()
                        .zip(row.iter())
                        .map(|(c, x)| c * x)
                        .sum::<f64>()
            }
            Regressor::RandomForest { trees } => {
                let sum = trees.iter().map(|t| t.evaluate(row)).sum::<f64>();
                sum / trees.len() as f64
            }
            Regressor::GradientBoosting {
                init,
                learning_rate,
                trees,
            } => init + learning_rate * trees.iter().map(|t| t.evaluate(row)).sum::<f64>(),
        }
    }
}

impl AqiRegressor for Regressor {
    fn predict(&self, rows: &[FeatureVector]) -> Vec<f64> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }

    fn kind(&self) -> &'static str {
        match self {
            Regressor::Linear { .. } => "linear",
            Regressor::RandomForest { .. } => "random_forest",
            Regressor::GradientBoosting { .. } => "gradient_boosting",
        }
    }
}

fn validate_trees(trees: &[RegressionTree]) -> Result<(), String> {
    if trees.is_empty() {
        return Err("ensemble has no trees".to_string());
    }
    for (idx, tree) in trees.iter().enumerate() {
        tree.validate().map_err(|e| format!("tree {}: {}", idx, e))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/regressor.rs"]
mod tests;
