use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use super::Classifier;
use crate::types::{EncodedFeatures, Prediction};

/// Logistic regression exported as JSON.
///
/// ```json
/// { "intercept": -1.2,
///   "terms": [
///     { "kind": "numeric",  "feature": "age_of_driver", "weight": -0.03, "mean": 43.0, "scale": 12.0 },
///     { "kind": "category", "feature": "gender", "value": "M", "weight": 0.1 } ] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub terms: Vec<Term>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Term {
    Numeric {
        feature: String,
        weight: f64,
        #[serde(default)]
        mean: f64,
        #[serde(default = "unit_scale")]
        scale: f64,
    },
    /// One-hot: contributes `weight` when the feature renders as `value`.
    Category {
        feature: String,
        value: String,
        weight: f64,
    },
}

fn unit_scale() -> f64 {
    1.0
}

impl Term {
    fn feature(&self) -> &str {
        match self {
            Term::Numeric { feature, .. } | Term::Category { feature, .. } => feature,
        }
    }
}

impl LinearModel {
    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("failed to read model at {}", path.display()))?;
        let model: LinearModel = serde_json::from_str(&txt)
            .with_context(|| format!("failed to parse model {}", path.display()))?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.terms.is_empty() {
            bail!("model has no terms");
        }
        if !self.intercept.is_finite() {
            bail!("intercept is not finite");
        }
        for t in &self.terms {
            match t {
                Term::Numeric {
                    feature,
                    weight,
                    mean,
                    scale,
                } => {
                    if !(weight.is_finite() && mean.is_finite() && scale.is_finite()) {
                        bail!("non-finite parameter on `{}`", feature);
                    }
                    if *scale == 0.0 {
                        bail!("zero scale on `{}`", feature);
                    }
                }
                Term::Category { feature, weight, .. } => {
                    if !weight.is_finite() {
                        bail!("non-finite weight on `{}`", feature);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn logit(&self, row: &EncodedFeatures) -> Result<f64> {
        let mut z = self.intercept;
        for t in &self.terms {
            let value = row
                .get(t.feature())
                .with_context(|| format!("row is missing column `{}`", t.feature()))?;
            match t {
                Term::Numeric {
                    feature,
                    weight,
                    mean,
                    scale,
                } => {
                    let Some(x) = value.as_f64() else {
                        bail!("column `{}` is not numeric: {:?}", feature, value);
                    };
                    z += weight * (x - mean) / scale;
                }
                Term::Category { value: want, weight, .. } => {
                    if value.to_string() == *want {
                        z += weight;
                    }
                }
            }
        }
        Ok(z)
    }
}

impl Classifier for LinearModel {
    fn predict_proba(&self, row: &EncodedFeatures) -> Result<Prediction> {
        let z = self.logit(row)?;
        Ok(Prediction::from_positive(sigmoid(z)))
    }

    fn describe(&self) -> String {
        format!("linear model, {} terms", self.terms.len())
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
