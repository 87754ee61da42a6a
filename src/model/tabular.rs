//! Row encoding and output decoding for tensor models, kept free of any
//! tensor library so it can be exercised directly.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

use crate::types::{EncodedFeatures, FeatureValue};

/// Sidecar `meta.json` describing the model's input layout.
#[derive(Debug, Clone, Deserialize)]
pub struct TabularMeta {
    /// authoritative input order
    pub feat_list: Vec<String>,
    /// feature -> category -> numeric code, for text columns such as `gender`
    #[serde(default)]
    pub categories: HashMap<String, HashMap<String, f32>>,
}

impl TabularMeta {
    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("failed to read meta at {}", path.display()))?;
        Self::parse(&txt)
    }

    pub fn parse(txt: &str) -> Result<Self> {
        let meta: TabularMeta =
            serde_json::from_str(txt).with_context(|| "failed to parse meta.json")?;
        if meta.feat_list.is_empty() {
            bail!("meta.json has an empty feat_list");
        }
        Ok(meta)
    }

    /// Lay the row out in `feat_list` order. Text cells go through `categories`.
    pub fn encode_row(&self, row: &EncodedFeatures) -> Result<Vec<f32>> {
        let mut v = Vec::with_capacity(self.feat_list.len());
        for k in &self.feat_list {
            let value = row
                .get(k)
                .with_context(|| format!("row is missing column `{}`", k))?;
            let x = match value {
                FeatureValue::Text(s) => *self
                    .categories
                    .get(k)
                    .and_then(|codes| codes.get(s))
                    .with_context(|| format!("no code for `{}` = {:?}", k, s))?,
                FeatureValue::Int(i) => *i as f32,
                FeatureValue::Float(f) => *f as f32,
            };
            v.push(x);
        }
        Ok(v)
    }
}

/// Positive-class probability from one output row.
///
/// One value is a positive-class logit. Two values are per-class scores, used
/// as-is when they already form a distribution and softmaxed otherwise.
pub fn positive_from_scores(scores: &[f64]) -> Result<f64> {
    match *scores {
        [logit] => Ok(1.0 / (1.0 + (-logit).exp())),
        [neg, pos] => {
            if neg >= 0.0 && pos >= 0.0 && ((neg + pos) - 1.0).abs() < 1e-4 {
                Ok(pos)
            } else {
                let m = neg.max(pos);
                let (en, ep) = ((neg - m).exp(), (pos - m).exp());
                Ok(ep / (en + ep))
            }
        }
        _ => bail!("expected 1 or 2 outputs, got {}", scores.len()),
    }
}
