use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Form submission as received: field name -> raw string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawClaim {
    pub fields: HashMap<String, String>,
}

impl RawClaim {
    /// Flatten decoded form pairs. The first value of a repeated key wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields = HashMap::new();
        for (k, v) in pairs {
            fields.entry(k).or_insert(v);
        }
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawClaim {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_pairs(iter.into_iter().map(|(k, v)| (k.into(), v.into())))
    }
}

/// One cell of the classifier input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FeatureValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Int(v) => Some(*v as f64),
            FeatureValue::Float(v) => Some(*v),
            FeatureValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(v) => write!(f, "{v}"),
            FeatureValue::Float(v) => write!(f, "{v}"),
            FeatureValue::Text(s) => f.write_str(s),
        }
    }
}

/// Single-row tabular input handed to the classifier. Keyed by column name.
pub type EncodedFeatures = BTreeMap<String, FeatureValue>;

/// Class probabilities for one row: (no fraud, fraud).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub negative: f64,
    pub positive: f64,
}

impl Prediction {
    pub fn from_positive(p: f64) -> Self {
        Self {
            negative: 1.0 - p,
            positive: p,
        }
    }

    /// Positive-class probability as a percentage with two decimals, e.g. "37.42".
    pub fn percent(&self) -> String {
        format!("{:.2}", self.positive * 100.0)
    }
}
