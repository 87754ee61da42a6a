use anyhow::Result;
use std::{path::Path, sync::Arc};

use crate::types::{EncodedFeatures, Prediction};

mod linear;
mod tabular;
#[cfg(feature = "torch")]
mod torch;

pub use linear::{LinearModel, Term};
pub use tabular::{positive_from_scores, TabularMeta};
#[cfg(feature = "torch")]
pub use torch::TorchModel;

/// Anything that can score a single encoded row.
pub trait Classifier: Send + Sync {
    fn predict_proba(&self, row: &EncodedFeatures) -> Result<Prediction>;

    /// Short human-readable description for startup logs.
    fn describe(&self) -> String;
}

/// Load the classifier artifact at `path`.
///
/// TorchScript files (`.pt`, `.ts`) need the `torch` feature; everything else is
/// read as a JSON linear model.
pub fn load_classifier(path: &Path) -> Result<Arc<dyn Classifier>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        #[cfg(feature = "torch")]
        "pt" | "ts" => {
            let meta = path.with_extension("meta.json");
            Ok(Arc::new(TorchModel::new(path, &meta)?))
        }
        #[cfg(not(feature = "torch"))]
        "pt" | "ts" => anyhow::bail!(
            "{} looks like a TorchScript model; rebuild with `--features torch`",
            path.display()
        ),
        _ => Ok(Arc::new(LinearModel::load(path)?)),
    }
}
