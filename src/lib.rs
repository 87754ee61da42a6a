//! Insurance fraud probability service.
//!
//! A claim form is mapped into the classifier's feature encoding
//! ([`features::preprocess`]), scored by a [`model::Classifier`], and the
//! positive-class probability is rendered back as a percentage.

pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod reference;
pub mod server;
pub mod types;

pub use error::{AppError, FeatureError};
pub use features::preprocess;
pub use model::{load_classifier, Classifier, LinearModel};
pub use reference::ReferenceTable;
pub use server::{router, AppState};
pub use types::{EncodedFeatures, FeatureValue, Prediction, RawClaim};
