use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::features;
use crate::model::Classifier;
use crate::reference::ReferenceTable;
use crate::types::RawClaim;

const INDEX_HTML: &str = include_str!("../templates/index.html");
const RESULT_HTML: &str = include_str!("../templates/result.html");

// ---------- Server state ----------

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub reference: Arc<ReferenceTable>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>, reference: ReferenceTable) -> Self {
        Self {
            classifier,
            reference: Arc::new(reference),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/predict", post(predict))
        .with_state(state)
}

// ---------- Handlers ----------

async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn predict(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(pairs) = form?;
    let raw = RawClaim::from_pairs(pairs);
    let row = features::preprocess(raw, &state.reference)?;
    let prediction = state.classifier.predict_proba(&row)?;
    let probability = prediction.percent();

    if std::env::var("LOG_PRED").ok().as_deref() == Some("1") {
        let sample: Vec<String> = row.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        tracing::info!(
            "predict cols={} p={:.4} row=[{}]",
            row.len(),
            prediction.positive,
            sample.join(", ")
        );
    }

    Ok(Html(render_result(&probability)))
}

pub fn render_result(probability: &str) -> String {
    RESULT_HTML.replace("{{ probability }}", probability)
}
