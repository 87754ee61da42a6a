use std::num::ParseIntError;

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Failures of the field mapping step.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not an integer: {value:?}")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("zip code {0} not found in reference table")]
    UnknownZip(i64),
}

/// Anything that can go wrong while serving `/predict`.
///
/// All variants render the same generic 500 page; the detail only goes to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not decode form: {0}")]
    Form(#[from] FormRejection),

    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Model(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("predict failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Internal Server Error</h1>"),
        )
            .into_response()
    }
}
