//! Fehlertaxonomie der Brücke
//!
//! Jede Variante wird 1:1 auf einen HTTP-Status und eine feste,
//! menschenlesbare Meldung abgebildet. Interne Details (Upstream-Status,
//! Fehlerursachen) landen im Log, nie in der Antwort.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::relay::SubmitResponse;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bridge is not configured yet.")]
    NotConfigured,

    #[error("Payload too large.")]
    PayloadTooLarge,

    #[error("{0}")]
    Validation(&'static str),

    #[error("Upstream flow rejected the payload.")]
    UpstreamRejected(u16),

    #[error("Unexpected server error.")]
    Unexpected(#[from] reqwest::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamRejected(_) => StatusCode::BAD_GATEWAY,
            RelayError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::UpstreamRejected(status) => {
                tracing::warn!(upstream_status = status, "Upstream-Flow hat das Dokument abgelehnt");
            }
            RelayError::Unexpected(source) => {
                tracing::error!(error = %source, "Weiterleitung unerwartet fehlgeschlagen");
            }
            _ => {}
        }

        let body = Json(SubmitResponse {
            ok: false,
            message: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}
