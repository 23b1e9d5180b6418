//! Entgegennahme und Weiterleitung des Exportdokuments
//!
//! Zustandslose Brücke: pro Anfrage wird die Form geprüft und der
//! Original-Body unverändert an den konfigurierten Flow weitergereicht.
//! Kein Retry, keine Deduplizierung — Wiederholungen liegen beim
//! Aufrufer.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use garantie_common::validate_shape;

use crate::config::{BridgeConfig, UPSTREAM_URL_VAR};
use crate::error::RelayError;

/// Obergrenze für den Anfrage-Body
pub const MAX_REQUEST_BYTES: usize = 8 * 1024 * 1024;

/// Antwortkörper der Brücke; gilt für Erfolg und alle Fehlerfälle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<BridgeConfig>,
    client: reqwest::Client,
}

impl AppState {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config: Arc::new(config),
            client: reqwest::Client::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/submit-warranty", post(submit_warranty))
        .route("/healthz", get(healthz))
        // Limit über der eigenen Obergrenze, damit der 413-Zweig die
        // vertragliche JSON-Antwort liefert statt axums nackter 413
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES * 2))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn submit_warranty(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, RelayError> {
    let Some(upstream_url) = state.config.upstream_url.as_deref() else {
        tracing::warn!("{UPSTREAM_URL_VAR} ist nicht gesetzt");
        return Err(RelayError::NotConfigured);
    };

    if body.len() > MAX_REQUEST_BYTES {
        return Err(RelayError::PayloadTooLarge);
    }

    // unlesbares JSON fällt auf Null zurück und damit in die
    // "kein Objekt"-Meldung der Formprüfung
    let payload: serde_json::Value =
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    validate_shape(&payload).map_err(RelayError::Validation)?;

    // Originalbytes unverändert weiterreichen
    let response = state
        .client
        .post(upstream_url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(RelayError::UpstreamRejected(response.status().as_u16()));
    }

    Ok(Json(SubmitResponse {
        ok: true,
        message: "Payload forwarded to the upstream flow.".to_string(),
    }))
}
