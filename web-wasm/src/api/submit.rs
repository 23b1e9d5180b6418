//! Einreichung des Exportdokuments an die Brücke
//!
//! Die Brücke antwortet immer mit `{ok, message}`; ein nicht lesbarer
//! Antwortkörper wird wie ein Fehlschlag ohne Meldung behandelt.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const SUBMIT_URL: &str = "/api/submit-warranty";

const SUCCESS_MESSAGE: &str = "Erfolgreich an den Garantie-Workflow übermittelt.";
const FAILURE_FALLBACK: &str = "Übertragung fehlgeschlagen.";

/// Antwortkörper der Brücke
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BridgeResponse {
    ok: bool,
    message: String,
}

/// Ergebnis der Einreichung für die UI
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub ok: bool,
    pub message: String,
}

/// Sendet das fertige Exportdokument an die Brücke
///
/// Err(JsValue) bedeutet einen Transportfehler (fetch selbst schlug
/// fehl); fachliche Ablehnungen kommen als `SubmitOutcome { ok: false }`.
pub async fn submit_report(payload: &str) -> Result<SubmitOutcome, JsValue> {
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::SameOrigin);
    opts.body(Some(&JsValue::from_str(payload)));

    let request = Request::new_with_str_and_init(SUBMIT_URL, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    // Antwortkörper best-effort parsen; Fehler fallen auf Default zurück
    let json = match resp.json() {
        Ok(promise) => JsFuture::from(promise).await.unwrap_or(JsValue::NULL),
        Err(_) => JsValue::NULL,
    };
    let parsed: BridgeResponse = serde_wasm_bindgen::from_value(json).unwrap_or_default();

    if !resp.ok() || !parsed.ok {
        let message = if parsed.message.is_empty() {
            FAILURE_FALLBACK.to_string()
        } else {
            parsed.message
        };
        return Ok(SubmitOutcome { ok: false, message });
    }

    Ok(SubmitOutcome {
        ok: true,
        message: SUCCESS_MESSAGE.to_string(),
    })
}
