//! Integrationstests der Brücke
//!
//! Jeder Test startet die Brücke (und bei Bedarf einen Upstream-Stub)
//! auf einem flüchtigen Port und spricht sie wie die Web-App über HTTP an.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tokio::sync::Mutex;

use garantie_bridge::{router, AppState, BridgeConfig, SubmitResponse, MAX_REQUEST_BYTES};
use garantie_common::{IdentificationPatch, WizardStore};

async fn spawn_bridge(upstream_url: Option<String>) -> String {
    let config = BridgeConfig {
        upstream_url,
        bind_addr: String::new(),
    };
    let app = router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fehlgeschlagen");
    let addr = listener.local_addr().expect("Adresse fehlt");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve") });
    format!("http://{addr}")
}

#[derive(Clone)]
struct UpstreamStub {
    status: StatusCode,
    received: Arc<Mutex<Vec<String>>>,
}

/// Startet einen Upstream-Stub, der jede Anfrage aufzeichnet und mit
/// dem gegebenen Status antwortet
async fn spawn_upstream(status: StatusCode) -> (String, Arc<Mutex<Vec<String>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let stub = UpstreamStub {
        status,
        received: received.clone(),
    };
    let app = Router::new()
        .route("/flow", post(upstream_handler))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fehlgeschlagen");
    let addr = listener.local_addr().expect("Adresse fehlt");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve") });
    (format!("http://{addr}/flow"), received)
}

async fn upstream_handler(State(stub): State<UpstreamStub>, body: Bytes) -> StatusCode {
    stub.received
        .lock()
        .await
        .push(String::from_utf8_lossy(&body).to_string());
    stub.status
}

/// Baut über Store und Exporter ein echtes, formgültiges Exportdokument
fn valid_payload() -> String {
    let mut store = WizardStore::new();
    store.update_identification(IdentificationPatch {
        warranty_number: Some("GA-2024-0815".to_string()),
        vin: Some("WVWZZZ1JZXW000001".to_string()),
        technician_name: Some("Max Mustermann".to_string()),
        technician_email: Some("max@werkstatt.example".to_string()),
    });
    store.add_work_step(
        "Demontage".to_string(),
        "Bauteil ausgebaut".to_string(),
        vec![],
        Some(30),
    );
    store.export_payload().expect("Export fehlgeschlagen")
}

async fn submit(base: &str, body: impl Into<reqwest::Body>) -> (u16, SubmitResponse) {
    let response = reqwest::Client::new()
        .post(format!("{base}/api/submit-warranty"))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .expect("Anfrage fehlgeschlagen");
    let status = response.status().as_u16();
    let parsed: SubmitResponse = response.json().await.expect("Antwort kein JSON");
    (status, parsed)
}

#[tokio::test]
async fn test_unconfigured_bridge_returns_503() {
    let base = spawn_bridge(None).await;

    let (status, body) = submit(&base, valid_payload()).await;
    assert_eq!(status, 503);
    assert!(!body.ok);
    assert_eq!(body.message, "Bridge is not configured yet.");
}

#[tokio::test]
async fn test_oversized_payload_returns_413() {
    // Upstream konfiguriert, wird aber nie erreicht
    let base = spawn_bridge(Some("http://127.0.0.1:9/flow".to_string())).await;

    let oversized = "x".repeat(MAX_REQUEST_BYTES + 1024 * 1024);
    let (status, body) = submit(&base, oversized).await;
    assert_eq!(status, 413);
    assert!(!body.ok);
    assert_eq!(body.message, "Payload too large.");
}

#[tokio::test]
async fn test_missing_schema_version_returns_400() {
    let base = spawn_bridge(Some("http://127.0.0.1:9/flow".to_string())).await;

    let (status, body) = submit(&base, r#"{"arbeitsablauf": []}"#).await;
    assert_eq!(status, 400);
    assert!(!body.ok);
    assert_eq!(body.message, "schema_version is required.");
}

#[tokio::test]
async fn test_non_object_body_returns_400() {
    let base = spawn_bridge(Some("http://127.0.0.1:9/flow".to_string())).await;

    let (status, body) = submit(&base, "[1, 2, 3]").await;
    assert_eq!(status, 400);
    assert_eq!(body.message, "Payload must be a JSON object.");

    // unlesbares JSON fällt in dieselbe Meldung
    let (status, body) = submit(&base, "kein json").await;
    assert_eq!(status, 400);
    assert_eq!(body.message, "Payload must be a JSON object.");
}

#[tokio::test]
async fn test_validation_reports_first_violation() {
    let base = spawn_bridge(Some("http://127.0.0.1:9/flow".to_string())).await;

    let (_, body) = submit(&base, "{}").await;
    assert_eq!(body.message, "schema_version is required.");

    let (_, body) = submit(&base, r#"{"schema_version": "1.0"}"#).await;
    assert_eq!(body.message, "grunddaten is required.");

    let (_, body) = submit(&base, r#"{"schema_version": "1.0", "grunddaten": {}}"#).await;
    assert_eq!(body.message, "reklamiertes_bauteil is required.");
}

#[tokio::test]
async fn test_valid_payload_is_forwarded_unchanged() {
    let (upstream_url, received) = spawn_upstream(StatusCode::OK).await;
    let base = spawn_bridge(Some(upstream_url)).await;

    let payload = valid_payload();
    let (status, body) = submit(&base, payload.clone()).await;

    assert_eq!(status, 200);
    assert!(body.ok);
    assert_eq!(body.message, "Payload forwarded to the upstream flow.");

    // der Upstream sieht exakt die Originalbytes
    let seen = received.lock().await;
    assert_eq!(seen.as_slice(), [payload]);
}

#[tokio::test]
async fn test_upstream_rejection_returns_502() {
    let (upstream_url, _) = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR).await;
    let base = spawn_bridge(Some(upstream_url)).await;

    let (status, body) = submit(&base, valid_payload()).await;
    assert_eq!(status, 502);
    assert!(!body.ok);
    assert_eq!(body.message, "Upstream flow rejected the payload.");
}

#[tokio::test]
async fn test_unreachable_upstream_returns_500() {
    // Port 9 (discard): Verbindungsaufbau schlägt fehl
    let base = spawn_bridge(Some("http://127.0.0.1:9/flow".to_string())).await;

    let (status, body) = submit(&base, valid_payload()).await;
    assert_eq!(status, 500);
    assert!(!body.ok);
    assert_eq!(body.message, "Unexpected server error.");
}

#[tokio::test]
async fn test_healthz() {
    let base = spawn_bridge(None).await;

    let response = reqwest::get(format!("{base}/healthz"))
        .await
        .expect("Anfrage fehlgeschlagen");
    assert_eq!(response.status().as_u16(), 200);
}
