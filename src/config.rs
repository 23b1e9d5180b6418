//! Konfiguration der Brücke
//!
//! Einzige Pflichteinstellung ist die Upstream-URL. Ihr Fehlen ist kein
//! Startfehler, sondern ein normaler Laufzeitzustand: Einreichungen
//! werden dann mit 503 beantwortet, bis die Variable gesetzt ist.

use std::env;

/// Ziel-URL des Automatisierungs-Flows
pub const UPSTREAM_URL_VAR: &str = "UPSTREAM_FLOW_URL";

/// Bind-Adresse des Servers (optional)
pub const BIND_ADDR_VAR: &str = "BRIDGE_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub upstream_url: Option<String>,
    pub bind_addr: String,
}

impl BridgeConfig {
    pub fn from_env() -> Self {
        Self {
            upstream_url: non_blank(env::var(UPSTREAM_URL_VAR).ok()),
            bind_addr: non_blank(env::var(BIND_ADDR_VAR).ok())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

/// Leere oder nur aus Leerzeichen bestehende Werte gelten als nicht gesetzt
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_filters_empty_values() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(
            non_blank(Some("https://flow.example/hook".to_string())),
            Some("https://flow.example/hook".to_string())
        );
    }
}
