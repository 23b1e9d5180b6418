//! Formprüfung des Exportdokuments an der HTTP-Grenze
//!
//! Die Brücke prüft nur die äußere Form, nie den Inhalt: das Dokument
//! wird unverändert weitergereicht. Prüfreihenfolge und Meldungen sind
//! Teil des Vertrags — schema_version, grunddaten, reklamiertes_bauteil,
//! arbeitsablauf; die erste Verletzung gewinnt.

use serde_json::Value;

pub fn validate_shape(payload: &Value) -> Result<(), &'static str> {
    let Some(object) = payload.as_object() else {
        return Err("Payload must be a JSON object.");
    };

    match object.get("schema_version").and_then(Value::as_str) {
        Some(version) if !version.trim().is_empty() => {}
        _ => return Err("schema_version is required."),
    }

    if !object.get("grunddaten").is_some_and(Value::is_object) {
        return Err("grunddaten is required.");
    }

    if !object
        .get("reklamiertes_bauteil")
        .is_some_and(Value::is_object)
    {
        return Err("reklamiertes_bauteil is required.");
    }

    if !object.get("arbeitsablauf").is_some_and(Value::is_array) {
        return Err("arbeitsablauf must be an array.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_non_object() {
        assert_eq!(
            validate_shape(&json!([1, 2, 3])),
            Err("Payload must be a JSON object.")
        );
        assert_eq!(
            validate_shape(&json!("text")),
            Err("Payload must be a JSON object.")
        );
    }

    #[test]
    fn test_schema_version_must_be_non_empty_string() {
        assert_eq!(
            validate_shape(&json!({"arbeitsablauf": []})),
            Err("schema_version is required.")
        );
        assert_eq!(
            validate_shape(&json!({"schema_version": "   "})),
            Err("schema_version is required.")
        );
        assert_eq!(
            validate_shape(&json!({"schema_version": 2})),
            Err("schema_version is required.")
        );
    }

    #[test]
    fn test_check_order_is_fixed() {
        // alles fehlt: schema_version wird zuerst gemeldet
        assert_eq!(
            validate_shape(&json!({})),
            Err("schema_version is required.")
        );
        // dann grunddaten
        assert_eq!(
            validate_shape(&json!({"schema_version": "1.0"})),
            Err("grunddaten is required.")
        );
        // dann reklamiertes_bauteil
        assert_eq!(
            validate_shape(&json!({"schema_version": "1.0", "grunddaten": {}})),
            Err("reklamiertes_bauteil is required.")
        );
        // zuletzt arbeitsablauf
        assert_eq!(
            validate_shape(&json!({
                "schema_version": "1.0",
                "grunddaten": {},
                "reklamiertes_bauteil": {}
            })),
            Err("arbeitsablauf must be an array.")
        );
    }

    #[test]
    fn test_arbeitsablauf_must_be_array() {
        assert_eq!(
            validate_shape(&json!({
                "schema_version": "1.0",
                "grunddaten": {},
                "reklamiertes_bauteil": {},
                "arbeitsablauf": {}
            })),
            Err("arbeitsablauf must be an array.")
        );
    }

    #[test]
    fn test_accepts_minimal_valid_shape() {
        let payload = json!({
            "schema_version": "1.0",
            "grunddaten": {},
            "reklamiertes_bauteil": {},
            "arbeitsablauf": []
        });
        assert_eq!(validate_shape(&payload), Ok(()));
    }
}
