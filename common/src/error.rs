//! Fehlertypen
//!
//! Bildfehler sind für den Aufrufer immer behebbar: der Techniker wird
//! aufgefordert, das Foto erneut aufzunehmen; der Store bleibt unverändert.

use thiserror::Error;

/// Gemeinsamer Fehlertyp
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON-Fehler: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bild konnte nicht dekodiert werden: {0}")]
    ImageDecode(String),

    #[error("Bild konnte nicht kodiert werden: {0}")]
    ImageEncode(String),
}

/// Result-Alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_image_decode() {
        let error = Error::ImageDecode("unbekanntes Format".to_string());
        let display = format!("{}", error);
        assert!(display.contains("dekodiert"));
        assert!(display.contains("unbekanntes Format"));
    }

    #[test]
    fn test_error_display_image_encode() {
        let error = Error::ImageEncode("Farbtyp nicht unterstützt".to_string());
        let display = format!("{}", error);
        assert!(display.contains("kodiert"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::ImageDecode("Test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("ImageDecode"));
        assert!(debug.contains("Test"));
    }
}
