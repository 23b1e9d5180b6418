//! Datenmodell des Assistenten
//!
//! Vom Store verwaltete Typen:
//! - IdentificationData: Schritt 1 (Identifikation des Antrags)
//! - ProblemDetailsData: Schritt 2 (reklamiertes Bauteil + Pflichtfotos)
//! - WorkProcessStep: Schritt 3 (Arbeitsablauf)
//! - WizardData: Wurzelobjekt der Sitzung

use serde::{Deserialize, Serialize};

/// Identifikationsdaten des Garantieantrags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentificationData {
    pub warranty_number: String,
    pub vin: String,
    pub technician_name: String,
    pub technician_email: String,
}

impl IdentificationData {
    /// Gültig, wenn alle vier Felder nach Trim nicht leer sind
    pub fn is_valid(&self) -> bool {
        !self.warranty_number.trim().is_empty()
            && !self.vin.trim().is_empty()
            && !self.technician_name.trim().is_empty()
            && !self.technician_email.trim().is_empty()
    }
}

/// Einer der drei Pflichtfoto-Plätze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemPhotoSlot {
    SerialNumber,
    OverallPart,
    DamageCloseup,
}

impl ProblemPhotoSlot {
    /// Beschriftung für die UI
    pub fn label(&self) -> &'static str {
        match self {
            ProblemPhotoSlot::SerialNumber => "Foto der Seriennummer",
            ProblemPhotoSlot::OverallPart => "Gesamtansicht des Bauteils",
            ProblemPhotoSlot::DamageCloseup => "Nahaufnahme des Schadens",
        }
    }
}

/// Feste Reihenfolge der Pflichtfotos in der UI und im Export
pub const REQUIRED_PROBLEM_PHOTOS: [ProblemPhotoSlot; 3] = [
    ProblemPhotoSlot::SerialNumber,
    ProblemPhotoSlot::OverallPart,
    ProblemPhotoSlot::DamageCloseup,
];

/// Die drei Pflichtfotos als Data-URLs; leerer String = nicht gesetzt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemPhotos {
    pub serial_number_photo: String,
    pub overall_part_photo: String,
    pub damage_closeup_photo: String,
}

impl ProblemPhotos {
    pub fn get(&self, slot: ProblemPhotoSlot) -> &str {
        match slot {
            ProblemPhotoSlot::SerialNumber => &self.serial_number_photo,
            ProblemPhotoSlot::OverallPart => &self.overall_part_photo,
            ProblemPhotoSlot::DamageCloseup => &self.damage_closeup_photo,
        }
    }

    pub fn set(&mut self, slot: ProblemPhotoSlot, data_url: String) {
        match slot {
            ProblemPhotoSlot::SerialNumber => self.serial_number_photo = data_url,
            ProblemPhotoSlot::OverallPart => self.overall_part_photo = data_url,
            ProblemPhotoSlot::DamageCloseup => self.damage_closeup_photo = data_url,
        }
    }

    pub fn all_set(&self) -> bool {
        !self.serial_number_photo.is_empty()
            && !self.overall_part_photo.is_empty()
            && !self.damage_closeup_photo.is_empty()
    }
}

/// Angaben zum reklamierten Bauteil
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemDetailsData {
    pub part_name: String,
    pub failure_description: String,
    pub photos: ProblemPhotos,
}

impl ProblemDetailsData {
    /// Gültig, wenn beide Texte gefüllt und alle drei Fotos gesetzt sind
    pub fn is_valid(&self) -> bool {
        !self.part_name.trim().is_empty()
            && !self.failure_description.trim().is_empty()
            && self.photos.all_set()
    }
}

/// Ein Schritt des dokumentierten Arbeitsablaufs
///
/// Die Einfügereihenfolge ist fachlich bedeutsam: sie gibt die
/// chronologische Abfolge der Arbeiten wieder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkProcessStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub photos: Vec<String>,
    pub time_spent_minutes: Option<u32>,
    pub created_at: String,
}

/// Wurzelobjekt der Sitzung; wird leer angelegt und ausschließlich
/// über den Store verändert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardData {
    pub identification: IdentificationData,
    pub problem_details: ProblemDetailsData,
    pub work_steps: Vec<WorkProcessStep>,
}

impl WizardData {
    pub fn identification_valid(&self) -> bool {
        self.identification.is_valid()
    }

    pub fn problem_details_valid(&self) -> bool {
        self.problem_details.is_valid()
    }

    pub fn work_steps_valid(&self) -> bool {
        !self.work_steps.is_empty()
    }

    /// Summe aller gesetzten Zeitaufwände; nicht gesetzte Werte zählen 0
    pub fn total_work_duration_minutes(&self) -> u32 {
        self.work_steps
            .iter()
            .filter_map(|step| step.time_spent_minutes)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_data_default_is_empty() {
        let data = WizardData::default();
        assert_eq!(data.identification.warranty_number, "");
        assert_eq!(data.problem_details.part_name, "");
        assert!(data.work_steps.is_empty());
    }

    #[test]
    fn test_identification_valid_requires_all_fields() {
        let mut ident = IdentificationData {
            warranty_number: "GA-2024-0815".to_string(),
            vin: "WVWZZZ1JZXW000001".to_string(),
            technician_name: "Max Mustermann".to_string(),
            technician_email: "max@werkstatt.example".to_string(),
        };
        assert!(ident.is_valid());

        ident.technician_email = "   ".to_string();
        assert!(!ident.is_valid());
    }

    #[test]
    fn test_problem_details_valid_requires_all_photos() {
        let mut details = ProblemDetailsData {
            part_name: "Wasserpumpe".to_string(),
            failure_description: "Undicht am Gehäuse".to_string(),
            photos: ProblemPhotos::default(),
        };
        assert!(!details.is_valid());

        details
            .photos
            .set(ProblemPhotoSlot::SerialNumber, "data:image/jpeg;base64,AA==".to_string());
        details
            .photos
            .set(ProblemPhotoSlot::OverallPart, "data:image/jpeg;base64,BB==".to_string());
        assert!(!details.is_valid());

        details
            .photos
            .set(ProblemPhotoSlot::DamageCloseup, "data:image/jpeg;base64,CC==".to_string());
        assert!(details.is_valid());
    }

    #[test]
    fn test_photo_slot_get_set() {
        let mut photos = ProblemPhotos::default();
        for slot in REQUIRED_PROBLEM_PHOTOS {
            assert_eq!(photos.get(slot), "");
        }

        photos.set(ProblemPhotoSlot::OverallPart, "data:image/webp;base64,XX==".to_string());
        assert_eq!(photos.get(ProblemPhotoSlot::OverallPart), "data:image/webp;base64,XX==");
        assert_eq!(photos.get(ProblemPhotoSlot::SerialNumber), "");
    }

    #[test]
    fn test_slot_labels_are_german() {
        assert_eq!(ProblemPhotoSlot::SerialNumber.label(), "Foto der Seriennummer");
        assert_eq!(ProblemPhotoSlot::OverallPart.label(), "Gesamtansicht des Bauteils");
        assert_eq!(ProblemPhotoSlot::DamageCloseup.label(), "Nahaufnahme des Schadens");
    }

    #[test]
    fn test_total_duration_skips_unset_values() {
        let data = WizardData {
            work_steps: vec![
                WorkProcessStep {
                    time_spent_minutes: Some(10),
                    ..Default::default()
                },
                WorkProcessStep {
                    time_spent_minutes: None,
                    ..Default::default()
                },
                WorkProcessStep {
                    time_spent_minutes: Some(5),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(data.total_work_duration_minutes(), 15);
    }

    #[test]
    fn test_wizard_data_serialize_camel_case() {
        let data = WizardData {
            identification: IdentificationData {
                warranty_number: "GA-1".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let json = serde_json::to_string(&data).expect("Serialisierung fehlgeschlagen");
        assert!(json.contains("\"warrantyNumber\":\"GA-1\""));
        assert!(json.contains("\"problemDetails\""));
        assert!(json.contains("\"workSteps\""));
    }

    #[test]
    fn test_wizard_data_deserialize_missing_fields() {
        // Teilobjekte dürfen fehlen und fallen auf Default zurück
        let json = r#"{"identification": {"vin": "WDB123"}}"#;

        let data: WizardData = serde_json::from_str(json).expect("Deserialisierung fehlgeschlagen");
        assert_eq!(data.identification.vin, "WDB123");
        assert_eq!(data.identification.warranty_number, "");
        assert!(data.work_steps.is_empty());
    }
}
