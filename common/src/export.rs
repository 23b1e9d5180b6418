//! Export in das feste deutsche Schema
//!
//! Das Exportdokument ist der Wire-Vertrag mit dem nachgelagerten
//! Automatisierungssystem und muss stabil bleiben. Die Feldumbenennung
//! ist total und ordnungserhaltend: jedes interne Feld hat genau ein
//! externes Gegenstück, kein Feld wird verworfen oder erfunden. Aus
//! einem Exportdokument lässt sich die interne WizardData deshalb
//! verlustfrei rekonstruieren (`into_data`).

use serde::{Deserialize, Serialize};

use crate::types::{
    IdentificationData, ProblemDetailsData, ProblemPhotos, WizardData, WorkProcessStep,
};

/// Version des Exportschemas; für die Brücke ein opaker String
pub const SCHEMA_VERSION: &str = "1.0";

/// Wurzel des Exportdokuments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub schema_version: String,
    pub grunddaten: Grunddaten,
    pub reklamiertes_bauteil: ReklamiertesBauteil,
    pub arbeitsablauf: Vec<Arbeitsschritt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grunddaten {
    pub garantieantrag_wsc: String,
    pub fahrzeugnummer: String,
    pub servicetechniker: String,
    pub techniker_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReklamiertesBauteil {
    pub teilename: String,
    pub fehlerbeschreibung: String,
    pub pflichtfotos: Pflichtfotos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pflichtfotos {
    pub foto_seriennummer: String,
    pub foto_gesamtansicht_bauteil: String,
    pub foto_nahaufnahme_schaden: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arbeitsschritt {
    pub schritt_id: String,
    pub schritt_titel: String,
    pub schritt_beschreibung: String,
    pub fotos: Vec<String>,
    pub zeitaufwand_minuten: Option<u32>,
    pub erstellt_am: String,
}

impl ExportPayload {
    /// Reine Abbildung WizardData → Exportdokument
    pub fn from_data(data: &WizardData) -> Self {
        ExportPayload {
            schema_version: SCHEMA_VERSION.to_string(),
            grunddaten: Grunddaten {
                garantieantrag_wsc: data.identification.warranty_number.clone(),
                fahrzeugnummer: data.identification.vin.clone(),
                servicetechniker: data.identification.technician_name.clone(),
                techniker_email: data.identification.technician_email.clone(),
            },
            reklamiertes_bauteil: ReklamiertesBauteil {
                teilename: data.problem_details.part_name.clone(),
                fehlerbeschreibung: data.problem_details.failure_description.clone(),
                pflichtfotos: Pflichtfotos {
                    foto_seriennummer: data.problem_details.photos.serial_number_photo.clone(),
                    foto_gesamtansicht_bauteil: data
                        .problem_details
                        .photos
                        .overall_part_photo
                        .clone(),
                    foto_nahaufnahme_schaden: data
                        .problem_details
                        .photos
                        .damage_closeup_photo
                        .clone(),
                },
            },
            arbeitsablauf: data
                .work_steps
                .iter()
                .map(|step| Arbeitsschritt {
                    schritt_id: step.id.clone(),
                    schritt_titel: step.title.clone(),
                    schritt_beschreibung: step.description.clone(),
                    fotos: step.photos.clone(),
                    zeitaufwand_minuten: step.time_spent_minutes,
                    erstellt_am: step.created_at.clone(),
                })
                .collect(),
        }
    }

    /// Umkehrabbildung Exportdokument → WizardData
    pub fn into_data(self) -> WizardData {
        WizardData {
            identification: IdentificationData {
                warranty_number: self.grunddaten.garantieantrag_wsc,
                vin: self.grunddaten.fahrzeugnummer,
                technician_name: self.grunddaten.servicetechniker,
                technician_email: self.grunddaten.techniker_email,
            },
            problem_details: ProblemDetailsData {
                part_name: self.reklamiertes_bauteil.teilename,
                failure_description: self.reklamiertes_bauteil.fehlerbeschreibung,
                photos: ProblemPhotos {
                    serial_number_photo: self.reklamiertes_bauteil.pflichtfotos.foto_seriennummer,
                    overall_part_photo: self
                        .reklamiertes_bauteil
                        .pflichtfotos
                        .foto_gesamtansicht_bauteil,
                    damage_closeup_photo: self
                        .reklamiertes_bauteil
                        .pflichtfotos
                        .foto_nahaufnahme_schaden,
                },
            },
            work_steps: self
                .arbeitsablauf
                .into_iter()
                .map(|schritt| WorkProcessStep {
                    id: schritt.schritt_id,
                    title: schritt.schritt_titel,
                    description: schritt.schritt_beschreibung,
                    photos: schritt.fotos,
                    time_spent_minutes: schritt.zeitaufwand_minuten,
                    created_at: schritt.erstellt_am,
                })
                .collect(),
        }
    }
}
