//! Zentraler Sitzungszustand des Assistenten
//!
//! Der Store hält die einzige WizardData-Instanz und ist die einzige
//! Schreibstelle. Jede Update-Operation ersetzt das betroffene Teilobjekt
//! als Ganzes, Leser sehen nie einen halb angewendeten Patch. Alle
//! Operationen sind synchron; der Store wird von genau einem logischen
//! Thread (der UI) benutzt, Sperren sind nicht nötig.
//!
//! Die abgeleiteten Signale (Gültigkeit, Gesamtdauer) werden bei jedem
//! Zugriff neu berechnet statt zwischengespeichert; veraltete Werte sind
//! damit ausgeschlossen.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::export::ExportPayload;
use crate::types::{
    IdentificationData, ProblemDetailsData, ProblemPhotoSlot, WizardData, WorkProcessStep,
};

/// Patch für die Identifikationsdaten; None = Feld unverändert
#[derive(Debug, Clone, Default)]
pub struct IdentificationPatch {
    pub warranty_number: Option<String>,
    pub vin: Option<String>,
    pub technician_name: Option<String>,
    pub technician_email: Option<String>,
}

/// Patch für die Bauteil-Texte; Fotos werden ausschließlich über
/// `update_problem_photo` gesetzt
#[derive(Debug, Clone, Default)]
pub struct ProblemDetailsPatch {
    pub part_name: Option<String>,
    pub failure_description: Option<String>,
}

/// Patch für einen Arbeitsschritt
///
/// `time_spent_minutes` unterscheidet "unverändert" (None) von
/// "auf nicht gesetzt zurücksetzen" (Some(None)).
#[derive(Debug, Clone, Default)]
pub struct WorkStepPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub photos: Option<Vec<String>>,
    pub time_spent_minutes: Option<Option<u32>>,
}

/// Besitzt die WizardData der Sitzung
#[derive(Debug, Clone, Default)]
pub struct WizardStore {
    data: WizardData,
}

impl WizardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &WizardData {
        &self.data
    }

    pub fn update_identification(&mut self, patch: IdentificationPatch) {
        let current = &self.data.identification;
        self.data.identification = IdentificationData {
            warranty_number: patch
                .warranty_number
                .unwrap_or_else(|| current.warranty_number.clone()),
            vin: patch.vin.unwrap_or_else(|| current.vin.clone()),
            technician_name: patch
                .technician_name
                .unwrap_or_else(|| current.technician_name.clone()),
            technician_email: patch
                .technician_email
                .unwrap_or_else(|| current.technician_email.clone()),
        };
    }

    pub fn update_problem_details(&mut self, patch: ProblemDetailsPatch) {
        let current = &self.data.problem_details;
        self.data.problem_details = ProblemDetailsData {
            part_name: patch.part_name.unwrap_or_else(|| current.part_name.clone()),
            failure_description: patch
                .failure_description
                .unwrap_or_else(|| current.failure_description.clone()),
            photos: current.photos.clone(),
        };
    }

    pub fn update_problem_photo(&mut self, slot: ProblemPhotoSlot, data_url: String) {
        let mut photos = self.data.problem_details.photos.clone();
        photos.set(slot, data_url);
        self.data.problem_details = ProblemDetailsData {
            photos,
            ..self.data.problem_details.clone()
        };
    }

    /// Hängt einen neuen Arbeitsschritt mit frischer ID und
    /// Erstellungszeitpunkt "jetzt" ans Ende der Sequenz
    pub fn add_work_step(
        &mut self,
        title: String,
        description: String,
        photos: Vec<String>,
        time_spent_minutes: Option<u32>,
    ) -> String {
        let step = WorkProcessStep {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            photos,
            time_spent_minutes,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let id = step.id.clone();
        self.data.work_steps.push(step);
        id
    }

    /// Ersetzt den Schritt mit passender ID durch eine gepatchte Kopie.
    /// Unbekannte IDs sind kein Fehler: die UI kann ein Entfernen mit
    /// einer noch laufenden Bearbeitung überholen.
    pub fn update_work_step(&mut self, step_id: &str, patch: WorkStepPatch) {
        let Some(index) = self.data.work_steps.iter().position(|s| s.id == step_id) else {
            return;
        };
        let next = {
            let current = &self.data.work_steps[index];
            WorkProcessStep {
                id: current.id.clone(),
                title: patch.title.unwrap_or_else(|| current.title.clone()),
                description: patch
                    .description
                    .unwrap_or_else(|| current.description.clone()),
                photos: patch.photos.unwrap_or_else(|| current.photos.clone()),
                time_spent_minutes: patch
                    .time_spent_minutes
                    .unwrap_or(current.time_spent_minutes),
                created_at: current.created_at.clone(),
            }
        };
        self.data.work_steps[index] = next;
    }

    /// Entfernt den Schritt mit der gegebenen ID; unbekannte IDs sind ein No-op
    pub fn remove_work_step(&mut self, step_id: &str) {
        self.data.work_steps.retain(|s| s.id != step_id);
    }

    pub fn identification_valid(&self) -> bool {
        self.data.identification_valid()
    }

    pub fn problem_details_valid(&self) -> bool {
        self.data.problem_details_valid()
    }

    pub fn work_steps_valid(&self) -> bool {
        self.data.work_steps_valid()
    }

    pub fn total_work_duration_minutes(&self) -> u32 {
        self.data.total_work_duration_minutes()
    }

    /// Serialisiert den aktuellen Zustand als Exportdokument (deutsches Schema)
    pub fn export_payload(&self) -> Result<String> {
        let payload = ExportPayload::from_data(&self.data);
        Ok(serde_json::to_string_pretty(&payload)?)
    }
}

/// Normalisiert eine Minuten-Eingabe aus einem Textfeld: leer oder
/// unlesbar wird zu None, negative Werte werden auf 0 begrenzt
pub fn normalize_minutes(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed: f64 = trimmed.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed.max(0.0).round() as u32)
}
