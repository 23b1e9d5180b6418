//! Reaktive Fassade über dem WizardStore
//!
//! Der Store selbst ist rahmenwerk-frei (garantie-common); hier wird er
//! in ein RwSignal gehüllt, damit die Komponenten auf Änderungen
//! reagieren. Die abgeleiteten Signale sind Memos über dem Store und
//! werden nie separat gepflegt.

use leptos::prelude::*;

use garantie_common::{
    normalize_minutes, IdentificationPatch, ProblemDetailsPatch, ProblemPhotoSlot, WizardData,
    WizardStore, WorkStepPatch,
};

/// Sitzungszustand des Assistenten; billig kopierbar, wird als Prop
/// an die Schritt-Komponenten gereicht
#[derive(Clone, Copy)]
pub struct WizardState {
    store: RwSignal<WizardStore>,
    pub identification_valid: Memo<bool>,
    pub problem_details_valid: Memo<bool>,
    pub work_steps_valid: Memo<bool>,
    pub total_duration_minutes: Memo<u32>,
}

impl WizardState {
    pub fn new() -> Self {
        let store = RwSignal::new(WizardStore::new());
        Self {
            store,
            identification_valid: Memo::new(move |_| store.with(|s| s.identification_valid())),
            problem_details_valid: Memo::new(move |_| store.with(|s| s.problem_details_valid())),
            work_steps_valid: Memo::new(move |_| store.with(|s| s.work_steps_valid())),
            total_duration_minutes: Memo::new(move |_| {
                store.with(|s| s.total_work_duration_minutes())
            }),
        }
    }

    /// Reaktiver Lesezugriff auf den aktuellen Zustand
    pub fn with_data<R>(&self, f: impl FnOnce(&WizardData) -> R) -> R {
        self.store.with(|s| f(s.data()))
    }

    /// Lesezugriff ohne Abhängigkeitsverfolgung (für Event-Handler)
    pub fn with_data_untracked<R>(&self, f: impl FnOnce(&WizardData) -> R) -> R {
        self.store.with_untracked(|s| f(s.data()))
    }

    pub fn update_identification(&self, patch: IdentificationPatch) {
        self.store.update(|s| s.update_identification(patch));
    }

    pub fn update_problem_details(&self, patch: ProblemDetailsPatch) {
        self.store.update(|s| s.update_problem_details(patch));
    }

    pub fn update_problem_photo(&self, slot: ProblemPhotoSlot, data_url: String) {
        self.store.update(|s| s.update_problem_photo(slot, data_url));
    }

    pub fn add_work_step(
        &self,
        title: String,
        description: String,
        photos: Vec<String>,
        time_spent_minutes: Option<u32>,
    ) {
        self.store.update(|s| {
            s.add_work_step(title, description, photos, time_spent_minutes);
        });
    }

    pub fn update_work_step(&self, step_id: &str, patch: WorkStepPatch) {
        self.store.update(|s| s.update_work_step(step_id, patch));
    }

    pub fn remove_work_step(&self, step_id: &str) {
        self.store.update(|s| s.remove_work_step(step_id));
    }

    pub fn export_payload(&self) -> garantie_common::Result<String> {
        self.store.with_untracked(|s| s.export_payload())
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Entwurf eines Arbeitsschritts (Schritt 3), noch nicht im Store
#[derive(Clone, Copy)]
pub struct DraftStep {
    pub description: RwSignal<String>,
    pub photos: RwSignal<Vec<String>>,
    pub minutes_input: RwSignal<String>,
}

impl DraftStep {
    pub fn new() -> Self {
        Self {
            description: RwSignal::new(String::new()),
            photos: RwSignal::new(Vec::new()),
            minutes_input: RwSignal::new(String::new()),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.description.get().trim().is_empty() || !self.photos.get().is_empty()
    }

    /// Minuten des Entwurfs für die laufende Gesamtsumme
    pub fn minutes(&self) -> u32 {
        normalize_minutes(&self.minutes_input.get()).unwrap_or(0)
    }

    /// Übernimmt einen nicht leeren Entwurf in den Store und leert die
    /// Eingabefelder; Titel = Beschreibung (Schnellerfassung)
    pub fn persist_into(&self, state: &WizardState) {
        let description = self.description.get_untracked();
        let photos = self.photos.get_untracked();
        if description.trim().is_empty() && photos.is_empty() {
            return;
        }

        let minutes = normalize_minutes(&self.minutes_input.get_untracked());
        state.add_work_step(description.clone(), description, photos, minutes);
        self.reset();
    }

    pub fn reset(&self) {
        self.description.set(String::new());
        self.photos.set(Vec::new());
        self.minutes_input.set(String::new());
    }
}

impl Default for DraftStep {
    fn default() -> Self {
        Self::new()
    }
}
