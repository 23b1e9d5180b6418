//! Fortschrittsanzeige des Assistenten

use leptos::prelude::*;

/// Titel der vier Schritte in Navigationsreihenfolge
pub const STEP_TITLES: [&str; 4] = [
    "Grunddaten",
    "Reklamiertes Bauteil",
    "Arbeitsablauf",
    "Prüfung & Abschluss",
];

#[component]
pub fn WizardProgress(current_step: ReadSignal<u8>) -> impl IntoView {
    let percent = move || f32::from(current_step.get()) / STEP_TITLES.len() as f32 * 100.0;
    let title = move || {
        let index = usize::from(current_step.get().saturating_sub(1));
        STEP_TITLES.get(index).copied().unwrap_or_default()
    };

    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div class="progress-fill" style=move || format!("width: {}%", percent()) />
            </div>
            <p class="progress-text">
                {move || format!("Schritt {} von {}: {}", current_step.get(), STEP_TITLES.len(), title())}
            </p>
        </div>
    }
}
