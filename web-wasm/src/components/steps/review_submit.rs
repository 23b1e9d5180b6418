//! Schritt 4: Prüfen und Absenden
//!
//! Zeigt den gesamten Antrag zur Kontrolle; Korrekturen schreiben
//! direkt in den Store. Das Absenden selbst liegt in der Fußzeile des
//! Assistenten.

use leptos::prelude::*;

use garantie_common::{
    IdentificationPatch, NormalizeOptions, PhotoFormat, ProblemDetailsPatch,
    REQUIRED_PROBLEM_PHOTOS,
};

use crate::components::photo_input::PhotoInput;
use crate::state::WizardState;

/// Ersatzaufnahmen verwenden dieselben Grenzen wie Schritt 2
const REPLACE_PHOTO_OPTIONS: NormalizeOptions = NormalizeOptions {
    max_width: 1800,
    max_height: 1800,
    quality: 84,
    format: PhotoFormat::Jpeg,
};

#[component]
pub fn StepReviewSubmit(state: WizardState) -> impl IntoView {
    let all_valid = move || {
        state.identification_valid.get()
            && state.problem_details_valid.get()
            && state.work_steps_valid.get()
    };

    view! {
        <section class="wizard-step">
            <h2>"Prüfung & Abschluss"</h2>

            <h3>"Grunddaten"</h3>
            <div class="review-grid">
                <div class="form-group">
                    <label>"Garantieantrag (WSC)"</label>
                    <input
                        type="text"
                        prop:value=move || state.with_data(|d| d.identification.warranty_number.clone())
                        on:input=move |ev| {
                            state.update_identification(IdentificationPatch {
                                warranty_number: Some(event_target_value(&ev)),
                                ..Default::default()
                            });
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Fahrzeugnummer (VIN)"</label>
                    <input
                        type="text"
                        prop:value=move || state.with_data(|d| d.identification.vin.clone())
                        on:input=move |ev| {
                            state.update_identification(IdentificationPatch {
                                vin: Some(event_target_value(&ev)),
                                ..Default::default()
                            });
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Servicetechniker"</label>
                    <input
                        type="text"
                        prop:value=move || state.with_data(|d| d.identification.technician_name.clone())
                        on:input=move |ev| {
                            state.update_identification(IdentificationPatch {
                                technician_name: Some(event_target_value(&ev)),
                                ..Default::default()
                            });
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"E-Mail des Technikers"</label>
                    <input
                        type="email"
                        prop:value=move || state.with_data(|d| d.identification.technician_email.clone())
                        on:input=move |ev| {
                            state.update_identification(IdentificationPatch {
                                technician_email: Some(event_target_value(&ev)),
                                ..Default::default()
                            });
                        }
                    />
                </div>
            </div>

            <h3>"Reklamiertes Bauteil"</h3>
            <div class="form-group">
                <label>"Teilename"</label>
                <input
                    type="text"
                    prop:value=move || state.with_data(|d| d.problem_details.part_name.clone())
                    on:input=move |ev| {
                        state.update_problem_details(ProblemDetailsPatch {
                            part_name: Some(event_target_value(&ev)),
                            ..Default::default()
                        });
                    }
                />
            </div>
            <div class="form-group">
                <label>"Fehlerbeschreibung"</label>
                <textarea
                    rows="3"
                    prop:value=move || state.with_data(|d| d.problem_details.failure_description.clone())
                    on:input=move |ev| {
                        state.update_problem_details(ProblemDetailsPatch {
                            failure_description: Some(event_target_value(&ev)),
                            ..Default::default()
                        });
                    }
                />
            </div>

            <div class="photo-grid">
                {REQUIRED_PROBLEM_PHOTOS
                    .iter()
                    .map(|&slot| {
                        let current = Signal::derive(move || {
                            state.with_data(|d| d.problem_details.photos.get(slot).to_string())
                        });
                        view! {
                            <PhotoInput
                                label=slot.label().to_string()
                                options=REPLACE_PHOTO_OPTIONS
                                current=current
                                on_captured=move |data_url| state.update_problem_photo(slot, data_url)
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <h3>"Arbeitsablauf"</h3>
            <For
                each=move || state.with_data(|d| d.work_steps.clone())
                key=|step| step.id.clone()
                children=move |step| {
                    let duration = step
                        .time_spent_minutes
                        .map(|m| format!("{m} Minuten"))
                        .unwrap_or_else(|| "ohne Zeitangabe".to_string());
                    view! {
                        <div class="review-step">
                            <span class="review-step-title">{step.title.clone()}</span>
                            <span class="text-muted">{duration}</span>
                        </div>
                    }
                }
            />
            <p class="total-duration">
                {move || format!("Gesamtdauer: {} Minuten", state.total_duration_minutes.get())}
            </p>

            <Show when=move || !all_valid()>
                <p class="hint">"Der Antrag ist noch unvollständig; bitte die vorherigen Schritte prüfen."</p>
            </Show>
        </section>
    }
}
