//! Schritt 3: Arbeitsablauf dokumentieren
//!
//! Bestehende Schritte werden direkt im Store bearbeitet; ein neuer
//! Schritt entsteht im Entwurf und wird erst beim Hinzufügen (oder beim
//! Verlassen des Schritts) übernommen.

use leptos::prelude::*;

use garantie_common::{normalize_minutes, NormalizeOptions, PhotoFormat, WorkStepPatch};

use crate::components::photo_input::PhotoInput;
use crate::state::{DraftStep, WizardState};

const WORK_PHOTO_OPTIONS: NormalizeOptions = NormalizeOptions {
    max_width: 1600,
    max_height: 1600,
    quality: 80,
    format: PhotoFormat::Jpeg,
};

#[component]
pub fn StepWorkProcesses(state: WizardState, draft: DraftStep) -> impl IntoView {
    let add_step = move |_| draft.persist_into(&state);

    // laufende Summe einschließlich des noch nicht übernommenen Entwurfs
    let running_total = move || state.total_duration_minutes.get() + draft.minutes();

    view! {
        <section class="wizard-step">
            <h2>"Arbeitsablauf"</h2>

            <For
                each=move || state.with_data(|d| d.work_steps.clone())
                key=|step| step.id.clone()
                children=move |step| {
                    view! { <WorkStepRow state=state step_id=step.id created_at=step.created_at /> }
                }
            />

            <div class="add-step-form">
                <h3>"Neuen Schritt erfassen"</h3>

                <div class="form-group">
                    <label for="draft-description">"Beschreibung"</label>
                    <textarea
                        id="draft-description"
                        rows="3"
                        prop:value=move || draft.description.get()
                        on:input=move |ev| draft.description.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="draft-minutes">"Zeitaufwand (Minuten)"</label>
                    <input
                        type="number"
                        id="draft-minutes"
                        min="0"
                        prop:value=move || draft.minutes_input.get()
                        on:input=move |ev| draft.minutes_input.set(event_target_value(&ev))
                    />
                </div>

                <PhotoInput
                    label="Foto hinzufügen".to_string()
                    options=WORK_PHOTO_OPTIONS
                    current=Signal::derive(String::new)
                    on_captured=move |data_url| draft.photos.update(|photos| photos.push(data_url))
                />
                <Show when=move || !draft.photos.get().is_empty()>
                    <p class="text-muted">
                        {move || format!("{} Foto(s) im Entwurf", draft.photos.get().len())}
                    </p>
                </Show>

                <button
                    class="btn btn-primary"
                    disabled=move || !draft.has_content()
                    on:click=add_step
                >
                    "Schritt hinzufügen"
                </button>
            </div>

            <p class="total-duration">
                {move || format!("Gesamtdauer: {} Minuten", running_total())}
            </p>

            <Show when=move || !state.work_steps_valid.get()>
                <p class="hint">"Mindestens ein Arbeitsschritt ist erforderlich."</p>
            </Show>
        </section>
    }
}

/// Eine Zeile des Arbeitsablaufs; Felder schreiben direkt in den Store.
/// Die Zeile liest ihren Schritt reaktiv über die ID nach, damit sie
/// auch nach Änderungen anderer Zeilen aktuell bleibt.
#[component]
fn WorkStepRow(state: WizardState, step_id: String, created_at: String) -> impl IntoView {
    let id = StoredValue::new(step_id);

    let description = move || {
        state.with_data(|d| {
            d.work_steps
                .iter()
                .find(|s| s.id == id.get_value())
                .map(|s| s.description.clone())
                .unwrap_or_default()
        })
    };
    let minutes_value = move || {
        state.with_data(|d| {
            d.work_steps
                .iter()
                .find(|s| s.id == id.get_value())
                .and_then(|s| s.time_spent_minutes)
                .map(|m| m.to_string())
                .unwrap_or_default()
        })
    };
    let photos = move || {
        state.with_data(|d| {
            d.work_steps
                .iter()
                .find(|s| s.id == id.get_value())
                .map(|s| s.photos.clone())
                .unwrap_or_default()
        })
    };

    let update_description = move |ev| {
        let value = event_target_value(&ev);
        // Schnellerfassung pflegt Titel und Beschreibung gemeinsam
        state.update_work_step(
            &id.get_value(),
            WorkStepPatch {
                title: Some(value.clone()),
                description: Some(value),
                ..Default::default()
            },
        );
    };

    let update_minutes = move |ev| {
        state.update_work_step(
            &id.get_value(),
            WorkStepPatch {
                time_spent_minutes: Some(normalize_minutes(&event_target_value(&ev))),
                ..Default::default()
            },
        );
    };

    let add_photo = move |data_url: String| {
        let current_id = id.get_value();
        let Some(mut photos) = state.with_data_untracked(|d| {
            d.work_steps
                .iter()
                .find(|s| s.id == current_id)
                .map(|s| s.photos.clone())
        }) else {
            return;
        };
        photos.push(data_url);
        state.update_work_step(
            &current_id,
            WorkStepPatch {
                photos: Some(photos),
                ..Default::default()
            },
        );
    };

    let remove = move |_| state.remove_work_step(&id.get_value());

    view! {
        <div class="work-step-row">
            <div class="form-group">
                <label>"Beschreibung"</label>
                <textarea rows="2" prop:value=description on:input=update_description />
            </div>

            <div class="form-group">
                <label>"Zeitaufwand (Minuten)"</label>
                <input type="number" min="0" prop:value=minutes_value on:input=update_minutes />
            </div>

            <div class="work-step-photos">
                <For
                    each=photos
                    key=|photo| photo.clone()
                    children=move |photo| view! { <img class="photo-thumbnail" src=photo /> }
                />
            </div>
            <PhotoInput
                label="Foto hinzufügen".to_string()
                options=WORK_PHOTO_OPTIONS
                current=Signal::derive(String::new)
                on_captured=add_photo
            />

            <div class="work-step-meta">
                <span class="text-muted">{format!("Erstellt am {}", created_at)}</span>
                <button class="btn btn-tertiary btn-small" on:click=remove>"Entfernen"</button>
            </div>
        </div>
    }
}
