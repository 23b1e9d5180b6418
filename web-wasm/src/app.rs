//! Hauptkomponente: Schrittnavigation, Einreichung, Statusanzeige

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::submit_report;
use crate::components::header::Header;
use crate::components::progress_bar::WizardProgress;
use crate::components::steps::identification::StepIdentification;
use crate::components::steps::problem_details::StepProblemDetails;
use crate::components::steps::review_submit::StepReviewSubmit;
use crate::components::steps::work_processes::StepWorkProcesses;
use crate::state::{DraftStep, WizardState};

const STEP_COUNT: u8 = 4;

const NETWORK_ERROR_MESSAGE: &str = "Netzwerkfehler bei der Übertragung.";

#[component]
pub fn App() -> impl IntoView {
    let state = WizardState::new();
    let draft = DraftStep::new();

    let (current_step, set_current_step) = signal(1u8);
    let (is_submitting, set_is_submitting) = signal(false);
    let (submit_message, set_submit_message) = signal(None::<String>);

    // Gültigkeit des sichtbaren Schritts steuert den "Weiter"-Knopf
    let current_step_valid = move || match current_step.get() {
        1 => state.identification_valid.get(),
        2 => state.problem_details_valid.get(),
        3 => state.work_steps_valid.get() || draft.has_content(),
        _ => true,
    };

    let previous_step = move |_| {
        set_current_step.update(|step| {
            if *step > 1 {
                *step -= 1;
            }
        });
    };

    let next_step = move |_| {
        if current_step.get_untracked() >= STEP_COUNT {
            return;
        }
        // beim Verlassen von Schritt 3 wird ein angefangener Entwurf übernommen
        if current_step.get_untracked() == 3 {
            draft.persist_into(&state);
        }
        set_current_step.update(|step| *step += 1);
    };

    let on_submit = move |_| {
        // höchstens eine laufende Einreichung; ein zweiter Klick ist ein No-op
        if is_submitting.get_untracked() {
            return;
        }

        let payload = match state.export_payload() {
            Ok(payload) => payload,
            Err(error) => {
                web_sys::console::error_1(&error.to_string().into());
                set_submit_message.set(Some("Übertragung fehlgeschlagen.".to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        set_submit_message.set(None);

        spawn_local(async move {
            let message = match submit_report(&payload).await {
                Ok(outcome) => outcome.message,
                Err(error) => {
                    web_sys::console::error_1(&error);
                    NETWORK_ERROR_MESSAGE.to_string()
                }
            };
            set_submit_message.set(Some(message));
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="container">
            <Header />
            <WizardProgress current_step=current_step />

            <Show when=move || current_step.get() == 1>
                <StepIdentification state=state />
            </Show>
            <Show when=move || current_step.get() == 2>
                <StepProblemDetails state=state />
            </Show>
            <Show when=move || current_step.get() == 3>
                <StepWorkProcesses state=state draft=draft />
            </Show>
            <Show when=move || current_step.get() == 4>
                <StepReviewSubmit state=state />
            </Show>

            <Show when=move || submit_message.get().is_some()>
                <p class="submit-message">{move || submit_message.get().unwrap_or_default()}</p>
            </Show>

            <div class="wizard-footer">
                <button
                    class="btn btn-secondary"
                    disabled=move || current_step.get() == 1
                    on:click=previous_step
                >
                    "Zurück"
                </button>
                <Show
                    when=move || current_step.get() < STEP_COUNT
                    fallback=move || view! {
                        <button
                            class="btn btn-primary"
                            disabled=move || is_submitting.get()
                            on:click=on_submit
                        >
                            {move || {
                                if is_submitting.get() {
                                    "Wird übertragen..."
                                } else {
                                    "Antrag absenden"
                                }
                            }}
                        </button>
                    }
                >
                    <button
                        class="btn btn-primary"
                        disabled=move || !current_step_valid()
                        on:click=next_step
                    >
                        "Weiter"
                    </button>
                </Show>
            </div>
        </div>
    }
}
