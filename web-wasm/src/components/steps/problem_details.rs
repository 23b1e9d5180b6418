//! Schritt 2: Reklamiertes Bauteil mit Pflichtfotos

use leptos::prelude::*;

use garantie_common::{
    NormalizeOptions, ProblemDetailsPatch, REQUIRED_PROBLEM_PHOTOS,
};

use crate::components::photo_input::PhotoInput;
use crate::state::WizardState;

/// Pflichtfotos werden großzügiger eingebettet als Arbeitsfotos
const PROBLEM_PHOTO_OPTIONS: NormalizeOptions = NormalizeOptions {
    max_width: 1800,
    max_height: 1800,
    quality: 84,
    format: garantie_common::PhotoFormat::Jpeg,
};

#[component]
pub fn StepProblemDetails(state: WizardState) -> impl IntoView {
    view! {
        <section class="wizard-step">
            <h2>"Reklamiertes Bauteil"</h2>

            <div class="form-group">
                <label for="part-name">"Teilename"</label>
                <input
                    type="text"
                    id="part-name"
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
                <label for="failure-description">"Fehlerbeschreibung"</label>
                <textarea
                    id="failure-description"
                    rows="4"
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
                                options=PROBLEM_PHOTO_OPTIONS
                                current=current
                                on_captured=move |data_url| state.update_problem_photo(slot, data_url)
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || !state.problem_details_valid.get()>
                <p class="hint">"Beide Textfelder und alle drei Pflichtfotos sind erforderlich."</p>
            </Show>
        </section>
    }
}
