//! Schritt 1: Identifikation des Antrags

use leptos::prelude::*;

use garantie_common::IdentificationPatch;

use crate::state::WizardState;

#[component]
pub fn StepIdentification(state: WizardState) -> impl IntoView {
    view! {
        <section class="wizard-step">
            <h2>"Grunddaten"</h2>

            <div class="form-group">
                <label for="warranty-number">"Garantieantrag (WSC)"</label>
                <input
                    type="text"
                    id="warranty-number"
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
                <label for="vin">"Fahrzeugnummer (VIN)"</label>
                <input
                    type="text"
                    id="vin"
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
                <label for="technician-name">"Servicetechniker"</label>
                <input
                    type="text"
                    id="technician-name"
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
                <label for="technician-email">"E-Mail des Technikers"</label>
                <input
                    type="email"
                    id="technician-email"
                    prop:value=move || state.with_data(|d| d.identification.technician_email.clone())
                    on:input=move |ev| {
                        state.update_identification(IdentificationPatch {
                            technician_email: Some(event_target_value(&ev)),
                            ..Default::default()
                        });
                    }
                />
            </div>

            <Show when=move || !state.identification_valid.get()>
                <p class="hint">"Alle vier Felder sind Pflichtfelder."</p>
            </Show>
        </section>
    }
}
