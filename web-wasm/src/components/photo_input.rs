//! Foto-Aufnahmefeld
//!
//! Datei wählen, Bytes lesen, normalisieren, Data-URL an den Aufrufer
//! melden. Schlägt Dekodierung oder Kodierung fehl, bleibt der Store
//! unberührt und der Techniker wird zu einer neuen Aufnahme
//! aufgefordert.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlInputElement;

use garantie_common::{normalize_to_data_url, NormalizeOptions};

use crate::upload::read_file_bytes;

pub const RETRY_PROMPT: &str = "Foto konnte nicht verarbeitet werden. Bitte erneut aufnehmen.";

#[component]
pub fn PhotoInput<F>(
    label: String,
    options: NormalizeOptions,
    current: Signal<String>,
    on_captured: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let (error_message, set_error_message) = signal(None::<String>);
    let label_text = label.clone();

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let on_captured = on_captured.clone();
        read_file_bytes(file, move |result| {
            let normalized = result.and_then(|bytes| {
                normalize_to_data_url(&bytes, &options).map_err(|e| e.to_string())
            });
            match normalized {
                Ok(data_url) => {
                    set_error_message.set(None);
                    on_captured(data_url);
                }
                Err(error) => {
                    web_sys::console::error_1(&JsValue::from_str(&error));
                    set_error_message.set(Some(RETRY_PROMPT.to_string()));
                }
            }
        });

        // zurücksetzen, damit dieselbe Datei erneut gewählt werden kann
        input.set_value("");
    };

    view! {
        <div class="photo-input">
            <label class="photo-input-label">{label}</label>
            <Show when=move || !current.get().is_empty()>
                <img class="photo-thumbnail" src=move || current.get() alt=label_text.clone() />
            </Show>
            <input type="file" accept="image/*" on:change=on_change />
            <Show when=move || error_message.get().is_some()>
                <p class="photo-error">{move || error_message.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
