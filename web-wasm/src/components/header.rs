//! Kopfzeile

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Garantieabwicklung"</h1>
            <p class="subtitle">"Assistent für Garantieanträge"</p>
        </header>
    }
}
