//! Call-to-action button

use leptos::*;

use crate::DisplayLabel;

/// Clickable pill showing one label verbatim.
#[component]
pub fn Button(label: DisplayLabel) -> impl IntoView {
    view! {
        <button type="button" class="btn">
            {label.into_string()}
        </button>
    }
}
