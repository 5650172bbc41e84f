//! Hero section component

use leptos::*;

use crate::{Button, HeroConfig};

#[component]
pub fn Hero(#[prop(optional)] config: HeroConfig) -> impl IntoView {
    let HeroConfig {
        headings,
        taglines,
        cta,
    } = config;

    view! {
        <section class="hero">
            {headings
                .into_iter()
                .map(|heading| view! { <h1 class="hero-title">{heading}</h1> })
                .collect_view()}
            {taglines
                .into_iter()
                .map(|line| view! { <p class="subtitle">{line}</p> })
                .collect_view()}
            <div class="hero-actions">
                <Button label=cta/>
            </div>
        </section>
    }
}
