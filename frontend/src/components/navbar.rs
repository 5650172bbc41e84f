//! Site header: logo, navigation labels and the sign-in / get-started actions.

use leptos::*;

use crate::{Button, NavbarConfig};

#[component]
pub fn Navbar(#[prop(optional)] config: NavbarConfig) -> impl IntoView {
    let NavbarConfig {
        logo,
        links,
        sign_in,
        cta,
    } = config;

    view! {
        <header class="navbar">
            <img class="logo" src=logo.src alt=logo.alt/>
            <nav class="nav-links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a class="nav-link" href=link.href>
                                {link.label.into_string()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="nav-actions">
                <span class="sign-in">{sign_in.into_string()}</span>
                <Button label=cta/>
            </div>
        </header>
    }
}
