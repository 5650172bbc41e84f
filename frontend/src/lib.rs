//! ShareXpress - Landing Page Frontend
//!
//! A Leptos WebAssembly frontend for the ShareXpress marketing page.
//! Every component is a stateless, single-pass render of static copy.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (loads SiteConfig, sets <title>)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Page                                                        │
//! │  ├── Navbar (logo, nav links, sign in, Button)               │
//! │  └── main.content                                            │
//! │      └── Hero (headings, taglines, Button)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Site content and its built-in defaults
//! - [`types`] - Common types (DisplayLabel, AppError)
//! - [`components`] - UI components (Navbar, Hero, Button)

use leptos::*;
use leptos_meta::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Labels
    DisplayLabel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Browser entry point: logging, panic hook, then mount [`App`].
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("ShareXpress - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let title = config.title.clone();

    view! {
        <Title text=title/>
        <Page config=config/>
    }
}

/// Page shell: the fixed header, then the full-viewport container holding
/// the main content region.
#[component]
pub fn Page(#[prop(optional)] config: SiteConfig) -> impl IntoView {
    let SiteConfig { navbar, hero, .. } = config;

    view! {
        <Navbar config=navbar/>
        <div class="page">
            <main class="content">
                <Hero config=hero/>
            </main>
        </div>
    }
}

// =============================================================================
// Test helpers
// =============================================================================
