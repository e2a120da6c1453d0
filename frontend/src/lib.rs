//! imgpredict - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for classifying a single image through the
//! `/predict` endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PredictWidget                                               │
//! │  ├── drop zone, hidden file input, Browse / Predict / Clear  │
//! │  ├── FilePreview                                             │
//! │  ├── status line                                             │
//! │  ├── ResultPanel (hidden unless a result is shown)           │
//! │  └── ErrorPanel  (hidden unless an error is shown)           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state and rendering decisions come from `imgpredict::UploadWidget`;
//! the components only forward events and draw its `WidgetView`.
//!
//! # Modules
//!
//! - [`config`] - Endpoint URL and CSS classes
//! - [`components`] - UI components
//! - [`services`] - `File` adapter and fetch transport

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 imgpredict - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <PredictWidget/>
        </div>

        <Footer/>
    }
}
