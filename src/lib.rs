//! Multimídia Manager - Frontend Rust/Leptos Application
//!
//! A WebAssembly dashboard for managing personal media: authenticate,
//! upload images/audio/video, browse and search a gallery, edit item
//! metadata and manage a profile. All business logic lives in an
//! external backend reached over HTTP; this crate renders state and
//! calls that service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  provides AuthStore + MediaStore via context                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /            LoginPage (login / signup tabs)               │
//! │  /dashboard   DashboardPage                                  │
//! │               ├── Header (user, logout)                     │
//! │               ├── Sidebar (gallery / upload / profile)      │
//! │               └── MediaGallery | UploadSection |            │
//! │                   ProfileSettings                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - domain and wire types
//! - [`services`] - backend communication (token, request layer, auth, media)
//! - [`state`] - context-provided stores and the upload queue reducer
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod types;

pub use config::*;
pub use types::{ApiError, ApiResult, MediaItem, MediaType, User};

use components::{DashboardPage, LoginPage};
use state::{AuthStore, MediaStore};

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Multimídia Manager - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The two stores own all shared mutable state; components reach
    // them through context.
    let auth = AuthStore::new();
    provide_context(auth);
    provide_context(MediaStore::new());

    // Try to restore an existing session once, at startup.
    auth.init();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/dashboard" view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
