//! EduRev Portal
//!
//! Student portal frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Header navigation with a mobile menu
//! - Beyond Academics dashboard with stats and achievements
//! - Achievement submission with proof document upload
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. View logic lives in the shared `edurev::portal` module; the
//! dashboard reads either bundled sample data or the EduRev API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
