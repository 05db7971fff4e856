//! Taskly
//!
//! Single-page client for a personal task manager, built with Leptos (WASM).
//!
//! # Features
//!
//! - Cookie-based sign up / sign in / sign out
//! - Profile editing with avatar upload
//! - Task list with status filter, column sort and pagination driven by
//!   URL query parameters
//! - Task create / edit / delete
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Taskly REST API over HTTP; the
//! session cookie is sent with every request.

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
