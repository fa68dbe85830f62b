//! Finboard Dashboard
//!
//! Browser front end for the transactions dashboard, built with Leptos
//! (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR) application. On mount the dashboard page
//! fetches `GET /transactions` once, formats it with the shared `finboard`
//! library and renders three balance cards and the transaction table.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
