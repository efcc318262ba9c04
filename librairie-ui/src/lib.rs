//! Shared Dioxus components and browser glue for the storefront app.
//!
//! This crate provides:
//! - `fetch`: async wrapper over the browser Fetch API via `web-sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, book list, modals)

pub mod components;
pub mod fetch;
pub mod state;
