//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use librairie_catalog::{BookSummary, FilterController};

/// Shared application state for the storefront.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently selected category token
    pub selected_category: Signal<String>,
    /// Categories offered by the selector
    pub categories: Signal<Vec<String>>,
    /// Display region guard: current ResultSet + request generation
    pub filter: Signal<FilterController>,
    /// Whether the cart modal is open
    pub cart_open: Signal<bool>,
    /// Book shown in the detail popup (None = closed)
    pub popup_book: Signal<Option<BookSummary>>,
    /// Price slider position, echoed into its label
    pub price_ceiling: Signal<u32>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            selected_category: Signal::new("all".to_string()),
            categories: Signal::new(Vec::new()),
            filter: Signal::new(FilterController::new()),
            cart_open: Signal::new(false),
            popup_book: Signal::new(None),
            price_ceiling: Signal::new(50),
        }
    }
}
