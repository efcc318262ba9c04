//! Librairie storefront.
//!
//! Single-page book catalog with a category filter. Selecting a category
//! issues one GET to `/filter_books` and replaces the book list wholesale
//! with the decoded results, a "no results" notice, or the server-reported
//! error.
//!
//! Data flow:
//! 1. On mount (and on every category change) the filter effect takes a
//!    generation ticket from the `FilterController` and spawns the fetch.
//! 2. The response body is decoded into a `ResultSet`.
//! 3. `complete()` publishes the new model only when the ticket is still
//!    current; overtaken or failed requests leave the list untouched.

use dioxus::prelude::*;
use librairie_catalog::{filter_url, CategoryToken, ResultSet};
use librairie_ui::components::{
    BookList, BookPopup, CartModal, CategorySelector, PriceRange,
};
use librairie_ui::fetch;
use librairie_ui::state::AppState;

/// Categories offered by the selector, alongside the implicit "all".
const CATEGORIES: &[&str] = &[
    "fiction",
    "science-fiction",
    "policier",
    "jeunesse",
    "histoire",
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("storefront-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Seed the selector on mount
    use_effect(move || {
        state
            .categories
            .set(CATEGORIES.iter().map(|c| c.to_string()).collect());
    });

    // Filter cycle: runs on mount for the default category and again on
    // every selection change. The ticket taken before the await keeps a
    // stale response from overwriting a newer one.
    use_effect(move || {
        let category = CategoryToken::new((state.selected_category)());
        let ticket = state.filter.write().begin();

        spawn(async move {
            let url = filter_url(&category);
            log::info!("Filtering books: {}", url);
            let outcome = match fetch::fetch_text(&url).await {
                Ok(body) => ResultSet::from_json(&body),
                Err(e) => Err(e),
            };
            // complete() logs failures and discards stale tickets
            state.filter.write().complete(ticket, outcome);
        });
    });

    rsx! {
        div {
            class: "container",
            style: "max-width: 1200px; margin: 0 auto; padding: 20px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            header {
                style: "display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 16px;",
                h1 {
                    style: "color: #2c3e50; margin: 0;",
                    "La Librairie"
                }
                a {
                    id: "cart-link",
                    href: "#",
                    style: "color: #2c3e50; font-weight: bold; text-decoration: none;",
                    onclick: move |evt| {
                        evt.prevent_default();
                        state.cart_open.set(true);
                    },
                    "Panier"
                }
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center;",
                CategorySelector {}
                PriceRange {}
            }

            BookList {}
            CartModal {}
            BookPopup {}
        }
    }
}
