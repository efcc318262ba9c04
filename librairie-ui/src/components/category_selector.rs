//! Dropdown selector for choosing a book category.

use crate::state::AppState;
use dioxus::prelude::*;

/// Category dropdown selector.
/// Reads available categories from AppState and updates selected_category on
/// change, which triggers the filter cycle in the app effect.
#[component]
pub fn CategorySelector() -> Element {
    let mut state = use_context::<AppState>();
    let categories = state.categories.read().clone();
    let selected = (state.selected_category)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_category.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "category-filter",
                style: "font-weight: bold; margin-right: 8px;",
                "Catégorie : "
            }
            select {
                id: "category-filter",
                onchange: on_change,
                option {
                    value: "all",
                    selected: selected == "all",
                    "Toutes les catégories"
                }
                for category in categories.iter() {
                    option {
                        value: "{category}",
                        selected: *category == selected,
                        "{category}"
                    }
                }
            }
        }
    }
}
