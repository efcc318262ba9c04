//! Price slider with its echoed value label.

use crate::state::AppState;
use dioxus::prelude::*;

/// Price range slider. The current position is echoed into the adjacent
/// label; it applies no filtering.
#[component]
pub fn PriceRange() -> Element {
    let mut state = use_context::<AppState>();
    let ceiling = (state.price_ceiling)();

    let on_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<u32>() {
            state.price_ceiling.set(value);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "price-range",
                style: "font-weight: bold;",
                "Prix maximum : "
            }
            input {
                id: "price-range",
                r#type: "range",
                min: "0",
                max: "100",
                value: "{ceiling}",
                oninput: on_input,
            }
            span {
                id: "price-value",
                "{ceiling}"
            }
            " €"
        }
    }
}
