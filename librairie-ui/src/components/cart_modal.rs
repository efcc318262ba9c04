//! Shopping cart modal overlay.

use crate::state::AppState;
use dioxus::prelude::*;

/// Cart modal opened from the header link. Closed by the close button or a
/// click on the backdrop; clicks inside the panel do not propagate out.
#[component]
pub fn CartModal() -> Element {
    let mut state = use_context::<AppState>();

    if !(state.cart_open)() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "cart-modal",
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; justify-content: center; align-items: center; z-index: 100;",
            onclick: move |_| {
                state.cart_open.set(false);
            },
            div {
                style: "background: white; padding: 24px; border-radius: 4px; min-width: 320px; max-width: 480px;",
                onclick: move |evt| {
                    evt.stop_propagation();
                },
                span {
                    class: "close-btn",
                    style: "float: right; font-size: 24px; cursor: pointer;",
                    onclick: move |_| {
                        state.cart_open.set(false);
                    },
                    "×"
                }
                h2 {
                    style: "margin-top: 0; color: #2c3e50;",
                    "Votre Panier"
                }
                p {
                    style: "color: #666;",
                    "Votre panier est vide."
                }
            }
        }
    }
}
