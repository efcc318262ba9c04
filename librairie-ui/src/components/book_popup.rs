//! Book detail popup overlay.

use crate::state::AppState;
use dioxus::prelude::*;

/// Detail popup for the book stored in `AppState::popup_book`.
/// Renders nothing while no book is selected.
#[component]
pub fn BookPopup() -> Element {
    let mut state = use_context::<AppState>();

    let Some(book) = (state.popup_book)() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "popup",
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; justify-content: center; align-items: center; z-index: 100;",
            onclick: move |_| {
                state.popup_book.set(None);
            },
            div {
                class: "popup-content",
                style: "background: white; padding: 24px; border-radius: 4px; max-width: 360px; text-align: center;",
                onclick: move |evt| {
                    evt.stop_propagation();
                },
                span {
                    class: "close",
                    style: "float: right; font-size: 24px; cursor: pointer;",
                    onclick: move |_| {
                        state.popup_book.set(None);
                    },
                    "×"
                }
                img {
                    src: "{book.image_url}",
                    alt: "{book.title}",
                    style: "width: 160px; height: 220px; object-fit: cover;",
                }
                h2 { "{book.title}" }
                p { "Prix : {book.price_display()}" }
                p {
                    style: "color: #666;",
                    "Auteur: {book.author_name()}"
                }
            }
        }
    }
}
