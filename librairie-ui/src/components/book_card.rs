//! A single book in the display region.

use crate::state::AppState;
use dioxus::prelude::*;
use librairie_catalog::BookSummary;

#[derive(Props, Clone, PartialEq)]
pub struct BookCardProps {
    pub book: BookSummary,
}

/// Card showing cover, title, author and price. The cover opens the detail
/// popup; the cart button is a placeholder with no behavior wired in.
#[component]
pub fn BookCard(props: BookCardProps) -> Element {
    let mut state = use_context::<AppState>();
    let book = props.book.clone();
    let popup_book = props.book.clone();

    rsx! {
        div {
            class: "book-box",
            style: "width: 180px; padding: 12px; border: 1px solid #E0E0E0; border-radius: 4px; text-align: center;",
            img {
                class: "book-image",
                src: "{book.image_url}",
                alt: "Image de {book.title}",
                style: "width: 100%; height: 200px; object-fit: cover; cursor: pointer;",
                onclick: move |_| {
                    state.popup_book.set(Some(popup_book.clone()));
                },
            }
            h4 {
                style: "margin: 8px 0 4px;",
                "{book.title}"
            }
            p {
                style: "margin: 2px 0; color: #444;",
                "Auteur: {book.author_name()}"
            }
            p {
                style: "margin: 2px 0; font-weight: bold;",
                "Prix: {book.price_display()}"
            }
            button {
                style: "margin-top: 8px; padding: 6px 12px; border: none; border-radius: 4px; background: #2c3e50; color: white; cursor: pointer;",
                "Ajouter au Panier"
            }
        }
    }
}
