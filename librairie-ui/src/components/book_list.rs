//! The book display region, replaced wholesale per filter response.

use crate::components::BookCard;
use crate::state::AppState;
use dioxus::prelude::*;
use librairie_catalog::response::{error_notice, NO_RESULTS_MSG};
use librairie_catalog::ResultSet;

/// Renders the current ResultSet: one card per book in received order, or a
/// single notice node for the empty and server-error cases, the same plain
/// `<p>` the server-rendered pages use. Before the first response arrives it
/// shows a loading notice; on a transport failure the prior content stays
/// (the controller never published a new model).
#[component]
pub fn BookList() -> Element {
    let state = use_context::<AppState>();
    let current = state.filter.read().current().cloned();

    rsx! {
        div {
            class: "book-list",
            style: "display: flex; flex-wrap: wrap; gap: 16px; margin-top: 16px;",
            if let Some(ResultSet::ServiceError(msg)) = &current {
                p {
                    style: "color: #C62828; padding: 16px;",
                    "{error_notice(msg)}"
                }
            } else if let Some(ResultSet::Empty) = &current {
                p {
                    style: "color: #666; padding: 16px;",
                    "{NO_RESULTS_MSG}"
                }
            } else if let Some(ResultSet::Books(books)) = &current {
                for book in books.iter() {
                    BookCard { book: book.clone() }
                }
            } else {
                p {
                    style: "color: #666; padding: 16px;",
                    "Chargement des livres..."
                }
            }
        }
    }
}
