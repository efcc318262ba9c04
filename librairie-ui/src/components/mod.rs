//! Reusable Dioxus RSX components for the storefront.

mod book_card;
mod book_list;
mod book_popup;
mod cart_modal;
mod category_selector;
mod price_range;

pub use book_card::BookCard;
pub use book_list::BookList;
pub use book_popup::BookPopup;
pub use cart_modal::CartModal;
pub use category_selector::CategorySelector;
pub use price_range::PriceRange;
