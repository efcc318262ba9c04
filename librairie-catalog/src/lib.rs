//! Core types for the librairie storefront.
//!
//! This crate has no Dioxus or browser dependency: it holds the book data
//! model, the `/filter_books` wire contract, and the filter-controller state
//! machine that decides what the display region shows. The WASM front-end
//! (`librairie-ui` + `storefront`) drives it from component effects.

pub mod book;
pub mod error;
pub mod filter;
pub mod response;

pub use book::BookSummary;
pub use error::CatalogError;
pub use filter::{filter_url, CategoryToken, FilterController};
pub use response::ResultSet;
