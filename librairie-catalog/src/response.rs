//! Decoding of `/filter_books` response bodies into the display model.

use crate::book::BookSummary;
use crate::error::Result;
use serde::Deserialize;

/// Informational notice shown when a category has no books.
pub const NO_RESULTS_MSG: &str = "Aucun livre trouvé pour cette catégorie.";

/// Inline text rendered for a server-reported error.
pub fn error_notice(msg: &str) -> String {
    format!("Erreur: {msg}")
}

/// The two JSON shapes the endpoint produces: a (possibly empty) array of
/// book records, or an object carrying an explicit error field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FilterPayload {
    Error { error: String },
    Books(Vec<BookSummary>),
}

/// What the display region shows after a completed filter request.
///
/// Built fresh per response and swapped in wholesale; results are never
/// merged across requests.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSet {
    /// One rendered card per book, in the order received. Never empty.
    Books(Vec<BookSummary>),
    /// The category matched nothing; a single informational notice.
    Empty,
    /// The server reported an error; rendered inline as a single message.
    ServiceError(String),
}

impl ResultSet {
    /// Decode a response body.
    ///
    /// A payload with an `error` field classifies as [`ServiceError`], an
    /// empty array as [`Empty`]. A body that matches neither shape is a
    /// decode failure, which the caller treats like a transport failure
    /// (logged, display left stale).
    ///
    /// [`ServiceError`]: ResultSet::ServiceError
    /// [`Empty`]: ResultSet::Empty
    pub fn from_json(body: &str) -> Result<Self> {
        let payload: FilterPayload = serde_json::from_str(body)?;
        Ok(match payload {
            FilterPayload::Error { error } => ResultSet::ServiceError(error),
            FilterPayload::Books(books) if books.is_empty() => ResultSet::Empty,
            FilterPayload::Books(books) => ResultSet::Books(books),
        })
    }

    /// Number of book cards this result set renders.
    pub fn book_count(&self) -> usize {
        match self {
            ResultSet::Books(books) => books.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{error_notice, ResultSet, NO_RESULTS_MSG};

    // GET /filter_books?category=fiction
    const FICTION_RESULT: &str = r#"[
        {"book_title":"Dune","author_firstname":"Frank","author_lastname":"Herbert","book_price":15,"book_image_url":"/i.jpg"},
        {"book_title":"Fondation","author_firstname":"Isaac","author_lastname":"Asimov","book_price":12.5,"book_image_url":"/fondation.jpg"}
    ]"#;

    #[test]
    fn array_of_records_classifies_as_books_in_order() {
        let result = ResultSet::from_json(FICTION_RESULT).unwrap();
        let ResultSet::Books(books) = &result else {
            panic!("expected Books, got {:?}", result);
        };
        assert_eq!(result.book_count(), 2);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[1].title, "Fondation");
    }

    #[test]
    fn empty_array_classifies_as_empty() {
        let result = ResultSet::from_json("[]").unwrap();
        assert_eq!(result, ResultSet::Empty);
        assert_eq!(result.book_count(), 0);
    }

    #[test]
    fn notices_match_storefront_copy() {
        assert_eq!(NO_RESULTS_MSG, "Aucun livre trouvé pour cette catégorie.");
        assert_eq!(error_notice("Catégorie inconnue"), "Erreur: Catégorie inconnue");
    }

    #[test]
    fn error_field_classifies_as_service_error() {
        let result = ResultSet::from_json(r#"{"error":"Catégorie inconnue"}"#).unwrap();
        assert_eq!(
            result,
            ResultSet::ServiceError("Catégorie inconnue".to_string())
        );
        assert_eq!(result.book_count(), 0);
    }

    #[test]
    fn unrecognized_body_is_a_decode_failure() {
        assert!(ResultSet::from_json("<html>502 Bad Gateway</html>").is_err());
        assert!(ResultSet::from_json(r#"{"unexpected":"shape"}"#).is_err());
    }

    #[test]
    fn fiction_scenario_renders_dune_fields() {
        let result =
            ResultSet::from_json(r#"[{"book_title":"Dune","author_firstname":"Frank","author_lastname":"Herbert","book_price":15,"book_image_url":"/i.jpg"}]"#)
                .unwrap();
        let ResultSet::Books(books) = result else {
            panic!("expected a single rendered book");
        };
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(format!("Auteur: {}", books[0].author_name()), "Auteur: Frank Herbert");
        assert_eq!(format!("Prix: {}", books[0].price_display()), "Prix: 15 €");
    }
}
