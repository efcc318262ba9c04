//! Category filter: request URL construction and the controller state
//! machine guarding the display region.

use crate::error::CatalogError;
use crate::response::ResultSet;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Path of the book listing endpoint, relative to the page origin.
pub const FILTER_BOOKS_PATH: &str = "/filter_books";

/// An opaque category identifier as supplied by the selector control.
///
/// No local validation; the token is passed through unmodified apart from
/// percent-escaping for the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryToken(pub String);

impl CategoryToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Transport-safe form: every reserved character percent-escaped, so the
    /// server recovers the original token after query decoding.
    pub fn encoded(&self) -> String {
        utf8_percent_encode(&self.0, NON_ALPHANUMERIC).to_string()
    }
}

/// Build the filter request URL for a category.
pub fn filter_url(category: &CategoryToken) -> String {
    format!("{}?category={}", FILTER_BOOKS_PATH, category.encoded())
}

/// Serializes filter responses onto the display region.
///
/// Each filter request takes a generation ticket from [`begin`]; only the
/// response holding the latest ticket may replace the display model. A
/// request that is overtaken by a newer selection completes into the void,
/// which resolves the last-write-wins race between overlapping fetches.
///
/// [`begin`]: FilterController::begin
#[derive(Debug, Default)]
pub struct FilterController {
    generation: u64,
    current: Option<ResultSet>,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new in-flight request and return its ticket. Any ticket
    /// issued earlier is invalidated immediately.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Complete a request. Returns `true` when the display model was
    /// replaced.
    ///
    /// A stale ticket or a failed request leaves the display in its prior
    /// state; failures are reported to the diagnostic channel here so the
    /// component effect only has to publish the new model.
    pub fn complete(&mut self, ticket: u64, outcome: Result<ResultSet, CatalogError>) -> bool {
        if ticket != self.generation {
            log::info!("Discarding stale filter response (ticket {ticket})");
            return false;
        }
        match outcome {
            Ok(result) => {
                self.current = Some(result);
                true
            }
            Err(e) => {
                log::error!("Filter request failed: {e}");
                false
            }
        }
    }

    /// The display model, or `None` before the first completed request.
    pub fn current(&self) -> Option<&ResultSet> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::{filter_url, CategoryToken, FilterController};
    use crate::error::CatalogError;
    use crate::response::ResultSet;
    use percent_encoding::percent_decode_str;

    #[test]
    fn plain_token_passes_through() {
        assert_eq!(
            filter_url(&CategoryToken::new("fiction")),
            "/filter_books?category=fiction"
        );
    }

    #[test]
    fn reserved_characters_round_trip_through_encoding() {
        for raw in ["science & nature", "bande dessinée", "50%/off?", "a=b#c"] {
            let encoded = CategoryToken::new(raw).encoded();
            assert!(
                !encoded.contains(&[' ', '&', '?', '#', '=', '/'][..]),
                "{encoded}"
            );
            let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
            assert_eq!(decoded, raw);
        }
    }

    #[test]
    fn completed_request_replaces_display() {
        let mut ctl = FilterController::new();
        assert!(ctl.current().is_none());
        let ticket = ctl.begin();
        assert!(ctl.complete(ticket, Ok(ResultSet::Empty)));
        assert_eq!(ctl.current(), Some(&ResultSet::Empty));
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut ctl = FilterController::new();
        let first = ctl.begin();
        let second = ctl.begin();
        // The overtaken request resolves last but must not win
        assert!(ctl.complete(second, Ok(ResultSet::Empty)));
        assert!(!ctl.complete(first, Ok(ResultSet::ServiceError("late".to_string()))));
        assert_eq!(ctl.current(), Some(&ResultSet::Empty));
    }

    #[test]
    fn transport_failure_leaves_prior_display() {
        let mut ctl = FilterController::new();
        let ticket = ctl.begin();
        assert!(ctl.complete(ticket, Ok(ResultSet::Empty)));

        let ticket = ctl.begin();
        let failed = ctl.complete(
            ticket,
            Err(CatalogError::Transport("connection refused".to_string())),
        );
        assert!(!failed);
        assert_eq!(ctl.current(), Some(&ResultSet::Empty));
    }

    #[test]
    fn decode_failure_leaves_prior_display() {
        let mut ctl = FilterController::new();
        let ticket = ctl.begin();
        let books = ResultSet::from_json(
            r#"[{"book_title":"Dune","author_firstname":"Frank","author_lastname":"Herbert","book_price":15,"book_image_url":"/i.jpg"}]"#,
        )
        .unwrap();
        assert!(ctl.complete(ticket, Ok(books.clone())));

        let ticket = ctl.begin();
        let bad = ResultSet::from_json("not json");
        assert!(!ctl.complete(ticket, bad));
        assert_eq!(ctl.current(), Some(&books));
    }
}
