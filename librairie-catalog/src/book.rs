use serde::Deserialize;

/// A book's display-relevant fields as returned by `/filter_books`.
///
/// Decoded read-only from the wire record; the storefront never mutates or
/// persists these, it only renders them in the order received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookSummary {
    #[serde(rename = "book_title")]
    pub title: String,
    pub author_firstname: String,
    pub author_lastname: String,
    #[serde(rename = "book_price")]
    pub price: f64,
    #[serde(rename = "book_image_url")]
    pub image_url: String,
}

impl BookSummary {
    /// Author full name, first and last space-joined.
    pub fn author_name(&self) -> String {
        format!("{} {}", self.author_firstname, self.author_lastname)
    }

    /// Price with the euro sign, e.g. `"15 €"`.
    ///
    /// Whole prices render without a decimal part, matching how the
    /// server-side templates print them.
    pub fn price_display(&self) -> String {
        format!("{} €", self.price)
    }
}
