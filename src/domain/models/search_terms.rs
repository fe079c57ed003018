use serde::{Deserialize, Serialize};

/// Marker value placed in both product fields when extraction failed.
/// Never exposed over HTTP; the API layer maps it to an absent `search_terms`.
pub const ERROR_MARKER: &str = "Error";

/// Structured extraction of one search query: a canonical product name and
/// its attributes, in both English and French.
///
/// Invariant: all four fields are populated together. A failed extraction is
/// represented by the sentinel record ([`SearchTerms::sentinel`]), never by a
/// partially filled mix of real data and placeholders across languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerms {
    english_product: String,
    english_attributes: Vec<String>,
    french_product: String,
    french_attributes: Vec<String>,
}

impl SearchTerms {
    pub fn new(
        english_product: impl Into<String>,
        english_attributes: Vec<String>,
        french_product: impl Into<String>,
        french_attributes: Vec<String>,
    ) -> Self {
        Self {
            english_product: english_product.into(),
            english_attributes,
            french_product: french_product.into(),
            french_attributes,
        }
    }

    /// The fixed failure record: `"Error"` products, empty attribute lists.
    ///
    /// Transport failures and parse failures both collapse to this shape, so
    /// callers always receive a well-formed record.
    pub fn sentinel() -> Self {
        Self {
            english_product: ERROR_MARKER.to_string(),
            english_attributes: Vec::new(),
            french_product: ERROR_MARKER.to_string(),
            french_attributes: Vec::new(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.english_product == ERROR_MARKER
    }

    pub fn english_product(&self) -> &str {
        &self.english_product
    }

    pub fn english_attributes(&self) -> &[String] {
        &self.english_attributes
    }

    pub fn french_product(&self) -> &str {
        &self.french_product
    }

    pub fn french_attributes(&self) -> &[String] {
        &self.french_attributes
    }
}
