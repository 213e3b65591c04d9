//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A filter value the catalog does not know about.
    #[error("Unknown {facet} filter value: {value}")]
    UnknownFilterValue { facet: String, value: String },

    /// A quiz answer that is not one of the question's options.
    #[error("Unknown answer for {question}: {answer}")]
    UnknownQuizOption { question: String, answer: String },

    /// Recommendation requested before every question was answered.
    #[error("Quiz incomplete: missing {0}")]
    QuizIncomplete(String),

    /// Answer given after the quiz already produced a recommendation.
    #[error("Quiz already complete; retake it to answer again")]
    QuizAlreadyComplete,

    /// Saved session or filter state that breaks its own rules.
    #[error("Invalid saved state: {0}")]
    InvalidState(String),

    /// Catalog data violates an invariant.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    pub(crate) fn unknown_filter(facet: &str, value: &str) -> Self {
        CommerceError::UnknownFilterValue {
            facet: facet.to_string(),
            value: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
