//! Store enquiry form.

use serde::{Deserialize, Serialize};
use tracing::info;

/// An enquiry as typed by the visitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    /// Your name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Free-text message.
    pub message: String,
}

/// Confirmation shown after an enquiry is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: String,
    pub description: String,
}

impl Default for Acknowledgment {
    fn default() -> Self {
        Self {
            title: "Thank you for your enquiry!".to_string(),
            description: "We'll get back to you soon.".to_string(),
        }
    }
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check if every field is blank.
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.phone, &self.email, &self.message]
            .iter()
            .all(|f| f.trim().is_empty())
    }

    /// Submit the enquiry and clear the form.
    ///
    /// Nothing is delivered anywhere; the enquiry is only logged.
    pub fn submit(&mut self) -> Acknowledgment {
        info!(
            name = %self.name,
            has_phone = !self.phone.is_empty(),
            has_email = !self.email.is_empty(),
            "enquiry submitted"
        );
        *self = Self::default();
        Acknowledgment::default()
    }
}
