//! Contact form submission.
//!
//! # Responsibility
//! - Validate the three required fields.
//! - Show the fixed error or the personalized acknowledgement inline.
//!
//! # Invariants
//! - Emptiness is exact: whitespace-only values count as filled.
//! - A rejected submission leaves the field values untouched.
//! - Nothing leaves the process; logs carry lengths, never contents.

use crate::model::page::{ids, FormMessage, Page, Tone};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all required fields.";

/// Values typed into the contact form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Reports the first empty required field.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        let fields = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ];
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ContactValidationError::MissingField(field)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Input element id, also used as the log field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => ids::INPUT_NAME,
            Self::Email => ids::INPUT_EMAIL,
            Self::Message => ids::INPUT_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    MissingField(ContactField),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is empty: {}", field.as_str()),
        }
    }
}

impl Error for ContactValidationError {}

/// Acknowledgement shown after a successful submission.
pub fn success_message(name: &str) -> String {
    format!("Thank you for your message, {name}! I will get back to you soon.")
}

/// Handles one submit event against the page.
///
/// The form mirrors `submission` first, so a rejected submit keeps what the
/// visitor typed; an accepted one clears all three fields.
pub fn submit(
    page: &mut Page,
    submission: &ContactSubmission,
) -> Result<(), ContactValidationError> {
    page.form.name = submission.name.clone();
    page.form.email = submission.email.clone();
    page.form.message = submission.message.clone();

    if let Err(err) = submission.validate() {
        info!(
            "event=contact_submit module=contact status=rejected field={}",
            match err {
                ContactValidationError::MissingField(field) => field.as_str(),
            }
        );
        page.form_message = Some(FormMessage {
            text: MISSING_FIELDS_MESSAGE.to_string(),
            tone: Tone::Error,
        });
        return Err(err);
    }

    info!(
        "event=contact_submit module=contact status=ok name_len={} email_len={} message_len={}",
        submission.name.chars().count(),
        submission.email.chars().count(),
        submission.message.chars().count()
    );
    page.form_message = Some(FormMessage {
        text: success_message(submission.name.as_str()),
        tone: Tone::Success,
    });
    page.form.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        submit, ContactField, ContactSubmission, ContactValidationError, MISSING_FIELDS_MESSAGE,
    };
    use crate::model::page::{Page, Tone};

    #[test]
    fn validate_reports_first_empty_field() {
        let err = ContactSubmission::new("a", "", "")
            .validate()
            .expect_err("email empty");
        assert_eq!(err, ContactValidationError::MissingField(ContactField::Email));
    }

    #[test]
    fn whitespace_counts_as_filled() {
        ContactSubmission::new(" ", " ", " ")
            .validate()
            .expect("whitespace is not trimmed");
    }

    #[test]
    fn success_clears_form_and_greets_by_name() {
        let mut page = Page::default();
        submit(&mut page, &ContactSubmission::new("Ada", "ada@x.io", "hello"))
            .expect("valid submission");
        let message = page.form_message.expect("message shown");
        assert_eq!(message.tone, Tone::Success);
        assert!(message.text.contains("Ada"));
        assert!(page.form.name.is_empty());
        assert!(page.form.email.is_empty());
        assert!(page.form.message.is_empty());
    }

    #[test]
    fn rejection_keeps_field_values() {
        let mut page = Page::default();
        let submission = ContactSubmission::new("Ada", "", "hello");
        submit(&mut page, &submission).expect_err("email missing");
        let message = page.form_message.clone().expect("message shown");
        assert_eq!(message.text, MISSING_FIELDS_MESSAGE);
        assert_eq!(message.tone, Tone::Error);
        assert_eq!(page.form.name, "Ada");
        assert_eq!(page.form.message, "hello");
    }
}
