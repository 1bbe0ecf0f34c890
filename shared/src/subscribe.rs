//! Validation of the newsletter subscription form.
//!
//! All three fields are checked on every submit, so a resubmission after a
//! partial fix updates each field's error independently. Submission itself
//! is simulated: once validation passes the form is accepted unconditionally.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::i18n::current::subscribe as t;

// One '@', at least one '.' after it, no whitespace anywhere.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Form fields, in the order they are validated and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Subscriber name.
    Name,
    /// Subscriber email address.
    Email,
    /// Primary interest selection.
    Interest,
}

impl Field {
    /// Every field, in validation order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Interest];

    /// The `name` attribute of the field's input.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Interest => "interest",
        }
    }
}

/// Why a field was rejected. `Display` is the text shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Name was blank.
    #[error("{}", t::NAME_REQUIRED)]
    NameRequired,
    /// Email was blank.
    #[error("{}", t::EMAIL_REQUIRED)]
    EmailRequired,
    /// Email did not match `local@domain.tld`.
    #[error("{}", t::EMAIL_INVALID)]
    EmailInvalid,
    /// No interest selected.
    #[error("{}", t::INTEREST_REQUIRED)]
    InterestRequired,
}

/// Raw field values as read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscribeInput {
    /// Value of the `name` field.
    pub name: String,
    /// Value of the `email` field.
    pub email: String,
    /// Value of the `interest` field.
    pub interest: String,
}

/// An accepted subscription, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Subscriber name.
    pub name: String,
    /// Subscriber email address.
    pub email: String,
    /// Primary interest.
    pub interest: String,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form should reset.
    Accepted(Submission),
    /// At least one field failed. Holds every failing field.
    Rejected(Vec<(Field, FieldError)>),
}

impl SubmitOutcome {
    /// Error for `field`, or `None` when the field passed.
    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        match self {
            SubmitOutcome::Accepted(_) => None,
            SubmitOutcome::Rejected(errors) => errors
                .iter()
                .find(|(failed, _)| *failed == field)
                .map(|(_, err)| *err),
        }
    }

    /// Message for the form-level message slot.
    pub fn message(&self) -> FormMessage {
        match self {
            SubmitOutcome::Accepted(_) => FormMessage::Success,
            SubmitOutcome::Rejected(_) => FormMessage::Error,
        }
    }

    /// Whether the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Form-level message. The two variants replace each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// Simulated submission succeeded.
    Success,
    /// Validation failed.
    Error,
}

impl FormMessage {
    /// Text for the message slot.
    pub fn text(self) -> &'static str {
        match self {
            FormMessage::Success => t::SUCCESS,
            FormMessage::Error => t::SUMMARY_ERROR,
        }
    }
}

/// Check a trimmed email value.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

fn require(value: &str, err: FieldError) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(err)
    } else {
        Ok(())
    }
}

impl SubscribeInput {
    /// Per-field results, in [`Field::ALL`] order. No short-circuit.
    pub fn check_fields(&self) -> [(Field, Result<(), FieldError>); 3] {
        [
            (Field::Name, require(self.name.trim(), FieldError::NameRequired)),
            (Field::Email, validate_email(self.email.trim())),
            (Field::Interest, require(self.interest.trim(), FieldError::InterestRequired)),
        ]
    }

    /// Validate every field and decide the outcome of this submit.
    pub fn submit(&self) -> SubmitOutcome {
        let errors: Vec<(Field, FieldError)> = self
            .check_fields()
            .into_iter()
            .filter_map(|(field, result)| result.err().map(|err| (field, err)))
            .collect();

        if !errors.is_empty() {
            debug!(failed = errors.len(), "subscription rejected");
            return SubmitOutcome::Rejected(errors);
        }

        debug!("subscription accepted");
        SubmitOutcome::Accepted(Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            interest: self.interest.trim().to_string(),
        })
    }
}
