use std::fmt;
use std::str::FromStr;

use email_address::EmailAddress;
use tracing::info;
use uuid::Uuid;

use crate::modules::site::domain::notifications::Toaster;

pub const MESSAGE_SENT_TITLE: &str = "Message Sent!";
pub const MESSAGE_SENT_DESCRIPTION: &str =
    "Thank you for your message. I'll get back to you soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = FormValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "message" => Ok(ContactField::Message),
            other => Err(FormValidationError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormValidationError {
    #[error("Field `{0}` is required")]
    MissingField(ContactField),

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Unknown contact form field `{0}`")]
    UnknownField(String),
}

/// Contact form buffer. Submission is a mock: nothing is stored or sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    /// Same gate as the browser's `required` and `type="email"` checks.
    pub fn validate(&self) -> Result<(), FormValidationError> {
        for field in ContactField::ALL {
            if self.value(field).is_empty() {
                return Err(FormValidationError::MissingField(field));
            }
        }

        if !is_valid_email(self.email.trim()) {
            return Err(FormValidationError::InvalidEmail);
        }

        Ok(())
    }

    /// Emits exactly one notification and clears the buffer. A rejected
    /// submit changes nothing.
    pub fn submit(&mut self, toaster: &mut Toaster) -> Result<Uuid, FormValidationError> {
        self.validate()?;

        info!(
            name_len = self.name.len(),
            email_len = self.email.len(),
            message_len = self.message.len(),
            "Contact form submitted"
        );

        let toast = toaster.push(MESSAGE_SENT_TITLE, MESSAGE_SENT_DESCRIPTION);
        *self = Self::default();
        Ok(toast)
    }
}

/// RFC 5322 also allows quoted local parts and bracketed domain literals;
/// email inputs reject both, so this does too.
fn is_valid_email(raw: &str) -> bool {
    match EmailAddress::from_str(raw) {
        Ok(address) => {
            !address.local_part().starts_with('"') && !address.domain().starts_with('[')
        }
        Err(_) => false,
    }
}
