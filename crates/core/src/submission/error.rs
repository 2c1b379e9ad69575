use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// A single rejected field of a submission request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be 100 characters or fewer")]
    NameTooLong,
    #[error("Email is required")]
    EmailRequired,
    #[error("Must be a valid email address")]
    InvalidEmail,
    #[error("Subject must be 200 characters or fewer")]
    SubjectTooLong,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be 2000 characters or fewer")]
    MessageTooLong,
}

impl FieldError {
    /// The request field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::NameRequired | FieldError::NameTooLong => "name",
            FieldError::EmailRequired | FieldError::InvalidEmail => "email",
            FieldError::SubjectTooLong => "subject",
            FieldError::MessageRequired | FieldError::MessageTooLong => "message",
        }
    }
}

/// Every field error found in one request.
///
/// Serializes as a flat object of `field -> message`, e.g.
/// `{"name": "Name is required", "email": "Must be a valid email address"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error reported for `field`, if any.
    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid submission")?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{}: {error}", error.field())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in &self.errors {
            map.serialize_entry(error.field(), &error.to_string())?;
        }
        map.end()
    }
}
