//! Validation of inbound submission requests.
//!
//! All fields are checked so the caller gets every problem at once, but a
//! single failure rejects the whole request.

use email_address::{EmailAddress, Options};

use super::error::{FieldError, ValidationErrors};
use super::requests::CreateSubmissionRequest;
use super::types::NewSubmission;

const MAX_NAME_CHARS: usize = 100;
const MAX_SUBJECT_CHARS: usize = 200;
const MAX_MESSAGE_CHARS: usize = 2000;

/// Validate a request and turn it into a [`NewSubmission`].
///
/// Values are kept exactly as sent, except that a blank subject becomes
/// `None`.
pub fn validate(request: CreateSubmissionRequest) -> Result<NewSubmission, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let checks = [
        check_name(&request.name),
        check_email(&request.email),
        check_subject(request.subject.as_deref()),
        check_message(&request.message),
    ];
    for error in checks.into_iter().flat_map(Result::err) {
        errors.push(error);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let subject = request.subject.filter(|s| !is_blank(s));

    Ok(NewSubmission::new(
        request.name,
        request.email,
        subject,
        request.message,
    ))
}

fn check_name(name: &str) -> Result<(), FieldError> {
    if is_blank(name) {
        return Err(FieldError::NameRequired);
    }
    if char_len(name) > MAX_NAME_CHARS {
        return Err(FieldError::NameTooLong);
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), FieldError> {
    if is_blank(email) {
        return Err(FieldError::EmailRequired);
    }
    if !is_plain_address(email) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// A bare `local@domain` address: no display name (`Ann <ann@x.com>`) and no
/// IP domain literal (`ann@[127.0.0.1]`).
fn is_plain_address(email: &str) -> bool {
    let options = Options::default().without_display_text();
    match EmailAddress::parse_with_options(email, options) {
        Ok(address) => address.email() == email && !address.domain().starts_with('['),
        Err(_) => false,
    }
}

fn check_subject(subject: Option<&str>) -> Result<(), FieldError> {
    match subject {
        Some(s) if char_len(s) > MAX_SUBJECT_CHARS => Err(FieldError::SubjectTooLong),
        _ => Ok(()),
    }
}

fn check_message(message: &str) -> Result<(), FieldError> {
    if is_blank(message) {
        return Err(FieldError::MessageRequired);
    }
    if char_len(message) > MAX_MESSAGE_CHARS {
        return Err(FieldError::MessageTooLong);
    }
    Ok(())
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

// Limits are in characters, not UTF-8 bytes.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateSubmissionRequest {
        CreateSubmissionRequest::new("Ann", "ann@x.com", "Hello").with_subject("Hi")
    }

    #[test]
    fn test_valid_request_passes() {
        let new = validate(valid_request()).unwrap();

        assert_eq!(new.name(), "Ann");
        assert_eq!(new.email(), "ann@x.com");
        assert_eq!(new.subject(), Some("Hi"));
        assert_eq!(new.message(), "Hello");
    }

    #[test]
    fn test_all_blank_reports_every_required_field() {
        let request = CreateSubmissionRequest::new("", "bad", "");

        let errors = validate(request).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some(FieldError::NameRequired));
        assert_eq!(errors.get("email"), Some(FieldError::InvalidEmail));
        assert_eq!(errors.get("message"), Some(FieldError::MessageRequired));
        assert_eq!(errors.get("subject"), None);
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let request = CreateSubmissionRequest::new("   ", "\t", "\n ");

        let errors = validate(request).unwrap_err();

        assert_eq!(errors.get("name"), Some(FieldError::NameRequired));
        assert_eq!(errors.get("email"), Some(FieldError::EmailRequired));
        assert_eq!(errors.get("message"), Some(FieldError::MessageRequired));
    }

    #[test]
    fn test_blank_email_reports_required_only() {
        let request = CreateSubmissionRequest::new("Ann", "", "Hello");

        let errors = validate(request).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some(FieldError::EmailRequired));
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for email in [
            "bad",
            "ann@",
            "@x.com",
            "ann x@x.com",
            "ann@@x.com",
            "Ann <ann@x.com>",
            "<ann@x.com>",
            "ann@[127.0.0.1]",
        ] {
            let request = CreateSubmissionRequest::new("Ann", email, "Hello");
            let errors = validate(request).unwrap_err();
            assert_eq!(
                errors.get("email"),
                Some(FieldError::InvalidEmail),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_common_emails_accepted() {
        for email in ["ann@x.com", "ann.lee+contact@mail.example.org", "o'neil@x.io"] {
            let request = CreateSubmissionRequest::new("Ann", email, "Hello");
            assert!(validate(request).is_ok(), "expected {email:?} to be accepted");
        }
    }

    #[test]
    fn test_name_length_limit() {
        let at_limit = "a".repeat(MAX_NAME_CHARS);
        assert!(validate(CreateSubmissionRequest::new(at_limit, "ann@x.com", "Hello")).is_ok());

        let over = "a".repeat(MAX_NAME_CHARS + 1);
        let errors = validate(CreateSubmissionRequest::new(over, "ann@x.com", "Hello")).unwrap_err();
        assert_eq!(errors.get("name"), Some(FieldError::NameTooLong));
    }

    #[test]
    fn test_subject_length_limit() {
        let at_limit = "s".repeat(MAX_SUBJECT_CHARS);
        let request = CreateSubmissionRequest::new("Ann", "ann@x.com", "Hello").with_subject(at_limit);
        assert!(validate(request).is_ok());

        let over = "s".repeat(MAX_SUBJECT_CHARS + 1);
        let request = CreateSubmissionRequest::new("Ann", "ann@x.com", "Hello").with_subject(over);
        let errors = validate(request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("subject"), Some(FieldError::SubjectTooLong));
    }

    #[test]
    fn test_message_length_limit() {
        let at_limit = "m".repeat(MAX_MESSAGE_CHARS);
        assert!(validate(CreateSubmissionRequest::new("Ann", "ann@x.com", at_limit)).is_ok());

        let over = "m".repeat(MAX_MESSAGE_CHARS + 1);
        let errors = validate(CreateSubmissionRequest::new("Ann", "ann@x.com", over)).unwrap_err();
        assert_eq!(errors.get("message"), Some(FieldError::MessageTooLong));
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        // 100 two-byte characters is 200 bytes but still within the limit.
        let name = "é".repeat(MAX_NAME_CHARS);
        assert!(name.len() > MAX_NAME_CHARS);

        assert!(validate(CreateSubmissionRequest::new(name, "ann@x.com", "Hello")).is_ok());
    }

    #[test]
    fn test_blank_subject_becomes_none() {
        let request = CreateSubmissionRequest::new("Ann", "ann@x.com", "Hello").with_subject("  ");

        let new = validate(request).unwrap();

        assert_eq!(new.subject(), None);
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let request = CreateSubmissionRequest::new(" Ann ", "ann@x.com", " Hello ");

        let new = validate(request).unwrap();

        assert_eq!(new.name(), " Ann ");
        assert_eq!(new.message(), " Hello ");
    }
}
