//! Client-side form validation.
//!
//! Errors are collected per field; the first message for a field wins so the
//! most basic rule (presence) is the one shown.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::ValidateEmail;

/// Field name -> message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Records `message` when `value` is blank.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }

    /// Records `message` when `ok` is false.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.insert(field, message);
        }
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize, message: &str) {
        if value.trim().chars().count() > max {
            self.insert(field, message);
        }
    }

    /// Optional email: only checked when filled in.
    pub fn email(&mut self, field: &str, value: &str) {
        if !value.trim().is_empty() && !is_valid_email(value) {
            self.insert(field, "Invalid email address");
        }
    }

    /// Optional phone: only checked when filled in.
    pub fn phone(&mut self, field: &str, value: &str) {
        if !value.trim().is_empty() && !is_valid_phone(value) {
            self.insert(field, "Invalid phone number");
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Submit-time validation of an editable record.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

pub fn is_valid_email(value: &str) -> bool {
    value.trim().to_string().validate_email()
}

/// Digits plus `+ - ( )` and spaces, 5..=20 characters, at least 5 digits.
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    let len = value.chars().count();
    if !(5..=20).contains(&len) {
        return false;
    }
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '));
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    allowed && digits >= 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.require("name", " ", "Name is required");
        errors.max_len("name", "", 3, "too long");
        errors.insert("name", "second");
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());
        let mut errors = FieldErrors::new();
        errors.check(false, "x", "bad");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.to_string(), "bad");
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("sales@example.com"));
        assert!(!is_valid_email("sales@"));
        assert!(!is_valid_email("no-at-sign"));

        let mut errors = FieldErrors::new();
        errors.email("email", "");
        assert!(errors.is_empty());
        errors.email("email", "broken");
        assert_eq!(errors.get("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("12345"));
        assert!(!is_valid_phone("1234"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("+-()- +-()"));
    }
}
