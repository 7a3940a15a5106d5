//! Value objects: equality by value, not identity.

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A `Customer`
/// is an entity (it has an id); the name used to look customers up is not.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Message reported when a lookup name fails validation.
pub const CAPITALIZED_NAME_RULE: &str = "the name must start with a capital letter";

/// A validated by-name lookup key.
///
/// The only way to obtain one is [`CustomerName::parse`], so holding a
/// `CustomerName` means the input was non-empty and started with an
/// uppercase character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerName(String);

impl ValueObject for CustomerName {}

impl CustomerName {
    /// Validate a client-supplied name.
    ///
    /// Uppercase is Unicode-aware (`char::is_uppercase`). An empty string has
    /// no first character and is rejected with the same rule.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        match raw.chars().next() {
            Some(first) if first.is_uppercase() => Ok(Self(raw)),
            _ => Err(DomainError::validation(CAPITALIZED_NAME_RULE)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
