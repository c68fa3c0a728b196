//! Validated newtype wrappers for core domain primitives.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a domain value fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is empty.
    #[error("value must not be empty")]
    Empty,
    /// The value exceeds the maximum length.
    #[error("value exceeds maximum length of {max} characters (got {got})")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length.
        got: usize,
    },
    /// The value contains disallowed characters.
    #[error("value contains invalid characters: only lowercase alphanumeric and hyphens allowed")]
    InvalidCharacters,
}

/// A validated URL-safe slug (lowercase alphanumeric + hyphens, 1–64 chars).
///
/// Canonical slugs on catalog records go through validation; slugs arriving in
/// query parameters stay plain strings because an unknown slug is ignored, not
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    /// Create a new `Slug` from a string slice, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the slug is empty, exceeds 64 characters,
    /// or contains characters other than lowercase letters, digits, and hyphens.
    pub fn new(slug: &str) -> Result<Self, ValidationError> {
        if slug.is_empty() {
            return Err(ValidationError::Empty);
        }
        if slug.len() > 64 {
            return Err(ValidationError::TooLong {
                max: 64,
                got: slug.len(),
            });
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError::InvalidCharacters);
        }
        Ok(Self(slug.to_owned()))
    }

    /// Return the inner slug string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! id_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(
    /// Opaque category identifier.
    CategoryId
);
id_newtype!(
    /// Opaque theme identifier.
    ThemeId
);
id_newtype!(
    /// Opaque tag identifier.
    TagId
);
id_newtype!(
    /// Opaque store identifier.
    StoreId
);
id_newtype!(
    /// Opaque listing identifier.
    ListingId
);
