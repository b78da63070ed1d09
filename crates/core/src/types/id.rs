//! Identifiers.
//!
//! The store has a numeric ID from configuration. Shoe IDs are supplied by
//! the person entering stock, so they are opaque text.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(i32);

impl StoreId {
    /// Create a store ID.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The numeric value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a pair of shoes.
///
/// Kept verbatim as text. Uniqueness is not enforced anywhere, and two IDs
/// are equal only when their text is equal (`"7"` and `"07"` differ).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoeId(String);

impl ShoeId {
    /// Create a new shoe ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShoeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShoeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ShoeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ShoeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
