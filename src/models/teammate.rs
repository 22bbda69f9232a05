//! Teammate model.
//!
//! A teammate is an opaque identifier (a display name, an email, a user id)
//! that is unique within one event. It has no lifecycle of its own and only
//! exists as a member of an event's teammate set and of job pools.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A person who can be assigned to jobs.
///
/// Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Teammate(String);

impl Teammate {
    /// Creates a teammate from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Teammate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Teammate {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Teammate {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for Teammate {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Teammate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_teammate_display_and_conversions() {
        let a = Teammate::from("alice");
        let b: Teammate = String::from("alice").into();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "alice");
        assert_eq!(a.as_str(), "alice");
    }

    #[test]
    fn test_teammate_borrow_lookup() {
        let set: BTreeSet<Teammate> = ["bob", "alice"].into_iter().map(Teammate::from).collect();
        assert!(set.contains("alice"));
        assert!(!set.contains("carol"));
    }

    #[test]
    fn test_teammate_blank() {
        assert!(Teammate::new("   ").is_blank());
        assert!(!Teammate::new("x").is_blank());
    }

    #[test]
    fn test_teammate_serializes_as_string() {
        let json = serde_json::to_string(&Teammate::new("dana")).unwrap();
        assert_eq!(json, "\"dana\"");
        let back: Teammate = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "dana");
    }
}
