//! UserId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for user identifiers.
///
/// User ids are opaque, caller-supplied strings. The only structural rule
/// is that an id must be present: an empty or whitespace-only string is
/// rejected at construction time.
///
/// # Example
///
/// ```
/// use phonedb::domain::UserId;
///
/// let id = UserId::new("user1").unwrap();
/// assert_eq!(id.as_str(), "user1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingUserId` if the provided id is
    /// empty or contains only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::MissingUserId);
        }
        Ok(Self(id))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UserId::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new("user1").unwrap();
        assert_eq!(id.as_str(), "user1");
    }

    #[test]
    fn test_user_id_rejects_empty() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("   ").is_err());
    }

    #[test]
    fn test_user_id_display() {
        let id = UserId::new("user42").unwrap();
        assert_eq!(format!("{}", id), "user42");
    }

    #[test]
    fn test_user_id_serialization() {
        let id = UserId::new("user1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"user1\"");
    }

    #[test]
    fn test_user_id_deserialization_empty_fails() {
        let result: Result<UserId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
