//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated phone number in canonical E.164 form.
///
/// Construction parses the input with libphonenumber grammar rules and
/// rejects anything that is not a valid, dialable number. The canonical
/// E.164 text is what identifies a number everywhere in the system: it is
/// the set member stored in Redis, so two differently-formatted spellings
/// of the same number collapse to one entry.
///
/// # Example
///
/// ```
/// use phonedb::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+1 (847) 555-7777").unwrap();
/// assert_eq!(phone.as_str(), "+18475557777");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse and validate a phone number, producing its canonical form.
    ///
    /// The input is expected in international (country-code-prefixed)
    /// format. Malformed input is reported as an error, never a panic —
    /// bulk contact lists routinely contain garbage.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input cannot be
    /// parsed or does not denote a valid, dialable number.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let number = phonenumber::parse(None, raw)
            .map_err(|_| ValidationError::InvalidPhone(raw.to_string()))?;

        if !phonenumber::is_valid(&number) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(number.format().mode(phonenumber::Mode::E164).to_string()))
    }

    /// Check whether a raw string is a valid phone number.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Rehydrate a canonical member read back from the store.
    ///
    /// Every write path validates before storing, so stored members are
    /// trusted canonical text and are not reparsed.
    pub(crate) fn from_canonical(canonical: String) -> Self {
        Self(canonical)
    }

    /// Get the canonical form as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying canonical String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
