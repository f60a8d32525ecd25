//! Normalized identifier shared by actors and notifications.
//!
//! # Responsibility
//! - Coerce string and numeric identifiers into one canonical form.
//! - Treat blank identifiers as absent so policy checks fail closed.
//!
//! # Invariants
//! - An `EntityId` is never empty and never carries surrounding whitespace.
//! - `7` and `"7"` normalize to the same value.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical identifier for users, tenants, stores and notifications.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Builds an identifier from raw text.
    ///
    /// # Errors
    /// - Returns `EntityIdError::Blank` when `raw` is empty after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EntityIdError> {
        Self::parse_optional(raw).ok_or(EntityIdError::Blank)
    }

    /// Builds an identifier from raw text, mapping blank input to `None`.
    pub fn parse_optional(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for EntityId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

/// Identifier construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityIdError {
    Blank,
}

impl Display for EntityIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "identifier must not be blank"),
        }
    }
}

impl Error for EntityIdError {}

/// Wire shapes accepted for identifiers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl RawId {
    fn normalize(self) -> Option<EntityId> {
        match self {
            Self::Text(value) => EntityId::parse_optional(value),
            Self::Signed(value) => Some(EntityId::from(value)),
            Self::Unsigned(value) => Some(EntityId::from(value)),
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawId::deserialize(deserializer)?
            .normalize()
            .ok_or_else(|| serde::de::Error::custom(EntityIdError::Blank))
    }
}

/// Deserializes an optional identifier; null, missing and blank all become `None`.
///
/// Use together with `#[serde(default)]` so a missing field is accepted.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.and_then(RawId::normalize))
}

#[cfg(test)]
mod tests {
    use super::{EntityId, EntityIdError};

    #[test]
    fn trims_and_rejects_blank_text() {
        assert_eq!(EntityId::new("  u1 ").expect("trimmed id").as_str(), "u1");
        assert_eq!(EntityId::new("   "), Err(EntityIdError::Blank));
        assert_eq!(EntityId::parse_optional(""), None);
    }

    #[test]
    fn numeric_and_text_forms_compare_equal() {
        let numeric = EntityId::from(42_u64);
        let text = EntityId::new("42").expect("text id");
        assert_eq!(numeric, text);
        assert_eq!(EntityId::from(-3_i64).to_string(), "-3");
    }
}
