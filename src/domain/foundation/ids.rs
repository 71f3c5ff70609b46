//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an advisor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvisorId(Uuid);

impl AdvisorId {
    /// Creates a new random AdvisorId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an AdvisorId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns true for the all-zero identifier.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// The all-zero identifier, only ever seen in defaulted request values.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for AdvisorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AdvisorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AdvisorId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(AdvisorId::new(), AdvisorId::new());
    }

    #[test]
    fn nil_id_is_nil() {
        assert!(AdvisorId::nil().is_nil());
        assert!(!AdvisorId::new().is_nil());
    }

    #[test]
    fn round_trips_through_string() {
        let id = AdvisorId::new();
        let parsed: AdvisorId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn serializes_as_bare_uuid() {
        let id = AdvisorId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
