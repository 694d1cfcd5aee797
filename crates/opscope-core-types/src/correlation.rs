//! Correlation identifier for scoped operations
//!
//! Every log line emitted through one operation scope carries the same
//! `OperationId`, so the start, intermediate and end events of a logical
//! operation can be joined back together downstream.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Random 128-bit identifier correlating the events of one operation
///
/// The default value is the nil UUID and means "no identifier assigned".
/// Scopes created while logging is disabled keep the default so no random
/// value is generated for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(Uuid);

impl OperationId {
    /// Generate a fresh random OperationId using UUIDv4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The unassigned identifier
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this identifier was generated (i.e. is not nil)
    pub fn is_assigned(&self) -> bool {
        !self.0.is_nil()
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for OperationId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_id_generation() {
        let id1 = OperationId::new();
        let id2 = OperationId::new();

        // Should generate different IDs
        assert_ne!(id1, id2);

        assert!(id1.is_assigned());
        assert!(id2.is_assigned());
    }

    #[test]
    fn test_default_is_unassigned() {
        let id = OperationId::default();
        assert!(!id.is_assigned());
        assert_eq!(id, OperationId::nil());
    }

    #[test]
    fn test_generated_ids_are_v4() {
        let id = OperationId::new();
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_operation_id_display() {
        let uuid = Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
        let id = OperationId::from(uuid);
        assert_eq!(id.to_string(), "01234567-89ab-cdef-0123-456789abcdef");
        assert_eq!(OperationId::nil().to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_serialization() {
        let id = OperationId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let deserialized: OperationId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
