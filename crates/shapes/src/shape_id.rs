use std::fmt;

/// Identity of one drawable shape instance.
///
/// Two shapes with equal attributes are still different shapes if their
/// ids differ; canvases track attachment by id.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(uuid::Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create a ShapeId from a u128 (useful for tests).
    pub fn from_u128(value: u128) -> Self {
        Self(uuid::Uuid::from_u128(value))
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShapeId({})", &self.0.to_string()[..8])
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_differ() {
        assert_ne!(ShapeId::new(), ShapeId::new());
    }

    #[test]
    fn test_copies_share_identity() {
        let id = ShapeId::from_u128(7);
        let copy = id;
        let ids: std::collections::HashSet<ShapeId> = [id, copy, ShapeId::new()].into();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&ShapeId::from_u128(7)));
    }

    #[test]
    fn test_short_display() {
        let id = ShapeId::from_u128(0x1234_5678_9abc_def0_0000_0000_0000_0001);
        assert_eq!(id.to_string(), "12345678");
        assert_eq!(format!("{id:?}"), "ShapeId(12345678)");
    }
}
