//! Error types for the layout engine

use std::fmt;

use thiserror::Error;

/// Kind of input record an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    TimelineColumn,
    Goal,
    Row,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::TimelineColumn => write!(f, "timeline column"),
            EntityKind::Goal => write!(f, "goal"),
            EntityKind::Row => write!(f, "row"),
        }
    }
}

/// Structural errors that abort a layout pass
///
/// Nothing is emitted when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A record breaks a structural rule of the input
    #[error("invalid layout input: {entity} '{id}': {reason}")]
    InvalidLayoutInput {
        entity: EntityKind,
        id: String,
        reason: String,
    },
}

impl LayoutError {
    /// Create an invalid input error for the given record
    pub fn invalid_input(
        entity: EntityKind,
        id: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidLayoutInput {
            entity,
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// The kind of record that triggered the error
    pub fn entity(&self) -> EntityKind {
        match self {
            Self::InvalidLayoutInput { entity, .. } => *entity,
        }
    }

    /// The identifying id or label of the offending record
    pub fn id(&self) -> &str {
        match self {
            Self::InvalidLayoutInput { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = LayoutError::invalid_input(EntityKind::Row, 7, "references unknown goal 3");
        insta::assert_snapshot!(
            err.to_string(),
            @"invalid layout input: row '7': references unknown goal 3"
        );
    }

    #[test]
    fn test_accessors() {
        let err = LayoutError::invalid_input(EntityKind::TimelineColumn, "2029-2053", "not last");
        assert_eq!(err.entity(), EntityKind::TimelineColumn);
        assert_eq!(err.id(), "2029-2053");
    }
}
