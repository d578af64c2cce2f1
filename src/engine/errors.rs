use thiserror::Error;

use crate::engine::components::ShapeKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HitboxError {
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    #[error("invalid {shape} parameter: {reason}")]
    InvalidShapeParameter {
        shape: &'static str,
        reason: String,
    },

    #[error("no collision test defined for {first} vs {second}")]
    UnsupportedShapePair {
        first: ShapeKind,
        second: ShapeKind,
    },

    #[error("invalid settings: {0}")]
    Settings(String),
}

impl HitboxError {
    pub(crate) fn invalid(shape: &'static str, reason: impl Into<String>) -> Self {
        HitboxError::InvalidShapeParameter { shape, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, HitboxError>;
