//! Error types for pointersim

use thiserror::Error;

/// Main error type for pointersim operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("degenerate direction: vector has zero magnitude")]
    DegenerateDirection,

    #[error("degenerate mesh: vertices have no distance spread")]
    DegenerateMesh,

    #[error("pointer model was not found")]
    ModelNotInitialized,

    #[error("controller transform '{0}' was not found in the scene")]
    ControllerNotFound(String),

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("an entity named '{0}' is already registered")]
    DuplicateEntity(String),

    #[error("cyclic transform parent chain at '{0}'")]
    CyclicTransform(String),
}

/// Result type alias for pointersim operations
pub type Result<T> = std::result::Result<T, Error>;
