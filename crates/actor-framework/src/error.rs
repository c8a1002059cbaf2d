//! # Framework Errors
//!
//! Errors produced by the actor plumbing itself. Entity-specific failures travel
//! inside [`FrameworkError::EntityError`] and can be downcast by typed clients.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id generated: {0}")]
    DuplicateId(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
