//! The module contains the errors the engine can throw.
//!
//! The store itself never fails: invalid mutations are dropped. Errors only come
//! from validating drafts before they reach the store:
//!
//! - [`InvalidName`] thrown when a name is blank after trimming.
//! - [`InvalidAmount`] thrown when a cost is not strictly positive.
//! - [`EmptyGroup`] thrown when a group has no members.
//! - [`UnknownPerson`] thrown when a group member is not on the tab.
//!
//!  [`InvalidName`]: EngineError::InvalidName
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`EmptyGroup`]: EngineError::EmptyGroup
//!  [`UnknownPerson`]: EngineError::UnknownPerson
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Empty group: {0}")]
    EmptyGroup(String),
    #[error("Unknown person: {0}")]
    UnknownPerson(String),
}
