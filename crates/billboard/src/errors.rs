//! # Error Types
//!
//! All error types for billboard operations.

use crate::domain::value_objects::Address;
use thiserror::Error;

// =============================================================================
// CLAIM ERRORS
// =============================================================================

/// Errors that can occur when claiming ownership.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimError {
    /// A never-seen identity tried to claim after the distinct-owner cap
    /// was reached. Identities already in the owner set may still claim.
    #[error("max owners reached: {count} of {max}")]
    MaxOwnersReached { count: usize, max: usize },
}

// =============================================================================
// SET MESSAGE ERRORS
// =============================================================================

/// Errors that can occur when updating the message.
///
/// The conditions are checked in declaration order, so a call that fails
/// several conditions at once reports the first one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetMessageError {
    /// The caller is not the current owner.
    #[error("caller is not the owner: {caller:?}")]
    NotOwner { caller: Address },

    /// The update cap has been exhausted for the lifetime of the board.
    #[error("max update count reached: {max}")]
    MaxUpdateCountReached { max: u32 },

    /// The proposed message equals the current message byte-for-byte.
    #[error("the message can't be the same")]
    MessageUnchanged,
}

// =============================================================================
// PUBLISH ERRORS
// =============================================================================

/// Errors from publishing notifications through an event sink.
#[derive(Debug, Error, Clone)]
pub enum PublishError {
    /// Event sink is unavailable.
    #[error("event sink unavailable")]
    Unavailable,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

// =============================================================================
// TESTS
// =============================================================================
