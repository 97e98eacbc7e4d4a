//! # Driving Ports (API - Inbound)
//!
//! The interface exposed by the billboard subsystem. The invoking
//! environment uses it to claim ownership, rewrite the message, and read
//! current state.
//!
//! Callers are responsible for supplying authenticated `Address` values;
//! the billboard trusts the identity it is given.

use crate::domain::value_objects::{Address, Message};
use crate::errors::{ClaimError, SetMessageError};
use async_trait::async_trait;

// =============================================================================
// BILLBOARD API (Primary Driving Port)
// =============================================================================

/// Primary API for the billboard.
///
/// Implementations must serialize mutations: `claim` and `set_message`
/// on the same board must never interleave. The domain aggregate relies
/// on that and does no locking of its own.
///
/// ## Usage
///
/// ```ignore
/// api.claim(caller).await?;
/// api.set_message(caller, new_message).await?;
/// ```
#[async_trait]
pub trait BillboardApi: Send + Sync {
    /// Transfer ownership to the caller.
    ///
    /// At most five distinct identities ever claim; an identity that has
    /// already claimed may re-claim at any time.
    ///
    /// # Arguments
    ///
    /// * `caller` - Authenticated identity of the claimant
    ///
    /// # Errors
    ///
    /// * `ClaimError::MaxOwnersReached` - a sixth distinct identity tried
    ///   to claim
    async fn claim(&self, caller: Address) -> Result<(), ClaimError>;

    /// Replace the board message.
    ///
    /// Checks authorization, then the lifetime update cap, then the no-op
    /// rule, in that order. A rejected call leaves the board unchanged.
    ///
    /// # Arguments
    ///
    /// * `caller` - Authenticated identity of the writer
    /// * `new_message` - Proposed message value
    ///
    /// # Errors
    ///
    /// * `SetMessageError::NotOwner` - caller is not the current owner
    /// * `SetMessageError::MaxUpdateCountReached` - ten updates already
    ///   accepted
    /// * `SetMessageError::MessageUnchanged` - proposed value equals the
    ///   current message
    async fn set_message(
        &self,
        caller: Address,
        new_message: Message,
    ) -> Result<(), SetMessageError>;

    /// Read the current message. Never fails, never mutates.
    async fn message(&self) -> Message;

    /// Read the current owner. Never fails, never mutates.
    async fn owner(&self) -> Address;

    /// Read the number of accepted updates.
    async fn update_count(&self) -> u32;

    /// Read every identity that has claimed ownership, in claim order.
    async fn owners(&self) -> Vec<Address>;
}
