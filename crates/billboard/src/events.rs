//! # Event Schema
//!
//! Defines the message payloads for billboard requests, responses, and
//! notifications. Payloads travel inside an authenticated envelope supplied
//! by the invoking environment.
//!
//! ## Envelope-Only Identity
//!
//! Request payloads carry NO caller field. The authenticated caller arrives
//! beside the payload, and the billboard trusts the identity it is handed;
//! authenticating it is the invoking environment's job.

use crate::domain::value_objects::{Address, Message};
use serde::{Deserialize, Serialize};

// =============================================================================
// INBOUND REQUESTS
// =============================================================================

/// Request to claim ownership of the board.
///
/// Claiming takes no arguments; the claimant is the authenticated caller
/// from the envelope.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClaimRequestPayload {}

/// Request to replace the board message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetMessageRequestPayload {
    /// The proposed message value.
    pub new_message: Message,
}

// =============================================================================
// OUTBOUND RESPONSES
// =============================================================================

/// Response to a claim request.
///
/// A rejected claim is still a response, not a transport error: `success`
/// is false and `rejection` carries the reason.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClaimResponsePayload {
    /// Whether the claim was accepted.
    pub success: bool,
    /// The current owner after the call (unchanged on rejection).
    pub owner: Address,
    /// Distinct identities that have claimed so far.
    pub owner_count: usize,
    /// Rejection reason (if the claim was refused).
    pub rejection: Option<String>,
}

/// Response to a set-message request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetMessageResponsePayload {
    /// Whether the update was accepted.
    pub success: bool,
    /// The current message after the call (unchanged on rejection).
    pub message: Message,
    /// Accepted updates so far.
    pub update_count: u32,
    /// Rejection reason (if the update was refused).
    pub rejection: Option<String>,
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Published after an accepted ownership claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipClaimedPayload {
    /// Owner before the claim.
    pub previous_owner: Address,
    /// Owner after the claim.
    pub new_owner: Address,
    /// Distinct identities that have claimed so far.
    pub owner_count: usize,
    /// True if this identity had never claimed before.
    pub first_claim: bool,
}

/// Published after an accepted message update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageUpdatedPayload {
    /// The owner who wrote the update.
    pub owner: Address,
    /// The new message value.
    pub message: Message,
    /// Accepted updates so far, this one included.
    pub update_count: u32,
}

/// A published billboard notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// Ownership changed hands.
    OwnershipClaimed(OwnershipClaimedPayload),
    /// The message was rewritten.
    MessageUpdated(MessageUpdatedPayload),
}

impl BoardEvent {
    /// Returns the topic this event is published on.
    #[must_use]
    pub fn topic(&self) -> &'static str {
        match self {
            Self::OwnershipClaimed(_) => topics::OWNERSHIP_CLAIMED,
            Self::MessageUpdated(_) => topics::MESSAGE_UPDATED,
        }
    }
}

// =============================================================================
// EVENT BUS TOPICS
// =============================================================================

/// Event topics for the billboard.
pub mod topics {
    /// Topic for receiving claim requests.
    pub const CLAIM_REQUEST: &str = "billboard.claim.request";

    /// Topic for publishing claim responses.
    pub const CLAIM_RESPONSE: &str = "billboard.claim.response";

    /// Topic for receiving set-message requests.
    pub const SET_MESSAGE_REQUEST: &str = "billboard.set_message.request";

    /// Topic for publishing set-message responses.
    pub const SET_MESSAGE_RESPONSE: &str = "billboard.set_message.response";

    /// Topic for ownership-claimed notifications.
    pub const OWNERSHIP_CLAIMED: &str = "billboard.ownership.claimed";

    /// Topic for message-updated notifications.
    pub const MESSAGE_UPDATED: &str = "billboard.message.updated";

    /// Dead letter queue for undeliverable notifications.
    pub const DLQ: &str = "dlq.billboard";
}

// =============================================================================
// TESTS
// =============================================================================
