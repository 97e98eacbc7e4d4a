//! # Core Domain Entities
//!
//! The billboard aggregate and its ownership record. All mutation rules
//! live here; callers above this layer only translate payloads and
//! serialize access.

use crate::domain::invariants::limits;
use crate::domain::value_objects::{Address, Message};
use crate::errors::{ClaimError, SetMessageError};
use serde::{Deserialize, Serialize};

// =============================================================================
// OWNER SET
// =============================================================================

/// The set of identities that have ever successfully claimed ownership.
///
/// Membership is monotonic: identities are only ever added, never removed.
/// Insertion order is preserved, so the first entry is the creator
/// (claim #1) and iteration replays the claim history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSet {
    members: Vec<Address>,
}

impl OwnerSet {
    /// Creates an owner set seeded with the creator.
    #[must_use]
    pub fn new(creator: Address) -> Self {
        Self {
            members: vec![creator],
        }
    }

    /// Returns true if the identity has ever claimed ownership.
    #[must_use]
    pub fn contains(&self, address: Address) -> bool {
        self.members.contains(&address)
    }

    /// Returns the number of distinct identities that have claimed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the set is empty. It never is after construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if the distinct-owner cap has been reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.members.len() >= limits::MAX_OWNERS
    }

    /// Records a claim. Idempotent: an existing member is not re-added.
    ///
    /// Returns true if the identity was newly added.
    pub fn insert(&mut self, address: Address) -> bool {
        if self.contains(address) {
            return false;
        }
        self.members.push(address);
        true
    }

    /// Iterates members in claim order.
    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.members.iter()
    }

    /// Returns the members in claim order.
    #[must_use]
    pub fn as_slice(&self) -> &[Address] {
        &self.members
    }
}

// =============================================================================
// BILLBOARD
// =============================================================================

/// The billboard aggregate: one shared message with claimable write access.
///
/// A board is created with an initial message and a creator, who counts as
/// the first of at most [`limits::MAX_OWNERS`] distinct owners. The message
/// may be rewritten at most [`limits::MAX_UPDATE_COUNT`] times over the
/// lifetime of the board, and never to its current value.
///
/// Every operation is atomic: a rejected call leaves the board completely
/// unchanged. The board does no locking of its own; callers must not
/// interleave mutations (see the service layer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billboard {
    /// The last accepted message value.
    message: Message,
    /// The identity currently authorized to mutate the message.
    owner: Address,
    /// Every identity that has ever claimed ownership, creator included.
    owners: OwnerSet,
    /// Accepted message mutations so far.
    update_count: u32,
}

impl Billboard {
    /// Creates a board with an initial message and creator.
    ///
    /// The creator becomes the current owner and claim #1. Construction
    /// never fails.
    #[must_use]
    pub fn new(initial_message: Message, creator: Address) -> Self {
        Self {
            message: initial_message,
            owner: creator,
            owners: OwnerSet::new(creator),
            update_count: 0,
        }
    }

    /// Transfers ownership to the caller.
    ///
    /// The distinct-owner cap is evaluated against set membership, not the
    /// current owner alone: once five distinct identities have claimed, a
    /// sixth is rejected forever, while any of the five may re-claim at
    /// will. Claiming never touches the message or the update count.
    pub fn claim(&mut self, caller: Address) -> Result<(), ClaimError> {
        if self.owners.is_full() && !self.owners.contains(caller) {
            return Err(ClaimError::MaxOwnersReached {
                count: self.owners.len(),
                max: limits::MAX_OWNERS,
            });
        }

        self.owners.insert(caller);
        self.owner = caller;
        Ok(())
    }

    /// Replaces the message, subject to the mutation rules.
    ///
    /// Conditions are checked in a fixed order so rejections are
    /// deterministic: authorization, then the update cap, then the
    /// no-op rule. Ownership is never affected.
    pub fn set_message(
        &mut self,
        caller: Address,
        new_message: Message,
    ) -> Result<(), SetMessageError> {
        if caller != self.owner {
            return Err(SetMessageError::NotOwner { caller });
        }
        if self.update_count >= limits::MAX_UPDATE_COUNT {
            return Err(SetMessageError::MaxUpdateCountReached {
                max: limits::MAX_UPDATE_COUNT,
            });
        }
        if new_message == self.message {
            return Err(SetMessageError::MessageUnchanged);
        }

        self.message = new_message;
        self.update_count += 1;
        Ok(())
    }

    /// Returns the current message.
    #[must_use]
    pub const fn message(&self) -> Message {
        self.message
    }

    /// Returns the current owner.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the number of accepted message mutations.
    #[must_use]
    pub const fn update_count(&self) -> u32 {
        self.update_count
    }

    /// Returns the record of every identity that has claimed ownership.
    #[must_use]
    pub const fn owners(&self) -> &OwnerSet {
        &self.owners
    }

    /// Returns how many updates remain before the cap.
    #[must_use]
    pub const fn remaining_updates(&self) -> u32 {
        limits::MAX_UPDATE_COUNT - self.update_count
    }
}

// =============================================================================
// TESTS
// =============================================================================
