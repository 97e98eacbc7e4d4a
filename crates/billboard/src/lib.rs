//! # Billboard - Ownership-Gated Shared Message Store
//!
//! ## Purpose
//!
//! Governs a single shared 32-byte message: who may change it, how many
//! distinct accounts may ever claim ownership, and how many times the
//! message may be rewritten. The invoking environment authenticates
//! callers and constructs the board; everything here is the authorization
//! and mutation state machine around that one value.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Owner Cap (5 distinct identities, add-only) | `domain/entities.rs` - `Billboard::claim()` |
//! | INVARIANT-2 | Update Cap (10 accepted mutations, lifetime) | `domain/entities.rs` - `Billboard::set_message()` |
//! | INVARIANT-3 | No-Op Writes Rejected | `domain/entities.rs` - `Billboard::set_message()` |
//! | INVARIANT-4 | Owner Membership (owner is always in the set) | `domain/entities.rs` - `Billboard::claim()` |
//! | INVARIANT-5 | No Partial Effects (rejected calls change nothing) | `domain/entities.rs` - check-then-apply ordering |
//!
//! Runtime re-checks live in `domain/invariants.rs`.
//!
//! ## Concurrency
//!
//! The domain aggregate assumes serialized calls and does no locking of
//! its own. `BillboardService` provides the required serialization for
//! concurrent environments with a single `tokio::sync::Mutex`.
//!
//! ## Usage Example
//!
//! ```ignore
//! use billboard::prelude::*;
//!
//! let service = create_test_service();
//!
//! // Hand ownership to a new account, then rewrite the message.
//! service.claim(caller).await?;
//! service.set_message(caller, Message::from_text("Goodbye").unwrap()).await?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{Billboard, OwnerSet};

    // Value objects
    pub use crate::domain::value_objects::{Address, Message};

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, limits, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::BillboardApi;
    pub use crate::ports::outbound::EventSink;

    // Events
    pub use crate::events::{
        topics, BoardEvent, ClaimRequestPayload, ClaimResponsePayload, MessageUpdatedPayload,
        OwnershipClaimedPayload, SetMessageRequestPayload, SetMessageResponsePayload,
    };

    // Errors
    pub use crate::errors::{ClaimError, PublishError, SetMessageError};

    // Adapters
    pub use crate::adapters::{BillboardEventHandler, InMemoryEventSink};

    // Service
    pub use crate::service::{
        create_test_service, BillboardService, ServiceConfig, ServiceStats,
    };
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
