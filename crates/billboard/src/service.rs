//! # Billboard Service
//!
//! Production-ready service that wraps the domain aggregate for concurrent
//! environments. The aggregate itself is single-writer by contract; this
//! layer supplies the required external serialization with one
//! `tokio::sync::Mutex` around the whole board.
//!
//! ## Responsibilities
//!
//! - Serialize every mutation (no two domain calls ever interleave)
//! - Translate envelope + payload into domain calls
//! - Publish notifications after accepted mutations
//! - Maintain service statistics
//!
//! Identity is envelope-only: the authenticated caller is an argument,
//! never part of a payload.

use crate::adapters::memory_sink::InMemoryEventSink;
use crate::domain::entities::Billboard;
use crate::domain::invariants::check_all_invariants;
use crate::domain::value_objects::{Address, Message};
use crate::errors::{ClaimError, SetMessageError};
use crate::events::{
    BoardEvent, ClaimRequestPayload, ClaimResponsePayload, MessageUpdatedPayload,
    OwnershipClaimedPayload, SetMessageRequestPayload, SetMessageResponsePayload,
};
use crate::ports::inbound::BillboardApi;
use crate::ports::outbound::EventSink;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Billboard service configuration.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Re-check domain invariants after every accepted mutation.
    pub check_invariants: bool,
}

/// Statistics for the billboard service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Accepted ownership claims.
    pub claims_accepted: u64,
    /// Rejected ownership claims.
    pub claims_rejected: u64,
    /// Accepted message updates.
    pub updates_accepted: u64,
    /// Rejected message updates.
    pub updates_rejected: u64,
    /// Notifications published.
    pub events_published: u64,
    /// Notifications the sink refused.
    pub publish_failures: u64,
}

/// The main billboard service.
///
/// This service:
/// 1. Receives claim and set-message requests
/// 2. Applies them to the board under a single mutex
/// 3. Publishes notifications for accepted mutations
/// 4. Maintains operation statistics
pub struct BillboardService<E: EventSink> {
    /// Service configuration.
    config: ServiceConfig,
    /// The board, serialized behind one lock.
    board: Mutex<Billboard>,
    /// Notification sink.
    sink: Arc<E>,
    /// Service statistics.
    stats: Arc<RwLock<ServiceStats>>,
}

impl<E: EventSink> BillboardService<E> {
    /// Create a new billboard service.
    ///
    /// The creator becomes the current owner and the first of at most five
    /// distinct owners; the update count starts at zero.
    pub fn new(
        initial_message: Message,
        creator: Address,
        sink: Arc<E>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            config,
            board: Mutex::new(Billboard::new(initial_message, creator)),
            sink,
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// Get current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// Handle a claim request.
    ///
    /// A rejected claim still yields a response payload; the readbacks in
    /// it reflect the unchanged board.
    #[instrument(skip(self, _payload), fields(correlation_id = %correlation_id))]
    pub async fn handle_claim(
        &self,
        caller: Address,
        correlation_id: Uuid,
        _payload: ClaimRequestPayload,
    ) -> ClaimResponsePayload {
        info!(caller = %caller, "Processing claim request");

        let (result, owner, owner_count) = self.claim_internal(caller).await;

        match result {
            Ok(()) => {
                debug!(owner = %owner, owner_count, "Claim accepted");
                ClaimResponsePayload {
                    success: true,
                    owner,
                    owner_count,
                    rejection: None,
                }
            }
            Err(err) => {
                warn!(caller = %caller, error = %err, "Claim rejected");
                ClaimResponsePayload {
                    success: false,
                    owner,
                    owner_count,
                    rejection: Some(err.to_string()),
                }
            }
        }
    }

    /// Handle a set-message request.
    #[instrument(skip(self, payload), fields(correlation_id = %correlation_id))]
    pub async fn handle_set_message(
        &self,
        caller: Address,
        correlation_id: Uuid,
        payload: SetMessageRequestPayload,
    ) -> SetMessageResponsePayload {
        info!(caller = %caller, "Processing set-message request");

        let (result, message, update_count) =
            self.set_message_internal(caller, payload.new_message).await;

        match result {
            Ok(()) => {
                debug!(update_count, "Message update accepted");
                SetMessageResponsePayload {
                    success: true,
                    message,
                    update_count,
                    rejection: None,
                }
            }
            Err(err) => {
                warn!(caller = %caller, error = %err, "Message update rejected");
                SetMessageResponsePayload {
                    success: false,
                    message,
                    update_count,
                    rejection: Some(err.to_string()),
                }
            }
        }
    }

    /// Internal claim path. Returns the result plus post-call readbacks.
    async fn claim_internal(
        &self,
        caller: Address,
    ) -> (Result<(), ClaimError>, Address, usize) {
        let mut board = self.board.lock().await;
        let previous_owner = board.owner();
        let previous_count = board.owners().len();

        let result = board.claim(caller);
        let owner = board.owner();
        let owner_count = board.owners().len();

        if result.is_ok() {
            self.verify_invariants(&board);
        }
        drop(board);

        match &result {
            Ok(()) => {
                self.stats.write().await.claims_accepted += 1;
                self.publish(BoardEvent::OwnershipClaimed(OwnershipClaimedPayload {
                    previous_owner,
                    new_owner: caller,
                    owner_count,
                    first_claim: owner_count > previous_count,
                }))
                .await;
            }
            Err(_) => self.stats.write().await.claims_rejected += 1,
        }

        (result, owner, owner_count)
    }

    /// Internal set-message path. Returns the result plus post-call
    /// readbacks.
    async fn set_message_internal(
        &self,
        caller: Address,
        new_message: Message,
    ) -> (Result<(), SetMessageError>, Message, u32) {
        let mut board = self.board.lock().await;

        let result = board.set_message(caller, new_message);
        let message = board.message();
        let update_count = board.update_count();

        if result.is_ok() {
            self.verify_invariants(&board);
        }
        drop(board);

        match &result {
            Ok(()) => {
                self.stats.write().await.updates_accepted += 1;
                self.publish(BoardEvent::MessageUpdated(MessageUpdatedPayload {
                    owner: caller,
                    message,
                    update_count,
                }))
                .await;
            }
            Err(_) => self.stats.write().await.updates_rejected += 1,
        }

        (result, message, update_count)
    }

    /// Publish a notification, best-effort.
    ///
    /// A sink failure never unwinds the mutation that produced the event.
    async fn publish(&self, event: BoardEvent) {
        match self.sink.publish(event).await {
            Ok(()) => self.stats.write().await.events_published += 1,
            Err(err) => {
                warn!(error = %err, "Failed to publish notification");
                self.stats.write().await.publish_failures += 1;
            }
        }
    }

    /// Re-check domain invariants if configured.
    fn verify_invariants(&self, board: &Billboard) {
        if !self.config.check_invariants {
            return;
        }
        let check = check_all_invariants(board);
        if let crate::domain::invariants::InvariantCheckResult::Invalid(violations) = check {
            for violation in &violations {
                error!(%violation, "Domain invariant violated");
            }
        }
    }
}

/// Create a service with an in-memory sink (for testing).
#[must_use]
pub fn create_test_service() -> BillboardService<InMemoryEventSink> {
    let mut initial = [0u8; 32];
    initial[..11].copy_from_slice(b"Hello World");

    BillboardService::new(
        Message::new(initial),
        Address::new([1u8; 20]),
        Arc::new(InMemoryEventSink::new()),
        ServiceConfig {
            check_invariants: true,
        },
    )
}

// =============================================================================
// BillboardApi Implementation
// =============================================================================

#[async_trait]
impl<E: EventSink> BillboardApi for BillboardService<E> {
    async fn claim(&self, caller: Address) -> Result<(), ClaimError> {
        self.claim_internal(caller).await.0
    }

    async fn set_message(
        &self,
        caller: Address,
        new_message: Message,
    ) -> Result<(), SetMessageError> {
        self.set_message_internal(caller, new_message).await.0
    }

    async fn message(&self) -> Message {
        self.board.lock().await.message()
    }

    async fn owner(&self) -> Address {
        self.board.lock().await.owner()
    }

    async fn update_count(&self) -> u32 {
        self.board.lock().await.update_count()
    }

    async fn owners(&self) -> Vec<Address> {
        self.board.lock().await.owners().as_slice().to_vec()
    }
}

// =============================================================================
// TESTS
// =============================================================================
