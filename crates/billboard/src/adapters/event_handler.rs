//! # Event Handler Adapter
//!
//! Translates inbound request payloads into API calls and domain results
//! into response payloads.
//!
//! ## Envelope-Only Identity
//!
//! The authenticated caller arrives beside the payload, never inside it.
//! A rejected call still produces a response payload; domain rejections
//! are not transport errors.

use crate::domain::value_objects::Address;
use crate::events::{
    ClaimRequestPayload, ClaimResponsePayload, SetMessageRequestPayload,
    SetMessageResponsePayload,
};
use crate::ports::inbound::BillboardApi;
use std::sync::Arc;

/// Event handler for billboard requests.
pub struct BillboardEventHandler<T: BillboardApi> {
    /// The billboard API implementation.
    api: Arc<T>,
}

impl<T: BillboardApi> BillboardEventHandler<T> {
    /// Create a new event handler.
    pub fn new(api: Arc<T>) -> Self {
        Self { api }
    }

    /// Handle a `ClaimRequest`.
    ///
    /// The response always reflects post-call state: on rejection the
    /// owner readback equals the pre-call owner.
    pub async fn handle_claim(
        &self,
        caller: Address,
        _payload: ClaimRequestPayload,
    ) -> ClaimResponsePayload {
        let rejection = self.api.claim(caller).await.err();

        ClaimResponsePayload {
            success: rejection.is_none(),
            owner: self.api.owner().await,
            owner_count: self.api.owners().await.len(),
            rejection: rejection.map(|err| err.to_string()),
        }
    }

    /// Handle a `SetMessageRequest`.
    pub async fn handle_set_message(
        &self,
        caller: Address,
        payload: SetMessageRequestPayload,
    ) -> SetMessageResponsePayload {
        let rejection = self
            .api
            .set_message(caller, payload.new_message)
            .await
            .err();

        SetMessageResponsePayload {
            success: rejection.is_none(),
            message: self.api.message().await,
            update_count: self.api.update_count().await,
            rejection: rejection.map(|err| err.to_string()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
