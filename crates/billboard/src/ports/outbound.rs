//! # Driven Ports (SPI - Outbound)
//!
//! The interfaces the billboard subsystem depends on. Adapters implement
//! these to connect the service to whatever transport the deployment uses.

use crate::errors::PublishError;
use crate::events::BoardEvent;
use async_trait::async_trait;

// =============================================================================
// EVENT SINK
// =============================================================================

/// Interface for publishing billboard notifications.
///
/// The service publishes [`BoardEvent`]s after accepted mutations. A sink
/// failure never unwinds the mutation that produced the event; the service
/// logs it and moves on.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Publish a notification.
    ///
    /// # Arguments
    ///
    /// * `event` - The notification to publish; its topic is
    ///   `event.topic()`
    ///
    /// # Errors
    ///
    /// * `PublishError` - the sink could not accept the event
    async fn publish(&self, event: BoardEvent) -> Result<(), PublishError>;
}
