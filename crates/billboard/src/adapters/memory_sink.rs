//! # In-Memory Event Sink
//!
//! Records published notifications for inspection in tests. Production
//! deployments would publish to the environment's event bus instead.

use crate::errors::PublishError;
use crate::events::BoardEvent;
use crate::ports::outbound::EventSink;
use async_trait::async_trait;
use std::sync::RwLock;

/// In-memory event sink for testing.
#[derive(Debug, Default)]
pub struct InMemoryEventSink {
    /// Published events, in publication order.
    events: RwLock<Vec<BoardEvent>>,
}

impl InMemoryEventSink {
    /// Create a new empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of published events.
    #[must_use]
    pub fn events(&self) -> Vec<BoardEvent> {
        self.events.read().unwrap().clone()
    }

    /// Returns the number of published events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().unwrap().len()
    }

    /// Returns true if nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().unwrap().is_empty()
    }

    /// Clears the recorded events.
    pub fn clear(&self) {
        self.events.write().unwrap().clear();
    }
}

#[async_trait]
impl EventSink for InMemoryEventSink {
    async fn publish(&self, event: BoardEvent) -> Result<(), PublishError> {
        self.events.write().unwrap().push(event);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
