//! # Messaging Integration Tests
//!
//! Exercises the envelope-facing surface: request payloads arriving beside
//! an authenticated caller, response payloads carrying rejections, and the
//! notifications published for accepted mutations.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use billboard::prelude::*;
    use uuid::Uuid;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn account(tag: u8) -> Address {
        Address::new([tag; 20])
    }

    fn text(value: &str) -> Message {
        Message::from_text(value).expect("fixture text fits a message slot")
    }

    fn deploy_with_sink() -> (BillboardService<InMemoryEventSink>, Arc<InMemoryEventSink>) {
        let sink = Arc::new(InMemoryEventSink::new());
        let service = BillboardService::new(
            text("Hello World"),
            account(1),
            sink.clone(),
            ServiceConfig {
                check_invariants: true,
            },
        );
        (service, sink)
    }

    // =========================================================================
    // ENVELOPE HANDLING
    // =========================================================================

    /// A claim request round-trips through serialization like it would on
    /// the wire, and the response reflects the accepted claim.
    #[tokio::test]
    async fn test_claim_request_over_the_wire() {
        let (service, _sink) = deploy_with_sink();

        let raw = serde_json::to_string(&ClaimRequestPayload::default()).unwrap();
        let payload: ClaimRequestPayload = serde_json::from_str(&raw).unwrap();

        let response = service
            .handle_claim(account(2), Uuid::new_v4(), payload)
            .await;

        assert!(response.success);
        assert_eq!(response.owner, account(2));
        assert_eq!(response.owner_count, 2);
        assert!(response.rejection.is_none());
    }

    /// A set-message request round-trips and applies.
    #[tokio::test]
    async fn test_set_message_request_over_the_wire() {
        let (service, _sink) = deploy_with_sink();

        let request = SetMessageRequestPayload {
            new_message: text("Hello World Again"),
        };
        let raw = serde_json::to_string(&request).unwrap();
        let payload: SetMessageRequestPayload = serde_json::from_str(&raw).unwrap();

        let response = service
            .handle_set_message(account(1), Uuid::new_v4(), payload)
            .await;

        assert!(response.success);
        assert_eq!(response.message.to_text(), "Hello World Again");
        assert_eq!(response.update_count, 1);
    }

    /// Rejections surface in the response payload, not as transport
    /// failures, and readbacks show the unchanged board.
    #[tokio::test]
    async fn test_rejection_is_a_response_not_an_error() {
        let (service, _sink) = deploy_with_sink();

        let response = service
            .handle_set_message(
                account(9),
                Uuid::new_v4(),
                SetMessageRequestPayload {
                    new_message: text("hijacked"),
                },
            )
            .await;

        assert!(!response.success);
        assert_eq!(response.message.to_text(), "Hello World");
        assert_eq!(response.update_count, 0);
        assert!(response.rejection.unwrap().contains("not the owner"));
    }

    /// The sixth distinct claimant gets the owner-cap rejection text.
    #[tokio::test]
    async fn test_sixth_claimant_rejection_text() {
        let (service, _sink) = deploy_with_sink();
        for tag in 2u8..=5 {
            service
                .handle_claim(account(tag), Uuid::new_v4(), ClaimRequestPayload::default())
                .await;
        }

        let response = service
            .handle_claim(account(6), Uuid::new_v4(), ClaimRequestPayload::default())
            .await;

        assert!(!response.success);
        assert!(response.rejection.unwrap().starts_with("max owners reached"));
    }

    // =========================================================================
    // EVENT HANDLER ADAPTER
    // =========================================================================

    /// The adapter produces the same responses as the service handlers.
    #[tokio::test]
    async fn test_event_handler_adapter_flow() {
        let (service, _sink) = deploy_with_sink();
        let handler = BillboardEventHandler::new(Arc::new(service));

        let claim = handler
            .handle_claim(account(2), ClaimRequestPayload::default())
            .await;
        assert!(claim.success);

        let update = handler
            .handle_set_message(
                account(2),
                SetMessageRequestPayload {
                    new_message: text("Or maybe not"),
                },
            )
            .await;
        assert!(update.success);
        assert_eq!(update.message.to_text(), "Or maybe not");
        assert_eq!(update.update_count, 1);
    }

    // =========================================================================
    // NOTIFICATIONS
    // =========================================================================

    /// Accepted mutations publish exactly one notification each, carrying
    /// post-state values; rejected calls publish nothing.
    #[tokio::test]
    async fn test_notifications_for_accepted_mutations_only() {
        let (service, sink) = deploy_with_sink();

        service.claim(account(2)).await.unwrap();
        service
            .set_message(account(2), text("Scratch that"))
            .await
            .unwrap();
        let _ = service.claim(account(6)).await; // accepted: set not full yet
        let _ = service.set_message(account(9), text("nope")).await; // rejected

        let events = sink.events();
        assert_eq!(events.len(), 3);

        assert_eq!(
            events[0],
            BoardEvent::OwnershipClaimed(OwnershipClaimedPayload {
                previous_owner: account(1),
                new_owner: account(2),
                owner_count: 2,
                first_claim: true,
            })
        );
        assert_eq!(
            events[1],
            BoardEvent::MessageUpdated(MessageUpdatedPayload {
                owner: account(2),
                message: text("Scratch that"),
                update_count: 1,
            })
        );
        assert_eq!(events[0].topic(), topics::OWNERSHIP_CLAIMED);
        assert_eq!(events[1].topic(), topics::MESSAGE_UPDATED);
    }

    /// A full lifecycle publishes a claim-and-update trail that replays
    /// the board history.
    #[tokio::test]
    async fn test_notification_trail_replays_history() {
        let (service, sink) = deploy_with_sink();

        service.claim(account(2)).await.unwrap();
        service
            .set_message(account(2), text("This is getting ridiculous"))
            .await
            .unwrap();
        service.claim(account(1)).await.unwrap();
        service
            .set_message(account(1), text("Goodbye"))
            .await
            .unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 4);

        // Claims alternate with updates; the re-claim is not a first claim.
        match &events[2] {
            BoardEvent::OwnershipClaimed(payload) => {
                assert_eq!(payload.new_owner, account(1));
                assert!(!payload.first_claim);
                assert_eq!(payload.owner_count, 2);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        match &events[3] {
            BoardEvent::MessageUpdated(payload) => {
                assert_eq!(payload.message.to_text(), "Goodbye");
                assert_eq!(payload.update_count, 2);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
