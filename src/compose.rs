use std::sync::Arc;

use event_domain::{
    app::{AppState, construct_app},
    auth::ArcAuthenticationService,
    event::{ArcEventService, EventServiceImpl},
};
use log::info;

use crate::seed;

/// Builds the application state for one session: a freshly seeded event
/// store plus the agenda service, wired to the identity provider supplied
/// by the embedding shell.
pub fn build_application(auth_service: ArcAuthenticationService) -> AppState {
    let event_service_impl = EventServiceImpl::new();
    let events = seed::demo_events();
    info!("Seeding event store with {} events", events.len());
    event_service_impl.seed(events);

    let event_service: ArcEventService = Arc::new(Box::new(event_service_impl));
    construct_app(event_service, auth_service)
}

#[cfg(test)]
mod tests {
    use event_domain::{auth::MockAuthenticationService, event::EventService};

    use super::*;

    #[test]
    fn test_build_application_seeds_the_store() {
        let app = build_application(Arc::new(Box::new(MockAuthenticationService::default())));
        let events = app.event_service.get_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].title, "Tech Conference 2024");
    }

    #[tokio::test]
    async fn test_signed_in_user_can_create_and_find_their_event() {
        use event_domain::{auth::AuthenticationService, validation::EventDraft};

        use crate::dashboard::organizer_events;

        let auth = MockAuthenticationService::default();
        let app = build_application(Arc::new(Box::new(auth.clone())));

        let session = auth
            .sign_in("lena@example.com", "secret")
            .await
            .expect("Failed to sign in");
        app.event_service
            .create_event(
                &session.user,
                EventDraft {
                    title: "Rust Meetup".to_string(),
                    date: "2999-06-01".to_string(),
                    time: "18:00".to_string(),
                    location: "Community Hall".to_string(),
                    category: "Tech".to_string(),
                    ..EventDraft::default()
                },
            )
            .expect("Failed to create event");

        let buckets = organizer_events(&app.event_service.get_events(), &session.user.id);
        assert_eq!(buckets.upcoming.len(), 1);
        assert_eq!(buckets.upcoming[0].title, "Rust Meetup");
        assert!(buckets.live.is_empty());
    }
}
