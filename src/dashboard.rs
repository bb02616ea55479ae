use event_core::{Event, EventStatus, UserId};

/// The organizer dashboard's status tabs: the organizer's own events,
/// bucketed by status, each bucket in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardBuckets {
    pub upcoming: Vec<Event>,
    pub live: Vec<Event>,
    pub completed: Vec<Event>,
}

pub fn organizer_events(events: &[Event], organizer_id: &UserId) -> DashboardBuckets {
    let mut buckets = DashboardBuckets::default();
    for event in events {
        if !event.is_organized_by(organizer_id) {
            continue;
        }
        match event.status {
            EventStatus::Upcoming => buckets.upcoming.push(event.clone()),
            EventStatus::Live => buckets.live.push(event.clone()),
            EventStatus::Completed => buckets.completed.push(event.clone()),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use crate::seed::demo_events;

    use super::*;

    #[test]
    fn test_buckets_only_contain_the_organizers_events() {
        let events = demo_events();
        let buckets = organizer_events(&events, &"organizer-jane".to_string());
        assert!(buckets.upcoming.is_empty());
        assert_eq!(buckets.live.len(), 1);
        assert_eq!(buckets.live[0].id, "2");
        assert!(buckets.completed.is_empty());
    }

    #[test]
    fn test_unknown_organizer_gets_empty_buckets() {
        let events = demo_events();
        let buckets = organizer_events(&events, &"organizer-unknown".to_string());
        assert_eq!(buckets, DashboardBuckets::default());
    }
}
