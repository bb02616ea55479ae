use event_core::{Event, EventStatus, Organizer, ProgramItem};

/// The events the store is seeded with at startup. Ids, organizers and
/// program agendas come from the product's demo fixtures; created events
/// always start as `Upcoming`, but seeds model pre-existing ones and keep
/// their preset status.
pub fn demo_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Tech Conference 2024".to_string(),
            date: "April 15, 2024".to_string(),
            time: "9:00 AM - 5:00 PM".to_string(),
            location: "Convention Center, New York".to_string(),
            description: "Join us for the biggest tech conference of the year featuring \
                          industry leaders and innovative workshops."
                .to_string(),
            category: "Tech".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&auto=format&fit=crop"
                    .to_string(),
            status: EventStatus::Upcoming,
            organizer: Organizer {
                id: "organizer-john".to_string(),
                name: "John Doe".to_string(),
                avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=John".to_string(),
            },
            program: vec![
                program_item("9:00 AM", "Registration & Breakfast", "Check-in and enjoy breakfast"),
                program_item("10:00 AM", "Keynote Speech", "Opening remarks and industry insights"),
                program_item("12:00 PM", "Lunch Break", "Networking lunch"),
                program_item("1:00 PM", "Workshop Sessions", "Choose from multiple tracks"),
                program_item("4:00 PM", "Closing Remarks", "Event wrap-up and next steps"),
            ],
            tasks: vec![],
        },
        Event {
            id: "2".to_string(),
            title: "Music Festival".to_string(),
            date: "May 1, 2024".to_string(),
            time: "2:00 PM - 11:00 PM".to_string(),
            location: "Central Park, New York".to_string(),
            description: "A day of amazing music featuring top artists and emerging talent."
                .to_string(),
            category: "Music".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?w=800&auto=format&fit=crop"
                    .to_string(),
            status: EventStatus::Live,
            organizer: Organizer {
                id: "organizer-jane".to_string(),
                name: "Jane Smith".to_string(),
                avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=Jane".to_string(),
            },
            program: vec![
                program_item("2:00 PM", "Gates Open", "Welcome and security check"),
                program_item("3:00 PM", "Opening Act", "Rising stars performance"),
                program_item("5:00 PM", "Main Stage", "Headliner performance"),
                program_item("8:00 PM", "Special Guest", "Surprise artist performance"),
                program_item("10:00 PM", "Closing Act", "Grand finale"),
            ],
            tasks: vec![],
        },
        Event {
            id: "3".to_string(),
            title: "Sports Tournament".to_string(),
            date: "March 10, 2024".to_string(),
            time: "8:00 AM - 6:00 PM".to_string(),
            location: "City Arena, New York".to_string(),
            description: "Regional finals across five disciplines.".to_string(),
            category: "Sports".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=800&auto=format&fit=crop"
                    .to_string(),
            status: EventStatus::Completed,
            organizer: Organizer {
                id: "organizer-mike".to_string(),
                name: "Mike Johnson".to_string(),
                avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=Mike".to_string(),
            },
            program: vec![],
            tasks: vec![],
        },
    ]
}

fn program_item(time: &str, title: &str, description: &str) -> ProgramItem {
    ProgramItem {
        time: time.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        is_completed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let events = demo_events();
        let mut ids: Vec<_> = events.iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn test_seed_covers_every_status_bucket() {
        let events = demo_events();
        assert!(events.iter().any(|e| e.status == EventStatus::Upcoming));
        assert!(events.iter().any(|e| e.status == EventStatus::Live));
        assert!(events.iter().any(|e| e.status == EventStatus::Completed));
    }

    #[test]
    fn test_seeded_agendas_start_incomplete() {
        for event in demo_events() {
            assert!(event.tasks.is_empty());
            assert!(event.program.iter().all(|item| !item.is_completed));
        }
    }
}
