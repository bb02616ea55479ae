use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use event_core::{Event, EventId, EventStatus, Organizer, ProgramItem};
use log::info;
use uuid::Uuid;

use crate::{
    ServiceError, ServiceResult,
    auth::SessionUser,
    validation::{EventDraft, check_required, check_schedule},
};

pub type ArcEventService = Arc<Box<dyn EventService + Send + Sync + 'static>>;

pub trait EventService {
    fn create_event(&self, actor: &SessionUser, draft: EventDraft) -> ServiceResult<Event>;
    fn get_event(&self, id: &EventId) -> ServiceResult<Event>;
    /// All events in insertion order, never sorted by status or date.
    fn get_events(&self) -> Vec<Event>;
    /// Replaces the stored event with the given snapshot as one observable
    /// step. The only mutation path besides `create_event`.
    fn publish_event(&self, event: Event) -> ServiceResult<Event>;
}

pub struct EventServiceImpl {
    events: Arc<DashMap<EventId, Event>>,
    insertion_order: Arc<Mutex<Vec<EventId>>>,
}

impl EventServiceImpl {
    pub fn new() -> Self {
        Self {
            events: Arc::new(DashMap::new()),
            insertion_order: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Loads pre-existing events into the store at startup. Seeded events
    /// keep their given ids and statuses.
    pub fn seed(&self, events: Vec<Event>) {
        for event in events {
            self.insert(event);
        }
    }

    fn insert(&self, event: Event) {
        let mut order = self
            .insertion_order
            .lock()
            .expect("Failed to lock insertion order mutex");
        if !self.events.contains_key(&event.id) {
            order.push(event.id.clone());
        }
        self.events.insert(event.id.clone(), event);
    }
}

impl Default for EventServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl EventService for EventServiceImpl {
    fn create_event(&self, actor: &SessionUser, draft: EventDraft) -> ServiceResult<Event> {
        check_required(&draft)?;
        check_schedule(&draft.date, &draft.time)?;

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            description: draft.description,
            category: draft.category,
            image_url: draft.image_url,
            status: EventStatus::Upcoming,
            organizer: Organizer {
                id: actor.id.clone(),
                name: actor.display_name.clone(),
                avatar_url: actor.avatar_url.clone(),
            },
            program: draft
                .program
                .into_iter()
                .map(|item| ProgramItem {
                    time: item.time,
                    title: item.title,
                    description: item.description,
                    is_completed: false,
                })
                .collect(),
            tasks: Vec::new(),
        };

        self.insert(event.clone());
        info!("New event {} created: {}", event.id, event.title);
        Ok(event)
    }

    fn get_event(&self, id: &EventId) -> ServiceResult<Event> {
        let Some(event_ref) = self.events.get(id) else {
            return ServiceError::not_found("Event ID not found");
        };
        Ok(event_ref.value().clone())
    }

    fn get_events(&self) -> Vec<Event> {
        let order = self
            .insertion_order
            .lock()
            .expect("Failed to lock insertion order mutex");
        order
            .iter()
            .filter_map(|id| self.events.get(id).map(|entry| entry.value().clone()))
            .collect()
    }

    fn publish_event(&self, event: Event) -> ServiceResult<Event> {
        if !self.events.contains_key(&event.id) {
            return ServiceError::not_found("Event ID not found");
        }
        self.events.insert(event.id.clone(), event.clone());
        Ok(event)
    }
}
