mod filter;
mod pagination;
mod schedule;

pub use filter::{ALL_CATEGORY, EventFilter, categories};
pub use pagination::{DEFAULT_PAGE_SIZE, EventWindow};
pub use schedule::parse_schedule;

pub type EventId = String;
pub type TaskId = String;
pub type UserId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Upcoming,
    Live,
    Completed,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Live => "live",
            EventStatus::Completed => "completed",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Organizer {
    pub id: UserId,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgramItem {
    pub time: String,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TaskItem {
    pub id: TaskId,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub responsible_person: Option<String>,
    pub is_completed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub status: EventStatus,
    pub organizer: Organizer,
    pub program: Vec<ProgramItem>,
    pub tasks: Vec<TaskItem>,
}

impl Event {
    pub fn is_organized_by(&self, user_id: &UserId) -> bool {
        &self.organizer.id == user_id
    }

    pub fn is_live(&self) -> bool {
        self.status == EventStatus::Live
    }
}
