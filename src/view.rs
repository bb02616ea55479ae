use event_core::{Event, ProgramItem, TaskItem};
use event_domain::auth::SessionUser;
use serde::Serialize;

/// Read-only snapshots served to the rendering layer. The organizer flag is
/// derived against the session identity at snapshot time, never stored.
#[derive(Clone, Debug, Serialize)]
pub struct JsonOrganizer {
    pub name: String,
    pub avatar: String,
    pub is_current_user: bool,
}

impl JsonOrganizer {
    fn from_event(event: &Event, current_user: Option<&SessionUser>) -> Self {
        JsonOrganizer {
            name: event.organizer.name.clone(),
            avatar: event.organizer.avatar_url.clone(),
            is_current_user: current_user
                .is_some_and(|user| event.is_organized_by(&user.id)),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct JsonEventSummary {
    pub id: String,
    pub title: String,
    pub date: String,
    pub status: &'static str,
    pub category: String,
    pub image_url: String,
    pub organizer: JsonOrganizer,
}

impl JsonEventSummary {
    pub fn from_event(event: &Event, current_user: Option<&SessionUser>) -> Self {
        JsonEventSummary {
            id: event.id.clone(),
            title: event.title.clone(),
            date: event.date.clone(),
            status: event.status.label(),
            category: event.category.clone(),
            image_url: event.image_url.clone(),
            organizer: JsonOrganizer::from_event(event, current_user),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct JsonProgramItem {
    pub time: String,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl From<&ProgramItem> for JsonProgramItem {
    fn from(item: &ProgramItem) -> Self {
        JsonProgramItem {
            time: item.time.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            is_completed: item.is_completed,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct JsonTask {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub responsible_person: Option<String>,
    pub is_completed: bool,
}

impl From<&TaskItem> for JsonTask {
    fn from(task: &TaskItem) -> Self {
        JsonTask {
            id: task.id.clone(),
            start_time: task.start_time.clone(),
            end_time: task.end_time.clone(),
            description: task.description.clone(),
            responsible_person: task.responsible_person.clone(),
            is_completed: task.is_completed,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct JsonEventDetail {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub status: &'static str,
    pub organizer: JsonOrganizer,
    pub program: Vec<JsonProgramItem>,
    pub tasks: Vec<JsonTask>,
    /// True only for the organizer of a live event; viewers and non-live
    /// events never see mutation affordances.
    pub can_manage: bool,
}

impl JsonEventDetail {
    pub fn from_event(event: &Event, current_user: Option<&SessionUser>) -> Self {
        let organizer = JsonOrganizer::from_event(event, current_user);
        JsonEventDetail {
            id: event.id.clone(),
            title: event.title.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            description: event.description.clone(),
            category: event.category.clone(),
            image_url: event.image_url.clone(),
            status: event.status.label(),
            can_manage: organizer.is_current_user && event.is_live(),
            organizer,
            program: event.program.iter().map(JsonProgramItem::from).collect(),
            tasks: event.tasks.iter().map(JsonTask::from).collect(),
        }
    }
}
