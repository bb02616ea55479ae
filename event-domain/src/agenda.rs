use std::sync::Arc;

use event_core::{Event, EventId, TaskId, TaskItem};
use log::info;
use uuid::Uuid;

use crate::{
    ServiceError, ServiceResult,
    auth::SessionUser,
    event::{ArcEventService, EventService},
    validation::{TaskDraft, check_required},
};

pub type ArcAgendaService = Arc<Box<dyn AgendaService + Send + Sync + 'static>>;

/// Completion state machine for program items and tasks. Every mutation is
/// gated on the acting user being the event's organizer while the event is
/// live; viewers only ever observe the completion indicators.
pub trait AgendaService {
    /// Flips the completion flag of the program item at `index`. A missing
    /// index is treated as nothing to do.
    fn toggle_program_item(
        &self,
        actor: &SessionUser,
        event_id: &EventId,
        index: usize,
    ) -> ServiceResult<Event>;
    /// Flips the completion flag of the task with `task_id`. An unknown id
    /// is treated as nothing to do.
    fn toggle_task(
        &self,
        actor: &SessionUser,
        event_id: &EventId,
        task_id: &TaskId,
    ) -> ServiceResult<Event>;
    /// Validates the draft and appends a new incomplete task, keeping the
    /// prior task order. Nothing changes when validation fails.
    fn add_task(
        &self,
        actor: &SessionUser,
        event_id: &EventId,
        draft: TaskDraft,
    ) -> ServiceResult<Event>;
}

pub struct AgendaServiceImpl {
    event_service: ArcEventService,
}

impl AgendaServiceImpl {
    pub fn new(event_service: ArcEventService) -> Self {
        Self { event_service }
    }

    fn fetch_manageable(&self, actor: &SessionUser, event_id: &EventId) -> ServiceResult<Event> {
        let event = self.event_service.get_event(event_id)?;
        if !event.is_organized_by(&actor.id) {
            return ServiceError::forbidden("You are not the organizer of this event");
        }
        if !event.is_live() {
            return ServiceError::forbidden("This event is not live");
        }
        Ok(event)
    }
}

impl AgendaService for AgendaServiceImpl {
    fn toggle_program_item(
        &self,
        actor: &SessionUser,
        event_id: &EventId,
        index: usize,
    ) -> ServiceResult<Event> {
        let mut event = self.fetch_manageable(actor, event_id)?;
        if index >= event.program.len() {
            return Ok(event);
        }
        let item = &mut event.program[index];
        item.is_completed = !item.is_completed;
        info!(
            "Program item {} of event {} toggled to completed={}",
            index, event.id, item.is_completed
        );
        self.event_service.publish_event(event)
    }

    fn toggle_task(
        &self,
        actor: &SessionUser,
        event_id: &EventId,
        task_id: &TaskId,
    ) -> ServiceResult<Event> {
        let mut event = self.fetch_manageable(actor, event_id)?;
        let Some(position) = event.tasks.iter().position(|task| &task.id == task_id) else {
            return Ok(event);
        };
        let task = &mut event.tasks[position];
        task.is_completed = !task.is_completed;
        info!(
            "Task {} of event {} toggled to completed={}",
            task_id, event.id, task.is_completed
        );
        self.event_service.publish_event(event)
    }

    fn add_task(
        &self,
        actor: &SessionUser,
        event_id: &EventId,
        draft: TaskDraft,
    ) -> ServiceResult<Event> {
        let mut event = self.fetch_manageable(actor, event_id)?;
        check_required(&draft)?;

        let responsible_person = draft.responsible_person.trim();
        let task = TaskItem {
            id: Uuid::new_v4().to_string(),
            start_time: draft.start_time,
            end_time: draft.end_time,
            description: draft.description,
            responsible_person: if responsible_person.is_empty() {
                None
            } else {
                Some(responsible_person.to_string())
            },
            is_completed: false,
        };
        info!("Task {} added to event {}", task.id, event.id);
        event.tasks.push(task);
        self.event_service.publish_event(event)
    }
}
