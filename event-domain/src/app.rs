use std::sync::Arc;

use crate::{
    agenda::{AgendaServiceImpl, ArcAgendaService},
    auth::ArcAuthenticationService,
    event::ArcEventService,
};

#[derive(Clone)]
pub struct AppState {
    pub event_service: ArcEventService,
    pub agenda_service: ArcAgendaService,
    pub auth_service: ArcAuthenticationService,
}

pub fn construct_app(
    event_service: ArcEventService,
    auth_service: ArcAuthenticationService,
) -> AppState {
    let agenda_service: ArcAgendaService =
        Arc::new(Box::new(AgendaServiceImpl::new(event_service.clone())));

    AppState {
        event_service,
        agenda_service,
        auth_service,
    }
}
