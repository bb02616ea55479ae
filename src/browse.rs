use event_core::{Event, EventFilter, EventWindow, categories};
use event_domain::{app::AppState, auth::AuthenticationService, event::EventService};

/// View-model behind the event list: search term, category selection and
/// the pagination window. Changing either filter input resets the window,
/// so a narrower result set never starts out over-expanded. All reads
/// recompute synchronously against the store.
pub struct BrowseSession {
    app: AppState,
    filter: EventFilter,
    window: EventWindow,
}

impl BrowseSession {
    pub fn new(app: AppState, page_size: usize) -> Self {
        Self {
            app,
            filter: EventFilter::new(),
            window: EventWindow::new(page_size),
        }
    }

    /// True while the identity provider is still resolving the session;
    /// the shell holds identity-dependent UI until this clears.
    pub fn is_loading(&self) -> bool {
        self.app.auth_service.is_loading()
    }

    pub fn search_term(&self) -> &str {
        &self.filter.search_term
    }

    pub fn category(&self) -> &str {
        &self.filter.category
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.filter.search_term = term.to_string();
        self.window.reset();
    }

    pub fn set_category(&mut self, category: &str) {
        self.filter.category = category.to_string();
        self.window.reset();
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.app.event_service.get_events())
    }

    pub fn filtered_events(&self) -> Vec<Event> {
        self.filter.apply(&self.app.event_service.get_events())
    }

    pub fn visible_events(&self) -> Vec<Event> {
        let filtered = self.filtered_events();
        self.window.visible(&filtered).to_vec()
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more(&self.filtered_events())
    }

    pub fn load_more(&mut self) {
        self.window.load_more();
    }
}
