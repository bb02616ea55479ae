use crate::Event;

pub const ALL_CATEGORY: &str = "All";

/// Combined search and category filter over the event list. Both predicates
/// must hold; the relative order of the input is preserved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventFilter {
    pub search_term: String,
    pub category: String,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search(event) && self.matches_category(event)
    }

    fn matches_search(&self, event: &Event) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        event
            .title
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }

    fn matches_category(&self, event: &Event) -> bool {
        // An unselected category behaves like the "All" sentinel.
        if self.category.is_empty() || self.category == ALL_CATEGORY {
            return true;
        }
        event.category == self.category
    }

    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events
            .iter()
            .filter(|event| self.matches(event))
            .cloned()
            .collect()
    }
}

/// The category selector entries: "All" followed by the distinct event
/// categories in first-seen order.
pub fn categories(events: &[Event]) -> Vec<String> {
    let mut entries = vec![ALL_CATEGORY.to_string()];
    for event in events {
        if event.category.is_empty() {
            continue;
        }
        if !entries.contains(&event.category) {
            entries.push(event.category.clone());
        }
    }
    entries
}
