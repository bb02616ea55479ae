pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Windowed view over a filtered list. The window only ever grows by whole
/// pages; callers reset it whenever the upstream filter inputs change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventWindow {
    page_size: usize,
    window_size: usize,
}

impl EventWindow {
    pub fn new(page_size: usize) -> Self {
        EventWindow {
            page_size,
            window_size: page_size,
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn visible<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..self.window_size.min(filtered.len())]
    }

    pub fn load_more(&mut self) {
        self.window_size += self.page_size;
    }

    pub fn has_more<T>(&self, filtered: &[T]) -> bool {
        self.window_size < filtered.len()
    }

    pub fn reset(&mut self) {
        self.window_size = self.page_size;
    }
}

impl Default for EventWindow {
    fn default() -> Self {
        EventWindow::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_never_exceeds_filtered_length() {
        let window = EventWindow::new(4);
        let filtered = vec![1, 2];
        assert_eq!(window.visible(&filtered), &[1, 2]);
        assert!(!window.has_more(&filtered));
    }

    #[test]
    fn test_load_more_grows_by_page_size() {
        let mut window = EventWindow::new(4);
        let filtered: Vec<u32> = (0..6).collect();

        assert_eq!(window.visible(&filtered).len(), 4);
        assert!(window.has_more(&filtered));

        window.load_more();
        assert_eq!(window.window_size(), 8);
        assert_eq!(window.visible(&filtered).len(), 6);
        assert!(!window.has_more(&filtered));
    }

    #[test]
    fn test_has_more_matches_window_size_comparison() {
        let mut window = EventWindow::new(4);
        let filtered: Vec<u32> = (0..12).collect();
        while window.has_more(&filtered) {
            assert!(window.window_size() < filtered.len());
            window.load_more();
        }
        assert!(window.window_size() >= filtered.len());
        assert_eq!(window.visible(&filtered).len(), filtered.len());
    }

    #[test]
    fn test_reset_shrinks_back_to_one_page() {
        let mut window = EventWindow::new(4);
        window.load_more();
        window.load_more();
        assert_eq!(window.window_size(), 12);
        window.reset();
        assert_eq!(window.window_size(), 4);
    }

    #[test]
    fn test_visible_on_empty_list() {
        let window = EventWindow::default();
        let filtered: Vec<u32> = vec![];
        assert!(window.visible(&filtered).is_empty());
        assert!(!window.has_more(&filtered));
    }
}
