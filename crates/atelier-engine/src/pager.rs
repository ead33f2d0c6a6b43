/// Pagination over a block of rendered text content.
///
/// Pages are fixed-height slices of scroll position, not semantic
/// boundaries: a bullet point may be split across two pages. Heights are
/// injected so the algorithm is testable without a rendering surface; the
/// kiosk feeds wrapped-line counts and panel heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPager {
    current_page: usize,
    page_count: usize,
}

impl Default for TextPager {
    fn default() -> Self {
        Self {
            current_page: 0,
            page_count: 1,
        }
    }
}

/// `ceil(content_height / viewport_height)`, minimum 1.
pub fn page_count(content_height: usize, viewport_height: usize) -> usize {
    if viewport_height == 0 {
        return 1;
    }
    content_height.div_ceil(viewport_height).max(1)
}

impl TextPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Recompute from live measurements. Runs on every content or viewport
    /// change; `current_page` is clamped whenever the count shrinks.
    pub fn recompute(&mut self, content_height: usize, viewport_height: usize) {
        self.page_count = page_count(content_height, viewport_height);
        self.current_page = self.current_page.min(self.page_count - 1);
    }

    /// Back to the first page (item identity changed).
    pub fn reset(&mut self) {
        self.current_page = 0;
    }

    /// Whether prev/next do anything at all.
    pub fn nav_enabled(&self) -> bool {
        self.page_count > 1
    }

    /// Clamped, non-wrapping (unlike the carousels).
    pub fn next(&mut self) {
        if self.nav_enabled() {
            self.current_page = (self.current_page + 1).min(self.page_count - 1);
        }
    }

    pub fn prev(&mut self) {
        if self.nav_enabled() {
            self.current_page = self.current_page.saturating_sub(1);
        }
    }

    /// Content offset placed at the top of the viewport for the current
    /// page.
    pub fn scroll_offset(&self, viewport_height: usize) -> usize {
        self.current_page * viewport_height
    }
}
