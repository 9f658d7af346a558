/// Vertical scroll position for a viewport over a fixed number of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height / 2);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height / 2);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_bounds_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(30, 10);
        scroll.jump_to_bottom();
        assert_eq!(scroll.offset, 20);

        scroll.update_bounds(15, 10);
        assert_eq!(scroll.max_offset, 5);
        assert_eq!(scroll.offset, 5);
    }

    #[test]
    fn test_content_shorter_than_viewport() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(3, 10);
        scroll.scroll_down(5);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_scroll_down_and_up() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(30, 10);
        scroll.scroll_down(3);
        assert_eq!(scroll.offset, 3);
        scroll.scroll_up(5);
        assert_eq!(scroll.offset, 0);
        scroll.scroll_down(100);
        assert_eq!(scroll.offset, 20);
    }

    #[test]
    fn test_page_moves_half_viewport() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(30, 10);
        scroll.page_down();
        assert_eq!(scroll.offset, 5);
        scroll.page_up();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_huge_content_clamped_to_u16() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(u32::MAX, 10);
        assert_eq!(scroll.max_offset, u16::MAX);
    }
}
