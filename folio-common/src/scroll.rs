/// Vertical geometry of a page section, relative to the document top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Whether `scroll_y` falls in `[top - offset, top - offset + height]`.
    pub fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let start = self.top - offset;
        scroll_y >= start && scroll_y <= start + self.height
    }
}

pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y >= threshold
}
