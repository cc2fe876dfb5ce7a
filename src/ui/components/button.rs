use crate::ui::core::{Point, Rect};

/// A clickable rectangle with a label and hover state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    hovered: bool,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            hovered: false,
        }
    }

    /// Update hover state from the pointer position and return it
    pub fn check_hover(&mut self, pos: Point) -> bool {
        self.hovered = self.rect.contains(pos);
        self.hovered
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_clicked(&self, pos: Point) -> bool {
        self.rect.contains(pos)
    }
}
