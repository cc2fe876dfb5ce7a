//! Toolkit-independent input events consumed by the controllers.

use super::geometry::Point;

/// Keys the controllers react to. Printable characters arrive as `Char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Enter,
    Escape,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerMove(Point),
    PointerDown(Point),
    Key(Key),
    /// Wheel notches; positive means the wheel was rolled up (away from the user)
    Wheel(i32),
    Quit,
}
