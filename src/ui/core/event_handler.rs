use crossterm::event::{
    poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tokio::time::Duration;

use super::geometry::{Point, Rect};
use super::input::{InputEvent, Key};
use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Maps terminal cells onto the logical canvas and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Logical point at the center of a terminal cell
    pub fn to_logical(&self, column: u16, row: u16) -> Point {
        let cols = i32::from(self.cols);
        let rows = i32::from(self.rows);
        Point::new(
            (2 * i32::from(column) + 1) * SCREEN_WIDTH / (2 * cols),
            (2 * i32::from(row) + 1) * SCREEN_HEIGHT / (2 * rows),
        )
    }

    /// Terminal cells covering a logical rectangle, clipped to the screen
    pub fn to_cells(&self, rect: Rect) -> ratatui::layout::Rect {
        let cols = i32::from(self.cols);
        let rows = i32::from(self.rows);
        let scale_x = |x: i32| ((x * cols + SCREEN_WIDTH / 2) / SCREEN_WIDTH).clamp(0, cols);
        let scale_y = |y: i32| ((y * rows + SCREEN_HEIGHT / 2) / SCREEN_HEIGHT).clamp(0, rows);

        let x0 = scale_x(rect.x);
        let y0 = scale_y(rect.y);
        let x1 = scale_x(rect.right()).max(x0 + 1).min(cols);
        let y1 = scale_y(rect.bottom()).max(y0 + 1).min(rows);

        ratatui::layout::Rect::new(
            x0 as u16,
            y0 as u16,
            (x1 - x0).max(0) as u16,
            (y1 - y0).max(0) as u16,
        )
    }

    /// Logical width of one terminal column, used as the glyph advance
    pub fn glyph_width(&self) -> i32 {
        let cols = i32::from(self.cols);
        (SCREEN_WIDTH + cols - 1) / cols
    }
}

/// Translate a crossterm event into a core input event.
pub fn translate_event(event: Event, viewport: &Viewport) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, viewport),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let key = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Some(InputEvent::Quit),
        // Chorded letters are shortcuts, not text
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => return None,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(InputEvent::Key(key))
}

fn translate_mouse(mouse: MouseEvent, viewport: &Viewport) -> Option<InputEvent> {
    let point = viewport.to_logical(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown(point)),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMove(point)),
        MouseEventKind::ScrollUp => Some(InputEvent::Wheel(1)),
        MouseEventKind::ScrollDown => Some(InputEvent::Wheel(-1)),
        _ => None,
    }
}

/// Collects terminal input once per frame.
pub struct EventHandler {
    viewport: Viewport,
}

impl EventHandler {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Drain every event that is already queued without waiting.
    pub fn drain(&mut self) -> anyhow::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while poll(Duration::from_millis(0))? {
            let event = crossterm::event::read()?;
            if let Event::Resize(cols, rows) = event {
                self.viewport = Viewport::new(cols, rows);
                continue;
            }
            if let Some(input) = translate_event(event, &self.viewport) {
                events.push(input);
            }
        }
        Ok(events)
    }
}
