//! Single-line text input with an inline cursor.
//!
//! The cursor is a character index into the text, so multi-byte characters
//! are handled the same way as ASCII. Horizontal scrolling is tracked in
//! logical units and recomputed from the measured cursor position every time
//! the box is drawn.

use crate::constants::{DEFAULT_CURSOR_BLINK_TICKS, INPUT_CURSOR_MARGIN, INPUT_PADDING};
use crate::ui::core::{InputEvent, Key, Rect, TextMeasure};

#[derive(Debug, Clone)]
pub struct TextInput {
    rect: Rect,
    text: String,
    placeholder: String,
    cursor_position: usize,
    active: bool,
    scroll_offset: i32,
    max_length: usize,
    cursor_visible: bool,
    cursor_timer: u32,
    blink_ticks: u32,
}

impl TextInput {
    pub fn new(rect: Rect, placeholder: impl Into<String>, max_length: usize) -> Self {
        Self {
            rect,
            text: String::new(),
            placeholder: placeholder.into(),
            cursor_position: 0,
            active: false,
            scroll_offset: 0,
            max_length,
            cursor_visible: true,
            cursor_timer: 0,
            blink_ticks: DEFAULT_CURSOR_BLINK_TICKS,
        }
    }

    /// Set how many ticks the cursor stays in one visibility state
    pub fn with_blink_ticks(mut self, blink_ticks: u32) -> Self {
        self.blink_ticks = blink_ticks.max(1);
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.text.len())
    }

    /// Give the box focus. A pointer click also moves the cursor to the end.
    pub fn activate(&mut self, at_click: bool) {
        self.active = true;
        if at_click {
            self.cursor_position = self.char_count();
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Replace the content and put the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(self.max_length).collect();
        self.cursor_position = self.char_count();
        self.scroll_offset = 0;
    }

    /// Insert `c` at the cursor. Returns false when the box is inactive,
    /// full, or `c` is not printable.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.active || !is_printable(c) || self.char_count() >= self.max_length {
            return false;
        }
        let byte_pos = self.byte_index(self.cursor_position);
        self.text.insert(byte_pos, c);
        self.cursor_position += 1;
        true
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            let byte_pos = self.byte_index(self.cursor_position - 1);
            self.text.remove(byte_pos);
            self.cursor_position -= 1;
        }
    }

    /// Remove the character under the cursor
    pub fn delete_forward(&mut self) {
        if self.cursor_position < self.char_count() {
            let byte_pos = self.byte_index(self.cursor_position);
            self.text.remove(byte_pos);
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let target = self.cursor_position.saturating_add_signed(delta);
        self.cursor_position = target.min(self.char_count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    /// Current text for the caller to commit. The box keeps its content.
    pub fn submit(&self) -> String {
        self.text.clone()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    /// Apply one input event. Returns true when Enter was pressed while active.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(point) => {
                self.active = self.rect.contains(*point);
                if self.active {
                    self.cursor_position = self.char_count();
                }
                false
            }
            InputEvent::Key(key) if self.active => match key {
                Key::Backspace => {
                    self.backspace();
                    false
                }
                Key::Delete => {
                    self.delete_forward();
                    false
                }
                Key::Left => {
                    self.move_cursor(-1);
                    false
                }
                Key::Right => {
                    self.move_cursor(1);
                    false
                }
                Key::Home => {
                    self.move_cursor_home();
                    false
                }
                Key::End => {
                    self.move_cursor_end();
                    false
                }
                Key::Enter => true,
                Key::Char(c) => {
                    self.insert_char(*c);
                    false
                }
                Key::Escape => false,
            },
            _ => false,
        }
    }

    /// Advance the blink timer by one frame
    pub fn tick(&mut self) {
        self.cursor_timer += 1;
        if self.cursor_timer > self.blink_ticks {
            self.cursor_visible = !self.cursor_visible;
            self.cursor_timer = 0;
        }
    }

    /// Width of the text area inside the box
    pub fn visible_width(&self) -> i32 {
        self.rect.width - 2 * INPUT_PADDING
    }

    /// Logical x offset of the cursor from the start of the text
    pub fn cursor_offset(&self, measure: &dyn TextMeasure) -> i32 {
        let byte_pos = self.byte_index(self.cursor_position);
        measure.width(&self.text[..byte_pos])
    }

    /// Keep the cursor at least the margin away from both edges of the
    /// visible text area. Called before every draw.
    pub fn update_scroll(&mut self, measure: &dyn TextMeasure) -> i32 {
        let cursor_x = self.cursor_offset(measure);
        let max_visible = self.visible_width();

        if cursor_x - self.scroll_offset > max_visible - INPUT_CURSOR_MARGIN {
            self.scroll_offset = cursor_x - max_visible + INPUT_CURSOR_MARGIN;
        } else if cursor_x - self.scroll_offset < INPUT_CURSOR_MARGIN {
            self.scroll_offset = cursor_x - INPUT_CURSOR_MARGIN;
        }
        self.scroll_offset = self.scroll_offset.max(0);
        self.scroll_offset
    }
}

/// Format characters (Unicode category Cf).
const FORMAT_RANGES: &[(char, char)] = &[
    ('\u{00AD}', '\u{00AD}'),
    ('\u{0600}', '\u{0605}'),
    ('\u{061C}', '\u{061C}'),
    ('\u{06DD}', '\u{06DD}'),
    ('\u{070F}', '\u{070F}'),
    ('\u{0890}', '\u{0891}'),
    ('\u{08E2}', '\u{08E2}'),
    ('\u{180E}', '\u{180E}'),
    ('\u{200B}', '\u{200F}'),
    ('\u{202A}', '\u{202E}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{2066}', '\u{206F}'),
    ('\u{FEFF}', '\u{FEFF}'),
    ('\u{FFF9}', '\u{FFFB}'),
    ('\u{110BD}', '\u{110BD}'),
    ('\u{110CD}', '\u{110CD}'),
    ('\u{13430}', '\u{1343F}'),
    ('\u{1BCA0}', '\u{1BCA3}'),
    ('\u{1D173}', '\u{1D17A}'),
    ('\u{E0001}', '\u{E0001}'),
    ('\u{E0020}', '\u{E007F}'),
];

/// Private use areas (Unicode category Co).
const PRIVATE_USE_RANGES: &[(char, char)] = &[
    ('\u{E000}', '\u{F8FF}'),
    ('\u{F0000}', '\u{FFFFD}'),
    ('\u{100000}', '\u{10FFFD}'),
];

fn in_ranges(c: char, ranges: &[(char, char)]) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// True for characters a user can see typed into the box. Separators and
/// "other" categories are rejected, except the ASCII space.
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    // White_Space covers Zs, Zl and Zp plus a handful of Cc
    !(c.is_control() || c.is_whitespace() || in_ranges(c, FORMAT_RANGES) || in_ranges(c, PRIVATE_USE_RANGES))
}
