//! Card rows shared by the goal and task lists.
//!
//! Every visible row has the same fixed rectangle, so hit-testing only needs
//! the row's slot on the page.

use crate::constants::{CARD_FIRST_Y, CARD_HEIGHT, CARD_PITCH, CARD_WIDTH, CARD_X, ELLIPSIS};
use crate::ui::core::{Point, Rect, TextMeasure};

/// Sub-control of a card under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHit {
    Edit,
    Delete,
    Toggle,
    Body,
}

/// Rectangle of the card in visible slot `slot` (0 is the top row)
pub fn card_rect(slot: usize) -> Rect {
    let slot = i32::try_from(slot).unwrap_or(i32::MAX / CARD_PITCH);
    Rect::new(CARD_X, CARD_FIRST_Y + slot * CARD_PITCH, CARD_WIDTH, CARD_HEIGHT)
}

pub fn edit_rect(card: Rect) -> Rect {
    Rect::new(card.right() - 105, card.y + 10, 45, 35)
}

pub fn delete_rect(card: Rect) -> Rect {
    Rect::new(card.right() - 55, card.y + 10, 45, 35)
}

pub fn checkbox_rect(card: Rect) -> Rect {
    Rect::new(card.x + 15, card.y + 15, 28, 28)
}

/// Progress badge on goal cards
pub fn badge_rect(card: Rect) -> Rect {
    Rect::new(card.x + 370, card.y + 12, 100, 30)
}

/// Resolve which part of `card` is under `pos`. Edit and delete win over the
/// checkbox, which wins over the body. Only task cards have a checkbox.
pub fn hit_test(card: Rect, pos: Point, has_checkbox: bool) -> Option<CardHit> {
    if edit_rect(card).contains(pos) {
        Some(CardHit::Edit)
    } else if delete_rect(card).contains(pos) {
        Some(CardHit::Delete)
    } else if has_checkbox && checkbox_rect(card).contains(pos) {
        Some(CardHit::Toggle)
    } else if card.contains(pos) {
        Some(CardHit::Body)
    } else {
        None
    }
}

/// The body is highlighted only when the pointer is not over a button.
pub fn is_body_hovered(card: Rect, pos: Point) -> bool {
    card.contains(pos) && !edit_rect(card).contains(pos) && !delete_rect(card).contains(pos)
}

/// Shorten `text` so it fits in `budget`, ending it with an ellipsis.
/// Text that already fits is returned unchanged.
pub fn truncate_label(text: &str, budget: i32, measure: &dyn TextMeasure) -> String {
    if measure.width(text) <= budget {
        return text.to_string();
    }

    let mut label = text.to_string();
    while !label.is_empty() && measure.width(&format!("{label}{ELLIPSIS}")) > budget {
        label.pop();
    }
    label.push_str(ELLIPSIS);
    label
}
