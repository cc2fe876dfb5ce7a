//! Confirmation and edit dialogs.
//!
//! At most one dialog is open at a time. While one is open it owns every
//! input event; the views never see clicks, keys or wheel events.

use log::debug;

use crate::constants::{
    BUTTON_NO, BUTTON_YES, CONFIRM_BUTTON_HEIGHT, CONFIRM_BUTTON_WIDTH, CONFIRM_BUTTON_Y, CONFIRM_COMPLETE_MESSAGE,
    CONFIRM_COMPLETE_TITLE, CONFIRM_DELETE_CATEGORY_MESSAGE, CONFIRM_DELETE_CATEGORY_TITLE,
    CONFIRM_DELETE_TASK_MESSAGE, CONFIRM_DELETE_TASK_TITLE, CONFIRM_DIALOG_HEIGHT, CONFIRM_DIALOG_WIDTH,
    CONFIRM_DIALOG_X, CONFIRM_DIALOG_Y, CONFIRM_EDIT_CATEGORY_MESSAGE, CONFIRM_EDIT_CATEGORY_TITLE,
    CONFIRM_EDIT_TASK_MESSAGE, CONFIRM_EDIT_TASK_TITLE, CONFIRM_INCOMPLETE_MESSAGE, CONFIRM_INCOMPLETE_TITLE,
    CONFIRM_NO_X, CONFIRM_YES_X, DEFAULT_CURSOR_BLINK_TICKS, DEFAULT_MAX_INPUT_LENGTH, EDIT_CATEGORY_TITLE,
    EDIT_DIALOG_HEIGHT, EDIT_DIALOG_WIDTH, EDIT_DIALOG_X, EDIT_DIALOG_Y, EDIT_INPUT_HEIGHT, EDIT_INPUT_WIDTH,
    EDIT_INPUT_X, EDIT_INPUT_Y, EDIT_TASK_TITLE,
};
use crate::ui::components::{Button, TextInput};
use crate::ui::core::{
    Action, Component, EditTarget, EditingSession, InputEvent, Key, PendingConfirmation, Point, Rect,
};

pub const CONFIRM_DIALOG_RECT: Rect =
    Rect::new(CONFIRM_DIALOG_X, CONFIRM_DIALOG_Y, CONFIRM_DIALOG_WIDTH, CONFIRM_DIALOG_HEIGHT);
pub const EDIT_DIALOG_RECT: Rect = Rect::new(EDIT_DIALOG_X, EDIT_DIALOG_Y, EDIT_DIALOG_WIDTH, EDIT_DIALOG_HEIGHT);
pub const EDIT_INPUT_RECT: Rect = Rect::new(EDIT_INPUT_X, EDIT_INPUT_Y, EDIT_INPUT_WIDTH, EDIT_INPUT_HEIGHT);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Idle,
    Confirming(PendingConfirmation),
    Editing(EditingSession),
}

/// Title and message shown in the confirmation dialog
pub fn confirmation_text(pending: &PendingConfirmation) -> (&'static str, &'static str) {
    match pending {
        PendingConfirmation::DeleteCategory { .. } => (CONFIRM_DELETE_CATEGORY_TITLE, CONFIRM_DELETE_CATEGORY_MESSAGE),
        PendingConfirmation::DeleteTask { .. } => (CONFIRM_DELETE_TASK_TITLE, CONFIRM_DELETE_TASK_MESSAGE),
        PendingConfirmation::EditCategory { .. } => (CONFIRM_EDIT_CATEGORY_TITLE, CONFIRM_EDIT_CATEGORY_MESSAGE),
        PendingConfirmation::EditTask { .. } => (CONFIRM_EDIT_TASK_TITLE, CONFIRM_EDIT_TASK_MESSAGE),
        PendingConfirmation::ToggleTask { completed: false, .. } => (CONFIRM_COMPLETE_TITLE, CONFIRM_COMPLETE_MESSAGE),
        PendingConfirmation::ToggleTask { completed: true, .. } => {
            (CONFIRM_INCOMPLETE_TITLE, CONFIRM_INCOMPLETE_MESSAGE)
        }
    }
}

pub fn edit_title(target: EditTarget) -> &'static str {
    match target {
        EditTarget::Category => EDIT_CATEGORY_TITLE,
        EditTarget::Task => EDIT_TASK_TITLE,
    }
}

pub struct ModalController {
    state: ModalState,
    edit_input: TextInput,
    yes_button: Button,
    no_button: Button,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_LENGTH, DEFAULT_CURSOR_BLINK_TICKS)
    }
}

impl ModalController {
    pub fn new(max_input_length: usize, blink_ticks: u32) -> Self {
        Self {
            state: ModalState::Idle,
            edit_input: TextInput::new(EDIT_INPUT_RECT, "", max_input_length).with_blink_ticks(blink_ticks),
            yes_button: Button::new(
                Rect::new(CONFIRM_YES_X, CONFIRM_BUTTON_Y, CONFIRM_BUTTON_WIDTH, CONFIRM_BUTTON_HEIGHT),
                BUTTON_YES,
            ),
            no_button: Button::new(
                Rect::new(CONFIRM_NO_X, CONFIRM_BUTTON_Y, CONFIRM_BUTTON_WIDTH, CONFIRM_BUTTON_HEIGHT),
                BUTTON_NO,
            ),
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, ModalState::Idle)
    }

    pub fn edit_input(&self) -> &TextInput {
        &self.edit_input
    }

    pub fn edit_input_mut(&mut self) -> &mut TextInput {
        &mut self.edit_input
    }

    pub fn yes_button(&self) -> &Button {
        &self.yes_button
    }

    pub fn no_button(&self) -> &Button {
        &self.no_button
    }

    /// Open the confirmation dialog. Ignored while another dialog is open.
    pub fn request(&mut self, pending: PendingConfirmation) -> bool {
        if self.is_active() {
            debug!("Modal: ignoring request while busy: {:?}", pending);
            return false;
        }
        debug!("Modal: confirming {:?}", pending);
        self.state = ModalState::Confirming(pending);
        true
    }

    /// Close whatever dialog is open without doing anything
    pub fn cancel(&mut self) {
        if self.is_active() {
            debug!("Modal: cancelled");
        }
        self.state = ModalState::Idle;
        self.edit_input.clear();
        self.edit_input.deactivate();
    }

    fn answer_yes(&mut self) -> Action {
        let pending = match std::mem::replace(&mut self.state, ModalState::Idle) {
            ModalState::Confirming(pending) => pending,
            other => {
                self.state = other;
                return Action::None;
            }
        };

        if let Some((target, target_id, name)) = pending.edit_target() {
            debug!("Modal: editing {:?} {}", target, target_id);
            self.edit_input.set_text(name);
            self.edit_input.activate(false);
            self.state = ModalState::Editing(EditingSession {
                target,
                target_id,
                original_name: name.to_string(),
            });
            return Action::None;
        }

        debug!("Modal: confirmed {:?}", pending);
        pending.confirmed_action()
    }

    fn handle_confirming(&mut self, event: &InputEvent) -> Action {
        match event {
            InputEvent::PointerMove(pos) => {
                self.hover(*pos);
                Action::None
            }
            InputEvent::PointerDown(pos) => {
                if self.yes_button.is_clicked(*pos) {
                    self.answer_yes()
                } else if self.no_button.is_clicked(*pos) || !CONFIRM_DIALOG_RECT.contains(*pos) {
                    self.cancel();
                    Action::None
                } else {
                    Action::None
                }
            }
            InputEvent::Key(Key::Enter | Key::Char('y' | 'Y')) => self.answer_yes(),
            InputEvent::Key(Key::Escape | Key::Char('n' | 'N')) => {
                self.cancel();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_editing(&mut self, event: &InputEvent) -> Action {
        match event {
            InputEvent::PointerDown(pos) if !EDIT_INPUT_RECT.contains(*pos) => {
                self.cancel();
                Action::None
            }
            InputEvent::Key(Key::Escape) => {
                self.cancel();
                Action::None
            }
            InputEvent::PointerDown(_) | InputEvent::Key(_) => {
                if !self.edit_input.handle_event(event) {
                    return Action::None;
                }
                self.submit_edit()
            }
            _ => Action::None,
        }
    }

    fn submit_edit(&mut self) -> Action {
        let name = self.edit_input.submit();
        let session = match std::mem::replace(&mut self.state, ModalState::Idle) {
            ModalState::Editing(session) => session,
            other => {
                self.state = other;
                return Action::None;
            }
        };
        self.edit_input.clear();
        self.edit_input.deactivate();

        if name.trim().is_empty() {
            debug!("Modal: blank edit discarded for {}", session.target_id);
            return Action::None;
        }
        if name == session.original_name {
            debug!("Modal: unchanged name kept for {}", session.target_id);
            return Action::None;
        }

        match session.target {
            EditTarget::Category => Action::RenameCategory {
                id: session.target_id,
                name,
            },
            EditTarget::Task => Action::RenameTask {
                id: session.target_id,
                name,
            },
        }
    }

    fn hover(&mut self, pos: Point) {
        self.yes_button.check_hover(pos);
        self.no_button.check_hover(pos);
    }
}

impl Component for ModalController {
    fn handle_event(&mut self, event: &InputEvent) -> Action {
        match self.state {
            ModalState::Idle => Action::None,
            ModalState::Confirming(_) => self.handle_confirming(event),
            ModalState::Editing(_) => self.handle_editing(event),
        }
    }

    fn tick(&mut self) {
        if matches!(self.state, ModalState::Editing(_)) {
            self.edit_input.tick();
        }
    }
}
