//! Constants used throughout the application
//!
//! This module centralizes UI text, dialog copy and the logical layout of the
//! screen so the controllers and the renderer agree on every rectangle.

// Window / logical canvas
/// Logical canvas width. All hit-testing happens in this coordinate space.
pub const SCREEN_WIDTH: i32 = 800;
/// Logical canvas height.
pub const SCREEN_HEIGHT: i32 = 600;
pub const APP_TITLE: &str = "PIXEL TODO";

// Card list geometry
pub const CARD_X: i32 = 80;
pub const CARD_FIRST_Y: i32 = 140;
pub const CARD_WIDTH: i32 = 640;
pub const CARD_HEIGHT: i32 = 55;
/// Vertical distance between the tops of two consecutive cards.
pub const CARD_PITCH: i32 = 65;
/// Width available for a category name before the progress badge.
pub const CATEGORY_LABEL_BUDGET: i32 = 280;
/// Width available for a task name before the edit/delete buttons.
pub const TASK_LABEL_BUDGET: i32 = 460;
pub const ELLIPSIS: &str = "...";

// Scrollbar
pub const SCROLLBAR_X: i32 = 748;
pub const SCROLLBAR_Y: i32 = 155;
pub const SCROLLBAR_WIDTH: i32 = 10;
pub const SCROLLBAR_HEIGHT: i32 = 315;
pub const SCROLLBAR_MIN_THUMB: i32 = 30;

// Bottom input row
pub const INPUT_X: i32 = 150;
pub const INPUT_Y: i32 = 510;
pub const INPUT_WIDTH: i32 = 400;
pub const INPUT_HEIGHT: i32 = 50;
pub const ADD_BUTTON_X: i32 = 570;
pub const ADD_BUTTON_WIDTH: i32 = 180;
pub const BACK_BUTTON_X: i32 = 20;
pub const BACK_BUTTON_Y: i32 = 20;
pub const BACK_BUTTON_WIDTH: i32 = 140;
pub const BACK_BUTTON_HEIGHT: i32 = 50;

// Text input
/// Horizontal padding on each side of the text area inside an input box.
pub const INPUT_PADDING: i32 = 12;
/// Distance the cursor is kept away from either edge of the visible text area.
pub const INPUT_CURSOR_MARGIN: i32 = 20;
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 150;

// Modal dialogs
pub const CONFIRM_DIALOG_X: i32 = 200;
pub const CONFIRM_DIALOG_Y: i32 = 230;
pub const CONFIRM_DIALOG_WIDTH: i32 = 400;
pub const CONFIRM_DIALOG_HEIGHT: i32 = 180;
pub const CONFIRM_YES_X: i32 = 250;
pub const CONFIRM_NO_X: i32 = 430;
pub const CONFIRM_BUTTON_Y: i32 = 340;
pub const CONFIRM_BUTTON_WIDTH: i32 = 120;
pub const CONFIRM_BUTTON_HEIGHT: i32 = 50;
pub const EDIT_DIALOG_X: i32 = 150;
pub const EDIT_DIALOG_Y: i32 = 250;
pub const EDIT_DIALOG_WIDTH: i32 = 500;
pub const EDIT_DIALOG_HEIGHT: i32 = 150;
pub const EDIT_INPUT_X: i32 = 150;
pub const EDIT_INPUT_Y: i32 = 300;
pub const EDIT_INPUT_WIDTH: i32 = 500;
pub const EDIT_INPUT_HEIGHT: i32 = 50;

// Paging / timing defaults
pub const DEFAULT_PAGE_SIZE: usize = 5;
/// The card area fits this many rows.
pub const MAX_PAGE_SIZE: usize = 5;
pub const DEFAULT_TICK_RATE_HZ: u32 = 60;
pub const DEFAULT_CURSOR_BLINK_TICKS: u32 = 30;
/// Tasks view title is cut to this many characters.
pub const TASK_VIEW_TITLE_MAX_CHARS: usize = 18;

// Labels
pub const PLACEHOLDER_NEW_GOAL: &str = "New Goal...";
pub const PLACEHOLDER_NEW_TASK: &str = "New Task...";
pub const BUTTON_ADD: &str = "+ ADD";
pub const BUTTON_BACK: &str = "<- BACK";
pub const BUTTON_YES: &str = "YES";
pub const BUTTON_NO: &str = "NO";
pub const BUTTON_EDIT: &str = "E";
pub const BUTTON_DELETE: &str = "X";
pub const SUBTITLE_CATEGORIES: &str = "SELECT A GOAL";
pub const SUBTITLE_TASKS: &str = "TASKS";

// Confirmation dialog copy
pub const CONFIRM_DELETE_CATEGORY_TITLE: &str = "DELETE GOAL?";
pub const CONFIRM_DELETE_CATEGORY_MESSAGE: &str = "ALL TASKS WILL BE LOST";
pub const CONFIRM_DELETE_TASK_TITLE: &str = "DELETE TASK?";
pub const CONFIRM_DELETE_TASK_MESSAGE: &str = "THIS CANNOT BE UNDONE";
pub const CONFIRM_EDIT_CATEGORY_TITLE: &str = "EDIT GOAL?";
pub const CONFIRM_EDIT_CATEGORY_MESSAGE: &str = "CHANGE GOAL NAME";
pub const CONFIRM_EDIT_TASK_TITLE: &str = "EDIT TASK?";
pub const CONFIRM_EDIT_TASK_MESSAGE: &str = "CHANGE TASK NAME";
pub const CONFIRM_COMPLETE_TITLE: &str = "MARK COMPLETE?";
pub const CONFIRM_COMPLETE_MESSAGE: &str = "FINISH THIS TASK";
pub const CONFIRM_INCOMPLETE_TITLE: &str = "MARK INCOMPLETE?";
pub const CONFIRM_INCOMPLETE_MESSAGE: &str = "UNDO COMPLETION";

// Edit dialog copy
pub const EDIT_CATEGORY_TITLE: &str = "EDIT GOAL";
pub const EDIT_TASK_TITLE: &str = "EDIT TASK";
pub const EDIT_HINT: &str = "PRESS ENTER TO SAVE";

// Status messages
pub const ERROR_LOAD_CATEGORIES_FAILED: &str = "Failed to load goals";
pub const ERROR_LOAD_TASKS_FAILED: &str = "Failed to load tasks";
pub const ERROR_CATEGORY_CREATE_FAILED: &str = "Failed to create goal";
pub const ERROR_CATEGORY_UPDATE_FAILED: &str = "Failed to rename goal";
pub const ERROR_CATEGORY_DELETE_FAILED: &str = "Failed to delete goal";
pub const ERROR_TASK_CREATE_FAILED: &str = "Failed to create task";
pub const ERROR_TASK_UPDATE_FAILED: &str = "Failed to rename task";
pub const ERROR_TASK_TOGGLE_FAILED: &str = "Failed to toggle task";
pub const ERROR_TASK_DELETE_FAILED: &str = "Failed to delete task";

// Config
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const APP_DIR_NAME: &str = "pixeltodo";
pub const CONFIG_FILE_NAME: &str = "pixeltodo.toml";
pub const DATABASE_FILE_NAME: &str = "pixeltodo.db";
pub const LOG_FILE_NAME: &str = "pixeltodo.log";
