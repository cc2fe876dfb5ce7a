//! Task list of the selected goal: back button, paginated task cards with
//! checkboxes, plus the add row.

use uuid::Uuid;

use crate::config::UiConfig;
use crate::constants::{
    ADD_BUTTON_WIDTH, ADD_BUTTON_X, BACK_BUTTON_HEIGHT, BACK_BUTTON_WIDTH, BACK_BUTTON_X, BACK_BUTTON_Y, BUTTON_ADD,
    BUTTON_BACK, INPUT_HEIGHT, INPUT_WIDTH, INPUT_X, INPUT_Y, PLACEHOLDER_NEW_TASK, TASK_VIEW_TITLE_MAX_CHARS,
};
use crate::models::Task;
use crate::ui::components::card::{self, CardHit};
use crate::ui::components::{Button, ListPager, TextInput};
use crate::ui::core::{Action, Component, InputEvent, Key, PendingConfirmation, Point, Rect};

pub struct TaskListComponent {
    pub category_id: Option<Uuid>,
    pub category_name: String,
    pub tasks: Vec<Task>,
    pub pager: ListPager,
    pub input: TextInput,
    pub add_button: Button,
    pub back_button: Button,
    /// Route checkbox clicks through the confirmation dialog
    pub confirm_toggle: bool,
    pointer: Point,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl TaskListComponent {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            category_id: None,
            category_name: String::new(),
            tasks: Vec::new(),
            pager: ListPager::new(config.page_size),
            input: TextInput::new(
                Rect::new(INPUT_X, INPUT_Y, INPUT_WIDTH, INPUT_HEIGHT),
                PLACEHOLDER_NEW_TASK,
                config.max_input_length,
            )
            .with_blink_ticks(config.cursor_blink_ticks),
            add_button: Button::new(Rect::new(ADD_BUTTON_X, INPUT_Y, ADD_BUTTON_WIDTH, INPUT_HEIGHT), BUTTON_ADD),
            back_button: Button::new(
                Rect::new(BACK_BUTTON_X, BACK_BUTTON_Y, BACK_BUTTON_WIDTH, BACK_BUTTON_HEIGHT),
                BUTTON_BACK,
            ),
            confirm_toggle: config.confirm_toggle,
            pointer: Point::default(),
        }
    }

    /// Switch to another goal. Scrolling starts from the top again.
    pub fn open(&mut self, category_id: Uuid, name: &str, tasks: Vec<Task>) {
        self.category_id = Some(category_id);
        self.category_name = name.to_string();
        self.tasks = tasks;
        self.pager.reset();
    }

    /// Leave the goal, dropping the tasks and any half-typed task name
    pub fn close(&mut self) {
        self.category_id = None;
        self.category_name.clear();
        self.tasks.clear();
        self.input.clear();
        self.input.deactivate();
    }

    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.pager.on_item_count_shrunk(self.tasks.len());
    }

    /// Goal name cut to fit the title box
    pub fn title(&self) -> String {
        self.category_name.chars().take(TASK_VIEW_TITLE_MAX_CHARS).collect()
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = (Rect, &Task)> + '_ {
        self.tasks[self.pager.visible_range(self.tasks.len())]
            .iter()
            .enumerate()
            .map(|(slot, task)| (card::card_rect(slot), task))
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    fn create_action(&self) -> Action {
        let name = self.input.submit();
        match self.category_id {
            Some(category_id) if !name.trim().is_empty() => Action::CreateTask { category_id, name },
            _ => Action::None,
        }
    }

    fn toggle_action(&self, task: &Task) -> Action {
        if self.confirm_toggle {
            Action::RequestConfirmation(PendingConfirmation::ToggleTask {
                id: task.id,
                name: task.name.clone(),
                completed: task.completed,
            })
        } else {
            Action::ToggleTask(task.id)
        }
    }

    fn handle_click(&self, pos: Point) -> Action {
        if self.back_button.is_clicked(pos) {
            return Action::BackToCategories;
        }
        if self.add_button.is_clicked(pos) {
            return self.create_action();
        }

        for (rect, task) in self.visible_cards() {
            match card::hit_test(rect, pos, true) {
                Some(CardHit::Edit) => {
                    return Action::RequestConfirmation(PendingConfirmation::EditTask {
                        id: task.id,
                        name: task.name.clone(),
                    })
                }
                Some(CardHit::Delete) => {
                    return Action::RequestConfirmation(PendingConfirmation::DeleteTask {
                        id: task.id,
                        name: task.name.clone(),
                    })
                }
                Some(CardHit::Toggle) => return self.toggle_action(task),
                // task cards have no body action
                Some(CardHit::Body) => return Action::None,
                None => {}
            }
        }
        Action::None
    }
}

impl Component for TaskListComponent {
    fn handle_event(&mut self, event: &InputEvent) -> Action {
        match event {
            InputEvent::PointerMove(pos) => {
                self.pointer = *pos;
                self.back_button.check_hover(*pos);
                self.add_button.check_hover(*pos);
                Action::None
            }
            InputEvent::PointerDown(pos) => {
                let action = self.handle_click(*pos);
                self.input.handle_event(event);
                action
            }
            InputEvent::Wheel(delta) => {
                self.pager.scroll_by(*delta, self.tasks.len());
                Action::None
            }
            InputEvent::Key(Key::Escape) if !self.input.is_active() => Action::BackToCategories,
            InputEvent::Key(_) => {
                if self.input.handle_event(event) {
                    self.create_action()
                } else {
                    Action::None
                }
            }
            InputEvent::Quit => Action::Quit,
        }
    }

    fn tick(&mut self) {
        self.input.tick();
    }
}
