//! Goal list: paginated cards with progress badges, plus the add row.

use crate::config::UiConfig;
use crate::constants::{
    ADD_BUTTON_WIDTH, ADD_BUTTON_X, BUTTON_ADD, INPUT_HEIGHT, INPUT_WIDTH, INPUT_X, INPUT_Y, PLACEHOLDER_NEW_GOAL,
};
use crate::models::CategorySummary;
use crate::ui::components::card::{self, CardHit};
use crate::ui::components::{Button, ListPager, TextInput};
use crate::ui::core::{Action, Component, InputEvent, PendingConfirmation, Point, Rect};

pub struct CategoryListComponent {
    pub summaries: Vec<CategorySummary>,
    pub pager: ListPager,
    pub input: TextInput,
    pub add_button: Button,
    pointer: Point,
}

impl Default for CategoryListComponent {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl CategoryListComponent {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            summaries: Vec::new(),
            pager: ListPager::new(config.page_size),
            input: TextInput::new(
                Rect::new(INPUT_X, INPUT_Y, INPUT_WIDTH, INPUT_HEIGHT),
                PLACEHOLDER_NEW_GOAL,
                config.max_input_length,
            )
            .with_blink_ticks(config.cursor_blink_ticks),
            add_button: Button::new(Rect::new(ADD_BUTTON_X, INPUT_Y, ADD_BUTTON_WIDTH, INPUT_HEIGHT), BUTTON_ADD),
            pointer: Point::default(),
        }
    }

    /// Replace the list, pulling the pager back if the list got shorter
    pub fn update_data(&mut self, summaries: Vec<CategorySummary>) {
        self.summaries = summaries;
        self.pager.on_item_count_shrunk(self.summaries.len());
    }

    /// Visible cards as `(slot rect, summary)`
    pub fn visible_cards(&self) -> impl Iterator<Item = (Rect, &CategorySummary)> + '_ {
        self.summaries[self.pager.visible_range(self.summaries.len())]
            .iter()
            .enumerate()
            .map(|(slot, summary)| (card::card_rect(slot), summary))
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    fn create_action(&self) -> Action {
        let name = self.input.submit();
        if name.trim().is_empty() {
            return Action::None;
        }
        Action::CreateCategory { name }
    }

    fn handle_click(&self, pos: Point) -> Action {
        if self.add_button.is_clicked(pos) {
            return self.create_action();
        }

        for (rect, summary) in self.visible_cards() {
            let category = &summary.category;
            match card::hit_test(rect, pos, false) {
                Some(CardHit::Edit) => {
                    return Action::RequestConfirmation(PendingConfirmation::EditCategory {
                        id: category.id,
                        name: category.name.clone(),
                    })
                }
                Some(CardHit::Delete) => {
                    return Action::RequestConfirmation(PendingConfirmation::DeleteCategory {
                        id: category.id,
                        name: category.name.clone(),
                    })
                }
                Some(CardHit::Body) => {
                    return Action::OpenCategory {
                        id: category.id,
                        name: category.name.clone(),
                    }
                }
                Some(CardHit::Toggle) | None => {}
            }
        }
        Action::None
    }
}

impl Component for CategoryListComponent {
    fn handle_event(&mut self, event: &InputEvent) -> Action {
        match event {
            InputEvent::PointerMove(pos) => {
                self.pointer = *pos;
                self.add_button.check_hover(*pos);
                Action::None
            }
            InputEvent::PointerDown(pos) => {
                let action = self.handle_click(*pos);
                self.input.handle_event(event);
                action
            }
            InputEvent::Wheel(delta) => {
                self.pager.scroll_by(*delta, self.summaries.len());
                Action::None
            }
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
