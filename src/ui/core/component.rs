use super::actions::Action;
use super::input::InputEvent;

pub trait Component {
    /// Translate one input event into an action for the application controller
    fn handle_event(&mut self, event: &InputEvent) -> Action;

    /// Advance per-frame animation state
    fn tick(&mut self) {}
}
