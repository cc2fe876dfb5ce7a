use pixeltodo::constants::{CATEGORY_LABEL_BUDGET, ELLIPSIS, TASK_LABEL_BUDGET};
use pixeltodo::ui::components::card::truncate_label;
use pixeltodo::ui::components::{ListPager, ModalController, ModalState, TextInput};
use pixeltodo::ui::core::{
    Action, Component, InputEvent, Key, MonospaceMeasure, PendingConfirmation, Point, Rect, TextMeasure,
};
use uuid::Uuid;

#[test]
fn test_pager_offset_stays_in_bounds() {
    // Deterministic pseudo-random walk over deltas and list sizes
    let mut pager = ListPager::new(5);
    let mut seed: u32 = 7;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let delta = (seed >> 16) as i32 % 9 - 4;
        let total = (seed >> 8) as usize % 20;
        pager.scroll_by(delta, total);
        assert!(pager.offset() <= total.saturating_sub(5));
        pager.on_item_count_shrunk(total / 2);
        assert!(pager.offset() <= (total / 2).saturating_sub(5));
    }
}

#[test]
fn test_truncation_fits_budget() {
    let measure = MonospaceMeasure::new(14);
    for budget in [CATEGORY_LABEL_BUDGET, TASK_LABEL_BUDGET] {
        for len in 0..60 {
            let name = "x".repeat(len);
            let label = truncate_label(&name, budget, &measure);
            if measure.width(&name) <= budget {
                assert_eq!(label, name);
            } else {
                assert!(label.ends_with(ELLIPSIS));
                assert!(measure.width(&label) <= budget);
                assert!(name.starts_with(label.trim_end_matches(ELLIPSIS)));
            }
        }
    }
}

#[test]
fn test_insert_backspace_round_trip_on_multibyte_text() {
    let text = "café ünïcode";
    for cursor in 0..=text.chars().count() {
        let mut input = TextInput::new(Rect::new(150, 510, 400, 50), "", 150);
        input.activate(false);
        input.set_text(text);
        input.move_cursor_home();
        input.move_cursor(cursor as isize);

        input.insert_char('ß');
        input.backspace();

        assert_eq!(input.text(), text);
        assert_eq!(input.cursor_position(), cursor);
    }
}

#[test]
fn test_modal_idle_reachable_from_every_state() {
    let id = Uuid::new_v4();
    let requests = [
        PendingConfirmation::DeleteCategory {
            id,
            name: "a".to_string(),
        },
        PendingConfirmation::EditTask {
            id,
            name: "b".to_string(),
        },
        PendingConfirmation::ToggleTask {
            id,
            name: "c".to_string(),
            completed: false,
        },
    ];

    for pending in requests {
        let mut modal = ModalController::default();
        modal.request(pending.clone());
        assert!(matches!(modal.state(), ModalState::Confirming(_)));
        modal.handle_event(&InputEvent::Key(Key::Escape));
        assert_eq!(modal.state(), &ModalState::Idle);

        modal.request(pending);
        let action = modal.handle_event(&InputEvent::PointerDown(Point::new(260, 350)));
        if matches!(modal.state(), ModalState::Editing(_)) {
            assert_eq!(action, Action::None);
            assert!(!modal.request(PendingConfirmation::DeleteTask {
                id,
                name: "d".to_string()
            }));
            modal.handle_event(&InputEvent::Key(Key::Escape));
        }
        assert_eq!(modal.state(), &ModalState::Idle);
    }
}
