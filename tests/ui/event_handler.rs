use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pixeltodo::ui::core::event_handler::translate_event;
use pixeltodo::ui::core::{InputEvent, Key, Point, Viewport};

#[test]
fn test_left_click_maps_to_logical_point() {
    let viewport = Viewport::new(80, 60);
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 40,
        row: 30,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(
        translate_event(event, &viewport),
        Some(InputEvent::PointerDown(Point::new(405, 305)))
    );
}

#[test]
fn test_right_click_is_ignored() {
    let viewport = Viewport::new(80, 24);
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: 1,
        row: 1,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(translate_event(event, &viewport), None);
}

#[test]
fn test_keys_are_translated() {
    let viewport = Viewport::new(80, 24);
    let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

    assert_eq!(
        translate_event(key(KeyCode::Char('g')), &viewport),
        Some(InputEvent::Key(Key::Char('g')))
    );
    assert_eq!(
        translate_event(key(KeyCode::Backspace), &viewport),
        Some(InputEvent::Key(Key::Backspace))
    );
    assert_eq!(translate_event(key(KeyCode::Esc), &viewport), Some(InputEvent::Key(Key::Escape)));
    assert_eq!(translate_event(key(KeyCode::F(1)), &viewport), None);
}

#[test]
fn test_scroll_down_is_negative() {
    let viewport = Viewport::new(80, 24);
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(translate_event(event, &viewport), Some(InputEvent::Wheel(-1)));
}

#[test]
fn test_glyph_width_covers_canvas() {
    let viewport = Viewport::new(80, 24);
    assert_eq!(viewport.glyph_width(), 10);
    assert!(viewport.glyph_width() * 80 >= 800);
}

#[test]
fn test_shortcut_chords_do_not_reach_the_input_box() {
    use pixeltodo::ui::components::TextInput;
    use pixeltodo::ui::core::Rect;

    let viewport = Viewport::new(80, 24);
    let mut input = TextInput::new(Rect::new(150, 510, 400, 50), "New Goal...", 150);
    input.activate(false);

    for (c, modifiers) in [('v', KeyModifiers::CONTROL), ('s', KeyModifiers::CONTROL), ('x', KeyModifiers::ALT)] {
        let event = Event::Key(KeyEvent::new(KeyCode::Char(c), modifiers));
        if let Some(translated) = translate_event(event, &viewport) {
            input.handle_event(&translated);
        }
    }
    assert_eq!(input.text(), "");

    assert!(!input.insert_char('\u{200B}'));
    assert!(input.insert_char('v'));
    assert_eq!(input.text(), "v");
}
