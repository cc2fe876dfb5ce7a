//! Main UI rendering and coordination
//!
//! The controllers lay everything out on the 800x600 logical canvas. Drawing
//! maps each logical rectangle onto terminal cells through the [`Viewport`].

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Write};
use tokio::time::{interval, Duration, MissedTickBehavior};

use super::app_component::{AppComponent, View};
use super::components::card::{self, badge_rect, checkbox_rect, delete_rect, edit_rect};
use super::components::modal::{confirmation_text, edit_title, CONFIRM_DIALOG_RECT, EDIT_DIALOG_RECT};
use super::components::{Button, ListPager, ModalState, TextInput};
use super::core::{EventHandler, MonospaceMeasure, Point, Rect, TextMeasure, Viewport};
use crate::config::UiConfig;
use crate::constants::{
    APP_TITLE, BUTTON_DELETE, BUTTON_EDIT, CATEGORY_LABEL_BUDGET, EDIT_HINT, INPUT_PADDING, SCREEN_HEIGHT,
    SCREEN_WIDTH, SCROLLBAR_HEIGHT, SCROLLBAR_MIN_THUMB, SCROLLBAR_WIDTH, SCROLLBAR_X, SCROLLBAR_Y,
    SUBTITLE_CATEGORIES, SUBTITLE_TASKS, TASK_LABEL_BUDGET,
};

const BACKGROUND: Color = Color::Rgb(248, 248, 232);
const TEXT: Color = Color::Rgb(40, 40, 40);
const ACCENT: Color = Color::Rgb(255, 203, 5);
const BLUE: Color = Color::Rgb(59, 76, 202);
const GREEN: Color = Color::Rgb(76, 175, 80);
const RED: Color = Color::Rgb(220, 50, 50);
const CARD: Color = Color::White;
const CARD_HOVER: Color = Color::Rgb(255, 255, 200);
const CARD_DONE: Color = Color::Rgb(180, 230, 180);
const CARD_DONE_HOVER: Color = Color::Rgb(200, 240, 200);
const MUTED: Color = Color::Rgb(100, 100, 100);
const SHADOW: Color = Color::Rgb(150, 150, 150);

const TITLE_BOX: Rect = Rect::new(50, 20, 700, 100);
const TASK_TITLE_BOX: Rect = Rect::new(180, 20, 440, 100);
const STATUS_LINE: Rect = Rect::new(0, SCREEN_HEIGHT - 20, SCREEN_WIDTH, 20);

/// Run the main TUI application until the user quits
pub async fn run_app(mut app: AppComponent, config: &UiConfig) -> Result<()> {
    enable_raw_mode()?;
    let res = run_session(&mut app, config).await;
    let restored = restore_terminal(&mut io::stdout());

    // A failure inside the session is reported before any restore failure
    res?;
    restored?;
    Ok(())
}

async fn run_session(app: &mut AppComponent, config: &UiConfig) -> Result<()> {
    let mut stdout = io::stdout();
    if config.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut event_handler = EventHandler::new(Viewport::new(size.width, size.height));

    run_app_loop(&mut terminal, app, &mut event_handler, config.tick_rate_hz).await
}

/// Put the terminal back the way the shell expects it. Every step runs even
/// when an earlier one fails; the first error is returned.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let steps = [
        disable_raw_mode(),
        execute!(out, DisableMouseCapture),
        execute!(out, LeaveAlternateScreen),
        execute!(out, Show),
    ];
    steps.into_iter().collect()
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
    tick_rate_hz: u32,
) -> Result<()> {
    let mut frame_interval = interval(Duration::from_secs(1) / tick_rate_hz.max(1));
    frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        frame_interval.tick().await;

        for event in event_handler.drain()? {
            app.handle_event(&event).await;
            if app.should_quit() {
                info!("Renderer: leaving main loop");
                return Ok(());
            }
        }

        app.tick();

        let viewport = event_handler.viewport();
        terminal.draw(|f| render(f, app, &viewport))?;
    }
}

/// Draw one full frame
pub fn render(f: &mut Frame, app: &mut AppComponent, viewport: &Viewport) {
    let measure = MonospaceMeasure::new(viewport.glyph_width());
    let canvas = Canvas { viewport, measure };

    f.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), f.area());

    match app.view() {
        View::Categories => render_categories(f, app, &canvas),
        View::Tasks => render_tasks(f, app, &canvas),
    }

    match app.modal().state().clone() {
        ModalState::Idle => {}
        ModalState::Confirming(pending) => {
            let (title, message) = confirmation_text(&pending);
            canvas.panel(f, CONFIRM_DIALOG_RECT, CARD, Some(title));
            canvas.text(
                f,
                Rect::new(CONFIRM_DIALOG_RECT.x, CONFIRM_DIALOG_RECT.y + 60, CONFIRM_DIALOG_RECT.width, 30),
                message,
                Style::default().fg(TEXT),
                Alignment::Center,
            );
            canvas.button(f, app.modal().yes_button(), GREEN);
            canvas.button(f, app.modal().no_button(), RED);
        }
        ModalState::Editing(session) => {
            canvas.panel(f, EDIT_DIALOG_RECT, CARD, Some(edit_title(session.target)));
            canvas.input(f, app.modal_mut().edit_input_mut());
            canvas.text(
                f,
                Rect::new(EDIT_DIALOG_RECT.x, EDIT_DIALOG_RECT.bottom() - 30, EDIT_DIALOG_RECT.width, 30),
                EDIT_HINT,
                Style::default().fg(MUTED),
                Alignment::Center,
            );
        }
    }

    if let Some(message) = &app.state().error_message {
        canvas.text(f, STATUS_LINE, message, Style::default().fg(RED), Alignment::Left);
    }
}

fn render_categories(f: &mut Frame, app: &mut AppComponent, canvas: &Canvas) {
    canvas.panel(f, TITLE_BOX, ACCENT, None);
    canvas.text(
        f,
        Rect::new(TITLE_BOX.x, TITLE_BOX.y + 10, TITLE_BOX.width, 40),
        APP_TITLE,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        Alignment::Center,
    );

    let view = app.categories();
    let total = view.summaries.len();
    canvas.text(
        f,
        Rect::new(TITLE_BOX.x, TITLE_BOX.y + 60, TITLE_BOX.width, 30),
        &format!("{SUBTITLE_CATEGORIES} ({total})"),
        Style::default().fg(TEXT),
        Alignment::Center,
    );
    canvas.scrollbar(f, &view.pager, total);

    let pointer = view.pointer();
    for (rect, summary) in view.visible_cards() {
        let fill = if card::is_body_hovered(rect, pointer) { CARD_HOVER } else { CARD };
        canvas.panel(f, rect, fill, None);

        let label = card::truncate_label(&summary.category.name, CATEGORY_LABEL_BUDGET, &canvas.measure);
        canvas.text(
            f,
            Rect::new(rect.x + 15, rect.y, CATEGORY_LABEL_BUDGET, rect.height),
            &label,
            Style::default().fg(TEXT).bg(fill),
            Alignment::Left,
        );

        let badge = if summary.is_complete() { GREEN } else { BLUE };
        canvas.label(f, badge_rect(rect), &summary.progress_label(), Color::White, badge);
        canvas.label(f, edit_rect(rect), BUTTON_EDIT, Color::White, BLUE);
        canvas.label(f, delete_rect(rect), BUTTON_DELETE, Color::White, RED);
    }

    let view = app.categories_mut();
    canvas.input(f, &mut view.input);
    canvas.button(f, &view.add_button, GREEN);
}

fn render_tasks(f: &mut Frame, app: &mut AppComponent, canvas: &Canvas) {
    let view = app.tasks();
    canvas.button(f, &view.back_button, BLUE);

    canvas.panel(f, TASK_TITLE_BOX, BLUE, None);
    canvas.text(
        f,
        Rect::new(TASK_TITLE_BOX.x, TASK_TITLE_BOX.y + 10, TASK_TITLE_BOX.width, 40),
        &view.title(),
        Style::default().fg(Color::White).bg(BLUE).add_modifier(Modifier::BOLD),
        Alignment::Center,
    );

    let total = view.tasks.len();
    canvas.text(
        f,
        Rect::new(TASK_TITLE_BOX.x, TASK_TITLE_BOX.y + 60, TASK_TITLE_BOX.width, 30),
        &format!("{SUBTITLE_TASKS} ({total})"),
        Style::default().fg(Color::White).bg(BLUE),
        Alignment::Center,
    );
    canvas.scrollbar(f, &view.pager, total);

    let pointer = view.pointer();
    for (rect, task) in view.visible_cards() {
        let hovered = card::is_body_hovered(rect, pointer);
        let fill = match (task.completed, hovered) {
            (true, true) => CARD_DONE_HOVER,
            (true, false) => CARD_DONE,
            (false, true) => CARD_HOVER,
            (false, false) => CARD,
        };
        canvas.panel(f, rect, fill, None);

        let mark = if task.completed { "[x]" } else { "[ ]" };
        canvas.label(f, checkbox_rect(rect), mark, GREEN, Color::White);

        let label = card::truncate_label(&task.name, TASK_LABEL_BUDGET, &canvas.measure);
        let style = if task.completed {
            Style::default().fg(MUTED).bg(fill).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(TEXT).bg(fill)
        };
        canvas.text(
            f,
            Rect::new(rect.x + 60, rect.y, TASK_LABEL_BUDGET, rect.height),
            &label,
            style,
            Alignment::Left,
        );

        canvas.label(f, edit_rect(rect), BUTTON_EDIT, Color::White, BLUE);
        canvas.label(f, delete_rect(rect), BUTTON_DELETE, Color::White, RED);
    }

    let view = app.tasks_mut();
    canvas.input(f, &mut view.input);
    canvas.button(f, &view.add_button, GREEN);
}

/// Drawing helpers working in logical coordinates
struct Canvas<'a> {
    viewport: &'a Viewport,
    measure: MonospaceMeasure,
}

impl Canvas<'_> {
    /// Filled box, optionally with a bordered title
    fn panel(&self, f: &mut Frame, rect: Rect, fill: Color, title: Option<&str>) {
        let area = self.viewport.to_cells(rect);
        f.render_widget(Clear, area);
        let mut block = Block::default().style(Style::default().bg(fill));
        if let Some(title) = title {
            block = block
                .borders(Borders::ALL)
                .border_style(Style::default().fg(TEXT))
                .title(Line::from(title).centered());
        }
        f.render_widget(block, area);
    }

    /// One line of text vertically centered in `rect`
    fn text(&self, f: &mut Frame, rect: Rect, text: &str, style: Style, alignment: Alignment) {
        let mut area = self.viewport.to_cells(rect);
        area.y += area.height.saturating_sub(1) / 2;
        area.height = 1;
        f.render_widget(Paragraph::new(text.to_string()).style(style).alignment(alignment), area);
    }

    /// Filled rectangle with centered text
    fn label(&self, f: &mut Frame, rect: Rect, text: &str, fg: Color, bg: Color) {
        self.panel(f, rect, bg, None);
        self.text(f, rect, text, Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD), Alignment::Center);
    }

    fn button(&self, f: &mut Frame, button: &Button, color: Color) {
        let bg = if button.is_hovered() { lighten(color) } else { color };
        self.label(f, button.rect, &button.label, Color::White, bg);
    }

    fn input(&self, f: &mut Frame, input: &mut TextInput) {
        let scroll = input.update_scroll(&self.measure);
        let rect = input.rect();
        let border = if input.is_active() { BLUE } else { TEXT };

        let area = self.viewport.to_cells(rect);
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(Color::White)),
            area,
        );

        let text_rect = Rect::new(rect.x + INPUT_PADDING, rect.y, input.visible_width(), rect.height);
        let line = if input.text().is_empty() && !input.is_active() {
            Line::from(Span::styled(input.placeholder().to_string(), Style::default().fg(MUTED)))
        } else {
            self.input_line(input, scroll)
        };

        let mut text_area = self.viewport.to_cells(text_rect);
        text_area.y += text_area.height.saturating_sub(1) / 2;
        text_area.height = 1;
        f.render_widget(Paragraph::new(line).style(Style::default().bg(Color::White)), text_area);
    }

    /// Visible slice of the input text with the cursor drawn inline
    fn input_line(&self, input: &TextInput, scroll: i32) -> Line<'static> {
        let glyph = self.measure.glyph_width();
        let skip = usize::try_from(scroll / glyph).unwrap_or(0);
        let take = usize::try_from(input.visible_width() / glyph).unwrap_or(0);
        let show_cursor = input.is_active() && input.cursor_visible();
        let text_style = Style::default().fg(TEXT);

        let mut spans = Vec::new();
        let chars: Vec<char> = input.text().chars().collect();
        for (index, c) in chars.iter().enumerate().skip(skip).take(take) {
            let style = if show_cursor && index == input.cursor_position() {
                text_style.add_modifier(Modifier::REVERSED)
            } else {
                text_style
            };
            spans.push(Span::styled(c.to_string(), style));
        }
        if show_cursor && input.cursor_position() == chars.len() {
            spans.push(Span::styled(" ", text_style.add_modifier(Modifier::REVERSED)));
        }
        Line::from(spans)
    }

    /// Track, thumb and arrows for lists longer than one page
    fn scrollbar(&self, f: &mut Frame, pager: &ListPager, total: usize) {
        if let Some((start, length)) = pager.thumb(total, SCROLLBAR_HEIGHT, SCROLLBAR_MIN_THUMB) {
            let track = Rect::new(SCROLLBAR_X, SCROLLBAR_Y, SCROLLBAR_WIDTH, SCROLLBAR_HEIGHT);
            self.panel(f, track, SHADOW, None);
            self.panel(f, Rect::new(SCROLLBAR_X, SCROLLBAR_Y + start, SCROLLBAR_WIDTH, length), BLUE, None);
        }

        let arrow = Style::default().fg(TEXT);
        if pager.can_scroll_up() {
            self.text(f, self.arrow_rect(Point::new(750, 135)), "^", arrow, Alignment::Left);
        }
        if pager.can_scroll_down(total) {
            self.text(f, self.arrow_rect(Point::new(750, 485)), "v", arrow, Alignment::Left);
        }
    }

    fn arrow_rect(&self, at: Point) -> Rect {
        Rect::new(at.x, at.y, self.measure.glyph_width(), 20)
    }
}

fn lighten(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(r.saturating_add(20), g.saturating_add(20), b.saturating_add(20)),
        other => other,
    }
}
