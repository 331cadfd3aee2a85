//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::core::{format_clock, format_hours_minutes, progress, Mode};
use crate::tui::app::{App, InputMode, SettingsField};

const HELP_HINT: &str = "space:start/pause | a:add | Enter:select | c:done | s:settings | ?:help | q:quit";

/// Accent colour per mode.
const fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Focus => Color::LightRed,
        Mode::ShortBreak => Color::Cyan,
        Mode::LongBreak => Color::Blue,
    }
}

/// Terminal window title: the countdown and whose timer it is.
#[must_use]
pub fn window_title(app: &App) -> String {
    format!(
        "{} - {}'s Pomodoro",
        format_clock(app.pomodoro.session().remaining_seconds()),
        app.name.as_deref().unwrap_or("User")
    )
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let input_height = if app.input_mode == InputMode::AddingTask {
        3
    } else {
        0
    };

    // Create layout: modes, timer, current task, list, input, stats, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Mode tabs
            Constraint::Length(5),            // Timer
            Constraint::Length(1),            // Session / current task
            Constraint::Min(3),               // Task list
            Constraint::Length(input_height), // New task input
            Constraint::Length(1),            // Stats
            Constraint::Length(1),            // Status bar
        ])
        .split(frame.area());

    render_modes(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_session_info(frame, app, chunks[2]);
    render_tasks(frame, app, chunks[3]);
    if input_height > 0 {
        render_task_input(frame, app, chunks[4]);
    }
    render_stats(frame, app, chunks[5]);
    render_status_bar(frame, app, chunks[6]);

    if app.input_mode == InputMode::Settings {
        render_settings(frame, app);
    }
}

fn render_modes(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mode = app.pomodoro.session().mode();
    let titles: Vec<Line<'_>> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, m)| Line::from(format!(" {} {} ", i + 1, m.display_name())))
        .collect();

    let greeting = app
        .name
        .as_deref()
        .map_or_else(|| " pomotodo ".to_string(), |name| format!(" {name}'s Pomodoro Timer "));

    let tabs = Tabs::new(titles)
        .select(mode.index())
        .highlight_style(
            Style::default()
                .fg(mode_color(mode))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(mode_color(mode)))
                .title(greeting),
        );

    frame.render_widget(tabs, area);
}

fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.pomodoro.session();
    let remaining = session.remaining_seconds();
    let state = if session.is_running() {
        "running".to_string()
    } else if let Some(left) = session.pending_auto_start() {
        format!("starting in {left}s")
    } else {
        "paused".to_string()
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({state}) ", session.mode()))
                .title_alignment(Alignment::Center),
        )
        .gauge_style(Style::default().fg(mode_color(session.mode())).bg(Color::Black))
        .label(Span::styled(
            format_clock(remaining),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .ratio(progress(remaining, session.total_seconds()));

    frame.render_widget(gauge, area);
}

fn render_session_info(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let idle_hint = if app.pomodoro.session().mode().is_break() {
        "Take a break"
    } else {
        "Select a task"
    };
    let task = app
        .pomodoro
        .current_task_text()
        .map_or_else(|| idle_hint.to_string(), str::to_string);

    let line = Line::from(vec![
        Span::styled(
            format!(" Session {}  ", app.pomodoro.session().session_count()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(task, Style::default().fg(Color::Yellow)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_tasks(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .tasks()
        .iter()
        .map(|task| {
            let status_icon = if task.completed { "[x]" } else { "[ ]" };

            let mut text_style = Style::default();
            if task.completed {
                text_style = text_style
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT);
            }

            let mut spans = vec![
                Span::styled(
                    format!("{status_icon} "),
                    Style::default().fg(if task.completed {
                        Color::Green
                    } else {
                        Color::White
                    }),
                ),
                Span::styled(task.text.as_str(), text_style),
            ];

            if task.selected {
                spans.push(Span::styled(
                    "  ◀ current",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(
        " Tasks ({} open / {}) ",
        app.pomodoro.tasks().open_count(),
        app.tasks().len()
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    if !app.tasks().is_empty() {
        state.select(Some(app.cursor));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_task_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let input = Paragraph::new(format!("{}_", app.task_input)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" New task (Enter to add, Esc to cancel) "),
    );

    frame.render_widget(input, area);
}

fn render_stats(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let stats = app.pomodoro.session().stats();
    let text = format!(
        " Sessions: {}   Focus time: {}   Tasks done: {}",
        stats.completed_focus_sessions,
        format_hours_minutes(stats.total_focus_minutes),
        stats.completed_tasks
    );

    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Green)),
        area,
    );
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (text, style) = app.status.as_deref().map_or_else(
        || (HELP_HINT, Style::default().fg(Color::DarkGray)),
        |s| (s, Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_settings(frame: &mut Frame<'_>, app: &App) {
    let Some(editor) = &app.settings_editor else {
        return;
    };

    let lines: Vec<Line<'_>> = SettingsField::ALL
        .iter()
        .map(|&field| {
            let focused = field == editor.field;
            let marker = if focused { "▶ " } else { "  " };
            let style = if focused {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<18}", field.label()), style),
                Span::styled(editor.value(field), style),
            ])
        })
        .chain(std::iter::once(Line::from(Span::styled(
            "Tab:next  space:toggle  Enter:save  Esc:cancel",
            Style::default().fg(Color::DarkGray),
        ))))
        .collect();

    let area = centered(frame.area(), 50, 9);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Settings "),
        ),
        area,
    );
}

/// A rectangle of at most `width` x `height` centred in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
