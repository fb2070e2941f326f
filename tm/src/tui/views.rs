//! TUI views and rendering

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Wrap};

use super::pagination::{PageToken, page_tokens};
use super::state::{AppState, Mode};

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);
    render_content(state, frame, chunks[1]);
    render_footer(state, frame, chunks[2]);

    if state.mode == Mode::Help {
        render_help_overlay(frame, chunks[1]);
    }
}

/// Render the header bar
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let stats = state.stats();
    let page_count = state.page_count().max(1);

    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "taskman ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(
            format!("page {}/{}", state.page + 1, page_count),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" │ "),
        Span::styled(format!("{} total", stats.total), Style::default().fg(Color::Blue)),
        Span::raw(" │ "),
        Span::styled(
            format!("{} done", stats.completed),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" │ "),
        Span::styled(format!("{} open", stats.remaining), Style::default().fg(Color::Red)),
    ])])
    .block(Block::default().borders(Borders::ALL).title(" Tasks manager "));

    frame.render_widget(header, area);
}

/// Render the main content: task panel on the left, statistics on the right
fn render_content(state: &AppState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Add-task input
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Pagination strip
        ])
        .split(chunks[0]);

    render_input(state, frame, left[0]);
    render_task_list(state, frame, left[1]);
    render_pagination(state, frame, left[2]);

    render_stats(state, frame, chunks[1]);
}

/// Render the new-task input box
fn render_input(state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = state.mode == Mode::NewTask;

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let title = format!(
        " Add your task ({}/{}) ",
        state.input_value.chars().count(),
        state.ui.max_task_len
    );

    let text = if state.input_value.is_empty() && !focused {
        Line::from(Span::styled(
            "Type the text",
            Style::default().fg(Color::DarkGray),
        ))
    } else if focused {
        Line::from(vec![
            Span::raw(state.input_value.as_str()),
            Span::styled("▎", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(state.input_value.as_str())
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    frame.render_widget(input, area);
}

/// Render the visible page of the task list
fn render_task_list(state: &AppState, frame: &mut Frame, area: Rect) {
    let editing_id = match state.mode {
        Mode::EditTask { id } => Some(id),
        _ => None,
    };

    let items: Vec<ListItem> = state
        .visible_tasks()
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let checkbox = if task.completed { "[x] " } else { "[ ] " };

            let mut text_style = Style::default();
            if task.completed {
                // Completed: struck through and dimmed; also edit-locked
                text_style = text_style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
            }
            if task.is_editing || editing_id == Some(task.id) {
                text_style = text_style.fg(Color::Yellow);
            }

            let mut spans = vec![
                Span::styled(checkbox, Style::default().fg(Color::Cyan)),
                Span::styled(task.data.clone(), text_style),
            ];
            if editing_id == Some(task.id) {
                spans.push(Span::styled("▎", Style::default().fg(Color::Yellow)));
            }

            let content = Line::from(spans);
            if i == state.selected && state.mode != Mode::NewTask {
                ListItem::new(content).style(Style::default().bg(Color::DarkGray))
            } else {
                ListItem::new(content)
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Tasks "));

    frame.render_widget(list, area);
}

/// Render the pagination strip; hidden while everything fits on one page
fn render_pagination(state: &AppState, frame: &mut Frame, area: Rect) {
    if state.store.len() <= state.ui.page_size {
        return;
    }

    let tokens = page_tokens(
        state.page_count(),
        state.page,
        state.ui.page_margin,
        state.ui.page_range,
    );

    let mut spans = vec![Span::styled(
        "◀ Prev ",
        if state.page == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        },
    )];

    for token in tokens {
        match token {
            PageToken::Page(i) if i == state.page => {
                spans.push(Span::styled(
                    format!(" {} ", i + 1),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ));
            }
            PageToken::Page(i) => {
                spans.push(Span::raw(format!(" {} ", i + 1)));
            }
            PageToken::Ellipsis => {
                spans.push(Span::styled(" … ", Style::default().fg(Color::DarkGray)));
            }
        }
    }

    spans.push(Span::styled(
        " Next ▶",
        if state.page + 1 == state.page_count() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        },
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the statistics panel
fn render_stats(state: &AppState, frame: &mut Frame, area: Rect) {
    let stats = state.stats();

    let rows = vec![
        Row::new(vec![Cell::from("Total"), Cell::from(stats.total.to_string())]),
        Row::new(vec![Cell::from("Completed"), Cell::from(stats.completed.to_string())]),
        Row::new(vec![Cell::from("Remaining"), Cell::from(stats.remaining.to_string())]),
    ];

    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .block(Block::default().borders(Borders::ALL).title(" Statistics "))
        .header(Row::new(vec!["Metric", "Value"]).style(Style::default().add_modifier(Modifier::BOLD)));

    frame.render_widget(table, area);
}

/// Render the footer bar with key hints for the current mode
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let hints: Vec<(&str, &str)> = match state.mode {
        Mode::NewTask => vec![("Enter", "Add"), ("Esc", "Back"), ("Ctrl+c", "Quit")],
        Mode::EditTask { .. } => vec![("Esc", "Done"), ("Backspace", "Erase")],
        Mode::Help => vec![("Esc", "Close")],
        Mode::Normal => vec![
            ("n", "New"),
            ("e", "Edit"),
            ("Space", "Toggle"),
            ("d", "Delete"),
            ("←→", "Page"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(
            format!(" {}", key),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {} ", label)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("q, Ctrl+c  ", Style::default().fg(Color::Cyan)),
            Span::raw("Quit"),
        ]),
        Line::from(vec![
            Span::styled("?, F1      ", Style::default().fg(Color::Cyan)),
            Span::raw("Toggle help"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Tasks", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from(vec![
            Span::styled("n, a       ", Style::default().fg(Color::Cyan)),
            Span::raw("Add a task (Enter commits, Esc leaves)"),
        ]),
        Line::from(vec![
            Span::styled("e, Enter   ", Style::default().fg(Color::Cyan)),
            Span::raw("Edit the selected task (Esc commits)"),
        ]),
        Line::from(vec![
            Span::styled("Space, x   ", Style::default().fg(Color::Cyan)),
            Span::raw("Toggle completed"),
        ]),
        Line::from(vec![
            Span::styled("d, Del     ", Style::default().fg(Color::Cyan)),
            Span::raw("Delete the selected task"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("↑/↓, j/k   ", Style::default().fg(Color::Cyan)),
            Span::raw("Move the selection"),
        ]),
        Line::from(vec![
            Span::styled("←/→, h/l   ", Style::default().fg(Color::Cyan)),
            Span::raw("Previous / next page"),
        ]),
        Line::from(vec![
            Span::styled("Home/End   ", Style::default().fg(Color::Cyan)),
            Span::raw("First / last page"),
        ]),
        Line::from(vec![
            Span::styled("1-9        ", Style::default().fg(Color::Cyan)),
            Span::raw("Jump to page"),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help, popup_area);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
