//! Board rendering: three status columns plus mode-dependent bottom bar.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::models::Status;

use super::app::{BoardApp, Mode};

/// Column header color per status (todo red, progress yellow, done green).
pub fn column_color(status: Status) -> Color {
    match status {
        Status::Todo => Color::Red,
        Status::Progress => Color::Yellow,
        Status::Done => Color::Green,
    }
}

/// Render the whole board.
pub fn render(app: &BoardApp, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Columns
            Constraint::Length(1), // Toast line
            Constraint::Length(3), // Bottom bar
        ])
        .split(frame.area());

    render_columns(app, frame, chunks[0]);
    render_toast(app, frame, chunks[1]);
    render_bottom_bar(app, frame, chunks[2]);
}

fn render_columns(app: &BoardApp, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (idx, status) in Status::ALL.into_iter().enumerate() {
        render_column(app, frame, columns[idx], status, idx);
    }
}

fn render_column(app: &BoardApp, frame: &mut Frame, area: Rect, status: Status, idx: usize) {
    let tasks = app.store.by_status(status);
    let dragging = app.dragging();

    // Highlight the drop target while dragging, the selected column otherwise
    let is_drop_target = dragging.is_some_and(|(_, target)| target == status);
    let is_selected_column = dragging.is_none() && app.selected_column == idx;

    let border_style = if is_drop_target {
        Style::default()
            .fg(column_color(status))
            .add_modifier(Modifier::BOLD)
    } else if is_selected_column {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = Line::from(Span::styled(
        format!(" {} ({}) ", status.label(), tasks.len()),
        Style::default()
            .fg(column_color(status))
            .add_modifier(Modifier::BOLD),
    ));

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let is_dragged = dragging.is_some_and(|(id, _)| id == task.id);
            let text = match &app.mode {
                // Inline edit shows the scratch copy in place of the name
                Mode::Editing { task_id, scratch } if *task_id == task.id => {
                    format!("{}▏", scratch)
                }
                _ => task.name.clone(),
            };
            let style = if is_dragged {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let mut state = ListState::default();
    if is_selected_column && !tasks.is_empty() {
        state.select(Some(app.selected_row.min(tasks.len() - 1)));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_toast(app: &BoardApp, frame: &mut Frame, area: Rect) {
    if let Some(toast) = app.toasts.visible() {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {} {}", toast.level.icon(), toast.message),
            Style::default()
                .fg(toast.level.color())
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(line, area);
    }
}

fn render_bottom_bar(app: &BoardApp, frame: &mut Frame, area: Rect) {
    let text = match &app.mode {
        Mode::Normal => {
            " h/l:Column  j/k:Task  Space:Grab  n:New  e:Edit  d:Delete  q:Quit".to_string()
        }
        Mode::Dragging { task_id, .. } => {
            let name = app
                .store
                .get(task_id)
                .map(|t| t.name.clone())
                .unwrap_or_default();
            format!(" Dragging \"{}\" - h/l:Choose column  Space:Drop  Esc:Cancel", name)
        }
        Mode::Editing { .. } => " Rename - Enter:Confirm  Esc:Cancel".to_string(),
        Mode::Creating { scratch } => format!(" New task: {}▏  (Enter:Create  Esc:Cancel)", scratch),
        Mode::ConfirmDelete { task_id } => {
            let name = app
                .store
                .get(task_id)
                .map(|t| t.name.clone())
                .unwrap_or_default();
            format!(" Delete \"{}\"? [y/N]", name)
        }
    };

    let bar = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}
