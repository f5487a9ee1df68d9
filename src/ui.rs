//! TUI rendering module

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use tsugi_core::Task;

use crate::app::{App, DialogField, DialogMode};

pub fn draw(f: &mut Frame, app: &App) {
    // Main horizontal layout: category sidebar + content
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Length(24), // Sidebar
            Constraint::Min(40),    // Content
        ])
        .split(f.area());

    draw_sidebar(f, app, main_chunks[0]);

    // Content area: task list + status + controls
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Task list
            Constraint::Length(3), // Status bar
            Constraint::Length(3), // Controls
        ])
        .split(main_chunks[1]);

    draw_task_list(f, app, content_chunks[0]);
    draw_status_bar(f, app, content_chunks[1]);
    draw_controls(f, app, content_chunks[2]);

    // Draw dialogs on top
    match &app.dialog {
        DialogMode::None => {}
        DialogMode::AddTask {
            text,
            category,
            field,
        } => draw_add_dialog(f, text, category, *field),
        DialogMode::Help => draw_help_dialog(f),
    }

    if let Some(msg) = &app.message {
        draw_message(f, msg);
    }
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.sidebar_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items: Vec<ListItem> = app
        .store
        .categories()
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let is_cursor = app.sidebar_focused && app.sidebar_selection == i;
            let is_active = app.store.selected_category() == category;
            let style = if is_cursor {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let count = app.store.count_in_category(category);
            ListItem::new(format!("{} ({})", category, count)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Categories ")
            .border_style(border_style),
    );

    f.render_widget(list, area);
}

fn draw_task_list(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Tasks ({}) ", app.store.selected_category()))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan));

    let tasks = app.visible_tasks();

    if tasks.is_empty() {
        let empty = Paragraph::new("No tasks found.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.selected_index && !app.sidebar_focused;
            create_task_item(task, is_selected)
        })
        .collect();

    let list = List::new(items).block(block);

    f.render_widget(list, area);
}

fn create_task_item(task: &Task, is_selected: bool) -> ListItem<'static> {
    let checkbox = if task.completed { "[✓]" } else { "[ ]" };

    let text_style = if task.completed {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let spans = vec![
        Span::styled(
            format!("{} ", checkbox),
            if task.completed {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            },
        ),
        Span::styled(task.text.clone(), text_style),
        Span::styled(
            format!(" [{}]", task.category),
            Style::default().fg(Color::Cyan),
        ),
    ];

    let style = if is_selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(spans)).style(style)
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let total = app.store.len();
    let done = app.store.completed_count();

    let status = vec![
        Span::raw(" "),
        Span::styled(format!("{} total", total), Style::default()),
        Span::raw(" | "),
        Span::styled(format!("{} done", done), Style::default().fg(Color::Green)),
        Span::raw(" | "),
        Span::styled(
            format!("filter: {}", app.store.selected_category()),
            Style::default().fg(Color::Yellow),
        ),
    ];

    let paragraph = Paragraph::new(Line::from(status))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_controls(f: &mut Frame, _app: &App, area: Rect) {
    let controls = vec![
        Span::styled("↑↓", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(":Nav "),
        Span::styled("Space", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(":Toggle "),
        Span::styled("a", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(":Add "),
        Span::styled("d", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(":Del "),
        Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(":Filter "),
        Span::styled("?", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(":Help "),
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(":Quit"),
    ];

    let paragraph = Paragraph::new(Line::from(controls))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Controls ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_add_dialog(f: &mut Frame, text: &str, category: &str, field: DialogField) {
    let area = centered_rect(50, 35, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(inner);

    let text_style = if field == DialogField::Text {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let category_style = if field == DialogField::Category {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let text_cursor = if field == DialogField::Text { "_" } else { "" };
    let category_cursor = if field == DialogField::Category { "_" } else { "" };

    let text_input = Paragraph::new(format!("Task: {}{}", text, text_cursor))
        .style(text_style)
        .wrap(Wrap { trim: false });
    f.render_widget(text_input, chunks[0]);

    let category_input = Paragraph::new(format!(
        "Category: {}{} (Tab to switch)",
        category, category_cursor
    ))
    .style(category_style)
    .wrap(Wrap { trim: false });
    f.render_widget(category_input, chunks[1]);

    let hint = Paragraph::new("Enter to add, Esc to cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[2]);
}

fn draw_help_dialog(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());

    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ or j/k  Move selection"),
        Line::from("  Tab/h/l     Switch between categories and tasks"),
        Line::from("  g/G         Go to top/bottom"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Task Actions",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Space/Enter Toggle completion"),
        Line::from("  a           Add new task"),
        Line::from("  d/Delete    Delete selected task"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Categories",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Enter/Space Apply highlighted category filter"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?           Toggle this help"),
        Line::from("  q/Esc       Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn draw_message(f: &mut Frame, message: &str) {
    let area = Rect {
        x: 2,
        y: f.area().height - 2,
        width: f.area().width - 4,
        height: 1,
    };

    let msg = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);

    f.render_widget(msg, area);
}

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
