//! TUI rendering with ratatui
//!
//! Board entry, found words, and session statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::capitalize;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board and messages
            Constraint::Percentage(55), // Words
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_words(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("BOGGLE SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let board_height = u16::try_from(app.size).unwrap_or(u16::MAX).saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height), // Board
            Constraint::Length(3),            // Fill gauge
            Constraint::Min(3),               // Messages
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_fill(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let letters: Vec<char> = app.letters.chars().collect();
    let next = letters.len();

    let lines: Vec<Line> = (0..app.size)
        .map(|row| {
            let spans: Vec<Span> = (0..app.size)
                .map(|col| {
                    let index = row * app.size + col;
                    match letters.get(index) {
                        Some(&letter) => {
                            let tile = if letter == 'q' {
                                "Qu".to_string()
                            } else {
                                capitalize(&letter.to_string())
                            };
                            Span::styled(
                                format!(" {tile:<3}"),
                                Style::default()
                                    .fg(Color::Yellow)
                                    .add_modifier(Modifier::BOLD),
                            )
                        }
                        None if index == next && app.input_mode == InputMode::Letters => {
                            Span::styled(" _  ", Style::default().fg(Color::Cyan))
                        }
                        None => Span::styled(" ·  ", Style::default().fg(Color::DarkGray)),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = format!(" Board {}x{} ", app.size, app.size);
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_fill(f: &mut Frame, app: &App, area: Rect) {
    let filled = app.letters.len();
    let cells = app.cell_count();
    let percent = if cells == 0 {
        0
    } else {
        u16::try_from(filled * 100 / cells).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{filled}/{cells} letters"));

    f.render_widget(gauge, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let Some(solution) = app.solution.as_ref() else {
        let paragraph = Paragraph::new("Solve a board to see its words").block(
            Block::default()
                .title(" Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    };

    let groups = solution.by_length();
    let mut lines: Vec<ListItem> = Vec::new();
    for (len, words) in groups.iter().rev() {
        lines.push(ListItem::new(Line::from(Span::styled(
            format!("{len} letters ({})", words.len()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))));
        for chunk in words.chunks(4) {
            let row: Vec<String> = chunk.iter().map(|w| format!("{:<10}", w.to_uppercase())).collect();
            lines.push(ListItem::new(format!("  {}", row.join(" "))));
        }
    }

    let items: Vec<ListItem> = lines.into_iter().skip(app.scroll).collect();
    let title = format!(" Words ({}) ", solution.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Letters => (
            " Type letters row by row | Enter: Solve | Tab: Random board ",
            app.letters.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::Results => (
            " n: New board | g: Random board | Up/Down: Scroll ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Letters => "Mode: Entering",
        InputMode::Results => "Mode: Results",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Boards: {} | Avg: {:.1}",
        app.stats.boards_solved,
        if app.stats.boards_solved > 0 {
            app.stats.total_words as f64 / app.stats.boards_solved as f64
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let best = Paragraph::new(format!("Best: {} words", app.stats.best_board))
        .alignment(Alignment::Center);
    f.render_widget(best, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Letters => "Esc: Quit | +/-: Size | Del: Clear",
        InputMode::Results => "q: Quit | n: New | g: Roll",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
