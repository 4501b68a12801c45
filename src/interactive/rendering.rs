//! TUI rendering with ratatui
//!
//! Single screen: root word as the title, text field, used words, messages.

use super::app::{App, MessageStyle};
use crate::output::formatters::letter_badge;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<O>(f: &mut Frame, app: &App<O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input area
            Constraint::Min(6),    // Used words + messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_used_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header<O>(f: &mut Frame, app: &App<O>, area: Rect) {
    let title = app.session.snapshot().map_or_else(
        || "WORD SCRAMBLE".to_string(),
        |s| s.root_word.as_str().to_uppercase(),
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Root Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<O>(f: &mut Frame, app: &App<O>, area: Rect) {
    let content = if app.input_buffer.is_empty() {
        Line::from(Span::styled(
            "enter your word",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.input_buffer.as_str())
    };

    let input = Paragraph::new(content)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Your Word | Enter to submit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_used_words<O>(f: &mut Frame, app: &App<O>, area: Rect) {
    let used_words = app.session.snapshot().map_or(&[][..], |s| s.used_words);

    let items: Vec<ListItem> = used_words
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(letter_badge(word), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Used Words ({}) ", used_words.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_messages<O>(f: &mut Frame, app: &App<O>, area: Rect) {
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

fn render_status<O>(f: &mut Frame, _app: &App<O>, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Ctrl-N: New Word | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
