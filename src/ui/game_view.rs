use super::app::LocalMessage;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    view: &LocalMessage,
    acting: &str,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Game message
            Constraint::Length(3), // Reactions
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, acting, chunks[0]);
    render_message_body(frame, view, chunks[1]);
    render_reactions(frame, view, selected_column, chunks[2]);
    render_status(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, acting: &str, area: ratatui::layout::Rect) {
    let header = Paragraph::new(format!("Reacting as: {acting}"))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_message_body(frame: &mut Frame, view: &LocalMessage, area: ratatui::layout::Rect) {
    let lines: Vec<Line> = view.content.lines().map(Line::from).collect();
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game message"));

    frame.render_widget(body, area);
}

fn render_reactions(
    frame: &mut Frame,
    view: &LocalMessage,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let spans: Vec<Span> = view
        .selectors
        .iter()
        .enumerate()
        .map(|(i, selector)| {
            if i == selected_column {
                Span::styled(
                    format!(" {selector} "),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            } else {
                Span::raw(format!(" {selector} "))
            }
        })
        .collect();

    let reactions = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Reactions"));

    frame.render_widget(reactions, area);
}

fn render_status(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

const CONTROLS: &str =
    "←/→: Select  |  Enter or key: React  |  Tab: Switch player  |  R: Restart  |  Q: Quit";

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new(Line::from(CONTROLS))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
