use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

const PLACEHOLDER: &str = "Search for a character...";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Search ");

    let prompt = Span::styled(
        " / ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let line = if app.input.is_empty() {
        Line::from(vec![
            prompt,
            Span::raw(" "),
            Span::styled("\u{2588}", Style::default().fg(Color::Yellow)), // block cursor
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::raw(" "),
            Span::styled(app.input.value(), Style::default().fg(Color::White)),
            Span::styled("\u{2588}", Style::default().fg(Color::Yellow)),
        ])
    };

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
