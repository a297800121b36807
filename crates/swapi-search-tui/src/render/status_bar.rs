use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(frame: &mut Frame, area: Rect) {
    let hint_style = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled(" type", hint_style),
        Span::styled(" search  ", hint_style),
        Span::styled("\u{2191}\u{2193}", hint_style),
        Span::styled(" move  ", hint_style),
        Span::styled("\u{23ce}", hint_style), // ⏎ Enter symbol
        Span::styled(" expand  ", hint_style),
        Span::styled("esc", hint_style),
        Span::styled(" clear  ", hint_style),
        Span::styled("^c", hint_style),
        Span::styled(" quit", hint_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
