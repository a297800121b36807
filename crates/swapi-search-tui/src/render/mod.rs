mod results_pane;
mod search_bar;
mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, LayoutGeometry};

/// Title bar (1), search box (3), results, bottom bar (1).
fn outer_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area)
}

pub fn render(frame: &mut Frame, app: &App) {
    let outer = outer_layout(frame.area());

    render_title_bar(frame, outer[0], app);
    search_bar::render(frame, outer[1], app);
    results_pane::render(frame, outer[2], app);
    status_bar::render(frame, outer[3]);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled(" Star Wars Character Search", title_style),
        Span::raw("  "),
        Span::styled(format!("[{}]", app.source_label), label_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Compute layout geometry for mouse hit testing.
/// This mirrors the layout calculations in render() but returns Rect values.
pub fn compute_layout(frame_size: Rect) -> LayoutGeometry {
    let outer = outer_layout(frame_size);
    let inner = results_pane::block().inner(outer[2]);
    let (_, list_inner) = results_pane::areas(inner);

    LayoutGeometry { list_inner }
}
