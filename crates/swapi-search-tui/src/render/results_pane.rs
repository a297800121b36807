use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};
use ratatui::Frame;

use crate::app::App;
use crate::list::ListRow;
use crate::view::{self, ResultView};

const SPINNER: [&str; crate::app::SPINNER_FRAMES] =
    ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title(" Characters ")
}

/// Split the pane's inner area into the count line and the list.
pub fn areas(inner: Rect) -> (Rect, Rect) {
    let [count, list] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    (count, list)
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(Color::DarkGray);

    match ResultView::of(&app.search) {
        ResultView::Searching => {
            let spinner = SPINNER[app.spinner_frame % SPINNER.len()];
            let line = Line::from(vec![
                Span::styled(format!("{spinner} "), Style::default().fg(Color::Yellow)),
                Span::styled("Searching the galaxy...", dim),
            ]);
            frame.render_widget(Paragraph::new(line), inner);
        }
        ResultView::Error(message) => {
            let paragraph = Paragraph::new(format!("\u{26a0} {message}"))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, inner);
        }
        ResultView::Prompt => {
            frame.render_widget(Paragraph::new("Search for a character above").style(dim), inner);
        }
        ResultView::NoResults => {
            frame.render_widget(Paragraph::new("No characters found").style(dim), inner);
        }
        ResultView::Results(characters) => {
            let (count_area, list_area) = areas(inner);
            let count = Paragraph::new(view::count_label(characters.len())).style(dim);
            frame.render_widget(count, count_area);
            render_list(frame, list_area, app);
        }
    }
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let visible_height = area.height as usize;
    if visible_height == 0 {
        return;
    }

    let rows = app.rows();
    let lines: Vec<Line> = rows
        .iter()
        .skip(app.list_scroll_offset)
        .take(visible_height)
        .map(|row| render_row(row, app))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);

    // Render scrollbar if content exceeds visible height.
    if rows.len() > visible_height {
        let mut scrollbar_state = ScrollbarState::new(rows.len())
            .position(app.list_scroll_offset)
            .viewport_content_length(visible_height);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn render_row<'a>(row: &ListRow, app: &'a App) -> Line<'a> {
    let Some(character) = app.search.results.get(row.index()) else {
        return Line::from("???");
    };

    match row {
        ListRow::Header { index } => {
            let expanded = app.list.is_selected(character);
            let icon = if expanded { "\u{25be}" } else { "\u{25b8}" };
            let style = if *index == app.cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(format!("{icon} {}", character.name), style))
        }
        ListRow::Detail { field, .. } => {
            let label_style = Style::default().fg(Color::Yellow);
            Line::from(vec![
                Span::styled(format!("    {:<12}", field.label()), label_style),
                Span::styled(field.value(character), Style::default().fg(Color::White)),
            ])
        }
    }
}
