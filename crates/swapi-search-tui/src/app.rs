use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use swapi_search::{Character, SearchError, SearchPhase, SearchQuery, SearchState};

use crate::action::{Action, AppCommand};
use crate::input::SearchInput;
use crate::list::{self, ListRow, SelectableList};

/// Number of frames in the loading spinner.
pub const SPINNER_FRAMES: usize = 10;

/// Tracks clickable regions for mouse hit testing.
#[derive(Debug, Clone, Default)]
pub struct LayoutGeometry {
    /// Area of the results list (below the count line, inside borders).
    pub list_inner: Rect,
}

/// The TUI application state. This is a pure state machine:
/// inputs produce commands (side effects), actions update state.
pub struct App {
    /// Label of the catalog being searched, for the title bar.
    pub source_label: String,
    /// Query text as typed.
    pub input: SearchInput,
    /// Results, loading flag, error and has-searched flag.
    pub search: SearchState,
    /// Which record is expanded.
    pub list: SelectableList,
    /// Highlighted record index in `search.results`.
    pub cursor: usize,
    /// Viewport scroll offset for the results list, in rows.
    pub list_scroll_offset: usize,
    /// Current loading spinner frame.
    pub spinner_frame: usize,

    /// Layout geometry for mouse hit testing.
    pub layout_geometry: LayoutGeometry,

    /// Generation of the most recently issued search.
    generation: u64,
    /// Generation of the search currently running, if any.
    in_flight: Option<u64>,
    /// Query that arrived while a search was running.
    queued: Option<SearchQuery>,
}

impl App {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            input: SearchInput::new(),
            search: SearchState::new(),
            list: SelectableList::new(),
            cursor: 0,
            list_scroll_offset: 0,
            spinner_frame: 0,
            layout_geometry: LayoutGeometry::default(),
            generation: 0,
            in_flight: None,
            queued: None,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.search.phase()
    }

    /// Whether a search call is running right now. This can be true while
    /// the phase is `Idle`, when the query was cleared mid-flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Handle a terminal event, returning a command for the event loop.
    pub fn handle_event(&mut self, event: Event) -> AppCommand {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => AppCommand::None,
        }
    }

    /// Handle an action from a timer or background task.
    pub fn handle_action(&mut self, action: Action) -> AppCommand {
        match action {
            Action::SearchRequested(query) => self.request_search(query),
            Action::SearchCompleted { generation, result } => {
                self.complete_search(generation, result)
            }
        }
    }

    /// Tick the app forward (called on interval). Animates the spinner.
    pub fn tick(&mut self) {
        if self.search.loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES;
        }
    }

    /// Flattened rows of the current result list.
    pub fn rows(&self) -> Vec<ListRow> {
        self.list.rows(&self.search.results)
    }

    /// The highlighted record, if results are showing.
    pub fn highlighted(&self) -> Option<&Character> {
        self.search.results.get(self.cursor)
    }

    /// Toggle the expansion of record `index`.
    pub fn toggle(&mut self, index: usize) {
        if let Some(character) = self.search.results.get(index) {
            let key = character.id();
            self.list.toggle(&key);
            self.cursor = index;
        }
    }

    /// Keep the highlighted record visible in a list `visible_height` rows tall.
    pub fn update_scroll(&mut self, visible_height: usize) {
        let rows = self.rows();
        let Some((start, end)) = list::record_span(&rows, self.cursor) else {
            self.list_scroll_offset = 0;
            return;
        };
        if visible_height == 0 {
            return;
        }

        if start < self.list_scroll_offset {
            self.list_scroll_offset = start;
        } else if end >= self.list_scroll_offset + visible_height {
            self.list_scroll_offset = (end + 1 - visible_height).min(start);
        }

        let max_offset = rows.len().saturating_sub(visible_height);
        self.list_scroll_offset = self.list_scroll_offset.min(max_offset);
    }

    fn handle_key(&mut self, key: KeyEvent) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => AppCommand::Quit,
                KeyCode::Char('u') => self.clear_input(),
                _ => AppCommand::None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                if self.input.is_empty() {
                    AppCommand::Quit
                } else {
                    self.clear_input()
                }
            }
            KeyCode::Backspace => {
                if self.input.pop() {
                    self.input_changed()
                } else {
                    AppCommand::None
                }
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.input_changed()
            }
            KeyCode::Down => {
                self.move_cursor_down();
                AppCommand::None
            }
            KeyCode::Up => {
                self.move_cursor_up();
                AppCommand::None
            }
            KeyCode::Enter => {
                if self.phase() == SearchPhase::Success {
                    self.toggle(self.cursor);
                }
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> AppCommand {
        let pos = Position::new(mouse.column, mouse.row);
        if !self.layout_geometry.list_inner.contains(pos) {
            return AppCommand::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_list_click(mouse.row);
                AppCommand::None
            }
            MouseEventKind::ScrollDown => {
                self.move_cursor_down();
                AppCommand::None
            }
            MouseEventKind::ScrollUp => {
                self.move_cursor_up();
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_list_click(&mut self, row: u16) {
        if self.phase() != SearchPhase::Success {
            return;
        }

        let inner = self.layout_geometry.list_inner;
        let relative_row = row.saturating_sub(inner.y) as usize;
        let rows = self.rows();

        match rows.get(self.list_scroll_offset + relative_row) {
            Some(ListRow::Header { index }) => self.toggle(*index),
            Some(ListRow::Detail { index, .. }) => self.cursor = *index,
            None => {}
        }
    }

    fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.search.results.len() {
            self.cursor += 1;
        }
    }

    fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn clear_input(&mut self) -> AppCommand {
        self.input.clear();
        self.input_changed()
    }

    fn input_changed(&self) -> AppCommand {
        AppCommand::InputChanged(self.input.value().to_owned())
    }

    fn request_search(&mut self, query: SearchQuery) -> AppCommand {
        if query.is_empty() {
            tracing::debug!("empty query, resetting search");
            self.search.reset();
            self.queued = None;
            self.replace_list();
            return AppCommand::None;
        }

        self.search.begin();

        if self.in_flight.is_some() {
            tracing::debug!(%query, "search in flight, queueing");
            self.queued = Some(query);
            return AppCommand::None;
        }

        self.issue(query)
    }

    fn issue(&mut self, query: SearchQuery) -> AppCommand {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        tracing::debug!(%query, generation = self.generation, "issuing search");
        AppCommand::Search {
            generation: self.generation,
            query,
        }
    }

    fn complete_search(
        &mut self,
        generation: u64,
        result: Result<Vec<Character>, SearchError>,
    ) -> AppCommand {
        if self.in_flight != Some(generation) {
            return AppCommand::None;
        }
        self.in_flight = None;

        // A newer query arrived while this one ran; its result is stale.
        if let Some(query) = self.queued.take() {
            return self.issue(query);
        }

        // The query was cleared while this one ran.
        if !self.search.loading {
            return AppCommand::None;
        }

        match result {
            Ok(characters) => {
                tracing::debug!(count = characters.len(), "search succeeded");
                self.search.succeed(characters);
            }
            Err(error) => {
                tracing::warn!(%error, "search failed");
                self.search.fail(&error);
            }
        }
        self.replace_list();
        AppCommand::None
    }

    /// A wholly new record set: drop the selection and highlight the top.
    fn replace_list(&mut self) {
        self.list.clear();
        self.cursor = 0;
        self.list_scroll_offset = 0;
    }
}
