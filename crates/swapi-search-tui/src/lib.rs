pub mod action;
pub mod app;
pub mod debounce;
pub mod input;
pub mod list;
mod render;
pub mod view;

use std::sync::Arc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use swapi_search::{CharacterSource, SearchQuery};
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};

use crate::action::{Action, AppCommand};
use crate::app::App;
use crate::debounce::{DEFAULT_QUIET_PERIOD, Debouncer};

/// Options the host passes to [`run`].
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Quiet period after the last keystroke before a search fires.
    pub quiet_period: Duration,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }
}

/// Launch the interactive TUI. Returns when the user quits.
pub async fn run(source: Arc<dyn CharacterSource>, options: TuiOptions) -> anyhow::Result<()> {
    // Terminal setup.
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, source, options).await;

    // Terminal teardown (always runs).
    disable_raw_mode()?;
    std::io::stdout().execute(DisableMouseCapture)?;
    std::io::stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    source: Arc<dyn CharacterSource>,
    options: TuiOptions,
) -> anyhow::Result<()> {
    use futures::StreamExt;

    let mut app = App::new(source.label());

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(32);
    let mut effects = Effects::new(source, action_tx, options.quiet_period);
    let mut event_stream = EventStream::new();
    let mut tick_interval = interval(Duration::from_millis(250));

    loop {
        // Compute layout geometry for mouse hit testing before render.
        let size = terminal.size()?;
        let frame_rect = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        app.layout_geometry = render::compute_layout(frame_rect);
        app.update_scroll(app.layout_geometry.list_inner.height as usize);

        // Render.
        terminal.draw(|frame| render::render(frame, &app))?;

        // Wait for next event.
        let command = tokio::select! {
            Some(event_result) = event_stream.next() => {
                match event_result {
                    Ok(event) => {
                        // Filter events: only key press (not release/repeat) and mouse events.
                        match &event {
                            Event::Key(key) if key.kind != KeyEventKind::Press => continue,
                            Event::Key(_) | Event::Mouse(_) => {}
                            _ => continue,
                        }
                        app.handle_event(event)
                    }
                    Err(_) => continue,
                }
            }
            Some(action) = action_rx.recv() => {
                app.handle_action(action)
            }
            _ = tick_interval.tick() => {
                app.tick();
                AppCommand::None
            }
        };

        if !effects.execute(command) {
            break;
        }
    }

    // Dropping `effects` cancels any pending debounce; dropping `action_rx`
    // turns late search results into no-ops.
    Ok(())
}

/// Executes the side effects the app asks for.
///
/// Owns the debounce timer and spawns searches; everything it produces
/// comes back to the app as an [`Action`] on the channel.
pub struct Effects {
    source: Arc<dyn CharacterSource>,
    action_tx: mpsc::Sender<Action>,
    debouncer: Debouncer<Action>,
}

impl Effects {
    pub fn new(
        source: Arc<dyn CharacterSource>,
        action_tx: mpsc::Sender<Action>,
        quiet_period: Duration,
    ) -> Self {
        let debouncer = Debouncer::new(quiet_period, action_tx.clone());
        Self {
            source,
            action_tx,
            debouncer,
        }
    }

    /// Run `command`. Returns `false` once the app asked to quit.
    pub fn execute(&mut self, command: AppCommand) -> bool {
        match command {
            AppCommand::None => {}
            AppCommand::Quit => return false,
            AppCommand::InputChanged(raw) => {
                self.debouncer
                    .schedule(Action::SearchRequested(SearchQuery::new(&raw)));
            }
            AppCommand::Search { generation, query } => {
                let source = Arc::clone(&self.source);
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let result = source.search(query.as_str()).await;
                    // A closed channel means the app is gone; drop the result.
                    let _ = tx.send(Action::SearchCompleted { generation, result }).await;
                });
            }
        }
        true
    }
}
