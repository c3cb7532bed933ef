use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use gwanak_core::{content::SiteContent, AppConfig};
use gwanak_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    load_theme,
    widgets::{HelpWidget, PageWidget, StatusBarWidget, TopBarWidget},
};

/// Rows taken by the top bar and the status bar
const CHROME_ROWS: u16 = 2;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);
    let content = Arc::new(SiteContent::builtin());
    let app = App::new(config.clone(), theme, content, Instant::now())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Seoul National University"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("TUI started");
    let result = main_loop(&mut terminal, app, &keymap, &config).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("TUI stopped");

    result
}

async fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    keymap: &Keymap,
    config: &AppConfig,
) -> Result<()> {
    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = true;

    loop {
        let now = Instant::now();
        let size = terminal.size()?;
        app.set_viewport_height(size.height.saturating_sub(CHROME_ROWS), now);
        app.update(now);

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Top bar
                    Constraint::Min(1),    // Page
                    Constraint::Length(1), // Status bar
                ])
                .split(frame.area());

            TopBarWidget::render(frame, chunks[0], &app);
            PageWidget::render(frame, chunks[1], &app, now);
            StatusBarWidget::render(frame, chunks[2], &app);

            if app.mode == Mode::Help {
                HelpWidget::render(frame, &app, keymap);
            }
        })?;

        if let Some(event) = event_handler.next(needs_fast_update)? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    // Any key press replaces the last status message
                    app.status_message = None;
                    let action = handle_key_event(key, &app, keymap);
                    app.handle_action(action, now);
                }
                AppEvent::Resize(_, height) => {
                    app.set_viewport_height(height.saturating_sub(CHROME_ROWS), now);
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    app.shutdown().await;
    Ok(())
}
