pub mod app;
pub mod datepicker;
pub mod fleet;
pub mod help;
pub mod menu;
pub mod orders;
pub mod settings;
pub mod view;
pub mod widgets;

pub use app::{AppState, CurrentTab};

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::config::DisplayConfig;
use crate::provider::MerchantDataProvider;
use crate::types::SharedDataHandle;

/// Raw-mode terminal with the alternate screen and mouse capture, restored
/// on drop so panics and early returns cannot leave the shell unusable.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(TerminalSession { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Main entry point for TUI mode
pub async fn run(
    provider: Arc<dyn MerchantDataProvider>,
    shared_data: SharedDataHandle,
    refresh_tx: mpsc::Sender<()>,
) -> Result<()> {
    let mut session = TerminalSession::acquire()?;
    let mut app = AppState::new();

    loop {
        let data = shared_data.read().await.clone();
        let display = DisplayConfig::from_config(&data.config);
        app.orders.clamp_selection(data.orders.len());
        app.menu.clamp_selection(data.menu.len());
        app.fleet.clamp_selection(data.slots.len());

        session
            .terminal
            .draw(|f| view::draw(f, &mut app, &data, &display))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                handle_key(key, &mut app, &provider, &shared_data, &refresh_tx).await;
            }
            Event::Mouse(mouse) => {
                if app.current_tab == CurrentTab::Orders {
                    orders::handler::handle_mouse(mouse, &mut app.orders, &shared_data, &refresh_tx)
                        .await;
                }
            }
            _ => {}
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

async fn handle_key(
    key: event::KeyEvent,
    app: &mut AppState,
    provider: &Arc<dyn MerchantDataProvider>,
    shared_data: &SharedDataHandle,
    refresh_tx: &mpsc::Sender<()>,
) {
    // An open popover owns the keyboard
    if app.popover_open() {
        orders::handler::handle_key(key, &mut app.orders, provider, shared_data, refresh_tx).await;
        return;
    }

    let handled = match app.current_tab {
        CurrentTab::Orders => {
            orders::handler::handle_key(key, &mut app.orders, provider, shared_data, refresh_tx)
                .await
        }
        CurrentTab::Menu => {
            menu::handler::handle_key(key, &mut app.menu, provider, shared_data, refresh_tx).await
        }
        CurrentTab::Fleet => fleet::handler::handle_key(key, &mut app.fleet, shared_data).await,
        CurrentTab::Help | CurrentTab::Settings => false,
    };
    if handled {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('r') => {
            let _ = refresh_tx.send(()).await;
        }
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Right => app.next_tab(),
        KeyCode::Left => app.previous_tab(),
        KeyCode::Char(c) => {
            if let Some(tab) = CurrentTab::from_digit(c) {
                app.current_tab = tab;
            }
        }
        _ => {}
    }
}
