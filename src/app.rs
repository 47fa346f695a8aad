use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use crate::api::client::DirectoryClient;
use crate::api::gate::{FetchOutcome, RequestGate};
use crate::constants::*;
use crate::domain::debounce::Debouncer;
use crate::domain::models::{Mode, SearchParams};
use crate::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// Interactive directory session: one terminal, one state container, one
/// request gate.
pub struct DirectoryApp {
    state: AppState,
    renderer: Renderer,
    gate: RequestGate<DirectoryClient>,
    outcomes: Receiver<FetchOutcome>,
    debouncer: Debouncer,
    limit: u32,
    last_ctrl_c_press: Option<Instant>,
    status_clear_deadline: Option<Instant>,
}

impl DirectoryApp {
    pub fn new(
        client: DirectoryClient,
        runtime: tokio::runtime::Handle,
        debounce_window: Duration,
        limit: u32,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        let gate = RequestGate::new(Arc::new(client), runtime, outcome_tx);

        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            gate,
            outcomes: outcome_rx,
            debouncer: Debouncer::new(debounce_window),
            limit,
            last_ctrl_c_press: None,
            status_clear_deadline: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        // Initial listing fires immediately: the debounced term starts as
        // the (empty) raw term with no delay
        self.dispatch(Message::DebounceElapsed);

        let result = self.run_app(&mut terminal);

        // Teardown: no dangling updates after this point
        self.gate.cancel();
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Settled fetches; stale and cancelled settlements are refused
            // by the gate and dropped here
            while let Ok(outcome) = self.outcomes.try_recv() {
                if self.gate.accept(outcome.id) {
                    if self.dispatch(Message::FetchCompleted(outcome.result)) {
                        return Ok(());
                    }
                }
            }

            let now = Instant::now();
            if self.debouncer.poll(now) && self.dispatch(Message::DebounceElapsed) {
                return Ok(());
            }

            if let Some(deadline) = self.status_clear_deadline {
                if now >= deadline {
                    self.status_clear_deadline = None;
                    self.dispatch(Message::ClearStatus);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns `true` when the application should exit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Double Ctrl+C to exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.dispatch(Message::SetStatus("Press Ctrl+C again to exit".to_string()));
            return false;
        }

        // User-initiated reload, the sole recovery mechanism after an error
        if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.dispatch(Message::Refetch);
        }

        if key.code == KeyCode::Char('?') && self.state.mode != Mode::Help {
            return self.dispatch(Message::ShowHelp);
        }

        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::EmployeeDetail => self.renderer.employee_detail_mut().handle_key(key),
            Mode::Help => self.renderer.help_dialog_mut().handle_key(key),
        };

        match message {
            Some(message) => self.dispatch(message),
            None => false,
        }
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.renderer.filter_bar_mut().handle_key(key),
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Enter => self.renderer.employee_list_mut().handle_key(key),
            KeyCode::Esc => {
                if self.state.search.raw_term.is_empty() {
                    Some(Message::Quit)
                } else {
                    Some(Message::ClearQuery)
                }
            }
            _ => self.renderer.search_bar_mut().handle_key(key),
        }
    }

    /// Runs one state transition and its side effects. Returns `true` when
    /// the transition requested an exit.
    fn dispatch(&mut self, message: Message) -> bool {
        let command = self.state.update(message);
        self.execute_command(command)
    }

    fn execute_command(&mut self, command: Command) -> bool {
        match command {
            Command::None => false,
            Command::ScheduleFetch => {
                self.debouncer.arm(Instant::now());
                false
            }
            Command::ExecuteFetch => {
                let params = SearchParams {
                    term: self.state.search.debounced_term.trim().to_string(),
                    limit: self.limit,
                    offset: 0,
                };
                self.gate.issue(params);
                false
            }
            Command::ScheduleClearStatus(delay_ms) => {
                self.status_clear_deadline = Some(Instant::now() + Duration::from_millis(delay_ms));
                false
            }
            Command::Quit => true,
        }
    }
}
