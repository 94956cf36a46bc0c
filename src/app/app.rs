//! Main application controller
//!
//! Manages the TUI, navigation state, screen rendering loop, and the
//! session lifecycle (ticker and camera wiring).

use crate::{
    app::{
        screens::{
            home::{FREE_SESSION_LABEL, GUIDED_SESSION_LABEL, MOCK_TEST_LABEL},
            CoachScreen, HomeScreen, SessionScreen, SettingsScreen,
        },
        state::{NavigationAction, NavigationState, Tab, ViewTarget},
        tui::Tui,
    },
    camera::CameraFeed,
    config::AppConfig,
    session::{SessionTick, SessionTicker},
    Result,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Navigation and session state
    nav: NavigationState,
    /// Application config
    config: AppConfig,
    /// Screen components
    home_screen: HomeScreen,
    coach_screen: CoachScreen,
    settings_screen: SettingsScreen,
    session_screen: SessionScreen,
    /// Clock task for the active session
    ticker: Option<SessionTicker>,
    /// Tick receiver
    tick_rx: Option<mpsc::Receiver<SessionTick>>,
    /// Camera feed for the active session
    camera: Option<CameraFeed>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            tui: Tui::new()?,
            nav: NavigationState::new(),
            home_screen: HomeScreen::new(config.default_day),
            coach_screen: CoachScreen::new(),
            settings_screen: SettingsScreen::new(),
            session_screen: SessionScreen::new(),
            config,
            ticker: None,
            tick_rx: None,
            camera: None,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Restore the terminal
    pub fn shutdown(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.nav.should_quit() {
            self.drain_ticks();
            self.draw()?;
            self.handle_events()?;
        }
        self.teardown_session();
        Ok(())
    }

    /// Apply queued clock ticks to the active session
    fn drain_ticks(&mut self) {
        if let Some(rx) = &mut self.tick_rx {
            while rx.try_recv().is_ok() {
                if let Some(session) = self.nav.active_session_mut() {
                    session.tick();
                }
            }
        }
    }

    /// Draw the current render target
    fn draw(&mut self) -> io::Result<()> {
        let Self {
            tui,
            nav,
            home_screen,
            coach_screen,
            settings_screen,
            session_screen,
            camera,
            ..
        } = self;

        tui.draw(|f| match nav.current_view() {
            ViewTarget::Session => {
                if let Some(session) = nav.active_session() {
                    session_screen.render(f, session, camera.as_mut());
                }
            }
            ViewTarget::Tab(Tab::Home) => home_screen.render(f),
            ViewTarget::Tab(Tab::Coach) => coach_screen.render(f),
            ViewTarget::Tab(Tab::Settings) => settings_screen.render(f),
        })
    }

    /// Route keyboard events to the view on screen
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.handle_events()? {
            // Ctrl+C quits from anywhere, including the chat input
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.teardown_session();
                self.nav.quit();
                return Ok(());
            }

            match self.nav.current_view() {
                ViewTarget::Session => self.handle_session_keys(key),
                ViewTarget::Tab(Tab::Home) => self.handle_home_keys(key),
                ViewTarget::Tab(Tab::Coach) => self.handle_coach_keys(key),
                ViewTarget::Tab(Tab::Settings) => self.handle_settings_keys(key),
            }
        }
        Ok(())
    }

    /// Create the session and wire up its ticker and camera
    fn launch_session(&mut self, label: &str) {
        info!(exercise = label, "session started");
        self.nav.start_session(label, self.config.total_reps);

        // Denied permission keeps the session alive with the fallback view
        self.camera = match CameraFeed::open(&self.config) {
            Ok(feed) => Some(feed),
            Err(err) => {
                warn!("{}", err);
                None
            }
        };

        let (tx, rx) = mpsc::channel(32);
        self.ticker = Some(SessionTicker::spawn(tx));
        self.tick_rx = Some(rx);
    }

    /// Discard the session and release the ticker and camera
    ///
    /// Runs on every dismissal path so neither the clock task nor the
    /// camera feed can outlive the session view.
    fn teardown_session(&mut self) {
        if let Some(session) = self.nav.end_session() {
            info!(
                exercise = session.exercise_label(),
                elapsed = session.elapsed_seconds(),
                "session ended"
            );
        }
        self.ticker.take();
        self.tick_rx.take();
        self.camera.take();
    }

    fn handle_home_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.launch_session(FREE_SESSION_LABEL);
                return;
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.launch_session(MOCK_TEST_LABEL);
                return;
            }
            _ => {}
        }

        match NavigationState::key_to_navigation(key) {
            NavigationAction::Left => self.home_screen.select_previous_day(),
            NavigationAction::Right => self.home_screen.select_next_day(),
            NavigationAction::Up => self.home_screen.select_previous_card(),
            NavigationAction::Down => self.home_screen.select_next_card(),
            NavigationAction::Select => {
                // rest days still offer the guided default, like the action bar
                let exercise = self
                    .home_screen
                    .selected_exercise()
                    .unwrap_or(GUIDED_SESSION_LABEL);
                self.launch_session(exercise);
            }
            NavigationAction::NextTab => self.nav.select_next_tab(),
            NavigationAction::PreviousTab => self.nav.select_previous_tab(),
            NavigationAction::Back | NavigationAction::Quit => self.nav.quit(),
            _ => {}
        }
    }

    /// Coach keys are raw: printable characters belong to the input line
    fn handle_coach_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if self.coach_screen.post_message() {
                    info!("chat message posted");
                }
            }
            KeyCode::Backspace => self.coach_screen.backspace(),
            KeyCode::Esc => self.nav.select_tab(Tab::Home),
            KeyCode::Tab => self.nav.select_next_tab(),
            KeyCode::BackTab => self.nav.select_previous_tab(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.coach_screen.input_char(c);
            }
            _ => {}
        }
    }

    fn handle_settings_keys(&mut self, key: KeyEvent) {
        match NavigationState::key_to_navigation(key) {
            NavigationAction::NextTab => self.nav.select_next_tab(),
            NavigationAction::PreviousTab => self.nav.select_previous_tab(),
            NavigationAction::Back => self.nav.select_tab(Tab::Home),
            NavigationAction::Quit => self.nav.quit(),
            _ => {}
        }
    }

    fn handle_session_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => {
                if let Some(session) = self.nav.active_session_mut() {
                    session.toggle_pause();
                    info!(paused = session.is_paused(), "session pause toggled");
                }
            }
            // rep counts are demo inputs, adjustable from the keyboard
            KeyCode::Up => {
                if let Some(session) = self.nav.active_session_mut() {
                    session.set_current_rep(session.current_rep().saturating_add(1));
                }
            }
            KeyCode::Down => {
                if let Some(session) = self.nav.active_session_mut() {
                    session.set_current_rep(session.current_rep().saturating_sub(1));
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Esc => {
                if let Some(session) = self.nav.active_session_mut() {
                    session.stop();
                }
                self.teardown_session();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.teardown_session();
                self.nav.quit();
            }
            _ => {}
        }
    }
}
