//! Application state management
//!
//! Handles tab routing, the active workout session, and keyboard event
//! mapping for the TUI application. Exactly one of the three tabs or the
//! full-screen session view is the render target at any time.

use crate::session::WorkoutSession;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Persistent top-level destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Week planner and training cards
    Home,
    /// AI coach chat
    Coach,
    /// Settings placeholder
    Settings,
}

impl Tab {
    /// Cycle forward through the tab bar
    pub fn next(self) -> Self {
        match self {
            Tab::Home => Tab::Coach,
            Tab::Coach => Tab::Settings,
            Tab::Settings => Tab::Home,
        }
    }

    /// Cycle backward through the tab bar
    pub fn previous(self) -> Self {
        match self {
            Tab::Home => Tab::Settings,
            Tab::Coach => Tab::Home,
            Tab::Settings => Tab::Coach,
        }
    }

    /// Label shown in the bottom tab bar
    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Coach => "AI Coach",
            Tab::Settings => "Settings",
        }
    }

    /// Position in the bottom tab bar
    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Coach => 1,
            Tab::Settings => 2,
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Self::Home
    }
}

/// The single render target chosen for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTarget {
    /// One of the tab screens
    Tab(Tab),
    /// The full-screen workout session view
    Session,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter)
    Select,
    /// Go back/cancel (Esc)
    Back,
    /// Next tab (Tab)
    NextTab,
    /// Previous tab (Shift+Tab)
    PreviousTab,
    /// Quit application (q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Top-level navigation state
///
/// Tab selection and the in-progress session are orthogonal: starting a
/// session suspends tab rendering without touching the active tab, so
/// ending the session lands back exactly where the user left off.
#[derive(Debug, Default)]
pub struct NavigationState {
    active_tab: Tab,
    active_session: Option<WorkoutSession>,
    should_quit: bool,
}

impl NavigationState {
    /// Create navigation state pointing at the home tab
    pub fn new() -> Self {
        Self::default()
    }

    /// The tab that renders when no session is active
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// The in-progress session, if one is active
    pub fn active_session(&self) -> Option<&WorkoutSession> {
        self.active_session.as_ref()
    }

    /// Mutable access to the in-progress session
    pub fn active_session_mut(&mut self) -> Option<&mut WorkoutSession> {
        self.active_session.as_mut()
    }

    /// The screen to render this frame
    pub fn current_view(&self) -> ViewTarget {
        if self.active_session.is_some() {
            ViewTarget::Session
        } else {
            ViewTarget::Tab(self.active_tab)
        }
    }

    /// Switch the active tab
    ///
    /// Ignored while a session is on screen; tab navigation resumes when
    /// the session ends.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_session.is_none() {
            self.active_tab = tab;
        }
    }

    /// Switch to the next tab in the bar
    pub fn select_next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    /// Switch to the previous tab in the bar
    pub fn select_previous_tab(&mut self) {
        self.select_tab(self.active_tab.previous());
    }

    /// Start a workout session, suspending tab rendering
    pub fn start_session(&mut self, exercise_label: impl Into<String>, total_reps: u32) {
        self.active_session = Some(WorkoutSession::new(exercise_label, total_reps));
    }

    /// Discard the session and resume rendering the previous tab
    pub fn end_session(&mut self) -> Option<WorkoutSession> {
        self.active_session.take()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc => NavigationAction::Back,

            // Tab bar navigation
            KeyCode::Tab => NavigationAction::NextTab,
            KeyCode::BackTab => NavigationAction::PreviousTab,

            _ => NavigationAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_navigation_state_creation() {
        let nav = NavigationState::new();
        assert_eq!(nav.active_tab(), Tab::Home);
        assert_eq!(nav.current_view(), ViewTarget::Tab(Tab::Home));
        assert!(nav.active_session().is_none());
        assert!(!nav.should_quit());
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(Tab::Home.next(), Tab::Coach);
        assert_eq!(Tab::Coach.next(), Tab::Settings);
        assert_eq!(Tab::Settings.next(), Tab::Home);

        assert_eq!(Tab::Home.previous(), Tab::Settings);
        assert_eq!(Tab::Settings.previous(), Tab::Coach);
    }

    #[test]
    fn test_session_suspends_tab_rendering() {
        let mut nav = NavigationState::new();
        nav.select_tab(Tab::Coach);

        nav.start_session("Core Activation", 8);
        assert_eq!(nav.current_view(), ViewTarget::Session);

        // tab switching is suspended while the session is on screen
        nav.select_tab(Tab::Settings);
        nav.select_next_tab();
        assert_eq!(nav.current_view(), ViewTarget::Session);
        assert_eq!(nav.active_tab(), Tab::Coach);
    }

    #[test]
    fn test_end_session_restores_previous_tab() {
        for tab in [Tab::Home, Tab::Coach, Tab::Settings] {
            let mut nav = NavigationState::new();
            nav.select_tab(tab);

            nav.start_session("Free Session", 8);
            let ended = nav.end_session();

            assert!(ended.is_some());
            assert_eq!(nav.current_view(), ViewTarget::Tab(tab));
        }
    }

    #[test]
    fn test_end_without_session_is_harmless() {
        let mut nav = NavigationState::new();
        assert!(nav.end_session().is_none());
        assert_eq!(nav.current_view(), ViewTarget::Tab(Tab::Home));
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            NavigationState::key_to_navigation(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::NONE
            )),
            NavigationAction::Quit
        );
        assert_eq!(
            NavigationState::key_to_navigation(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            NavigationAction::Quit
        );
        assert_eq!(
            NavigationState::key_to_navigation(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            NavigationAction::Left
        );
        assert_eq!(
            NavigationState::key_to_navigation(KeyEvent::new(
                KeyCode::Char('l'),
                KeyModifiers::NONE
            )),
            NavigationAction::Right
        );
        assert_eq!(
            NavigationState::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            NavigationState::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );
        assert_eq!(
            NavigationState::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavigationAction::NextTab
        );
        assert_eq!(
            NavigationState::key_to_navigation(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            NavigationAction::PreviousTab
        );
    }

    #[test]
    fn test_quit_flag() {
        let mut nav = NavigationState::new();
        nav.quit();
        assert!(nav.should_quit());
    }
}
