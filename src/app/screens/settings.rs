//! Settings screen implementation
//!
//! Placeholder destination; the tab exists but has nothing to configure
//! from the UI yet.

use crate::app::screens::render_tab_bar;
use crate::app::state::Tab;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Settings placeholder screen
#[derive(Debug, Default)]
pub struct SettingsScreen;

impl SettingsScreen {
    /// Create the settings screen
    pub fn new() -> Self {
        Self
    }

    /// Render the settings screen
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // Placeholder body
                Constraint::Length(3), // Tab bar
            ])
            .split(f.size());

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Settings",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Edit repset.toml in your config directory to change defaults.",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(body, chunks[0]);
        render_tab_bar(f, chunks[1], Tab::Settings);
    }
}
