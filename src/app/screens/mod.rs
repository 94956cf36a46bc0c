//! TUI screen components
//!
//! Contains individual screen implementations for the three tabs and the
//! full-screen session view, plus the shared bottom tab bar.

pub mod coach;
pub mod home;
pub mod session;
pub mod settings;

pub use coach::CoachScreen;
pub use home::HomeScreen;
pub use session::SessionScreen;
pub use settings::SettingsScreen;

use crate::app::state::Tab;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the persistent bottom tab bar with the active tab highlighted
pub(crate) fn render_tab_bar(f: &mut Frame, area: Rect, active: Tab) {
    let titles = vec![Tab::Home.title(), Tab::Coach.title(), Tab::Settings.title()];

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(tabs, area);
}
