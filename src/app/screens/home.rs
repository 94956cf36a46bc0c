//! Home screen implementation
//!
//! Week calendar strip, the scrollable training card list for the
//! selected day, and the session start actions.

use crate::app::screens::render_tab_bar;
use crate::app::state::Tab;
use crate::plan::{self, DayPlan, WeekSlot, DAYS_PER_WEEK};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Session label used by the free training action
pub const FREE_SESSION_LABEL: &str = "Free Session";

/// Session label used by the guided start action
pub const GUIDED_SESSION_LABEL: &str = "Core Activation: Crunch & Knee Tuck";

/// Session label used by the mock assessment action
pub const MOCK_TEST_LABEL: &str = "Mock Assessment";

/// Home screen component with day selection and training cards
#[derive(Debug)]
pub struct HomeScreen {
    week: [WeekSlot; DAYS_PER_WEEK],
    selected_day: usize,
    card_index: usize,
    list_state: ListState,
}

impl HomeScreen {
    /// Create a home screen with the given day preselected
    pub fn new(selected_day: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            week: plan::week_strip(Local::now().date_naive()),
            selected_day: selected_day.min(DAYS_PER_WEEK - 1),
            card_index: 0,
            list_state,
        }
    }

    /// Currently selected weekday index (0 = Monday)
    pub fn selected_day(&self) -> usize {
        self.selected_day
    }

    /// Number of cards the selected day offers
    fn card_count(&self) -> usize {
        match plan::plan_for_day(self.selected_day) {
            DayPlan::Rest { .. } => 0,
            DayPlan::Scheduled(items) => items.len(),
        }
    }

    /// Move day selection left, wrapping at Monday
    pub fn select_previous_day(&mut self) {
        self.selected_day = if self.selected_day == 0 {
            DAYS_PER_WEEK - 1
        } else {
            self.selected_day - 1
        };
        self.reset_cards();
    }

    /// Move day selection right, wrapping at Sunday
    pub fn select_next_day(&mut self) {
        self.selected_day = (self.selected_day + 1) % DAYS_PER_WEEK;
        self.reset_cards();
    }

    fn reset_cards(&mut self) {
        self.card_index = 0;
        self.list_state.select(Some(0));
    }

    /// Move card selection up
    pub fn select_previous_card(&mut self) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        self.card_index = if self.card_index == 0 {
            count - 1
        } else {
            self.card_index - 1
        };
        self.list_state.select(Some(self.card_index));
    }

    /// Move card selection down
    pub fn select_next_card(&mut self) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        self.card_index = (self.card_index + 1) % count;
        self.list_state.select(Some(self.card_index));
    }

    /// Title of the highlighted training card, if the day has any
    pub fn selected_exercise(&self) -> Option<&'static str> {
        match plan::plan_for_day(self.selected_day) {
            DayPlan::Rest { .. } => None,
            DayPlan::Scheduled(items) => items.get(self.card_index).map(|item| item.title),
        }
    }

    /// Render the home screen
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Calendar strip
                Constraint::Min(8),    // Training cards
                Constraint::Length(3), // Start actions
                Constraint::Length(3), // Tab bar
            ])
            .split(f.size());

        self.render_calendar(f, chunks[0]);
        self.render_cards(f, chunks[1]);
        self.render_actions(f, chunks[2]);
        render_tab_bar(f, chunks[3], Tab::Home);
    }

    /// Render the 7-slot calendar strip
    fn render_calendar(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, DAYS_PER_WEEK as u32); DAYS_PER_WEEK])
            .split(area);

        for (index, slot) in self.week.iter().enumerate() {
            let selected = index == self.selected_day;
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let marker = if selected { "───" } else { "" };
            let lines = vec![
                Line::from(Span::styled(slot.label, style)),
                Line::from(Span::styled(format!("{}", slot.day_of_month), style)),
                Line::from(Span::styled(marker, Style::default().fg(Color::Green))),
            ];

            let day = Paragraph::new(lines).alignment(Alignment::Center);
            f.render_widget(day, slots[index]);
        }
    }

    /// Render the training card list or the rest-day notice
    fn render_cards(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        match plan::plan_for_day(self.selected_day) {
            DayPlan::Rest { message, hint } => {
                let notice = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        message,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
                ])
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Today"));

                f.render_widget(notice, area);
            }
            DayPlan::Scheduled(items) => {
                let cards: Vec<ListItem> = items
                    .iter()
                    .map(|item| {
                        ListItem::new(vec![
                            Line::from(vec![
                                Span::raw(format!("{} ", item.icon)),
                                Span::styled(
                                    item.title,
                                    Style::default()
                                        .fg(Color::White)
                                        .add_modifier(Modifier::BOLD),
                                ),
                            ]),
                            Line::from(Span::styled(
                                format!("   {}", item.detail),
                                Style::default().fg(Color::Gray),
                            )),
                        ])
                    })
                    .collect();

                let list = List::new(cards)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Training Plan"),
                    )
                    .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
                    .highlight_symbol(">> ");

                f.render_stateful_widget(list, area, &mut self.list_state);
            }
        }
    }

    /// Render the session start actions
    fn render_actions(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let actions = vec![Line::from(vec![
            Span::styled(
                "F",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Free Session  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Start Training  "),
            Span::styled(
                "M",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Mock Test  "),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ])];

        let bar = Paragraph::new(actions).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(bar, area);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new(0)
    }
}
