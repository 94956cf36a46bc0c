//! Session screen implementation
//!
//! Full-screen workout view: simulated camera preview (or the permission
//! fallback), rep progress gauge, rep-counter and elapsed-time tiles, and
//! playback-style controls.

use crate::camera::CameraFeed;
use crate::session::{SessionPhase, WorkoutSession};
use crate::util::format::{format_clock, format_rep_counter};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Session screen component; all state lives in the session itself
#[derive(Debug, Default)]
pub struct SessionScreen;

impl SessionScreen {
    /// Create the session screen
    pub fn new() -> Self {
        Self
    }

    /// Render the session view
    pub fn render(
        &self,
        f: &mut Frame,
        session: &WorkoutSession,
        camera: Option<&mut CameraFeed>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Exercise info and progress
                Constraint::Min(6),    // Camera preview
                Constraint::Length(5), // Rep and time tiles
                Constraint::Length(3), // Controls
            ])
            .split(f.size());

        self.render_info(f, chunks[0], session);
        self.render_preview(f, chunks[1], camera);
        self.render_tiles(f, chunks[2], session);
        self.render_controls(f, chunks[3], session);
    }

    /// Render the exercise label and rep progress gauge
    fn render_info(&self, f: &mut Frame, area: ratatui::layout::Rect, session: &WorkoutSession) {
        let (title, color) = match session.phase() {
            SessionPhase::Running => (session.exercise_label().to_string(), Color::Green),
            SessionPhase::Paused => {
                (format!("{} (paused)", session.exercise_label()), Color::Yellow)
            }
            SessionPhase::Ended => (format!("{} (done)", session.exercise_label()), Color::Gray),
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .gauge_style(Style::default().fg(color))
            .ratio(session.progress())
            .label(format_rep_counter(
                session.current_rep(),
                session.total_reps(),
            ));

        f.render_widget(gauge, area);
    }

    /// Render the camera preview, or the permission fallback
    fn render_preview(
        &self,
        f: &mut Frame,
        area: ratatui::layout::Rect,
        camera: Option<&mut CameraFeed>,
    ) {
        let block = Block::default()
            .title("Camera Preview")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        match camera {
            Some(feed) => {
                let rows = feed.next_frame(inner.width, inner.height);
                let lines: Vec<Line> = rows
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, Style::default().fg(Color::DarkGray))))
                    .collect();
                f.render_widget(block, area);
                f.render_widget(Paragraph::new(lines), inner);
            }
            None => {
                let fallback = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Camera permission needed",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Grant camera access in repset.toml to see the preview.",
                        Style::default().fg(Color::Gray),
                    )),
                ])
                .alignment(Alignment::Center)
                .block(block);

                f.render_widget(fallback, area);
            }
        }
    }

    /// Render the rep counter and elapsed-time tiles
    fn render_tiles(&self, f: &mut Frame, area: ratatui::layout::Rect, session: &WorkoutSession) {
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let reps = Paragraph::new(vec![
            Line::from(Span::styled(
                format_rep_counter(session.current_rep(), session.total_reps()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("REPS", Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        f.render_widget(reps, tiles[0]);

        let clock_color = if session.is_paused() {
            Color::Yellow
        } else {
            Color::White
        };
        let time = Paragraph::new(vec![
            Line::from(Span::styled(
                format_clock(session.elapsed_seconds()),
                Style::default()
                    .fg(clock_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("TIME", Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(clock_color)),
        );
        f.render_widget(time, tiles[1]);
    }

    /// Render the playback-style controls help
    fn render_controls(&self, f: &mut Frame, area: ratatui::layout::Rect, session: &WorkoutSession) {
        let pause_label = if session.is_paused() {
            " Resume  "
        } else {
            " Pause  "
        };

        let controls = vec![Line::from(vec![
            Span::styled(
                "Space",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(pause_label),
            Span::styled(
                "S",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Stop  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Back"),
        ])];

        let help = Paragraph::new(controls).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(help, area);
    }
}
