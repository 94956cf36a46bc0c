//! AI coach screen implementation
//!
//! Chat transcript with speaker-aligned bubbles and the pending input
//! line. Typing goes straight into the input buffer; Enter posts.

use crate::app::screens::render_tab_bar;
use crate::app::state::Tab;
use crate::chat::Transcript;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Coach screen component owning the chat transcript
#[derive(Debug, Default)]
pub struct CoachScreen {
    transcript: Transcript,
}

impl CoachScreen {
    /// Create a coach screen with the seeded demo conversation
    pub fn new() -> Self {
        Self {
            transcript: Transcript::seeded(),
        }
    }

    /// Read access to the transcript
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Append a character to the pending input
    pub fn input_char(&mut self, c: char) {
        self.transcript.input_char(c);
    }

    /// Delete the last character of the pending input
    pub fn backspace(&mut self) {
        self.transcript.backspace();
    }

    /// Post the pending input; returns whether a message was appended
    pub fn post_message(&mut self) -> bool {
        self.transcript.post_user_message()
    }

    /// Render the coach screen
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(6),    // Transcript
                Constraint::Length(3), // Input line
                Constraint::Length(3), // Tab bar
            ])
            .split(f.size());

        self.render_header(f, chunks[0]);
        self.render_transcript(f, chunks[1]);
        self.render_input(f, chunks[2]);
        render_tab_bar(f, chunks[3], Tab::Coach);
    }

    fn render_header(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let header = Paragraph::new("AI Coach")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );

        f.render_widget(header, area);
    }

    /// Render the message list, user bubbles on the right
    fn render_transcript(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let bubbles: Vec<ListItem> = self
            .transcript
            .messages()
            .iter()
            .map(|message| {
                let (prefix, alignment, color) = if message.is_user {
                    ("you ", Alignment::Right, Color::Cyan)
                } else {
                    ("coach ", Alignment::Left, Color::White)
                };

                let mut lines = vec![Line::from(Span::styled(
                    prefix,
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(alignment)];

                for text_line in message.text.lines() {
                    lines.push(
                        Line::from(Span::styled(
                            text_line.to_string(),
                            Style::default().fg(color),
                        ))
                        .alignment(alignment),
                    );
                }
                lines.push(Line::from(""));

                ListItem::new(lines)
            })
            .collect();

        let list = List::new(bubbles).block(Block::default().borders(Borders::ALL));
        f.render_widget(list, area);
    }

    fn render_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let input = Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Green)),
            Span::raw(self.transcript.input()),
            Span::styled("▌", Style::default().fg(Color::Green)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Message (Enter to send, Esc for Home)"),
        );

        f.render_widget(input, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_starts_with_seeded_transcript() {
        let screen = CoachScreen::new();
        assert_eq!(screen.transcript().messages().len(), 3);
    }

    #[test]
    fn test_typing_and_posting() {
        let mut screen = CoachScreen::new();
        for c in "leg day?".chars() {
            screen.input_char(c);
        }
        screen.backspace();
        assert_eq!(screen.transcript().input(), "leg day");

        assert!(screen.post_message());
        assert_eq!(screen.transcript().messages().len(), 4);
        assert!(screen.transcript().input().is_empty());
    }

    #[test]
    fn test_posting_empty_input_does_nothing() {
        let mut screen = CoachScreen::new();
        assert!(!screen.post_message());
        assert_eq!(screen.transcript().messages().len(), 3);
    }
}
