use crate::ui::components::Component;
use crate::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Single-line search term editor. Emits `QueryChanged` on every edit;
/// debouncing happens upstream in the event loop.
#[derive(Default)]
pub struct SearchBar {
    term: String,
    cursor: usize,
    is_loading: bool,
    status: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_term(&mut self, term: String) {
        if term != self.term {
            self.term = term;
            self.cursor = self.term.chars().count();
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    #[allow(dead_code)]
    pub fn term(&self) -> &str {
        &self.term
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.term
            .char_indices()
            .nth(char_pos)
            .map(|(index, _)| index)
            .unwrap_or(self.term.len())
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.term.insert(at, c);
        self.cursor += 1;
    }

    /// Removes the characters in `[start, end)` (char positions) and moves
    /// the cursor to `start`. Returns whether anything changed.
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.term.chars().count() {
            return false;
        }
        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.term.drain(byte_start..byte_end);
        self.cursor = start;
        true
    }

    fn prev_word_boundary(&self) -> usize {
        let chars: Vec<char> = self.term.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.term.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        // Block cursor: invert the character under it
        let at = self.byte_index(self.cursor);
        let (before, rest) = self.term.split_at(at);
        let mut rest_chars = rest.chars();
        let under_cursor = rest_chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest_chars.collect();

        let input_line = Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled(under_cursor, Style::default().bg(Color::White).fg(Color::Black)),
            Span::raw(after),
        ]);

        let mut title = "Search employees".to_string();
        if self.is_loading {
            title.push_str(" [searching…]");
        }
        if let Some(status) = &self.status {
            title.push_str(&format!(" - {status}"));
        }

        let input = Paragraph::new(input_line)
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = self.term.chars().count();
                    None
                }
                KeyCode::Char('u') => {
                    if self.delete_range(0, self.cursor) {
                        self.changed()
                    } else {
                        None
                    }
                }
                KeyCode::Char('w') => {
                    let start = self.prev_word_boundary();
                    if self.delete_range(start, self.cursor) {
                        self.changed()
                    } else {
                        None
                    }
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::ALT) {
                    return None;
                }
                self.insert_char(c);
                self.changed()
            }
            KeyCode::Backspace => {
                if self.cursor > 0 && self.delete_range(self.cursor - 1, self.cursor) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.delete_range(self.cursor, self.cursor + 1) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor < self.term.chars().count() {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.term.chars().count();
                None
            }
            _ => None,
        }
    }
}
