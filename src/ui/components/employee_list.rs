use crate::domain::models::{DisplayState, Employee};
use crate::ui::components::{Component, truncate};
use crate::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Results area. Renders exactly one of the four display states and owns
/// the scroll window over the derived employee view.
pub struct EmployeeList {
    state: DisplayState,
    term: String,
    selected_index: usize,
    scroll_offset: usize,
}

impl Default for EmployeeList {
    fn default() -> Self {
        Self::new()
    }
}

/// Results summary shown above the records, e.g.
/// `Found 1 employee matching "jane"`.
pub fn summary_text(count: usize, term: &str) -> String {
    let mut text = format!("Found {count} employee{}", if count == 1 { "" } else { "s" });
    if !term.is_empty() {
        text.push_str(&format!(" matching \"{term}\""));
    }
    text
}

impl EmployeeList {
    pub fn new() -> Self {
        Self {
            state: DisplayState::Empty(String::new()),
            term: String::new(),
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    pub fn set_state(&mut self, state: DisplayState) {
        self.state = state;
    }

    pub fn set_term(&mut self, term: String) {
        self.term = term;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    fn render_message(&self, f: &mut Frame, area: Rect, title: &str, body: &str, color: Color) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                title.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(body.to_string()),
        ];
        let message = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(message, area);
    }

    fn employee_line(&self, employee: &Employee, selected: bool) -> Line<'static> {
        let base = if selected {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(
                format!("{:<24}", truncate(&employee.name, 22)),
                base.add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{:<26}", truncate(&employee.designation, 24)), base),
            Span::styled(
                format!("{:<16}", truncate(&employee.department, 14)),
                base.fg(if selected { Color::White } else { Color::Green }),
            ),
            Span::styled(
                format!("{:<30}", truncate(&employee.email, 28)),
                base.fg(if selected { Color::White } else { Color::Cyan }),
            ),
            Span::styled(
                format!("Joined {}", employee.joining_date_display()),
                base.fg(if selected { Color::White } else { Color::DarkGray }),
            ),
        ])
    }

    fn render_records(&mut self, f: &mut Frame, area: Rect, records: &[Employee]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Summary
                Constraint::Min(0),    // Records
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        let summary = Paragraph::new(summary_text(records.len(), &self.term))
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(summary, chunks[0]);

        // Keep the selection inside the scroll window
        let height = chunks[1].height as usize;
        if height > 0 {
            if self.selected_index < self.scroll_offset {
                self.scroll_offset = self.selected_index;
            } else if self.selected_index >= self.scroll_offset + height {
                self.scroll_offset = self.selected_index + 1 - height;
            }
        }

        let lines: Vec<Line> = records
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(height.max(1))
            .map(|(index, employee)| self.employee_line(employee, index == self.selected_index))
            .collect();
        f.render_widget(Paragraph::new(lines), chunks[1]);

        let hints = Paragraph::new("↑/↓: Navigate | Enter: Details | Tab: Field | Shift+Tab: Department | Esc: Clear/Exit | ?: Help")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(hints, chunks[2]);
    }
}

impl Component for EmployeeList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        match self.state.clone() {
            DisplayState::Loading => {
                self.render_message(f, area, "Loading employees…", "", Color::Yellow);
            }
            DisplayState::Error(message) => {
                self.render_message(
                    f,
                    area,
                    "Oops! Something went wrong",
                    &format!("{message}\n\nPress Ctrl+R to try again."),
                    Color::Red,
                );
            }
            DisplayState::Empty(term) => {
                if term.is_empty() {
                    self.render_message(
                        f,
                        area,
                        "No employees yet",
                        "Start by adding some employees to the directory.",
                        Color::Gray,
                    );
                } else {
                    self.render_message(
                        f,
                        area,
                        "No employees found",
                        &format!("No employees match \"{term}\". Try a different search term."),
                        Color::Gray,
                    );
                }
            }
            DisplayState::Success(records) => {
                self.render_records(f, area, &records);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => Some(Message::SelectUp),
            KeyCode::Down => Some(Message::SelectDown),
            KeyCode::PageUp => Some(Message::SelectPageUp),
            KeyCode::PageDown => Some(Message::SelectPageDown),
            KeyCode::Home => Some(Message::SelectFirst),
            KeyCode::End => Some(Message::SelectLast),
            KeyCode::Enter => Some(Message::EnterDetail),
            _ => None,
        }
    }
}
