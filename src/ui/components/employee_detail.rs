use crate::domain::models::Employee;
use crate::ui::components::Component;
use crate::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Full card for one selected record.
#[derive(Default)]
pub struct EmployeeDetail {
    employee: Option<Employee>,
}

impl EmployeeDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_employee(&mut self, employee: Option<Employee>) {
        self.employee = employee;
    }
}

impl Component for EmployeeDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(employee) = &self.employee else {
            return;
        };

        let label = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", employee.initials()),
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    employee.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Designation: ", label),
                Span::raw(employee.designation.clone()),
            ]),
            Line::from(vec![
                Span::styled("Email:       ", label),
                Span::styled(employee.email.clone(), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(vec![
                Span::styled("Department:  ", label),
                Span::styled(
                    employee.department.clone(),
                    Style::default().fg(Color::Green),
                ),
            ]),
            Line::from(vec![
                Span::styled("Joined:      ", label),
                Span::raw(employee.joining_date_display()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Esc: Back",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Employee").borders(Borders::ALL));
        f.render_widget(card, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Message::CloseDetail),
            _ => None,
        }
    }
}
