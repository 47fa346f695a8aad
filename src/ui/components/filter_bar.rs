use crate::domain::models::SearchField;
use crate::ui::components::Component;
use crate::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Shows the active search-field and department selections. Tab cycles
/// the field, Shift+Tab the department; both refine the fetched page
/// client-side only.
pub struct FilterBar {
    field: SearchField,
    department: String,
}

impl Default for FilterBar {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBar {
    pub fn new() -> Self {
        Self {
            field: SearchField::All,
            department: crate::domain::filter::ALL_DEPARTMENTS.to_string(),
        }
    }

    pub fn set_field(&mut self, field: SearchField) {
        self.field = field;
    }

    pub fn set_department(&mut self, department: String) {
        self.department = department;
    }
}

impl Component for FilterBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let selected = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::raw(" Search in: "),
            Span::styled(format!("[{}]", self.field.label()), selected),
            Span::raw("  Department: "),
            Span::styled(format!("[{}]", self.department), selected),
            Span::styled(
                "  Tab: field  Shift+Tab: department",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        f.render_widget(Paragraph::new(line), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Tab => Some(Message::CycleSearchField),
            KeyCode::BackTab => Some(Message::CycleDepartment),
            _ => None,
        }
    }
}
