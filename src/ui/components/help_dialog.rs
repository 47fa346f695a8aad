use crate::constants::HELP_DIALOG_MAX_WIDTH;
use crate::ui::components::Component;
use crate::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

const BINDINGS: &[(&str, &str)] = &[
    ("type", "Search as you type (debounced)"),
    ("Tab", "Cycle the search field"),
    ("Shift+Tab", "Cycle the department filter"),
    ("↑/↓, PgUp/PgDn", "Move the selection"),
    ("Enter", "Open employee details"),
    ("Ctrl+R", "Reload the current search"),
    ("Esc", "Clear the search, then exit"),
    ("Ctrl+C Ctrl+C", "Exit"),
];

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let height = BINDINGS.len() as u16 + 2;
        let dialog_area = Self::centered(area, HELP_DIALOG_MAX_WIDTH, height);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("{keys:>16}  "),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*action),
                ])
            })
            .collect();

        f.render_widget(Clear, dialog_area);
        let dialog = Paragraph::new(lines)
            .block(Block::default().title("Help").borders(Borders::ALL));
        f.render_widget(dialog, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        Some(Message::CloseHelp)
    }
}
