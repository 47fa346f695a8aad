pub mod employee_detail;
pub mod employee_list;
pub mod filter_bar;
pub mod help_dialog;
pub mod search_bar;

#[cfg(test)]
mod employee_list_test;

use crate::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Truncates to at most `max` characters, appending an ellipsis when
/// anything was cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
