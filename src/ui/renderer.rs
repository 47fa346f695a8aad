use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::constants::{FILTER_BAR_HEIGHT, SEARCH_BAR_HEIGHT};
use crate::domain::filter::ALL_DEPARTMENTS;
use crate::ui::app_state::{AppState, Mode};
use crate::ui::components::{
    Component, employee_detail::EmployeeDetail, employee_list::EmployeeList,
    filter_bar::FilterBar, help_dialog::HelpDialog, search_bar::SearchBar,
};

pub struct Renderer {
    search_bar: SearchBar,
    filter_bar: FilterBar,
    employee_list: EmployeeList,
    employee_detail: EmployeeDetail,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            filter_bar: FilterBar::new(),
            employee_list: EmployeeList::new(),
            employee_detail: EmployeeDetail::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        match state.mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::EmployeeDetail => self.render_detail_mode(f, state),
            Mode::Help => self.render_help_mode(f, state),
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(FILTER_BAR_HEIGHT),
                Constraint::Min(0),
            ])
            .split(f.area());

        self.search_bar.set_term(state.search.raw_term.clone());
        self.search_bar.set_loading(state.search.is_loading);
        self.search_bar.set_status(state.ui.status.clone());

        self.filter_bar.set_field(state.search.search_field);
        self.filter_bar.set_department(
            state
                .search
                .department
                .clone()
                .unwrap_or_else(|| ALL_DEPARTMENTS.to_string()),
        );

        self.employee_list.set_state(state.display_state());
        self.employee_list
            .set_term(state.search.debounced_term.clone());
        self.employee_list
            .set_selected_index(state.search.selected_index);

        self.search_bar.render(f, chunks[0]);
        self.filter_bar.render(f, chunks[1]);
        self.employee_list.render(f, chunks[2]);
    }

    fn render_detail_mode(&mut self, f: &mut Frame, state: &AppState) {
        self.employee_detail.set_employee(state.selected_employee());
        self.employee_detail.render(f, f.area());
    }

    fn render_help_mode(&mut self, f: &mut Frame, state: &AppState) {
        // Search mode underneath, dialog on top
        self.render_search_mode(f, state);
        self.help_dialog.render(f, f.area());
    }

    pub fn search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn filter_bar_mut(&mut self) -> &mut FilterBar {
        &mut self.filter_bar
    }

    pub fn employee_list_mut(&mut self) -> &mut EmployeeList {
        &mut self.employee_list
    }

    pub fn employee_detail_mut(&mut self) -> &mut EmployeeDetail {
        &mut self.employee_detail
    }

    pub fn help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
