use crate::constants::*;
use crate::domain::filter::EmployeeFilter;
use crate::domain::models::{DisplayState, Employee, SearchField};
use crate::ui::commands::Command;
use crate::ui::events::Message;

// Re-export Mode
pub use crate::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub ui: UiState,
}

pub struct SearchState {
    /// What the user is typing right now.
    pub raw_term: String,
    /// The last settled value of `raw_term`; always a value `raw_term`
    /// held at some past instant.
    pub debounced_term: String,
    pub search_field: SearchField,
    /// `None` means "All Departments".
    pub department: Option<String>,
    /// Authoritative record set; replaced wholesale on every successful
    /// fetch, never patched.
    pub employees: Vec<Employee>,
    pub total: u64,
    pub selected_index: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub struct UiState {
    pub status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState {
                raw_term: String::new(),
                debounced_term: String::new(),
                search_field: SearchField::All,
                department: None,
                employees: Vec::new(),
                total: 0,
                selected_index: 0,
                is_loading: false,
                error: None,
            },
            ui: UiState { status: None },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(term) => {
                if term == self.search.raw_term {
                    return Command::None;
                }
                self.search.raw_term = term;
                Command::ScheduleFetch
            }
            Message::ClearQuery => {
                if self.search.raw_term.is_empty() {
                    return Command::None;
                }
                self.search.raw_term.clear();
                Command::ScheduleFetch
            }
            Message::DebounceElapsed => {
                self.search.debounced_term = self.search.raw_term.clone();
                self.trigger_fetch()
            }
            Message::Refetch => self.trigger_fetch(),
            Message::FetchCompleted(Ok(page)) => {
                self.search.employees = page.employees;
                self.search.total = page.total;
                self.search.is_loading = false;
                self.search.error = None;
                self.search.selected_index = 0;
                // A department that vanished from the new set falls back
                // to "All Departments"
                let department_gone = match &self.search.department {
                    Some(department) => !self
                        .search
                        .employees
                        .iter()
                        .any(|employee| &employee.department == department),
                    None => false,
                };
                if department_gone {
                    self.search.department = None;
                }
                Command::None
            }
            Message::FetchCompleted(Err(err)) => {
                // A superseded request's settlement must never alter state;
                // the superseding request's own transition governs what the
                // user eventually sees
                if err.is_cancelled() {
                    return Command::None;
                }
                self.search.is_loading = false;
                self.search.error = Some(err.to_string());
                self.search.employees.clear();
                self.search.total = 0;
                self.search.selected_index = 0;
                Command::None
            }
            Message::CycleSearchField => {
                self.search.search_field = self.search.search_field.next();
                self.search.selected_index = 0;
                Command::None
            }
            Message::CycleDepartment => {
                self.cycle_department();
                self.search.selected_index = 0;
                Command::None
            }
            Message::SelectUp => {
                self.move_selection(-1);
                Command::None
            }
            Message::SelectDown => {
                self.move_selection(1);
                Command::None
            }
            Message::SelectPageUp => {
                self.move_selection(-(PAGE_SIZE as isize));
                Command::None
            }
            Message::SelectPageDown => {
                self.move_selection(PAGE_SIZE as isize);
                Command::None
            }
            Message::SelectFirst => {
                self.search.selected_index = 0;
                Command::None
            }
            Message::SelectLast => {
                let len = self.visible_employees().len();
                self.search.selected_index = len.saturating_sub(1);
                Command::None
            }
            Message::EnterDetail => {
                if self.mode == Mode::Search && self.selected_employee().is_some() {
                    self.mode = Mode::EmployeeDetail;
                }
                Command::None
            }
            Message::CloseDetail => {
                if self.mode == Mode::EmployeeDetail {
                    self.mode = Mode::Search;
                }
                Command::None
            }
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = Mode::Search;
                }
                Command::None
            }
            Message::SetStatus(status) => {
                self.ui.status = Some(status);
                Command::ScheduleClearStatus(STATUS_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.status = None;
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    /// Trigger rules for a settled term. A non-empty term shorter than the
    /// minimum is a validation skip: no fetch, no state change, existing
    /// results stay visible. An empty term triggers an unfiltered listing.
    fn trigger_fetch(&mut self) -> Command {
        let term = &self.search.debounced_term;
        if !term.is_empty() && term.chars().count() < MIN_SEARCH_TERM_LEN {
            return Command::None;
        }
        self.search.is_loading = true;
        self.search.error = None;
        Command::ExecuteFetch
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_employees().len();
        if len == 0 {
            self.search.selected_index = 0;
            return;
        }
        let max = len - 1;
        let next = self.search.selected_index as isize + delta;
        self.search.selected_index = next.clamp(0, max as isize) as usize;
    }

    fn cycle_department(&mut self) {
        let options = self.department_options();
        let current = self
            .search
            .department
            .as_deref()
            .unwrap_or(crate::domain::filter::ALL_DEPARTMENTS);
        let position = options
            .iter()
            .position(|option| option == current)
            .unwrap_or(0);
        let next = &options[(position + 1) % options.len()];
        self.search.department = if next == crate::domain::filter::ALL_DEPARTMENTS {
            None
        } else {
            Some(next.clone())
        };
    }

    /// The derived view: term x field intersected with the department
    /// selection, recomputed synchronously from the authoritative set.
    pub fn visible_employees(&self) -> Vec<Employee> {
        EmployeeFilter::apply(
            &self.search.employees,
            &self.search.debounced_term,
            self.search.search_field,
            self.search.department.as_deref(),
        )
    }

    /// Departments selectable right now, derived from the authoritative
    /// set with "All Departments" prepended.
    pub fn department_options(&self) -> Vec<String> {
        EmployeeFilter::department_options(&self.search.employees)
    }

    pub fn selected_employee(&self) -> Option<Employee> {
        self.visible_employees()
            .get(self.search.selected_index)
            .cloned()
    }

    /// Mutually exclusive render state. Precedence: Loading > Error >
    /// Empty > Success.
    pub fn display_state(&self) -> DisplayState {
        if self.search.is_loading {
            return DisplayState::Loading;
        }
        if let Some(message) = &self.search.error {
            return DisplayState::Error(message.clone());
        }
        let visible = self.visible_employees();
        if visible.is_empty() {
            return DisplayState::Empty(self.search.debounced_term.clone());
        }
        DisplayState::Success(visible)
    }
}
