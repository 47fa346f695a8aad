use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    EmployeeDetail,
    Help,
}

/// One directory record. Identity is `id`; records are immutable once
/// received and only ever replaced wholesale by a newer page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub date_of_joining: String,
}

impl Employee {
    /// Up to two uppercase initials for the avatar line.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// Joining date as "Mar 5, 2021" when the wire date parses, the raw
    /// string otherwise.
    pub fn joining_date_display(&self) -> String {
        NaiveDate::parse_from_str(&self.date_of_joining, "%Y-%m-%d")
            .map(|date| date.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| self.date_of_joining.clone())
    }
}

/// One page of records as returned by `GET /api/employees`. Field names
/// match the wire format exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeePage {
    pub employees: Vec<Employee>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

/// Field the search term is matched against when filtering client-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    All,
    Name,
    Email,
    Department,
    Designation,
}

impl SearchField {
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::All => "All Fields",
            SearchField::Name => "Name",
            SearchField::Email => "Email",
            SearchField::Department => "Department",
            SearchField::Designation => "Designation",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SearchField::All => SearchField::Name,
            SearchField::Name => SearchField::Email,
            SearchField::Email => SearchField::Department,
            SearchField::Department => SearchField::Designation,
            SearchField::Designation => SearchField::All,
        }
    }
}

/// Parameters for one listing request.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchParams {
    pub term: String,
    pub limit: u32,
    pub offset: u32,
}

/// Mutually exclusive render state, derived from the controller state on
/// demand and never stored.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayState {
    Loading,
    Error(String),
    Empty(String),
    Success(Vec<Employee>),
}
