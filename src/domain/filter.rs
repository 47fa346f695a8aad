use std::collections::BTreeSet;

use crate::domain::models::{Employee, SearchField};

/// Synthetic option prepended to the derived department list.
pub const ALL_DEPARTMENTS: &str = "All Departments";

pub struct EmployeeFilter;

impl EmployeeFilter {
    /// Derived view over the authoritative record set: a case-insensitive
    /// substring match of `term` against the selected field (or across all
    /// fields), intersected with an exact department match. Relative order
    /// is preserved; the inputs are never mutated.
    pub fn apply(
        employees: &[Employee],
        term: &str,
        field: SearchField,
        department: Option<&str>,
    ) -> Vec<Employee> {
        let needle = term.trim().to_lowercase();

        employees
            .iter()
            .filter(|employee| {
                if let Some(department) = department {
                    if employee.department != department {
                        return false;
                    }
                }

                if needle.is_empty() {
                    return true;
                }

                Self::field_matches(employee, field, &needle)
            })
            .cloned()
            .collect()
    }

    fn field_matches(employee: &Employee, field: SearchField, needle: &str) -> bool {
        let contains = |value: &str| value.to_lowercase().contains(needle);
        match field {
            SearchField::All => {
                contains(&employee.name)
                    || contains(&employee.email)
                    || contains(&employee.department)
                    || contains(&employee.designation)
            }
            SearchField::Name => contains(&employee.name),
            SearchField::Email => contains(&employee.email),
            SearchField::Department => contains(&employee.department),
            SearchField::Designation => contains(&employee.designation),
        }
    }

    /// Distinct departments present in the record set, ascending, with the
    /// synthetic "All Departments" option prepended.
    pub fn department_options(employees: &[Employee]) -> Vec<String> {
        let departments: BTreeSet<&str> = employees
            .iter()
            .map(|employee| employee.department.as_str())
            .collect();

        let mut options = Vec::with_capacity(departments.len() + 1);
        options.push(ALL_DEPARTMENTS.to_string());
        options.extend(departments.into_iter().map(String::from));
        options
    }
}
