use super::filter::{ALL_DEPARTMENTS, EmployeeFilter};
use super::models::{Employee, SearchField};

fn employee(id: i64, name: &str, email: &str, department: &str, designation: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        designation: designation.to_string(),
        date_of_joining: "2021-03-05".to_string(),
    }
}

fn roster() -> Vec<Employee> {
    vec![
        employee(1, "Jane Doe", "jane.doe@example.com", "Engineering", "Senior Engineer"),
        employee(2, "John Smith", "john.smith@example.com", "Sales", "Account Executive"),
        employee(3, "Asha Rao", "asha.rao@example.com", "Engineering", "Engineering Manager"),
        employee(4, "Priya Patel", "priya.patel@example.com", "HR", "Recruiter"),
        employee(5, "Liu Wei", "liu.wei@example.com", "Engineering", "Engineer"),
    ]
}

#[test]
fn empty_term_and_no_department_passes_everything_through() {
    let all = EmployeeFilter::apply(&roster(), "", SearchField::All, None);
    assert_eq!(all.len(), 5);
}

#[test]
fn department_filter_is_exact_and_preserves_order() {
    let engineering = EmployeeFilter::apply(&roster(), "", SearchField::All, Some("Engineering"));
    let ids: Vec<i64> = engineering.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn term_match_is_case_insensitive_substring() {
    let hits = EmployeeFilter::apply(&roster(), "JANE", SearchField::Name, None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn all_fields_matches_any_of_the_four_fields() {
    // "recruiter" only appears in a designation
    let hits = EmployeeFilter::apply(&roster(), "recruiter", SearchField::All, None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 4);

    // restricting the field hides the same term
    let misses = EmployeeFilter::apply(&roster(), "recruiter", SearchField::Email, None);
    assert!(misses.is_empty());
}

#[test]
fn term_and_department_intersect() {
    let hits = EmployeeFilter::apply(&roster(), "engineer", SearchField::Designation, Some("Engineering"));
    let ids: Vec<i64> = hits.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);

    let none = EmployeeFilter::apply(&roster(), "engineer", SearchField::Designation, Some("Sales"));
    assert!(none.is_empty());
}

#[test]
fn department_options_are_distinct_sorted_with_synthetic_first() {
    let options = EmployeeFilter::department_options(&roster());
    assert_eq!(options, vec![ALL_DEPARTMENTS, "Engineering", "HR", "Sales"]);
}

#[test]
fn department_options_of_empty_roster_is_just_the_synthetic_entry() {
    let options = EmployeeFilter::department_options(&[]);
    assert_eq!(options, vec![ALL_DEPARTMENTS]);
}
