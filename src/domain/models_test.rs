use super::models::{Employee, EmployeePage, SearchField};

#[test]
fn employee_page_round_trips_the_wire_field_names() {
    let json = r#"{
        "employees": [
            {
                "id": 1,
                "name": "Jane Doe",
                "email": "jane.doe@example.com",
                "department": "Engineering",
                "designation": "Senior Engineer",
                "date_of_joining": "2021-03-05"
            }
        ],
        "total": 1,
        "limit": 50,
        "offset": 0
    }"#;

    let page: EmployeePage = serde_json::from_str(json).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.limit, 50);
    assert_eq!(page.offset, 0);
    assert_eq!(page.employees[0].name, "Jane Doe");
    assert_eq!(page.employees[0].date_of_joining, "2021-03-05");

    let value = serde_json::to_value(&page).unwrap();
    assert!(value["employees"][0].get("date_of_joining").is_some());
    assert!(value.get("total").is_some());
}

#[test]
fn initials_take_the_first_two_name_parts() {
    let employee = Employee {
        id: 1,
        name: "Jane Marie Doe".to_string(),
        email: "jane@example.com".to_string(),
        department: "Engineering".to_string(),
        designation: "Engineer".to_string(),
        date_of_joining: "2021-03-05".to_string(),
    };
    assert_eq!(employee.initials(), "JM");
}

#[test]
fn joining_date_formats_or_falls_back_to_raw() {
    let mut employee = Employee {
        id: 1,
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        department: "Engineering".to_string(),
        designation: "Engineer".to_string(),
        date_of_joining: "2021-03-05".to_string(),
    };
    assert_eq!(employee.joining_date_display(), "Mar 5, 2021");

    employee.date_of_joining = "not-a-date".to_string();
    assert_eq!(employee.joining_date_display(), "not-a-date");
}

#[test]
fn search_field_cycle_visits_every_field() {
    let mut field = SearchField::All;
    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(field.label());
        field = field.next();
    }
    assert_eq!(field, SearchField::All);
    assert_eq!(
        seen,
        vec!["All Fields", "Name", "Email", "Department", "Designation"]
    );
}
