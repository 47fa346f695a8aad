use anyhow::Result;
use colored::Colorize;

use crate::domain::models::EmployeePage;
use crate::ui::components::employee_list::summary_text;

/// Prints one fetched page as human-readable text.
pub fn print_text(page: &EmployeePage, term: &str) {
    println!("{}", summary_text(page.employees.len(), term).bold());
    if page.total as usize > page.employees.len() {
        println!(
            "{}",
            format!(
                "(showing the first {} of {} matches)",
                page.employees.len(),
                page.total
            )
            .dimmed()
        );
    }
    println!();

    for employee in &page.employees {
        println!(
            "{} {} {}",
            employee.name.bold(),
            "—".dimmed(),
            employee.designation
        );
        println!(
            "  {} | {} | Joined {}",
            employee.email.cyan(),
            employee.department.green(),
            employee.joining_date_display()
        );
        println!();
    }
}

/// Prints one fetched page verbatim as pretty JSON.
pub fn print_json(page: &EmployeePage) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(page)?);
    Ok(())
}
