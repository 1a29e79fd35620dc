//! Employee records and form input

use super::input::{format_amount, optional_decimal, optional_integer, optional_text, required_text};
use crate::error::DeskResult;

pub const EMPLOYEE_HEADERS: [&str; 4] = ["ID", "Name", "Position", "Salary"];
pub const EMPLOYEE_FIELDS: [&str; 4] = ["ID", "Name", "Position", "Salary"];

/// A row of the `employees` table
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub salary: Option<f64>,
}

impl Employee {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.position.clone().unwrap_or_default(),
            self.salary.map(format_amount).unwrap_or_default(),
        ]
    }

    pub fn form_values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.position.clone().unwrap_or_default(),
            self.salary.map(|s| s.to_string()).unwrap_or_default(),
        ]
    }
}

/// A validated employee ready for INSERT; `id: None` lets the store assign one
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub id: Option<i64>,
    pub name: String,
    pub position: Option<String>,
    pub salary: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub id: String,
    pub name: String,
    pub position: String,
    pub salary: String,
}

impl EmployeeForm {
    pub fn from_values(values: &[String]) -> Self {
        let field = |i: usize| values.get(i).cloned().unwrap_or_default();
        Self {
            id: field(0),
            name: field(1),
            position: field(2),
            salary: field(3),
        }
    }

    pub fn to_new(&self) -> DeskResult<NewEmployee> {
        let name = required_text("Name", &self.name)?;
        Ok(NewEmployee {
            id: optional_integer("ID", &self.id)?,
            name,
            position: optional_text(&self.position),
            salary: optional_decimal("Salary", &self.salary)?,
        })
    }

    /// The ID field is ignored; updates target the selected row
    pub fn to_patch(&self) -> DeskResult<EmployeePatch> {
        Ok(EmployeePatch {
            name: optional_text(&self.name),
            position: optional_text(&self.position),
            salary: optional_decimal("Salary", &self.salary)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmployeeSummary {
    pub count: usize,
    pub total_salary: f64,
    pub average_salary: f64,
}

impl EmployeeSummary {
    /// Sum and average cover only employees with a salary on record
    pub fn from_employees(employees: &[Employee]) -> Self {
        let salaries: Vec<f64> = employees.iter().filter_map(|e| e.salary).collect();
        let total_salary: f64 = salaries.iter().sum();
        let average_salary = if salaries.is_empty() {
            0.0
        } else {
            total_salary / salaries.len() as f64
        };

        Self {
            count: employees.len(),
            total_salary,
            average_salary,
        }
    }

    pub fn line(&self) -> String {
        format!(
            "Employees: {} | Payroll: {} | Average salary: {}",
            self.count,
            format_amount(self.total_salary),
            format_amount(self.average_salary)
        )
    }
}
