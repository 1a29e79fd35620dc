//! Statements against the `employees` table

use super::Store;
use crate::model::employee::{Employee, EmployeePatch, NewEmployee};
use crate::model::filter::ViewFilter;
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

const SELECT_EMPLOYEES: &str = "SELECT id, name, position, salary FROM employees";

fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        salary: row.get(3)?,
    })
}

impl Store {
    /// Employees ordered by name. Category filters do not apply here.
    pub fn list_employees(&self, filter: &ViewFilter) -> rusqlite::Result<Vec<Employee>> {
        debug!(?filter, "listing employees");
        match filter {
            ViewFilter::Search(term) => {
                let mut stmt = self.conn().prepare(&format!(
                    "{} WHERE instr({}(name), ?1) > 0 ORDER BY name",
                    SELECT_EMPLOYEES,
                    super::FOLD_CASE
                ))?;
                let rows = stmt.query_map([term.to_lowercase()], employee_from_row)?;
                rows.collect()
            }
            ViewFilter::All | ViewFilter::Category(_) => {
                let mut stmt = self
                    .conn()
                    .prepare(&format!("{} ORDER BY name", SELECT_EMPLOYEES))?;
                let rows = stmt.query_map([], employee_from_row)?;
                rows.collect()
            }
        }
    }

    pub fn get_employee(&self, id: i64) -> rusqlite::Result<Option<Employee>> {
        self.conn()
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_EMPLOYEES),
                [id],
                employee_from_row,
            )
            .optional()
    }

    /// Insert with the caller's id if given, else let SQLite assign one
    pub fn insert_employee(&self, employee: &NewEmployee) -> rusqlite::Result<i64> {
        self.conn().execute(
            "INSERT INTO employees (id, name, position, salary) VALUES (?1, ?2, ?3, ?4)",
            params![employee.id, employee.name, employee.position, employee.salary],
        )?;
        let id = self.conn().last_insert_rowid();
        info!(id, name = %employee.name, "inserted employee");
        Ok(id)
    }

    pub fn update_employee(&self, id: i64, patch: &EmployeePatch) -> rusqlite::Result<usize> {
        let changed = self.conn().execute(
            "UPDATE employees SET
                name = COALESCE(?1, name),
                position = COALESCE(?2, position),
                salary = COALESCE(?3, salary)
             WHERE id = ?4",
            params![patch.name, patch.position, patch.salary, id],
        )?;
        info!(id, changed, "updated employee");
        Ok(changed)
    }

    pub fn delete_employee(&self, id: i64) -> rusqlite::Result<usize> {
        let removed = self
            .conn()
            .execute("DELETE FROM employees WHERE id = ?1", [id])?;
        info!(id, removed, "deleted employee");
        Ok(removed)
    }

    pub fn count_employees(&self) -> rusqlite::Result<i64> {
        self.conn()
            .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
    }
}
