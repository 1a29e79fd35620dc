//! Employee desk: pick an employee, amend the form, write it back

use super::{headers_of, TableView};
use crate::error::{DeskError, DeskResult};
use crate::model::employee::{Employee, EmployeeForm, EmployeeSummary, EMPLOYEE_HEADERS};
use crate::model::filter::ViewFilter;
use crate::model::modal::PendingDelete;
use crate::model::notice::Notice;
use crate::model::ui::Tab;
use crate::store::Store;

pub struct EmployeeDesk {
    store: Store,
    shown: Vec<Employee>,
}

impl EmployeeDesk {
    pub fn open(store: Store) -> DeskResult<Self> {
        store.init_employees()?;
        Ok(Self {
            store,
            shown: Vec::new(),
        })
    }

    #[cfg(test)]
    pub fn shown(&self) -> &[Employee] {
        &self.shown
    }

    pub fn id_at(&self, index: usize) -> Option<i64> {
        self.shown.get(index).map(|e| e.id)
    }

    pub fn load_all(&mut self, view: &mut dyn TableView, filter: ViewFilter) -> DeskResult<()> {
        let employees = self.store.list_employees(&filter)?;
        let summary = EmployeeSummary::from_employees(&employees);

        view.set_rows(
            headers_of(&EMPLOYEE_HEADERS),
            employees.iter().map(Employee::cells).collect(),
        );
        view.set_summary(summary.line());
        view.set_filter(&filter);

        self.shown = employees;
        Ok(())
    }

    pub fn reset(&mut self, view: &mut dyn TableView) -> DeskResult<()> {
        self.load_all(view, ViewFilter::All)?;
        if self.shown.is_empty() {
            view.set_status("No records in the database".to_string());
        } else {
            view.set_status(format!("Loaded {} records", self.shown.len()));
        }
        Ok(())
    }

    pub fn search(&mut self, view: &mut dyn TableView, term: &str) -> DeskResult<Option<Notice>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DeskError::MissingField {
                field: "Search text",
            });
        }

        self.load_all(view, ViewFilter::Search(term.to_string()))?;
        if self.shown.is_empty() {
            view.set_status(format!("No employees match \"{}\"", term));
            return Ok(Some(Notice::info("Search", "No employees found")));
        }
        view.set_status(format!("{} employees match \"{}\"", self.shown.len(), term));
        Ok(None)
    }

    pub fn create(&mut self, view: &mut dyn TableView, form: &EmployeeForm) -> DeskResult<Notice> {
        let employee = form.to_new()?;
        if let Some(id) = employee.id {
            if self.store.get_employee(id)?.is_some() {
                return Err(DeskError::IdTaken(id));
            }
        }
        let id = self.store.insert_employee(&employee)?;

        self.reset(view)?;
        view.clear_form();
        view.set_status(format!("Record ID:{} added", id));
        Ok(Notice::info(
            "Success",
            format!("Employee '{}' added with ID {}", employee.name, id),
        ))
    }

    pub fn update(
        &mut self,
        view: &mut dyn TableView,
        selected: Option<i64>,
        form: &EmployeeForm,
    ) -> DeskResult<Notice> {
        let id = selected.ok_or(DeskError::NoSelection)?;
        let patch = form.to_patch()?;

        if self.store.update_employee(id, &patch)? == 0 {
            return Err(DeskError::NotFound(id));
        }

        self.reset(view)?;
        view.set_status(format!("Record ID:{} updated", id));
        Ok(Notice::info(
            "Success",
            format!("Record ID:{} updated", id),
        ))
    }

    pub fn request_delete(&self, selected: Option<i64>) -> DeskResult<PendingDelete> {
        let id = selected.ok_or(DeskError::NoSelection)?;
        let employee = self
            .store
            .get_employee(id)?
            .ok_or(DeskError::NotFound(id))?;
        Ok(PendingDelete {
            tab: Tab::Employees,
            id,
            name: employee.name,
        })
    }

    pub fn confirm_delete(
        &mut self,
        view: &mut dyn TableView,
        pending: &PendingDelete,
    ) -> DeskResult<Notice> {
        if self.store.delete_employee(pending.id)? == 0 {
            return Err(DeskError::NotFound(pending.id));
        }

        self.reset(view)?;
        view.set_status(format!("Record ID:{} deleted", pending.id));
        Ok(Notice::info(
            "Success",
            format!("Employee '{}' deleted", pending.name),
        ))
    }

    pub fn fill_form(&self, view: &mut dyn TableView, selected: Option<i64>) -> DeskResult<()> {
        let id = selected.ok_or(DeskError::NoSelection)?;
        let employee = self
            .store
            .get_employee(id)?
            .ok_or(DeskError::NotFound(id))?;
        view.set_form(employee.form_values());
        view.set_status(format!("Loaded record ID: {}", id));
        Ok(())
    }

    pub fn close(self) -> DeskResult<()> {
        self.store.close()?;
        Ok(())
    }
}
