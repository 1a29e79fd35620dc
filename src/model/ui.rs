//! UI state - presentation enums separate from desk data

/// Tab selection in the main UI; one tab per desk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Products,
    Employees,
    Joins,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::Products, Tab::Employees, Tab::Joins]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::Products => "Products",
            Tab::Employees => "Employees",
            Tab::Joins => "Joins",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Products => Tab::Employees,
            Tab::Employees => Tab::Joins,
            Tab::Joins => Tab::Products,
        }
    }

    pub fn previous(&self) -> Tab {
        match self {
            Tab::Products => Tab::Joins,
            Tab::Employees => Tab::Products,
            Tab::Joins => Tab::Employees,
        }
    }
}

/// Which part of a desk screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    /// Editing the form field at this index
    Form(usize),
    /// Typing a search term
    Search,
}
