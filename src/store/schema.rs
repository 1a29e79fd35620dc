//! Table definitions and demo seed rows

use super::Store;
use tracing::info;

const PRODUCTS_DDL: &str = "
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category TEXT,
        price REAL NOT NULL,
        quantity INTEGER DEFAULT 0
    )";

const EMPLOYEES_DDL: &str = "
    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        position TEXT,
        salary REAL
    )";

const DEMO_DDL: &str = "
    CREATE TABLE IF NOT EXISTS users (
        user_id INTEGER PRIMARY KEY,
        username TEXT NOT NULL,
        department_id INTEGER
    );
    CREATE TABLE IF NOT EXISTS departments (
        dept_id INTEGER PRIMARY KEY,
        dept_name TEXT NOT NULL
    );";

/// (name, category, price, quantity)
const SAMPLE_PRODUCTS: [(&str, &str, f64, i64); 8] = [
    ("Laptop", "Electronics", 45000.0, 10),
    ("Smartphone", "Electronics", 25000.0, 25),
    ("Headphones", "Accessories", 3500.0, 50),
    ("Python Book", "Books", 1200.0, 30),
    ("T-shirt", "Clothing", 800.0, 100),
    ("Coffee Maker", "Home Appliances", 5000.0, 15),
    ("Computer Mouse", "Accessories", 800.0, 40),
    ("Monitor", "Electronics", 18000.0, 8),
];

/// (id, name, position, salary)
const SAMPLE_EMPLOYEES: [(i64, &str, &str, f64); 3] = [
    (1, "Ivan Petrov", "Developer", 100000.0),
    (2, "Maria Sidorova", "Designer", 80000.0),
    (3, "Alexey Ivanov", "Manager", 120000.0),
];

const DEMO_DEPARTMENTS: [(i64, &str); 3] = [(1, "Development"), (2, "Marketing"), (3, "Sales")];

/// (user_id, username, department_id)
const DEMO_USERS: [(i64, &str, Option<i64>); 6] = [
    (1, "Ivan", Some(1)),
    (2, "Maria", Some(2)),
    (3, "Alexey", Some(1)),
    (4, "Olga", None),
    (5, "Petr", Some(3)),
    (6, "Anna", Some(2)),
];

impl Store {
    /// Create `products` if absent and seed it when empty
    pub fn init_products(&self) -> rusqlite::Result<()> {
        self.conn().execute_batch(PRODUCTS_DDL)?;
        if self.count_products()? > 0 {
            return Ok(());
        }

        let tx = self.conn().unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO products (name, category, price, quantity) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (name, category, price, quantity) in SAMPLE_PRODUCTS {
                stmt.execute((name, category, price, quantity))?;
            }
        }
        tx.commit()?;
        info!(rows = SAMPLE_PRODUCTS.len(), "seeded products");
        Ok(())
    }

    /// Create `employees` if absent and seed it when empty
    pub fn init_employees(&self) -> rusqlite::Result<()> {
        self.conn().execute_batch(EMPLOYEES_DDL)?;
        if self.count_employees()? > 0 {
            return Ok(());
        }

        let tx = self.conn().unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO employees (id, name, position, salary) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (id, name, position, salary) in SAMPLE_EMPLOYEES {
                stmt.execute((id, name, position, salary))?;
            }
        }
        tx.commit()?;
        info!(rows = SAMPLE_EMPLOYEES.len(), "seeded employees");
        Ok(())
    }

    /// Create and fill the users/departments tables.
    /// Intended for a fresh in-memory store; rows are inserted every time.
    pub fn init_demo(&self) -> rusqlite::Result<()> {
        self.conn().execute_batch(DEMO_DDL)?;

        let tx = self.conn().unchecked_transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO departments VALUES (?1, ?2)")?;
            for (id, name) in DEMO_DEPARTMENTS {
                stmt.execute((id, name))?;
            }
            let mut stmt = tx.prepare("INSERT INTO users VALUES (?1, ?2, ?3)")?;
            for (id, name, department) in DEMO_USERS {
                stmt.execute((id, name, department))?;
            }
        }
        tx.commit()?;
        info!(
            users = DEMO_USERS.len(),
            departments = DEMO_DEPARTMENTS.len(),
            "seeded join demo"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_products_seeds_once() {
        let store = Store::open_in_memory().unwrap();
        store.init_products().unwrap();
        assert_eq!(store.count_products().unwrap(), 8);

        // Second start finds a non-empty table
        store.init_products().unwrap();
        assert_eq!(store.count_products().unwrap(), 8);
    }

    #[test]
    fn test_init_products_keeps_existing_rows() {
        let store = Store::open_in_memory().unwrap();
        store.conn().execute_batch(PRODUCTS_DDL).unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO products (name, price) VALUES ('Only', 1.0)",
                [],
            )
            .unwrap();
        store.init_products().unwrap();
        assert_eq!(store.count_products().unwrap(), 1);
    }

    #[test]
    fn test_init_employees() {
        let store = Store::open_in_memory().unwrap();
        store.init_employees().unwrap();
        store.init_employees().unwrap();
        assert_eq!(store.count_employees().unwrap(), 3);
    }

    #[test]
    fn test_init_demo() {
        let store = Store::open_in_memory().unwrap();
        store.init_demo().unwrap();
        let users: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        let departments: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM departments", [], |row| row.get(0))
            .unwrap();
        assert_eq!(users, 6);
        assert_eq!(departments, 3);
    }
}
