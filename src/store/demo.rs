//! The named JOIN queries over users/departments

use super::Store;
use crate::model::join::{NamedQuery, QueryResult};

/// Label used by the LEFT JOIN for users without a department
pub const NO_DEPARTMENT: &str = "No department";

fn named_query_sql(query: NamedQuery) -> String {
    match query {
        NamedQuery::InnerJoin => "
            SELECT u.user_id AS \"ID\", u.username AS \"Name\", d.dept_name AS \"Department\"
            FROM users u
            INNER JOIN departments d ON u.department_id = d.dept_id
            ORDER BY u.user_id"
            .to_string(),
        NamedQuery::LeftJoin => format!(
            "
            SELECT u.user_id AS \"ID\", u.username AS \"Name\",
                   COALESCE(d.dept_name, '{}') AS \"Department\"
            FROM users u
            LEFT JOIN departments d ON u.department_id = d.dept_id
            ORDER BY u.user_id",
            NO_DEPARTMENT
        ),
        NamedQuery::ShowTables => "
            SELECT 'Users' AS \"Table\", user_id AS \"ID\", username AS \"Name\",
                   department_id AS \"Dept ID\"
            FROM users
            UNION ALL
            SELECT 'Departments', dept_id, dept_name, NULL
            FROM departments
            ORDER BY 1, 2"
            .to_string(),
    }
}

impl Store {
    pub fn run_named_query(&self, query: NamedQuery) -> rusqlite::Result<QueryResult> {
        self.run_query(&named_query_sql(query))
    }
}
