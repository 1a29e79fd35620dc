//! Named queries of the users/departments demo

/// The three canned read-only queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedQuery {
    /// Users with a matching department
    InnerJoin,
    /// All users, placeholder for a missing department
    LeftJoin,
    /// Both tables listed together, tagged by origin
    ShowTables,
}

impl NamedQuery {
    pub fn all() -> [NamedQuery; 3] {
        [NamedQuery::InnerJoin, NamedQuery::LeftJoin, NamedQuery::ShowTables]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NamedQuery::InnerJoin => "INNER JOIN",
            NamedQuery::LeftJoin => "LEFT JOIN",
            NamedQuery::ShowTables => "Show tables",
        }
    }

    /// Key that triggers the query on the Joins tab
    pub fn key(&self) -> char {
        match self {
            NamedQuery::InnerJoin => '1',
            NamedQuery::LeftJoin => '2',
            NamedQuery::ShowTables => '3',
        }
    }

    pub fn from_key(key: char) -> Option<NamedQuery> {
        Self::all().into_iter().find(|q| q.key() == key)
    }
}

/// Result of an ad-hoc query: headers come from the statement metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
