//! Display state of a desk: all rows or a constrained subset

/// Predicate applied to the next read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewFilter {
    #[default]
    All,
    /// Exact category match
    Category(String),
    /// Case-insensitive substring of the name
    Search(String),
}

impl ViewFilter {
    /// Short description for the filter line, `None` when unfiltered
    pub fn describe(&self) -> Option<String> {
        match self {
            ViewFilter::All => None,
            ViewFilter::Category(category) => Some(format!("category = {}", category)),
            ViewFilter::Search(term) => Some(format!("name contains \"{}\"", term)),
        }
    }
}
