//! Join desk: three canned queries over an in-memory users/departments pair

use super::TableView;
use crate::error::DeskResult;
use crate::model::filter::ViewFilter;
use crate::model::join::NamedQuery;
use crate::store::Store;

pub struct JoinDesk {
    store: Store,
}

impl JoinDesk {
    /// Creates and seeds the demo tables; pass a fresh in-memory store
    pub fn open(store: Store) -> DeskResult<Self> {
        store.init_demo()?;
        Ok(Self { store })
    }

    /// Run a named query; the column headers come from the result shape
    pub fn run_named_query(
        &mut self,
        view: &mut dyn TableView,
        query: NamedQuery,
    ) -> DeskResult<()> {
        let result = match self.store.run_named_query(query) {
            Ok(result) => result,
            Err(err) => {
                view.set_status("Query failed".to_string());
                return Err(err.into());
            }
        };

        let count = result.rows.len();
        view.set_rows(result.headers, result.rows);
        view.set_filter(&ViewFilter::All);
        view.set_summary(String::new());
        view.set_status(format!("{}: {} rows found", query.label(), count));
        Ok(())
    }

    pub fn close(self) -> DeskResult<()> {
        self.store.close()?;
        Ok(())
    }
}
