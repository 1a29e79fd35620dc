//! Product desk: add/update/delete, category filter, name search

use super::{headers_of, TableView};
use crate::error::{DeskError, DeskResult};
use crate::model::filter::ViewFilter;
use crate::model::modal::PendingDelete;
use crate::model::notice::Notice;
use crate::model::product::{Product, ProductForm, ProductSummary, PRODUCT_HEADERS};
use crate::model::ui::Tab;
use crate::store::Store;
use tracing::warn;

pub struct ProductDesk {
    store: Store,
    filter: ViewFilter,
    /// Rows currently in the table, in display order
    shown: Vec<Product>,
}

impl ProductDesk {
    /// Take ownership of the store, creating and seeding the table if needed
    pub fn open(store: Store) -> DeskResult<Self> {
        store.init_products()?;
        Ok(Self {
            store,
            filter: ViewFilter::All,
            shown: Vec::new(),
        })
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    #[cfg(test)]
    pub fn shown(&self) -> &[Product] {
        &self.shown
    }

    /// Id of the row at a table index
    pub fn id_at(&self, index: usize) -> Option<i64> {
        self.shown.get(index).map(|p| p.id)
    }

    /// Read rows for `filter`, replace the table, and recompute the summary
    pub fn load_all(&mut self, view: &mut dyn TableView, filter: ViewFilter) -> DeskResult<()> {
        let products = self.store.list_products(&filter)?;
        let summary = ProductSummary::from_products(&products);

        view.set_rows(
            headers_of(&PRODUCT_HEADERS),
            products.iter().map(Product::cells).collect(),
        );
        view.set_summary(summary.line());
        view.set_filter(&filter);

        self.shown = products;
        self.filter = filter;
        Ok(())
    }

    pub fn reset(&mut self, view: &mut dyn TableView) -> DeskResult<()> {
        self.load_all(view, ViewFilter::All)
    }

    /// `None` is the "All categories" choice
    pub fn filter_by_category(
        &mut self,
        view: &mut dyn TableView,
        category: Option<String>,
    ) -> DeskResult<()> {
        match category {
            Some(category) => self.load_all(view, ViewFilter::Category(category)),
            None => self.reset(view),
        }
    }

    /// Search names; no match is reported as an informational notice
    pub fn search(&mut self, view: &mut dyn TableView, term: &str) -> DeskResult<Option<Notice>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DeskError::MissingField {
                field: "Search text",
            });
        }

        self.load_all(view, ViewFilter::Search(term.to_string()))?;
        if self.shown.is_empty() {
            view.set_status(format!("No products match \"{}\"", term));
            return Ok(Some(Notice::info("Search", "No products found")));
        }
        view.set_status(format!("{} products match \"{}\"", self.shown.len(), term));
        Ok(None)
    }

    /// Refresh the distinct category list used by the filter picker
    pub fn refresh_categories(&self, view: &mut dyn TableView) -> DeskResult<()> {
        view.set_filter_options(self.store.product_categories()?);
        Ok(())
    }

    pub fn create(&mut self, view: &mut dyn TableView, form: &ProductForm) -> DeskResult<Notice> {
        let product = form.to_new()?;
        let id = self.store.insert_product(&product)?;

        self.reset(view)?;
        self.refresh_categories(view)?;
        view.clear_form();
        view.set_status(format!("Product #{} added", id));
        Ok(Notice::info(
            "Success",
            format!("Product '{}' added", product.name),
        ))
    }

    /// Blank form fields keep their stored values
    pub fn update(
        &mut self,
        view: &mut dyn TableView,
        selected: Option<i64>,
        form: &ProductForm,
    ) -> DeskResult<Notice> {
        let id = selected.ok_or(DeskError::NoSelection)?;
        let patch = form.to_patch()?;

        if self.store.update_product(id, &patch)? == 0 {
            warn!(id, "update target vanished");
            return Err(DeskError::NotFound(id));
        }

        self.reset(view)?;
        self.refresh_categories(view)?;
        view.set_status(format!("Product #{} updated", id));
        Ok(Notice::info("Success", "Product updated"))
    }

    /// First half of a delete: look up the row to name it in the prompt
    pub fn request_delete(&self, selected: Option<i64>) -> DeskResult<PendingDelete> {
        let id = selected.ok_or(DeskError::NoSelection)?;
        let product = self.store.get_product(id)?.ok_or(DeskError::NotFound(id))?;
        Ok(PendingDelete {
            tab: Tab::Products,
            id,
            name: product.name,
        })
    }

    /// Second half of a delete, after the user said yes
    pub fn confirm_delete(
        &mut self,
        view: &mut dyn TableView,
        pending: &PendingDelete,
    ) -> DeskResult<Notice> {
        if self.store.delete_product(pending.id)? == 0 {
            return Err(DeskError::NotFound(pending.id));
        }

        self.reset(view)?;
        self.refresh_categories(view)?;
        view.set_status(format!("Product #{} deleted", pending.id));
        Ok(Notice::info(
            "Success",
            format!("Product '{}' deleted", pending.name),
        ))
    }

    /// Copy the selected row's stored values into the form
    pub fn fill_form(&self, view: &mut dyn TableView, selected: Option<i64>) -> DeskResult<()> {
        let id = selected.ok_or(DeskError::NoSelection)?;
        let product = self.store.get_product(id)?.ok_or(DeskError::NotFound(id))?;
        view.set_form(product.form_values());
        view.set_status(format!("Editing product #{}", id));
        Ok(())
    }

    pub fn close(self) -> DeskResult<()> {
        self.store.close()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desk::testing::RecordingView;
    use crate::error::ErrorKind;

    fn desk() -> (ProductDesk, RecordingView) {
        let mut desk = ProductDesk::open(Store::open_in_memory().unwrap()).unwrap();
        let mut view = RecordingView::default();
        desk.reset(&mut view).unwrap();
        desk.refresh_categories(&mut view).unwrap();
        (desk, view)
    }

    fn form(name: &str, category: &str, price: &str, quantity: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            category: category.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    fn id_of(desk: &ProductDesk, name: &str) -> i64 {
        desk.shown().iter().find(|p| p.name == name).unwrap().id
    }

    #[test]
    fn test_load_all_fills_view() {
        let (desk, view) = desk();
        assert_eq!(view.headers, vec!["ID", "Name", "Category", "Price", "Quantity"]);
        assert_eq!(view.rows.len(), 8);
        assert_eq!(desk.shown().len(), 8);
        assert_eq!(view.options.len(), 5);
        assert_eq!(view.filter, ViewFilter::All);
    }

    #[test]
    fn test_create_adds_exactly_one_row() {
        let (mut desk, mut view) = desk();
        view.form = vec!["stale".to_string()];
        let before = view.rows.len();

        let notice = desk
            .create(&mut view, &form("Desk Lamp", "Lighting", "1500.5", "3"))
            .unwrap();
        assert!(notice.message.contains("Desk Lamp"));

        assert_eq!(view.rows.len(), before + 1);
        let added = desk.shown().iter().find(|p| p.name == "Desk Lamp").unwrap();
        assert_eq!(added.category.as_deref(), Some("Lighting"));
        assert_eq!(added.price, 1500.5);
        assert_eq!(added.quantity, 3);
        assert!(view.options.contains(&"Lighting".to_string()));
        assert!(view.form.is_empty());
    }

    #[test]
    fn test_create_validation_leaves_store_alone() {
        let (mut desk, mut view) = desk();

        let err = desk.create(&mut view, &form("", "X", "1", "1")).unwrap_err();
        assert!(matches!(err, DeskError::MissingField { .. }));

        let err = desk
            .create(&mut view, &form("Lamp", "X", "cheap", "1"))
            .unwrap_err();
        assert!(matches!(err, DeskError::InvalidNumber { .. }));
        assert_eq!(err.kind(), ErrorKind::Validation);

        desk.reset(&mut view).unwrap();
        assert_eq!(view.rows.len(), 8);
    }

    #[test]
    fn test_create_returns_to_unfiltered() {
        let (mut desk, mut view) = desk();
        desk.filter_by_category(&mut view, Some("Books".to_string()))
            .unwrap();
        assert_eq!(view.rows.len(), 1);

        desk.create(&mut view, &form("Atlas", "Books", "10", "1"))
            .unwrap();
        assert_eq!(desk.filter(), &ViewFilter::All);
        assert_eq!(view.rows.len(), 9);
    }

    #[test]
    fn test_update_requires_selection() {
        let (mut desk, mut view) = desk();
        let err = desk
            .update(&mut view, None, &form("x", "", "", ""))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSelection);
    }

    #[test]
    fn test_update_keeps_blank_fields() {
        let (mut desk, mut view) = desk();
        let id = id_of(&desk, "Monitor");

        desk.update(&mut view, Some(id), &form("", "", "19999.99", ""))
            .unwrap();

        let monitor = desk.shown().iter().find(|p| p.id == id).unwrap();
        assert_eq!(monitor.name, "Monitor");
        assert_eq!(monitor.category.as_deref(), Some("Electronics"));
        assert_eq!(monitor.price, 19999.99);
        assert_eq!(monitor.quantity, 8);
    }

    #[test]
    fn test_update_rejects_bad_number_without_mutation() {
        let (mut desk, mut view) = desk();
        let id = id_of(&desk, "Monitor");

        let err = desk
            .update(&mut view, Some(id), &form("Renamed", "", "", "many"))
            .unwrap_err();
        assert!(matches!(err, DeskError::InvalidNumber { field: "Quantity", .. }));

        desk.reset(&mut view).unwrap();
        assert!(desk.shown().iter().any(|p| p.name == "Monitor"));
    }

    #[test]
    fn test_update_vanished_row() {
        let (mut desk, mut view) = desk();
        let err = desk
            .update(&mut view, Some(4242), &form("x", "", "", ""))
            .unwrap_err();
        assert!(matches!(err, DeskError::NotFound(4242)));
    }

    #[test]
    fn test_delete_two_phase() {
        let (mut desk, mut view) = desk();
        let id = id_of(&desk, "T-shirt");

        assert_eq!(
            desk.request_delete(None).unwrap_err().kind(),
            ErrorKind::NoSelection
        );

        let pending = desk.request_delete(Some(id)).unwrap();
        assert_eq!(pending.name, "T-shirt");
        assert_eq!(pending.tab, Tab::Products);

        // Declining is simply not calling confirm_delete
        desk.reset(&mut view).unwrap();
        assert_eq!(view.rows.len(), 8);

        desk.confirm_delete(&mut view, &pending).unwrap();
        assert_eq!(view.rows.len(), 7);
        assert!(desk.shown().iter().all(|p| p.id != id));
        assert!(!view.options.contains(&"Clothing".to_string()));
    }

    #[test]
    fn test_fill_form_copies_stored_values() {
        let (desk, mut view) = desk();
        let id = id_of(&desk, "Python Book");
        desk.fill_form(&mut view, Some(id)).unwrap();
        assert_eq!(view.form, vec!["Python Book", "Books", "1200", "30"]);
    }

    #[test]
    fn test_summary_matches_shown_rows() {
        let (mut desk, mut view) = desk();
        for filter in [
            ViewFilter::All,
            ViewFilter::Category("Accessories".to_string()),
            ViewFilter::Search("o".to_string()),
        ] {
            desk.load_all(&mut view, filter).unwrap();
            let expected = ProductSummary::from_products(desk.shown());
            assert_eq!(view.summary, expected.line());
            assert_eq!(view.rows.len(), expected.count);
        }

        desk.filter_by_category(&mut view, Some("Accessories".to_string()))
            .unwrap();
        assert_eq!(
            view.summary,
            "Products: 2 | Total value: 207,000.00 | Average price: 2,150.00"
        );
    }

    #[test]
    fn test_search_not_found_is_notice() {
        let (mut desk, mut view) = desk();
        let notice = desk.search(&mut view, "zeppelin").unwrap();
        assert!(notice.is_some());
        assert!(view.rows.is_empty());
        assert_eq!(
            view.summary,
            "Products: 0 | Total value: 0.00 | Average price: 0.00"
        );
        assert_ne!(desk.filter(), &ViewFilter::All);
    }

    #[test]
    fn test_search_empty_term() {
        let (mut desk, mut view) = desk();
        let err = desk.search(&mut view, "  ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(desk.filter(), &ViewFilter::All);
    }

    #[test]
    fn test_filter_none_resets() {
        let (mut desk, mut view) = desk();
        desk.search(&mut view, "phone").unwrap();
        assert_eq!(view.rows.len(), 2);
        desk.filter_by_category(&mut view, None).unwrap();
        assert_eq!(view.rows.len(), 8);
        assert_eq!(desk.filter(), &ViewFilter::All);
    }
}
