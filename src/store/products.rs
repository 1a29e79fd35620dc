//! Statements against the `products` table

use super::Store;
use crate::model::filter::ViewFilter;
use crate::model::product::{NewProduct, Product, ProductPatch};
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

const SELECT_PRODUCTS: &str = "SELECT id, name, category, price, quantity FROM products";

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        price: row.get(3)?,
        quantity: row.get::<_, Option<i64>>(4)?.unwrap_or(0),
    })
}

impl Store {
    /// Products matching `filter`, ordered by name
    pub fn list_products(&self, filter: &ViewFilter) -> rusqlite::Result<Vec<Product>> {
        debug!(?filter, "listing products");
        let rows = match filter {
            ViewFilter::All => {
                let mut stmt = self
                    .conn()
                    .prepare(&format!("{} ORDER BY name", SELECT_PRODUCTS))?;
                let rows = stmt.query_map([], product_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            ViewFilter::Category(category) => {
                let mut stmt = self.conn().prepare(&format!(
                    "{} WHERE category = ?1 ORDER BY name",
                    SELECT_PRODUCTS
                ))?;
                let rows = stmt.query_map([category], product_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            ViewFilter::Search(term) => {
                let mut stmt = self.conn().prepare(&format!(
                    "{} WHERE instr({}(name), ?1) > 0 ORDER BY name",
                    SELECT_PRODUCTS,
                    super::FOLD_CASE
                ))?;
                let rows = stmt.query_map([term.to_lowercase()], product_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(rows)
    }

    pub fn get_product(&self, id: i64) -> rusqlite::Result<Option<Product>> {
        self.conn()
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_PRODUCTS),
                [id],
                product_from_row,
            )
            .optional()
    }

    /// Insert and return the assigned id
    pub fn insert_product(&self, product: &NewProduct) -> rusqlite::Result<i64> {
        self.conn().execute(
            "INSERT INTO products (name, category, price, quantity) VALUES (?1, ?2, ?3, ?4)",
            params![product.name, product.category, product.price, product.quantity],
        )?;
        let id = self.conn().last_insert_rowid();
        info!(id, name = %product.name, "inserted product");
        Ok(id)
    }

    /// Apply the non-`None` columns of `patch`; returns the number of rows changed
    pub fn update_product(&self, id: i64, patch: &ProductPatch) -> rusqlite::Result<usize> {
        let changed = self.conn().execute(
            "UPDATE products SET
                name = COALESCE(?1, name),
                category = COALESCE(?2, category),
                price = COALESCE(?3, price),
                quantity = COALESCE(?4, quantity)
             WHERE id = ?5",
            params![patch.name, patch.category, patch.price, patch.quantity, id],
        )?;
        info!(id, changed, "updated product");
        Ok(changed)
    }

    pub fn delete_product(&self, id: i64) -> rusqlite::Result<usize> {
        let removed = self
            .conn()
            .execute("DELETE FROM products WHERE id = ?1", [id])?;
        info!(id, removed, "deleted product");
        Ok(removed)
    }

    /// Distinct non-empty categories, sorted
    pub fn product_categories(&self) -> rusqlite::Result<Vec<String>> {
        let mut stmt = self.conn().prepare(
            "SELECT DISTINCT category FROM products
             WHERE category IS NOT NULL AND category <> ''
             ORDER BY category",
        )?;
        let categories = stmt.query_map([], |row| row.get::<_, String>(0))?;
        categories.collect()
    }

    pub fn count_products(&self) -> rusqlite::Result<i64> {
        self.conn()
            .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))
    }
}
