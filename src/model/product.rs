//! Product records, form input, and the derived summary

use super::input::{
    format_amount, non_negative, optional_decimal, optional_integer, optional_text, required_text,
};
use crate::error::DeskResult;

pub const PRODUCT_HEADERS: [&str; 5] = ["ID", "Name", "Category", "Price", "Quantity"];
pub const PRODUCT_FIELDS: [&str; 4] = ["Name", "Category", "Price", "Quantity"];

/// A row of the `products` table
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    /// Cells for the display table
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.category.clone().unwrap_or_default(),
            format_amount(self.price),
            self.quantity.to_string(),
        ]
    }

    /// Raw values for the edit form, in `PRODUCT_FIELDS` order
    pub fn form_values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category.clone().unwrap_or_default(),
            self.price.to_string(),
            self.quantity.to_string(),
        ]
    }
}

/// A validated product ready for INSERT
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

/// Column changes for UPDATE; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }
}

/// Raw text of the product form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    /// Build from form values in `PRODUCT_FIELDS` order; missing values are blank
    pub fn from_values(values: &[String]) -> Self {
        let field = |i: usize| values.get(i).cloned().unwrap_or_default();
        Self {
            name: field(0),
            category: field(1),
            price: field(2),
            quantity: field(3),
        }
    }

    /// Blank price and quantity mean zero
    pub fn to_new(&self) -> DeskResult<NewProduct> {
        let name = required_text("Name", &self.name)?;
        let price = optional_decimal("Price", &self.price)?.unwrap_or(0.0);
        let price = non_negative("Price", price)?;
        let quantity = optional_integer("Quantity", &self.quantity)?.unwrap_or(0);

        Ok(NewProduct {
            name,
            category: optional_text(&self.category),
            price,
            quantity,
        })
    }

    /// Only non-blank fields are validated and changed
    pub fn to_patch(&self) -> DeskResult<ProductPatch> {
        let price = match optional_decimal("Price", &self.price)? {
            Some(p) => Some(non_negative("Price", p)?),
            None => None,
        };
        Ok(ProductPatch {
            name: optional_text(&self.name),
            category: optional_text(&self.category),
            price,
            quantity: optional_integer("Quantity", &self.quantity)?,
        })
    }
}

/// Aggregates over the rows currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductSummary {
    pub count: usize,
    pub total_value: f64,
    pub average_price: f64,
}

impl ProductSummary {
    pub fn from_products(products: &[Product]) -> Self {
        let count = products.len();
        let total_value = products
            .iter()
            .map(|p| p.price * p.quantity as f64)
            .sum();
        let price_sum: f64 = products.iter().map(|p| p.price).sum();
        let average_price = if count > 0 {
            price_sum / count as f64
        } else {
            0.0
        };

        Self {
            count,
            total_value,
            average_price,
        }
    }

    pub fn line(&self) -> String {
        format!(
            "Products: {} | Total value: {} | Average price: {}",
            self.count,
            format_amount(self.total_value),
            format_amount(self.average_price)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeskError;

    fn product(id: i64, price: f64, quantity: i64) -> Product {
        Product {
            id,
            name: format!("item {}", id),
            category: None,
            price,
            quantity,
        }
    }

    fn form(name: &str, category: &str, price: &str, quantity: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            category: category.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_to_new_defaults_blank_numbers() {
        let new = form("Lamp", "", "", "").to_new().unwrap();
        assert_eq!(new.name, "Lamp");
        assert_eq!(new.category, None);
        assert_eq!(new.price, 0.0);
        assert_eq!(new.quantity, 0);
    }

    #[test]
    fn test_to_new_checks_name_before_numbers() {
        let err = form(" ", "", "abc", "").to_new().unwrap_err();
        assert!(matches!(err, DeskError::MissingField { field: "Name" }));
    }

    #[test]
    fn test_to_new_rejects_bad_numbers() {
        let err = form("Lamp", "", "12a", "1").to_new().unwrap_err();
        assert!(matches!(err, DeskError::InvalidNumber { field: "Price", .. }));

        let err = form("Lamp", "", "12", "x").to_new().unwrap_err();
        assert!(matches!(err, DeskError::InvalidNumber { field: "Quantity", .. }));

        let err = form("Lamp", "", "-3", "1").to_new().unwrap_err();
        assert!(matches!(err, DeskError::Negative { field: "Price" }));
    }

    #[test]
    fn test_to_patch_blank_fields_are_none() {
        let patch = form("", "", "", "").to_patch().unwrap();
        assert_eq!(patch, ProductPatch::default());

        let patch = form("", "Books", "", "7").to_patch().unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.category.as_deref(), Some("Books"));
        assert_eq!(patch.quantity, Some(7));
    }

    #[test]
    fn test_from_values_pads_missing() {
        let values = vec!["Mouse".to_string(), "Accessories".to_string()];
        let form = ProductForm::from_values(&values);
        assert_eq!(form.name, "Mouse");
        assert_eq!(form.category, "Accessories");
        assert!(form.price.is_empty());
        assert!(form.quantity.is_empty());
    }

    #[test]
    fn test_form_values_round_trip_through_form() {
        let p = Product {
            id: 4,
            name: "Python Book".to_string(),
            category: Some("Books".to_string()),
            price: 1200.0,
            quantity: 30,
        };
        let new = ProductForm::from_values(&p.form_values()).to_new().unwrap();
        assert_eq!(new.name, p.name);
        assert_eq!(new.category, p.category);
        assert_eq!(new.price, p.price);
        assert_eq!(new.quantity, p.quantity);
    }

    #[test]
    fn test_summary() {
        let rows = vec![product(1, 100.0, 2), product(2, 50.0, 4)];
        let summary = ProductSummary::from_products(&rows);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_value, 400.0);
        assert_eq!(summary.average_price, 75.0);
    }

    #[test]
    fn test_summary_empty() {
        let summary = ProductSummary::from_products(&[]);
        assert_eq!(summary, ProductSummary::default());
        assert_eq!(
            summary.line(),
            "Products: 0 | Total value: 0.00 | Average price: 0.00"
        );
    }
}
