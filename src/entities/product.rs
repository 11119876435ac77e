//! Product records for the catalogue list page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

crate::field_enum!(
    /// Publication state of a product
    ProductStatus {
        Active => "active",
        Draft => "draft",
        Archived => "archived",
    }
);

/// Stock level at or below which a product counts as low stock
pub const LOW_STOCK_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub status: ProductStatus,
    pub price: f64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sku: sku.into(),
            category: category.into(),
            status: ProductStatus::Active,
            price,
            stock,
            created_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    /// Inventory label shown in the stock column and used as a filter
    pub fn stock_level(&self) -> &'static str {
        match self.stock {
            s if s <= 0 => "out-of-stock",
            s if s <= LOW_STOCK_THRESHOLD => "low-stock",
            _ => "in-stock",
        }
    }
}

impl crate::core::record::Record for Product {
    fn field_value(&self, path: &str) -> Option<crate::core::field::FieldValue> {
        use crate::core::field::FieldValue;

        let value = match path {
            "id" => FieldValue::from(self.id),
            "name" => FieldValue::from(self.name.as_str()),
            "sku" => FieldValue::from(self.sku.as_str()),
            "category" => FieldValue::from(self.category.as_str()),
            "status" => FieldValue::from(self.status),
            "price" => FieldValue::from(self.price),
            "stock" => FieldValue::from(self.stock),
            "stock_level" => FieldValue::from(self.stock_level()),
            "created_at" => FieldValue::from(self.created_at),
            _ => return None,
        };
        Some(value)
    }

    fn default_search_fields() -> &'static [&'static str] {
        &["name", "sku", "category"]
    }
}
