//! Order records for the orders list page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

crate::field_enum!(
    /// Fulfilment state of an order
    OrderStatus {
        Pending => "pending",
        Processing => "processing",
        Shipped => "shipped",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
);

crate::field_enum!(
    /// Payment state of an order
    PaymentStatus {
        Pending => "pending",
        Paid => "paid",
        Failed => "failed",
        Refunded => "refunded",
    }
);

/// Buyer details copied onto the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub number: String,
    pub customer: OrderCustomer,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub total: f64,
    pub items_count: u32,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        number: impl Into<String>,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        total: f64,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: number.into(),
            customer: OrderCustomer {
                name: customer_name.into(),
                email: customer_email.into(),
            },
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            total,
            items_count: 1,
            placed_at,
        }
    }

    pub fn with_status(mut self, status: OrderStatus, payment_status: PaymentStatus) -> Self {
        self.status = status;
        self.payment_status = payment_status;
        self
    }
}

crate::impl_record!(
    Order,
    search: ["number", "customer.name", "customer.email"],
    fields: {
        "id" => id,
        "number" => number,
        "customer.name" => customer.name,
        "customer.email" => customer.email,
        "status" => status,
        "payment_status" => payment_status,
        "total" => total,
        "items_count" => items_count,
        "placed_at" => placed_at,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::record::Record;

    #[test]
    fn test_customer_paths() {
        let order = Order::new("#1001", "Ana", "ana@shop.test", 99.9, Utc::now());
        assert_eq!(
            order.field_value("customer.email"),
            Some(FieldValue::String("ana@shop.test".to_string()))
        );
        assert_eq!(
            order.field_value("status"),
            Some(FieldValue::String("pending".to_string()))
        );
        assert_eq!(Order::default_search_fields().len(), 3);
    }
}
