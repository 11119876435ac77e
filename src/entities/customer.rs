//! Customer records for the customers list page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

crate::field_enum!(
    /// Account state of a customer
    CustomerStatus {
        Active => "active",
        Inactive => "inactive",
        Blocked => "blocked",
    }
);

crate::field_enum!(
    /// Marketing segment a customer belongs to
    CustomerSegment {
        Vip => "vip",
        Regular => "regular",
        New => "new",
        AtRisk => "at-risk",
    }
);

/// Marketing preferences and segmentation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerMarketing {
    pub customer_segment: Option<CustomerSegment>,
    pub accepts_marketing: bool,
}

/// Purchase statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerStats {
    pub total_spent: f64,
    pub order_count: u32,
    pub last_order_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: CustomerStatus,
    pub marketing: CustomerMarketing,
    pub stats: CustomerStats,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create an active customer with no segment and no orders yet
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: None,
            status: CustomerStatus::Active,
            marketing: CustomerMarketing::default(),
            stats: CustomerStats::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_segment(mut self, segment: CustomerSegment) -> Self {
        self.marketing.customer_segment = Some(segment);
        self
    }

    pub fn with_stats(mut self, total_spent: f64, order_count: u32) -> Self {
        self.stats.total_spent = total_spent;
        self.stats.order_count = order_count;
        self
    }

    pub fn with_status(mut self, status: CustomerStatus) -> Self {
        self.status = status;
        self
    }

    /// Average order value, 0 when the customer never ordered
    pub fn average_order_value(&self) -> f64 {
        if self.stats.order_count == 0 {
            0.0
        } else {
            self.stats.total_spent / f64::from(self.stats.order_count)
        }
    }
}

crate::impl_record!(
    Customer,
    search: ["name", "email", "phone"],
    fields: {
        "id" => id,
        "name" => name,
        "email" => email,
        "phone" => phone,
        "status" => status,
        "segment" => marketing.customer_segment,
        "marketing.customer_segment" => marketing.customer_segment,
        "marketing.accepts_marketing" => marketing.accepts_marketing,
        "stats.total_spent" => stats.total_spent,
        "stats.order_count" => stats.order_count,
        "stats.last_order_at" => stats.last_order_at,
        "created_at" => created_at,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::record::Record;

    #[test]
    fn test_segment_paths_agree() {
        let customer = Customer::new("Ana", "ana@shop.test").with_segment(CustomerSegment::Vip);
        let expected = Some(FieldValue::String("vip".to_string()));
        assert_eq!(customer.field_value("segment"), expected);
        assert_eq!(customer.field_value("marketing.customer_segment"), expected);
    }

    #[test]
    fn test_missing_segment_is_null() {
        let customer = Customer::new("Bea", "bea@shop.test");
        assert_eq!(customer.field_value("segment"), Some(FieldValue::Null));
    }

    #[test]
    fn test_nested_stats() {
        let customer = Customer::new("Cas", "cas@shop.test").with_stats(250.0, 4);
        assert_eq!(
            customer.field_value("stats.total_spent"),
            Some(FieldValue::Float(250.0))
        );
        assert_eq!(
            customer.field_value("stats.order_count"),
            Some(FieldValue::Integer(4))
        );
        assert_eq!(customer.average_order_value(), 62.5);
    }

    #[test]
    fn test_segment_serde_name() {
        let json = serde_json::to_value(CustomerSegment::AtRisk).unwrap();
        assert_eq!(json, "at-risk");
    }
}
