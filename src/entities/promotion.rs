//! Promotion records for the promotions list page

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

crate::field_enum!(
    /// How a promotion discounts an order
    PromotionKind {
        Percentage => "percentage",
        FixedAmount => "fixed-amount",
        FreeShipping => "free-shipping",
        BuyXGetY => "buy-x-get-y",
    }
);

crate::field_enum!(
    /// Lifecycle state of a promotion
    PromotionStatus {
        Draft => "draft",
        Scheduled => "scheduled",
        Active => "active",
        Paused => "paused",
        Expired => "expired",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub kind: PromotionKind,
    pub status: PromotionStatus,
    pub discount_value: f64,
    pub usage_count: u32,
    pub usage_limit: Option<u32>,
    pub starts_at: NaiveDate,
    pub ends_at: Option<NaiveDate>,
}

impl Promotion {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        kind: PromotionKind,
        discount_value: f64,
        starts_at: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            code: code.into(),
            kind,
            status: PromotionStatus::Draft,
            discount_value,
            usage_count: 0,
            usage_limit: None,
            starts_at,
            ends_at: None,
        }
    }

    pub fn with_status(mut self, status: PromotionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_usage(mut self, usage_count: u32, usage_limit: Option<u32>) -> Self {
        self.usage_count = usage_count;
        self.usage_limit = usage_limit;
        self
    }

    pub fn ending(mut self, ends_at: NaiveDate) -> Self {
        self.ends_at = Some(ends_at);
        self
    }

    /// Share of the usage limit consumed, `None` for unlimited promotions
    pub fn usage_ratio(&self) -> Option<f64> {
        self.usage_limit
            .filter(|limit| *limit > 0)
            .map(|limit| f64::from(self.usage_count) / f64::from(limit))
    }
}

crate::impl_record!(
    Promotion,
    search: ["name", "code"],
    fields: {
        "id" => id,
        "name" => name,
        "code" => code,
        "kind" => kind,
        "status" => status,
        "discount_value" => discount_value,
        "usage_count" => usage_count,
        "usage_limit" => usage_limit,
        "starts_at" => starts_at,
        "ends_at" => ends_at,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::record::Record;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dates_resolve_as_datetimes() {
        let promo = Promotion::new("Spring", "SPRING10", PromotionKind::Percentage, 10.0, date(2024, 3, 1));
        let value = promo.field_value("starts_at").unwrap();
        assert_eq!(
            value.as_datetime().map(|dt| dt.date_naive()),
            Some(date(2024, 3, 1))
        );
        assert_eq!(promo.field_value("ends_at"), Some(FieldValue::Null));
    }

    #[test]
    fn test_usage_ratio() {
        let promo = Promotion::new("Flash", "FLASH", PromotionKind::FixedAmount, 5.0, date(2024, 1, 1))
            .with_usage(30, Some(120));
        assert_eq!(promo.usage_ratio(), Some(0.25));

        let unlimited = promo.clone().with_usage(30, None);
        assert_eq!(unlimited.usage_ratio(), None);
    }
}
