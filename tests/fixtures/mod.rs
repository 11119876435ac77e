//! Shared mock data for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use listing::entities::{
    CustomerSegment, CustomerStatus, OrderStatus, PaymentStatus, ProductStatus, PromotionKind,
    PromotionStatus,
};
use listing::prelude::*;
use serde_json::{Value, json};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
}

fn customer(
    name: &str,
    email: &str,
    segment: Option<CustomerSegment>,
    total_spent: f64,
    orders: u32,
    created: DateTime<Utc>,
) -> Customer {
    let mut customer = Customer::new(name, email).with_stats(total_spent, orders);
    customer.marketing.customer_segment = segment;
    customer.created_at = created;
    customer
}

/// Eight customers; Hugo has no segment, Gil is blocked
pub fn customers() -> Vec<Customer> {
    vec![
        customer("Ana Lima", "ana@shop.test", Some(CustomerSegment::Vip), 1820.0, 14, at(2023, 3, 2)),
        customer("Bea Costa", "bea@shop.test", Some(CustomerSegment::Regular), 310.5, 4, at(2023, 6, 18)),
        customer("Cas Duarte", "cas@shop.test", Some(CustomerSegment::Vip), 2400.0, 20, at(2022, 11, 5)),
        customer("Dan Reis", "dan@mail.test", Some(CustomerSegment::New), 45.0, 1, at(2024, 1, 9)),
        customer("Eva Ramos", "eva@mail.test", Some(CustomerSegment::AtRisk), 120.0, 2, at(2022, 4, 27)),
        customer("Fred Alves", "fred@shop.test", Some(CustomerSegment::Regular), 560.0, 7, at(2023, 9, 1)),
        customer("Gil Souza", "gil@mail.test", Some(CustomerSegment::Regular), 0.0, 0, at(2024, 2, 14))
            .with_status(CustomerStatus::Blocked),
        customer("Hugo Pinto", "hugo@shop.test", None, 75.25, 1, at(2024, 2, 20)),
    ]
}

pub fn promotions() -> Vec<Promotion> {
    vec![
        Promotion::new("Spring Sale", "SPRING24", PromotionKind::Percentage, 15.0, date(2024, 3, 1))
            .with_status(PromotionStatus::Active)
            .with_usage(120, Some(500))
            .ending(date(2024, 3, 31)),
        Promotion::new("Free Shipping Week", "SHIPFREE", PromotionKind::FreeShipping, 0.0, date(2024, 2, 10))
            .with_status(PromotionStatus::Expired)
            .with_usage(860, None)
            .ending(date(2024, 2, 17)),
        Promotion::new("Welcome Ten", "WELCOME10", PromotionKind::FixedAmount, 10.0, date(2023, 10, 1))
            .with_status(PromotionStatus::Active)
            .with_usage(42, Some(1000)),
        Promotion::new("Summer Preview", "SUMMER", PromotionKind::Percentage, 20.0, date(2024, 6, 1))
            .with_status(PromotionStatus::Scheduled),
        Promotion::new("Buy Two", "B2G1", PromotionKind::BuyXGetY, 0.0, date(2024, 1, 15))
            .with_status(PromotionStatus::Paused)
            .with_usage(12, Some(100)),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product::new("Ceramic Mug", "MUG-001", "kitchen", 12.5, 40),
        Product::new("Desk Lamp", "LMP-002", "lighting", 49.0, 3),
        Product::new("Floor Lamp", "LMP-003", "lighting", 129.0, 0),
        Product::new("Chef Knife", "KNF-004", "kitchen", 89.9, 12),
        Product::new("Wall Clock", "CLK-005", "decor", 35.0, 5).with_status(ProductStatus::Draft),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order::new("#1001", "Ana Lima", "ana@shop.test", 250.0, at(2024, 3, 1))
            .with_status(OrderStatus::Delivered, PaymentStatus::Paid),
        Order::new("#1002", "Bea Costa", "bea@shop.test", 80.0, at(2024, 3, 2))
            .with_status(OrderStatus::Shipped, PaymentStatus::Paid),
        Order::new("#1003", "Ana Lima", "ana@shop.test", 35.5, at(2024, 3, 4)),
        Order::new("#1004", "Dan Reis", "dan@mail.test", 45.0, at(2024, 3, 5))
            .with_status(OrderStatus::Cancelled, PaymentStatus::Refunded),
    ]
}

/// The three-record store of the worked list-page examples
pub fn abc_store() -> Vec<Value> {
    vec![
        json!({ "name": "Ana", "segment": "vip" }),
        json!({ "name": "Bea", "segment": "regular" }),
        json!({ "name": "Cas", "segment": "vip" }),
    ]
}

pub fn names<R: Record>(rows: &[R]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            row.field_value("name")
                .and_then(|v| v.to_display_string())
                .unwrap_or_default()
        })
        .collect()
}
