//! Domain entities shown on the back-office list pages

#[macro_use]
pub mod macros;

pub mod customer;
pub mod order;
pub mod product;
pub mod promotion;

pub use customer::{Customer, CustomerMarketing, CustomerSegment, CustomerStats, CustomerStatus};
pub use order::{Order, OrderCustomer, OrderStatus, PaymentStatus};
pub use product::{Product, ProductStatus};
pub use promotion::{Promotion, PromotionKind, PromotionStatus};
