//! `customers-core` — domain building blocks for the customer lookup service.
//!
//! This crate contains **pure domain** types (no infrastructure concerns).

pub mod customer;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use customer::Customer;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::CustomerId;
pub use value_object::{CAPITALIZED_NAME_RULE, CustomerName, ValueObject};
