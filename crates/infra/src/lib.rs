//! Infrastructure layer: customer storage adapters and process configuration.

pub mod config;
pub mod repository;

pub use config::{AppConfig, ConfigError};
pub use repository::{
    CustomerRepository, InMemoryCustomerRepository, PostgresCustomerRepository, RepositoryError,
};
