//! Customer data access boundary.
//!
//! Both read operations go through [`CustomerRepository`]. The Postgres
//! adapter is the production path; the in-memory adapter backs development
//! runs without a database and the test suites.

pub mod in_memory;
pub mod postgres;
pub mod row;
pub mod r#trait;

pub use in_memory::InMemoryCustomerRepository;
pub use postgres::PostgresCustomerRepository;
pub use row::{customer_from_row, RowReader};
pub use r#trait::{CustomerRepository, RepositoryError};
