use std::sync::Arc;

use thiserror::Error;

use customers_core::{Customer, CustomerName};

/// Failure reported by the backing store.
///
/// None of these are recoverable by the caller; the HTTP layer surfaces them
/// as a generic server error without leaking the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store could not be reached (pool closed/timed out, I/O, TLS).
    #[error("connection error: {0}")]
    Connection(String),

    /// The store rejected or failed the query.
    #[error("query error: {0}")]
    Query(String),

    /// A returned row could not be mapped to a `Customer`.
    #[error("row mapping error: {0}")]
    Mapping(String),
}

/// Read-only access to the `customer` table.
///
/// Every call is a single round trip; nothing is cached between calls.
#[async_trait::async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers, in the store's natural order.
    async fn all(&self) -> Result<Vec<Customer>, RepositoryError>;

    /// Customers whose `name` equals `name` exactly (case-sensitive).
    async fn by_name(&self, name: &CustomerName) -> Result<Vec<Customer>, RepositoryError>;
}

#[async_trait::async_trait]
impl<R> CustomerRepository for Arc<R>
where
    R: CustomerRepository + ?Sized,
{
    async fn all(&self) -> Result<Vec<Customer>, RepositoryError> {
        (**self).all().await
    }

    async fn by_name(&self, name: &CustomerName) -> Result<Vec<Customer>, RepositoryError> {
        (**self).by_name(name).await
    }
}
