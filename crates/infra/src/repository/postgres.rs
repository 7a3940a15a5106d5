//! Postgres-backed customer repository.
//!
//! Issues exactly two statements against the `customer` table:
//!
//! | operation | SQL |
//! |-----------|-----|
//! | `all` | `SELECT * FROM customer` |
//! | `by_name` | `SELECT * FROM customer WHERE name = $1` |
//!
//! The name is always bound as a parameter, never interpolated.
//!
//! ## Error Mapping
//!
//! | SQLx Error | RepositoryError |
//! |------------|-----------------|
//! | `PoolClosed`, `PoolTimedOut`, `Io`, `Tls` | `Connection` |
//! | `ColumnNotFound`, `ColumnDecode`, `Decode`, `TypeNotFound` | `Mapping` |
//! | `Database` and anything else | `Query` |

use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::instrument;

use customers_core::{Customer, CustomerName};

use super::row::customer_from_row;
use super::r#trait::{CustomerRepository, RepositoryError};

const SELECT_ALL: &str = "SELECT * FROM customer";
const SELECT_BY_NAME: &str = "SELECT * FROM customer WHERE name = $1";

/// Postgres customer repository over a shared SQLx pool.
///
/// Connection pooling policy is left entirely to the pool.
#[derive(Debug, Clone)]
pub struct PostgresCustomerRepository {
    pool: Arc<PgPool>,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Open a pool against `database_url` and wrap it.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }
}

#[async_trait::async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    #[instrument(skip(self), err)]
    async fn all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("all", e))?;

        rows.iter().map(customer_from_row).collect()
    }

    #[instrument(skip(self, name), fields(name = %name.as_str()), err)]
    async fn by_name(&self, name: &CustomerName) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query(SELECT_BY_NAME)
            .bind(name.as_str())
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("by_name", e))?;

        rows.iter().map(customer_from_row).collect()
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
            RepositoryError::Connection(format!("{operation}: {err}"))
        }
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
            RepositoryError::Connection(format!("{operation}: {err}"))
        }
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::Mapping(format!("{operation}: {err}")),
        sqlx::Error::Database(db_err) => {
            RepositoryError::Query(format!("database error in {operation}: {}", db_err.message()))
        }
        _ => RepositoryError::Query(format!("sqlx error in {operation}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_are_parameterized() {
        assert_eq!(SELECT_ALL, "SELECT * FROM customer");
        assert!(SELECT_BY_NAME.ends_with("WHERE name = $1"));
    }

    #[test]
    fn pool_failures_map_to_connection_errors() {
        let err = map_sqlx_error("all", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Connection(msg) if msg.starts_with("all:")));
    }

    #[test]
    fn missing_columns_map_to_mapping_errors() {
        let err = map_sqlx_error("by_name", sqlx::Error::ColumnNotFound("name".into()));
        assert!(matches!(err, RepositoryError::Mapping(_)));
    }

    #[test]
    fn other_failures_map_to_query_errors() {
        let err = map_sqlx_error("all", sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Query(_)));
    }
}
