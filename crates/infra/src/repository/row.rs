//! Row → `Customer` mapping.
//!
//! The mapping is fixed and explicit: column `id` becomes the identifier,
//! column `name` the name. [`RowReader`] keeps it independent of the driver
//! so it can be exercised without a database.

use sqlx::Row;
use sqlx::postgres::PgRow;

use customers_core::{Customer, CustomerId};

use super::r#trait::RepositoryError;

/// Column accessor over a single result row.
pub trait RowReader {
    fn get_i32(&self, column: &str) -> Result<i32, RepositoryError>;
    fn get_string(&self, column: &str) -> Result<String, RepositoryError>;
}

impl RowReader for PgRow {
    fn get_i32(&self, column: &str) -> Result<i32, RepositoryError> {
        self.try_get::<i32, _>(column)
            .map_err(|e| RepositoryError::Mapping(format!("column `{column}`: {e}")))
    }

    fn get_string(&self, column: &str) -> Result<String, RepositoryError> {
        self.try_get::<String, _>(column)
            .map_err(|e| RepositoryError::Mapping(format!("column `{column}`: {e}")))
    }
}

pub fn customer_from_row<R: RowReader + ?Sized>(row: &R) -> Result<Customer, RepositoryError> {
    let id = row.get_i32("id")?;
    let name = row.get_string("name")?;
    Ok(Customer::new(CustomerId::new(id), name))
}
