use std::sync::RwLock;

use customers_core::{Customer, CustomerId, CustomerName};

use super::r#trait::{CustomerRepository, RepositoryError};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Customer>,
    last_id: i32,
}

/// In-memory customer table for tests/dev.
///
/// Rows come back in insertion order; ids are assigned 1, 2, 3, ...
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    inner: RwLock<Table>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table pre-populated with `names`, in order.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        if let Ok(mut table) = repo.inner.write() {
            for name in names {
                push_row(&mut table, name.into());
            }
        }
        repo
    }

    /// Insert a row, returning it with its assigned id.
    pub fn insert(&self, name: impl Into<String>) -> Result<Customer, RepositoryError> {
        let mut table = self.inner.write().map_err(|_| poisoned())?;
        Ok(push_row(&mut table, name.into()))
    }
}

fn push_row(table: &mut Table, name: String) -> Customer {
    table.last_id += 1;
    let customer = Customer::new(CustomerId::new(table.last_id), name);
    table.rows.push(customer.clone());
    customer
}

fn poisoned() -> RepositoryError {
    RepositoryError::Connection("in-memory customer table lock poisoned".to_string())
}

#[async_trait::async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let table = self.inner.read().map_err(|_| poisoned())?;
        Ok(table.rows.clone())
    }

    async fn by_name(&self, name: &CustomerName) -> Result<Vec<Customer>, RepositoryError> {
        let table = self.inner.read().map_err(|_| poisoned())?;
        Ok(table
            .rows
            .iter()
            .filter(|c| c.name() == name.as_str())
            .cloned()
            .collect())
    }
}
