use serde::Serialize;

use customers_core::{Customer, Entity};

/// Wire shape of a customer: `{"id": <int>, "name": <str>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id().get(),
            name: c.name().to_owned(),
        }
    }
}

pub fn customers_to_response(customers: Vec<Customer>) -> Vec<CustomerResponse> {
    customers.into_iter().map(CustomerResponse::from).collect()
}
