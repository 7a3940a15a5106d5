use std::sync::Arc;

use customers_infra::{
    AppConfig, CustomerRepository, InMemoryCustomerRepository, PostgresCustomerRepository,
    RepositoryError,
};
use customers_observability::ObservationRegistry;

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppServices {
    customers: Arc<dyn CustomerRepository>,
    observations: ObservationRegistry,
}

impl AppServices {
    pub fn new(customers: Arc<dyn CustomerRepository>, observations: ObservationRegistry) -> Self {
        Self {
            customers,
            observations,
        }
    }

    pub fn customers(&self) -> &dyn CustomerRepository {
        self.customers.as_ref()
    }

    pub fn observations(&self) -> &ObservationRegistry {
        &self.observations
    }
}

/// Wire the store selected by `config` into a fresh `AppServices`.
///
/// Without `DATABASE_URL` the service runs on an empty in-memory table.
pub async fn build_services(config: &AppConfig) -> Result<AppServices, RepositoryError> {
    let customers: Arc<dyn CustomerRepository> = match &config.database_url {
        Some(url) => {
            let repo = PostgresCustomerRepository::connect(url, config.max_connections).await?;
            tracing::info!(max_connections = config.max_connections, "connected to postgres");
            Arc::new(repo)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using an empty in-memory customer table");
            Arc::new(InMemoryCustomerRepository::new())
        }
    };

    Ok(AppServices::new(customers, ObservationRegistry::logging()))
}

/// Startup diagnostic: log every customer once. Failures are logged, not fatal.
pub async fn log_all_customers(services: &AppServices) {
    match services.customers().all().await {
        Ok(customers) => {
            for c in &customers {
                tracing::info!("{c}");
            }
        }
        Err(e) => tracing::warn!("initial customer listing failed: {e}"),
    }
}
