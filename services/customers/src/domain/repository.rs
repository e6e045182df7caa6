#![allow(async_fn_in_trait)]

use uuid::Uuid;

use custodia_domain::customer::{Customer, CustomerInput};

use crate::error::CustomersServiceError;

/// Repository for customers.
///
/// Callers depend only on this trait; `infra::db` provides the concrete
/// adapter. Swapping the storage backend means swapping the adapter.
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer with a freshly assigned id and return it.
    ///
    /// Fails only on storage-layer errors, including the uniqueness
    /// constraint on `mail`.
    async fn save(&self, input: &CustomerInput) -> Result<Customer, CustomersServiceError>;

    /// Look up a customer by id. `None` means no such row; translating
    /// that into a not-found failure is the usecase layer's job.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, CustomersServiceError>;
}
