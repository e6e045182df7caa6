use std::collections::BTreeMap;

use uuid::Uuid;

use custodia_domain::customer::{Customer, CustomerInput, validate_mail};

use crate::domain::repository::CustomerRepository;
use crate::error::CustomersServiceError;

// ── CreateCustomer ───────────────────────────────────────────────────────────

pub struct CreateCustomerInput {
    pub mail: String,
}

pub struct CreateCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> CreateCustomerUseCase<R> {
    /// Validate the input, then persist. Validation failures never reach
    /// the repository; every violated field is reported in one error.
    pub async fn execute(
        &self,
        input: CreateCustomerInput,
    ) -> Result<Customer, CustomersServiceError> {
        let mut field_errors = BTreeMap::new();
        if let Err(e) = validate_mail(&input.mail) {
            field_errors.insert("mail".to_owned(), e.message().to_owned());
        }
        if !field_errors.is_empty() {
            return Err(CustomersServiceError::Validation(field_errors));
        }
        self.repo.save(&CustomerInput { mail: input.mail }).await
    }
}

// ── GetCustomer ──────────────────────────────────────────────────────────────

pub struct GetCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> GetCustomerUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Customer, CustomersServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CustomersServiceError::CustomerNotFound(id))
    }
}
