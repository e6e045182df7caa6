use anyhow::Context as _;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use custodia_customers_schema::customers;
use custodia_domain::customer::{Customer, CustomerInput};

use crate::domain::repository::CustomerRepository;
use crate::error::CustomersServiceError;

/// sea-orm adapter for [`CustomerRepository`].
#[derive(Clone)]
pub struct DbCustomerRepository {
    pub db: DatabaseConnection,
}

impl CustomerRepository for DbCustomerRepository {
    async fn save(&self, input: &CustomerInput) -> Result<Customer, CustomersServiceError> {
        // The id is assigned here, not by the caller. A duplicate mail trips
        // the unique constraint and surfaces as the catch-all failure.
        let model = customers::ActiveModel {
            id: Set(Uuid::now_v7()),
            mail: Set(input.mail.clone()),
        }
        .insert(&self.db)
        .await
        .context("create customer")?;
        Ok(customer_from_model(model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, CustomersServiceError> {
        let model = customers::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find customer by id")?;
        Ok(model.map(customer_from_model))
    }
}

fn customer_from_model(model: customers::Model) -> Customer {
    Customer {
        id: model.id,
        mail: model.mail,
    }
}
