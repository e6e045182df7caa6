use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use custodia_domain::customer::Customer;

use crate::error::CustomersServiceError;
use crate::router::CUSTOMERS_BASE;
use crate::state::AppState;
use crate::usecase::customer::{
    CreateCustomerInput, CreateCustomerUseCase, GetCustomerUseCase,
};

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCustomerRequest {
    /// Absent is treated the same as blank: the validation pipeline
    /// reports both as a required-field failure.
    pub mail: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub mail: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            mail: customer.mail,
        }
    }
}

// ── POST /customers ──────────────────────────────────────────────────────────

pub async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, CustomersServiceError> {
    let usecase = CreateCustomerUseCase {
        repo: state.customer_repo(),
    };
    let customer = usecase
        .execute(CreateCustomerInput {
            mail: body.mail.unwrap_or_default(),
        })
        .await?;
    let location = format!("{CUSTOMERS_BASE}/{}", customer.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CustomerResponse::from(customer)),
    ))
}

// ── GET /customers/{id} ──────────────────────────────────────────────────────

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, CustomersServiceError> {
    let usecase = GetCustomerUseCase {
        repo: state.customer_repo(),
    };
    let customer = usecase.execute(id).await?;
    Ok(Json(customer.into()))
}
