use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customers service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CustomersServiceError {
    /// One or more request fields failed validation. Keyed by field name;
    /// every violated field appears in the one response.
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),
    #[error("Customer not found with id: {0}")]
    CustomerNotFound(Uuid),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CustomersServiceError {
    /// Build a `Validation` error from (field, message) pairs.
    pub fn validation<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Validation(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Wire shape for every error response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub description: String,
    #[serde(serialize_with = "custodia_core::serde::to_rfc3339_ms")]
    pub time: DateTime<Utc>,
    pub field_errors: BTreeMap<String, String>,
}

impl IntoResponse for CustomersServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        let description = match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                let message = e.to_string();
                if message.is_empty() {
                    "An unexpected error occurred".to_owned()
                } else {
                    message
                }
            }
            other => other.to_string(),
        };
        let field_errors = match self {
            Self::Validation(fields) => fields,
            _ => BTreeMap::new(),
        };
        let body = ErrorResponse {
            description,
            time: Utc::now(),
            field_errors,
        };
        (status, axum::Json(body)).into_response()
    }
}
