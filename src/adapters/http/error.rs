//! HTTP error mapping.
//!
//! Every application error funnels through [`ApiError`] before leaving
//! the process:
//!
//! - validation failures → 422 with one `{loc, msg}` entry per violation
//! - domain rule failures → 400 with the rule's message
//! - missing records → 404 with the search params that missed
//! - everything else → 500 with an opaque body; the cause is logged,
//!   never serialized

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::handlers::order::CheckoutError;
use crate::domain::customer::CustomerError;
use crate::domain::foundation::{FieldViolation, RepositoryError, ValidationError};

const INTERNAL_ERROR_BODY: &str = "Erro interno do servidor";

#[derive(Debug)]
pub enum ApiError {
    /// 422 - input failed validation; carries every violation.
    Validation(ValidationError),

    /// 400 - a domain rule rejected an otherwise well-formed request.
    Domain(String),

    /// 404 - the requested record does not exist.
    NotFound {
        message: String,
        search_params: HashMap<String, String>,
    },

    /// 500 - unexpected failure; the detail is logged, not returned.
    Internal(String),
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    detail: &'a [FieldViolation],
}

#[derive(Serialize)]
struct MessageBody<'a> {
    detail: &'a str,
}

#[derive(Serialize)]
struct NotFoundBody<'a> {
    detail: NotFoundDetail<'a>,
}

#[derive(Serialize)]
struct NotFoundDetail<'a> {
    message: &'a str,
    search_params: &'a HashMap<String, String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(error) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    detail: &error.violations,
                }),
            )
                .into_response(),
            ApiError::Domain(message) => (
                StatusCode::BAD_REQUEST,
                Json(MessageBody { detail: &message }),
            )
                .into_response(),
            ApiError::NotFound {
                message,
                search_params,
            } => (
                StatusCode::NOT_FOUND,
                Json(NotFoundBody {
                    detail: NotFoundDetail {
                        message: &message,
                        search_params: &search_params,
                    },
                }),
            )
                .into_response(),
            ApiError::Internal(cause) => {
                tracing::error!("Internal error: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        detail: INTERNAL_ERROR_BODY,
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<CustomerError> for ApiError {
    fn from(error: CustomerError) -> Self {
        match error {
            CustomerError::Validation(e) => ApiError::Validation(e),
            CustomerError::AlreadyExists => ApiError::Domain(error.to_string()),
            CustomerError::NotFound { search_params } => ApiError::NotFound {
                message: "Customer not found".to_string(),
                search_params,
            },
            CustomerError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CheckoutError> for ApiError {
    fn from(error: CheckoutError) -> Self {
        match error {
            CheckoutError::Validation(e) => ApiError::Validation(e),
            CheckoutError::EmptyOrder => ApiError::Domain(error.to_string()),
            CheckoutError::CustomerNotFound { search_params } => ApiError::NotFound {
                message: "Customer not found".to_string(),
                search_params,
            },
            CheckoutError::ProductNotFound { search_params } => ApiError::NotFound {
                message: "Product not found".to_string(),
                search_params,
            },
            CheckoutError::Conflict => ApiError::Domain(error.to_string()),
            CheckoutError::Repository(e) => ApiError::Internal(e.to_string()),
            CheckoutError::ProductService(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        ApiError::Internal(error.to_string())
    }
}
