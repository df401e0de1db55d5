//! HTTP handlers for customer endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::customer::{
    CreateCustomerCommand, CreateCustomerHandler, GetCustomerByCpfHandler,
};

use super::dto::{CreateCustomerRequest, CustomerResponse};

#[derive(Clone)]
pub struct CustomerHandlers {
    create_handler: Arc<CreateCustomerHandler>,
    get_by_cpf_handler: Arc<GetCustomerByCpfHandler>,
}

impl CustomerHandlers {
    pub fn new(
        create_handler: Arc<CreateCustomerHandler>,
        get_by_cpf_handler: Arc<GetCustomerByCpfHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_by_cpf_handler,
        }
    }
}

/// POST /customer - Register a customer
pub async fn create_customer(
    State(handlers): State<CustomerHandlers>,
    Json(req): Json<CreateCustomerRequest>,
) -> Response {
    let cmd = CreateCustomerCommand {
        name: req.name,
        cpf: req.cpf,
        email: req.email,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(details) => {
            let response: CustomerResponse = details.into();
            let location = format!("/customer/{}", response.cpf);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(response),
            )
                .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /customer/:cpf - Look a customer up by CPF
pub async fn get_customer_by_cpf(
    State(handlers): State<CustomerHandlers>,
    Path(cpf): Path<String>,
) -> Response {
    match handlers.get_by_cpf_handler.handle(&cpf).await {
        Ok(details) => {
            let response: CustomerResponse = details.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
