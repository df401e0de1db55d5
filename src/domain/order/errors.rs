//! Order domain errors.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

use super::status::OrderStatus;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested status is not reachable from the current one.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },
}
