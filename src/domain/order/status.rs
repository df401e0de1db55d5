//! Order status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of an order.
///
/// Orders start in `PaymentPending`. `Completed` and `Cancelled` are
/// terminal; nothing transitions back into the same state implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PaymentPending,
    Received,
    InProduction,
    Completed,
    Cancelled,
}

impl StateMachine for OrderStatus {
    fn allowed_transitions(&self) -> &'static [Self] {
        use OrderStatus::*;
        match self {
            PaymentPending => &[Received, Cancelled],
            Received => &[InProduction, Cancelled],
            InProduction => &[Completed],
            Completed => &[],
            Cancelled => &[],
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::PaymentPending => "PAYMENT_PENDING",
            OrderStatus::Received => "RECEIVED",
            OrderStatus::InProduction => "IN_PRODUCTION",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{s}")
    }
}
