//! Order aggregate: line items, computed totals, and the status
//! lifecycle.

mod aggregate;
mod errors;
mod item;
mod status;
pub mod validator;

pub use aggregate::{Order, OrderRecord};
pub use errors::OrderError;
pub use item::{OrderItem, OrderItemRecord};
pub use status::OrderStatus;
