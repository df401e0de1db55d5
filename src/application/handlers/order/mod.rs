//! Order use cases.

pub mod checkout;
pub mod list_orders;

pub use checkout::{
    CheckedOutItem, CheckedOutOrder, CheckoutCommand, CheckoutError, CheckoutHandler, CheckoutItem,
};
pub use list_orders::{ListOrdersHandler, OrderSummary};
