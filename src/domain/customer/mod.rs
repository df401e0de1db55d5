//! Customer domain module.

mod aggregate;
mod errors;
mod validator;

pub use aggregate::{Customer, CustomerRecord};
pub use errors::CustomerError;
