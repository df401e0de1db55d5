//! Storage adapters implementing the repository ports.

mod memory;

pub use memory::{InMemoryCustomerRepository, InMemoryOrderRepository};
