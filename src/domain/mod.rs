//! Domain layer: aggregates, value objects, and the validation
//! machinery they share. No I/O lives here; persistence and transport
//! concerns stay behind the ports.

pub mod customer;
pub mod foundation;
pub mod order;
