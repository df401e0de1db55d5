//! Use-case handlers, grouped by aggregate.

pub mod customer;
pub mod order;
