//! Application layer: use-case handlers orchestrating the domain
//! through the ports.

pub mod handlers;
