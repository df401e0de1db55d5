//! Storefront - customer registration and order checkout backend
//!
//! A small e-commerce core built hexagonally: self-validating domain
//! aggregates, use-case handlers behind ports, and HTTP/storage/catalog
//! adapters at the edges.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
