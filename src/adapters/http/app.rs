//! Top-level router assembly.
//!
//! Wires the use-case handlers onto their ports and mounts every route
//! group. Cross-cutting layers that depend on configuration (timeouts,
//! CORS) are applied by the binary on top of this router.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::handlers::customer::{CreateCustomerHandler, GetCustomerByCpfHandler};
use crate::application::handlers::order::{CheckoutHandler, ListOrdersHandler};
use crate::ports::{CustomerRepository, OrderRepository, ProductService};

use super::customer::{customer_routes, CustomerHandlers};
use super::health::health_routes;
use super::order::{order_routes, OrderHandlers};

/// The ports the HTTP surface is wired onto.
pub struct AppServices {
    pub customers: Arc<dyn CustomerRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub products: Arc<dyn ProductService>,
}

/// Builds the application router with all endpoints mounted.
pub fn build_router(services: AppServices) -> Router {
    let customer_handlers = CustomerHandlers::new(
        Arc::new(CreateCustomerHandler::new(services.customers.clone())),
        Arc::new(GetCustomerByCpfHandler::new(services.customers.clone())),
    );
    let order_handlers = OrderHandlers::new(
        Arc::new(CheckoutHandler::new(
            services.customers,
            services.orders.clone(),
            services.products,
        )),
        Arc::new(ListOrdersHandler::new(services.orders)),
    );

    Router::new()
        .merge(health_routes())
        .nest("/customer", customer_routes(customer_handlers))
        .nest("/orders", order_routes(order_handlers))
        .layer(TraceLayer::new_for_http())
}
