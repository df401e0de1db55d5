//! Checkout - Command handler for placing orders.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::foundation::{
    EntityId, ExternalId, ExternalServiceError, RepositoryError, ValidationError, ValidationResult,
};
use crate::domain::order::{Order, OrderItem, OrderStatus};
use crate::ports::{CustomerRepository, OrderRepository, ProductService};

/// Command to place an order for an existing customer.
///
/// `customer_id` is the customer's external UUID; item prices are never
/// accepted from the caller and are resolved against the catalog.
#[derive(Debug, Clone)]
pub struct CheckoutCommand {
    pub customer_id: String,
    pub items: Vec<CheckoutItem>,
}

#[derive(Debug, Clone)]
pub struct CheckoutItem {
    pub product_id: String,
    pub quantity: u32,
}

/// Projection of a freshly placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedOutOrder {
    pub external_id: String,
    pub created_at: DateTime<Utc>,
    pub customer_id: String,
    pub status: OrderStatus,
    pub total_value: f64,
    pub items: Vec<CheckedOutItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckedOutItem {
    pub product_id: String,
    pub quantity: u32,
    pub value: f64,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Empty order")]
    EmptyOrder,

    #[error("Customer not found")]
    CustomerNotFound { search_params: HashMap<String, String> },

    #[error("Product not found")]
    ProductNotFound { search_params: HashMap<String, String> },

    /// The order collided with an already persisted one.
    #[error("Order already exists")]
    Conflict,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    ProductService(#[from] ExternalServiceError),
}

/// Handler for the checkout use case.
pub struct CheckoutHandler {
    customers: Arc<dyn CustomerRepository>,
    orders: Arc<dyn OrderRepository>,
    products: Arc<dyn ProductService>,
}

impl CheckoutHandler {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductService>,
    ) -> Self {
        Self {
            customers,
            orders,
            products,
        }
    }

    pub async fn handle(&self, cmd: CheckoutCommand) -> Result<CheckedOutOrder, CheckoutError> {
        // Cheap rejections before any I/O.
        if cmd.items.is_empty() {
            return Err(CheckoutError::EmptyOrder);
        }
        let external_id =
            ExternalId::parse(&cmd.customer_id).map_err(|e| e.at("customer_id"))?;

        let customer = self
            .customers
            .find_by_external_id(&external_id)
            .await?
            .ok_or_else(|| CheckoutError::CustomerNotFound {
                search_params: HashMap::from([(
                    "external_id".to_string(),
                    cmd.customer_id.clone(),
                )]),
            })?;
        let customer_id = stored_id(customer.id())?;

        // One batched catalog round for every distinct product id.
        let mut ids: Vec<String> = Vec::new();
        for item in &cmd.items {
            if !ids.contains(&item.product_id) {
                ids.push(item.product_id.clone());
            }
        }
        let products = self.products.fetch_products_by_ids(&ids).await?;
        let prices: HashMap<&str, f64> = products
            .iter()
            .map(|p| (p.id.as_str(), p.price))
            .collect();

        let mut result = ValidationResult::new();
        let mut items: Vec<OrderItem> = Vec::with_capacity(cmd.items.len());
        for (index, item) in cmd.items.iter().enumerate() {
            let price = match prices.get(item.product_id.as_str()) {
                Some(price) => *price,
                None => {
                    return Err(CheckoutError::ProductNotFound {
                        search_params: HashMap::from([(
                            "product_id".to_string(),
                            item.product_id.clone(),
                        )]),
                    })
                }
            };
            let index = index.to_string();
            if let Some(built) = result.collect(
                OrderItem::new(&item.product_id, item.quantity, price)
                    .map_err(|e| e.within(&["items", &index])),
            ) {
                items.push(built);
            }
        }
        if !result.is_valid() {
            return Err(result.into_error().into());
        }

        let order = Order::new(customer_id, items)?;
        let stored = match self.orders.insert(&order).await {
            Ok(stored) => stored,
            Err(RepositoryError::DuplicateKey) => return Err(CheckoutError::Conflict),
            Err(err) => return Err(err.into()),
        };

        Ok(CheckedOutOrder::from_order(
            &stored,
            &customer.external_id().to_string(),
        ))
    }
}

fn stored_id(id: Option<&EntityId>) -> Result<EntityId, CheckoutError> {
    id.cloned()
        .ok_or_else(|| RepositoryError::backend("stored customer missing internal id").into())
}

impl CheckedOutOrder {
    fn from_order(order: &Order, customer_external_id: &str) -> Self {
        Self {
            external_id: order.external_id().to_string(),
            created_at: *order.created_at().as_datetime(),
            customer_id: customer_external_id.to_string(),
            status: order.status(),
            total_value: order.total_value(),
            items: order
                .items()
                .iter()
                .map(|item| CheckedOutItem {
                    product_id: item.product_id().to_string(),
                    quantity: item.quantity(),
                    value: item.value(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::adapters::storage::{InMemoryCustomerRepository, InMemoryOrderRepository};
    use crate::application::handlers::customer::{CreateCustomerCommand, CreateCustomerHandler};
    use crate::ports::Product;

    struct FakeProductService {
        products: Vec<Product>,
        fail_with: Option<ExternalServiceError>,
    }

    impl FakeProductService {
        fn with_products(products: Vec<Product>) -> Self {
            Self {
                products,
                fail_with: None,
            }
        }

        fn failing(error: ExternalServiceError) -> Self {
            Self {
                products: Vec::new(),
                fail_with: Some(error),
            }
        }
    }

    #[async_trait]
    impl ProductService for FakeProductService {
        async fn fetch_products_by_ids(
            &self,
            ids: &[String],
        ) -> Result<Vec<Product>, ExternalServiceError> {
            if let Some(error) = &self.fail_with {
                return Err(error.clone());
            }
            Ok(self
                .products
                .iter()
                .filter(|p| ids.contains(&p.id))
                .cloned()
                .collect())
        }
    }

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Produto {id}"),
            price,
        }
    }

    async fn seed_customer(customers: &Arc<InMemoryCustomerRepository>) -> String {
        let details = CreateCustomerHandler::new(customers.clone())
            .handle(CreateCustomerCommand {
                name: "Maria Silva".to_string(),
                cpf: "935.411.347-80".to_string(),
                email: "maria@example.com".to_string(),
            })
            .await
            .unwrap();
        details.external_id
    }

    fn handler(
        customers: Arc<InMemoryCustomerRepository>,
        products: FakeProductService,
    ) -> (CheckoutHandler, Arc<InMemoryOrderRepository>) {
        let orders = Arc::new(InMemoryOrderRepository::new());
        (
            CheckoutHandler::new(customers, orders.clone(), Arc::new(products)),
            orders,
        )
    }

    #[tokio::test]
    async fn checkout_resolves_prices_and_totals_from_the_catalog() {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let customer_id = seed_customer(&customers).await;
        let (handler, orders) = handler(
            customers,
            FakeProductService::with_products(vec![product("burger", 25.0), product("soda", 7.5)]),
        );

        let placed = handler
            .handle(CheckoutCommand {
                customer_id: customer_id.clone(),
                items: vec![
                    CheckoutItem {
                        product_id: "burger".to_string(),
                        quantity: 2,
                    },
                    CheckoutItem {
                        product_id: "soda".to_string(),
                        quantity: 1,
                    },
                ],
            })
            .await
            .unwrap();

        assert_eq!(placed.status, OrderStatus::PaymentPending);
        assert_eq!(placed.total_value, 57.5);
        assert_eq!(placed.customer_id, customer_id);
        assert_eq!(placed.items[0].value, 25.0);
        assert_eq!(orders.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn checkout_reports_the_stored_customer_id_canonically() {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let customer_id = seed_customer(&customers).await;
        let (handler, _) = handler(
            customers,
            FakeProductService::with_products(vec![product("burger", 25.0)]),
        );

        let placed = handler
            .handle(CheckoutCommand {
                customer_id: customer_id.to_uppercase(),
                items: vec![CheckoutItem {
                    product_id: "burger".to_string(),
                    quantity: 1,
                }],
            })
            .await
            .unwrap();

        assert_eq!(placed.customer_id, customer_id);
    }

    #[tokio::test]
    async fn empty_order_is_rejected_before_any_lookup() {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let (handler, _) = handler(
            customers,
            FakeProductService::failing(ExternalServiceError::new("unreachable", 503)),
        );

        let error = handler
            .handle(CheckoutCommand {
                customer_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
                items: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(error, CheckoutError::EmptyOrder));
    }

    #[tokio::test]
    async fn malformed_customer_id_is_a_validation_error() {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let (handler, _) = handler(customers, FakeProductService::with_products(vec![]));

        let error = handler
            .handle(CheckoutCommand {
                customer_id: "not-a-uuid".to_string(),
                items: vec![CheckoutItem {
                    product_id: "burger".to_string(),
                    quantity: 1,
                }],
            })
            .await
            .unwrap_err();
        match error {
            CheckoutError::Validation(e) => {
                assert_eq!(e.violations[0].loc, vec!["customer_id"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_customer_reports_not_found_with_the_searched_id() {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let (handler, _) = handler(
            customers,
            FakeProductService::with_products(vec![product("burger", 25.0)]),
        );

        let missing = "550e8400-e29b-41d4-a716-446655440000";
        let error = handler
            .handle(CheckoutCommand {
                customer_id: missing.to_string(),
                items: vec![CheckoutItem {
                    product_id: "burger".to_string(),
                    quantity: 1,
                }],
            })
            .await
            .unwrap_err();
        match error {
            CheckoutError::CustomerNotFound { search_params } => {
                assert_eq!(
                    search_params.get("external_id").map(String::as_str),
                    Some(missing)
                );
            }
            other => panic!("expected CustomerNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_product_reports_not_found_with_the_product_id() {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let customer_id = seed_customer(&customers).await;
        let (handler, orders) = handler(
            customers,
            FakeProductService::with_products(vec![product("burger", 25.0)]),
        );

        let error = handler
            .handle(CheckoutCommand {
                customer_id,
                items: vec![CheckoutItem {
                    product_id: "ghost".to_string(),
                    quantity: 1,
                }],
            })
            .await
            .unwrap_err();
        match error {
            CheckoutError::ProductNotFound { search_params } => {
                assert_eq!(
                    search_params.get("product_id").map(String::as_str),
                    Some("ghost")
                );
            }
            other => panic!("expected ProductNotFound, got {other:?}"),
        }
        assert!(orders.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_quantities_collect_violations_per_item() {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let customer_id = seed_customer(&customers).await;
        let (handler, _) = handler(
            customers,
            FakeProductService::with_products(vec![product("burger", 25.0), product("soda", 7.5)]),
        );

        let error = handler
            .handle(CheckoutCommand {
                customer_id,
                items: vec![
                    CheckoutItem {
                        product_id: "burger".to_string(),
                        quantity: 0,
                    },
                    CheckoutItem {
                        product_id: "soda".to_string(),
                        quantity: 0,
                    },
                ],
            })
            .await
            .unwrap_err();
        match error {
            CheckoutError::Validation(e) => {
                let locs: Vec<String> =
                    e.violations.iter().map(|v| v.loc.join(".")).collect();
                assert_eq!(locs, vec!["items.0.quantity", "items.1.quantity"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn catalog_failure_propagates_with_upstream_status() {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let customer_id = seed_customer(&customers).await;
        let (handler, _) = handler(
            customers,
            FakeProductService::failing(ExternalServiceError::new("catalog down", 503)),
        );

        let error = handler
            .handle(CheckoutCommand {
                customer_id,
                items: vec![CheckoutItem {
                    product_id: "burger".to_string(),
                    quantity: 1,
                }],
            })
            .await
            .unwrap_err();
        match error {
            CheckoutError::ProductService(e) => assert_eq!(e.status_code, 503),
            other => panic!("expected ProductService error, got {other:?}"),
        }
    }
}
