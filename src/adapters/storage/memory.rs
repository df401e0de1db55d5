//! In-memory repositories backing the persistence ports.
//!
//! Records live in a `Mutex<Vec<_>>` in insertion order. Internal ids
//! are assigned on insert in the same 24-hex-digit format a document
//! store would use, so round-trips through the aggregates exercise the
//! exact restore paths a real backend does.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::customer::{Customer, CustomerRecord};
use crate::domain::foundation::{Cpf, EntityId, ExternalId, RepositoryError};
use crate::domain::order::{Order, OrderRecord};
use crate::ports::{CustomerRepository, OrderRepository};

/// A fresh 24-hex-digit internal id.
fn object_id_hex() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..24].to_string()
}

fn lock_poisoned() -> RepositoryError {
    RepositoryError::backend("lock poisoned")
}

fn corrupt_record(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::backend(format!("stored record failed validation: {err}"))
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Mutex<Vec<CustomerRecord>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn insert(&self, customer: &Customer) -> Result<Customer, RepositoryError> {
        let mut customers = self.customers.lock().map_err(|_| lock_poisoned())?;

        let mut record = customer.to_record();
        let duplicate = customers.iter().any(|existing| {
            existing.cpf == record.cpf
                || existing.email == record.email
                || existing.external_id == record.external_id
        });
        if duplicate {
            return Err(RepositoryError::DuplicateKey);
        }

        record.id = Some(object_id_hex());
        let stored = Customer::restore(record.clone()).map_err(corrupt_record)?;
        customers.push(record);
        Ok(stored)
    }

    async fn find(
        &self,
        cpf: Option<&Cpf>,
        email: Option<&str>,
    ) -> Result<Option<Customer>, RepositoryError> {
        let customers = self.customers.lock().map_err(|_| lock_poisoned())?;
        let hit = customers.iter().find(|record| {
            cpf.map_or(true, |cpf| record.cpf == cpf.as_str())
                && email.map_or(true, |email| record.email == email)
        });
        hit.map(|record| Customer::restore(record.clone()).map_err(corrupt_record))
            .transpose()
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Customer>, RepositoryError> {
        let customers = self.customers.lock().map_err(|_| lock_poisoned())?;
        let hit = customers
            .iter()
            .find(|record| record.id.as_deref() == Some(id.as_str()));
        hit.map(|record| Customer::restore(record.clone()).map_err(corrupt_record))
            .transpose()
    }

    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> Result<Option<Customer>, RepositoryError> {
        let customers = self.customers.lock().map_err(|_| lock_poisoned())?;
        let wanted = external_id.to_string();
        let hit = customers.iter().find(|record| record.external_id == wanted);
        hit.map(|record| Customer::restore(record.clone()).map_err(corrupt_record))
            .transpose()
    }
}

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<OrderRecord>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, order: &Order) -> Result<Order, RepositoryError> {
        let mut orders = self.orders.lock().map_err(|_| lock_poisoned())?;

        let mut record = order.to_record();
        if orders
            .iter()
            .any(|existing| existing.external_id == record.external_id)
        {
            return Err(RepositoryError::DuplicateKey);
        }

        record.id = Some(object_id_hex());
        for item in &mut record.items {
            if item.id.is_none() {
                item.id = Some(object_id_hex());
            }
        }
        let stored = Order::restore(record.clone()).map_err(corrupt_record)?;
        orders.push(record);
        Ok(stored)
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Order>, RepositoryError> {
        let orders = self.orders.lock().map_err(|_| lock_poisoned())?;
        let hit = orders
            .iter()
            .find(|record| record.id.as_deref() == Some(id.as_str()));
        hit.map(|record| Order::restore(record.clone()).map_err(corrupt_record))
            .transpose()
    }

    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> Result<Option<Order>, RepositoryError> {
        let orders = self.orders.lock().map_err(|_| lock_poisoned())?;
        let wanted = external_id.to_string();
        let hit = orders.iter().find(|record| record.external_id == wanted);
        hit.map(|record| Order::restore(record.clone()).map_err(corrupt_record))
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.orders.lock().map_err(|_| lock_poisoned())?;
        orders
            .iter()
            .map(|record| Order::restore(record.clone()).map_err(corrupt_record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderItem;

    fn customer(cpf: &str, email: &str) -> Customer {
        Customer::new("Maria Silva", cpf, email).unwrap()
    }

    fn order() -> Order {
        Order::new(
            EntityId::parse("507f1f77bcf86cd799439011").unwrap(),
            vec![OrderItem::new("burger", 2, 25.0).unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn object_ids_are_24_hex_digits() {
        let id = object_id_hex();
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn insert_assigns_an_internal_id() {
        let repo = InMemoryCustomerRepository::new();
        let stored = repo
            .insert(&customer("93541134780", "maria@example.com"))
            .await
            .unwrap();
        assert!(stored.id().is_some());
    }

    #[tokio::test]
    async fn duplicate_cpf_is_rejected() {
        let repo = InMemoryCustomerRepository::new();
        repo.insert(&customer("93541134780", "maria@example.com"))
            .await
            .unwrap();
        let err = repo
            .insert(&customer("93541134780", "outra@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateKey);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryCustomerRepository::new();
        repo.insert(&customer("93541134780", "maria@example.com"))
            .await
            .unwrap();
        let err = repo
            .insert(&customer("11144477735", "maria@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateKey);
    }

    #[tokio::test]
    async fn find_matches_each_provided_filter() {
        let repo = InMemoryCustomerRepository::new();
        let stored = repo
            .insert(&customer("93541134780", "maria@example.com"))
            .await
            .unwrap();

        let by_cpf = repo
            .find(Some(stored.cpf()), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_cpf.external_id(), stored.external_id());

        let by_email = repo
            .find(None, Some("maria@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.external_id(), stored.external_id());

        assert!(repo.find(None, Some("nobody@example.com")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_requires_all_provided_filters_to_match() {
        let repo = InMemoryCustomerRepository::new();
        let maria = repo
            .insert(&customer("93541134780", "maria@example.com"))
            .await
            .unwrap();
        let joana = repo
            .insert(&Customer::new("Joana Souza", "11144477735", "joana@example.com").unwrap())
            .await
            .unwrap();

        // Maria's CPF with Joana's email matches neither record.
        let crossed = repo
            .find(Some(maria.cpf()), Some("joana@example.com"))
            .await
            .unwrap();
        assert!(crossed.is_none());

        let both = repo
            .find(Some(joana.cpf()), Some("joana@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(both.external_id(), joana.external_id());
    }

    #[tokio::test]
    async fn find_without_filters_returns_the_first_record() {
        let repo = InMemoryCustomerRepository::new();
        let first = repo
            .insert(&customer("93541134780", "maria@example.com"))
            .await
            .unwrap();
        repo.insert(&Customer::new("Joana Souza", "11144477735", "joana@example.com").unwrap())
            .await
            .unwrap();

        let hit = repo.find(None, None).await.unwrap().unwrap();
        assert_eq!(hit.external_id(), first.external_id());
    }

    #[tokio::test]
    async fn customer_is_retrievable_by_ids_after_insert() {
        let repo = InMemoryCustomerRepository::new();
        let stored = repo
            .insert(&customer("93541134780", "maria@example.com"))
            .await
            .unwrap();

        let id = stored.id().cloned().unwrap();
        assert!(repo.find_by_id(&id).await.unwrap().is_some());
        assert!(repo
            .find_by_external_id(stored.external_id())
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn order_insert_assigns_ids_to_order_and_items() {
        let repo = InMemoryOrderRepository::new();
        let stored = repo.insert(&order()).await.unwrap();
        assert!(stored.id().is_some());
        assert!(stored.items().iter().all(|item| item.id().is_some()));
    }

    #[tokio::test]
    async fn orders_list_in_insertion_order() {
        let repo = InMemoryOrderRepository::new();
        let first = repo.insert(&order()).await.unwrap();
        let second = repo.insert(&order()).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].external_id(), first.external_id());
        assert_eq!(all[1].external_id(), second.external_id());
    }

    #[tokio::test]
    async fn reinserting_the_same_order_is_a_duplicate() {
        let repo = InMemoryOrderRepository::new();
        let order = order();
        repo.insert(&order).await.unwrap();
        let err = repo.insert(&order).await.unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateKey);
    }
}
