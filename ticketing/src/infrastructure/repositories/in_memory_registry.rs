use crate::application::ports::{RegistryReader, RegistryWriter, StoreError, StoreResult};
use crate::domain::{Customer, Partner, Registrable};
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// In-memory registry for entities with unique natural keys
///
/// Thread-safe storage using DashMap, with a second map acting as the
/// unique index over natural keys. Writers are serialized so the index
/// check and the insert happen as one step.
pub struct InMemoryRegistry<E: Registrable> {
    /// Entities by ID
    entities: Arc<DashMap<E::Id, E>>,
    /// Index: natural key -> entity id
    key_index: Arc<DashMap<E::Key, E::Id>>,
    write_lock: Arc<Mutex<()>>,
}

pub type InMemoryCustomerRepository = InMemoryRegistry<Customer>;
pub type InMemoryPartnerRepository = InMemoryRegistry<Partner>;

impl<E: Registrable> InMemoryRegistry<E> {
    pub fn new() -> Self {
        Self {
            entities: Arc::new(DashMap::new()),
            key_index: Arc::new(DashMap::new()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Get all stored entities
    pub fn list(&self) -> Vec<E> {
        self.entities.iter().map(|e| e.value().clone()).collect()
    }
}

impl<E: Registrable> Default for InMemoryRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Registrable> Clone for InMemoryRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            entities: Arc::clone(&self.entities),
            key_index: Arc::clone(&self.key_index),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

#[async_trait]
impl<E: Registrable> RegistryReader<E> for InMemoryRegistry<E> {
    async fn find_by_id(&self, id: &E::Id) -> StoreResult<Option<E>> {
        Ok(self.entities.get(id).map(|e| e.value().clone()))
    }

    async fn find_by_key(&self, key: &E::Key) -> StoreResult<Option<E>> {
        let Some(id) = self.key_index.get(key).map(|id| *id.value()) else {
            return Ok(None);
        };
        Ok(self.entities.get(&id).map(|e| e.value().clone()))
    }
}

#[async_trait]
impl<E: Registrable> RegistryWriter<E> for InMemoryRegistry<E> {
    async fn save(&self, entity: E) -> StoreResult<E> {
        let _guard = self.write_lock.lock();

        let id = entity.id();
        let keys = entity.natural_keys();

        for key in &keys {
            if let Some(owner) = self.key_index.get(key) {
                if *owner.value() != id {
                    return Err(StoreError::UniqueViolation {
                        kind: E::KIND,
                        key: key.to_string(),
                    });
                }
            }
        }

        // Drop index entries for keys this entity no longer holds
        let previous = self
            .entities
            .get(&id)
            .map(|e| e.value().natural_keys())
            .unwrap_or_default();
        for stale in previous.iter().filter(|k| !keys.contains(k)) {
            self.key_index.remove(stale);
        }

        for key in keys {
            self.key_index.insert(key, id);
        }
        self.entities.insert(id, entity.clone());

        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CustomerRepository, PartnerRepository};
    use crate::domain::EntityKind;

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("12345678901", "john.doe@gmail.com", "John Doe");
        let id = customer.id;

        repo.save(customer).await.unwrap();

        assert_eq!(repo.find_by_id(&id).await.unwrap().unwrap().name, "John Doe");
        assert_eq!(repo.find_by_cpf("12345678901").await.unwrap().unwrap().id, id);
        assert_eq!(repo.find_by_email("john.doe@gmail.com").await.unwrap().unwrap().id, id);
        assert!(repo.find_by_cpf("00000000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unique_index_rejects_other_owner() {
        let repo = InMemoryPartnerRepository::new();
        repo.save(Partner::new("41536538000100", "a@gmail.com", "A"))
            .await
            .unwrap();

        let err = repo
            .save(Partner::new("11222333000181", "a@gmail.com", "B"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::UniqueViolation {
                kind: EntityKind::Partner,
                key: "email=a@gmail.com".to_string(),
            }
        );
        assert_eq!(repo.len(), 1);
        assert!(repo.find_by_cnpj("11222333000181").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resave_updates_index() {
        let repo = InMemoryCustomerRepository::new();
        let mut customer = repo
            .save(Customer::new("12345678901", "old@gmail.com", "John Doe"))
            .await
            .unwrap();

        customer.email = "new@gmail.com".to_string();
        repo.save(customer.clone()).await.unwrap();

        assert_eq!(repo.len(), 1);
        assert!(repo.find_by_email("old@gmail.com").await.unwrap().is_none());
        assert_eq!(
            repo.find_by_email("new@gmail.com").await.unwrap().unwrap().id,
            customer.id
        );
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryCustomerRepository::new();
        let handle = repo.clone();

        handle
            .save(Customer::new("12345678901", "john.doe@gmail.com", "John Doe"))
            .await
            .unwrap();

        assert_eq!(repo.list().len(), 1);
    }
}
