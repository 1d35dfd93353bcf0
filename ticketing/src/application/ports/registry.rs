//! Ports for entities registered under unique natural keys
//!
//! Follows Interface Segregation Principle with focused traits.

use async_trait::async_trait;

use super::StoreResult;
use crate::domain::Registrable;

/// Read operations for a registry of `E`
#[async_trait]
pub trait RegistryReader<E: Registrable>: Send + Sync {
    /// Get an entity by its identifier
    async fn find_by_id(&self, id: &E::Id) -> StoreResult<Option<E>>;

    /// Get the entity currently holding a natural key
    async fn find_by_key(&self, key: &E::Key) -> StoreResult<Option<E>>;
}

/// Write operations for a registry of `E`
#[async_trait]
pub trait RegistryWriter<E: Registrable>: Send + Sync {
    /// Save an entity (insert or update), returning what was stored
    async fn save(&self, entity: E) -> StoreResult<E>;
}

/// Combined registry trait
pub trait RegistryStore<E: Registrable>: RegistryReader<E> + RegistryWriter<E> {}

// Blanket implementation
impl<E: Registrable, T: RegistryReader<E> + RegistryWriter<E>> RegistryStore<E> for T {}
