//! Uniqueness-checked registration shared by the create use cases

use crate::application::ports::RegistryStore;
use crate::application::use_cases::TicketingError;
use crate::domain::Registrable;

/// Persist `entity` unless one of its natural keys is already taken.
///
/// Keys are checked in [`Registrable::natural_keys`] order and the first hit
/// wins. Which key collided is logged but never changes the error.
pub(crate) async fn register<E, S>(store: &S, entity: E) -> Result<E, TicketingError>
where
    E: Registrable,
    S: RegistryStore<E> + ?Sized,
{
    for key in entity.natural_keys() {
        if store.find_by_key(&key).await?.is_some() {
            tracing::debug!(kind = %E::KIND, %key, "registration rejected: key taken");
            return Err(TicketingError::AlreadyExists(E::KIND));
        }
    }

    let saved = store.save(entity).await?;
    tracing::info!(kind = %E::KIND, id = %saved.id(), "registered");

    Ok(saved)
}
