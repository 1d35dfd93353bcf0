use std::fmt::Display;
use std::hash::Hash;

use crate::domain::EntityKind;

/// An entity registered under one or more globally unique natural keys.
///
/// `natural_keys` yields the keys in the order they must be checked when
/// registering; the first collision decides the outcome.
pub trait Registrable: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + Display + Send + Sync + 'static;
    type Key: Clone + Eq + Hash + Display + Send + Sync + 'static;

    const KIND: EntityKind;

    fn id(&self) -> Self::Id;

    fn natural_keys(&self) -> Vec<Self::Key>;
}
