use thiserror::Error;

use crate::application::ports::StoreError;
use crate::domain::{EntityKind, ReservationError};

/// Broad category of a [`TicketingError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    Conflict,
    CapacityExceeded,
    Store,
}

/// Errors returned by the ticketing use cases
///
/// Every variant but `Store` is a rejected precondition that the caller can
/// act on; the message is stable and meant to be shown as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketingError {
    /// A natural key (cpf, cnpj, email) is already taken
    #[error("{0} already exists")]
    AlreadyExists(EntityKind),

    /// A referenced entity does not exist
    #[error("{0} not found")]
    NotFound(EntityKind),

    /// A customer already holds a ticket on the event
    #[error("{0} already subscribed")]
    Conflict(EntityKind),

    /// No remaining capacity
    #[error("{0} sold out")]
    CapacityExceeded(EntityKind),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TicketingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TicketingError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            TicketingError::NotFound(_) => ErrorKind::NotFound,
            TicketingError::Conflict(_) => ErrorKind::Conflict,
            TicketingError::CapacityExceeded(_) => ErrorKind::CapacityExceeded,
            TicketingError::Store(_) => ErrorKind::Store,
        }
    }

    /// True for rejected preconditions, false for infrastructure faults
    pub fn is_validation(&self) -> bool {
        !matches!(self, TicketingError::Store(_))
    }
}

impl From<ReservationError> for TicketingError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::AlreadySubscribed => TicketingError::Conflict(EntityKind::Ticket),
            ReservationError::SoldOut => TicketingError::CapacityExceeded(EntityKind::Event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(
            TicketingError::AlreadyExists(EntityKind::Customer).to_string(),
            "Customer already exists"
        );
        assert_eq!(
            TicketingError::NotFound(EntityKind::Partner).to_string(),
            "Partner not found"
        );
        assert_eq!(
            TicketingError::from(ReservationError::AlreadySubscribed).to_string(),
            "Ticket already subscribed"
        );
        assert_eq!(
            TicketingError::from(ReservationError::SoldOut).to_string(),
            "Event sold out"
        );
    }

    #[test]
    fn test_store_faults_are_not_validation_errors() {
        let err = TicketingError::from(StoreError::Unavailable("connection reset".into()));

        assert_eq!(err.kind(), ErrorKind::Store);
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "store unavailable: connection reset");
        assert!(TicketingError::NotFound(EntityKind::Event).is_validation());
    }
}
