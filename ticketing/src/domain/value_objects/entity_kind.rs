use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of entity the ticketing domain knows about.
///
/// Used to build stable, user-facing messages ("Customer not found",
/// "Event sold out") without stringly-typed error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Customer,
    Partner,
    Event,
    Ticket,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Customer => "Customer",
            EntityKind::Partner => "Partner",
            EntityKind::Event => "Event",
            EntityKind::Ticket => "Ticket",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
