use crate::domain::value_objects::Timestamp;

/// Source of the current time
///
/// Reservation timestamps come from here so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Current time as milliseconds since Unix epoch
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}
