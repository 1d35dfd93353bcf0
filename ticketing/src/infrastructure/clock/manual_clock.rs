use crate::domain::{Clock, Timestamp};
use chrono::Duration;
use parking_lot::RwLock;
use std::sync::Arc;

/// Clock that only moves when told to
///
/// Clones share the same time, so a test can keep a handle and advance the
/// clock a use case is holding.
#[derive(Debug, Clone)]
pub struct ManualClock {
    inner: Arc<RwLock<Timestamp>>,
}

impl ManualClock {
    /// Create a clock frozen at `time`
    pub fn at(time: Timestamp) -> Self {
        ManualClock {
            inner: Arc::new(RwLock::new(time)),
        }
    }

    pub fn set(&self, time: Timestamp) {
        *self.inner.write() = time;
    }

    pub fn advance(&self, duration: Duration) {
        let mut now = self.inner.write();
        *now += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.inner.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_time_is_frozen_until_advanced() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::at(start);

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now(), start + Duration::seconds(90));
        assert_eq!(clock.now_millis(), start.timestamp_millis() + 90_000);
    }

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::at(Utc::now());
        let handle = clock.clone();
        let later = Utc.with_ymd_and_hms(2030, 6, 1, 8, 0, 0).unwrap();

        handle.set(later);

        assert_eq!(clock.now(), later);
    }
}
