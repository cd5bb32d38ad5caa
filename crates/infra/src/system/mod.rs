mod timer;

use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
pub use timer::{ITimer, ManualTimer, TimerHandle, TimerTask, TokioTimer};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    fn get_datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.get_timestamp_millis())
            .single()
            .unwrap_or_else(Utc::now)
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// System with a clock that only moves when told to
pub struct StaticTimeSys {
    millis: AtomicI64,
}

impl StaticTimeSys {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn at(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime.timestamp_millis())
    }

    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_time_only_moves_when_told() {
        let sys = StaticTimeSys::new(1_000);
        assert_eq!(sys.get_timestamp_millis(), 1_000);
        sys.advance(chrono::Duration::seconds(2));
        assert_eq!(sys.get_timestamp_millis(), 3_000);
        sys.set(0);
        assert_eq!(sys.get_datetime(), Utc.timestamp_millis_opt(0).unwrap());
    }
}
