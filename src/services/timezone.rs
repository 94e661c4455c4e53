use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use std::sync::{Mutex, PoisonError};

/// Singapore has no daylight saving, so a fixed offset covers it.
pub const SINGAPORE_OFFSET_SECS: i32 = 8 * 3600;

/// Source of "now" for session timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock pinned to one UTC offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn singapore() -> Self {
        Self::new(singapore_offset())
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Clock that only moves when told to. Used by tests to script session lengths.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<FixedOffset>>,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self { now: Mutex::new(start) }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn singapore_offset() -> FixedOffset {
    // +08:00 is always in range, the fallback is unreachable
    match FixedOffset::east_opt(SINGAPORE_OFFSET_SECS) {
        Some(offset) => offset,
        None => Utc.fix(),
    }
}
