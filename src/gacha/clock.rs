//! Time sources.
//!
//! The tracker needs three answers: "now", "today's local calendar date", and
//! "the next local midnight". `BrowserClock` gets them from the JS `Date`
//! object; `FixedClock` lets tests drive the calendar by hand instead of
//! reading ambient time.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Date;

/// Milliseconds in one day.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

pub trait Clock {
    /// Epoch milliseconds.
    fn now_ms(&self) -> i64;

    /// Local calendar date string. Equality is the only operation performed
    /// on it (daily-boundary detection); the format itself is opaque.
    fn today(&self) -> String;

    /// Absolute epoch-ms timestamp of the next local midnight after now.
    fn next_midnight_ms(&self) -> i64;
}

/// Production clock backed by the browser's `Date`.
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> i64 {
        Date::now() as i64
    }

    fn today(&self) -> String {
        Date::new_0().to_date_string().as_string().unwrap_or_default()
    }

    fn next_midnight_ms(&self) -> i64 {
        let date = Date::new_0();
        date.set_date(date.get_date() + 1);
        date.set_hours(0);
        date.set_minutes(0);
        date.set_seconds(0);
        date.set_milliseconds(0);
        date.get_time() as i64
    }
}

struct FixedState {
    now_ms: i64,
    today: String,
}

/// Deterministic clock for tests and native harnesses. Clones share state, so
/// a test can keep one handle and hand another to the tracker, then advance
/// time or flip the date between calls. The midnight boundary is derived from
/// `now_ms` on a whole-day grid.
#[derive(Clone)]
pub struct FixedClock {
    inner: Rc<RefCell<FixedState>>,
}

impl FixedClock {
    pub fn new(now_ms: i64, today: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FixedState {
                now_ms,
                today: today.to_string(),
            })),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.inner.borrow_mut().now_ms += ms;
    }

    pub fn set_today(&self, date: &str) {
        self.inner.borrow_mut().today = date.to_string();
    }

    /// Jump just past the current midnight boundary into `new_date`.
    pub fn cross_midnight(&self, new_date: &str) {
        let mut state = self.inner.borrow_mut();
        state.now_ms = (state.now_ms / DAY_MS + 1) * DAY_MS + 1_000;
        state.today = new_date.to_string();
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.inner.borrow().now_ms
    }

    fn today(&self) -> String {
        self.inner.borrow().today.clone()
    }

    fn next_midnight_ms(&self) -> i64 {
        (self.now_ms() / DAY_MS + 1) * DAY_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_derives_the_next_boundary() {
        let clock = FixedClock::new(DAY_MS * 3 + 1, "Thu Jan 04 1970");
        assert_eq!(clock.next_midnight_ms(), DAY_MS * 4);
        clock.advance(DAY_MS);
        assert_eq!(clock.next_midnight_ms(), DAY_MS * 5);
    }

    #[test]
    fn cross_midnight_lands_in_the_next_day() {
        let clock = FixedClock::new(DAY_MS * 3 + 500, "Thu Jan 04 1970");
        clock.cross_midnight("Fri Jan 05 1970");
        assert_eq!(clock.today(), "Fri Jan 05 1970");
        assert!(clock.now_ms() > DAY_MS * 4);
        assert_eq!(clock.next_midnight_ms(), DAY_MS * 5);
    }

    #[test]
    fn clones_share_state() {
        let clock = FixedClock::new(0, "Thu Jan 01 1970");
        let handle = clock.clone();
        handle.advance(42);
        assert_eq!(clock.now_ms(), 42);
    }
}
