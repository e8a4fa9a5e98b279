//! Daily draw entitlement.
//!
//! Two states, mirroring the page behavior: `Available` while
//! `draws_used < max_draws`, `Exhausted` at the cap. The only way back from
//! `Exhausted` is a reset, triggered either by the local calendar date moving
//! on or by the stored reset timestamp elapsing.

use super::banner::BannerDesc;
use super::clock::Clock;
use super::store::KeyStore;

/// Persisted per-session quota record. Owned exclusively by the tracker;
/// everything else observes it through the tracker's methods.
#[derive(Clone, Debug, PartialEq)]
pub struct QuotaState {
    pub draws_used: u32,
    pub last_draw_date: String,
    pub reset_at_ms: i64,
}

struct QuotaKeys {
    count: String,
    last_date: String,
    reset_at: String,
}

impl QuotaKeys {
    fn new(prefix: &str) -> Self {
        Self {
            count: format!("{prefix}_summon_count"),
            last_date: format!("{prefix}_last_summon_date"),
            reset_at: format!("{prefix}_reset_timestamp"),
        }
    }
}

pub struct EntitlementTracker<S: KeyStore, C: Clock> {
    max_draws: u32,
    keys: QuotaKeys,
    state: QuotaState,
    store: S,
    clock: C,
}

impl<S: KeyStore, C: Clock> EntitlementTracker<S, C> {
    /// Load persisted quota state. A stored calendar date other than today
    /// forces a full reset regardless of the stored reset timestamp, which
    /// covers reloads after the local day changed while the page was closed.
    pub fn load(banner: &BannerDesc, store: S, clock: C) -> Self {
        let keys = QuotaKeys::new(banner.storage_prefix);
        let today = clock.today();
        let mut tracker = Self {
            max_draws: banner.max_draws,
            keys,
            state: QuotaState {
                draws_used: 0,
                last_draw_date: today.clone(),
                reset_at_ms: 0,
            },
            store,
            clock,
        };

        let stored_date = tracker.store.read(&tracker.keys.last_date);
        if stored_date.as_deref() != Some(today.as_str()) {
            tracker.reset_daily();
            return tracker;
        }

        let used = tracker
            .store
            .read(&tracker.keys.count)
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(0);
        tracker.state.draws_used = used.min(tracker.max_draws);

        match tracker
            .store
            .read(&tracker.keys.reset_at)
            .and_then(|value| value.parse::<i64>().ok())
        {
            Some(timestamp) => tracker.state.reset_at_ms = timestamp,
            None => {
                tracker.state.reset_at_ms = tracker.clock.next_midnight_ms();
                tracker.persist();
            }
        }
        tracker
    }

    fn reset_daily(&mut self) {
        self.state.draws_used = 0;
        self.state.last_draw_date = self.clock.today();
        self.state.reset_at_ms = self.clock.next_midnight_ms();
        self.persist();
    }

    /// All three keys are written back-to-back so the stored record stays
    /// consistent from this core's point of view (single writer per tab).
    fn persist(&self) {
        self.store
            .write(&self.keys.count, &self.state.draws_used.to_string());
        self.store
            .write(&self.keys.last_date, &self.state.last_draw_date);
        self.store
            .write(&self.keys.reset_at, &self.state.reset_at_ms.to_string());
    }

    /// Replenish if the local calendar date moved on since the last recorded
    /// draw. Every query rolls the day first, so a session left open across
    /// midnight recovers without a reload.
    fn roll_day(&mut self) {
        if self.clock.today() != self.state.last_draw_date {
            self.reset_daily();
        }
    }

    pub fn can_draw(&mut self) -> bool {
        self.roll_day();
        self.state.draws_used < self.max_draws
    }

    /// Consume one draw. Returns false (mutating nothing) when the quota is
    /// exhausted; exhaustion is an expected signal, not an error.
    pub fn record_draw(&mut self) -> bool {
        if !self.can_draw() {
            return false;
        }
        self.state.draws_used += 1;
        self.state.last_draw_date = self.clock.today();
        self.persist();
        true
    }

    pub fn remaining(&self) -> u32 {
        self.max_draws - self.state.draws_used
    }

    pub fn draws_used(&self) -> u32 {
        self.state.draws_used
    }

    pub fn max_draws(&self) -> u32 {
        self.max_draws
    }

    /// Milliseconds until the quota replenishes.
    ///
    /// Contract: this query applies the reset as a side effect. When the
    /// stored boundary has elapsed, the call itself replenishes the quota and
    /// reports 0; the next call reports a fresh full countdown. Repeated
    /// calls never reset twice for one boundary, since the transition moves
    /// `reset_at_ms` into the future again.
    pub fn check_and_reset(&mut self) -> i64 {
        self.roll_day();
        let diff = self.state.reset_at_ms - self.clock.now_ms();
        if diff <= 0 {
            self.reset_daily();
            return 0;
        }
        diff
    }

    /// Current state snapshot, mainly for persistence round-trip assertions.
    pub fn quota(&self) -> &QuotaState {
        &self.state
    }
}

/// `HH:MM:SS` countdown string for the cooldown display. Hours are not capped
/// at 24 so an absurd stored boundary still renders something legible.
pub fn format_countdown(ms: i64) -> String {
    let total_secs = ms.max(0) / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::super::SUMMON_BANNER;
    use super::super::clock::{Clock, DAY_MS, FixedClock};
    use super::super::store::{KeyStore, MemoryStore};
    use super::*;

    const NOON: i64 = 20_000 * DAY_MS + 12 * 60 * 60 * 1000;
    const TODAY: &str = "Tue Aug 04 2026";

    fn clock() -> FixedClock {
        FixedClock::new(NOON, TODAY)
    }

    #[test]
    fn fresh_load_writes_a_full_reset() {
        let store = MemoryStore::new();
        let tracker = EntitlementTracker::load(&SUMMON_BANNER, store.clone(), clock());
        assert_eq!(tracker.draws_used(), 0);
        assert_eq!(store.read("gacha_summon_count").as_deref(), Some("0"));
        assert_eq!(store.read("gacha_last_summon_date").as_deref(), Some(TODAY));
        assert_eq!(
            store.read("gacha_reset_timestamp").as_deref(),
            Some((20_001 * DAY_MS).to_string().as_str())
        );
    }

    #[test]
    fn load_clamps_an_overflowed_count() {
        let store = MemoryStore::new();
        store.write("gacha_last_summon_date", TODAY);
        store.write("gacha_summon_count", "99");
        store.write("gacha_reset_timestamp", &(NOON + 1_000).to_string());
        let tracker = EntitlementTracker::load(&SUMMON_BANNER, store, clock());
        assert_eq!(tracker.draws_used(), SUMMON_BANNER.max_draws);
        assert_eq!(tracker.remaining(), 0);
    }

    #[test]
    fn load_treats_garbage_count_as_zero() {
        let store = MemoryStore::new();
        store.write("gacha_last_summon_date", TODAY);
        store.write("gacha_summon_count", "not-a-number");
        store.write("gacha_reset_timestamp", &(NOON + 1_000).to_string());
        let tracker = EntitlementTracker::load(&SUMMON_BANNER, store, clock());
        assert_eq!(tracker.draws_used(), 0);
    }

    #[test]
    fn load_recomputes_a_missing_reset_timestamp() {
        let store = MemoryStore::new();
        store.write("gacha_last_summon_date", TODAY);
        store.write("gacha_summon_count", "2");
        let clk = clock();
        let tracker = EntitlementTracker::load(&SUMMON_BANNER, store.clone(), clk.clone());
        assert_eq!(tracker.quota().reset_at_ms, clk.next_midnight_ms());
        assert_eq!(
            store.read("gacha_reset_timestamp").as_deref(),
            Some(clk.next_midnight_ms().to_string().as_str())
        );
    }

    #[test]
    fn countdown_formats_zero_padded() {
        assert_eq!(format_countdown(0), "00:00:00");
        assert_eq!(format_countdown(-5_000), "00:00:00");
        assert_eq!(format_countdown(3_661_000), "01:01:01");
        assert_eq!(format_countdown(DAY_MS), "24:00:00");
    }
}
