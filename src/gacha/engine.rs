//! Draw orchestration: entitlement check in front, weighted selection behind,
//! one outcome out.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::banner::{BannerDesc, ItemDesc};
use super::clock::Clock;
use super::quota::EntitlementTracker;
use super::selector::RewardSelector;
use super::store::KeyStore;

/// What a draw request reports back to the presentation surface.
#[derive(Debug)]
pub enum DrawOutcome {
    /// A reward was selected and one unit of quota consumed.
    Drawn {
        item: &'static ItemDesc,
        rarity: &'static str,
        remaining: u32,
    },
    /// Quota exhausted; carries the countdown to the next replenish.
    Exhausted { reset_in_ms: i64 },
}

/// Last winning draw, persisted as JSON so the result panel can be restored
/// after a reload.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct LastResult {
    pub id: String,
    pub name: String,
    pub rarity: String,
}

impl LastResult {
    pub fn parse(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub struct GachaEngine<S: KeyStore, C: Clock> {
    selector: RewardSelector,
    tracker: EntitlementTracker<S, C>,
    last_result_key: String,
    store: S,
}

impl<S: KeyStore + Clone, C: Clock> GachaEngine<S, C> {
    pub fn new(banner: &'static BannerDesc, store: S, clock: C) -> Self {
        let tracker = EntitlementTracker::load(banner, store.clone(), clock);
        Self {
            selector: RewardSelector::new(banner),
            tracker,
            last_result_key: format!("{}_last_result", banner.storage_prefix),
            store,
        }
    }

    /// One user-initiated draw: entitlement check, weighted selection, quota
    /// consumption, outcome. Selection and consumption stay separate steps
    /// (the page reveals the reward only after the counter commits), so
    /// `record_draw` is re-checked even though `can_draw` just passed.
    pub fn request_draw<R: Rng>(&mut self, rng: &mut R) -> DrawOutcome {
        if !self.tracker.can_draw() {
            return DrawOutcome::Exhausted {
                reset_in_ms: self.tracker.check_and_reset(),
            };
        }
        let item = self.selector.draw(rng);
        if !self.tracker.record_draw() {
            return DrawOutcome::Exhausted {
                reset_in_ms: self.tracker.check_and_reset(),
            };
        }
        let result = LastResult {
            id: item.id.to_string(),
            name: item.name.to_string(),
            rarity: item.rarity.to_string(),
        };
        self.store.write(&self.last_result_key, &result.to_json());
        DrawOutcome::Drawn {
            item,
            rarity: item.rarity,
            remaining: self.tracker.remaining(),
        }
    }

    /// Most recent persisted winner, if any survives in storage.
    pub fn last_result(&self) -> Option<LastResult> {
        self.store
            .read(&self.last_result_key)
            .and_then(|json| LastResult::parse(&json))
    }

    pub fn tracker(&self) -> &EntitlementTracker<S, C> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut EntitlementTracker<S, C> {
        &mut self.tracker
    }
}
