//! Gacha portal core crate.
//!
//! Weighted reward selection plus a persisted daily draw quota behind a
//! subscription-verification gate, compiled to WASM for the promotional
//! landing pages. The page calls `start_portal()` once after load; everything
//! else runs off DOM events and the countdown interval. Rendering flourishes
//! (spin animation, audio, particles) stay in the page's own scripts; this
//! crate only reports outcomes to them.

use wasm_bindgen::prelude::*;

mod gacha;

pub use gacha::banner::{BANNERS, BannerDesc, ItemDesc, RarityWeight, banner_by_name};
pub use gacha::clock::{BrowserClock, Clock, DAY_MS, FixedClock};
pub use gacha::engine::{DrawOutcome, GachaEngine, LastResult};
pub use gacha::gate::{SESSION_DURATION_MS, SubscriptionGate};
pub use gacha::quota::{EntitlementTracker, QuotaState, format_countdown};
pub use gacha::selector::RewardSelector;
pub use gacha::store::{BrowserStore, KeyStore, MemoryStore};
pub use gacha::{MODS_BANNER, SUMMON_BANNER};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Start the portal on the default summon banner.
#[wasm_bindgen]
pub fn start_portal() -> Result<(), JsValue> {
    gacha::start_portal(None)
}

/// Start the portal on a named banner. Unknown names fall back to the
/// default so a stale page parameter still yields a working portal.
#[wasm_bindgen]
pub fn start_portal_with(banner_name: &str) -> Result<(), JsValue> {
    gacha::start_portal(Some(banner_name))
}

/// Mark the current session subscription-verified; the page may call this
/// directly instead of going through the modal buttons.
#[wasm_bindgen]
pub fn verify_subscription() {
    gacha::verify_subscription_now();
}

/// Draws left today, 0 before the portal has started.
#[wasm_bindgen]
pub fn remaining_draws() -> u32 {
    gacha::remaining_draws()
}
