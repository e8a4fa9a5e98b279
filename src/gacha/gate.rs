//! Subscription verification gate.
//!
//! Client-side theater, not security: a persisted verified flag plus a
//! session-start timestamp that expires after two hours, gating the summon
//! buttons the same way the landing pages do. Trivially bypassable and
//! accepted as such.

use super::banner::BannerDesc;
use super::clock::Clock;
use super::store::KeyStore;

/// How long a confirmed verification stays valid.
pub const SESSION_DURATION_MS: i64 = 2 * 60 * 60 * 1000;

pub struct SubscriptionGate<S: KeyStore, C: Clock> {
    verified_key: String,
    session_key: String,
    verified: bool,
    store: S,
    clock: C,
}

impl<S: KeyStore, C: Clock> SubscriptionGate<S, C> {
    /// Verified iff both keys are present and the recorded session start is
    /// younger than [`SESSION_DURATION_MS`].
    pub fn load(banner: &BannerDesc, store: S, clock: C) -> Self {
        let verified_key = format!("{}_sub_verified", banner.storage_prefix);
        let session_key = format!("{}_session_start", banner.storage_prefix);
        let session_start = store
            .read(&session_key)
            .and_then(|value| value.parse::<i64>().ok());
        let verified = match (store.read(&verified_key), session_start) {
            (Some(_), Some(start)) => clock.now_ms() - start < SESSION_DURATION_MS,
            _ => false,
        };
        Self {
            verified_key,
            session_key,
            verified,
            store,
            clock,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Mark the session verified and persist both keys.
    pub fn verify(&mut self) {
        self.store.write(&self.verified_key, "true");
        self.store
            .write(&self.session_key, &self.clock.now_ms().to_string());
        self.verified = true;
    }
}
