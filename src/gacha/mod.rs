//! Portal wiring: binds the gacha core to the page DOM.
//!
//! Everything stateful lives in a thread-local `PortalState` (one tab = one
//! session); the handlers installed here only set DOM text, classes, and
//! attributes from what the core reports. Spin animations, audio, and
//! particle effects are the page's own business and are never driven from
//! here. The page also guarantees a draw button is not clickable while its
//! reveal animation runs, so there is no debounce in this layer beyond the
//! disabled attribute.

use std::cell::RefCell;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window, window};

pub mod banner;
mod banner_mods;
mod banner_summon;
pub mod clock;
pub mod engine;
pub mod gate;
pub mod quota;
pub mod selector;
pub mod store;

pub use banner_mods::MODS_BANNER;
pub use banner_summon::SUMMON_BANNER;

use banner::{ItemDesc, banner_by_name};
use clock::BrowserClock;
use engine::{DrawOutcome, GachaEngine};
use gate::SubscriptionGate;
use quota::format_countdown;
use store::BrowserStore;

const SUMMON_BUTTON_IDS: [&str; 4] = [
    "summonBtn",
    "singleSummon",
    "summonBtnBottom",
    "singleSummonBottom",
];
const CHANNEL_URL: &str = "https://youtube.com/@your-channel";
const COUNTDOWN_TICK_MS: i32 = 1_000;

struct PortalState {
    engine: GachaEngine<BrowserStore, BrowserClock>,
    gate: SubscriptionGate<BrowserStore, BrowserClock>,
    rng: SmallRng,
}

thread_local! {
    static PORTAL_STATE: RefCell<Option<PortalState>> = RefCell::new(None);
}

pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Build the session state and wire every control on the page. Called once
/// after load; missing elements are skipped so the same crate serves page
/// variants with fewer controls.
pub fn start_portal(banner_name: Option<&str>) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let banner = banner_name.map(banner_by_name).unwrap_or(&SUMMON_BANNER);
    let store = BrowserStore::new();
    let gate = SubscriptionGate::load(banner, store.clone(), BrowserClock);
    let engine = GachaEngine::new(banner, store, BrowserClock);
    let state = PortalState {
        engine,
        gate,
        rng: SmallRng::from_entropy(),
    };
    PORTAL_STATE.with(|cell| cell.replace(Some(state)));

    render_gate(&doc);
    render_quota(&doc);
    restore_last_result(&doc);
    wire_summon_buttons(&doc)?;
    wire_gate_buttons(&doc)?;
    wire_claim_button(&doc)?;
    start_countdown_timer(&win)?;

    log(&format!("gacha portal ready: banner '{}'", banner.name));
    Ok(())
}

/// JS-facing hook: mark the session verified and refresh the gate UI, same
/// path as the modal confirm button.
pub fn verify_subscription_now() {
    if let Some(doc) = window().and_then(|win| win.document()) {
        confirm_subscription(&doc);
    }
}

/// Draws left today; 0 before `start_portal` has run.
pub fn remaining_draws() -> u32 {
    PORTAL_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|state| state.engine.tracker().remaining())
            .unwrap_or(0)
    })
}

// --- Draw flow ---------------------------------------------------------------

enum DrawReport {
    NotVerified,
    Outcome(DrawOutcome),
}

fn perform_draw(doc: &Document) {
    let report = PORTAL_STATE.with(|cell| {
        let mut guard = cell.borrow_mut();
        let state = guard.as_mut()?;
        if !state.gate.is_verified() {
            return Some(DrawReport::NotVerified);
        }
        Some(DrawReport::Outcome(
            state.engine.request_draw(&mut state.rng),
        ))
    });

    match report {
        None => {}
        Some(DrawReport::NotVerified) => {
            show_notification(doc, "Verification required. Confirm your subscription first.");
        }
        Some(DrawReport::Outcome(DrawOutcome::Drawn {
            item,
            rarity,
            remaining,
        })) => {
            log(&format!("summon result: {} ({rarity})", item.name));
            reveal_result(doc, item);
            show_notification(doc, &summon_message(remaining));
            render_quota(doc);
        }
        Some(DrawReport::Outcome(DrawOutcome::Exhausted { reset_in_ms })) => {
            show_notification(doc, "Daily summon limit reached!");
            set_text(
                doc,
                "cooldownText",
                &format!("Resets in: {}", format_countdown(reset_in_ms)),
            );
            render_quota(doc);
        }
    }
}

fn summon_message(remaining: u32) -> String {
    match remaining {
        0 => "Daily limit reached! Come back tomorrow for more summons.".to_string(),
        1 => "Last summon remaining today!".to_string(),
        2 => "2 summons remaining today. Use them wisely!".to_string(),
        n => format!("Summon successful! {n} summons remaining today."),
    }
}

fn reveal_result(doc: &Document, item: &ItemDesc) {
    set_text(
        doc,
        "resultTitle",
        &format!("{} • You Obtained {}", item.rarity, item.name),
    );
    set_text(
        doc,
        "resultText",
        &format!("{} - Secure download ready!", item.description),
    );
    if let Some(img) = doc.get_element_by_id("resultCharImg") {
        let _ = img.set_attribute("src", item.image);
        let _ = img.set_attribute("alt", &format!("{} - {}", item.name, item.rarity));
    }
    if let Some(btn) = doc.get_element_by_id("claimBtn") {
        let _ = btn.set_attribute("data-filename", item.file);
    }
}

fn restore_last_result(doc: &Document) {
    let last = PORTAL_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|state| state.engine.last_result())
    });
    if let Some(last) = last {
        set_text(
            doc,
            "resultTitle",
            &format!("{} • Last summon: {}", last.rarity, last.name),
        );
    }
}

// --- Quota / gate rendering ---------------------------------------------------

struct QuotaView {
    remaining: u32,
    used: u32,
    max: u32,
    can_draw: bool,
    verified: bool,
}

fn quota_view() -> Option<QuotaView> {
    PORTAL_STATE.with(|cell| {
        let mut guard = cell.borrow_mut();
        let state = guard.as_mut()?;
        let can_draw = state.engine.tracker_mut().can_draw();
        let tracker = state.engine.tracker();
        Some(QuotaView {
            remaining: tracker.remaining(),
            used: tracker.draws_used(),
            max: tracker.max_draws(),
            can_draw,
            verified: state.gate.is_verified(),
        })
    })
}

fn render_quota(doc: &Document) {
    let Some(view) = quota_view() else { return };

    set_text(doc, "summonsLeft", &view.remaining.to_string());

    if let Some(counter) = doc.get_element_by_id("limitCounter") {
        counter.set_inner_html("");
        for used_slot in 0..view.max {
            if let Ok(dot) = doc.create_element("div") {
                dot.set_class_name(if used_slot < view.used {
                    "limit-dot used"
                } else {
                    "limit-dot"
                });
                let _ = counter.append_child(&dot);
            }
        }
    }

    let enabled = view.can_draw && view.verified;
    for id in SUMMON_BUTTON_IDS {
        if let Some(btn) = doc.get_element_by_id(id) {
            if enabled {
                let _ = btn.remove_attribute("disabled");
            } else {
                let _ = btn.set_attribute("disabled", "disabled");
            }
        }
    }

    if let Some(timer) = doc.get_element_by_id("cooldownTimer") {
        let classes = timer.class_list();
        let _ = if view.can_draw {
            classes.remove_1("show")
        } else {
            classes.add_1("show")
        };
    }
}

fn render_gate(doc: &Document) {
    let verified = PORTAL_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|state| state.gate.is_verified())
            .unwrap_or(false)
    });
    if let Some(dot) = doc.get_element_by_id("statusDot") {
        dot.set_class_name(if verified {
            "status-dot verified"
        } else {
            "status-dot"
        });
    }
    set_text(
        doc,
        "statusText",
        if verified {
            "Verified"
        } else {
            "Verification Required"
        },
    );
    if let Some(badge) = doc.get_element_by_id("subBadge") {
        let _ = badge.set_attribute(
            "style",
            if verified {
                "display:inline-flex;"
            } else {
                "display:none;"
            },
        );
    }
    if let Some(btn) = doc.get_element_by_id("enableBtn") {
        let _ = btn.set_attribute(
            "style",
            if verified {
                "display:none;"
            } else {
                "display:block;"
            },
        );
    }
}

// --- Countdown ---------------------------------------------------------------

fn start_countdown_timer(win: &Window) -> Result<(), JsValue> {
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let closure = Closure::wrap(Box::new(move || countdown_tick(&doc)) as Box<dyn FnMut()>);
    win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        COUNTDOWN_TICK_MS,
    )?;
    closure.forget();
    Ok(())
}

fn countdown_tick(doc: &Document) {
    let Some(ms) = PORTAL_STATE.with(|cell| {
        let mut guard = cell.borrow_mut();
        guard
            .as_mut()
            .map(|state| state.engine.tracker_mut().check_and_reset())
    }) else {
        return;
    };

    set_text(
        doc,
        "cooldownText",
        &format!("Resets in: {}", format_countdown(ms)),
    );

    // A zero readout is the transitioning tick: the quota was just
    // replenished by check_and_reset.
    if ms == 0 {
        log("daily summon limits reset");
        render_quota(doc);
        if let Some(el) = doc.get_element_by_id("refreshNotification") {
            let _ = el.class_list().add_1("show");
            hide_after(&el, "show", 5_000);
        }
    }
}

// --- Wiring ------------------------------------------------------------------

fn on_click<F: FnMut() + 'static>(doc: &Document, id: &str, handler: F) -> Result<(), JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn wire_summon_buttons(doc: &Document) -> Result<(), JsValue> {
    for id in SUMMON_BUTTON_IDS {
        let doc_for_handler = doc.clone();
        on_click(doc, id, move || perform_draw(&doc_for_handler))?;
    }
    Ok(())
}

fn wire_gate_buttons(doc: &Document) -> Result<(), JsValue> {
    for id in ["enableBtn", "openChannel"] {
        let doc_for_handler = doc.clone();
        on_click(doc, id, move || set_modal_active(&doc_for_handler, true))?;
    }
    on_click(doc, "openYoutube", move || {
        if let Some(win) = window() {
            let _ = win.open_with_url_and_target(CHANNEL_URL, "_blank");
        }
    })?;
    let doc_confirm = doc.clone();
    on_click(doc, "confirmSubscription", move || {
        confirm_subscription(&doc_confirm)
    })?;
    let doc_close = doc.clone();
    on_click(doc, "closeVerification", move || {
        set_modal_active(&doc_close, false)
    })?;
    Ok(())
}

fn wire_claim_button(doc: &Document) -> Result<(), JsValue> {
    if let Some(btn) = doc.get_element_by_id("claimBtn") {
        let el = btn.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(file) = el.get_attribute("data-filename") {
                if !file.is_empty() {
                    if let Some(win) = window() {
                        let _ = win.open_with_url_and_target(&format!("/mods/{file}.zip"), "_blank");
                    }
                }
            }
        }) as Box<dyn FnMut()>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn set_modal_active(doc: &Document, active: bool) {
    if let Some(modal) = doc.get_element_by_id("verificationModal") {
        let classes = modal.class_list();
        let _ = if active {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
    }
}

fn confirm_subscription(doc: &Document) {
    let done = PORTAL_STATE.with(|cell| {
        let mut guard = cell.borrow_mut();
        match guard.as_mut() {
            Some(state) => {
                state.gate.verify();
                true
            }
            None => false,
        }
    });
    if done {
        set_modal_active(doc, false);
        render_gate(doc);
        render_quota(doc);
        show_notification(doc, "Subscription verified! Gacha access granted.");
    }
}

// --- DOM helpers -------------------------------------------------------------

fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn show_notification(doc: &Document, message: &str) {
    let Some(el) = doc.get_element_by_id("notification") else {
        return;
    };
    el.set_text_content(Some(message));
    let _ = el.class_list().add_1("show");
    hide_after(&el, "show", 3_000);
}

fn hide_after(el: &Element, class: &str, delay_ms: i32) {
    let Some(win) = window() else { return };
    let el = el.clone();
    let class = class.to_string();
    let closure = Closure::wrap(Box::new(move || {
        let _ = el.class_list().remove_1(&class);
    }) as Box<dyn FnMut()>);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}
