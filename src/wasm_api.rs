//! WASM-facing surface (JS -> Rust), wasm32 only
//!
//! `wasm_start` runs once when the module loads: it parses `location.hash`,
//! derives the view state, and mounts it into the `.main__wrapper` container.
//! The mounted view is kept alive in a thread-local slot; `unmount()` lets
//! page scripts tear it down (cancelling a pending copy revert), and
//! `snapshot_json()` exposes the derived state for diagnostics.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::constants::css;
use crate::debug::{self, cat};
use crate::dom::TokenView;
use crate::fragment::parse_fragment;
use crate::view::ViewState;

thread_local! {
    static VIEW: RefCell<Option<TokenView>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(e) = mount() {
        // The only surfaced failure: container missing or DOM calls failed.
        // The page is left untouched.
        log::error!("[tokenpage] mount failed: {e:?}");
    }
}

fn mount() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let hash = win.location().hash().unwrap_or_default();
    let params = parse_fragment(&hash);
    debug::init_from_params(&params);
    debug::log(cat::FRAG, format!("{} fragment param(s)", params.len()));

    let state = ViewState::from_params(&params);
    log::info!(
        "[tokenpage] rendering {} view",
        if state.is_authenticated() {
            "authenticated"
        } else {
            "unauthenticated"
        }
    );

    let container = doc
        .query_selector(css::CONTAINER_SELECTOR)?
        .ok_or_else(|| JsValue::from_str("container .main__wrapper not found"))?
        .dyn_into::<web_sys::HtmlElement>()?;

    let view = TokenView::mount(&doc, container, &state)?;
    VIEW.with(|slot| slot.borrow_mut().replace(view));
    Ok(())
}

/// Current view state as JSON (re-derived from `location.hash`).
#[wasm_bindgen]
pub fn snapshot_json() -> String {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let state = ViewState::from_params(&parse_fragment(&hash));
    serde_json::to_string(&state).unwrap_or_else(|e| {
        log::error!("[tokenpage] failed to serialize view state: {e}");
        "{}".to_string()
    })
}

/// Tear down the mounted view, if any. Cancels a pending copy-button revert.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(view) = VIEW.with(|slot| slot.borrow_mut().take()) {
        view.unmount();
    }
}
