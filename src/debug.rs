//! Filterable debug logging for page development
//!
//! Categories: VIEW, COPY, NAV, FRAG
//! Enable via a `debug=` fragment param, e.g. `#access_token=...&debug=copy,nav`
//! or `#debug=all` on the logged-out page.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

pub mod cat {
    pub const VIEW: u32 = 1 << 0;
    pub const COPY: u32 = 1 << 1;
    pub const NAV: u32 = 1 << 2;
    pub const FRAG: u32 = 1 << 3;
    pub const ALL: u32 = 0xffff_ffff;
}

static MASK: AtomicU32 = AtomicU32::new(0);

#[inline]
pub fn mask() -> u32 {
    MASK.load(Ordering::Relaxed)
}

#[inline]
pub fn set(mask: u32) {
    MASK.store(mask, Ordering::Relaxed)
}

#[inline]
pub fn is(cat: u32) -> bool {
    (MASK.load(Ordering::Relaxed) & cat) != 0
}

#[inline]
pub fn cat_name(cat: u32) -> &'static str {
    match cat {
        c if c == cat::VIEW => "view",
        c if c == cat::COPY => "copy",
        c if c == cat::NAV => "nav",
        c if c == cat::FRAG => "frag",
        _ => "misc",
    }
}

/// Parse a comma-separated category list ("copy,nav", "all", "none").
/// Unknown tokens are ignored.
pub fn set_from_list(list: &str) {
    let mut m: u32 = 0;
    for tok in list.split(',').map(|s| s.trim().to_ascii_lowercase()) {
        match tok.as_str() {
            "" | "none" => {
                m = 0;
            }
            "all" => {
                m = cat::ALL;
            }
            "view" => {
                m |= cat::VIEW;
            }
            "copy" => {
                m |= cat::COPY;
            }
            "nav" => {
                m |= cat::NAV;
            }
            "frag" => {
                m |= cat::FRAG;
            }
            _ => {}
        }
    }
    set(m);
}

/// Set the mask from the already-parsed fragment params (`debug=` key).
pub fn init_from_params(params: &HashMap<String, String>) {
    if let Some(list) = params.get("debug") {
        set_from_list(list);
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn log(cat: u32, msg: impl AsRef<str>) {
    if !is(cat) {
        return;
    }
    let s = format!("[tokenpage][{}] {}", cat_name(cat), msg.as_ref());
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&s));
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn log(cat: u32, msg: impl AsRef<str>) {
    if !is(cat) {
        return;
    }
    eprintln!("[tokenpage][{}] {}", cat_name(cat), msg.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the mask is process-global, so splitting these into
    // separate #[test] fns would race under the parallel test runner.
    #[test]
    fn list_parsing_drives_the_mask() {
        set_from_list("copy,nav");
        assert!(is(cat::COPY));
        assert!(is(cat::NAV));
        assert!(!is(cat::VIEW));

        set_from_list("all");
        assert!(is(cat::FRAG));

        set_from_list("none");
        assert_eq!(mask(), 0);

        set_from_list("view,bogus");
        assert!(is(cat::VIEW));
        assert!(!is(cat::COPY));

        set(0);
    }
}
