//! DOM rendering of the two page views (wasm32 only)
//!
//! `TokenView::mount` builds either the token view or the login prompt under
//! the page's container element. The view owns its click closures and the
//! pending copy-button revert timer, so tearing it down drops both and no
//! callback can fire against a removed view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlButtonElement, HtmlElement, HtmlTextAreaElement};

use crate::auth;
use crate::constants::{css, text, timing};
use crate::debug::{self, cat};
use crate::view::ViewState;

/// A mounted view. Keep this alive for as long as the view is on screen;
/// dropping it releases the event closures and cancels a pending revert.
pub struct TokenView {
    container: HtmlElement,
    click_handlers: Vec<Closure<dyn FnMut()>>,
    pending_revert: Rc<RefCell<Option<Timeout>>>,
}

impl TokenView {
    /// Render `state` into `container` and wire up the click handlers.
    pub fn mount(
        doc: &Document,
        container: HtmlElement,
        state: &ViewState,
    ) -> Result<Self, JsValue> {
        let mut view = TokenView {
            container,
            click_handlers: Vec::new(),
            pending_revert: Rc::new(RefCell::new(None)),
        };
        match state {
            ViewState::Authenticated { token } => view.mount_authenticated(doc, token)?,
            ViewState::Unauthenticated => view.mount_unauthenticated(doc)?,
        }
        Ok(view)
    }

    /// Clear the container and release closures and the revert timer.
    pub fn unmount(self) {
        debug::log(cat::VIEW, "unmounting");
        self.container.set_inner_html("");
        // click_handlers and pending_revert drop here; a pending Timeout is
        // cancelled by its Drop impl.
    }

    fn mount_authenticated(&mut self, doc: &Document, token: &str) -> Result<(), JsValue> {
        debug::log(cat::VIEW, "mounting authenticated view");

        let heading = doc.create_element("h2")?;
        heading.set_class_name(css::HEADING);
        heading.set_text_content(Some(text::TOKEN_HEADING));

        let help = doc.create_element("p")?;
        help.set_class_name(css::TEXT);
        help.set_text_content(Some(text::TOKEN_HELP));

        let token_area: HtmlTextAreaElement = doc.create_element("textarea")?.dyn_into()?;
        token_area.set_class_name(css::TEXTAREA);
        token_area.set_value(token);
        token_area.set_read_only(true);
        token_area.set_disabled(true);

        let copy_button: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
        copy_button.set_class_name(css::COPY_BUTTON);
        copy_button.set_text_content(Some(text::COPY_BUTTON));
        self.on_click(
            &copy_button,
            copy_click(copy_button.clone(), token.to_string(), self.pending_revert.clone()),
        )?;

        let logout_button: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
        logout_button.set_class_name(css::LOGOUT_BUTTON);
        logout_button.set_text_content(Some(text::LOGOUT_BUTTON));
        self.on_click(&logout_button, navigate_click(auth::logout_url))?;

        self.container.append_child(&heading)?;
        self.container.append_child(&help)?;
        self.container.append_child(&token_area)?;
        self.container.append_child(&copy_button)?;
        self.container.append_child(&logout_button)?;
        Ok(())
    }

    fn mount_unauthenticated(&mut self, doc: &Document) -> Result<(), JsValue> {
        debug::log(cat::VIEW, "mounting unauthenticated view");

        let not_logged_in = doc.create_element("p")?;
        not_logged_in.set_class_name(css::TEXT);
        not_logged_in.set_text_content(Some(text::NOT_LOGGED_IN));

        let please_log_in = doc.create_element("p")?;
        please_log_in.set_class_name(css::TEXT);
        please_log_in.set_text_content(Some(text::PLEASE_LOG_IN));

        let login_button: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
        login_button.set_class_name(css::LOGIN_BUTTON);
        login_button.set_text_content(Some(text::LOGIN_BUTTON));
        self.on_click(&login_button, navigate_click(auth::login_url))?;

        self.container.append_child(&not_logged_in)?;
        self.container.append_child(&please_log_in)?;
        self.container.append_child(&login_button)?;
        Ok(())
    }

    fn on_click<F>(&mut self, target: &EventTarget, handler: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        let cb = Closure::<dyn FnMut()>::wrap(Box::new(handler));
        target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        // Retained, not forgotten: unmount must be able to release these.
        self.click_handlers.push(cb);
        Ok(())
    }
}

/// Copy-button handler: write the token to the clipboard (fire-and-forget),
/// flip the button into its "Copied!" state, and schedule the revert.
///
/// The revert handle lives in `pending`; a click while a revert is pending
/// replaces it, which cancels the old timer, so exactly one revert fires
/// 5000 ms after the most recent click.
fn copy_click(
    button: HtmlButtonElement,
    token: String,
    pending: Rc<RefCell<Option<Timeout>>>,
) -> impl FnMut() {
    move || {
        if let Some(win) = web_sys::window() {
            // Completion is deliberately not awaited or checked.
            let _ = win.navigator().clipboard().write_text(&token);
        }
        debug::log(cat::COPY, "token written to clipboard");

        button.set_text_content(Some(text::COPY_BUTTON_DONE));
        let _ = button.class_list().add_1(css::COPIED);
        button.set_disabled(true);

        let btn = button.clone();
        let revert = Timeout::new(timing::COPY_REVERT_MS, move || {
            debug::log(cat::COPY, "copy button reverted");
            btn.set_text_content(Some(text::COPY_BUTTON));
            let _ = btn.class_list().remove_1(css::COPIED);
            btn.set_disabled(false);
            // The spent handle stays in `pending`; dropping it later is a
            // no-op clearTimeout.
        });
        pending.borrow_mut().replace(revert);
    }
}

/// Navigation handler for the LOG IN / Log out buttons. The target URL is
/// built from the live origin at click time.
fn navigate_click(to_url: fn(&str) -> String) -> impl FnMut() {
    move || {
        if let Some(win) = web_sys::window() {
            let location = win.location();
            if let Ok(origin) = location.origin() {
                let url = to_url(&origin);
                debug::log(cat::NAV, format!("navigating to {url}"));
                let _ = location.set_href(&url);
            }
        }
    }
}
