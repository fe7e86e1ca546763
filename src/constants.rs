//! Page constants
//!
//! Centralized UI copy, CSS class names, and timing used by the token page.
//! The class names match the stylesheet shipped with the page; the renderer
//! only attaches them, it never styles anything itself.

/// Fragment parameter carrying the token back from the authorization redirect.
pub const TOKEN_PARAM: &str = "access_token";

/// User-visible text
pub mod text {
    /// Heading above the token field.
    pub const TOKEN_HEADING: &str = "Access token";

    /// Explains what the token is for.
    pub const TOKEN_HELP: &str = "Copy this Access Token below and use it as \
        Bearer on the authorization header of your requests to this API:";

    /// Copy button, idle state.
    pub const COPY_BUTTON: &str = "Copy token to clipboard";

    /// Copy button while the revert timer is pending.
    pub const COPY_BUTTON_DONE: &str = "Copied!";

    pub const LOGOUT_BUTTON: &str = "Log out";

    /// Unauthenticated view copy.
    pub const NOT_LOGGED_IN: &str = "It seems that you haven't already logged in.";
    pub const PLEASE_LOG_IN: &str = "Please login to get your access token.";
    pub const LOGIN_BUTTON: &str = "LOG IN";
}

/// CSS class names (BEM, owned by the page stylesheet)
pub mod css {
    /// Selector for the container the page ships; everything renders under it.
    pub const CONTAINER_SELECTOR: &str = ".main__wrapper";

    pub const HEADING: &str = "main__access-level";
    pub const TEXT: &str = "main__text";
    pub const TEXTAREA: &str = "main__textarea";
    pub const COPY_BUTTON: &str = "main__button--copy";
    pub const LOGOUT_BUTTON: &str = "main__button--logout";
    pub const LOGIN_BUTTON: &str = "main__button";

    /// Added to the copy button while it reads "Copied!".
    pub const COPIED: &str = "copied";
}

/// Timing
pub mod timing {
    /// How long the copy button stays in its "Copied!" state before the
    /// label and enabled state revert.
    pub const COPY_REVERT_MS: u32 = 5000;
}
