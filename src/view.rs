//! View state derivation
//!
//! The page has exactly two mutually exclusive views, selected once per load
//! from the parsed fragment. The state is serializable so the wasm surface
//! can hand a JSON snapshot to page scripts and debug tooling.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::auth;

/// Which of the two page views to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewState {
    /// The fragment carried a non-empty `access_token`.
    Authenticated { token: String },
    /// No usable token; show the login prompt.
    Unauthenticated,
}

impl ViewState {
    /// Derive the view from parsed fragment params.
    ///
    /// Only a non-empty `access_token` value selects the authenticated view;
    /// unrelated params change nothing.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        match auth::token_from_params(params) {
            Some(token) => ViewState::Authenticated {
                token: token.to_string(),
            },
            None => ViewState::Unauthenticated,
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, ViewState::Authenticated { .. })
    }

    /// The token, if this is the authenticated view.
    #[inline]
    pub fn token(&self) -> Option<&str> {
        match self {
            ViewState::Authenticated { token } => Some(token),
            ViewState::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::parse_fragment;

    #[test]
    fn token_fragment_selects_authenticated() {
        let state = ViewState::from_params(&parse_fragment("#access_token=abc123"));
        assert_eq!(state.token(), Some("abc123"));
        assert!(state.is_authenticated());
    }

    #[test]
    fn unrelated_params_stay_unauthenticated() {
        let state = ViewState::from_params(&parse_fragment("#foo=bar"));
        assert_eq!(state, ViewState::Unauthenticated);
    }

    #[test]
    fn empty_fragment_stays_unauthenticated() {
        assert_eq!(
            ViewState::from_params(&parse_fragment("")),
            ViewState::Unauthenticated
        );
        assert_eq!(
            ViewState::from_params(&parse_fragment("#")),
            ViewState::Unauthenticated
        );
    }
}
