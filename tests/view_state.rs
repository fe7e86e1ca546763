//! View selection: only a non-empty `access_token` produces the token view,
//! and the JSON snapshot carries the tagged state across the JS boundary.

use tokenpage::{parse_fragment, ViewState};

#[test]
fn token_fragment_renders_token_view() {
    let state = ViewState::from_params(&parse_fragment("#access_token=abc123"));
    assert_eq!(
        state,
        ViewState::Authenticated {
            token: "abc123".to_string()
        }
    );
    // The field value is the literal token, undecorated.
    assert_eq!(state.token(), Some("abc123"));
}

#[test]
fn empty_fragment_renders_login_view() {
    assert_eq!(
        ViewState::from_params(&parse_fragment("#")),
        ViewState::Unauthenticated
    );
}

#[test]
fn unrelated_params_render_login_view() {
    // Presence of other parameters must not trigger the token view.
    let state = ViewState::from_params(&parse_fragment("#foo=bar&expires_in=7200"));
    assert_eq!(state, ViewState::Unauthenticated);
}

#[test]
fn empty_token_value_renders_login_view() {
    let state = ViewState::from_params(&parse_fragment("#access_token="));
    assert_eq!(state, ViewState::Unauthenticated);
}

#[test]
fn percent_encoded_token_is_decoded_before_display() {
    let state = ViewState::from_params(&parse_fragment("#access_token=ey%2Fabc%3D%3D"));
    assert_eq!(state.token(), Some("ey/abc=="));
}

#[test]
fn duplicate_token_params_use_the_last_one() {
    let state = ViewState::from_params(&parse_fragment("#access_token=first&access_token=second"));
    assert_eq!(state.token(), Some("second"));
}

#[test]
fn snapshot_json_is_tagged() {
    let auth = ViewState::Authenticated {
        token: "abc123".to_string(),
    };
    let json = serde_json::to_value(&auth).unwrap();
    assert_eq!(json["type"], "Authenticated");
    assert_eq!(json["token"], "abc123");

    let anon = serde_json::to_value(ViewState::Unauthenticated).unwrap();
    assert_eq!(anon["type"], "Unauthenticated");

    // Round-trips for JS callers that hand the snapshot back.
    let back: ViewState = serde_json::from_value(json).unwrap();
    assert!(back.is_authenticated());
}
