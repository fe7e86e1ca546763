//! URL fragment parsing
//!
//! The login flow redirects back to this page with the access token in the
//! URL fragment (`#access_token=...&...`), which the browser never sends to
//! the server. This module turns that raw fragment into a string map.
//!
//! Parsing rules:
//! - A single leading `#` is stripped if present.
//! - Pieces are separated by `&`; each piece splits on the *first* `=`, so
//!   `a=b=c` maps `a` to `b=c`.
//! - Pieces without a `=` are dropped silently.
//! - Values are percent-decoded; keys are kept raw.
//! - Duplicate keys: last write wins.

use std::collections::HashMap;

/// Parse a raw URL fragment into key/value pairs.
///
/// Accepts the fragment with or without its leading `#`. Never fails; the
/// worst malformed input yields an empty map.
pub fn parse_fragment(fragment: &str) -> HashMap<String, String> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);

    let mut params = HashMap::new();
    for piece in raw.split('&') {
        let mut it = piece.splitn(2, '=');
        let key = it.next().unwrap_or_default();
        let Some(value) = it.next() else {
            // No '=' in this piece; drop it without disturbing the rest.
            continue;
        };
        let value = urlencoding::decode(value)
            .unwrap_or_else(|_| value.into())
            .to_string();
        params.insert(key.to_string(), value);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_pairs_on_ampersand() {
        let params = parse_fragment("#access_token=abc123&expires_in=7200");
        assert_eq!(params.get("access_token").map(String::as_str), Some("abc123"));
        assert_eq!(params.get("expires_in").map(String::as_str), Some("7200"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn leading_hash_is_optional() {
        assert_eq!(parse_fragment("#a=1"), parse_fragment("a=1"));
    }

    #[test]
    fn values_are_percent_decoded_keys_are_not() {
        let params = parse_fragment("#my%20key=hello%20world");
        // Key stays raw, value decodes.
        assert_eq!(params.get("my%20key").map(String::as_str), Some("hello world"));
        assert!(!params.contains_key("my key"));
    }

    #[test]
    fn splits_on_first_equals_only() {
        let params = parse_fragment("#scope=read=write");
        assert_eq!(params.get("scope").map(String::as_str), Some("read=write"));
    }

    #[test]
    fn pieces_without_equals_are_dropped() {
        let params = parse_fragment("#noise&access_token=tok&morenoise");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("access_token").map(String::as_str), Some("tok"));
    }

    #[test]
    fn empty_fragment_yields_empty_map() {
        assert!(parse_fragment("").is_empty());
        assert!(parse_fragment("#").is_empty());
    }

    #[test]
    fn last_write_wins_on_duplicate_keys() {
        let params = parse_fragment("#k=first&k=second");
        assert_eq!(params.get("k").map(String::as_str), Some("second"));
    }

    #[test]
    fn bad_percent_sequence_keeps_raw_value() {
        // Invalid UTF-8 after decoding; keep the raw text rather than erroring.
        let params = parse_fragment("#k=%FF%FE");
        assert_eq!(params.get("k").map(String::as_str), Some("%FF%FE"));
    }

    #[test]
    fn empty_key_is_still_an_entry() {
        let params = parse_fragment("#=orphan");
        assert_eq!(params.get("").map(String::as_str), Some("orphan"));
    }
}
