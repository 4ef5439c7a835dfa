use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AggregateError, AppError, HubError};

/// One entry of the hub's error envelope: `{"error": {"type", "address",
/// "description"}}`. Every field is defaulted so that success arrays such as
/// `[{"success": {...}}]` still deserialize, with a zero error code.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorEntry {
    #[serde(default)]
    pub error: HubError,
}

/// One entry of the registration success array.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterAck {
    #[serde(default)]
    pub success: RegisterSuccess,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterSuccess {
    #[serde(default)]
    pub username: String,
}

/// One per-field acknowledgement from a state PUT, e.g.
/// `{"success": {"/lights/1/state/on": true}}`. Callers usually ignore these.
#[derive(Debug, Default, Deserialize)]
pub struct StateAck {
    #[serde(default)]
    pub success: serde_json::Map<String, serde_json::Value>,
}

/// Classify a hub response body as error(s) or the expected success payload.
///
/// The hub reports failures on the same endpoints as successes, with the
/// payload shape as the only distinguisher. Shape alone is not enough: the
/// success acks are also arrays of single-key objects and would parse as an
/// empty-defaulted error envelope. The envelope is therefore accepted only
/// when it is non-empty and its first entry carries a non-zero error code;
/// anything else falls through to the success parse.
///
/// A success payload that itself contains an `error` object with a non-zero
/// `type` would be misclassified here. The wire protocol offers no
/// unambiguous discriminant, so that ambiguity is inherent.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    if let Ok(entries) = serde_json::from_str::<Vec<ErrorEntry>>(body) {
        if entries.first().is_some_and(|first| first.error.code != 0) {
            let mut errors: Vec<HubError> = entries.into_iter().map(|e| e.error).collect();
            if errors.len() == 1 {
                return Err(AppError::Api(errors.remove(0)));
            }
            return Err(AppError::Aggregate(AggregateError(errors)));
        }
    }

    serde_json::from_str(body).map_err(|source| AppError::MalformedResponse {
        body: body.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::api::errors::ERR_LINK_BUTTON_NOT_PRESSED;
    use crate::models::light::LightSummary;

    #[test]
    fn single_error_entry_yields_api_error() {
        let body = r#"[{"error":{"type":101,"address":"/","description":"link button not pressed"}}]"#;
        let result = decode_body::<Vec<RegisterAck>>(body);
        match result {
            Err(AppError::Api(err)) => {
                assert_eq!(err.code, ERR_LINK_BUTTON_NOT_PRESSED);
                assert_eq!(err.address, "/");
                assert_eq!(err.description, "link button not pressed");
            }
            other => panic!("expected Api error, got {:?}", other.err()),
        }
    }

    #[test]
    fn multiple_error_entries_yield_aggregate_in_order() {
        let body = concat!(
            r#"[{"error":{"type":5,"address":"/lights/1/state/hue","description":"invalid value"}},"#,
            r#"{"error":{"type":6,"address":"/lights/1/state/sat","description":"parameter not available"}}]"#,
        );
        let result = decode_body::<Vec<StateAck>>(body);
        match result {
            Err(AppError::Aggregate(errs)) => {
                assert_eq!(errs.0.len(), 2);
                assert_eq!(errs.0[0].code, 5);
                assert_eq!(errs.0[1].code, 6);
            }
            other => panic!("expected Aggregate error, got {:?}", other.err()),
        }
    }

    #[test]
    fn success_ack_array_is_not_misread_as_error() {
        let body = r#"[{"success":{"/lights/1/state/on":true}},{"success":{"/lights/1/state/bri":200}}]"#;
        let acks = decode_body::<Vec<StateAck>>(body).unwrap();
        assert_eq!(acks.len(), 2);
        assert_eq!(acks[0].success["/lights/1/state/on"], true);
        assert_eq!(acks[1].success["/lights/1/state/bri"], 200);
    }

    #[test]
    fn register_success_extracts_username() {
        let body = r#"[{"success":{"username":"83b7780291a6ceffbe0bd049104df"}}]"#;
        let acks = decode_body::<Vec<RegisterAck>>(body).unwrap();
        assert_eq!(acks[0].success.username, "83b7780291a6ceffbe0bd049104df");
    }

    #[test]
    fn lights_listing_falls_through_to_success_parse() {
        let body = r#"{"1":{"name":"Kitchen"},"2":{"name":"Hall"}}"#;
        let lights = decode_body::<HashMap<String, LightSummary>>(body).unwrap();
        assert_eq!(lights["1"].name, "Kitchen");
        assert_eq!(lights["2"].name, "Hall");
    }

    #[test]
    fn empty_array_is_not_an_error() {
        let acks = decode_body::<Vec<StateAck>>("[]").unwrap();
        assert!(acks.is_empty());
    }

    #[test]
    fn garbage_body_is_malformed_response() {
        let result = decode_body::<Vec<StateAck>>("<html>offline</html>");
        match result {
            Err(AppError::MalformedResponse { body, .. }) => {
                assert_eq!(body, "<html>offline</html>");
            }
            other => panic!("expected MalformedResponse, got {:?}", other.err()),
        }
    }
}
