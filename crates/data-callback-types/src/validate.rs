//! Callback handling: structural checks, rule pass, verbatim echo.

use serde::Deserialize;
use serde_json::Value;
use serde_json::value::RawValue;

use crate::{CallbackResponse, Echo, RequestedInfo, RuleSet, ValidationErrors};

/// Reported for anything that cannot be parsed or checked.
pub const SERVER_ERROR_MESSAGE: &str = "Server error validating data";
pub const MISSING_CAPABILITY_MESSAGE: &str = "Missing dataCallback capability";

/// Top-level members kept as raw JSON so the echo is byte-for-byte.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    calls: Option<Box<RawValue>>,
    chain_id: Option<Box<RawValue>>,
    version: Option<Box<RawValue>>,
    capabilities: Option<Box<RawValue>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Capabilities {
    data_callback: Option<DataCallbackPayload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataCallbackPayload {
    #[serde(default)]
    requested_info: Option<RequestedInfo>,
}

/// Run every rule of `rule_set` against `info`.
pub fn validate_requested_info(info: &RequestedInfo, rule_set: RuleSet) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for rule in rule_set.rules() {
        rule.apply(info, &mut errors);
    }
    errors
}

/// Handle a raw callback body. Never fails: anything unparseable becomes
/// `errors.server`.
pub fn handle_callback(body: &[u8], rule_set: RuleSet) -> CallbackResponse {
    try_handle_callback(body, rule_set)
        .unwrap_or_else(|_| CallbackResponse::server_error(SERVER_ERROR_MESSAGE))
}

/// Same as [`handle_callback`] on an already parsed document.
pub fn handle_callback_value(body: &Value, rule_set: RuleSet) -> CallbackResponse {
    match serde_json::to_vec(body) {
        Ok(bytes) => handle_callback(&bytes, rule_set),
        Err(_) => CallbackResponse::server_error(SERVER_ERROR_MESSAGE),
    }
}

/// Parse failures are returned so callers can log their category; structural
/// and field problems are already encoded in the response.
pub fn try_handle_callback(
    body: &[u8],
    rule_set: RuleSet,
) -> Result<CallbackResponse, serde_json::Error> {
    if !is_json_object(body) {
        return Err(serde::de::Error::custom("callback body must be a JSON object"));
    }
    let envelope: Envelope = serde_json::from_slice(body)?;

    let missing: Vec<&str> = [
        ("calls", envelope.calls.is_none()),
        ("chainId", envelope.chain_id.is_none()),
        ("version", envelope.version.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, absent)| absent.then_some(name))
    .collect();

    let (Some(calls), Some(chain_id), Some(version)) =
        (envelope.calls, envelope.chain_id, envelope.version)
    else {
        return Ok(CallbackResponse::server_error(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    };

    let Some(capabilities) = envelope.capabilities else {
        return Ok(CallbackResponse::server_error(MISSING_CAPABILITY_MESSAGE));
    };
    if !is_json_object(capabilities.get().as_bytes()) {
        return Err(serde::de::Error::custom("capabilities must be a JSON object"));
    }
    let parsed: Capabilities = serde_json::from_str(capabilities.get())?;
    let Some(data_callback) = parsed.data_callback else {
        return Ok(CallbackResponse::server_error(MISSING_CAPABILITY_MESSAGE));
    };

    if let Some(info) = data_callback.requested_info {
        let errors = validate_requested_info(&info, rule_set);
        if let Some(rejected) = CallbackResponse::rejected(errors) {
            return Ok(rejected);
        }
    }

    Ok(CallbackResponse::Accepted(Echo {
        calls,
        chain_id,
        version,
        capabilities,
    }))
}

/// Structs also deserialize from arrays; callers only accept objects.
fn is_json_object(raw: &[u8]) -> bool {
    raw.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'{')
}
