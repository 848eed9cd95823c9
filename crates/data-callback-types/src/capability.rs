//! Client-side construction of the `dataCallback` capability and the
//! `wallet_sendCalls` request that carries it.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{CallbackError, DataField};

/// Path of the validation endpoint, appended to the app origin.
pub const CALLBACK_PATH: &str = "/api/data-callback";

/// One entry of `dataCallback.requests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRequest {
    #[serde(rename = "type")]
    pub field: DataField,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCallbackCapability {
    pub requests: Vec<DataRequest>,
    #[serde(
        rename = "callbackURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub callback_url: Option<String>,
}

/// Toggle state for one field in the request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub field: DataField,
    pub selected: bool,
    pub optional: bool,
}

impl FieldSelection {
    pub fn required(field: DataField) -> Self {
        Self {
            field,
            selected: true,
            optional: false,
        }
    }

    pub fn optional(field: DataField) -> Self {
        Self {
            field,
            selected: true,
            optional: true,
        }
    }
}

/// A call in `wallet_sendCalls.params[0].calls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub to: String,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Assemble the capability from toggle state. A field listed twice keeps its
/// first entry. Fails when nothing is selected.
pub fn build_data_callback(
    selection: &[FieldSelection],
    callback_url: Option<String>,
) -> Result<DataCallbackCapability, CallbackError> {
    let mut requests: Vec<DataRequest> = Vec::with_capacity(selection.len());
    for choice in selection.iter().filter(|s| s.selected) {
        if requests.iter().any(|r| r.field == choice.field) {
            continue;
        }
        requests.push(DataRequest {
            field: choice.field,
            optional: choice.optional,
        });
    }

    if requests.is_empty() {
        return Err(CallbackError::NoFieldsSelected);
    }

    Ok(DataCallbackCapability {
        requests,
        callback_url,
    })
}

/// `<origin>/api/data-callback`.
pub fn default_callback_url(origin: &str) -> Result<String, CallbackError> {
    let trimmed = origin.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
            Ok(format!("{trimmed}{CALLBACK_PATH}"))
        }
        _ => Err(CallbackError::InvalidOrigin(origin.to_string())),
    }
}

/// Full `wallet_sendCalls` JSON-RPC request.
pub fn build_send_calls(
    calls: &[Call],
    chain_id: &str,
    version: &str,
    capability: &DataCallbackCapability,
) -> Value {
    json!({
        "method": "wallet_sendCalls",
        "params": [{
            "version": version,
            "chainId": chain_id,
            "calls": calls,
            "capabilities": {
                "dataCallback": capability,
            },
        }],
    })
}
