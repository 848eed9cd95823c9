//! Initiator to validator: build the request the way the app does, play the
//! wallet host, and post the collected data back to the callback URL.

use anyhow::Result;
use axum::body::Body;
use axum::http::Request;
use data_callback_types::{
    build_data_callback, build_send_calls, Call, DataField, FieldSelection,
};
use serde_json::{json, Value};

use crate::utils::{post_callback, send, test_app};

/// What a wallet host does with `wallet_sendCalls` params once the user
/// approved: attach the collected data and post everything back.
fn wallet_callback(params: &Value, requested_info: Value) -> Value {
    let mut body = params.clone();
    body["capabilities"]["dataCallback"]["requestedInfo"] = requested_info;
    body
}

#[tokio::test]
async fn test_built_request_round_trips_through_callback() -> Result<()> {
    let app = test_app();

    let health = send(
        &app,
        Request::builder().uri("/health").body(Body::empty())?,
    )
    .await?
    .json()?;
    let callback_url = health["callback_url"].as_str().unwrap().to_string();

    let capability = build_data_callback(
        &[
            FieldSelection::required(DataField::Email),
            FieldSelection::optional(DataField::PhysicalAddress),
        ],
        Some(callback_url.clone()),
    )?;
    let calls = [Call {
        to: "0x036CbD53842c5426634e7929541eC2318f3dCF7e".into(),
        data: "0xa9059cbb".into(),
        value: None,
    }];
    let request = build_send_calls(&calls, "0x14a34", "1.0", &capability);
    assert_eq!(
        request["params"][0]["capabilities"]["dataCallback"]["callbackURL"],
        json!(callback_url)
    );
    let params = &request["params"][0];

    let rejected = post_callback(
        &app,
        &wallet_callback(params, json!({"email": "someone@example.com"})),
    )
    .await?
    .json()?;
    assert_eq!(
        rejected,
        json!({"errors": {"email": "Example.com emails are not allowed"}})
    );

    let approved_body = wallet_callback(
        params,
        json!({
            "email": "someone@coinbase.com",
            "physicalAddress": {
                "address1": "1 Main St",
                "city": "Springfield",
                "state": "IL",
                "postalCode": "62701",
                "countryCode": "US"
            }
        }),
    );
    let accepted = post_callback(&app, &approved_body).await?.json()?;
    assert!(accepted.get("errors").is_none());
    assert_eq!(accepted["calls"], params["calls"]);
    assert_eq!(accepted["capabilities"], approved_body["capabilities"]);
    Ok(())
}

#[tokio::test]
async fn test_empty_selection_never_reaches_wallet() -> Result<()> {
    let result = build_data_callback(&[], Some("http://localhost:3040/api/data-callback".into()));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Select at least one data field to request"
    );
    Ok(())
}
