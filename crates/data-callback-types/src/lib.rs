//! Shared types and pure-logic utilities for the wallet `dataCallback` capability.
//! No HTTP dependency; usable from the callback server and from request tooling.

mod capability;
mod error;
mod info;
mod response;
mod rules;
mod validate;

pub use capability::{
    CALLBACK_PATH, Call, DataCallbackCapability, DataRequest, FieldSelection, build_data_callback,
    build_send_calls, default_callback_url,
};
pub use error::CallbackError;
pub use info::{DataField, Name, PhoneNumber, PhysicalAddress, RequestedInfo};
pub use response::{CallbackResponse, Echo, ErrorKey, ValidationErrors};
pub use rules::{Rule, RuleSet};
pub use validate::{
    MISSING_CAPABILITY_MESSAGE, SERVER_ERROR_MESSAGE, handle_callback, handle_callback_value,
    try_handle_callback, validate_requested_info,
};
