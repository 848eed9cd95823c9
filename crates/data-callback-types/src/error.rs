/// Errors raised while building a `dataCallback` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackError {
    NoFieldsSelected,
    InvalidOrigin(String),
    InvalidField(String),
}

impl std::fmt::Display for CallbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFieldsSelected => write!(f, "Select at least one data field to request"),
            Self::InvalidOrigin(origin) => {
                write!(f, "invalid origin: {origin} (expected http:// or https://)")
            }
            Self::InvalidField(name) => write!(f, "unknown data field: {name}"),
        }
    }
}

impl std::error::Error for CallbackError {}
