//! Field validation rules, applied in order with no short-circuit.

use serde::Deserialize;

use crate::{DataField, ErrorKey, RequestedInfo, ValidationErrors};

const BLOCKED_EMAIL_DOMAIN: &str = "@example.com";
const MIN_POSTAL_CODE_LEN: usize = 5;
const MIN_FIRST_NAME_LEN: usize = 2;
const MIN_PHONE_NUMBER_LEN: usize = 10;

/// One independent check: a predicate over the submitted data and the
/// message recorded when it holds.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub key: ErrorKey,
    pub sub_field: Option<&'static str>,
    pub message: &'static str,
    pub violated: fn(&RequestedInfo) -> bool,
}

impl Rule {
    pub fn apply(&self, info: &RequestedInfo, errors: &mut ValidationErrors) {
        if !(self.violated)(info) {
            return;
        }
        match self.sub_field {
            Some(sub_field) => errors.insert_nested(self.key, sub_field, self.message),
            None => errors.insert_message(self.key, self.message),
        }
    }
}

/// Which rules the endpoint enforces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Email domain and postal code only.
    Standard,
    /// Standard plus first-name and phone-number length.
    #[default]
    Extended,
}

impl RuleSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }

    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Self::Standard => &RULES[..2],
            Self::Extended => &RULES,
        }
    }
}

impl std::str::FromStr for RuleSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            other => Err(format!("unknown rule set: {other}")),
        }
    }
}

static RULES: [Rule; 4] = [
    Rule {
        key: ErrorKey::Field(DataField::Email),
        sub_field: None,
        message: "Example.com emails are not allowed",
        violated: blocked_email,
    },
    Rule {
        key: ErrorKey::Field(DataField::PhysicalAddress),
        sub_field: Some("postalCode"),
        message: "Invalid postal code",
        violated: short_postal_code,
    },
    Rule {
        key: ErrorKey::Field(DataField::Name),
        sub_field: Some("firstName"),
        message: "Invalid first name",
        violated: short_first_name,
    },
    Rule {
        key: ErrorKey::Field(DataField::PhoneNumber),
        sub_field: Some("number"),
        message: "Invalid phone number",
        violated: short_phone_number,
    },
];

/// Empty strings count as absent.
fn shorter_than(value: Option<&str>, min: usize) -> bool {
    value.is_some_and(|v| !v.is_empty() && v.chars().count() < min)
}

fn blocked_email(info: &RequestedInfo) -> bool {
    info.email
        .as_deref()
        .is_some_and(|email| email.ends_with(BLOCKED_EMAIL_DOMAIN))
}

fn short_postal_code(info: &RequestedInfo) -> bool {
    let postal_code = info
        .physical_address
        .as_ref()
        .and_then(|a| a.postal_code.as_deref());
    shorter_than(postal_code, MIN_POSTAL_CODE_LEN)
}

fn short_first_name(info: &RequestedInfo) -> bool {
    let first_name = info.name.as_ref().and_then(|n| n.first_name.as_deref());
    shorter_than(first_name, MIN_FIRST_NAME_LEN)
}

fn short_phone_number(info: &RequestedInfo) -> bool {
    let number = info.phone_number.as_ref().and_then(|p| p.number.as_deref());
    shorter_than(number, MIN_PHONE_NUMBER_LEN)
}
