use crate::core::error::ValidationError;
use crate::models::{company::Company, user::User};
use serde_json::{Map, Value};

/// Which dataset a raw record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Company,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::User => "user",
            RecordKind::Company => "company",
        }
    }
}

const USER_FIELDS: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "email",
    "company_id",
    "email_status",
    "active_status",
    "tokens",
];

const COMPANY_FIELDS: &[&str] = &["id", "name", "top_up", "email_status"];

/// Validate a raw user record and build the typed model.
///
/// Rules run in a fixed order and the first failure is returned:
/// required fields, `id`, `company_id`, `tokens`, `email_status`,
/// `active_status`. Name and email fields are not type-checked.
pub fn validate_user(record: &Value) -> Result<User, ValidationError> {
    let map = as_object(record)?;
    require_fields(map, USER_FIELDS)?;

    let id = positive_integer(map, "id")?;
    let company_id = positive_integer(map, "company_id")?;
    let tokens = non_negative_integer(map, "tokens")?;
    let email_status = boolean(map, "email_status")?;
    let active_status = boolean(map, "active_status")?;

    Ok(User::new(
        id,
        text(map, "first_name"),
        text(map, "last_name"),
        text(map, "email"),
        company_id,
        tokens,
        active_status,
        email_status,
    ))
}

/// Validate a raw company record and build the typed model.
///
/// Order: required fields, `id`, `top_up`, `email_status`.
pub fn validate_company(record: &Value) -> Result<Company, ValidationError> {
    let map = as_object(record)?;
    require_fields(map, COMPANY_FIELDS)?;

    let id = positive_integer(map, "id")?;
    let top_up = positive_integer(map, "top_up")?;
    let email_status = boolean(map, "email_status")?;

    Ok(Company::new(id, text(map, "name"), top_up, email_status))
}

fn as_object(record: &Value) -> Result<&Map<String, Value>, ValidationError> {
    record.as_object().ok_or(ValidationError::NotAnObject)
}

fn require_fields(map: &Map<String, Value>, fields: &[&'static str]) -> Result<(), ValidationError> {
    match fields.iter().find(|field| !map.contains_key(**field)) {
        Some(field) => Err(ValidationError::MissingField(*field)),
        None => Ok(()),
    }
}

// `as_u64` is None for negatives and for any number written with a fraction
// or exponent, so `1.0` never passes as an integer.
fn positive_integer(map: &Map<String, Value>, field: &'static str) -> Result<u64, ValidationError> {
    map.get(field)
        .and_then(Value::as_u64)
        .filter(|n| *n > 0)
        .ok_or(ValidationError::NotPositiveInteger(field))
}

fn non_negative_integer(map: &Map<String, Value>, field: &'static str) -> Result<u64, ValidationError> {
    map.get(field)
        .and_then(Value::as_u64)
        .ok_or(ValidationError::NotNonNegativeInteger(field))
}

fn boolean(map: &Map<String, Value>, field: &'static str) -> Result<bool, ValidationError> {
    map.get(field)
        .and_then(Value::as_bool)
        .ok_or(ValidationError::NotBoolean(field))
}

/// Display text for an unchecked field: strings verbatim, null as empty,
/// anything else as compact JSON.
fn text(map: &Map<String, Value>, field: &str) -> String {
    match map.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
