use chrono::Utc;
use serde_json::Value;

use crate::models::{PatientRecord, TransformError};

/// Derive the flat export row for a single Patient resource.
///
/// `id`, `gender` and `birthDate` are copied verbatim when present;
/// name and address are composed from the first entry of their
/// respective arrays. A field that is present but not the expected
/// JSON shape aborts projection of this resource only.
pub fn project_resource(resource: &Value) -> Result<PatientRecord, TransformError> {
    let resource_id = display_id(resource).to_string();

    Ok(PatientRecord {
        patient_id: get_string(resource, "id", &resource_id)?,
        name: compose_name(resource, &resource_id)?,
        gender: get_string(resource, "gender", &resource_id)?,
        birth_date: get_string(resource, "birthDate", &resource_id)?,
        address: compose_address(resource, &resource_id)?,
        processed_date: Utc::now(),
    })
}

/// Best-effort identifier for log and error messages.
pub(crate) fn display_id(resource: &Value) -> &str {
    resource
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("<unknown>")
}

/// Join the first name entry's `given` parts and `family` with spaces.
fn compose_name(resource: &Value, resource_id: &str) -> Result<String, TransformError> {
    let entry = match first_entry(resource, "name", resource_id)? {
        Some(entry) => entry,
        None => return Ok(String::new()),
    };

    let mut parts: Vec<&str> = Vec::new();
    match entry.get("given") {
        None | Some(Value::Null) => {}
        Some(Value::Array(given)) => {
            for part in given {
                match part {
                    Value::String(s) => parts.push(s),
                    other => {
                        return Err(TransformError::shape(
                            resource_id,
                            "name",
                            format!("given entry is {}, expected a string", json_kind(other)),
                        ))
                    }
                }
            }
        }
        Some(other) => {
            return Err(TransformError::shape(
                resource_id,
                "name",
                format!("given is {}, expected an array", json_kind(other)),
            ))
        }
    }

    let given = parts.join(" ");
    let family = get_string(entry, "family", resource_id)
        .map_err(|e| TransformError::shape(resource_id, "name", format!("family: {}", e.reason)))?
        .unwrap_or_default();

    Ok(format!("{} {}", given, family).trim().to_string())
}

/// Join the first address entry's `line` parts and locality fields
/// with `", "`, skipping anything absent or empty.
fn compose_address(resource: &Value, resource_id: &str) -> Result<String, TransformError> {
    let entry = match first_entry(resource, "address", resource_id)? {
        Some(entry) => entry,
        None => return Ok(String::new()),
    };

    let mut components: Vec<String> = Vec::new();
    match entry.get("line") {
        None | Some(Value::Null) => {}
        Some(Value::Array(lines)) => {
            for line in lines {
                match line {
                    Value::String(s) => components.push(s.clone()),
                    Value::Null => {}
                    other => {
                        return Err(TransformError::shape(
                            resource_id,
                            "address",
                            format!("line entry is {}, expected a string", json_kind(other)),
                        ))
                    }
                }
            }
        }
        Some(other) => {
            return Err(TransformError::shape(
                resource_id,
                "address",
                format!("line is {}, expected an array", json_kind(other)),
            ))
        }
    }

    for field in ["city", "state", "postalCode"] {
        let value = get_string(entry, field, resource_id).map_err(|e| {
            TransformError::shape(resource_id, "address", format!("{}: {}", field, e.reason))
        })?;
        if let Some(value) = value {
            components.push(value);
        }
    }

    Ok(components
        .into_iter()
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(", "))
}

/// First element of an array-valued field. `None` when the field is
/// absent or the array is empty.
fn first_entry<'a>(
    resource: &'a Value,
    field: &'static str,
    resource_id: &str,
) -> Result<Option<&'a Value>, TransformError> {
    match resource.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(entries)) => Ok(entries.first()),
        Some(other) => Err(TransformError::shape(
            resource_id,
            field,
            format!("expected an array, got {}", json_kind(other)),
        )),
    }
}

/// Null-safe read of a string-valued field.
fn get_string(
    source: &Value,
    field: &'static str,
    resource_id: &str,
) -> Result<Option<String>, TransformError> {
    match source.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(TransformError::shape(
            resource_id,
            field,
            format!("expected a string, got {}", json_kind(other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
