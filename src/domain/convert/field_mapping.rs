//! Field-name and status-value mapping tables.
//!
//! Two static bidirectional tables drive the conversion:
//!
//! - the field table renames GraphQL camelCase keys (`claimId`) to the REST
//!   snake_case convention (`claim_reference_id`) and back;
//! - the status table translates the GraphQL status enum (`Submitted`) to
//!   the REST status strings (`received`) and back, and applies only to the
//!   field named `status` (GraphQL side) / `claim_status` (REST side).
//!
//! Keys absent from the field table pass through unchanged in both
//! directions. This mirrors the reference behavior; it means downstream
//! field names the table does not know about can leak across the protocol
//! boundary, which is accepted here as forward-compatibility.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// GraphQL field name → REST field name.
static FIELD_MAPPING: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // User/Claimant mappings
        ("userId", "claimant_id"),
        ("fullName", "claimant_name"),
        ("ssn", "social_security_number"),
        ("contactInfo", "contact_details"),
        // Claim mappings
        ("claimId", "claim_reference_id"),
        ("employmentHistory", "employment_records"),
        ("status", "claim_status"),
        ("separationReason", "separation_reason"),
        ("submissionDate", "filing_date"),
        // Employment record mappings
        ("employerId", "employer_id"),
        ("employerName", "employer_name"),
        ("startDate", "start_date"),
        ("endDate", "end_date"),
        ("wages", "wage_data"),
        ("position", "position_title"),
    ])
});

/// REST field name → GraphQL field name. Derived from [`FIELD_MAPPING`], so
/// the two tables cannot drift apart.
static REVERSE_FIELD_MAPPING: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| FIELD_MAPPING.iter().map(|(k, v)| (*v, *k)).collect());

/// GraphQL status enum value → REST status string.
static STATUS_MAPPING: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Submitted", "received"),
        ("InProcess", "processing"),
        ("WaitingEmployerInfo", "waiting_for_employer"),
        ("Approved", "approved"),
        ("Denied", "denied"),
    ])
});

/// REST status string → GraphQL status enum value.
static REVERSE_STATUS_MAPPING: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STATUS_MAPPING.iter().map(|(k, v)| (*v, *k)).collect());

/// Converts a JSON value from GraphQL naming to REST naming.
///
/// Recurses depth-first; arrays are mapped element-wise, preserving order.
/// Scalars and nulls are returned unchanged. A scalar value under the key
/// `status` is translated through the status table when it is a known enum
/// value; unknown status values pass through as-is.
pub fn convert_to_rest_format(data: &Value) -> Value {
    convert(data, &FIELD_MAPPING, "status", &STATUS_MAPPING)
}

/// Converts a JSON value from REST naming back to GraphQL naming.
///
/// The exact inverse of [`convert_to_rest_format`] for every key and status
/// value present in the tables; unmapped keys pass through unchanged.
pub fn convert_to_graphql_format(data: &Value) -> Value {
    convert(data, &REVERSE_FIELD_MAPPING, "claim_status", &REVERSE_STATUS_MAPPING)
}

fn convert(
    data: &Value,
    fields: &HashMap<&'static str, &'static str>,
    status_key: &str,
    statuses: &HashMap<&'static str, &'static str>,
) -> Value {
    match data {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| convert(item, fields, status_key, statuses))
                .collect(),
        ),
        Value::Object(entries) => {
            let mut result = Map::with_capacity(entries.len());
            for (key, value) in entries {
                let mapped_key = fields.get(key.as_str()).copied().unwrap_or(key.as_str());
                let mapped_value = match value {
                    Value::Object(_) | Value::Array(_) => {
                        convert(value, fields, status_key, statuses)
                    }
                    Value::String(s) if key.as_str() == status_key => statuses
                        .get(s.as_str())
                        .map(|mapped| Value::String((*mapped).to_string()))
                        .unwrap_or_else(|| value.clone()),
                    _ => value.clone(),
                };
                result.insert(mapped_key.to_string(), mapped_value);
            }
            Value::Object(result)
        }
        _ => data.clone(),
    }
}
