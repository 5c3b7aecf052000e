//! GraphQL operation → REST call routing.
//!
//! A static table maps each supported operation name to a REST descriptor:
//! HTTP method, path (built from request variables), and the name of the
//! variable carrying the request body, if any. A second table maps the
//! operation name to the top-level field the response payload is wrapped
//! under on the way back.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;

use super::error::ConvertError;
use super::field_mapping::convert_to_rest_format;

/// Characters escaped when a variable is interpolated into a path segment
/// or query value. Covers the URL-delimiting and unsafe characters; plain
/// identifiers (letters, digits, `-`, `_`, `.`) pass through unescaped.
const VARIABLE_ESCAPE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// HTTP method of a translated REST call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestMethod {
    Get,
    Post,
}

impl RestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestMethod::Get => "GET",
            RestMethod::Post => "POST",
        }
    }
}

/// A fully translated REST call, ready for the
/// [`ClaimsBackend`](crate::ports::ClaimsBackend) to execute.
///
/// `path` is relative to the downstream base URL and may carry a query
/// string. `body`, when present, has already been run through the field and
/// status mapping tables.
#[derive(Debug, Clone, PartialEq)]
pub struct RestCall {
    pub method: RestMethod,
    pub path: String,
    pub body: Option<Value>,
}

/// Translates `{operation name, variables}` into a [`RestCall`].
///
/// Unknown operation names fail with
/// [`ConvertError::UnsupportedOperation`] naming the operation; a path
/// template whose variable is absent fails with
/// [`ConvertError::MissingVariable`] rather than interpolating a
/// placeholder. Interpolated variables are percent-escaped so a value
/// containing `&`, `#`, `/`, or spaces cannot truncate or reroute the
/// downstream URL. Pure; performs no I/O.
pub fn rest_operation(operation: &str, variables: &Value) -> Result<RestCall, ConvertError> {
    match operation {
        "submitClaim" => Ok(RestCall {
            method: RestMethod::Post,
            path: "/api/claims".to_string(),
            body: Some(body_from(operation, variables, "input")?),
        }),
        "getClaimById" => {
            let id = path_variable(operation, variables, "id")?;
            Ok(RestCall {
                method: RestMethod::Get,
                path: format!("/api/claims/{id}"),
                body: None,
            })
        }
        "getClaimsByUser" => {
            let user_id = path_variable(operation, variables, "userId")?;
            Ok(RestCall {
                method: RestMethod::Get,
                path: format!("/api/claims?claimant_id={user_id}"),
                body: None,
            })
        }
        "updateClaimStatus" => {
            let id = path_variable(operation, variables, "id")?;
            Ok(RestCall {
                method: RestMethod::Post,
                path: format!("/api/claims/{id}/status"),
                body: Some(body_from(operation, variables, "input")?),
            })
        }
        unknown => Err(ConvertError::UnsupportedOperation(unknown.to_string())),
    }
}

/// Returns the top-level GraphQL field the response payload for `operation`
/// is wrapped under.
///
/// Cannot fail for an operation that passed [`rest_operation`]; the error
/// arm guards the response stage defensively.
pub fn response_field(operation: &str) -> Result<&'static str, ConvertError> {
    match operation {
        "submitClaim" => Ok("submitClaim"),
        "getClaimById" => Ok("getClaimById"),
        "getClaimsByUser" => Ok("getClaimsByUser"),
        "updateClaimStatus" => Ok("updateClaimStatus"),
        unknown => Err(ConvertError::UnsupportedResponseOperation(unknown.to_string())),
    }
}

fn body_from(
    operation: &str,
    variables: &Value,
    data_key: &'static str,
) -> Result<Value, ConvertError> {
    let data = variables
        .get(data_key)
        .ok_or_else(|| ConvertError::MissingVariable {
            operation: operation.to_string(),
            variable: data_key,
        })?;
    Ok(convert_to_rest_format(data))
}

fn path_variable(
    operation: &str,
    variables: &Value,
    name: &'static str,
) -> Result<String, ConvertError> {
    let value = variables
        .get(name)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ConvertError::MissingVariable {
            operation: operation.to_string(),
            variable: name,
        })?;
    let raw = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Ok(utf8_percent_encode(&raw, VARIABLE_ESCAPE_SET).to_string())
}
