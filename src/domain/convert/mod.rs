//! Protocol conversion domain logic.
//!
//! Everything in this module is pure: the mapping tables are static and
//! read-only, and the transforms take JSON values in and produce JSON values
//! out. No I/O happens here; the outbound REST call lives behind the
//! [`ClaimsBackend`](crate::ports::ClaimsBackend) port.
//!
//! - `error` - Conversion error taxonomy
//! - `field_mapping` - Bidirectional field-name and status-value tables
//! - `operations` - GraphQL operation → REST call routing
//! - `request` - GraphQL query parsing and operation extraction

mod error;
mod field_mapping;
mod operations;
mod request;

pub use error::ConvertError;
pub use field_mapping::{convert_to_graphql_format, convert_to_rest_format};
pub use operations::{response_field, rest_operation, RestCall, RestMethod};
pub use request::extract_operation;
