//! Application handlers.

mod convert_graphql_request;

pub use convert_graphql_request::{ConvertGraphqlRequest, ConvertGraphqlRequestHandler};
