//! GraphQL operation extraction.
//!
//! The gateway does not execute GraphQL; it only needs the name of the field
//! being requested. The query string is parsed with `async-graphql-parser`
//! and the first top-level field selection of the first operation definition
//! is taken as the operation name.
//!
//! Known limitation: documents with multiple operations are not supported —
//! only the operation appearing first in the source text is considered and
//! the rest are ignored.

use async_graphql_parser::parse_query;
use async_graphql_parser::types::{DocumentOperations, Selection};

use super::error::ConvertError;

/// Parses `query` and returns the invoked operation name.
///
/// Fails with [`ConvertError::InvalidQuery`] when the query does not parse,
/// has no selections, or selects something other than a plain field
/// (fragment spreads at the top level are not supported).
pub fn extract_operation(query: &str) -> Result<String, ConvertError> {
    let document = parse_query(query).map_err(|err| {
        tracing::debug!(error = %err, "failed to parse GraphQL query");
        ConvertError::InvalidQuery
    })?;

    let operation = match &document.operations {
        DocumentOperations::Single(operation) => &operation.node,
        // Named operations come back as a map; pick the one appearing first
        // in the source so the choice does not depend on map iteration order.
        DocumentOperations::Multiple(operations) => {
            &operations
                .values()
                .min_by_key(|operation| (operation.pos.line, operation.pos.column))
                .ok_or(ConvertError::InvalidQuery)?
                .node
        }
    };

    let selection = operation
        .selection_set
        .node
        .items
        .first()
        .ok_or(ConvertError::InvalidQuery)?;

    match &selection.node {
        Selection::Field(field) => Ok(field.node.name.node.to_string()),
        _ => Err(ConvertError::InvalidQuery),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_mutation_field_name() {
        let query = r#"mutation { submitClaim(input: {claimId: "C1"}) { claimId } }"#;
        assert_eq!(extract_operation(query).unwrap(), "submitClaim");
    }

    #[test]
    fn extracts_query_field_name() {
        let query = "query { getClaimById(id: \"C42\") { claimId status } }";
        assert_eq!(extract_operation(query).unwrap(), "getClaimById");
    }

    #[test]
    fn extracts_from_named_operation_with_variables() {
        let query = r#"
            mutation UpdateStatus($id: ID!, $input: StatusInput!) {
                updateClaimStatus(id: $id, input: $input) { status }
            }
        "#;
        assert_eq!(extract_operation(query).unwrap(), "updateClaimStatus");
    }

    #[test]
    fn first_of_multiple_named_operations_wins() {
        let query = r#"
            query A { getClaimById(id: "C1") { status } }
            query B { getClaimsByUser(userId: "U1") { status } }
        "#;
        // The parser returns named operations as a map; repeat to catch any
        // dependence on its iteration order.
        for _ in 0..20 {
            assert_eq!(extract_operation(query).unwrap(), "getClaimById");
        }
    }

    #[test]
    fn source_order_decides_between_named_operations() {
        let query = r#"
            query B { getClaimsByUser(userId: "U1") { status } }
            query A { getClaimById(id: "C1") { status } }
        "#;
        for _ in 0..20 {
            assert_eq!(extract_operation(query).unwrap(), "getClaimsByUser");
        }
    }

    #[test]
    fn only_the_first_selection_is_considered() {
        let query = "query { getClaimById(id: \"C1\") { status } getClaimsByUser(userId: \"U1\") { status } }";
        assert_eq!(extract_operation(query).unwrap(), "getClaimById");
    }

    #[test]
    fn malformed_query_is_invalid() {
        let err = extract_operation("mutation { submitClaim(").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidQuery));
    }

    #[test]
    fn non_graphql_text_is_invalid() {
        let err = extract_operation("SELECT * FROM claims").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidQuery));
    }

    #[test]
    fn empty_query_is_invalid() {
        let err = extract_operation("").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidQuery));
    }
}
