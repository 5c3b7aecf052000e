//! Integration tests for the conversion pipeline over HTTP.
//!
//! These tests exercise the full stack - router, DTOs, application handler,
//! and mapping tables - against a scripted backend standing in for the
//! claims-processing service. They cover the two end-to-end scenarios from
//! the gateway's contract: a successful submitClaim round-trip and a
//! downstream 404 surfacing as an error envelope.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use benefits_gateway::adapters::http::convert::{gateway_router, ConvertAppState};
use benefits_gateway::domain::convert::{RestCall, RestMethod};
use benefits_gateway::ports::{BackendError, ClaimsBackend};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Scripted stand-in for the claims-processing service. Records every
/// translated call and replays a canned result.
struct ScriptedBackend {
    calls: Mutex<Vec<RestCall>>,
    result: Result<Value, BackendError>,
}

impl ScriptedBackend {
    fn returning(value: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            result: Ok(value),
        })
    }

    fn failing(error: BackendError) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            result: Err(error),
        })
    }

    fn recorded_calls(&self) -> Vec<RestCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClaimsBackend for ScriptedBackend {
    async fn execute(&self, call: &RestCall) -> Result<Value, BackendError> {
        self.calls.lock().unwrap().push(call.clone());
        self.result.clone()
    }
}

fn app(backend: Arc<ScriptedBackend>) -> axum::Router {
    gateway_router().with_state(ConvertAppState::new(backend))
}

fn convert_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/convert/graphql-to-rest")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn submit_claim_translates_request_and_response() {
    let backend = ScriptedBackend::returning(json!({
        "claim_reference_id": "C1",
        "claim_status": "received"
    }));

    let response = app(backend.clone())
        .oneshot(convert_request(json!({
            "query": "mutation { submitClaim(input: {claimId: \"C1\", status: \"Submitted\"}) }",
            "variables": {"input": {"claimId": "C1", "status": "Submitted"}}
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(
        body,
        json!({"data": {"submitClaim": {"claimId": "C1", "status": "Submitted"}}})
    );

    // The downstream service saw the REST-shaped call.
    let calls = backend.recorded_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, RestMethod::Post);
    assert_eq!(calls[0].path, "/api/claims");
    assert_eq!(
        calls[0].body,
        Some(json!({"claim_reference_id": "C1", "claim_status": "received"}))
    );
}

#[tokio::test]
async fn get_claim_by_id_missing_record_surfaces_downstream_error() {
    let backend = ScriptedBackend::failing(BackendError::ErrorStatus {
        status: 404,
        body: r#"{"error":"Claim not found"}"#.to_string(),
    });

    let response = app(backend)
        .oneshot(convert_request(json!({
            "query": "query { getClaimById(id: \"C42\") { claimId status } }",
            "variables": {"id": "C42"}
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(response).await;
    assert_eq!(body["data"], Value::Null);
    let message = body["errors"][0]["message"].as_str().unwrap();
    assert!(message.contains("404"));
    assert!(message.contains("Claim not found"));
}

#[tokio::test]
async fn get_claims_by_user_translates_a_list_response() {
    let backend = ScriptedBackend::returning(json!([
        {
            "claim_reference_id": "C1",
            "claim_status": "waiting_for_employer",
            "employment_records": [
                {"employer_id": "E1", "start_date": "2023-04-01", "end_date": "2024-12-31"}
            ]
        },
        {"claim_reference_id": "C2", "claim_status": "denied"}
    ]));

    let response = app(backend.clone())
        .oneshot(convert_request(json!({
            "query": "query { getClaimsByUser(userId: \"U7\") { claimId status } }",
            "variables": {"userId": "U7"}
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(
        body,
        json!({"data": {"getClaimsByUser": [
            {
                "claimId": "C1",
                "status": "WaitingEmployerInfo",
                "employmentHistory": [
                    {"employerId": "E1", "startDate": "2023-04-01", "endDate": "2024-12-31"}
                ]
            },
            {"claimId": "C2", "status": "Denied"}
        ]}})
    );

    let calls = backend.recorded_calls();
    assert_eq!(calls[0].method, RestMethod::Get);
    assert_eq!(calls[0].path, "/api/claims?claimant_id=U7");
    assert_eq!(calls[0].body, None);
}

#[tokio::test]
async fn update_claim_status_round_trips_the_status_enum() {
    let backend = ScriptedBackend::returning(json!({
        "claim_reference_id": "C1",
        "claim_status": "approved"
    }));

    let response = app(backend.clone())
        .oneshot(convert_request(json!({
            "query": "mutation { updateClaimStatus(id: \"C1\", input: {status: \"Approved\"}) { status } }",
            "variables": {"id": "C1", "input": {"status": "Approved"}}
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["updateClaimStatus"]["status"], "Approved");

    let calls = backend.recorded_calls();
    assert_eq!(calls[0].path, "/api/claims/C1/status");
    assert_eq!(calls[0].body, Some(json!({"claim_status": "approved"})));
}

#[tokio::test]
async fn missing_query_returns_client_error_without_downstream_call() {
    let backend = ScriptedBackend::returning(json!({}));

    let response = app(backend.clone())
        .oneshot(convert_request(json!({"variables": {"id": "C1"}})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"][0]["message"], "No GraphQL query provided");
    assert!(backend.recorded_calls().is_empty());
}
