// system-tests/tests/suites/client_transport.rs
// ============================================================================
// Module: Client Transport Tests
// Description: Request client behavior against a local GraphQL stub.
// Purpose: Validate error mapping, transcripts, events, and headers offline.
// Dependencies: system-tests helpers, graphqlzero-client
// ============================================================================

//! Client transport tests against the offline stub.

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use graphqlzero_client::GraphQlClient;
use graphqlzero_client::GraphQlError;
use graphqlzero_client::MemoryEventSink;
use graphqlzero_client::RequestOutcome;
use graphqlzero_client::client::ANONYMOUS_OPERATION;
use serde_json::json;
use system_tests::checks::require;
use system_tests::checks::require_eq;
use system_tests::documents;

use crate::helpers::artifacts::TestReporter;
use crate::helpers::harness::TestResult;
use crate::helpers::stub::StubFixture;
use crate::helpers::stub::spawn_graphql_stub;

/// Client timeout for stub exchanges.
const STUB_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test(flavor = "multi_thread")]
async fn graphql_errors_on_http_200_surface_first_message() -> TestResult {
    let mut reporter = TestReporter::new("graphql_errors_on_http_200_surface_first_message")?;
    let stub = spawn_graphql_stub(vec![StubFixture::operation("GetUser").errors(
        200,
        &["Variable \"$id\" of required type \"ID!\" was not provided.", "second problem"],
    )])?;
    let client = GraphQlClient::new(stub.endpoint(), STUB_TIMEOUT)?;

    let err = client.request(documents::GET_USER, None).await.err().ok_or("expected an error")?;
    require(err.is_graphql(), format!("expected graphql error, got {}", err.kind()))?;
    require_eq(
        err.message().as_str(),
        "Variable \"$id\" of required type \"ID!\" was not provided.",
        "first error message",
    )?;
    require_eq(&err.entries().len(), &2, "error entry count")?;
    require(err.any_entry_contains("second problem"), "second entry preserved")?;

    reporter.artifacts().write_json("graphql_transcript.json", &client.transcript())?;
    reporter.finish("pass", vec!["first message surfaced; all entries kept".to_string()], vec![
        "graphql_transcript.json".to_string(),
    ])?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn validation_errors_on_http_400_are_graphql_errors() -> TestResult {
    let mut reporter = TestReporter::new("validation_errors_on_http_400_are_graphql_errors")?;
    let stub = spawn_graphql_stub(vec![
        StubFixture::operation("GetAlbum")
            .errors(400, &["Cannot query field \"nonExistentField\" on type \"Album\"."]),
    ])?;
    let client = GraphQlClient::new(stub.endpoint(), STUB_TIMEOUT)?;

    let err = client
        .request(documents::GET_ALBUM_UNKNOWN_FIELD, Some(json!({ "id": "1" })))
        .await
        .err()
        .ok_or("expected an error")?;
    require(err.is_graphql(), format!("expected graphql error, got {}", err.kind()))?;
    require(err.contains("Cannot query field \"nonExistentField\""), "field named in message")?;

    reporter.finish("pass", vec!["HTTP 400 envelope mapped to graphql error".to_string()], Vec::new())?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn non_envelope_error_status_is_http_error() -> TestResult {
    let mut reporter = TestReporter::new("non_envelope_error_status_is_http_error")?;
    let stub = spawn_graphql_stub(vec![StubFixture::operation("GetUser").text(502, "upstream down")])?;
    let client = GraphQlClient::new(stub.endpoint(), STUB_TIMEOUT)?;

    let err = client
        .request(documents::GET_USER, Some(json!({ "id": "1" })))
        .await
        .err()
        .ok_or("expected an error")?;
    match err {
        GraphQlError::Http {
            status,
            body,
        } => {
            require_eq(&status, &502, "status")?;
            require_eq(body.as_str(), "upstream down", "body")?;
        }
        other => return Err(format!("expected http error, got {}", other.kind()).into()),
    }

    reporter.finish("pass", vec!["plain-text 502 mapped to http error".to_string()], Vec::new())?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn success_without_data_or_errors_is_missing_data() -> TestResult {
    let mut reporter = TestReporter::new("success_without_data_or_errors_is_missing_data")?;
    let stub = spawn_graphql_stub(vec![
        StubFixture::operation("GetUser").raw_json(200, json!({})),
        StubFixture::operation("GetAlbum").text(200, "<html>not graphql</html>"),
    ])?;
    let client = GraphQlClient::new(stub.endpoint(), STUB_TIMEOUT)?;

    let missing = client.request(documents::GET_USER, Some(json!({ "id": "1" }))).await;
    require(matches!(missing, Err(GraphQlError::MissingData)), "empty envelope is missing data")?;
    let undecodable = client.request(documents::GET_ALBUM, Some(json!({ "id": "1" }))).await;
    require(matches!(undecodable, Err(GraphQlError::Decode(_))), "html body is a decode error")?;

    reporter.finish("pass", Vec::new(), Vec::new())?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn transcript_and_events_capture_every_exchange() -> TestResult {
    let mut reporter = TestReporter::new("transcript_and_events_capture_every_exchange")?;
    let stub = spawn_graphql_stub(vec![
        StubFixture::operation("GetUser")
            .with_variables(json!({ "id": "1" }))
            .data(json!({ "user": { "id": "1", "name": "Leanne Graham" } })),
        StubFixture::operation("GetUser").data(json!({ "user": { "id": null, "name": null } })),
        StubFixture::query_containing("invalidField")
            .errors(400, &["Cannot query field \"invalidField\" on type \"Query\"."]),
    ])?;
    let sink = Arc::new(MemoryEventSink::new());
    let client = GraphQlClient::new(stub.endpoint(), STUB_TIMEOUT)?.with_event_sink(sink.clone());

    let data = client.request(documents::GET_USER, Some(json!({ "id": "1" }))).await?;
    require_eq(&data["user"]["name"], &json!("Leanne Graham"), "seeded user name")?;
    let missing = client.request(documents::GET_USER, Some(json!({ "id": "9999" }))).await?;
    require(missing["user"]["id"].is_null(), "unknown user has null id")?;
    let rejected = client.request(documents::INVALID_ROOT_FIELD, None).await;
    require(rejected.is_err(), "invalid root field rejected")?;

    let transcript = client.transcript();
    require_eq(&transcript.len(), &3, "transcript length")?;
    let sequences: Vec<u64> = transcript.iter().map(|entry| entry.sequence).collect();
    require_eq(&sequences, &vec![1, 2, 3], "sequence numbers")?;
    require_eq(transcript[0].operation.as_str(), "GetUser", "named operation")?;
    require_eq(transcript[2].operation.as_str(), ANONYMOUS_OPERATION, "anonymous operation")?;
    require_eq(&transcript[2].status, &Some(400), "recorded status")?;
    require(transcript[2].error.is_some(), "error recorded in transcript")?;

    let outcomes: Vec<RequestOutcome> = sink.events().iter().map(|event| event.outcome).collect();
    require_eq(
        &outcomes,
        &vec![RequestOutcome::Ok, RequestOutcome::Ok, RequestOutcome::GraphqlError],
        "event outcomes",
    )?;
    require(sink.events().iter().all(|event| event.endpoint == stub.endpoint()), "event endpoint")?;

    reporter.artifacts().write_json("graphql_transcript.json", &transcript)?;
    reporter.finish("pass", vec!["three exchanges captured".to_string()], vec![
        "graphql_transcript.json".to_string(),
    ])?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn bearer_token_and_headers_are_sent() -> TestResult {
    let mut reporter = TestReporter::new("bearer_token_and_headers_are_sent")?;
    let stub = spawn_graphql_stub(vec![
        StubFixture::query_containing("user(id: \"1\")").data(json!({ "user": { "id": "1", "name": "Leanne Graham" } })),
    ])?;
    let client = GraphQlClient::new(stub.endpoint(), STUB_TIMEOUT)?
        .with_bearer_token("invalid-token")
        .with_header("x-suite", "offline");

    client.request(documents::USER_ONE, None).await?;

    let requests = stub.requests();
    require_eq(&requests.len(), &1, "request count")?;
    require_eq(&requests[0].authorization.as_deref(), &Some("Bearer invalid-token"), "authorization header")?;
    require_eq(&requests[0].operation_name, &None, "anonymous request has no operation name")?;
    require(requests[0].body.get("variables").is_none(), "absent variables are omitted")?;

    reporter.finish("pass", Vec::new(), Vec::new())?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_endpoint_is_transport_error() -> TestResult {
    let mut reporter = TestReporter::new("unreachable_endpoint_is_transport_error")?;
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?
    };
    let sink = Arc::new(MemoryEventSink::new());
    let client = GraphQlClient::new(format!("http://{addr}/api"), STUB_TIMEOUT)?.with_event_sink(sink.clone());

    let err = client.request(documents::USER_ONE, None).await.err().ok_or("expected an error")?;
    require_eq(err.kind(), "transport", "error kind")?;
    require_eq(&sink.events()[0].outcome, &RequestOutcome::TransportError, "event outcome")?;
    require_eq(&client.transcript()[0].status, &None, "no status recorded")?;

    reporter.finish("pass", Vec::new(), Vec::new())?;
    Ok(())
}
