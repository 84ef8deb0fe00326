// system-tests/tests/suites/api_operations.rs
// ============================================================================
// Module: Typed API Tests
// Description: ZeroApi decoding and target provisioning against the stub.
// Purpose: Validate typed reads, mutations, and seeded fallback offline.
// Dependencies: system-tests helpers, graphqlzero-client
// ============================================================================

//! Typed API and provisioning tests against the offline stub.

use std::time::Duration;

use graphqlzero_client::GraphQlClient;
use graphqlzero_client::GraphQlError;
use serde_json::json;
use system_tests::api::ZeroApi;
use system_tests::checks::OwnerEcho;
use system_tests::checks::require;
use system_tests::checks::require_album_echo;
use system_tests::checks::require_empty_page;
use system_tests::checks::require_eq;
use system_tests::checks::require_page_within;
use system_tests::checks::require_placeholder_user;
use system_tests::checks::require_positive_total;
use system_tests::checks::require_some;
use system_tests::checks::require_unowned;
use system_tests::checks::require_user_echo;
use system_tests::fixtures::UniqueTestData;
use system_tests::models::PageQueryOptions;
use system_tests::models::UpdateUserInput;
use system_tests::provision::SEEDED_ALBUM_ID;
use system_tests::provision::SEEDED_USER_ID;
use system_tests::provision::TargetSource;
use system_tests::provision::provision_album;
use system_tests::provision::provision_user;

use crate::helpers::artifacts::TestReporter;
use crate::helpers::harness::TestResult;
use crate::helpers::stub::StubFixture;
use crate::helpers::stub::spawn_graphql_stub;

/// Client timeout for stub exchanges.
const STUB_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds an API bound to a stub endpoint.
fn api_for(endpoint: &str) -> Result<ZeroApi, GraphQlError> {
    Ok(ZeroApi::new(GraphQlClient::new(endpoint, STUB_TIMEOUT)?))
}

/// Deterministic fixture data.
fn fixed_data() -> UniqueTestData {
    UniqueTestData::from_parts(1_700_000_000_000, 7, 42)
}

#[tokio::test(flavor = "multi_thread")]
async fn typed_reads_decode_records_and_pages() -> TestResult {
    let mut reporter = TestReporter::new("typed_reads_decode_records_and_pages")?;
    let stub = spawn_graphql_stub(vec![
        StubFixture::operation("GetUser").with_variables(json!({ "id": "1" })).data(json!({
            "user": { "id": "1", "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz" }
        })),
        StubFixture::operation("GetUser").data(json!({ "user": { "id": null, "name": null } })),
        StubFixture::operation("GetAlbum").data(json!({ "album": null })),
        StubFixture::operation("GetUsers")
            .with_variables(json!({ "options": { "paginate": { "page": 999, "limit": 10 } } }))
            .data(json!({ "users": { "data": [], "meta": { "totalCount": 10 } } })),
        StubFixture::operation("GetUsers").data(json!({
            "users": { "data": [{ "id": "1" }, { "id": "2" }], "meta": { "totalCount": 10 } }
        })),
    ])?;
    let api = api_for(stub.endpoint())?;

    let user = require_some(api.user("1").await?, "seeded user")?;
    require_eq(&user.username.as_deref(), &Some("Bret"), "seeded username")?;
    require_placeholder_user(api.user("9999").await?.as_ref(), "unknown user")?;
    require(api.album("999999").await?.is_none(), "unknown album is null")?;

    let page = api.users(Some(PageQueryOptions::page(1, 5))).await?;
    require_page_within(&page, 5, "users page")?;
    require_positive_total(&page, "users page")?;
    require_empty_page(&api.users(Some(PageQueryOptions::page(999, 10))).await?, "users page 999")?;

    reporter.artifacts().write_json("graphql_transcript.json", &api.client().transcript())?;
    reporter.finish("pass", Vec::new(), vec!["graphql_transcript.json".to_string()])?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn typed_mutations_send_inputs_and_decode_payloads() -> TestResult {
    let mut reporter = TestReporter::new("typed_mutations_send_inputs_and_decode_payloads")?;
    let data = fixed_data();
    let input = data.full_user_input();
    let album_input = data.album_input("999999");
    let stub = spawn_graphql_stub(vec![
        StubFixture::operation("CreateUser").data(json!({ "createUser": {
            "id": "11",
            "name": input.name,
            "username": input.username,
            "email": input.email,
            "phone": input.phone,
            "website": input.website,
        } })),
        StubFixture::operation("UpdateUser").data(json!({ "updateUser": { "id": "1", "name": "Updated" } })),
        StubFixture::operation("DeleteUser").data(json!({ "deleteUser": true })),
        StubFixture::operation("CreateAlbum")
            .data(json!({ "createAlbum": { "id": "101", "title": album_input.title, "user": null } })),
        StubFixture::operation("DeleteAlbum").data(json!({ "deleteAlbum": "yes" })),
    ])?;
    let api = api_for(stub.endpoint())?;

    let created = require_some(api.create_user(&input).await?, "created user")?;
    require_user_echo(&created, &input)?;
    let update = UpdateUserInput {
        name: Some("Updated".to_string()),
        ..UpdateUserInput::default()
    };
    let updated = require_some(api.update_user("1", &update).await?, "updated user")?;
    require_eq(&updated.name.as_deref(), &Some("Updated"), "updated name")?;
    require(api.delete_user("1").await?, "delete returns true")?;

    let album = require_some(api.create_album(&album_input).await?, "created album")?;
    require_album_echo(&album, &album_input, OwnerEcho::WhenPresent)?;
    require_unowned(Some(&album), "stub album")?;

    let bad_delete = api.delete_album("1").await;
    require(matches!(bad_delete, Err(GraphQlError::Decode(_))), "non-boolean delete is a decode error")?;

    let requests = stub.requests();
    require_eq(&requests[0].body["variables"]["input"]["phone"], &json!("123-456-7890"), "phone sent")?;
    require_eq(&requests[1].body["variables"], &json!({ "id": "1", "input": { "name": "Updated" } }), "sparse update")?;
    require_eq(&requests[3].body["variables"]["input"]["userId"], &json!("999999"), "camelCase owner id")?;

    reporter.artifacts().write_json("graphql_transcript.json", &api.client().transcript())?;
    reporter.finish("pass", Vec::new(), vec!["graphql_transcript.json".to_string()])?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn provisioning_uses_created_record_when_persisted() -> TestResult {
    let mut reporter = TestReporter::new("provisioning_uses_created_record_when_persisted")?;
    let data = fixed_data();
    let stub = spawn_graphql_stub(vec![
        StubFixture::operation("CreateUser").data(json!({ "createUser": { "id": "11" } })),
        StubFixture::operation("GetUser").data(json!({ "user": { "id": "11", "name": "Test User 42" } })),
        StubFixture::operation("CreateAlbum").data(json!({ "createAlbum": { "id": "101" } })),
        StubFixture::operation("GetAlbum").data(json!({ "album": { "id": "101", "title": "x" } })),
    ])?;
    let api = api_for(stub.endpoint())?;

    let user = provision_user(&api, &data).await?;
    require_eq(&user.source, &TargetSource::Created, "user source")?;
    require_eq(user.id.as_str(), "11", "user id")?;
    require(user.note.is_none(), "no fallback note")?;

    let album = provision_album(&api, &data, &user.id).await?;
    require_eq(&album.source, &TargetSource::Created, "album source")?;
    require_eq(album.id.as_str(), "101", "album id")?;

    reporter.finish("pass", Vec::new(), Vec::new())?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn provisioning_falls_back_to_seeded_records() -> TestResult {
    let mut reporter = TestReporter::new("provisioning_falls_back_to_seeded_records")?;
    let data = fixed_data();
    let stub = spawn_graphql_stub(vec![
        StubFixture::operation("CreateUser").data(json!({ "createUser": { "id": "11" } })),
        StubFixture::operation("GetUser").data(json!({ "user": { "id": null, "name": null } })),
        StubFixture::operation("CreateAlbum").errors(200, &["Album title is invalid"]),
    ])?;
    let api = api_for(stub.endpoint())?;

    let user = provision_user(&api, &data).await?;
    require_eq(&user.source, &TargetSource::SeededFallback, "user source")?;
    require_eq(user.id.as_str(), SEEDED_USER_ID, "seeded user id")?;
    let note = require_some(user.note.as_deref(), "fallback note")?;
    require(note.contains("was not persisted"), format!("unexpected note: {note}"))?;

    let album = provision_album(&api, &data, &user.id).await?;
    require_eq(&album.source, &TargetSource::SeededFallback, "album source")?;
    require_eq(album.id.as_str(), SEEDED_ALBUM_ID, "seeded album id")?;
    let note = require_some(album.note.as_deref(), "fallback note")?;
    require(note.contains("Album title is invalid"), format!("unexpected note: {note}"))?;

    reporter.finish("pass", vec![user.note.unwrap_or_default(), album.note.unwrap_or_default()], Vec::new())?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn provisioning_treats_rejected_read_back_as_miss() -> TestResult {
    let mut reporter = TestReporter::new("provisioning_treats_rejected_read_back_as_miss")?;
    let data = fixed_data();
    let stub = spawn_graphql_stub(vec![
        StubFixture::operation("CreateUser").data(json!({ "createUser": { "id": "11" } })),
        StubFixture::operation("GetUser").errors(200, &["User not found"]),
        StubFixture::operation("CreateAlbum").data(json!({ "createAlbum": { "id": "101" } })),
        StubFixture::operation("GetAlbum").errors(400, &["Album not found"]),
    ])?;
    let api = api_for(stub.endpoint())?;

    let user = provision_user(&api, &data).await?;
    require_eq(&user.source, &TargetSource::SeededFallback, "user source")?;
    require_eq(user.id.as_str(), SEEDED_USER_ID, "seeded user id")?;
    let note = require_some(user.note.as_deref(), "user fallback note")?;
    require(note.contains("User not found"), format!("unexpected note: {note}"))?;

    let album = provision_album(&api, &data, SEEDED_USER_ID).await?;
    require_eq(&album.source, &TargetSource::SeededFallback, "album source")?;
    require_eq(album.id.as_str(), SEEDED_ALBUM_ID, "seeded album id")?;
    let note = require_some(album.note.as_deref(), "album fallback note")?;
    require(note.contains("could not be read back"), format!("unexpected note: {note}"))?;

    reporter.finish("pass", vec![user.note.unwrap_or_default(), album.note.unwrap_or_default()], Vec::new())?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn provisioning_propagates_non_graphql_failures() -> TestResult {
    let mut reporter = TestReporter::new("provisioning_propagates_non_graphql_failures")?;
    let stub = spawn_graphql_stub(vec![StubFixture::operation("CreateUser").text(503, "maintenance")])?;
    let api = api_for(stub.endpoint())?;

    let result = provision_user(&api, &fixed_data()).await;
    require(matches!(result, Err(GraphQlError::Http { status: 503, .. })), "http failure propagates")?;

    reporter.finish("pass", Vec::new(), Vec::new())?;
    Ok(())
}
