// system-tests/src/api.rs
// ============================================================================
// Module: GraphQLZero API
// Description: Typed wrappers for the ten consumed GraphQLZero operations.
// Purpose: Pair each operation with its document, variables, and decoding.
// Dependencies: graphqlzero-client, serde, serde_json
// ============================================================================

//! ## Overview
//! [`ZeroApi`] issues one request per call and decodes the named root field.
//! Mutation inputs are generic over [`Serialize`] so scenarios can send
//! deliberately incomplete or malformed inputs as raw JSON alongside the
//! typed input structs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graphqlzero_client::GraphQlClient;
use graphqlzero_client::GraphQlError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;

use crate::documents;
use crate::models::Album;
use crate::models::Page;
use crate::models::PageQueryOptions;
use crate::models::User;

// ============================================================================
// SECTION: API
// ============================================================================

/// Typed access to the users/albums API.
#[derive(Clone)]
pub struct ZeroApi {
    /// Underlying request client.
    client: GraphQlClient,
}

impl ZeroApi {
    /// Wraps a configured client.
    #[must_use]
    pub const fn new(client: GraphQlClient) -> Self {
        Self {
            client,
        }
    }

    /// Returns the underlying client for ad hoc documents.
    #[must_use]
    pub const fn client(&self) -> &GraphQlClient {
        &self.client
    }

    /// Fetches `user(id)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure or an undecodable payload.
    pub async fn user(&self, id: &str) -> Result<Option<User>, GraphQlError> {
        self.query_field(documents::GET_USER, vars([("id", Value::from(id))]), "user").await
    }

    /// Fetches `users(options)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure or an undecodable payload.
    pub async fn users(&self, options: Option<PageQueryOptions>) -> Result<Page<User>, GraphQlError> {
        self.query_field(documents::GET_USERS, options_vars(options)?, "users").await
    }

    /// Fetches `album(id)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure or an undecodable payload.
    pub async fn album(&self, id: &str) -> Result<Option<Album>, GraphQlError> {
        self.query_field(documents::GET_ALBUM, vars([("id", Value::from(id))]), "album").await
    }

    /// Fetches `albums(options)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure or an undecodable payload.
    pub async fn albums(
        &self,
        options: Option<PageQueryOptions>,
    ) -> Result<Page<Album>, GraphQlError> {
        self.query_field(documents::GET_ALBUMS, options_vars(options)?, "albums").await
    }

    /// Runs `createUser(input)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure or an undecodable payload.
    pub async fn create_user<I: Serialize + ?Sized>(
        &self,
        input: &I,
    ) -> Result<Option<User>, GraphQlError> {
        let variables = vars([("input", encode(input)?)]);
        self.query_field(documents::CREATE_USER, variables, "createUser").await
    }

    /// Runs `updateUser(id, input)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure or an undecodable payload.
    pub async fn update_user<I: Serialize + ?Sized>(
        &self,
        id: &str,
        input: &I,
    ) -> Result<Option<User>, GraphQlError> {
        let variables = vars([("id", Value::from(id)), ("input", encode(input)?)]);
        self.query_field(documents::UPDATE_USER, variables, "updateUser").await
    }

    /// Runs `deleteUser(id)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure or a non-boolean payload.
    pub async fn delete_user(&self, id: &str) -> Result<bool, GraphQlError> {
        self.query_field(documents::DELETE_USER, vars([("id", Value::from(id))]), "deleteUser").await
    }

    /// Runs `createAlbum(input)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure or an undecodable payload.
    pub async fn create_album<I: Serialize + ?Sized>(
        &self,
        input: &I,
    ) -> Result<Option<Album>, GraphQlError> {
        let variables = vars([("input", encode(input)?)]);
        self.query_field(documents::CREATE_ALBUM, variables, "createAlbum").await
    }

    /// Runs `updateAlbum(id, input)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure or an undecodable payload.
    pub async fn update_album<I: Serialize + ?Sized>(
        &self,
        id: &str,
        input: &I,
    ) -> Result<Option<Album>, GraphQlError> {
        let variables = vars([("id", Value::from(id)), ("input", encode(input)?)]);
        self.query_field(documents::UPDATE_ALBUM, variables, "updateAlbum").await
    }

    /// Runs `deleteAlbum(id)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure or a non-boolean payload.
    pub async fn delete_album(&self, id: &str) -> Result<bool, GraphQlError> {
        self.query_field(documents::DELETE_ALBUM, vars([("id", Value::from(id))]), "deleteAlbum")
            .await
    }

    /// Sends `document` and decodes the root `field` of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError`] on request failure, or
    /// [`GraphQlError::Decode`] when the field is missing or mis-shaped.
    pub async fn query_field<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Option<Value>,
        field: &str,
    ) -> Result<T, GraphQlError> {
        let data = self.client.request(document, variables).await?;
        decode_field(data, field)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Decodes `data[field]` into `T`.
///
/// # Errors
///
/// Returns [`GraphQlError::Decode`] when `data` is not an object, the field is
/// absent, or its value does not match `T`.
pub fn decode_field<T: DeserializeOwned>(data: Value, field: &str) -> Result<T, GraphQlError> {
    let Value::Object(mut object) = data else {
        return Err(GraphQlError::Decode("data is not an object".to_string()));
    };
    let value = object
        .remove(field)
        .ok_or_else(|| GraphQlError::Decode(format!("data is missing field {field}")))?;
    serde_json::from_value(value)
        .map_err(|err| GraphQlError::Decode(format!("field {field} did not decode: {err}")))
}

/// Builds a variables object from name/value pairs.
fn vars<const N: usize>(pairs: [(&str, Value); N]) -> Option<Value> {
    let object: Map<String, Value> =
        pairs.into_iter().map(|(name, value)| (name.to_string(), value)).collect();
    Some(Value::Object(object))
}

/// Builds variables for an optional `$options` argument.
fn options_vars(options: Option<PageQueryOptions>) -> Result<Option<Value>, GraphQlError> {
    options.map_or(Ok(None), |options| Ok(vars([("options", encode(&options)?)])))
}

/// Serializes an input value.
fn encode<I: Serialize + ?Sized>(input: &I) -> Result<Value, GraphQlError> {
    serde_json::to_value(input).map_err(|err| GraphQlError::Encode(err.to_string()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
