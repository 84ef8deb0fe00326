// crates/graphqlzero-client/src/client.rs
// ============================================================================
// Module: GraphQL HTTP Client
// Description: POST GraphQL documents and decode the response envelope.
// Purpose: Provide `request(document, variables) -> data` with typed errors.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! [`GraphQlClient`] sends one HTTP POST per call. A response carrying a
//! non-empty `errors` array is an error regardless of HTTP status; otherwise
//! a non-success status is an [`GraphQlError::Http`] failure. Requests are
//! never retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::envelope::GraphQlRequest;
use crate::envelope::GraphQlResponse;
use crate::error::GraphQlError;
use crate::events::EventSink;
use crate::events::GraphQlRequestEvent;
use crate::events::NoopEventSink;
use crate::events::RequestEventParams;
use crate::events::RequestOutcome;
use crate::transcript::Transcript;
use crate::transcript::TranscriptEntry;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Label used for documents without an operation name.
pub const ANONYMOUS_OPERATION: &str = "anonymous";
/// Maximum response body characters kept in HTTP error messages.
const MAX_ERROR_BODY_CHARS: usize = 512;

// ============================================================================
// SECTION: Client
// ============================================================================

/// GraphQL client bound to one endpoint.
#[derive(Clone)]
pub struct GraphQlClient {
    /// Endpoint URL requests are POSTed to.
    endpoint: String,
    /// Underlying HTTP client.
    client: Client,
    /// Extra headers attached to every request.
    headers: Vec<(String, String)>,
    /// Optional bearer token for the Authorization header.
    bearer_token: Option<String>,
    /// Exchange transcript shared across clones.
    transcript: Transcript,
    /// Destination for request events.
    sink: Arc<dyn EventSink>,
}

impl GraphQlClient {
    /// Creates a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError::Build`] when the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GraphQlError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| GraphQlError::Build(err.to_string()))?;
        Ok(Self::with_client(endpoint, client))
    }

    /// Creates a client from an existing reqwest client.
    #[must_use]
    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
            headers: Vec::new(),
            bearer_token: None,
            transcript: Transcript::new(),
            sink: Arc::new(NoopEventSink),
        }
    }

    /// Attaches an extra header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attaches a bearer token for Authorization headers.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Routes request events to `sink`.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Records exchanges into an existing transcript.
    #[must_use]
    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = transcript;
        self
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.snapshot()
    }

    /// Sends a document and returns the `data` object.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQlError::Response`] when the server reports GraphQL
    /// errors, and the other variants for transport, HTTP, or decode failures.
    pub async fn request(
        &self,
        document: &str,
        variables: Option<Value>,
    ) -> Result<Value, GraphQlError> {
        let payload = GraphQlRequest::new(document, variables);
        let operation =
            payload.operation_name.clone().unwrap_or_else(|| ANONYMOUS_OPERATION.to_string());
        let request_value = serde_json::to_value(&payload)
            .map_err(|err| GraphQlError::Encode(format!("request serialization failed: {err}")))?;

        let started = Instant::now();
        let exchange = self.exchange(&request_value).await;
        let elapsed = started.elapsed();

        let error_message = exchange.result.as_ref().err().map(GraphQlError::message);
        self.transcript.record(
            &operation,
            request_value,
            exchange.response,
            exchange.status,
            error_message.clone(),
        );
        self.sink.record(&GraphQlRequestEvent::new(RequestEventParams {
            operation,
            endpoint: self.endpoint.clone(),
            outcome: classify(&exchange.result),
            error: error_message,
            duration: elapsed,
        }));
        exchange.result
    }

    /// Sends a document and decodes the `data` object into `T`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`GraphQlClient::request`], plus
    /// [`GraphQlError::Decode`] when `data` does not match `T`.
    pub async fn request_typed<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Option<Value>,
    ) -> Result<T, GraphQlError> {
        let data = self.request(document, variables).await?;
        serde_json::from_value(data)
            .map_err(|err| GraphQlError::Decode(format!("data did not match expected shape: {err}")))
    }

    /// Performs the HTTP exchange and interprets the envelope.
    async fn exchange(&self, body: &Value) -> Exchange {
        let mut http_request = self.client.post(&self.endpoint).json(body);
        for (name, value) in &self.headers {
            http_request = http_request.header(name.as_str(), value.as_str());
        }
        if let Some(token) = &self.bearer_token {
            http_request = http_request.bearer_auth(token);
        }

        let response = match http_request.send().await {
            Ok(response) => response,
            Err(err) => return Exchange::failed(None, GraphQlError::Transport(err.to_string())),
        };
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                return Exchange::failed(
                    Some(status.as_u16()),
                    GraphQlError::Transport(format!("failed to read response body: {err}")),
                );
            }
        };

        let raw = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| Value::String(text.clone()));
        let envelope = serde_json::from_value::<GraphQlResponse>(raw.clone());
        let result = match envelope {
            Ok(envelope) => interpret(status.as_u16(), status.is_success(), envelope, &text),
            Err(_) if !status.is_success() => Err(GraphQlError::Http {
                status: status.as_u16(),
                body: truncate(&text),
            }),
            Err(err) => Err(GraphQlError::Decode(format!("response is not a graphql envelope: {err}"))),
        };
        Exchange {
            status: Some(status.as_u16()),
            response: raw,
            result,
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Outcome of one HTTP exchange.
struct Exchange {
    /// HTTP status when a response arrived.
    status: Option<u16>,
    /// Raw response body as JSON (string when not JSON).
    response: Value,
    /// Interpreted result.
    result: Result<Value, GraphQlError>,
}

impl Exchange {
    /// Builds an exchange that produced no readable body.
    const fn failed(status: Option<u16>, error: GraphQlError) -> Self {
        Self {
            status,
            response: Value::Null,
            result: Err(error),
        }
    }
}

/// Maps a decoded envelope to data or an error.
fn interpret(
    status: u16,
    success: bool,
    envelope: GraphQlResponse,
    text: &str,
) -> Result<Value, GraphQlError> {
    if let Some(error) = GraphQlError::from_entries(envelope.errors.unwrap_or_default()) {
        return Err(error);
    }
    if !success {
        return Err(GraphQlError::Http {
            status,
            body: truncate(text),
        });
    }
    envelope.data.ok_or(GraphQlError::MissingData)
}

/// Classifies a result for event logging.
const fn classify(result: &Result<Value, GraphQlError>) -> RequestOutcome {
    match result {
        Ok(_) => RequestOutcome::Ok,
        Err(GraphQlError::Response {
            ..
        }) => RequestOutcome::GraphqlError,
        Err(GraphQlError::Http {
            ..
        }) => RequestOutcome::HttpError,
        Err(GraphQlError::Transport(_) | GraphQlError::Build(_)) => RequestOutcome::TransportError,
        Err(GraphQlError::Encode(_) | GraphQlError::Decode(_) | GraphQlError::MissingData) => {
            RequestOutcome::DecodeError
        }
    }
}

/// Truncates a body for inclusion in error messages.
fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_BODY_CHARS {
        return text.to_string();
    }
    let mut out: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
    out.push_str("...");
    out
}

// ============================================================================
// SECTION: Tests
// ============================================================================
