//! Daily.co API client and the request dispatcher shared by every operation.
//!
//! The dispatcher resolves a path fragment against the API root, attaches the
//! bearer token, sends one request and checks the body for the API's error
//! envelope before handing the raw bytes back to the calling operation.

use crate::error::{
    api_error, external_error, internal_error, Error, ErrorKind, ExternalErrorKind,
    InternalErrorKind,
};
use log::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

/// Root of the Daily.co REST API.
pub const DAILYCO_API_ROOT: &str = "https://api.daily.co/v1/";

/// Daily.co API client.
///
/// Holds the API token and a reusable HTTP transport. A client is immutable
/// once built and can be shared between tasks.
#[derive(Debug)]
pub struct Client {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

impl Client {
    /// Create a client for the public Daily.co API.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(token, DAILYCO_API_ROOT)
    }

    /// Create a client that resolves requests against `base_url` instead of the
    /// public API root.
    ///
    /// The base URL is only parsed when a request is made, so a malformed one
    /// is reported by the first call.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::Internal(InternalErrorKind::Transport),
            })?;

        Ok(Self {
            client,
            token: SecretString::new(token.into()),
            base_url: base_url.into(),
        })
    }

    /// The root that request fragments are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and return the raw response body.
    ///
    /// `body` is encoded as JSON when present; otherwise the request body is
    /// empty. The response must decode as the error envelope, and an envelope
    /// carrying an error code fails the call with `"<error>: <info>"`.
    pub(crate) async fn call<B>(
        &self,
        fragment: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<Vec<u8>, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = resolve_url(&self.base_url, fragment)?;

        let request_json = match body {
            Some(body) => serde_json::to_vec(body).map_err(|e| Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::Internal(InternalErrorKind::Serialize),
            })?,
            None => Vec::new(),
        };

        debug!("Calling Daily.co API: {} {}", method, url);

        let response = self
            .client
            .request(method, url)
            .bearer_auth(self.token.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .body(request_json)
            .send()
            .await
            .map_err(|e| Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::External(ExternalErrorKind::Network),
            })?;

        let status = response.status();
        let raw_body = response.bytes().await.map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::External(ExternalErrorKind::Read),
        })?;

        trace!(
            "Daily.co API responded {} with {} bytes",
            status,
            raw_body.len()
        );

        // The envelope must be a JSON object; arrays and scalars are rejected
        // here so the typed decode never sees them.
        let envelope: Map<String, Value> =
            serde_json::from_slice(&raw_body).map_err(|e| Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::External(ExternalErrorKind::Decode),
            })?;

        let error = envelope_field(&envelope, "error")?;
        let info = envelope_field(&envelope, "info")?;
        if error.is_empty() {
            return Ok(raw_body.to_vec());
        }

        debug!("Daily.co API returned error {}: {}", error, info);
        Err(api_error(error, info))
    }
}

/// Read a string field of the error envelope. Missing or `null` reads as empty;
/// any other non-string value is a decode error.
fn envelope_field<'a>(envelope: &'a Map<String, Value>, field: &str) -> Result<&'a str, Error> {
    match envelope.get(field) {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(external_error(
            ExternalErrorKind::Decode,
            &format!("envelope field `{field}` is not a string: {other}"),
        )),
    }
}

/// Decode a response body that passed the envelope check into an operation's
/// response type.
pub(crate) fn decode<T: DeserializeOwned>(raw_body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(raw_body).map_err(|e| Error {
        source: Some(Box::new(e)),
        error_kind: ErrorKind::External(ExternalErrorKind::UnexpectedResponse),
    })
}

/// Join `fragment` onto the path of `base_url`.
///
/// Empty segments are dropped from both, so duplicate and trailing slashes
/// collapse. The fragment is always treated as a path, never as a URL.
pub(crate) fn resolve_url(base_url: &str, fragment: &str) -> Result<Url, Error> {
    let mut url = Url::parse(base_url)?;

    let base_segments: Vec<String> = url
        .path_segments()
        .ok_or_else(|| internal_error(InternalErrorKind::Url, "base URL cannot carry a path"))?
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect();

    url.path_segments_mut()
        .map_err(|_| internal_error(InternalErrorKind::Url, "base URL cannot carry a path"))?
        .clear()
        .extend(
            base_segments
                .iter()
                .map(String::as_str)
                .chain(fragment.split('/'))
                .filter(|segment| !segment.is_empty()),
        );

    Ok(url)
}
