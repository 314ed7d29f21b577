//! Error types for the `dailyco` crate.
//!
//! Follows the same pattern as the platform's other layers: a root `Error` struct
//! holding an error kind tree and an optional source for error chaining.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for the Daily.co client.
/// `error_kind` says which step of a call failed, `source` holds the underlying
/// error (transport, URL or JSON) when there is one.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors: failures before anything is sent, and failures
/// caused by the remote side or the transport.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Errors raised while building a request locally.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// The base URL could not be parsed or cannot carry a path.
    Url,
    /// The request body could not be encoded as JSON.
    Serialize,
    /// The HTTP transport could not be constructed.
    Transport,
}

/// Errors raised by the transport or found in the response.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    /// Connection or protocol failure while sending the request.
    Network,
    /// The response body could not be read in full.
    Read,
    /// The response body is not a JSON error envelope.
    Decode,
    /// The API reported an error in its response envelope.
    Api { error: String, info: String },
    /// The response carried no error but did not match the operation's shape.
    UnexpectedResponse,
}

impl Error {
    /// Returns `true` if the API itself rejected the request.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self.error_kind,
            ErrorKind::External(ExternalErrorKind::Api { .. })
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::External(ExternalErrorKind::Api { error, info }) => {
                write!(f, "{error}: {info}")
            }
            ErrorKind::Internal(kind) => match &self.source {
                Some(source) => write!(f, "Daily.co client error: {kind:?}: {source}"),
                None => write!(f, "Daily.co client error: {kind:?}"),
            },
            ErrorKind::External(kind) => match &self.source {
                Some(source) => write!(f, "Daily.co API error: {kind:?}: {source}"),
                None => write!(f, "Daily.co API error: {kind:?}"),
            },
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Internal(InternalErrorKind::Url),
        }
    }
}

/// Helper function to create internal errors.
pub fn internal_error(kind: InternalErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Internal(kind),
    }
}

/// Helper function to create external errors.
pub fn external_error(kind: ExternalErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::External(kind),
    }
}

/// Helper function to create the error for an API error envelope.
pub fn api_error(error: &str, info: &str) -> Error {
    Error {
        source: None,
        error_kind: ErrorKind::External(ExternalErrorKind::Api {
            error: error.to_string(),
            info: info.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_is_code_and_info() {
        let err = api_error("invalid-request-error", "name is too long");
        assert_eq!(err.to_string(), "invalid-request-error: name is too long");
        assert!(err.is_api_error());
    }

    #[test]
    fn test_api_error_display_with_empty_info() {
        let err = api_error("authentication-error", "");
        assert_eq!(err.to_string(), "authentication-error: ");
    }

    #[test]
    fn test_url_parse_error_maps_to_internal_url() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.error_kind, ErrorKind::Internal(InternalErrorKind::Url));
        assert!(!err.is_api_error());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_external_error_display_includes_source() {
        let err = external_error(
            ExternalErrorKind::Decode,
            "envelope field `error` is not a string: 404",
        );
        assert_eq!(
            err.to_string(),
            "Daily.co API error: Decode: envelope field `error` is not a string: 404"
        );
        assert!(!err.is_api_error());
    }

    #[test]
    fn test_internal_error_display_includes_source() {
        let err = internal_error(InternalErrorKind::Url, "cannot be a base");
        assert_eq!(
            err.to_string(),
            "Daily.co client error: Url: cannot be a base"
        );
    }
}
