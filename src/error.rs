use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Error related to a non-successful HTTP call
    Status,
    /// Error related to invalid arguments or unparsable domain values
    Validation,
    /// Error related to a value that has no URL parameter representation
    UnsupportedParameter,
    /// Error related to navigating a response document
    Navigation,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn invalid_combination<S: Into<String>>(message: S) -> Self {
        InvalidArgumentCombination {
            reason: message.into(),
        }
        .into()
    }

    pub fn status<S: Into<String>>(status_code: StatusCode, url: String, message: S) -> Self {
        Status {
            status_code,
            url,
            message: message.into(),
        }
        .into()
    }

    #[must_use]
    pub fn unsupported_parameter(json_type: &'static str) -> Self {
        UnsupportedParameterType { json_type }.into()
    }

    pub fn key_not_found<S: Into<String>>(key: S) -> Self {
        KeyNotFound { key: key.into() }.into()
    }

    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        IndexOutOfRange { index, len }.into()
    }

    #[must_use]
    pub fn unsupported_operation(operation: &'static str, actual: &'static str) -> Self {
        UnsupportedOperation { operation, actual }.into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub url: String,
    pub message: String,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making GET call to {} with {}",
            self.status_code, self.url, self.message
        )
    }
}

impl StdError for Status {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

/// Error raised when mutually exclusive optional filters are supplied together.
///
/// Raised before any request is issued.
#[non_exhaustive]
#[derive(Debug)]
pub struct InvalidArgumentCombination {
    pub reason: String,
}

impl fmt::Display for InvalidArgumentCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid argument combination: {}", self.reason)
    }
}

impl StdError for InvalidArgumentCombination {}

/// Error raised when a dynamic JSON value has no URL parameter representation.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedParameterType {
    /// The JSON type of the offending value.
    pub json_type: &'static str,
}

impl fmt::Display for UnsupportedParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot convert {} to a URL parameter", self.json_type)
    }
}

impl StdError for UnsupportedParameterType {}

/// Error raised by non-defaulting key access into a response document.
#[non_exhaustive]
#[derive(Debug)]
pub struct KeyNotFound {
    pub key: String,
}

impl fmt::Display for KeyNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key not found: {:?}", self.key)
    }
}

impl StdError for KeyNotFound {}

/// Error raised by non-defaulting index access into a response document.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for array of length {}",
            self.index, self.len
        )
    }
}

impl StdError for IndexOutOfRange {}

/// Error raised when an object-only or array-only operation is invoked on the
/// wrong kind of document node.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedOperation {
    pub operation: &'static str,
    pub actual: &'static str,
}

impl fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot use {} on a {} node", self.operation, self.actual)
    }
}

impl StdError for UnsupportedOperation {}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::Status, err)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<InvalidArgumentCombination> for Error {
    fn from(err: InvalidArgumentCombination) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<UnsupportedParameterType> for Error {
    fn from(err: UnsupportedParameterType) -> Self {
        Error::with_source(Kind::UnsupportedParameter, err)
    }
}

impl From<KeyNotFound> for Error {
    fn from(err: KeyNotFound) -> Self {
        Error::with_source(Kind::Navigation, err)
    }
}

impl From<IndexOutOfRange> for Error {
    fn from(err: IndexOutOfRange) -> Self {
        Error::with_source(Kind::Navigation, err)
    }
}

impl From<UnsupportedOperation> for Error {
    fn from(err: UnsupportedOperation) -> Self {
        Error::with_source(Kind::Navigation, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_url_and_code() {
        let error = Error::status(
            StatusCode::NOT_FOUND,
            "https://statsapi.web.nhl.com/api/v1/teams/9999".to_owned(),
            "Not Found",
        );

        assert_eq!(error.kind(), Kind::Status);
        let status = error.downcast_ref::<Status>().expect("status source");
        assert_eq!(status.status_code, StatusCode::NOT_FOUND);
        assert!(error.to_string().contains("/api/v1/teams/9999"));
    }

    #[test]
    fn invalid_combination_has_validation_kind() {
        let error = Error::invalid_combination("pick either season or date");

        assert_eq!(error.kind(), Kind::Validation);
        assert!(error.to_string().contains("pick either season or date"));
        assert!(error.downcast_ref::<InvalidArgumentCombination>().is_some());
    }

    #[test]
    fn index_out_of_range_reports_length() {
        let error = Error::index_out_of_range(5, 2);

        assert_eq!(error.kind(), Kind::Navigation);
        assert_eq!(
            error.to_string(),
            "Navigation: index 5 out of range for array of length 2"
        );
    }
}
