use serde::{Deserialize, Serialize};

/// Unified error type for catalog requests.
///
/// Transport failures, non-success HTTP statuses and malformed JSON are kept
/// apart here so they can be logged precisely. Callers that only need the
/// "fetch failed" outcome use [`RecipeCatalog::fetch_query`](crate::RecipeCatalog::fetch_query),
/// which collapses every variant to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum FetchError {
    /// The configured base URL is not an absolute URL.
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Parser message.
        detail: String,
    },

    /// The underlying HTTP client could not be constructed.
    ClientBuild {
        /// Error details.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The transport gave up waiting (connect timeout).
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-success status.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The response body was not valid JSON.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },
}

impl FetchError {
    /// 是否为预期行为（服务端状态码等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::HttpStatus { .. } | Self::Timeout { .. })
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl { url, detail } => {
                write!(f, "[mealdb] Invalid base URL '{url}': {detail}")
            }
            Self::ClientBuild { detail } => {
                write!(f, "[mealdb] Failed to build HTTP client: {detail}")
            }
            Self::NetworkError { detail } => write!(f, "[mealdb] Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "[mealdb] Request timeout: {detail}"),
            Self::HttpStatus { status, body } => {
                if body.is_empty() {
                    write!(f, "[mealdb] HTTP error! status: {status}")
                } else {
                    write!(f, "[mealdb] HTTP error! status: {status}: {body}")
                }
            }
            Self::ParseError { detail } => write!(f, "[mealdb] Parse error: {detail}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, FetchError>;
