use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI jobs to distinguish between
/// argument mistakes and failures while talking to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report rendered
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Broad category of a failed backend call.
///
/// The HTTP client surfaces failures as free-form messages, so the category
/// is recovered by matching on well-known fragments of those messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    Timeout,
    Credentials,
    RateLimit,
    /// 4xx refusals other than auth and throttling, e.g. 400, 404 or 422
    Rejected,
    Unknown,
}

impl ApiErrorKind {
    /// Classifies an error message into a category.
    ///
    /// Matching is case-insensitive. Timeouts are checked before network
    /// failures because "connection timed out" mentions both.
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        let contains_any = |needles: &[&str]| needles.iter().any(|n| message.contains(n));

        if contains_any(&["timeout", "timed out", "deadline"]) {
            ApiErrorKind::Timeout
        } else if contains_any(&[
            "http 401",
            "http 403",
            "status 401",
            "status 403",
            "unauthorized",
            "forbidden",
            "credential",
            "invalid token",
            "access denied",
        ]) {
            ApiErrorKind::Credentials
        } else if contains_any(&["http 429", "status 429", "rate limit", "too many requests", "throttl"]) {
            ApiErrorKind::RateLimit
        } else if contains_any(&[
            "network",
            "connection",
            "connect",
            "dns",
            "unreachable",
            "refused",
        ]) {
            ApiErrorKind::Network
        } else {
            ApiErrorKind::Unknown
        }
    }

    /// Maps an HTTP status code to a category, when the code is decisive.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            401 | 403 => Some(ApiErrorKind::Credentials),
            429 => Some(ApiErrorKind::RateLimit),
            408 | 504 => Some(ApiErrorKind::Timeout),
            502 | 503 => Some(ApiErrorKind::Network),
            400..=499 => Some(ApiErrorKind::Rejected),
            _ => None,
        }
    }

    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(self) -> bool {
        !matches!(self, ApiErrorKind::Credentials | ApiErrorKind::Rejected)
    }

    /// User-facing text for banners and hints.
    pub fn user_message(self) -> &'static str {
        match self {
            ApiErrorKind::Network => {
                "Unable to reach the DevControl API. Check your network connection."
            }
            ApiErrorKind::Timeout => "The DevControl API took too long to respond. Try again shortly.",
            ApiErrorKind::Credentials => {
                "Your API credentials were rejected. Check DEVCONTROL_API_TOKEN."
            }
            ApiErrorKind::RateLimit => "Too many requests were sent. Wait a moment and try again.",
            ApiErrorKind::Rejected => {
                "The DevControl API rejected the request. Check the values you supplied."
            }
            ApiErrorKind::Unknown => "An unexpected error occurred while contacting the DevControl API.",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiErrorKind::Network => "Network",
            ApiErrorKind::Timeout => "Timeout",
            ApiErrorKind::Credentials => "Credentials",
            ApiErrorKind::RateLimit => "Rate limit",
            ApiErrorKind::Rejected => "Rejected",
            ApiErrorKind::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// Application-specific errors for the analytics client.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping user-friendly messages next to each variant.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("{kind} error calling {endpoint}\nDetails: {details}\n\n💡 Hint: {}", .kind.user_message())]
    Api {
        kind: ApiErrorKind,
        endpoint: String,
        details: String,
    },

    #[error("Service dependencies are unavailable: {details}\n\n💡 Hint: No cached dependency list exists yet. Retry once the API is reachable.")]
    DependenciesUnavailable { details: String },

    #[error("Failed to read snapshot file: {path}\nDetails: {details}\n\n💡 Hint: Demo mode needs a JSON snapshot with resources, stats and dependencies")]
    SnapshotReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl AnalyticsError {
    /// Returns the API error category, if this is an API failure.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            AnalyticsError::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Extracts the API error category from an arbitrary error chain.
///
/// Errors that did not originate as `AnalyticsError::Api` are classified
/// from their rendered message.
pub fn api_error_kind(err: &anyhow::Error) -> ApiErrorKind {
    err.downcast_ref::<AnalyticsError>()
        .and_then(AnalyticsError::api_kind)
        .unwrap_or_else(|| ApiErrorKind::classify(&format!("{:#}", err)))
}
