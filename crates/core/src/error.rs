//! Error types for the StudyPlan domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for plan generation.
#[derive(Debug, Error)]
pub enum Error {
    // --- Request validation ---
    #[error("Invalid study request: {0}")]
    Validation(#[from] ValidationError),

    // --- Completion provider ---
    #[error("Completion request failed: {0}")]
    Upstream(#[from] ProviderError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider (status: 429)")]
    RateLimited,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Provider returned an empty completion")]
    EmptyResponse,
}

/// A request that violates the limits of the interactive form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("select at least one subject")]
    NoSubjects,

    #[error("class level must not be blank")]
    BlankClassLevel,

    #[error("days until exam must be between {min} and {max} (got {value})")]
    ExamDaysOutOfRange { value: u32, min: u32, max: u32 },

    #[error("daily study hours must be between {min} and {max} (got {value})")]
    DailyHoursOutOfRange { value: f64, min: f64, max: f64 },
}
