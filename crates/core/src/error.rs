//! Domain error model.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Reasons an item fails validation.
///
/// These are surfaced to the caller for user-facing display, so the messages
/// read as form feedback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title can't be blank")]
    MissingTitle,

    #[error("description can't be blank")]
    MissingDescription,

    #[error("price can't be blank")]
    MissingPrice,

    /// Price was present but zero or negative.
    #[error("price must be greater than 0 (got {0})")]
    InvalidPrice(i64),

    /// Another item already uses this exact title.
    #[error("title has already been taken: {0}")]
    DuplicateTitle(String),
}

/// Reasons a requested availability range cannot be parsed.
///
/// Parsing is all-or-nothing: any of these means no dates were produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Input is not a real `day/month/year` calendar date.
    #[error("invalid date format (expected dd/mm/yyyy): {input:?}")]
    InvalidDateFormat { input: String },

    #[error("invalid range: end date {end} precedes start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl DateRangeError {
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            input: input.into(),
        }
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Infrastructure
/// concerns (locking, storage) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("date range rejected: {0}")]
    DateRange(#[from] DateRangeError),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
