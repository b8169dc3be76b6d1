use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingDomainError {
    #[error("not all fields filled")]
    MissingFields,

    #[error("booking not found")]
    BookingNotFound,

    /// The Authority's denial reason, propagated verbatim.
    #[error("{0}")]
    SlotUnavailable(String),

    #[error("availability service returned an error")]
    AuthorityUpstreamError { details: String },

    #[error("availability service is not responding (timeout)")]
    AuthorityTimeout,

    #[error("cannot reach availability service; make sure it is running on the configured address")]
    AuthorityUnreachable,

    #[error("failed to verify availability")]
    AvailabilityVerificationFailed,

    #[error("invalid date format, use YYYY-MM-DD")]
    InvalidDateFormat,

    #[error("invalid time format, use HH:MM")]
    InvalidTimeFormat,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
