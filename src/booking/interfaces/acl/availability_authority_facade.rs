use async_trait::async_trait;

/// The normalized query the Gateway sends upstream. Values are forwarded
/// exactly as the client sent them; the Authority owns format validation.
#[derive(Clone, Debug)]
pub struct AvailabilityQuery {
    pub room: String,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    pub booking_type: String,
}

#[derive(Clone, Debug)]
pub struct AuthorityDecision {
    pub available: bool,
    pub reason: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthorityFacadeError {
    #[error("authority responded with status {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("authority request timed out")]
    Timeout,

    #[error("cannot connect to authority: {0}")]
    Connection(String),

    #[error("invalid authority response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait AvailabilityAuthorityFacade: Send + Sync {
    async fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<AuthorityDecision, AuthorityFacadeError>;

    async fn probe_health(&self) -> bool;
}
