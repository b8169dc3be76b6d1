use thiserror::Error;

#[derive(Debug, Error)]
pub enum AvailabilityDomainError {
    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
