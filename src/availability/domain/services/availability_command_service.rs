use async_trait::async_trait;

use crate::availability::domain::model::{
    commands::check_availability_command::CheckAvailabilityCommand,
    enums::{
        availability_decision::AvailabilityDecision,
        availability_domain_error::AvailabilityDomainError,
    },
};

#[async_trait]
pub trait AvailabilityCommandService: Send + Sync {
    async fn handle_check(
        &self,
        command: CheckAvailabilityCommand,
    ) -> Result<AvailabilityDecision, AvailabilityDomainError>;
}
