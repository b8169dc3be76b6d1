use async_trait::async_trait;

use crate::availability::domain::model::{
    entities::availability_check_record::AvailabilityCheckRecord,
    enums::availability_domain_error::AvailabilityDomainError,
};

#[async_trait]
pub trait AvailabilityCheckLogRepository: Send + Sync {
    async fn append(
        &self,
        check: &AvailabilityCheckRecord,
    ) -> Result<(), AvailabilityDomainError>;

    /// Most recent rows first. Audit rows are never mutated or deleted.
    async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<AvailabilityCheckRecord>, AvailabilityDomainError>;
}
