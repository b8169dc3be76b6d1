use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AvailabilityHealthResource {
    pub status: String,
    pub service: String,
}
