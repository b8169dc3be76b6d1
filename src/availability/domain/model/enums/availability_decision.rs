/// Outcome of one availability check. `Rejected` means the request itself was
/// malformed (client error); `Denied` means a well-formed request for a slot
/// that is not free, which is a normal negative outcome, not an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AvailabilityDecision {
    Granted { message: String },
    Denied { reason: String },
    Rejected { reason: String },
}

impl AvailabilityDecision {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }
}
