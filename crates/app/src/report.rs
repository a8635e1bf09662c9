use liftplan_domain::{MuscleRecovery, RecoveryState};

/// Recovery of every muscle group plus the aggregated leg recovery.
#[derive(Debug, serde::Serialize)]
pub struct RecoveryReport<'a> {
    #[serde(flatten)]
    pub groups: &'a RecoveryState,
    pub legs: MuscleRecovery,
}

impl<'a> RecoveryReport<'a> {
    #[must_use]
    pub fn new(groups: &'a RecoveryState) -> Self {
        Self {
            groups,
            legs: groups.legs(),
        }
    }
}
