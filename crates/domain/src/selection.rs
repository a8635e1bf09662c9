use crate::{MuscleGroup, RecoveryState};

const MAX_QUOTA: usize = 2;

const LEG_FULL_QUOTA_THRESHOLD: f32 = 80.0;
const LEG_PARTIAL_QUOTA_THRESHOLD: f32 = 30.0;
const UPPER_BODY_QUOTA_THRESHOLD: f32 = 65.0;

/// Number of exercises to request for `group`.
///
/// Core is always trained. In override mode every group gets the full quota.
#[must_use]
pub fn quota(group: MuscleGroup, recovery_state: &RecoveryState, all_recovered: bool) -> usize {
    if all_recovered {
        return MAX_QUOTA;
    }

    let recovery = recovery_state.percentage(group);

    match group {
        MuscleGroup::Quads
        | MuscleGroup::Hamstrings
        | MuscleGroup::Glutes
        | MuscleGroup::Calves => {
            if recovery >= LEG_FULL_QUOTA_THRESHOLD {
                2
            } else if recovery >= LEG_PARTIAL_QUOTA_THRESHOLD {
                1
            } else {
                0
            }
        }
        MuscleGroup::Chest | MuscleGroup::Back | MuscleGroup::Shoulders | MuscleGroup::Arms => {
            if recovery >= UPPER_BODY_QUOTA_THRESHOLD {
                2
            } else {
                0
            }
        }
        MuscleGroup::Core => MAX_QUOTA,
    }
}
