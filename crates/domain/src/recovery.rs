use chrono::{DateTime, Duration, Utc};

use crate::{MuscleGroup, ReadError, UpdateError, UserID, WorkoutPlan};

#[allow(async_fn_in_trait)]
pub trait RecoveryRepository {
    async fn read_recovery(&self, user_id: UserID) -> Result<Option<RecoveryState>, ReadError>;
    async fn write_recovery(
        &self,
        user_id: UserID,
        recovery: RecoveryState,
    ) -> Result<RecoveryState, UpdateError>;
}

/// Contribution of each leg subgroup to the aggregated legs recovery.
pub const LEG_WEIGHTS: [(MuscleGroup, f32); 4] = [
    (MuscleGroup::Quads, 0.38),
    (MuscleGroup::Hamstrings, 0.22),
    (MuscleGroup::Glutes, 0.30),
    (MuscleGroup::Calves, 0.10),
];

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MuscleRecovery {
    pub last_trained: DateTime<Utc>,
    pub recovery_percentage: f32,
}

impl MuscleRecovery {
    #[must_use]
    pub fn new(last_trained: DateTime<Utc>, now: DateTime<Utc>, window_hours: u32) -> Self {
        Self {
            last_trained,
            recovery_percentage: recovery_percentage(last_trained, now, window_hours),
        }
    }
}

/// Linear recovery from 0 % right after training to 100 % once the recovery window has passed.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn recovery_percentage(
    last_trained: DateTime<Utc>,
    now: DateTime<Utc>,
    window_hours: u32,
) -> f32 {
    if window_hours == 0 {
        return 100.0;
    }
    let elapsed_hours = (now - last_trained).num_milliseconds() as f32 / 3_600_000.0;
    clamp_percentage(elapsed_hours / window_hours as f32 * 100.0)
}

fn clamp_percentage(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecoveryState {
    pub chest: MuscleRecovery,
    pub back: MuscleRecovery,
    pub shoulders: MuscleRecovery,
    pub arms: MuscleRecovery,
    pub core: MuscleRecovery,
    pub quads: MuscleRecovery,
    pub hamstrings: MuscleRecovery,
    pub glutes: MuscleRecovery,
    pub calves: MuscleRecovery,
}

impl RecoveryState {
    /// Snapshot for users without recorded workouts: every group was trained exactly one
    /// recovery window ago.
    #[must_use]
    pub fn fully_recovered(now: DateTime<Utc>) -> Self {
        Self::from_fn(|group| MuscleRecovery {
            last_trained: now - Duration::hours(i64::from(group.recovery_window_hours())),
            recovery_percentage: 100.0,
        })
    }

    #[must_use]
    pub fn from_fn(mut f: impl FnMut(MuscleGroup) -> MuscleRecovery) -> Self {
        Self {
            chest: f(MuscleGroup::Chest),
            back: f(MuscleGroup::Back),
            shoulders: f(MuscleGroup::Shoulders),
            arms: f(MuscleGroup::Arms),
            core: f(MuscleGroup::Core),
            quads: f(MuscleGroup::Quads),
            hamstrings: f(MuscleGroup::Hamstrings),
            glutes: f(MuscleGroup::Glutes),
            calves: f(MuscleGroup::Calves),
        }
    }

    #[must_use]
    pub fn get(&self, group: MuscleGroup) -> &MuscleRecovery {
        match group {
            MuscleGroup::Chest => &self.chest,
            MuscleGroup::Back => &self.back,
            MuscleGroup::Shoulders => &self.shoulders,
            MuscleGroup::Arms => &self.arms,
            MuscleGroup::Core => &self.core,
            MuscleGroup::Quads => &self.quads,
            MuscleGroup::Hamstrings => &self.hamstrings,
            MuscleGroup::Glutes => &self.glutes,
            MuscleGroup::Calves => &self.calves,
        }
    }

    #[must_use]
    pub fn percentage(&self, group: MuscleGroup) -> f32 {
        self.get(group).recovery_percentage
    }

    /// Recomputes the recovery of every group at `now`. With `all_recovered` every group
    /// reports 100 % while keeping its last training time.
    #[must_use]
    pub fn refreshed(&self, now: DateTime<Utc>, all_recovered: bool) -> Self {
        Self::from_fn(|group| {
            let last_trained = self.get(group).last_trained;
            if all_recovered {
                MuscleRecovery {
                    last_trained,
                    recovery_percentage: 100.0,
                }
            } else {
                MuscleRecovery::new(last_trained, now, group.recovery_window_hours())
            }
        })
    }

    /// Weighted aggregate of the four leg subgroups.
    #[must_use]
    pub fn legs(&self) -> MuscleRecovery {
        let recovery_percentage = LEG_WEIGHTS
            .iter()
            .map(|(group, weight)| weight * self.percentage(*group))
            .sum::<f32>();
        let last_trained = MuscleGroup::LEGS
            .iter()
            .map(|group| self.get(*group).last_trained)
            .max()
            .unwrap_or(self.quads.last_trained);
        MuscleRecovery {
            last_trained,
            recovery_percentage: clamp_percentage(recovery_percentage),
        }
    }

    /// Snapshot after completing `plan`: every trained group starts recovering at `now`.
    #[must_use]
    pub fn record_workout(&self, plan: &WorkoutPlan, now: DateTime<Utc>) -> Self {
        let trained = plan.muscle_groups();
        Self::from_fn(|group| {
            if trained.contains(&group) {
                MuscleRecovery {
                    last_trained: now,
                    recovery_percentage: 0.0,
                }
            } else {
                *self.get(group)
            }
        })
    }
}
