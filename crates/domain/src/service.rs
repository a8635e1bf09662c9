use chrono::{DateTime, Utc};
use log::{debug, error, info};

use crate::{
    Archetype, ProfileRepository, ReadError, RecoveryRepository, RecoveryState, UpdateError,
    UserID, UserProfile, WorkoutError, WorkoutGenerator, WorkoutPlan,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_profile(&self, user_id: UserID) -> Result<UserProfile, WorkoutError>;
    async fn set_profile(
        &self,
        user_id: UserID,
        profile: UserProfile,
    ) -> Result<UserProfile, WorkoutError>;
    async fn get_recovery(
        &self,
        user_id: UserID,
        now: DateTime<Utc>,
    ) -> Result<RecoveryState, WorkoutError>;
    async fn generate_workout(
        &self,
        user_id: UserID,
        archetype: Archetype,
        now: DateTime<Utc>,
    ) -> Result<WorkoutPlan, WorkoutError>;
    async fn complete_workout(
        &self,
        user_id: UserID,
        plan: &WorkoutPlan,
        now: DateTime<Utc>,
    ) -> Result<RecoveryState, WorkoutError>;
}

pub struct Service<'a, R> {
    repository: R,
    generator: WorkoutGenerator<'a>,
}

impl<'a, R> Service<'a, R>
where
    R: ProfileRepository + RecoveryRepository,
{
    pub fn new(repository: R, generator: WorkoutGenerator<'a>) -> Self {
        Self {
            repository,
            generator,
        }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> Service<'_, R>
where
    R: ProfileRepository + RecoveryRepository,
{
    async fn read_recovery(
        &self,
        user_id: UserID,
        now: DateTime<Utc>,
    ) -> Result<RecoveryState, ReadError> {
        let recovery = log_on_error!(
            self.repository.read_recovery(user_id),
            ReadError,
            "get",
            "recovery"
        )?;
        Ok(recovery.unwrap_or_else(|| {
            debug!("no recovery state for user {user_id}, assuming full recovery");
            RecoveryState::fully_recovered(now)
        }))
    }
}

impl<R> WorkoutService for Service<'_, R>
where
    R: ProfileRepository + RecoveryRepository,
{
    async fn get_profile(&self, user_id: UserID) -> Result<UserProfile, WorkoutError> {
        log_on_error!(
            self.repository.read_profile(user_id),
            ReadError,
            "get",
            "profile"
        )?
        .ok_or(WorkoutError::UserProfileNotFound)
    }

    async fn set_profile(
        &self,
        user_id: UserID,
        profile: UserProfile,
    ) -> Result<UserProfile, WorkoutError> {
        Ok(log_on_error!(
            self.repository.write_profile(user_id, profile),
            UpdateError,
            "replace",
            "profile"
        )?)
    }

    async fn get_recovery(
        &self,
        user_id: UserID,
        now: DateTime<Utc>,
    ) -> Result<RecoveryState, WorkoutError> {
        let recovery = self.read_recovery(user_id, now).await?;
        Ok(recovery.refreshed(now, self.generator.config().all_recovered))
    }

    async fn generate_workout(
        &self,
        user_id: UserID,
        archetype: Archetype,
        now: DateTime<Utc>,
    ) -> Result<WorkoutPlan, WorkoutError> {
        let profile = self.get_profile(user_id).await?;
        let recovery = self.read_recovery(user_id, now).await?;
        let plan = self
            .generator
            .generate(archetype, user_id, &profile, &recovery, now);
        match &plan {
            Ok(plan) => info!(
                "generated {archetype} body workout with {} exercises for user {user_id}",
                plan.exercises.len()
            ),
            Err(err) => error!("failed to generate {archetype} body workout: {err}"),
        }
        plan
    }

    async fn complete_workout(
        &self,
        user_id: UserID,
        plan: &WorkoutPlan,
        now: DateTime<Utc>,
    ) -> Result<RecoveryState, WorkoutError> {
        let recovery = self.read_recovery(user_id, now).await?;
        let recovery = recovery.record_workout(plan, now);
        Ok(log_on_error!(
            self.repository.write_recovery(user_id, recovery),
            UpdateError,
            "replace",
            "recovery"
        )?)
    }
}
