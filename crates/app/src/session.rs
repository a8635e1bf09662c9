use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Duration, Utc};
use liftplan_domain::{PerformedSet, SelectedExercise, WorkoutPlan, load};
use log::debug;

pub const FILE_NAME: &str = "ongoing_workout.json";

/// Reads the ongoing workout stored in `dir`.
pub async fn read(dir: &Path) -> Result<Option<OngoingWorkout>, Error> {
    let path = dir.join(FILE_NAME);
    match tokio::fs::read(&path).await {
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| Error::Invalid { path, source }),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::Io { path, source }),
    }
}

/// Stores the ongoing workout in `dir`. `None` removes a stored workout.
pub async fn write(dir: &Path, ongoing_workout: Option<&OngoingWorkout>) -> Result<(), Error> {
    let path = dir.join(FILE_NAME);
    let Some(ongoing_workout) = ongoing_workout else {
        debug!("removing {}", path.display());
        return match tokio::fs::remove_file(&path).await {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(Error::Io { path, source: err }),
            _ => Ok(()),
        };
    };
    let json = serde_json::to_vec_pretty(ongoing_workout).map_err(|source| Error::Invalid {
        path: path.clone(),
        source,
    })?;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    tokio::fs::write(&path, json)
        .await
        .map_err(|source| Error::Io { path, source })
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid ongoing workout in {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A generated workout that is currently being performed.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OngoingWorkout {
    pub plan: WorkoutPlan,
    pub start_time: DateTime<Utc>,
    pub exercise_idx: usize,
    pub timer_state: TimerState,
}

impl OngoingWorkout {
    #[must_use]
    pub fn new(plan: WorkoutPlan, start_time: DateTime<Utc>) -> Self {
        Self {
            plan,
            start_time,
            exercise_idx: 0,
            timer_state: TimerState::Unset,
        }
    }

    #[must_use]
    pub fn current_exercise(&self) -> Option<&SelectedExercise> {
        self.plan.exercises.get(self.exercise_idx)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.exercise_idx >= self.plan.exercises.len()
    }

    /// Records a performed set of the current exercise and starts the rest timer.
    ///
    /// Returns the weight suggested for the next set, or `None` if the workout is finished.
    pub fn log_set(
        &mut self,
        weight: f32,
        reps: u32,
        rest_time: u32,
        now: DateTime<Utc>,
    ) -> Option<f32> {
        let exercise = self.plan.exercises.get_mut(self.exercise_idx)?;
        exercise.performed_sets.push(PerformedSet { weight, reps });
        exercise.suggested_weight = load::adapt_weight(weight, reps);
        self.timer_state = TimerState::Active {
            target_time: now + Duration::seconds(i64::from(rest_time)),
        };
        Some(exercise.suggested_weight)
    }

    /// Moves on to the next exercise. Returns `false` once every exercise was visited.
    pub fn next_exercise(&mut self) -> bool {
        if !self.is_finished() {
            self.exercise_idx += 1;
        }
        self.timer_state = TimerState::Unset;
        !self.is_finished()
    }

    pub fn pause_timer(&mut self, now: DateTime<Utc>) {
        if let TimerState::Active { target_time } = self.timer_state {
            self.timer_state = TimerState::Paused {
                time: (target_time - now).num_seconds().max(0),
            };
        }
    }

    pub fn resume_timer(&mut self, now: DateTime<Utc>) {
        if let TimerState::Paused { time } = self.timer_state {
            self.timer_state = TimerState::Active {
                target_time: now + Duration::seconds(time),
            };
        }
    }

    /// Remaining rest time in seconds.
    #[must_use]
    pub fn remaining_rest(&self, now: DateTime<Utc>) -> Option<i64> {
        match self.timer_state {
            TimerState::Unset => None,
            TimerState::Active { target_time } => Some((target_time - now).num_seconds().max(0)),
            TimerState::Paused { time } => Some(time),
        }
    }

    /// Ends the session and returns the plan including all performed sets.
    #[must_use]
    pub fn finish(self) -> WorkoutPlan {
        self.plan
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TimerState {
    Unset,
    Active { target_time: DateTime<Utc> },
    Paused { time: i64 },
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::TimeZone;
    use liftplan_domain::{
        EngineConfig, RecoveryState, ShuffleSequence, UserID, UserProfile, WorkoutGenerator,
        catalog,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap()
    }

    fn session() -> OngoingWorkout {
        let sequence = ShuffleSequence::new(0);
        let generator =
            WorkoutGenerator::with_catalog(&catalog::EXERCISES, &sequence, EngineConfig::default());
        let plan = generator
            .upper_body(
                UserID::from(1),
                &UserProfile::default(),
                &RecoveryState::fully_recovered(now()),
                now(),
            )
            .unwrap();
        OngoingWorkout::new(plan, now())
    }

    #[test]
    fn test_log_set() {
        let mut session = session();
        let suggested = session.current_exercise().unwrap().suggested_weight;

        let next = session.log_set(suggested, 14, 90, now()).unwrap();

        assert_approx_eq!(next, suggested * 1.075);
        let exercise = session.current_exercise().unwrap();
        assert_eq!(
            exercise.performed_sets,
            vec![PerformedSet {
                weight: suggested,
                reps: 14
            }]
        );
        assert_approx_eq!(exercise.suggested_weight, next);
        assert_eq!(
            session.timer_state,
            TimerState::Active {
                target_time: now() + Duration::seconds(90)
            }
        );
    }

    #[test]
    fn test_log_set_keeps_weight_in_target_range() {
        let mut session = session();

        assert_eq!(session.log_set(40.0, 8, 60, now()), Some(40.0));
        assert_approx_eq!(session.log_set(40.0, 5, 60, now()).unwrap(), 37.0);
        assert_eq!(session.current_exercise().unwrap().performed_sets.len(), 2);
    }

    #[test]
    fn test_next_exercise() {
        let mut session = session();
        let count = session.plan.exercises.len();
        session.log_set(20.0, 10, 60, now());

        for _ in 1..count {
            assert!(session.next_exercise());
            assert_eq!(session.timer_state, TimerState::Unset);
        }
        assert!(!session.next_exercise());
        assert!(session.is_finished());
        assert_eq!(session.exercise_idx, count);
        assert!(!session.next_exercise());
        assert_eq!(session.exercise_idx, count);
        assert_eq!(session.log_set(20.0, 10, 60, now()), None);

        let plan = session.finish();
        assert_eq!(plan.exercises[0].performed_sets.len(), 1);
    }

    #[test]
    fn test_timer() {
        let mut session = session();
        assert_eq!(session.remaining_rest(now()), None);

        session.log_set(20.0, 10, 90, now());
        assert_eq!(session.remaining_rest(now() + Duration::seconds(30)), Some(60));

        session.pause_timer(now() + Duration::seconds(30));
        assert_eq!(session.timer_state, TimerState::Paused { time: 60 });
        assert_eq!(session.remaining_rest(now() + Duration::seconds(600)), Some(60));

        let later = now() + Duration::seconds(600);
        session.resume_timer(later);
        assert_eq!(
            session.timer_state,
            TimerState::Active {
                target_time: later + Duration::seconds(60)
            }
        );
        assert_eq!(session.remaining_rest(later + Duration::seconds(120)), Some(0));
    }

    #[tokio::test]
    async fn test_read_write() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let mut session = session();
        session.log_set(30.0, 12, 60, now());

        assert_eq!(read(&data_dir).await.unwrap(), None);

        write(&data_dir, Some(&session)).await.unwrap();
        assert_eq!(read(&data_dir).await.unwrap(), Some(session));

        write(&data_dir, None).await.unwrap();
        assert_eq!(read(&data_dir).await.unwrap(), None);
        write(&data_dir, None).await.unwrap();
    }
}
