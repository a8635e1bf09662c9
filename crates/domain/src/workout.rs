use std::{collections::BTreeSet, collections::HashSet, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use log::debug;

use crate::{
    EngineConfig, ExerciseDefinition, MuscleGroup, Property, RecoveryState, ShuffleSequence,
    UserID, UserProfile, WorkoutError, catalog, load, selection, shuffle,
};

pub const NOTE_LOWER_BODY_EMPTY: &str = "All lower muscle groups recovering";
pub const NOTE_LOWER_BODY_CORE_ONLY: &str = "Core-focused session (leg subgroups recovering)";
pub const NOTE_LOWER_BODY_LIMITED: &str = "Limited exercises due to muscle recovery";
pub const NOTE_LOWER_BODY_FULL: &str = "Full lower-body workout";
pub const NOTE_REDUCED_VOLUME: &str = "Reduced volume due to recovery constraints.";

const LIMITED_LOWER_BODY_SIZE: usize = 3;
const FULL_VOLUME_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Archetype {
    LowerBody,
    UpperBody,
    FullBody,
}

impl Archetype {
    /// Muscle groups in the order their exercises appear in the plan.
    #[must_use]
    pub fn muscle_groups(self) -> &'static [MuscleGroup] {
        match self {
            Archetype::LowerBody => &[
                MuscleGroup::Quads,
                MuscleGroup::Hamstrings,
                MuscleGroup::Glutes,
                MuscleGroup::Calves,
                MuscleGroup::Core,
            ],
            Archetype::UpperBody => &[
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Shoulders,
                MuscleGroup::Arms,
                MuscleGroup::Core,
            ],
            Archetype::FullBody => &[
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Shoulders,
                MuscleGroup::Arms,
                MuscleGroup::Quads,
                MuscleGroup::Hamstrings,
                MuscleGroup::Glutes,
                MuscleGroup::Calves,
                MuscleGroup::Core,
            ],
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Archetype::LowerBody => "lower",
                Archetype::UpperBody => "upper",
                Archetype::FullBody => "full",
            }
        )
    }
}

impl FromStr for Archetype {
    type Err = ArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lower-body" => Ok(Archetype::LowerBody),
            "upper" | "upper-body" => Ok(Archetype::UpperBody),
            "full" | "full-body" => Ok(Archetype::FullBody),
            _ => Err(ArchetypeError::Unknown(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ArchetypeError {
    #[error("Unknown workout type \"{0}\" (expected lower, upper or full)")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PerformedSet {
    pub weight: f32,
    pub reps: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SelectedExercise {
    pub exercise: ExerciseDefinition,
    pub sets: u32,
    pub reps: u32,
    pub suggested_weight: f32,
    #[serde(default)]
    pub performed_sets: Vec<PerformedSet>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorkoutPlan {
    pub archetype: Archetype,
    pub exercises: Vec<SelectedExercise>,
    pub timestamp: DateTime<Utc>,
    pub total_volume: f32,
    pub note: String,
}

impl WorkoutPlan {
    #[must_use]
    pub fn muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        self.exercises
            .iter()
            .map(|e| e.exercise.muscle_group)
            .collect()
    }
}

/// Assembles workout plans from the exercise catalog and a user's recovery state.
pub struct WorkoutGenerator<'a> {
    catalog: &'a [ExerciseDefinition],
    sequence: &'a ShuffleSequence,
    config: EngineConfig,
}

impl WorkoutGenerator<'static> {
    /// Generator over the built-in catalog using the process-wide shuffle sequence.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            catalog: &catalog::EXERCISES,
            sequence: ShuffleSequence::global(),
            config,
        }
    }
}

impl<'a> WorkoutGenerator<'a> {
    #[must_use]
    pub fn with_catalog(
        catalog: &'a [ExerciseDefinition],
        sequence: &'a ShuffleSequence,
        config: EngineConfig,
    ) -> Self {
        Self {
            catalog,
            sequence,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn generate(
        &self,
        archetype: Archetype,
        user_id: UserID,
        profile: &UserProfile,
        recovery_state: &RecoveryState,
        now: DateTime<Utc>,
    ) -> Result<WorkoutPlan, WorkoutError> {
        match archetype {
            Archetype::LowerBody => Ok(self.lower_body(user_id, profile, recovery_state, now)),
            Archetype::UpperBody => self.upper_body(user_id, profile, recovery_state, now),
            Archetype::FullBody => self.full_body(user_id, profile, recovery_state, now),
        }
    }

    /// Legs and core. Never fails: without eligible exercises the plan is empty.
    #[must_use]
    pub fn lower_body(
        &self,
        user_id: UserID,
        profile: &UserProfile,
        recovery_state: &RecoveryState,
        now: DateTime<Utc>,
    ) -> WorkoutPlan {
        let archetype = Archetype::LowerBody;
        let exercises = self.assemble(archetype, user_id, profile, recovery_state, now);
        let leg_exercises = exercises
            .iter()
            .filter(|e| e.exercise.muscle_group.is_leg())
            .count();
        let exercises = self.cap(archetype, exercises);

        let note = if exercises.is_empty() {
            NOTE_LOWER_BODY_EMPTY
        } else if leg_exercises == 0 {
            NOTE_LOWER_BODY_CORE_ONLY
        } else if exercises.len() <= LIMITED_LOWER_BODY_SIZE {
            NOTE_LOWER_BODY_LIMITED
        } else {
            NOTE_LOWER_BODY_FULL
        };

        plan(archetype, exercises, now, note)
    }

    pub fn upper_body(
        &self,
        user_id: UserID,
        profile: &UserProfile,
        recovery_state: &RecoveryState,
        now: DateTime<Utc>,
    ) -> Result<WorkoutPlan, WorkoutError> {
        self.volume_constrained(Archetype::UpperBody, user_id, profile, recovery_state, now)
    }

    pub fn full_body(
        &self,
        user_id: UserID,
        profile: &UserProfile,
        recovery_state: &RecoveryState,
        now: DateTime<Utc>,
    ) -> Result<WorkoutPlan, WorkoutError> {
        self.volume_constrained(Archetype::FullBody, user_id, profile, recovery_state, now)
    }

    fn volume_constrained(
        &self,
        archetype: Archetype,
        user_id: UserID,
        profile: &UserProfile,
        recovery_state: &RecoveryState,
        now: DateTime<Utc>,
    ) -> Result<WorkoutPlan, WorkoutError> {
        let exercises = self.assemble(archetype, user_id, profile, recovery_state, now);
        let exercises = self.cap(archetype, exercises);

        if exercises.is_empty() {
            debug!("no eligible exercises for {archetype} body workout");
            return Err(WorkoutError::OptimizationFailed);
        }

        let note = if exercises.len() < FULL_VOLUME_SIZE {
            NOTE_REDUCED_VOLUME
        } else {
            ""
        };

        Ok(plan(archetype, exercises, now, note))
    }

    /// Selects exercises for every muscle group of `archetype` and removes duplicate names.
    fn assemble(
        &self,
        archetype: Archetype,
        user_id: UserID,
        profile: &UserProfile,
        recovery_state: &RecoveryState,
        now: DateTime<Utc>,
    ) -> Vec<SelectedExercise> {
        let recovery_state = recovery_state.refreshed(now, self.config.all_recovered);
        let mut selected = vec![];

        for group in archetype.muscle_groups() {
            let quota = selection::quota(*group, &recovery_state, self.config.all_recovered);
            let candidates = catalog::exercises_for(self.catalog, group.name());
            let shuffled = shuffle::shuffle(&candidates, user_id.as_bytes(), self.sequence);
            debug!(
                "{group}: recovery {:.1} %, quota {quota}, {} candidates",
                recovery_state.percentage(*group),
                candidates.len()
            );
            selected.extend(
                shuffled
                    .into_iter()
                    .take(quota)
                    .map(|exercise| load::select(profile, exercise)),
            );
        }

        let mut names = HashSet::new();
        selected.retain(|e| names.insert(e.exercise.name));
        selected
    }

    fn cap(
        &self,
        archetype: Archetype,
        mut exercises: Vec<SelectedExercise>,
    ) -> Vec<SelectedExercise> {
        if let Some(cap) = self.config.cap(archetype) {
            exercises.truncate(cap);
        }
        exercises
    }
}

fn plan(
    archetype: Archetype,
    exercises: Vec<SelectedExercise>,
    now: DateTime<Utc>,
    note: &str,
) -> WorkoutPlan {
    debug!(
        "{archetype} body workout with {} exercises: {note}",
        exercises.len()
    );
    WorkoutPlan {
        archetype,
        total_volume: load::total_volume(&exercises),
        exercises,
        timestamp: now,
        note: note.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Equipment, MuscleRecovery, Sex, TrainingFrequency, WeightUnit};

    static PROFILE: std::sync::LazyLock<UserProfile> = std::sync::LazyLock::new(|| UserProfile {
        sex: Sex::Male,
        body_weight: 80.0,
        weight_unit: WeightUnit::Kg,
        training_frequency: TrainingFrequency::ThreeDays,
        rest_time: 90,
        muscle_group_rest_interval: 48,
    });

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn user() -> UserID {
        UserID::from(42)
    }

    /// Recovery state whose refreshed percentages at `now()` match `f`.
    #[allow(clippy::cast_possible_truncation)]
    fn recovery(f: impl Fn(MuscleGroup) -> f32) -> RecoveryState {
        RecoveryState::from_fn(|group| {
            let seconds = f(group) / 100.0 * group.recovery_window_hours() as f32 * 3600.0;
            MuscleRecovery {
                last_trained: now() - Duration::seconds(seconds.round() as i64),
                recovery_percentage: 0.0,
            }
        })
    }

    fn generator<'a>(
        catalog: &'a [ExerciseDefinition],
        sequence: &'a ShuffleSequence,
    ) -> WorkoutGenerator<'a> {
        WorkoutGenerator::with_catalog(catalog, sequence, EngineConfig::default())
    }

    fn names(plan: &WorkoutPlan) -> Vec<&'static str> {
        plan.exercises.iter().map(|e| e.exercise.name).collect()
    }

    fn count(plan: &WorkoutPlan, group: MuscleGroup) -> usize {
        plan.exercises
            .iter()
            .filter(|e| e.exercise.muscle_group == group)
            .count()
    }

    fn assert_invariants(plan: &WorkoutPlan) {
        let unique = names(plan).into_iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), plan.exercises.len(), "duplicate exercises");
        assert_approx_eq!(
            plan.total_volume,
            plan.exercises
                .iter()
                .map(|e| e.sets as f32 * e.reps as f32 * e.suggested_weight)
                .sum::<f32>(),
            1e-3
        );
        assert_eq!(plan.timestamp, now());
    }

    #[rstest]
    #[case("lower", Ok(Archetype::LowerBody))]
    #[case("Upper", Ok(Archetype::UpperBody))]
    #[case("full-body", Ok(Archetype::FullBody))]
    #[case("legs", Err(ArchetypeError::Unknown("legs".to_string())))]
    fn test_archetype_from_str(
        #[case] value: &str,
        #[case] expected: Result<Archetype, ArchetypeError>,
    ) {
        assert_eq!(value.parse::<Archetype>(), expected);
    }

    #[test]
    fn test_lower_body_full() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence).lower_body(
            user(),
            &PROFILE,
            &recovery(|_| 100.0),
            now(),
        );

        assert_invariants(&plan);
        assert_eq!(plan.exercises.len(), 8);
        assert_eq!(plan.note, NOTE_LOWER_BODY_FULL);
        for group in MuscleGroup::LEGS {
            assert_eq!(count(&plan, group), 2, "{group}");
        }
        assert_eq!(count(&plan, MuscleGroup::Core), 0);
        assert_eq!(sequence.current(), 5);
    }

    #[test]
    fn test_lower_body_group_order() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence).lower_body(
            user(),
            &PROFILE,
            &recovery(|group| if group == MuscleGroup::Glutes { 0.0 } else { 100.0 }),
            now(),
        );

        assert_eq!(
            plan.exercises
                .iter()
                .map(|e| e.exercise.muscle_group)
                .collect::<Vec<_>>(),
            vec![
                MuscleGroup::Quads,
                MuscleGroup::Quads,
                MuscleGroup::Hamstrings,
                MuscleGroup::Hamstrings,
                MuscleGroup::Calves,
                MuscleGroup::Calves,
                MuscleGroup::Core,
                MuscleGroup::Core,
            ]
        );
    }

    #[test]
    fn test_lower_body_core_only() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence).lower_body(
            user(),
            &PROFILE,
            &recovery(|_| 0.0),
            now(),
        );

        assert_invariants(&plan);
        assert_eq!(plan.exercises.len(), 2);
        assert_eq!(count(&plan, MuscleGroup::Core), 2);
        assert_eq!(plan.note, NOTE_LOWER_BODY_CORE_ONLY);
    }

    #[test]
    fn test_lower_body_limited() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence).lower_body(
            user(),
            &PROFILE,
            &recovery(|group| if group == MuscleGroup::Quads { 50.0 } else { 10.0 }),
            now(),
        );

        assert_invariants(&plan);
        assert_eq!(count(&plan, MuscleGroup::Quads), 1);
        assert_eq!(count(&plan, MuscleGroup::Core), 2);
        assert_eq!(plan.exercises.len(), 3);
        assert_eq!(plan.note, NOTE_LOWER_BODY_LIMITED);
    }

    #[test]
    fn test_lower_body_empty() {
        let upper_body_only = catalog::EXERCISES
            .iter()
            .filter(|e| e.muscle_group.is_upper_body())
            .cloned()
            .collect::<Vec<_>>();
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&upper_body_only, &sequence).lower_body(
            user(),
            &PROFILE,
            &recovery(|_| 10.0),
            now(),
        );

        assert_eq!(plan.exercises, vec![]);
        assert_eq!(plan.total_volume, 0.0);
        assert_eq!(plan.note, NOTE_LOWER_BODY_EMPTY);
    }

    #[test]
    fn test_lower_body_all_recovered_override() {
        let sequence = ShuffleSequence::new(0);
        let generator = WorkoutGenerator::with_catalog(
            &catalog::EXERCISES,
            &sequence,
            EngineConfig {
                all_recovered: true,
                ..EngineConfig::default()
            },
        );
        let plan = generator.lower_body(user(), &PROFILE, &recovery(|_| 0.0), now());

        assert_invariants(&plan);
        assert_eq!(plan.exercises.len(), 8);
        assert_eq!(plan.note, NOTE_LOWER_BODY_FULL);
    }

    #[test]
    fn test_lower_body_uncapped() {
        let sequence = ShuffleSequence::new(0);
        let generator = WorkoutGenerator::with_catalog(
            &catalog::EXERCISES,
            &sequence,
            EngineConfig {
                lower_body_cap: None,
                ..EngineConfig::default()
            },
        );
        let plan = generator.lower_body(user(), &PROFILE, &recovery(|_| 100.0), now());

        assert_eq!(plan.exercises.len(), 10);
        assert_eq!(count(&plan, MuscleGroup::Core), 2);
    }

    #[test]
    fn test_upper_body_full() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence)
            .upper_body(user(), &PROFILE, &recovery(|_| 100.0), now())
            .unwrap();

        assert_invariants(&plan);
        assert_eq!(plan.exercises.len(), 10);
        assert_eq!(plan.note, "");
        assert_eq!(plan.archetype, Archetype::UpperBody);
    }

    #[test]
    fn test_upper_body_reduced_volume() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence)
            .upper_body(
                user(),
                &PROFILE,
                &recovery(|group| if group == MuscleGroup::Back { 60.0 } else { 70.0 }),
                now(),
            )
            .unwrap();

        assert_invariants(&plan);
        assert_eq!(count(&plan, MuscleGroup::Back), 0);
        assert_eq!(plan.exercises.len(), 8);
        assert_eq!(plan.note, NOTE_REDUCED_VOLUME);
    }

    #[test]
    fn test_upper_body_exhausted() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence)
            .upper_body(user(), &PROFILE, &recovery(|_| 10.0), now())
            .unwrap();

        assert_invariants(&plan);
        assert_eq!(plan.exercises.len(), 2);
        assert_eq!(count(&plan, MuscleGroup::Core), 2);
        assert_eq!(plan.note, NOTE_REDUCED_VOLUME);
    }

    #[rstest]
    #[case(Archetype::UpperBody)]
    #[case(Archetype::FullBody)]
    fn test_optimization_failed(#[case] archetype: Archetype) {
        let sequence = ShuffleSequence::new(0);
        assert!(matches!(
            generator(&[], &sequence).generate(
                archetype,
                user(),
                &PROFILE,
                &recovery(|_| 100.0),
                now()
            ),
            Err(WorkoutError::OptimizationFailed)
        ));
    }

    #[test]
    fn test_lower_body_never_fails() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&[], &sequence)
            .generate(
                Archetype::LowerBody,
                user(),
                &PROFILE,
                &recovery(|_| 100.0),
                now(),
            )
            .unwrap();
        assert_eq!(plan.note, NOTE_LOWER_BODY_EMPTY);
    }

    #[test]
    fn test_full_body() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence)
            .full_body(user(), &PROFILE, &recovery(|_| 100.0), now())
            .unwrap();

        assert_invariants(&plan);
        assert_eq!(plan.exercises.len(), 18);
        assert_eq!(plan.note, "");
        assert_eq!(sequence.current(), 9);
        assert_eq!(
            plan.muscle_groups(),
            MuscleGroup::iter().copied().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn test_full_body_legs_recovering() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence)
            .full_body(
                user(),
                &PROFILE,
                &recovery(|group| if group.is_leg() { 0.0 } else { 100.0 }),
                now(),
            )
            .unwrap();

        assert_invariants(&plan);
        assert_eq!(plan.exercises.len(), 10);
        assert_eq!(plan.note, "");
    }

    #[test]
    fn test_deduplication() {
        let catalog = [
            ExerciseDefinition::new("Squat", MuscleGroup::Quads, Equipment::Barbell, "", 72),
            ExerciseDefinition::new("Squat", MuscleGroup::Glutes, Equipment::Barbell, "", 72),
            ExerciseDefinition::new("Plank", MuscleGroup::Core, Equipment::Bodyweight, "", 48),
        ];
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog, &sequence).lower_body(
            user(),
            &PROFILE,
            &recovery(|_| 100.0),
            now(),
        );

        assert_eq!(names(&plan), vec!["Squat", "Plank"]);
        assert_eq!(plan.exercises[0].exercise.muscle_group, MuscleGroup::Quads);
        assert_eq!(plan.note, NOTE_LOWER_BODY_LIMITED);
    }

    #[test]
    fn test_deterministic() {
        let plans = [ShuffleSequence::new(11), ShuffleSequence::new(11)].map(|sequence| {
            generator(&catalog::EXERCISES, &sequence).lower_body(
                user(),
                &PROFILE,
                &recovery(|_| 100.0),
                now(),
            )
        });
        assert_eq!(plans[0], plans[1]);
    }

    #[test]
    fn test_varies_between_calls() {
        let sequence = ShuffleSequence::new(0);
        let generator = generator(&catalog::EXERCISES, &sequence);
        let plans = (0..4)
            .map(|_| {
                names(
                    &generator
                        .full_body(user(), &PROFILE, &recovery(|_| 100.0), now())
                        .unwrap(),
                )
            })
            .collect::<HashSet<_>>();
        assert!(plans.len() > 1);
    }

    #[test]
    fn test_suggested_weights() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence)
            .full_body(user(), &PROFILE, &recovery(|_| 100.0), now())
            .unwrap();

        for exercise in &plan.exercises {
            assert_eq!(exercise.sets, 4);
            assert_eq!(exercise.reps, 10);
            assert_approx_eq!(
                exercise.suggested_weight,
                load::suggested_weight(&PROFILE, &exercise.exercise),
                1e-4
            );
            if exercise.exercise.equipment == Equipment::Bodyweight {
                assert_eq!(exercise.suggested_weight, 0.0);
            }
        }
    }

    #[test]
    fn test_workout_plan_serde() {
        let sequence = ShuffleSequence::new(0);
        let plan = generator(&catalog::EXERCISES, &sequence)
            .upper_body(user(), &PROFILE, &recovery(|_| 100.0), now())
            .unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(serde_json::from_str::<WorkoutPlan>(&json).unwrap(), plan);
    }

    #[test]
    fn test_workout_plan_deserialize_owned() {
        let sequence = ShuffleSequence::new(0);
        let mut plan = generator(&catalog::EXERCISES, &sequence)
            .lower_body(user(), &PROFILE, &recovery(|_| 100.0), now());
        plan.exercises[0].performed_sets.push(PerformedSet {
            weight: 40.0,
            reps: 8,
        });
        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(serde_json::from_value::<WorkoutPlan>(value).unwrap(), plan);
        assert!(
            serde_json::from_value::<SelectedExercise>(serde_json::json!({
                "exercise": {"name": "Foo"},
                "sets": 3,
                "reps": 10,
                "suggested_weight": 20.0
            }))
            .unwrap_err()
            .to_string()
            .contains("Unknown exercise \"Foo\"")
        );
    }
}
