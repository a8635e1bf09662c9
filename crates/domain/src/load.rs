use crate::{
    Equipment, ExerciseDefinition, MuscleGroup, SelectedExercise, Sex, TrainingFrequency,
    UserProfile,
};

pub const REPS: u32 = 10;

const INCREASE_REPS_ABOVE: u32 = 12;
const DECREASE_REPS_BELOW: u32 = 6;
const INCREASE_FACTOR: f32 = 1.075;
const DECREASE_FACTOR: f32 = 0.925;

#[must_use]
pub fn sets(training_frequency: TrainingFrequency) -> u32 {
    match training_frequency {
        TrainingFrequency::ThreeDays => 4,
        TrainingFrequency::FourDays | TrainingFrequency::FiveDays => 3,
    }
}

#[must_use]
pub fn base_weight(profile: &UserProfile) -> f32 {
    profile.body_weight
        * match profile.sex {
            Sex::Male => 0.5,
            Sex::Female => 0.35,
            Sex::Other => 0.4,
        }
}

#[must_use]
pub fn muscle_multiplier(muscle_group: MuscleGroup) -> f32 {
    match muscle_group {
        MuscleGroup::Quads => 1.3,
        MuscleGroup::Hamstrings => 1.25,
        MuscleGroup::Glutes | MuscleGroup::Calves => 1.1,
        MuscleGroup::Core => 0.3,
        MuscleGroup::Chest | MuscleGroup::Back | MuscleGroup::Shoulders | MuscleGroup::Arms => 1.0,
    }
}

#[must_use]
pub fn equipment_multiplier(equipment: Equipment) -> f32 {
    match equipment {
        Equipment::Barbell => 1.2,
        Equipment::Machine => 1.0,
        Equipment::Cable => 0.9,
        Equipment::Bodyweight => 0.0,
        Equipment::Band => 0.4,
        Equipment::Dumbbell | Equipment::Kettlebell => 0.8,
    }
}

#[must_use]
pub fn suggested_weight(profile: &UserProfile, exercise: &ExerciseDefinition) -> f32 {
    let weight = base_weight(profile)
        * muscle_multiplier(exercise.muscle_group)
        * equipment_multiplier(exercise.equipment);
    weight.max(0.0)
}

#[must_use]
pub fn select(profile: &UserProfile, exercise: &ExerciseDefinition) -> SelectedExercise {
    SelectedExercise {
        exercise: exercise.clone(),
        sets: sets(profile.training_frequency),
        reps: REPS,
        suggested_weight: suggested_weight(profile, exercise),
        performed_sets: vec![],
    }
}

/// Weight to suggest for the next set after `reps` were performed with `weight`.
#[must_use]
pub fn adapt_weight(weight: f32, reps: u32) -> f32 {
    if reps > INCREASE_REPS_ABOVE {
        weight * INCREASE_FACTOR
    } else if reps < DECREASE_REPS_BELOW {
        weight * DECREASE_FACTOR
    } else {
        weight
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn volume(exercise: &SelectedExercise) -> f32 {
    exercise.sets as f32 * exercise.reps as f32 * exercise.suggested_weight
}

#[must_use]
pub fn total_volume(exercises: &[SelectedExercise]) -> f32 {
    exercises.iter().map(volume).sum()
}
