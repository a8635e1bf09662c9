#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod load;
pub mod selection;
pub mod shuffle;

mod config;
mod error;
mod exercise;
mod muscle;
mod profile;
mod recovery;
mod service;
mod user;
mod workout;

pub use config::EngineConfig;
pub use error::{ReadError, StorageError, UpdateError, ValidationError, WorkoutError};
pub use exercise::{Equipment, ExerciseDefinition, ExerciseError, Property};
pub use muscle::{MuscleGroup, MuscleGroupError};
pub use profile::{
    ProfileRepository, Sex, TrainingFrequency, TrainingFrequencyError, UserProfile, WeightUnit,
    validate_body_weight, validate_training_frequency,
};
pub use recovery::{
    LEG_WEIGHTS, MuscleRecovery, RecoveryRepository, RecoveryState, recovery_percentage,
};
pub use service::{Service, WorkoutService};
pub use shuffle::ShuffleSequence;
pub use user::UserID;
pub use workout::{
    Archetype, ArchetypeError, NOTE_LOWER_BODY_CORE_ONLY, NOTE_LOWER_BODY_EMPTY,
    NOTE_LOWER_BODY_FULL, NOTE_LOWER_BODY_LIMITED, NOTE_REDUCED_VOLUME, PerformedSet,
    SelectedExercise, WorkoutGenerator, WorkoutPlan,
};
