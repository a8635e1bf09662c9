use std::{fmt, slice::Iter};

use crate::{MuscleGroup, catalog};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExerciseDefinition {
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub equipment: Equipment,
    pub demo_url: &'static str,
    pub recovery_window_hours: u32,
}

impl ExerciseDefinition {
    pub(crate) const fn new(
        name: &'static str,
        muscle_group: MuscleGroup,
        equipment: Equipment,
        demo_url: &'static str,
        recovery_window_hours: u32,
    ) -> Self {
        Self {
            name,
            muscle_group,
            equipment,
            demo_url,
            recovery_window_hours,
        }
    }
}

/// Serialized exercises are resolved against the catalog by name.
#[derive(serde::Deserialize)]
struct ExerciseReference {
    name: String,
}

impl TryFrom<ExerciseReference> for ExerciseDefinition {
    type Error = ExerciseError;

    fn try_from(value: ExerciseReference) -> Result<Self, Self::Error> {
        catalog::exercise(&value.name)
            .cloned()
            .ok_or(ExerciseError::Unknown(value.name))
    }
}

impl<'de> serde::Deserialize<'de> for ExerciseDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let reference = ExerciseReference::deserialize(deserializer)?;
        ExerciseDefinition::try_from(reference).map_err(serde::de::Error::custom)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error("Unknown exercise \"{0}\"")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Machine,
    Cable,
    Bodyweight,
    Band,
    Kettlebell,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 7] = [
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Machine,
            Equipment::Cable,
            Equipment::Bodyweight,
            Equipment::Band,
            Equipment::Kettlebell,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Machine => "Machine",
            Equipment::Cable => "Cable",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Band => "Band",
            Equipment::Kettlebell => "Kettlebell",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
