use std::{fmt, slice::Iter, str::FromStr};

use crate::Property;

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Core,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 9] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Core,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
        }
    }
}

impl MuscleGroup {
    pub const LEGS: [MuscleGroup; 4] = [
        MuscleGroup::Quads,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
        MuscleGroup::Calves,
    ];

    pub const UPPER_BODY: [MuscleGroup; 4] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
    ];

    /// Hours after training until the group counts as fully recovered.
    #[must_use]
    pub fn recovery_window_hours(self) -> u32 {
        match self {
            MuscleGroup::Chest
            | MuscleGroup::Back
            | MuscleGroup::Shoulders
            | MuscleGroup::Arms
            | MuscleGroup::Quads
            | MuscleGroup::Hamstrings
            | MuscleGroup::Glutes => 72,
            MuscleGroup::Core | MuscleGroup::Calves => 48,
        }
    }

    #[must_use]
    pub fn is_leg(self) -> bool {
        Self::LEGS.contains(&self)
    }

    #[must_use]
    pub fn is_upper_body(self) -> bool {
        Self::UPPER_BODY.contains(&self)
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Pecs",
            MuscleGroup::Back => "Lats, traps and erector spinae",
            MuscleGroup::Shoulders => "Front, side and rear delts",
            MuscleGroup::Arms => "Biceps, triceps and forearms",
            MuscleGroup::Core => "Abs and obliques",
            MuscleGroup::Quads => "Front of thighs",
            MuscleGroup::Hamstrings => "Back of thighs",
            MuscleGroup::Glutes => "Buttocks",
            MuscleGroup::Calves => "Back of lower legs",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MuscleGroup {
    type Err = MuscleGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MuscleGroup::iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| MuscleGroupError::Unknown(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Unknown muscle group \"{0}\"")]
    Unknown(String),
}
