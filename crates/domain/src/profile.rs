use std::fmt;

use crate::{ReadError, UpdateError, UserID, ValidationError};

#[allow(async_fn_in_trait)]
pub trait ProfileRepository {
    async fn read_profile(&self, user_id: UserID) -> Result<Option<UserProfile>, ReadError>;
    async fn write_profile(
        &self,
        user_id: UserID,
        profile: UserProfile,
    ) -> Result<UserProfile, UpdateError>;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    pub sex: Sex,
    pub body_weight: f32,
    pub weight_unit: WeightUnit,
    pub training_frequency: TrainingFrequency,
    /// Rest between sets in seconds.
    pub rest_time: u32,
    /// Minimum hours between two sessions training the same muscle group.
    pub muscle_group_rest_interval: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            sex: Sex::Other,
            body_weight: 70.0,
            weight_unit: WeightUnit::Kg,
            training_frequency: TrainingFrequency::ThreeDays,
            rest_time: 90,
            muscle_group_rest_interval: 48,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
    Other,
}

impl From<&str> for Sex {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "female" => Sex::Female,
            "male" => Sex::Male,
            _ => Sex::Other,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::Female => "female",
                Sex::Male => "male",
                Sex::Other => "other",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl From<&str> for WeightUnit {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "lb" | "lbs" => WeightUnit::Lb,
            _ => WeightUnit::Kg,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WeightUnit::Kg => "kg",
                WeightUnit::Lb => "lb",
            }
        )
    }
}

/// Training days per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TrainingFrequency {
    ThreeDays,
    FourDays,
    FiveDays,
}

impl TryFrom<u8> for TrainingFrequency {
    type Error = TrainingFrequencyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(TrainingFrequency::ThreeDays),
            4 => Ok(TrainingFrequency::FourDays),
            5 => Ok(TrainingFrequency::FiveDays),
            _ => Err(TrainingFrequencyError::OutOfRange(value)),
        }
    }
}

impl From<TrainingFrequency> for u8 {
    fn from(value: TrainingFrequency) -> Self {
        match value {
            TrainingFrequency::ThreeDays => 3,
            TrainingFrequency::FourDays => 4,
            TrainingFrequency::FiveDays => 5,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TrainingFrequencyError {
    #[error("Training frequency must be 3, 4 or 5 days per week ({0})")]
    OutOfRange(u8),
}

pub fn validate_body_weight(weight: &str) -> Result<f32, ValidationError> {
    match weight.replace(',', ".").trim().parse::<f32>() {
        Ok(parsed_weight) => {
            if parsed_weight > 0.0 && parsed_weight.is_finite() {
                Ok(parsed_weight)
            } else {
                Err(ValidationError::Other(
                    "Weight must be a positive decimal number".into(),
                ))
            }
        }
        Err(_) => Err(ValidationError::Other(
            "Weight must be a decimal number".into(),
        )),
    }
}

pub fn validate_training_frequency(days: &str) -> Result<TrainingFrequency, ValidationError> {
    match days.trim().parse::<u8>() {
        Ok(parsed_days) => TrainingFrequency::try_from(parsed_days)
            .map_err(|err| ValidationError::Other(err.to_string())),
        Err(_) => Err(ValidationError::Other(
            "Training frequency must be an integer".into(),
        )),
    }
}
