use chrono::{DateTime, Duration, TimeZone, Utc};
use liftplan_domain as domain;

pub const USER: domain::UserID = domain::UserID::from_u128(1);
pub const USER_2: domain::UserID = domain::UserID::from_u128(2);

pub static PROFILE: std::sync::LazyLock<domain::UserProfile> =
    std::sync::LazyLock::new(|| domain::UserProfile {
        sex: domain::Sex::Female,
        body_weight: 62.5,
        weight_unit: domain::WeightUnit::Kg,
        training_frequency: domain::TrainingFrequency::FourDays,
        rest_time: 90,
        muscle_group_rest_interval: 48,
    });

pub static PROFILE_2: std::sync::LazyLock<domain::UserProfile> =
    std::sync::LazyLock::new(|| domain::UserProfile {
        sex: domain::Sex::Male,
        body_weight: 180.0,
        weight_unit: domain::WeightUnit::Lb,
        training_frequency: domain::TrainingFrequency::ThreeDays,
        rest_time: 120,
        muscle_group_rest_interval: 72,
    });

pub static NOW: std::sync::LazyLock<DateTime<Utc>> =
    std::sync::LazyLock::new(|| Utc.with_ymd_and_hms(2020, 2, 2, 8, 0, 0).unwrap());

pub static RECOVERY: std::sync::LazyLock<domain::RecoveryState> =
    std::sync::LazyLock::new(|| domain::RecoveryState::fully_recovered(*NOW));

pub static RECOVERY_2: std::sync::LazyLock<domain::RecoveryState> =
    std::sync::LazyLock::new(|| {
        domain::RecoveryState::from_fn(|group| domain::MuscleRecovery {
            last_trained: *NOW - Duration::hours(12),
            recovery_percentage: if group.is_leg() { 25.0 } else { 100.0 },
        })
    });
