use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Coefficient applied to body height to estimate a single step length.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
pub const METERS_IN_KM: f64 = 1000.0;
pub const MINUTES_IN_HOUR: f64 = 60.0;
/// Share of the running calorie burn attributed to walking.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// A "day steps" package: `<steps>,<duration>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayStepsRecord {
    pub steps: u64,
    pub duration: Duration,
}

/// A training package: `<steps>,<activity>,<duration>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingRecord {
    pub steps: u64,
    pub activity: Activity,
    pub duration: Duration,
}

/// Kinds of training the formula engine knows how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Walking,
    Running,
}

impl Activity {
    /// Label used in rendered reports.
    pub fn label(self) -> &'static str {
        match self {
            Activity::Walking => "Ходьба",
            Activity::Running => "Бег",
        }
    }
}

impl FromStr for Activity {
    type Err = TrackerError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Ходьба" | "walking" => Ok(Activity::Walking),
            "Бег" | "running" => Ok(Activity::Running),
            other => Err(TrackerError::UnknownActivity(other.to_string())),
        }
    }
}

/// Body measurements supplied by the caller. Weight in kilograms, height in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalProfile {
    pub weight: f64,
    pub height: f64,
}

/// Values derived from a single record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid steps format {input:?}: {source}")]
    NonNumericSteps {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("step count must be positive, got {0}")]
    NonPositiveSteps(i64),

    #[error("invalid duration {0:?}")]
    InvalidDuration(String),

    #[error("duration must be positive, got {0:?}")]
    NonPositiveDuration(String),

    #[error("неизвестный тип тренировки: {0}")]
    UnknownActivity(String),

    #[error(
        "cannot compute spent calories: steps, weight, height and duration must be positive \
         (steps={steps}, weight={weight}, height={height}, duration={duration:?})"
    )]
    NonPositiveProfile {
        steps: u64,
        weight: f64,
        height: f64,
        duration: Duration,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_accepts_tracker_and_english_labels() {
        assert_eq!("Ходьба".parse::<Activity>().unwrap(), Activity::Walking);
        assert_eq!("walking".parse::<Activity>().unwrap(), Activity::Walking);
        assert_eq!("Бег".parse::<Activity>().unwrap(), Activity::Running);
        assert_eq!("running".parse::<Activity>().unwrap(), Activity::Running);
    }

    #[test]
    fn unknown_activity_message_names_the_label() {
        let err = "Плавание".parse::<Activity>().unwrap_err();
        assert_eq!(err.to_string(), "неизвестный тип тренировки: Плавание");
    }

    #[test]
    fn activity_labels_are_case_sensitive() {
        let err = "Running".parse::<Activity>().unwrap_err();
        assert!(matches!(err, TrackerError::UnknownActivity(label) if label == "Running"));
    }
}
