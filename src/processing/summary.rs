use crate::processing::types::{
    Activity, DerivedMetrics, METERS_IN_KM, MINUTES_IN_HOUR, PhysicalProfile,
    STEP_LENGTH_COEFFICIENT, TrackerError, WALKING_CALORIES_COEFFICIENT,
};
use std::time::Duration;

const SECONDS_IN_HOUR: f64 = 3600.0;

/// Distance covered in kilometres, estimating step length from height.
pub fn distance(steps: u64, height: f64) -> f64 {
    let step_length = height * STEP_LENGTH_COEFFICIENT;
    step_length * steps as f64 / METERS_IN_KM
}

/// Mean speed in km/h. Zero-length durations yield zero.
pub fn mean_speed(steps: u64, height: f64, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    distance(steps, height) / hours(duration)
}

pub fn running_spent_calories(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, TrackerError> {
    ensure_positive_inputs(steps, weight, height, duration)?;

    let speed = mean_speed(steps, height, duration);
    let minutes = hours(duration) * MINUTES_IN_HOUR;
    Ok(weight * speed * minutes / MINUTES_IN_HOUR)
}

pub fn walking_spent_calories(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, TrackerError> {
    let running = running_spent_calories(steps, weight, height, duration)?;
    Ok(running * WALKING_CALORIES_COEFFICIENT)
}

/// Calories for the given training type.
pub fn spent_calories(
    activity: Activity,
    steps: u64,
    profile: &PhysicalProfile,
    duration: Duration,
) -> Result<f64, TrackerError> {
    match activity {
        Activity::Walking => {
            walking_spent_calories(steps, profile.weight, profile.height, duration)
        }
        Activity::Running => {
            running_spent_calories(steps, profile.weight, profile.height, duration)
        }
    }
}

/// Compute distance, speed and calories for one record.
pub fn derive_metrics(
    steps: u64,
    activity: Activity,
    profile: &PhysicalProfile,
    duration: Duration,
) -> Result<DerivedMetrics, TrackerError> {
    let calories = spent_calories(activity, steps, profile, duration)?;
    let metrics = DerivedMetrics {
        distance_km: distance(steps, profile.height),
        mean_speed_kmh: mean_speed(steps, profile.height, duration),
        calories,
    };
    tracing::debug!(
        steps,
        activity = activity.label(),
        distance_km = metrics.distance_km,
        mean_speed_kmh = metrics.mean_speed_kmh,
        calories = metrics.calories,
        "derived activity metrics"
    );
    Ok(metrics)
}

pub(crate) fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECONDS_IN_HOUR
}

// `!(x > 0.0)` also rejects NaN.
fn ensure_positive_inputs(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<(), TrackerError> {
    if steps == 0 || !(weight > 0.0) || !(height > 0.0) || duration.is_zero() {
        return Err(TrackerError::NonPositiveProfile {
            steps,
            weight,
            height,
            duration,
        });
    }
    Ok(())
}
