use crate::calories::{running_spent_calories, swimming_spent_calories, walking_spent_calories};
use crate::kinematics::{distance, mean_speed, swimming_mean_speed};
use crate::metrics;
use crate::registry::resolve_training;
use crate::types::{ActivityType, TrainingError, TrainingReport, Workout};

/// Sentinel returned by [`show_training_info`] for labels the registry does
/// not know.
pub const UNKNOWN_TRAINING: &str = "неизвестный тип тренировки";

/// Build a typed report for one workout.
///
/// Distance and speed default to the step-based formulas; swimming overrides
/// the speed with the pool-based one.
pub fn build_report(workout: &Workout) -> Result<TrainingReport, TrainingError> {
    let Some(training) = resolve_training(&workout.training) else {
        log::warn!("unknown training type: {}", workout.training);
        metrics::unknown_training_total().inc();
        return Err(TrainingError::UnknownTraining(workout.training.clone()));
    };

    let distance_km = distance(workout.action);
    let mut speed_kmh = mean_speed(workout.action, workout.duration_h);

    let calories_kcal = match training {
        ActivityType::Run => {
            running_spent_calories(workout.action, workout.weight_kg, workout.duration_h)
        }
        ActivityType::Walk => walking_spent_calories(
            workout.action,
            workout.duration_h,
            workout.weight_kg,
            workout.height_cm,
        ),
        ActivityType::Swim => {
            speed_kmh =
                swimming_mean_speed(workout.length_pool_m, workout.count_pool, workout.duration_h);
            swimming_spent_calories(
                workout.length_pool_m,
                workout.count_pool,
                workout.duration_h,
                workout.weight_kg,
            )
        }
    };

    metrics::reports_total(training.as_str()).inc();
    log::debug!(
        "report built: training={} calories={:.2}",
        training.as_str(),
        calories_kcal
    );

    Ok(TrainingReport {
        training: workout.training.clone(),
        duration_h: workout.duration_h,
        distance_km,
        speed_kmh,
        calories_kcal,
    })
}

/// Training summary as a fixed-format string.
///
/// Unknown labels yield the [`UNKNOWN_TRAINING`] sentinel rather than an
/// error; this surface never fails.
pub fn show_training_info(
    action: u32,
    training_type: &str,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
    length_pool_m: u32,
    count_pool: u32,
) -> String {
    let workout = Workout {
        training: training_type.to_string(),
        action,
        duration_h,
        weight_kg,
        height_cm,
        length_pool_m,
        count_pool,
    };

    match build_report(&workout) {
        Ok(report) => report.to_string(),
        Err(_) => UNKNOWN_TRAINING.to_string(),
    }
}
