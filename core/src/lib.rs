pub mod calories;
pub mod kinematics;
pub mod metrics;
pub mod registry;
pub mod report;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use calories::{running_spent_calories, swimming_spent_calories, walking_spent_calories};
pub use kinematics::{distance, mean_speed, swimming_mean_speed, RoundTo};
pub use registry::{resolve_training, AVAILABLE_TRAININGS};
pub use report::{build_report, show_training_info, UNKNOWN_TRAINING};
pub use types::{ActivityType, TrainingError, TrainingReport, Workout};

/// JSON-in/JSON-out entry point: one `Workout` object in, a rounded
/// `TrainingReport` out.
///
/// Parse failures carry the path of the offending JSON field. Unknown
/// training labels are a typed error on this surface; only
/// [`show_training_info`] keeps the sentinel-string convention.
pub fn training_info_json(payload: &str) -> Result<String, TrainingError> {
    let mut de = serde_json::Deserializer::from_str(payload);
    let workout: Workout =
        serde_path_to_error::deserialize(&mut de).map_err(|e| TrainingError::Parse {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })?;

    let report = build_report(&workout)?.rounded(2);

    serde_json::to_string(&report).map_err(|e| TrainingError::Parse {
        path: "report".to_string(),
        message: e.to_string(),
    })
}
