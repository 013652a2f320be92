use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::ActivityType;

/// Available trainings: label → activity type.
///
/// Immutable after first access; safe for concurrent reads. Callers can use
/// it to validate labels before building a report.
pub static AVAILABLE_TRAININGS: Lazy<HashMap<&'static str, ActivityType>> = Lazy::new(|| {
    HashMap::from([
        ("Бег", ActivityType::Run),
        ("Ходьба", ActivityType::Walk),
        ("Плавание", ActivityType::Swim),
    ])
});

/// Look up a training label. `None` for labels the registry does not know.
pub fn resolve_training(label: &str) -> Option<ActivityType> {
    AVAILABLE_TRAININGS.get(label).copied()
}
