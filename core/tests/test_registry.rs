use ftracker_core::{resolve_training, ActivityType, AVAILABLE_TRAININGS};

#[test]
fn test_known_labels_resolve() {
    assert_eq!(resolve_training("Бег"), Some(ActivityType::Run));
    assert_eq!(resolve_training("Ходьба"), Some(ActivityType::Walk));
    assert_eq!(resolve_training("Плавание"), Some(ActivityType::Swim));
}

#[test]
fn test_unknown_label_misses() {
    assert_eq!(resolve_training("Неизвестно"), None);
    assert_eq!(resolve_training(""), None);
    // lookup is case-sensitive
    assert_eq!(resolve_training("бег"), None);
}

#[test]
fn test_registry_is_complete() {
    assert_eq!(AVAILABLE_TRAININGS.len(), 3);
    assert!(AVAILABLE_TRAININGS.contains_key("Плавание"));
}

#[test]
fn test_activity_tags() {
    assert_eq!(ActivityType::Run.as_str(), "run");
    assert_eq!(ActivityType::Walk.as_str(), "walk");
    assert_eq!(ActivityType::Swim.as_str(), "swim");
}
