use ftracker_core::{metrics, show_training_info};

#[test]
fn test_report_counter_increments() {
    let before = metrics::reports_total("swim").get();
    show_training_info(0, "Плавание", 1.0, 70.0, 0.0, 25, 40);
    assert_eq!(metrics::reports_total("swim").get(), before + 1);
}

#[test]
fn test_unknown_counter_increments() {
    let before = metrics::unknown_training_total().get();
    show_training_info(1000, "Неизвестно", 1.0, 70.0, 175.0, 0, 0);
    assert_eq!(metrics::unknown_training_total().get(), before + 1);
}

#[test]
fn test_registry_gathers_families() {
    show_training_info(1000, "Бег", 1.0, 70.0, 0.0, 0, 0);
    let families = metrics::REGISTRY.gather();
    assert!(families
        .iter()
        .any(|f| f.get_name() == "ftracker_reports_total"));
}
