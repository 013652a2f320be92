use ftracker_core::{
    build_report, running_spent_calories, show_training_info, TrainingError, TrainingReport,
    Workout, UNKNOWN_TRAINING,
};

#[test]
fn test_running_summary() {
    let info = show_training_info(1000, "Бег", 1.0, 70.0, 175.0, 0, 0);

    assert!(info.starts_with("Тип тренировки: Бег\n"));
    assert!(info.contains("Длительность: 1.00 ч.\n"));
    assert!(info.contains("Дистанция: 0.65 км.\n"));
    assert!(info.contains("Скорость: 0.65 км/ч\n"));

    let calories = running_spent_calories(1000, 70.0, 1.0);
    assert!(info.contains(&format!("Сожгли калорий: {:.2}\n", calories)));
}

#[test]
fn test_unknown_training_sentinel() {
    let info = show_training_info(1000, "Неизвестно", 1.0, 70.0, 175.0, 0, 0);
    assert_eq!(info, UNKNOWN_TRAINING);
    assert_eq!(info, "неизвестный тип тренировки");
}

#[test]
fn test_swimming_overrides_speed() {
    // pool speed (25*40/1000/1 = 1.0 km/h) replaces the step-based one
    let info = show_training_info(1000, "Плавание", 1.0, 70.0, 175.0, 25, 40);
    assert!(info.contains("Скорость: 1.00 км/ч\n"));
    assert!(info.contains("Сожгли калорий: 294.00\n"));
}

#[test]
fn test_walking_summary() {
    let info = show_training_info(6000, "Ходьба", 1.0, 70.0, 170.0, 0, 0);
    assert!(info.starts_with("Тип тренировки: Ходьба\n"));
    assert!(info.contains("Дистанция: 3.90 км.\n"));
    assert!(info.contains("Сожгли калорий: 231.22\n"));
}

#[test]
fn test_build_report_unknown_is_typed() {
    let workout = Workout {
        training: "Йога".to_string(),
        action: 100,
        duration_h: 1.0,
        weight_kg: 70.0,
        height_cm: 175.0,
        length_pool_m: 0,
        count_pool: 0,
    };
    let err = build_report(&workout).unwrap_err();
    assert!(matches!(err, TrainingError::UnknownTraining(ref label) if label == "Йога"));
}

#[test]
fn test_display_format_is_fixed() {
    let report = TrainingReport {
        training: "Бег".to_string(),
        duration_h: 1.0,
        distance_km: 0.65,
        speed_kmh: 0.65,
        calories_kcal: 87.9606,
    };

    let expected = "Тип тренировки: Бег\n\
                    Длительность: 1.00 ч.\n\
                    Дистанция: 0.65 км.\n\
                    Скорость: 0.65 км/ч\n\
                    Сожгли калорий: 87.96\n";
    assert_eq!(report.to_string(), expected);
}
