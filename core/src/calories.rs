// core/src/calories.rs
use crate::kinematics::{
    mean_speed, swimming_mean_speed, CM_IN_METER, KMH_IN_MSEC, MIN_IN_HOUR, M_IN_KM,
};

// Running coefficients.
const RUNNING_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const RUNNING_MEAN_SPEED_SHIFT: f64 = 1.79;

// Walking coefficients.
const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

// Swimming coefficients.
const SWIMMING_MEAN_SPEED_SHIFT: f64 = 1.1;
const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Kilocalories burned over a running session.
///
/// The `/ M_IN_KM` term is a calibration artifact of the reference formula,
/// not a meters conversion; kept as-is for numeric compatibility.
pub fn running_spent_calories(action: u32, weight_kg: f64, duration_h: f64) -> f64 {
    let mean_speed_kmh = mean_speed(action, duration_h);
    let speed_calories_ratio = RUNNING_MEAN_SPEED_MULTIPLIER * mean_speed_kmh;

    (speed_calories_ratio * RUNNING_MEAN_SPEED_SHIFT) * weight_kg / M_IN_KM
        * duration_h
        * MIN_IN_HOUR
}

/// Kilocalories burned over a walking session.
///
/// Intermediate terms stay separate and duration scaling comes last; the
/// reference calibration depends on this exact order.
pub fn walking_spent_calories(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> f64 {
    let mean_speed_ms = mean_speed(action, duration_h) * KMH_IN_MSEC;
    let squared_speed = mean_speed_ms.powi(2);
    let height_speed_ratio = squared_speed / (height_cm / CM_IN_METER);
    let weight_calories_ratio = WALKING_WEIGHT_MULTIPLIER * weight_kg;
    let weight_speed_ratio = WALKING_SPEED_HEIGHT_MULTIPLIER * weight_kg;

    (weight_calories_ratio + height_speed_ratio * weight_speed_ratio) * duration_h * MIN_IN_HOUR
}

/// Kilocalories burned over a swimming session.
pub fn swimming_spent_calories(
    length_pool_m: u32,
    count_pool: u32,
    duration_h: f64,
    weight_kg: f64,
) -> f64 {
    let mean_speed_kmh = swimming_mean_speed(length_pool_m, count_pool, duration_h);
    let weight_calories_ratio = SWIMMING_WEIGHT_MULTIPLIER * weight_kg;

    (mean_speed_kmh + SWIMMING_MEAN_SPEED_SHIFT) * weight_calories_ratio * duration_h
}
