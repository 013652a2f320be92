use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kinematics::RoundTo;

/// Kind of tracked training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    Run,
    Walk,
    Swim,
}

impl ActivityType {
    /// Stable ASCII tag, used for metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Run => "run",
            ActivityType::Walk => "walk",
            ActivityType::Swim => "swim",
        }
    }
}

/// One recorded session as received on the wire.
///
/// Aliases accept the field names older clients send.
#[derive(Debug, Clone, Deserialize)]
pub struct Workout {
    #[serde(alias = "training_type")]
    pub training: String,
    /// Steps for running/walking, strokes for swimming.
    pub action: u32,
    #[serde(alias = "duration")]
    pub duration_h: f64,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    /// Walking only.
    #[serde(default, alias = "height")]
    pub height_cm: f64,
    /// Swimming only.
    #[serde(default, alias = "length_pool")]
    pub length_pool_m: u32,
    /// Swimming only: how many times the pool was crossed.
    #[serde(default)]
    pub count_pool: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrainingReport {
    pub training: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl TrainingReport {
    /// Copy with every numeric field rounded to `dp` decimals.
    pub fn rounded(mut self, dp: u32) -> Self {
        self.duration_h = self.duration_h.round_to(dp);
        self.distance_km = self.distance_km.round_to(dp);
        self.speed_kmh = self.speed_kmh.round_to(dp);
        self.calories_kcal = self.calories_kcal.round_to(dp);
        self
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}\n\
             Длительность: {:.2} ч.\n\
             Дистанция: {:.2} км.\n\
             Скорость: {:.2} км/ч\n\
             Сожгли калорий: {:.2}\n",
            self.training, self.duration_h, self.distance_km, self.speed_kmh, self.calories_kcal,
        )
    }
}

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("unknown training type: {0}")]
    UnknownTraining(String),
    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },
}
