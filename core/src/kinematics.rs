// core/src/kinematics.rs

/// Average step length (meters).
pub const LEN_STEP: f64 = 0.65;
/// Meters per kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes per hour.
pub const MIN_IN_HOUR: f64 = 60.0;
/// km/h → m/s conversion factor.
pub const KMH_IN_MSEC: f64 = 0.278;
/// Centimeters per meter.
pub const CM_IN_METER: f64 = 100.0;

// --- RoundTo trait (public, used by the report surface) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Distance (km) covered over the session.
///
/// `action` is the raw counter: steps for running/walking, strokes for
/// swimming.
#[inline]
pub fn distance(action: u32) -> f64 {
    f64::from(action) * LEN_STEP / M_IN_KM
}

/// Mean speed (km/h) over the session. Zero duration yields 0.
pub fn mean_speed(action: u32, duration_h: f64) -> f64 {
    if duration_h == 0.0 {
        return 0.0;
    }

    let distance = distance(action);

    distance / duration_h
}

/// Mean speed (km/h) for a pool session. Zero duration yields 0.
///
/// `length_pool_m` is the pool length in meters, `count_pool` how many
/// times the user crossed it.
pub fn swimming_mean_speed(length_pool_m: u32, count_pool: u32, duration_h: f64) -> f64 {
    if duration_h == 0.0 {
        return 0.0;
    }

    f64::from(length_pool_m) * f64::from(count_pool) / M_IN_KM / duration_h
}
