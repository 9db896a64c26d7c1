use std::f64::consts::TAU;

/// Queries further than this from the window reference time are not answered (s)
pub const MAX_VALID_SPAN_S: f64 = 1.0E6;

/// Orbital period used by the trigonometric interpolation (s):
/// one day, with the empirical correction of the IGS orbit interpolation study.
pub const ORBITAL_PERIOD_CORRECTION_S: f64 = 86400.0 * 1.003;

/// Fundamental angular rate of the trigonometric interpolation (rad/s)
pub const ORBIT_ANGULAR_RATE_RAD_S: f64 = TAU / ORBITAL_PERIOD_CORRECTION_S;

/// Kilometers to meters
pub const KM_TO_M: f64 = 1.0E3;

/// Microseconds to seconds
pub const US_TO_S: f64 = 1.0E-6;
