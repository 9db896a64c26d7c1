//! CSV telemetry columns
use itertools::Itertools;

use crate::prelude::Vector3;

/// Implemented by anything that contributes columns to the simulation log:
/// one header line once, then one value line per logging tick.
/// Each field is comma terminated, so contributions can simply be concatenated.
pub trait Loggable {
    /// Column names
    fn log_header(&self) -> String;
    /// Column values, in the same order as [Loggable::log_header]
    fn log_value(&self) -> String;
}

/// Three columns, one per axis: `name_x(frame)[unit],`
pub fn vector_header(name: &str, frame: &str, unit: &str) -> String {
    ["x", "y", "z"]
        .iter()
        .map(|axis| format!("{}_{}({})[{}],", name, axis, frame, unit))
        .collect()
}

/// One column: `name[unit],`
pub fn scalar_header(name: &str, unit: &str) -> String {
    format!("{}[{}],", name, unit)
}

pub fn vector_value(value: &Vector3<f64>) -> String {
    format!("{},", value.iter().map(|x| format!("{:.15e}", x)).join(","))
}

pub fn scalar_value(value: f64) -> String {
    format!("{:.15e},", value)
}

#[cfg(test)]
mod test {
    use super::{scalar_header, scalar_value, vector_header, vector_value};
    use crate::prelude::Vector3;

    #[test]
    fn headers() {
        assert_eq!(
            vector_header("G01_position", "ecef", "m"),
            "G01_position_x(ecef)[m],G01_position_y(ecef)[m],G01_position_z(ecef)[m],"
        );
        assert_eq!(scalar_header("G01_clock_offset", "s"), "G01_clock_offset[s],");
    }

    #[test]
    fn values() {
        assert_eq!(
            vector_value(&Vector3::new(1.0, -2.5, 0.0)),
            "1.000000000000000e0,-2.500000000000000e0,0.000000000000000e0,"
        );
        assert_eq!(scalar_value(1.25E-4), "1.250000000000000e-4,");
    }
}
