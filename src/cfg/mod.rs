use std::path::PathBuf;

use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    product::{daily_range, sp3_file_name, YearDoy},
};

fn default_enabled() -> bool {
    true
}

fn default_log_enabled() -> bool {
    false
}

fn default_window_size() -> usize {
    9
}

fn default_file_name_header() -> String {
    "IGS0OPSFIN_".to_string()
}

fn default_orbit_data_period() -> String {
    "15M".to_string()
}

fn default_clock_file_name_footer() -> String {
    "15M_ORB.SP3".to_string()
}

/// [GnssSatellites](crate::prelude::GnssSatellites) setup
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Turn satellite states calculation on/off. When turned off,
    /// no product is loaded and every query returns its sentinel value.
    #[cfg_attr(feature = "serde", serde(default = "default_enabled"))]
    pub enabled: bool,
    /// Turn telemetry (log columns) on/off.
    #[cfg_attr(feature = "serde", serde(default = "default_log_enabled"))]
    pub log_enabled: bool,
    /// Number of samples in each interpolation window.
    /// Must be odd: the refill cadence is driven by the middle sample.
    #[cfg_attr(feature = "serde", serde(default = "default_window_size"))]
    pub window_size: usize,
    /// Directory where the precise products are stored
    #[cfg_attr(feature = "serde", serde(default))]
    pub directory: PathBuf,
    /// Product file name header, agency and campaign (like `IGS0OPSFIN_`)
    #[cfg_attr(feature = "serde", serde(default = "default_file_name_header"))]
    pub file_name_header: String,
    /// Orbit product sampling period (like `15M` or `05M`)
    #[cfg_attr(feature = "serde", serde(default = "default_orbit_data_period"))]
    pub orbit_data_period: String,
    /// Clock product footer. When it designates the orbit product (`{period}_ORB.SP3`)
    /// clock offsets are picked up from the orbit product.
    #[cfg_attr(feature = "serde", serde(default = "default_clock_file_name_footer"))]
    pub clock_file_name_footer: String,
    /// First product day, as YYYYDOY
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_date: u32,
    /// Last product day (included), as YYYYDOY
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_date: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            log_enabled: default_log_enabled(),
            window_size: default_window_size(),
            directory: PathBuf::new(),
            file_name_header: default_file_name_header(),
            orbit_data_period: default_orbit_data_period(),
            clock_file_name_footer: default_clock_file_name_footer(),
            start_date: 0,
            end_date: 0,
        }
    }
}

impl Config {
    /// Returns [Config] loading daily products from `start_date` to `end_date`
    /// (YYYYDOY, both included) stored in `directory`.
    /// You can then customize [Self] as you will.
    pub fn daily_products_preset(directory: PathBuf, start_date: u32, end_date: u32) -> Self {
        let mut s = Self::default();
        s.directory = directory;
        s.start_date = start_date;
        s.end_date = end_date;
        s
    }

    /// Copies and returns [Config] with desired window size.
    pub fn with_window_size(&self, window_size: usize) -> Self {
        let mut s = self.clone();
        s.window_size = window_size;
        s
    }

    /// Copies and returns [Config] with telemetry turned on/off.
    pub fn with_log_enabled(&self, log_enabled: bool) -> Self {
        let mut s = self.clone();
        s.log_enabled = log_enabled;
        s
    }

    /// Copies and returns [Config] with calculations turned on/off.
    pub fn with_enabled(&self, enabled: bool) -> Self {
        let mut s = self.clone();
        s.enabled = enabled;
        s
    }

    /// True when clock offsets come from the orbit product itself.
    pub fn clock_from_sp3(&self) -> bool {
        self.clock_file_name_footer == format!("{}_ORB.SP3", self.orbit_data_period)
    }

    /// Full path of each daily orbit product to load, in chronological order.
    pub fn product_paths(&self) -> Result<Vec<PathBuf>, Error> {
        let start = YearDoy::from_yyyydoy(self.start_date)?;
        let end = YearDoy::from_yyyydoy(self.end_date)?;

        if !self.clock_from_sp3() {
            warn!(
                "clock products ({}) are not supported: using orbit product clock offsets",
                self.clock_file_name_footer
            );
        }

        let paths = daily_range(start, end)?
            .into_iter()
            .map(|day| {
                self.directory.join(sp3_file_name(
                    &self.file_name_header,
                    day,
                    &self.orbit_data_period,
                ))
            })
            .collect();

        Ok(paths)
    }
}
