#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod ephemeris;
mod error;
mod interp;
mod satellites;

pub mod constants;
pub mod product;
pub mod telemetry;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::ephemeris::{EphemerisSource, EphemerisTable};
    pub use crate::error::Error;
    pub use crate::product::YearDoy;
    pub use crate::satellites::{GnssSatellites, Refill, State};
    pub use crate::telemetry::Loggable;
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
