use std::path::PathBuf;

use thiserror::Error;

use crate::prelude::Epoch;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The interpolation window must hold an odd number (at least 3) of samples,
    /// so that it has a well defined middle sample.
    #[error("invalid interpolation window size {0}: must be odd and >= 3")]
    InvalidWindowSize(usize),

    /// [GnssSatellites](crate::prelude::GnssSatellites) requires at least one
    /// [EphemerisSource](crate::prelude::EphemerisSource).
    #[error("no ephemeris source provided")]
    NoEphemerisSource,

    /// [EphemerisSource](crate::prelude::EphemerisSource)s must be provided in chronological order.
    /// Index of the first source that starts before its predecessor.
    #[error("ephemeris source #{0} starts before its predecessor")]
    UnsortedSources(usize),

    /// [EphemerisSource](crate::prelude::EphemerisSource) without a single epoch.
    #[error("ephemeris source #{0} is empty")]
    EmptyEphemerisSource(usize),

    /// Every [EphemerisSource](crate::prelude::EphemerisSource) must describe
    /// the satellites being tracked.
    #[error("ephemeris source #{0} describes fewer satellites than tracked")]
    MissingSatellites(usize),

    /// No [EphemerisSource](crate::prelude::EphemerisSource) covers the simulation start time.
    #[error("no ephemeris source covers {0}")]
    TimeRangeMismatch(Epoch),

    /// Product date range is reversed.
    #[error("start date {start} is past end date {end}")]
    StartDateAfterEndDate { start: u32, end: u32 },

    /// Dates are expressed as YYYYDOY.
    #[error("invalid YYYYDOY date: {0}")]
    InvalidYearDoy(u32),

    /// [EphemerisTable](crate::prelude::EphemerisTable) rows do not match the satellites list.
    #[error("inconsistent ephemeris table")]
    InvalidEphemerisTable,

    /// The user provided parser failed to load one product.
    #[error("failed to load {path:?}: {cause}")]
    EphemerisLoading { path: PathBuf, cause: String },

    /// All [EphemerisSource](crate::prelude::EphemerisSource)s have been consumed:
    /// the window can no longer be refilled.
    /// This is logged, never returned by
    /// [GnssSatellites::update](crate::prelude::GnssSatellites::update).
    #[error("ephemeris source sequence exhausted")]
    FileSequenceExhausted,
}
