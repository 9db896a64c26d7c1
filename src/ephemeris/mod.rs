use crate::prelude::{Constellation, Duration, Epoch, Vector3, SV};

mod table;

pub use table::EphemerisTable;

/// Any precise ephemeris product (typically one SP3 file) should implement
/// the [EphemerisSource] trait to feed the
/// [GnssSatellites](crate::prelude::GnssSatellites) interpolation windows.
///
/// One source covers a bounded time range, starting at [EphemerisSource::start_epoch]
/// and lasting [EphemerisSource::coverage]. Samples are indexed by epoch (chronological order)
/// and by satellite (0..satellites_count). Parsing the product itself is left to the implementor.
pub trait EphemerisSource {
    /// Number of satellites described by this product.
    fn satellites_count(&self) -> usize;

    /// Number of epochs in this product.
    fn epochs_count(&self) -> usize;

    /// [Epoch] of the sample at this index.
    fn epoch(&self, index: usize) -> Epoch;

    /// Satellite position at this epoch index, in kilometers ECEF.
    fn position_km(&self, index: usize, satellite: usize) -> Vector3<f64>;

    /// Satellite clock offset at this epoch index, in microseconds.
    fn clock_offset_us(&self, index: usize, satellite: usize) -> f64;

    /// First [Epoch] covered by this product.
    fn start_epoch(&self) -> Epoch;

    /// Time span covered by this product, starting at [EphemerisSource::start_epoch].
    /// Precise products are daily files.
    fn coverage(&self) -> Duration {
        Duration::from_days(1.0)
    }

    /// [SV] described at this satellite index.
    /// Defaults to the GPS constellation, in PRN order.
    fn satellite(&self, satellite: usize) -> SV {
        let prn = u8::try_from(satellite + 1).unwrap_or(u8::MAX);
        SV::new(Constellation::GPS, prn)
    }

    /// Index of the epoch closest to `t`. The earliest epoch wins on ties.
    fn nearest_epoch_index(&self, t: Epoch) -> usize {
        (0..self.epochs_count())
            .min_by_key(|index| (self.epoch(*index) - t).abs().total_nanoseconds())
            .unwrap_or_default()
    }
}
