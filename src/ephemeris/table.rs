use crate::{
    ephemeris::EphemerisSource,
    error::Error,
    prelude::{Duration, Epoch, Vector3, SV},
};

/// [EphemerisTable] is an in-memory [EphemerisSource], for applications
/// that already decoded their precise products (or synthesize them).
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisTable {
    /// Described [SV]s, in satellite index order
    satellites: Vec<SV>,
    /// Sampling [Epoch]s, in chronological order
    epochs: Vec<Epoch>,
    /// Positions (km ECEF), one row per epoch
    positions_km: Vec<Vec<Vector3<f64>>>,
    /// Clock offsets (us), one row per epoch
    clocks_us: Vec<Vec<f64>>,
    /// Covered time span
    coverage: Duration,
}

impl EphemerisTable {
    /// Creates an empty [EphemerisTable] describing these [SV]s.
    pub fn new(satellites: Vec<SV>) -> Self {
        Self {
            satellites,
            epochs: Vec::with_capacity(96),
            positions_km: Vec::with_capacity(96),
            clocks_us: Vec::with_capacity(96),
            coverage: Duration::from_days(1.0),
        }
    }

    /// Copies and returns [EphemerisTable] with desired coverage.
    pub fn with_coverage(&self, coverage: Duration) -> Self {
        let mut s = self.clone();
        s.coverage = coverage;
        s
    }

    /// Appends one epoch: one (position [km], clock offset [us]) pair per satellite,
    /// in satellite index order. Epochs must be pushed in chronological order.
    pub fn push_epoch(&mut self, t: Epoch, rows: &[(Vector3<f64>, f64)]) -> Result<(), Error> {
        if rows.len() != self.satellites.len() {
            return Err(Error::InvalidEphemerisTable);
        }

        if let Some(last) = self.epochs.last() {
            if t <= *last {
                return Err(Error::InvalidEphemerisTable);
            }
        }

        self.epochs.push(t);
        self.positions_km
            .push(rows.iter().map(|(pos, _)| *pos).collect());
        self.clocks_us.push(rows.iter().map(|(_, clk)| *clk).collect());
        Ok(())
    }

    /// Returns last [Epoch] of this table, if any.
    pub fn last_epoch(&self) -> Option<Epoch> {
        self.epochs.last().copied()
    }
}

impl EphemerisSource for EphemerisTable {
    fn satellites_count(&self) -> usize {
        self.satellites.len()
    }

    fn epochs_count(&self) -> usize {
        self.epochs.len()
    }

    fn epoch(&self, index: usize) -> Epoch {
        self.epochs[index]
    }

    fn position_km(&self, index: usize, satellite: usize) -> Vector3<f64> {
        self.positions_km[index][satellite]
    }

    fn clock_offset_us(&self, index: usize, satellite: usize) -> f64 {
        self.clocks_us[index][satellite]
    }

    fn start_epoch(&self) -> Epoch {
        self.epochs
            .first()
            .copied()
            .unwrap_or_else(|| Epoch::from_tai_duration(Duration::ZERO))
    }

    fn coverage(&self) -> Duration {
        self.coverage
    }

    fn satellite(&self, satellite: usize) -> SV {
        self.satellites[satellite]
    }
}

#[cfg(test)]
mod test {
    use super::EphemerisTable;
    use crate::{
        ephemeris::EphemerisSource,
        error::Error,
        prelude::{Constellation, Epoch, Unit, Vector3, SV},
    };

    #[test]
    fn push_epochs() {
        let t0 = Epoch::from_gregorian_utc_at_midnight(2024, 1, 1);
        let (g01, g05) = (
            SV::new(Constellation::GPS, 1),
            SV::new(Constellation::GPS, 5),
        );

        let mut table = EphemerisTable::new(vec![g01, g05]);
        assert!(table.last_epoch().is_none());

        for k in 0..4 {
            let t = t0 + k as f64 * 15.0 * Unit::Minute;
            let rows = [
                (Vector3::new(k as f64, 0.0, 0.0), 1.0),
                (Vector3::new(0.0, k as f64, 0.0), 2.0),
            ];
            assert!(table.push_epoch(t, &rows).is_ok());
        }

        // missing row
        assert_eq!(
            table.push_epoch(t0 + 1.0 * Unit::Hour, &[(Vector3::zeros(), 0.0)]),
            Err(Error::InvalidEphemerisTable)
        );

        // not chronological
        assert_eq!(
            table.push_epoch(t0, &[(Vector3::zeros(), 0.0), (Vector3::zeros(), 0.0)]),
            Err(Error::InvalidEphemerisTable)
        );

        assert_eq!(table.satellites_count(), 2);
        assert_eq!(table.epochs_count(), 4);
        assert_eq!(table.start_epoch(), t0);
        assert_eq!(table.last_epoch(), Some(t0 + 45.0 * Unit::Minute));
        assert_eq!(table.satellite(1), g05);
        assert_eq!(table.position_km(2, 1), Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(table.clock_offset_us(3, 0), 1.0);
        assert_eq!(table.coverage(), 1.0 * Unit::Day);

        assert_eq!(table.nearest_epoch_index(t0 - 1.0 * Unit::Hour), 0);
        assert_eq!(table.nearest_epoch_index(t0 + 7.0 * Unit::Minute), 0);
        assert_eq!(table.nearest_epoch_index(t0 + 8.0 * Unit::Minute), 1);
        // ties go to the earliest
        assert_eq!(table.nearest_epoch_index(t0 + 22.5 * Unit::Minute), 1);
        assert_eq!(table.nearest_epoch_index(t0 + 1.0 * Unit::Day), 3);
    }
}
