//! GNSS satellites orbit and clock states
use std::{fmt::Display, path::Path};

use log::{debug, error, info};

use crate::{
    cfg::Config,
    constants::{KM_TO_M, MAX_VALID_SPAN_S, ORBIT_ANGULAR_RATE_RAD_S, US_TO_S},
    ephemeris::EphemerisSource,
    error::Error,
    interp::{ClockWindow, OrbitWindow, Window},
    prelude::{Duration, Epoch, Vector3, SV},
    telemetry::{scalar_header, scalar_value, vector_header, vector_value, Loggable},
};

/// [GnssSatellites] life cycle
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum State {
    /// Calculations are disabled: nothing is tracked.
    #[default]
    Uninitialized,
    /// Initial window filling
    Seeding,
    /// Window is complete and refilled as time goes by
    Steady,
    /// All [EphemerisSource]s have been consumed: last window is kept
    /// but can no longer be refilled.
    Exhausted,
}

/// Outcome of [GnssSatellites::update]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Refill {
    /// Calculations are disabled
    Disabled,
    /// Window is still valid (or can no longer be refilled)
    Idle,
    /// Window moved forward by this many samples
    Refilled(usize),
    /// Sources got exhausted during this update. Only reported once.
    Exhausted,
}

/// [GnssSatellites] tracks the orbital state and clock offset of every satellite
/// described by an ordered list of precise ephemeris products ([EphemerisSource]s).
///
/// Each satellite has its own orbit and clock interpolation windows,
/// refilled in lock-step, one epoch at a time, as time goes by.
/// The window moves forward once time has gone past its middle sample,
/// rolling over to the next [EphemerisSource] once the current one is consumed.
#[derive(Debug)]
pub struct GnssSatellites<S: EphemerisSource> {
    /// [Config] preset
    cfg: Config,
    /// Current [State]
    state: State,
    /// Ordered products
    sources: Vec<S>,
    /// Product currently feeding the windows
    source_index: usize,
    /// Next epoch to load from that product
    epoch_index: usize,
    /// Time offset origin of every window, moved on each source rollover
    reference_epoch: Epoch,
    /// Last [Epoch] passed to [GnssSatellites::update]
    current_epoch: Epoch,
    /// Last loaded [Epoch]
    last_loaded: Option<Epoch>,
    /// Tracked satellites
    satellites: Vec<SV>,
    /// Orbit windows (m ECEF), one per tracked satellite
    orbits: Vec<OrbitWindow>,
    /// Clock windows (us), one per tracked satellite
    clocks: Vec<ClockWindow>,
}

impl<S: EphemerisSource> GnssSatellites<S> {
    /// Builds a new [GnssSatellites] from chronologically ordered [EphemerisSource]s,
    /// centering the initial windows on the `start` [Epoch].
    /// Fails when the [Config] or the sources are not consistent, or
    /// when no source covers `start`. Running out of sources while filling the
    /// initial windows is not an error: it is logged and the [GnssSatellites] is
    /// [State::Exhausted] right away.
    pub fn new(cfg: Config, sources: Vec<S>, start: Epoch) -> Result<Self, Error> {
        let mut s = Self {
            cfg,
            sources,
            state: State::Uninitialized,
            source_index: 0,
            epoch_index: 0,
            reference_epoch: start,
            current_epoch: start,
            last_loaded: None,
            satellites: Vec::new(),
            orbits: Vec::new(),
            clocks: Vec::new(),
        };

        if !s.cfg.enabled {
            info!("{} - satellite states calculation disabled", start);
            return Ok(s);
        }

        let window_size = s.cfg.window_size;
        if window_size < 3 || window_size % 2 == 0 {
            return Err(Error::InvalidWindowSize(window_size));
        }

        s.check_sources()?;
        s.source_index = s.covering_source(start)?;

        let source = &s.sources[s.source_index];
        let tracked = source.satellites_count();

        if let Some(index) = s
            .sources
            .iter()
            .enumerate()
            .skip(s.source_index)
            .find(|(_, source)| source.satellites_count() < tracked)
            .map(|(index, _)| index)
        {
            return Err(Error::MissingSatellites(index));
        }

        let nearest = source.nearest_epoch_index(start);
        let epoch_index = nearest.saturating_sub(window_size / 2);
        let reference_epoch = source.epoch(epoch_index);
        let satellites = (0..tracked).map(|sat| source.satellite(sat)).collect();

        s.epoch_index = epoch_index;
        s.reference_epoch = reference_epoch;
        s.satellites = satellites;
        s.orbits = vec![OrbitWindow::with_capacity(window_size); tracked];
        s.clocks = vec![ClockWindow::with_placeholder(window_size); tracked];
        s.state = State::Seeding;

        info!(
            "{} - tracking {} satellites from source #{} (reference: {})",
            start, tracked, s.source_index, reference_epoch
        );

        for _ in 0..window_size {
            if !s.refill() {
                break;
            }
        }

        if s.state == State::Seeding {
            s.state = State::Steady;
        }

        Ok(s)
    }

    /// Builds a new [GnssSatellites] from the daily products described by [Config],
    /// each one being loaded by your `loader`, then proceeds like [GnssSatellites::new].
    /// No product is loaded when calculations are disabled.
    pub fn load<F, E>(cfg: Config, start: Epoch, mut loader: F) -> Result<Self, Error>
    where
        F: FnMut(&Path) -> Result<S, E>,
        E: Display,
    {
        if !cfg.enabled {
            return Self::new(cfg, Vec::new(), start);
        }

        let sources = cfg
            .product_paths()?
            .into_iter()
            .map(|path| {
                debug!("loading {}", path.display());
                loader(&path).map_err(|e| Error::EphemerisLoading {
                    path: path.clone(),
                    cause: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(cfg, sources, start)
    }

    /// Sources must not be empty, and be sorted in chronological order.
    fn check_sources(&self) -> Result<(), Error> {
        if self.sources.is_empty() {
            return Err(Error::NoEphemerisSource);
        }

        if let Some(index) = self
            .sources
            .iter()
            .position(|source| source.epochs_count() == 0)
        {
            return Err(Error::EmptyEphemerisSource(index));
        }

        if let Some(index) = self
            .sources
            .windows(2)
            .position(|pair| pair[1].start_epoch() < pair[0].start_epoch())
        {
            return Err(Error::UnsortedSources(index + 1));
        }

        Ok(())
    }

    /// Index of the first source covering `t`.
    fn covering_source(&self, t: Epoch) -> Result<usize, Error> {
        for (index, source) in self.sources.iter().enumerate() {
            let start = source.start_epoch();
            if t < start {
                break;
            }
            if t - start < source.coverage() {
                return Ok(index);
            }
        }
        Err(Error::TimeRangeMismatch(t))
    }

    /// Moves on to the next epoch, possibly to the next source.
    /// Returns false once all sources have been consumed.
    fn advance(&mut self) -> bool {
        let next = self.epoch_index + 1;

        if next < self.sources[self.source_index].epochs_count() {
            self.epoch_index = next;
            return true;
        }

        if self.source_index + 1 < self.sources.len() {
            self.source_index += 1;
            self.epoch_index = 0;
            debug!(
                "moving on to ephemeris source #{} ({})",
                self.source_index,
                self.sources[self.source_index].start_epoch()
            );
            self.reanchor();
            true
        } else {
            self.epoch_index = next;
            self.state = State::Exhausted;
            error!("{} - {}", self.current_epoch, Error::FileSequenceExhausted);
            false
        }
    }

    /// Moves the time offset origin to the oldest sample of the windows.
    fn reanchor(&mut self) {
        let oldest = match self.orbits.first().and_then(|window| window.get(0)) {
            Some((time_offset, _)) => *time_offset,
            None => return,
        };

        if oldest == 0.0 {
            return;
        }

        self.reference_epoch += Duration::from_seconds(oldest);

        for (orbit, clock) in self.orbits.iter_mut().zip(self.clocks.iter_mut()) {
            orbit.shift(oldest);
            clock.shift(oldest);
        }

        debug!("time offsets now refer to {}", self.reference_epoch);
    }

    /// Pushes the next epoch into every window.
    /// Returns false once all sources have been consumed.
    fn refill(&mut self) -> bool {
        // products may overlap on their boundaries
        while let Some(last) = self.last_loaded {
            if self.sources[self.source_index].epoch(self.epoch_index) > last {
                break;
            }
            if !self.advance() {
                return false;
            }
        }

        let source = &self.sources[self.source_index];
        let t = source.epoch(self.epoch_index);
        let time_offset = (t - self.reference_epoch).to_seconds();

        for (sat, (orbit, clock)) in self
            .orbits
            .iter_mut()
            .zip(self.clocks.iter_mut())
            .enumerate()
        {
            orbit.push(time_offset, source.position_km(self.epoch_index, sat) * KM_TO_M);
            clock.push(time_offset, source.clock_offset_us(self.epoch_index, sat));
        }

        debug!(
            "{} - loaded source #{} epoch #{} (dt={}s)",
            t, self.source_index, self.epoch_index, time_offset
        );

        self.last_loaded = Some(t);
        self.advance()
    }

    /// Synchronizes [GnssSatellites] to `t`. Windows move forward
    /// once `t` has gone past their middle sample, as many times as needed.
    pub fn update(&mut self, t: Epoch) -> Refill {
        if !self.cfg.enabled || self.state == State::Uninitialized {
            return Refill::Disabled;
        }

        self.current_epoch = t;

        let mut refills = 0;

        while self.state == State::Steady {
            let middle = match self.orbits.first().and_then(|w| w.middle_time_offset()) {
                Some(middle) => middle,
                None => break,
            };

            if (t - self.reference_epoch).to_seconds() <= middle {
                break;
            }

            refills += 1;

            if !self.refill() {
                return Refill::Exhausted;
            }
        }

        if refills > 0 {
            Refill::Refilled(refills)
        } else {
            Refill::Idle
        }
    }

    /// Time offset (s) of `t` (or current [Epoch]) within the windows, if answerable.
    fn time_offset(&self, t: Option<Epoch>) -> Option<f64> {
        let t = t.unwrap_or(self.current_epoch);
        let dt = (t - self.reference_epoch).to_seconds();

        if !(0.0..=MAX_VALID_SPAN_S).contains(&dt) {
            return None;
        }

        if self.state == State::Exhausted {
            let last = (self.last_loaded? - self.reference_epoch).to_seconds();
            if dt > last {
                return None;
            }
        }

        Some(dt)
    }

    /// Interpolated position (m ECEF) of this satellite at `t`, or current [Epoch]
    /// when `t` is None. None when this satellite is not tracked, or `t` is out of
    /// the interpolation windows.
    pub fn try_position(&self, satellite: usize, t: Option<Epoch>) -> Option<Vector3<f64>> {
        let window = self.orbits.get(satellite)?;
        if !window.is_full() {
            return None;
        }
        let dt = self.time_offset(t)?;
        window.trigonometric(dt, ORBIT_ANGULAR_RATE_RAD_S)
    }

    /// Interpolated clock offset (s) of this satellite at `t`, or current [Epoch]
    /// when `t` is None. Same availability as [GnssSatellites::try_position].
    pub fn try_clock_offset(&self, satellite: usize, t: Option<Epoch>) -> Option<f64> {
        if !self.orbits.get(satellite)?.is_full() {
            return None;
        }
        let dt = self.time_offset(t)?;
        let offset_us = self.clocks.get(satellite)?.polynomial(dt)?;
        Some(offset_us * US_TO_S)
    }

    /// Same as [GnssSatellites::try_position], returning the null vector when unavailable.
    pub fn position(&self, satellite: usize, t: Option<Epoch>) -> Vector3<f64> {
        self.try_position(satellite, t)
            .unwrap_or_else(Vector3::<f64>::zeros)
    }

    /// Same as [GnssSatellites::try_clock_offset], returning 0 when unavailable.
    pub fn clock_offset(&self, satellite: usize, t: Option<Epoch>) -> f64 {
        self.try_clock_offset(satellite, t).unwrap_or(0.0)
    }

    /// True if this satellite is tracked.
    pub fn is_tracked(&self, satellite: usize) -> bool {
        satellite < self.satellites.len()
    }

    /// [SV] at this satellite index, if tracked.
    pub fn satellite(&self, satellite: usize) -> Option<SV> {
        self.satellites.get(satellite).copied()
    }

    /// Number of tracked satellites
    pub fn tracked_satellites(&self) -> usize {
        self.satellites.len()
    }

    /// Current [State]
    pub fn state(&self) -> State {
        self.state
    }

    /// Time offset origin of the interpolation windows.
    /// Moves forward to the oldest sample each time the next [EphemerisSource] kicks in.
    pub fn reference_epoch(&self) -> Epoch {
        self.reference_epoch
    }

    /// Last [Epoch] this [GnssSatellites] was synchronized to
    pub fn current_epoch(&self) -> Epoch {
        self.current_epoch
    }

    /// Index of the [EphemerisSource] currently feeding the windows
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Index of the next epoch to load, within the current [EphemerisSource]
    pub fn epoch_index(&self) -> usize {
        self.epoch_index
    }

    /// Time offsets (s) currently stored in this satellite's window.
    pub fn window_time_offsets(&self, satellite: usize) -> Option<Vec<f64>> {
        Some(self.orbits.get(satellite)?.time_offsets())
    }
}

impl<S: EphemerisSource> Loggable for GnssSatellites<S> {
    fn log_header(&self) -> String {
        if !self.cfg.log_enabled {
            return String::new();
        }
        self.satellites
            .iter()
            .map(|sv| {
                let mut header = vector_header(&format!("{}_position", sv), "ecef", "m");
                header.push_str(&scalar_header(&format!("{}_clock_offset", sv), "s"));
                header
            })
            .collect()
    }

    fn log_value(&self) -> String {
        if !self.cfg.log_enabled {
            return String::new();
        }
        (0..self.satellites.len())
            .map(|sat| {
                let mut value = vector_value(&self.position(sat, None));
                value.push_str(&scalar_value(self.clock_offset(sat, None)));
                value
            })
            .collect()
    }
}
