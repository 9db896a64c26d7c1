use std::collections::VecDeque;

use crate::interp::Window;

/// Clock offsets drift slowly and are not periodic: [ClockWindow]
/// interpolates them with a plain polynomial through every stored sample.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClockWindow {
    capacity: usize,
    buffer: VecDeque<(f64, f64)>,
}

impl Window<f64> for ClockWindow {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            buffer: VecDeque::with_capacity(capacity),
        }
    }
    fn capacity(&self) -> usize {
        self.capacity
    }
    fn len(&self) -> usize {
        self.buffer.len()
    }
    fn get(&self, index: usize) -> Option<&(f64, f64)> {
        self.buffer.get(index)
    }
    fn last(&self) -> Option<&(f64, f64)> {
        self.buffer.back()
    }
    fn push(&mut self, time_offset: f64, value: f64) {
        debug_assert!(
            self.last().map_or(true, |(t, _)| time_offset >= *t),
            "samples should be provided in chronological order"
        );
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back((time_offset, value));
    }
    fn shift(&mut self, offset: f64) {
        for (time_offset, _) in self.buffer.iter_mut() {
            *time_offset -= offset;
        }
    }
}

impl ClockWindow {
    /// Placeholder sample, evicted as real samples come in.
    pub const PLACEHOLDER: f64 = -1.0;

    /// Builds a full [ClockWindow] of placeholder samples.
    pub fn with_placeholder(capacity: usize) -> Self {
        let mut s = Self::with_capacity(capacity);
        for _ in 0..capacity {
            s.buffer.push_back((Self::PLACEHOLDER, Self::PLACEHOLDER));
        }
        s
    }

    /// Neville interpolation of the clock offset at `time_offset` [s].
    pub fn polynomial(&self, time_offset: f64) -> Option<f64> {
        if self.buffer.is_empty() {
            return None;
        }

        let x = self.buffer.iter().map(|(t, _)| *t).collect::<Vec<_>>();
        let mut p = self.buffer.iter().map(|(_, y)| *y).collect::<Vec<_>>();
        let n = p.len();

        for m in 1..n {
            for i in 0..n - m {
                p[i] = ((time_offset - x[i + m]) * p[i] + (x[i] - time_offset) * p[i + 1])
                    / (x[i] - x[i + m]);
            }
        }

        Some(p[0])
    }
}
