//! Per satellite interpolation windows
mod clock;
mod orbit;

pub(crate) use clock::ClockWindow;
pub(crate) use orbit::OrbitWindow;

/// Fixed capacity sliding window of `(time offset [s], value)` samples,
/// in chronological order. Pushing into a full window evicts the oldest sample.
pub(crate) trait Window<T> {
    fn with_capacity(capacity: usize) -> Self;
    fn capacity(&self) -> usize;
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&(f64, T)>;
    fn last(&self) -> Option<&(f64, T)>;
    fn push(&mut self, time_offset: f64, value: T);

    /// Moves the time offset origin `offset` [s] forward: every stored
    /// time offset is decreased by `offset`.
    fn shift(&mut self, offset: f64);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Time offset of the middle sample (index capacity/2), once loaded.
    fn middle_time_offset(&self) -> Option<f64> {
        let (t, _) = self.get(self.capacity() / 2)?;
        Some(*t)
    }

    fn time_offsets(&self) -> Vec<f64> {
        (0..self.len())
            .filter_map(|index| self.get(index))
            .map(|(t, _)| *t)
            .collect()
    }

    #[cfg(test)]
    fn snapshot(&self) -> Vec<(f64, T)>
    where
        T: Copy,
    {
        (0..self.len())
            .filter_map(|index| self.get(index))
            .copied()
            .collect()
    }
}
