use std::collections::VecDeque;

use crate::{interp::Window, prelude::Vector3};

/// Orbital states are near periodic: [OrbitWindow] interpolates
/// positions with a trigonometric basis tuned to the orbital angular rate,
/// which does not suffer the Lagrange polynomial blow up on the window edges.
#[derive(Debug, Clone, Default)]
pub(crate) struct OrbitWindow {
    capacity: usize,
    buffer: VecDeque<(f64, Vector3<f64>)>,
}

impl Window<Vector3<f64>> for OrbitWindow {
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
    fn get(&self, index: usize) -> Option<&(f64, Vector3<f64>)> {
        self.buffer.get(index)
    }
    fn last(&self) -> Option<&(f64, Vector3<f64>)> {
        self.buffer.back()
    }
    fn push(&mut self, time_offset: f64, value: Vector3<f64>) {
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

impl OrbitWindow {
    /// Interpolates the position at `time_offset` [s], `angular_rate` [rad/s]
    /// being the fundamental of the trigonometric basis.
    /// Returns stored samples exactly on their own time offset.
    pub fn trigonometric(&self, time_offset: f64, angular_rate: f64) -> Option<Vector3<f64>> {
        if self.buffer.is_empty() {
            return None;
        }

        let half_rate = 0.5 * angular_rate;
        let mut y = Vector3::<f64>::zeros();

        for (i, (t_i, y_i)) in self.buffer.iter().enumerate() {
            let mut l_i = 1.0_f64;
            for (j, (t_j, _)) in self.buffer.iter().enumerate() {
                if i != j {
                    l_i *= (half_rate * (time_offset - t_j)).sin()
                        / (half_rate * (t_i - t_j)).sin();
                }
            }
            y += y_i * l_i;
        }

        Some(y)
    }
}
