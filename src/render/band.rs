//! Equal-width angular bands with padding.
//!
//! Same arithmetic as d3's `scaleBand()` with equal inner and outer padding
//! and centered alignment.

use crate::types::Radians;

/// `n` equal bands over `[start, stop]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    starts: Vec<f64>,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Lay out `n` bands over `[start, stop]` with `padding` as a fraction of
    /// the step, applied between bands and at both ends.
    pub fn new(n: usize, start: Radians, stop: Radians, padding: f64) -> Self {
        let padding_inner = padding.clamp(0.0, 1.0);
        let padding_outer = padding.max(0.0);

        let (mut lo, hi, reverse) = if stop.raw() < start.raw() {
            (stop.raw(), start.raw(), true)
        } else {
            (start.raw(), stop.raw(), false)
        };

        let count = n as f64;
        let step = (hi - lo) / (count - padding_inner + 2.0 * padding_outer).max(1.0);
        lo += (hi - lo - step * (count - padding_inner)) * 0.5;
        let bandwidth = step * (1.0 - padding_inner);

        let mut starts: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
        if reverse {
            starts.reverse();
        }

        Self {
            starts,
            step,
            bandwidth,
        }
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn bandwidth(&self) -> Radians {
        Radians(self.bandwidth)
    }

    /// Distance between consecutive band starts
    pub fn step(&self) -> Radians {
        Radians(self.step)
    }

    /// Start of band `i`, or `None` past the end.
    pub fn start(&self, i: usize) -> Option<Radians> {
        self.starts.get(i).copied().map(Radians)
    }

    /// `(start, end)` of band `i`.
    pub fn band(&self, i: usize) -> Option<(Radians, Radians)> {
        self.start(i).map(|s| (s, s + self.bandwidth()))
    }

    pub fn bands(&self) -> impl Iterator<Item = (Radians, Radians)> + '_ {
        self.starts
            .iter()
            .map(move |&s| (Radians(s), Radians(s + self.bandwidth)))
    }
}
