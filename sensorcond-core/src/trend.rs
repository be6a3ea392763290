//! Fixed-Depth Circular Buffer for Trend Detection
//!
//! ## Overview
//!
//! [`TrendBuffer`] keeps the last `N` samples of one channel in a ring and
//! classifies the direction the signal is moving in by comparing the newest
//! sample with the oldest one still held:
//!
//! ```text
//! newest > oldest + T  → Rising
//! newest < oldest - T  → Falling
//! otherwise            → Stable
//! ```
//!
//! This is a two-point heuristic, not a regression. It costs O(1) per
//! sample and is fully deterministic, but its sensitivity depends on `N`
//! times the sampling interval. See [`crate::constants::trend`].
//!
//! ## Always Full
//!
//! Unlike a history buffer that fills up over time, a trend buffer starts
//! full: construction writes the first sample into every slot. Before `N`
//! real samples have arrived the oldest slot still holds the seed, so a
//! channel never reports a trend out of uninitialized slots.
//!
//! ## Memory Layout
//!
//! ```text
//! TrendBuffer<5> after 7 adds (seed S, then a..g):
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  f  │  g  │  c  │  d  │  e  │  ← physical slots
//! └─────┴─────┴─────┴─────┴─────┘
//!          ↑     ↑
//!          │     └── cursor = 2: oldest, overwritten next
//!          └── newest = (cursor + N - 1) % N
//! ```
//!
//! "Oldest" means least recently written. If the caller skips cycles (for
//! example on a failed sensor read) the window covers more wall-clock time
//! than `N` intervals; the buffer has no notion of time.
//!
//! ## Usage Example
//!
//! ```rust
//! use sensorcond_core::trend::{Trend, TrendBuffer};
//!
//! let mut buffer: TrendBuffer<10> = TrendBuffer::new(20.0, 0.1)?;
//! assert_eq!(buffer.classify(), Trend::Stable);
//!
//! for _ in 0..9 {
//!     buffer.add(20.0);
//! }
//! buffer.add(25.0);
//! assert_eq!(buffer.classify(), Trend::Rising);
//! # Ok::<(), sensorcond_core::ConditioningError>(())
//! ```

use crate::{
    constants::trend::TREND_DEPTH,
    errors::{ConditioningError, ConditioningResult},
};

/// Direction a signal is moving in over the trend window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Trend {
    /// Newest sample exceeds the oldest by more than the threshold
    Rising,
    /// Newest sample is below the oldest by more than the threshold
    Falling,
    /// Change within the threshold
    #[default]
    Stable,
}

impl Trend {
    /// Signed encoding for collaborators that expect `1 / -1 / 0`
    pub const fn as_i8(self) -> i8 {
        match self {
            Trend::Rising => 1,
            Trend::Falling => -1,
            Trend::Stable => 0,
        }
    }

    /// Lowercase name, as used in telemetry payloads
    pub const fn as_str(self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Stable => "stable",
        }
    }

    /// Arrow glyph for displays
    pub const fn arrow(self) -> char {
        match self {
            Trend::Rising => '↑',
            Trend::Falling => '↓',
            Trend::Stable => '→',
        }
    }
}

impl core::fmt::Display for Trend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend buffer with the default depth
pub type DefaultTrendBuffer = TrendBuffer<TREND_DEPTH>;

/// Fixed-depth ring of recent samples
///
/// ## Type Parameter
///
/// - `N`: number of samples in the trend window. Must be at least 1;
///   a zero-depth buffer fails to build:
///
/// ```compile_fail
/// use sensorcond_core::trend::TrendBuffer;
///
/// let buffer: TrendBuffer<0> = TrendBuffer::new(20.0, 0.1).unwrap();
/// ```
///
/// ## Internal Invariants
///
/// - `cursor < N`
/// - every slot holds a sample (the seed until overwritten)
/// - `threshold` is finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct TrendBuffer<const N: usize> {
    /// Samples in write order, starting at `cursor`
    data: [f32; N],

    /// Slot the next `add` writes, which is also the oldest sample
    cursor: usize,

    /// Minimum change over the window to report a direction
    threshold: f32,
}

impl<const N: usize> TrendBuffer<N> {
    /// Evaluated per `N`; a zero depth is a compile error
    pub(crate) const NONZERO_DEPTH: () = assert!(N > 0, "trend buffer depth must be at least 1");

    /// Create a buffer with every slot set to the first valid sample
    pub fn new(first_sample: f32, threshold: f32) -> ConditioningResult<Self> {
        let () = Self::NONZERO_DEPTH;

        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConditioningError::InvalidThreshold { threshold });
        }

        Ok(Self {
            data: [first_sample; N],
            cursor: 0,
            threshold,
        })
    }

    /// Refill every slot with `first_sample` and rewind the cursor
    pub fn reseed(&mut self, first_sample: f32) {
        self.data = [first_sample; N];
        self.cursor = 0;
    }

    /// Overwrite the oldest sample with `value`
    pub fn add(&mut self, value: f32) {
        self.data[self.cursor] = value;
        self.cursor = (self.cursor + 1) % N;
    }

    /// Compare the newest sample against the oldest
    pub fn classify(&self) -> Trend {
        let oldest = self.oldest();
        let newest = self.newest();

        if newest > oldest + self.threshold {
            Trend::Rising
        } else if newest < oldest - self.threshold {
            Trend::Falling
        } else {
            Trend::Stable
        }
    }

    /// Least recently written sample, the next one to be overwritten
    pub fn oldest(&self) -> f32 {
        self.data[self.cursor]
    }

    /// Most recently written sample
    pub fn newest(&self) -> f32 {
        self.data[(self.cursor + N - 1) % N]
    }

    /// Change across the window, `newest - oldest`
    pub fn delta(&self) -> f32 {
        self.newest() - self.oldest()
    }

    /// Raw slot storage, for diagnostics
    ///
    /// Slots are in physical order; the oldest sample sits at
    /// [`cursor`](Self::cursor). Use [`chronological`](Self::chronological)
    /// for oldest-to-newest order.
    pub fn snapshot(&self) -> &[f32; N] {
        &self.data
    }

    /// Iterate samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..N).map(move |i| self.data[(self.cursor + i) % N])
    }

    /// Copy of the samples in oldest-to-newest order
    pub fn chronological(&self) -> heapless::Vec<f32, N> {
        self.iter().collect()
    }

    /// Index of the slot the next `add` writes
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Direction threshold in sample units
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Number of samples in the window
    pub const fn depth(&self) -> usize {
        N
    }
}
