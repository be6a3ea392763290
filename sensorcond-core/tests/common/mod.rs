//! Common test utilities for integration tests
//!
//! Provides:
//! - Deterministic sensor signal generators (steps, ramps, noise)
//! - Small statistics helpers for comparing raw and filtered series

#![allow(dead_code)]

pub mod generators;

/// Mean of a series
pub fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}

/// Population variance of a series
pub fn variance(values: &[f32]) -> f32 {
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / values.len() as f32
}

/// Largest change between consecutive values
pub fn max_step(values: &[f32]) -> f32 {
    values
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .fold(0.0, f32::max)
}
