//! Rounding Precision Limits

/// Decimal places used for display and telemetry values.
///
/// One decimal matches the resolution of common temperature/humidity
/// sensors (DHT22, SHT31 report in 0.1 steps).
pub const DEFAULT_DECIMAL_PLACES: u8 = 1;

/// Largest supported number of decimal places.
///
/// 10^6 is the largest power of ten for which `value × 10^places` keeps a
/// sub-unit fractional part for typical sensor magnitudes in an f32
/// (24-bit mantissa).
pub const MAX_DECIMAL_PLACES: u8 = 6;
