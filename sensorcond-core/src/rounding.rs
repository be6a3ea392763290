//! Decimal rounding for display and telemetry values
//!
//! Sensor values are carried as `f32` and most of them end up on a display
//! or in a telemetry payload with one decimal. Rounding here, once, keeps
//! every consumer showing the same number.
//!
//! Rounding is half away from zero (`libm::roundf`), applied to the f32
//! product `value × 10^places`. That product is itself rounded to f32, so
//! decimal "ties" follow what the f32 product lands on:
//!
//! ```text
//! -1.005f32 = -1.00499999523...
//! × 100     = -100.5          (f32 product)
//! roundf    = -101
//! / 100     = -1.01
//! ```

use crate::constants::rounding::MAX_DECIMAL_PLACES;

/// Powers of ten up to `10^MAX_DECIMAL_PLACES`, all exact in f32.
const POW10: [f32; MAX_DECIMAL_PLACES as usize + 1] =
    [1.0, 10.0, 100.0, 1_000.0, 10_000.0, 100_000.0, 1_000_000.0];

/// Round `value` to `places` decimal places.
///
/// `places` above [`MAX_DECIMAL_PLACES`] is clamped. If the scaled value
/// does not fit in an f32, `value` is returned unchanged since it already
/// has no fractional digits at that magnitude.
///
/// Non-finite input is the caller's responsibility; NaN passes through.
///
/// ```rust
/// use sensorcond_core::rounding::round_to_decimals;
///
/// assert_eq!(round_to_decimals(3.14159, 2), 3.14);
/// assert_eq!(round_to_decimals(21.46, 1), 21.5);
/// ```
pub fn round_to_decimals(value: f32, places: u8) -> f32 {
    let scale = POW10[places.min(MAX_DECIMAL_PLACES) as usize];
    let scaled = value * scale;

    if !scaled.is_finite() {
        return value;
    }

    libm::roundf(scaled) / scale
}
