//! Const conversion helpers between physical time and counter ticks.
//!
//! Everything here is a `const fn`, so a conversion written with literal
//! arguments in a `const` item is evaluated by the compiler, and the same call
//! at runtime produces the identical value.
//!
//! ```
//! use tsc_timer::math;
//!
//! const BLINK_PERIOD: u64 = math::ms_to_ticks(1_000_000, 250.0);
//! assert_eq!(BLINK_PERIOD, 250_000);
//! ```

/// Round to the nearest integer, halfway cases away from zero.
///
/// The result is produced by a truncating cast; negative inputs therefore
/// saturate to `0` and inputs beyond `u64::MAX` saturate to `u64::MAX`.
pub const fn round_to_u64(x: f64) -> u64 {
    (if x < 0.0 { x - 0.5 } else { x + 0.5 }) as u64
}

/// Convert seconds into ticks of a counter clocked at `clk_hz`.
pub const fn sec_to_ticks(clk_hz: u32, sec: f64) -> u64 {
    round_to_u64(clk_hz as f64 * sec)
}

/// Convert milliseconds into ticks of a counter clocked at `clk_hz`.
pub const fn ms_to_ticks(clk_hz: u32, ms: f64) -> u64 {
    sec_to_ticks(clk_hz, ms * 1e-3)
}

/// Convert microseconds into ticks of a counter clocked at `clk_hz`.
pub const fn us_to_ticks(clk_hz: u32, us: f64) -> u64 {
    sec_to_ticks(clk_hz, us * 1e-6)
}

/// Convert microseconds into ticks using integer arithmetic only.
///
/// Unlike the floating point conversions this truncates instead of rounding.
pub const fn i_us_to_ticks(clk_hz: u32, us: u32) -> u64 {
    (us as u64 * clk_hz as u64) / 1_000_000
}

/// Convert ticks back into whole microseconds (truncating).
///
/// Saturates at `u64::MAX` when the duration does not fit, which only happens
/// for very wide counters below 1 MHz.
pub const fn ticks_to_us(clk_hz: u32, ticks: u64) -> u64 {
    if clk_hz == 0 {
        return 0;
    }
    let us = (ticks as u128 * 1_000_000) / clk_hz as u128;
    if us > u64::MAX as u128 {
        u64::MAX
    } else {
        us as u64
    }
}

/// Bitmask covering the lowest `bits` bits of a `u64`.
pub const fn mask_for_bits(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}
