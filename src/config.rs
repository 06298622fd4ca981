//! Build-time selection of the application time base.
//!
//! Clock rates come from the build environment and are fixed at compile time
//! (zero runtime cost):
//!
//! ```bash
//! export TSC_SYSCLK_HZ=48000000   # core clock (default: 48 MHz)
//! export TSC_SYSTICK_HZ=6000000   # counter clock (default: core clock)
//! cargo build --release --features cortex-m
//! ```
//!
//! A value that is not a positive decimal integer fails the build.
//!
//! With the `cortex-m` feature [`HtscTimeBase`] is the SysTick timer. Without
//! it a 24-bit [`ManualTimeBase`](crate::time_base::ManualTimeBase) with the
//! same clock stands in, so host builds see the same tick arithmetic as the
//! target.

use crate::rte::TimeService;

/// Core clock frequency (`TSC_SYSCLK_HZ`)
pub const SYSCLK_HZ: u32 = parse_hz(env!("TSC_SYSCLK_HZ"));

/// Frequency the application time base counts at (`TSC_SYSTICK_HZ`)
pub const SYSTICK_HZ: u32 = parse_hz(env!("TSC_SYSTICK_HZ"));

/// Time base backing the application time service.
#[cfg(feature = "cortex-m")]
pub type HtscTimeBase = crate::time_base::SysTickTimeBase<SYSCLK_HZ, SYSTICK_HZ>;

/// Time base backing the application time service.
#[cfg(not(feature = "cortex-m"))]
pub type HtscTimeBase = crate::time_base::ManualTimeBase<24, SYSTICK_HZ>;

/// Application time service.
pub type Htsc = TimeService<HtscTimeBase>;

/// Parse a decimal frequency at compile time.
///
/// Panics (a compile error in const context) on empty input, non-digit
/// characters, zero, or overflow of `u32`.
pub const fn parse_hz(s: &str) -> u32 {
    let bytes = s.as_bytes();
    assert!(!bytes.is_empty(), "clock frequency must not be empty");

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        assert!(b.is_ascii_digit(), "clock frequency must be a decimal integer");
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((b - b'0') as u32) {
                Some(v) => v,
                None => panic!("clock frequency overflows u32"),
            },
            None => panic!("clock frequency overflows u32"),
        };
        i += 1;
    }

    assert!(value != 0, "clock frequency must be non-zero");
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_base::TimeBase;

    #[test]
    fn test_parse_hz() {
        assert_eq!(parse_hz("48000000"), 48_000_000);
        assert_eq!(parse_hz("1"), 1);
        assert_eq!(parse_hz("4294967295"), u32::MAX);
    }

    #[test]
    #[should_panic(expected = "decimal integer")]
    fn test_parse_hz_rejects_garbage() {
        parse_hz("48MHz");
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_parse_hz_rejects_overflow() {
        parse_hz("4294967296");
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_parse_hz_rejects_zero() {
        parse_hz("0");
    }

    #[test]
    fn test_selected_time_base() {
        assert!(SYSCLK_HZ > 0);
        assert_eq!(HtscTimeBase::COUNTER_CLK_HZ, SYSTICK_HZ);
        assert_eq!(HtscTimeBase::counter_bits(), 24);
    }
}
