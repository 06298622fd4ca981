//! Tick calculator for time base configurations.
//!
//! Reads a TOML description of a counter and a list of periods, and prints
//! every period in ticks together with the counter's wrap window.
//!
//! ```toml
//! [time_base]
//! clock_hz = 48000000
//! counter_bits = 24
//!
//! [[period]]
//! name = "blink"
//! ms = 100.0
//!
//! [[period]]
//! name = "uart_timeout"
//! us = 1500.0
//! ```
//!
//! Usage: `tsc-calc <config.toml>`
//!
//! Exits with status 1 if the file cannot be read or parsed, or if any period
//! does not fit into the wrap window.

use std::process::ExitCode;
use std::{env, fmt, fs};

use serde::Deserialize;
use tsc_timer::math;

#[derive(Debug, Deserialize)]
struct CalcConfig {
    time_base: TimeBaseConfig,
    #[serde(default, rename = "period")]
    periods: Vec<PeriodConfig>,
}

#[derive(Debug, Deserialize)]
struct TimeBaseConfig {
    clock_hz: u32,
    counter_bits: u32,
}

#[derive(Debug, Deserialize)]
struct PeriodConfig {
    name: String,
    sec: Option<f64>,
    ms: Option<f64>,
    us: Option<f64>,
}

#[derive(Debug)]
enum CalcError {
    Usage,
    Read(String, std::io::Error),
    Parse(toml::de::Error),
    InvalidCounterBits(u32),
    AmbiguousPeriod(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Usage => write!(f, "usage: tsc-calc <config.toml>"),
            CalcError::Read(path, e) => write!(f, "cannot read {}: {}", path, e),
            CalcError::Parse(e) => write!(f, "invalid config: {}", e),
            CalcError::InvalidCounterBits(bits) => {
                write!(f, "counter_bits must be 1..=64, got {}", bits)
            }
            CalcError::AmbiguousPeriod(name) => {
                write!(f, "period '{}' needs exactly one of sec, ms, us", name)
            }
        }
    }
}

/// One evaluated period.
#[derive(Debug)]
struct Row {
    name: String,
    ticks: u64,
    fits: bool,
}

fn evaluate(config: &CalcConfig) -> Result<Vec<Row>, CalcError> {
    let bits = config.time_base.counter_bits;
    if bits == 0 || bits > 64 {
        return Err(CalcError::InvalidCounterBits(bits));
    }
    let max_period = math::mask_for_bits(bits) >> 1;
    let hz = config.time_base.clock_hz;

    config
        .periods
        .iter()
        .map(|p| {
            let ticks = match (p.sec, p.ms, p.us) {
                (Some(sec), None, None) => math::sec_to_ticks(hz, sec),
                (None, Some(ms), None) => math::ms_to_ticks(hz, ms),
                (None, None, Some(us)) => math::us_to_ticks(hz, us),
                _ => return Err(CalcError::AmbiguousPeriod(p.name.clone())),
            };
            Ok(Row {
                name: p.name.clone(),
                ticks,
                fits: ticks <= max_period,
            })
        })
        .collect()
}

fn run() -> Result<bool, CalcError> {
    let path = env::args().nth(1).ok_or(CalcError::Usage)?;
    let text = fs::read_to_string(&path).map_err(|e| CalcError::Read(path.clone(), e))?;
    let config: CalcConfig = toml::from_str(&text).map_err(CalcError::Parse)?;

    let rows = evaluate(&config)?;

    let bits = config.time_base.counter_bits;
    let hz = config.time_base.clock_hz;
    let mask = math::mask_for_bits(bits);
    println!("clock:       {} Hz", hz);
    println!("counter:     {} bits (mask {:#x})", bits, mask);
    println!(
        "wrap window: {} ticks ({} us)",
        mask,
        math::ticks_to_us(hz, mask)
    );
    println!(
        "max period:  {} ticks ({} us)",
        mask >> 1,
        math::ticks_to_us(hz, mask >> 1)
    );
    println!();

    let mut all_fit = true;
    for row in &rows {
        let flag = if row.fits { "" } else { "  EXCEEDS WRAP WINDOW" };
        println!("{:<24} {:>20} ticks{}", row.name, row.ticks, flag);
        all_fit &= row.fits;
    }

    Ok(all_fit)
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
