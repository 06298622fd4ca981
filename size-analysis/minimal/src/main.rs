#![no_std]
#![no_main]

use panic_halt as _;
use tsc_timer::config::{SYSCLK_HZ, SYSTICK_HZ};
use tsc_timer::critical_section::{self, CortexMInterrupts};
use tsc_timer::time_base::SysTickTimeBase;
use tsc_timer::{TimeService, math};

// Evaluated at compile time
const BLINK_PERIOD: u32 = math::ms_to_ticks(SYSTICK_HZ, 100.0) as u32;
const TIMEOUT: u32 = math::us_to_ticks(SYSTICK_HZ, 1500.0) as u32;

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let Some(peripherals) = cortex_m::Peripherals::take() else {
        loop {
            cortex_m::asm::nop();
        }
    };

    let mut time = TimeService::new(SysTickTimeBase::<SYSCLK_HZ, SYSTICK_HZ>::new(
        peripherals.SYST,
    ));
    let _ = core::hint::black_box(time.init());

    let tsc = time.tsc();
    let mut timeout = time.countdown();
    timeout.start(&tsc, core::hint::black_box(TIMEOUT));

    let mut last_blink = tsc.now();
    let irq = CortexMInterrupts;

    // Exercise every timer path; black_box keeps the optimizer from removing them
    loop {
        timeout.update(&tsc);
        if timeout.is_expired() {
            timeout.start(&tsc, core::hint::black_box(TIMEOUT));
        }

        if tsc.is_elapsed_repetitive(&mut last_blink, BLINK_PERIOD) {
            critical_section::with(&irq, |_| core::hint::black_box(&last_blink));
        }

        core::hint::black_box(&timeout);
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
