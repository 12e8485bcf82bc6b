#![cfg_attr(not(test), no_std)]

#[cfg(target_os = "none")]
use defmt_rtt as _; // global logger
#[cfg(target_os = "none")]
use panic_probe as _;

pub mod alarm;
pub mod clock;
pub mod debounce;
pub mod display;
pub mod error;
pub mod hw;
pub mod input;
pub mod refresh;
pub mod tally;

use alarm::Duty;
use debounce::Scope;

/// Presses needed before the device stops.
pub const THRESHOLD: u32 = 20;

/// Minimum interval between two accepted edges.
pub const DEBOUNCE_MS: u32 = 300;
pub const DEBOUNCE_SCOPE: Scope = Scope::Shared;

/// Idle delay of the refresh loop, bounds the display latency.
pub const REFRESH_PERIOD_MS: u16 = 100;

/// Clock resolution, one tick per millisecond.
pub const TICK_HZ: u32 = 1_000;

// ~1 kHz square wave at 64/351 of the period
pub const TONE_HZ: u32 = 1_017;
pub const TONE_DUTY: Duty = Duty::new(64, 351);

pub const DISPLAY_ADDRESS: u8 = 0x3c;
pub const I2C_KHZ: u32 = 400;

#[cfg(target_os = "none")]
defmt::timestamp!("{=u32}", { clock::now() });

/// Parks the core forever. Buttons are masked, the clock and the running
/// buzzers are left alone.
#[cfg(target_os = "none")]
pub fn halt() -> ! {
    cortex_m::peripheral::NVIC::mask(stm32g0xx_hal::stm32::Interrupt::EXTI4_15);
    loop {
        cortex_m::asm::wfi();
    }
}
