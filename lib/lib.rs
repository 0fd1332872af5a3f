#![cfg_attr(not(test), no_std)]

#[cfg(feature = "hardware")]
use core::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "hardware")]
use defmt_rtt as _; // global logger
#[cfg(feature = "hardware")]
use panic_probe as _;

#[macro_use]
mod log;

pub mod buffer;
pub mod config;
pub mod display;
pub mod error;
pub mod gate;
#[cfg(feature = "hardware")]
pub mod hw;
pub mod interface;
pub mod sampler;
pub mod scaler;
pub mod timing;
pub mod visualizer;

#[cfg(test)]
mod mock;

/// A single plotted value. Seeded values may be negative, live ones are `raw / divisor`.
pub type Sample = i32;

/// Number of samples kept on screen.
pub const BUFFER_LEN: usize = 128;

#[cfg(feature = "hardware")]
static COUNT: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "hardware")]
defmt::timestamp!("{=usize}", {
    let n = COUNT.load(Ordering::Relaxed);
    COUNT.store(n + 1, Ordering::Relaxed);
    n
});

/// Terminates the application and makes `probe-run` exit with exit-code = 0
#[cfg(feature = "hardware")]
pub fn exit() -> ! {
    loop {
        cortex_m::asm::bkpt();
    }
}
