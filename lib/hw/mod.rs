mod adc;
mod helper;
mod lcd;
mod timers;

pub use adc::Adc as HwAdc;
pub use helper::*;
pub use lcd::{IliError, IliLcd};
pub use timers::{HwClock, MillisCounter};
