use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::{Point, Size};

pub struct Color;

impl Color {
    pub const BACKGROUND: Rgb565 = Rgb565::WHITE;
    pub const SIGNAL: Rgb565 = Rgb565::RED;
    pub const AXIS: Rgb565 = Rgb565::BLUE;
    pub const TEXT: Rgb565 = Rgb565::BLACK;
}

pub struct Layout;

impl Layout {
    pub const LINE_PITCH: i32 = 10;
    pub const PARAMS_POSITION: Point = Point::new(0, 0);
    pub const LOOP_AVG_POSITION: Point = Point::new(5, 2);
    pub const LOOP_AVG_SIZE: Size = Size::new(126, 10);
    /// The gate box sits this far in from the bottom-right corner.
    pub const GATE_INSET: i32 = 50;
    pub const GATE_SIZE: Size = Size::new(50, 50);
}

/// Periodic waveform the buffer is seeded with before live samples arrive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeedWave {
    /// Full periods over the length of the buffer.
    pub frequency: f32,
    pub amplitude: f32,
    pub offset: f32,
}

impl SeedWave {
    pub const DEFAULT: SeedWave = SeedWave {
        frequency: 2.0,
        amplitude: 128.0,
        offset: 0.0,
    };
}

/// How the pause between two cycles is derived.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Cadence {
    /// Always sleep this many milliseconds after a cycle.
    FixedDelay(u32),
    /// Sleep whatever is left of this period after a cycle, nothing when overrun.
    FixedPeriod(u32),
}

impl Cadence {
    pub fn pause(&self, elapsed_ms: u32) -> u32 {
        match *self {
            Cadence::FixedDelay(delay) => delay,
            Cadence::FixedPeriod(period) => period.saturating_sub(elapsed_ms),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Trigger {
    /// Minimal raw difference from the initial reading that arms the gate.
    pub threshold: u16,
    /// Wait before the initial reading is taken.
    pub settle_ms: u32,
    pub poll_delay_ms: u32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    pub seed: SeedWave,
    /// Raw readings are divided by this before they are plotted.
    pub input_divisor: u16,
    /// Display height divided by this gives the pixels per sample unit.
    pub vertical_units: i32,
    pub cadence: Cadence,
    pub trigger: Trigger,
    /// Loop average is redrawn every this many cycles.
    pub report_interval: u32,
}

impl Config {
    pub const DEFAULT: Config = Config {
        seed: SeedWave::DEFAULT,
        input_divisor: 10,
        vertical_units: 100,
        cadence: Cadence::FixedDelay(100),
        trigger: Trigger {
            threshold: 150,
            settle_ms: 100,
            poll_delay_ms: 1000,
        },
        report_interval: 10,
    };
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}
