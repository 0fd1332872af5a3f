use crate::display::{format, TextPanel};
use crate::error::Result;
use crate::interface::Lcd;

/// Running average of cycle durations, kept for the whole uptime.
pub struct LoopTimer {
    started: u32,
    total_ms: u64,
    cycles: u32,
    average_ms: f32,
    report_interval: u32,
}

impl LoopTimer {
    pub fn new(report_interval: u32) -> Self {
        LoopTimer {
            started: 0,
            total_ms: 0,
            cycles: 0,
            average_ms: 0.0,
            report_interval: report_interval.max(1),
        }
    }

    pub fn start(&mut self, now_ms: u32) {
        self.started = now_ms;
    }

    /// Closes the cycle opened by `start` and returns its duration.
    pub fn finish(&mut self, now_ms: u32) -> u32 {
        let elapsed = now_ms.wrapping_sub(self.started);
        self.record(elapsed);
        elapsed
    }

    pub fn record(&mut self, elapsed_ms: u32) {
        self.total_ms += u64::from(elapsed_ms);
        self.cycles += 1;
        self.average_ms = self.total_ms as f32 / self.cycles as f32;
    }

    pub fn average_ms(&self) -> f32 {
        self.average_ms
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// True on every `report_interval`-th cycle.
    pub fn due(&self) -> bool {
        self.cycles > 0 && self.cycles % self.report_interval == 0
    }

    pub fn show<LCD, LCDER>(&self, lcd: &mut LCD, panel: &TextPanel) -> Result<(), LCDER>
    where
        LCD: Lcd<Error = LCDER>,
    {
        let text = format::<LCDER, 32>(format_args!("Avg Loop: {:.2} ms", self.average_ms))?;
        panel.show(lcd, &[text.as_str()])
    }
}
