//! Test doubles for the display, the analog input and the time base.

use std::string::String;
use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::{Line, Rectangle};

use crate::config::Color;
use crate::interface::{Clock, Lcd, SampleSource};

/// Replays readings in order, then keeps returning the last one.
pub struct ScriptedSource {
    readings: Vec<u16>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(readings: &[u16]) -> Self {
        ScriptedSource {
            readings: readings.to_vec(),
            position: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.position
    }
}

impl SampleSource for ScriptedSource {
    fn read(&mut self) -> u16 {
        let index = self.position.min(self.readings.len() - 1);
        self.position += 1;
        self.readings[index]
    }
}

/// Time only moves on `delay_ms` or by `step_ms` on every `now_ms` call.
pub struct ManualClock {
    pub now: u32,
    pub step_ms: u32,
    pub delays: Vec<u32>,
}

impl ManualClock {
    pub fn new(start: u32, step_ms: u32) -> Self {
        ManualClock {
            now: start,
            step_ms,
            delays: Vec::new(),
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> u32 {
        let now = self.now;
        self.now = self.now.wrapping_add(self.step_ms);
        now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        self.now = self.now.wrapping_add(ms);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(Rgb565),
    Line(Line, Rgb565),
    Fill(Rectangle, Rgb565),
    Text(String, Point, Rgb565),
}

/// Records every drawing call instead of touching pixels.
pub struct RecordingLcd {
    pub size: Size,
    pub ops: Vec<Op>,
    /// Every call fails once this many operations are recorded.
    pub fail_after: Option<usize>,
}

impl RecordingLcd {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingLcd {
            size: Size::new(width, height),
            ops: Vec::new(),
            fail_after: None,
        }
    }

    fn record(&mut self, op: Op) -> Result<(), ()> {
        match self.fail_after {
            Some(limit) if self.ops.len() >= limit => Err(()),
            _ => {
                self.ops.push(op);
                Ok(())
            }
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self, color: Rgb565) -> Vec<Line> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(line, c) if *c == color => Some(*line),
                _ => None,
            })
            .collect()
    }

    /// Replays the recorded lines and returns the plot segments still visible.
    pub fn visible_segments(&self) -> Vec<(Point, Point)> {
        let mut visible: Vec<(Point, Point)> = Vec::new();
        for op in &self.ops {
            match op {
                Op::Clear(_) => visible.clear(),
                Op::Line(line, color) if *color == Color::BACKGROUND => {
                    visible.retain(|segment| *segment != (line.start, line.end));
                }
                Op::Line(line, color) if *color == Color::SIGNAL => {
                    let segment = (line.start, line.end);
                    if !visible.contains(&segment) {
                        visible.push(segment);
                    }
                }
                _ => {}
            }
        }
        visible
    }
}

impl Lcd for RecordingLcd {
    type Error = ();

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), ()> {
        self.record(Op::Clear(color))
    }

    fn draw_line(&mut self, line: Line, color: Rgb565) -> Result<(), ()> {
        self.record(Op::Line(line, color))
    }

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), ()> {
        self.record(Op::Fill(area, color))
    }

    fn write_text(&mut self, text: &str, position: Point, color: Rgb565) -> Result<(), ()> {
        self.record(Op::Text(String::from(text), position, color))
    }
}
