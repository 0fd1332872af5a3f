use crate::display::{format, TextPanel};
use crate::error::Result;
use crate::interface::Lcd;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GateState {
    Waiting,
    /// Terminal, the input moved far enough from its initial reading.
    Armed,
}

/// Holds the plot back until the input is seen to change.
pub struct TriggerGate {
    initial: u16,
    current: u16,
    threshold: u16,
    polls: u32,
    state: GateState,
}

impl TriggerGate {
    pub fn new(initial: u16, threshold: u16) -> Self {
        TriggerGate {
            initial,
            current: initial,
            threshold,
            polls: 0,
            state: GateState::Waiting,
        }
    }

    pub fn poll(&mut self, reading: u16) -> GateState {
        if self.state == GateState::Armed {
            return GateState::Armed;
        }
        self.polls += 1;
        self.current = reading;
        if self.difference().unsigned_abs() >= u32::from(self.threshold) {
            self.state = GateState::Armed;
        }
        self.state
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }

    pub fn initial(&self) -> u16 {
        self.initial
    }

    pub fn current(&self) -> u16 {
        self.current
    }

    pub fn difference(&self) -> i32 {
        i32::from(self.initial) - i32::from(self.current)
    }

    /// Poll count, current reading, initial reading and their difference, one per line.
    pub fn show<LCD, LCDER>(&self, lcd: &mut LCD, panel: &TextPanel) -> Result<(), LCDER>
    where
        LCD: Lcd<Error = LCDER>,
    {
        let polls = format::<LCDER, 12>(format_args!("{}", self.polls))?;
        let current = format::<LCDER, 12>(format_args!("{}", self.current))?;
        let initial = format::<LCDER, 12>(format_args!("{}", self.initial))?;
        let difference = format::<LCDER, 12>(format_args!("{}", self.difference()))?;
        panel.show(
            lcd,
            &[
                polls.as_str(),
                current.as_str(),
                initial.as_str(),
                difference.as_str(),
            ],
        )
    }
}
