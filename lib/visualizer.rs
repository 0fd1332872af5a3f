use embedded_graphics::prelude::Point;

use crate::buffer::RollingBuffer;
use crate::config::{Color, Config, Layout};
use crate::display::{show_params, DiffRenderer, TextPanel};
use crate::error::{Error, Result};
use crate::gate::{GateState, TriggerGate};
use crate::interface::{Clock, Lcd, SampleSource};
use crate::sampler::Sampler;
use crate::scaler::Scaler;
use crate::timing::LoopTimer;
use crate::Sample;

/// Owns every piece of state the sample/plot loop touches.
pub struct Visualizer<LCD, S, C, const LEN: usize> {
    lcd: LCD,
    sampler: Sampler<S>,
    clock: C,
    config: Config,
    buffer: RollingBuffer<Sample, LEN>,
    scaler: Scaler,
    renderer: DiffRenderer<LEN>,
    timer: LoopTimer,
    gate_panel: TextPanel,
    timer_panel: TextPanel,
}

impl<LCD, LCDER, S, C, const LEN: usize> Visualizer<LCD, S, C, LEN>
where
    LCD: Lcd<Error = LCDER>,
    S: SampleSource,
    C: Clock,
{
    pub fn new(lcd: LCD, source: S, clock: C, config: Config) -> Self {
        let size = lcd.size();
        info!("display {=u32}x{=u32}", size.width, size.height);
        let gate_corner = Point::new(
            size.width as i32 - Layout::GATE_INSET,
            size.height as i32 - Layout::GATE_INSET,
        );
        Visualizer {
            sampler: Sampler::new(source, config.input_divisor),
            scaler: Scaler::new(size, LEN, config.vertical_units),
            buffer: RollingBuffer::seeded(&config.seed),
            renderer: DiffRenderer::new(),
            timer: LoopTimer::new(config.report_interval),
            gate_panel: TextPanel::new(gate_corner, Layout::GATE_SIZE),
            timer_panel: TextPanel::new(Layout::LOOP_AVG_POSITION, Layout::LOOP_AVG_SIZE),
            lcd,
            clock,
            config,
        }
    }

    /// Parameter screen, then the trigger gate, then a blank screen for the plot.
    pub fn start(&mut self) -> Result<(), LCDER> {
        show_params(&mut self.lcd)?;
        let polls = self.wait_for_trigger()?;
        info!("armed after {=u32} polls", polls);
        self.lcd.clear(Color::BACKGROUND).map_err(Error::Lcd)?;
        self.renderer.forget();
        Ok(())
    }

    /// Blocks until the input moves by the trigger threshold. Never times out.
    pub fn wait_for_trigger(&mut self) -> Result<u32, LCDER> {
        let mut gate = self.arm_gate();
        while self.poll_trigger(&mut gate)? == GateState::Waiting {
            self.clock.delay_ms(self.config.trigger.poll_delay_ms);
        }
        Ok(gate.polls())
    }

    /// Takes the reference reading the gate compares against, settling before and after it.
    pub fn arm_gate(&mut self) -> TriggerGate {
        self.clock.delay_ms(self.config.trigger.settle_ms);
        let initial = self.sampler.raw();
        info!("gate initial reading {=u16}", initial);
        self.clock.delay_ms(self.config.trigger.settle_ms);
        TriggerGate::new(initial, self.config.trigger.threshold)
    }

    /// One gate poll: read, evaluate and show the readout.
    pub fn poll_trigger(&mut self, gate: &mut TriggerGate) -> Result<GateState, LCDER> {
        let reading = self.sampler.raw();
        let state = gate.poll(reading);
        gate.show(&mut self.lcd, &self.gate_panel)?;
        Ok(state)
    }

    /// Sample, plot, account the time, then pause for the cadence.
    pub fn cycle(&mut self) -> Result<(), LCDER> {
        let started = self.clock.now_ms();
        self.timer.start(started);

        let sample = self.sampler.sample();
        self.buffer.push(sample);
        self.renderer
            .frame(&mut self.lcd, &self.scaler, &self.buffer)?;

        self.timer.finish(self.clock.now_ms());
        if self.timer.due() {
            debug!("avg loop {=f32} ms", self.timer.average_ms());
            self.timer.show(&mut self.lcd, &self.timer_panel)?;
        }

        // The pause also absorbs the time spent on the report
        let busy = self.clock.now_ms().wrapping_sub(started);
        let pause = self.config.cadence.pause(busy);
        self.clock.delay_ms(pause);
        Ok(())
    }

    /// Runs the plot loop until a display error stops it.
    pub fn run(&mut self) -> Result<(), LCDER> {
        loop {
            self.cycle()?;
        }
    }

    pub fn buffer(&self) -> &RollingBuffer<Sample, LEN> {
        &self.buffer
    }

    pub fn timer(&self) -> &LoopTimer {
        &self.timer
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    pub fn lcd(&self) -> &LCD {
        &self.lcd
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn sampler(&self) -> &Sampler<S> {
        &self.sampler
    }
}
