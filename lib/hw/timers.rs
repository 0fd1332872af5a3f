use stm32g0xx_hal::hal::blocking::delay::DelayMs;
use stm32g0xx_hal::rcc::Rcc;
use stm32g0xx_hal::stm32g0::stm32g070::{RCC, TIM3};

use crate::hw::helper::TIMER_CLOCK_HZ;
use crate::interface::Clock;

const TICK_HZ: u32 = 1_000;

/// TIM3 free-running at 1 kHz, widened to 32 bits in software.
pub struct MillisCounter {
    timer: TIM3,
    last: u16,
    wraps: u32,
}

impl MillisCounter {
    pub fn new(pac_timer: TIM3, rcc: &mut Rcc) -> Self {
        MillisCounter::enable_clock_and_reset(rcc);
        let mut counter = MillisCounter {
            timer: pac_timer,
            last: 0,
            wraps: 0,
        };
        counter.configure();
        counter
    }

    pub fn start(&mut self) {
        self.timer.cr1.modify(|_, w| w.cen().set_bit());
    }

    /// Must be called at least once per 65 s so no wrap goes unseen.
    pub fn millis(&mut self) -> u32 {
        let count = self.timer.cnt.read().cnt_l().bits();
        if count < self.last {
            self.wraps = self.wraps.wrapping_add(1);
        }
        self.last = count;
        (self.wraps << 16) | u32::from(count)
    }

    fn configure(&mut self) {
        // Internal clock, no slave mode
        self.timer.smcr.write(|w| unsafe { w.sms().bits(0b000) });
        self.timer
            .psc
            .write(|w| unsafe { w.psc().bits((TIMER_CLOCK_HZ / TICK_HZ - 1) as u16) });
        // Set ARR to max value
        self.timer
            .arr
            .write(|w| unsafe { w.arr_l().bits(u16::max_value()) });

        // Trigger update event to load the registers
        self.timer.cr1.modify(|_, w| w.urs().set_bit());
        self.timer.egr.write(|w| w.ug().set_bit());
        self.timer.cr1.modify(|_, w| w.urs().clear_bit());
    }

    fn enable_clock_and_reset(_: &mut Rcc) {
        let rcc = unsafe { &(*RCC::ptr()) };
        rcc.apbenr1.modify(|_, w| w.tim3en().set_bit());
        rcc.apbrstr1.modify(|_, w| w.tim3rst().set_bit());
        rcc.apbrstr1.modify(|_, w| w.tim3rst().clear_bit());
    }
}

pub struct HwClock<D> {
    counter: MillisCounter,
    delay: D,
}

impl<D> HwClock<D>
where
    D: DelayMs<u16>,
{
    pub fn new(mut counter: MillisCounter, delay: D) -> Self {
        counter.start();
        HwClock { counter, delay }
    }
}

impl<D> Clock for HwClock<D>
where
    D: DelayMs<u16>,
{
    fn now_ms(&mut self) -> u32 {
        self.counter.millis()
    }

    fn delay_ms(&mut self, ms: u32) {
        let mut remaining = ms;
        while remaining > 0 {
            let chunk = remaining.min(u32::from(u16::max_value()));
            self.delay.delay_ms(chunk as u16);
            remaining -= chunk;
        }
    }
}
