use cortex_m::peripheral::SYST;
use display_interface_parallel_gpio::PGPIO8BitInterface;
use stm32g0xx_hal::gpio::gpioa::{PA1, PA4, PA5};
use stm32g0xx_hal::gpio::gpiob::{PB0, PB1, PB2, PB3, PB4, PB5, PB6, PB7, PB8, PB9};
use stm32g0xx_hal::gpio::{Analog, Output, PushPull};
use stm32g0xx_hal::prelude::OutputPin;
use stm32g0xx_hal::rcc::{Config, PllConfig, Rcc, RccExt};
use stm32g0xx_hal::stm32g0::stm32g070::RCC;
use stm32g0xx_hal::timer::delay::Delay;

use crate::hw::adc::Adc as HwAdc;
use crate::hw::lcd::{new_ili, IliError, IliLcd};
use crate::hw::timers::HwClock;

/// APB timer clock produced by `init_clock`.
pub const TIMER_CLOCK_HZ: u32 = 64_000_000;

pub fn init_clock(pac_rcc: RCC) -> Rcc {
    // ((16 MHz / 4) * 32) / 2 = 64 MHz
    let pll_config = PllConfig::with_hsi(4, 32, 2);
    pac_rcc.freeze(Config::pll().pll_cfg(pll_config))
}

// PB0..PB7 - LCD_D0..LCD_D7
type LcdD0 = PB0<Output<PushPull>>;
type LcdD1 = PB1<Output<PushPull>>;
type LcdD2 = PB2<Output<PushPull>>;
type LcdD3 = PB3<Output<PushPull>>;
type LcdD4 = PB4<Output<PushPull>>;
type LcdD5 = PB5<Output<PushPull>>;
type LcdD6 = PB6<Output<PushPull>>;
type LcdD7 = PB7<Output<PushPull>>;
// PB8 - LCD_DC (Command[Low]/Data[High])
type LcdDC = PB8<Output<PushPull>>;
// PB9 - LCD_WR (Write signal)
type LcdWR = PB9<Output<PushPull>>;
// PA1 - ADC signal input
type InputChannel = PA1<Analog>;

// PA4 - LCD_RST (Reset)
pub type LcdRst = PA4<Output<PushPull>>;
// PA5 - LCD_RD (Read signal), held high, the panel is write only
pub type LcdRD = PA5<Output<PushPull>>;

pub type Adc = HwAdc<InputChannel>;
pub type BoardClock = HwClock<Delay<SYST>>;
pub type LcdInterface =
    PGPIO8BitInterface<LcdD0, LcdD1, LcdD2, LcdD3, LcdD4, LcdD5, LcdD6, LcdD7, LcdDC, LcdWR>;
pub type HwLcd = IliLcd<LcdInterface, LcdRst>;

pub fn init_lcd(
    interface: LcdInterface,
    lcd_rst: LcdRst,
    lcd_rd: LcdRD,
    delay: &mut Delay<SYST>,
) -> Result<HwLcd, IliError> {
    let mut lcd_rd = lcd_rd;
    lcd_rd.set_high().unwrap();
    new_ili(interface, lcd_rst, delay)
}
