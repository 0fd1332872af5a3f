use core::convert::Infallible;
use display_interface::DisplayError;
use display_interface_parallel_gpio::WriteOnlyDataCommand;
use ili9341::{DisplaySize320x480, Ili9341, Orientation};
use stm32g0xx_hal::hal::blocking::delay::DelayMs;
use stm32g0xx_hal::hal::digital::v2::OutputPin;

use crate::interface::GraphicsLcd;

#[derive(Debug)]
pub struct IliError(pub DisplayError);

/// 480x320 landscape ILI9341, drawn through embedded-graphics.
pub type IliLcd<I, R> = GraphicsLcd<Ili9341<I, R>>;

pub fn new_ili<I, R, D>(interface: I, reset: R, delay: &mut D) -> Result<IliLcd<I, R>, IliError>
where
    I: WriteOnlyDataCommand,
    R: OutputPin<Error = Infallible>,
    D: DelayMs<u16>,
{
    let ili = Ili9341::new(
        interface,
        reset,
        delay,
        Orientation::Landscape,
        DisplaySize320x480,
    )
    .map_err(IliError)?;
    Ok(GraphicsLcd::new(ili))
}
