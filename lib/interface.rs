use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Point, Primitive, Size};
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;

/// Drawing operations the plot needs from a display.
pub trait Lcd {
    type Error;
    fn size(&self) -> Size;
    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error>;
    fn draw_line(&mut self, line: Line, color: Rgb565) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error>;
    /// Writes a single line of text with its top-left corner at `position`.
    fn write_text(&mut self, text: &str, position: Point, color: Rgb565)
        -> Result<(), Self::Error>;
}

/// Analog input delivering one raw reading per call.
pub trait SampleSource {
    fn read(&mut self) -> u16;
}

/// Millisecond time base. `now_ms` wraps around, consumers use wrapping arithmetic.
pub trait Clock {
    fn now_ms(&mut self) -> u32;
    fn delay_ms(&mut self, ms: u32);
}

/// Implements [`Lcd`] for anything `embedded-graphics` can draw on.
pub struct GraphicsLcd<D> {
    target: D,
}

impl<D> GraphicsLcd<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    pub fn new(target: D) -> Self {
        GraphicsLcd { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn release(self) -> D {
        self.target
    }
}

impl<D> Lcd for GraphicsLcd<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    type Error = D::Error;

    fn size(&self) -> Size {
        self.target.size()
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        self.target.clear(color)
    }

    fn draw_line(&mut self, line: Line, color: Rgb565) -> Result<(), Self::Error> {
        line.into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
    }

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        area.into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }

    fn write_text(
        &mut self,
        text: &str,
        position: Point,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(&FONT_6X10, color);
        Text::with_baseline(text, position, style, Baseline::Top).draw(&mut self.target)?;
        Ok(())
    }
}
