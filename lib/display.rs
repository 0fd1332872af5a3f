use core::fmt::{Arguments, Write};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::{Line, Rectangle};
use heapless::String;

use crate::buffer::RollingBuffer;
use crate::config::{Color, Layout};
use crate::error::{Error, Result};
use crate::interface::Lcd;
use crate::scaler::Scaler;
use crate::Sample;

/// Draws the sample history as a polyline, erasing only what the previous frame drew.
pub struct DiffRenderer<const LEN: usize> {
    previous: [Point; LEN],
    drawn: bool,
}

impl<const LEN: usize> DiffRenderer<LEN> {
    pub fn new() -> Self {
        DiffRenderer {
            previous: [Point::zero(); LEN],
            drawn: false,
        }
    }

    pub fn frame<LCD, LCDER>(
        &mut self,
        lcd: &mut LCD,
        scaler: &Scaler,
        samples: &RollingBuffer<Sample, LEN>,
    ) -> Result<(), LCDER>
    where
        LCD: Lcd<Error = LCDER>,
    {
        // Remove old data
        if self.drawn {
            for pair in self.previous.windows(2) {
                lcd.draw_line(Line::new(pair[0], pair[1]), Color::BACKGROUND)
                    .map_err(Error::Lcd)?;
            }
        }
        // Axes go over the erased pixels, the signal goes over the axes
        self.draw_axes(lcd, scaler)?;
        for (i, point) in self.previous.iter_mut().enumerate() {
            *point = scaler.point(i, samples[i]);
        }
        // Draw current data
        for pair in self.previous.windows(2) {
            lcd.draw_line(Line::new(pair[0], pair[1]), Color::SIGNAL)
                .map_err(Error::Lcd)?;
        }
        self.drawn = true;
        Ok(())
    }

    /// Geometry of the last drawn frame, if any.
    pub fn previous(&self) -> Option<&[Point]> {
        if self.drawn {
            Some(&self.previous)
        } else {
            None
        }
    }

    /// Drops the stored geometry, for when the screen was cleared behind the renderer's back.
    pub fn forget(&mut self) {
        self.drawn = false;
    }

    fn draw_axes<LCD, LCDER>(&self, lcd: &mut LCD, scaler: &Scaler) -> Result<(), LCDER>
    where
        LCD: Lcd<Error = LCDER>,
    {
        let size = lcd.size();
        let center = scaler.center();
        let bottom = size.height as i32 - 1;
        let right = size.width as i32 - 1;
        let vertical = Line::new(Point::new(center.x, 0), Point::new(center.x, bottom));
        let horizontal = Line::new(Point::new(0, center.y), Point::new(right, center.y));
        lcd.draw_line(vertical, Color::AXIS).map_err(Error::Lcd)?;
        lcd.draw_line(horizontal, Color::AXIS).map_err(Error::Lcd)?;
        Ok(())
    }
}

impl<const LEN: usize> Default for DiffRenderer<LEN> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed screen region holding a few lines of text, wiped before every update.
pub struct TextPanel {
    area: Rectangle,
}

impl TextPanel {
    pub fn new(top_left: Point, size: Size) -> Self {
        TextPanel {
            area: Rectangle::new(top_left, size),
        }
    }

    pub fn area(&self) -> Rectangle {
        self.area
    }

    pub fn show<LCD, LCDER>(&self, lcd: &mut LCD, lines: &[&str]) -> Result<(), LCDER>
    where
        LCD: Lcd<Error = LCDER>,
    {
        lcd.fill_rect(self.area, Color::BACKGROUND)
            .map_err(Error::Lcd)?;
        let mut position = self.area.top_left;
        for line in lines {
            lcd.write_text(line, position, Color::TEXT)
                .map_err(Error::Lcd)?;
            position.y += Layout::LINE_PITCH;
        }
        Ok(())
    }
}

/// Start-up screen listing the display dimensions.
pub fn show_params<LCD, LCDER>(lcd: &mut LCD) -> Result<(), LCDER>
where
    LCD: Lcd<Error = LCDER>,
{
    let size = lcd.size();
    lcd.clear(Color::BACKGROUND).map_err(Error::Lcd)?;
    let height = format::<LCDER, 16>(format_args!("Height {}", size.height))?;
    let width = format::<LCDER, 16>(format_args!("Width {}", size.width))?;
    let mut position = Layout::PARAMS_POSITION;
    lcd.write_text(&height, position, Color::TEXT)
        .map_err(Error::Lcd)?;
    position.y += Layout::LINE_PITCH;
    lcd.write_text(&width, position, Color::TEXT)
        .map_err(Error::Lcd)?;
    Ok(())
}

pub(crate) fn format<LCDER, const N: usize>(args: Arguments) -> Result<String<N>, LCDER> {
    let mut buffer = String::<N>::new();
    buffer.write_fmt(args).map_err(|_| Error::BufferWrite)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedWave;
    use crate::mock::{Op, RecordingLcd};

    const WAVE: SeedWave = SeedWave {
        frequency: 1.0,
        amplitude: 4.0,
        offset: 0.0,
    };

    fn segments(scaler: &Scaler, samples: &[Sample]) -> Vec<(Point, Point)> {
        samples
            .windows(2)
            .enumerate()
            .map(|(i, pair)| (scaler.point(i, pair[0]), scaler.point(i + 1, pair[1])))
            .collect()
    }

    #[test]
    fn first_frame_draws_without_erasing() {
        let mut lcd = RecordingLcd::new(64, 64);
        let scaler = Scaler::new(lcd.size(), 8, 16);
        let buffer = RollingBuffer::<Sample, 8>::seeded(&WAVE);
        let mut renderer = DiffRenderer::<8>::new();
        assert!(renderer.previous().is_none());

        renderer.frame(&mut lcd, &scaler, &buffer).unwrap();

        assert!(lcd.lines(Color::BACKGROUND).is_empty());
        assert_eq!(lcd.lines(Color::SIGNAL).len(), 7);
        assert_eq!(lcd.visible_segments(), segments(&scaler, buffer.as_slice()));
    }

    #[test]
    fn crosshair_has_both_axes() {
        let mut lcd = RecordingLcd::new(64, 48);
        let scaler = Scaler::new(lcd.size(), 8, 16);
        let buffer = RollingBuffer::<Sample, 8>::seeded(&WAVE);
        DiffRenderer::<8>::new()
            .frame(&mut lcd, &scaler, &buffer)
            .unwrap();

        let axes = lcd.lines(Color::AXIS);
        assert_eq!(
            axes,
            vec![
                Line::new(Point::new(32, 0), Point::new(32, 47)),
                Line::new(Point::new(0, 24), Point::new(63, 24)),
            ]
        );
        // Axes come first so the waveform stays on top
        assert!(matches!(lcd.ops[0], Op::Line(_, color) if color == Color::AXIS));
    }

    #[test]
    fn erase_matches_previous_frame() {
        let mut lcd = RecordingLcd::new(64, 64);
        let scaler = Scaler::new(lcd.size(), 8, 16);
        let mut buffer = RollingBuffer::<Sample, 8>::seeded(&WAVE);
        let mut renderer = DiffRenderer::<8>::new();

        renderer.frame(&mut lcd, &scaler, &buffer).unwrap();
        let first = segments(&scaler, buffer.as_slice());
        lcd.ops.clear();

        buffer.push(10);
        renderer.frame(&mut lcd, &scaler, &buffer).unwrap();

        let erased: Vec<_> = lcd
            .lines(Color::BACKGROUND)
            .iter()
            .map(|line| (line.start, line.end))
            .collect();
        assert_eq!(erased, first);
    }

    #[test]
    fn axes_drawn_between_erase_and_signal() {
        let mut lcd = RecordingLcd::new(64, 64);
        let scaler = Scaler::new(lcd.size(), 8, 16);
        let mut buffer = RollingBuffer::<Sample, 8>::seeded(&WAVE);
        let mut renderer = DiffRenderer::<8>::new();
        renderer.frame(&mut lcd, &scaler, &buffer).unwrap();
        lcd.ops.clear();

        buffer.push(-6);
        renderer.frame(&mut lcd, &scaler, &buffer).unwrap();

        let colors: Vec<_> = lcd
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(_, color) => Some(*color),
                _ => None,
            })
            .collect();
        let mut expected = vec![Color::BACKGROUND; 7];
        expected.extend([Color::AXIS; 2]);
        expected.extend([Color::SIGNAL; 7]);
        assert_eq!(colors, expected);
    }

    #[test]
    fn only_current_frame_stays_visible() {
        let mut lcd = RecordingLcd::new(64, 64);
        let scaler = Scaler::new(lcd.size(), 8, 16);
        let mut buffer = RollingBuffer::<Sample, 8>::seeded(&WAVE);
        let mut renderer = DiffRenderer::<8>::new();

        for value in [10, -2, 7, 7, 0, 3, -5, 1, 9, 4] {
            buffer.push(value);
            renderer.frame(&mut lcd, &scaler, &buffer).unwrap();
            assert_eq!(lcd.visible_segments(), segments(&scaler, buffer.as_slice()));
        }
    }

    #[test]
    fn previous_geometry_tracks_last_frame() {
        let mut lcd = RecordingLcd::new(64, 64);
        let scaler = Scaler::new(lcd.size(), 8, 16);
        let mut buffer = RollingBuffer::<Sample, 8>::seeded(&WAVE);
        let mut renderer = DiffRenderer::<8>::new();
        renderer.frame(&mut lcd, &scaler, &buffer).unwrap();
        buffer.push(2);
        renderer.frame(&mut lcd, &scaler, &buffer).unwrap();

        let expected: Vec<Point> = (0..8).map(|i| scaler.point(i, buffer[i])).collect();
        assert_eq!(renderer.previous().unwrap(), expected.as_slice());

        renderer.forget();
        assert!(renderer.previous().is_none());
    }

    #[test]
    fn panel_clears_before_writing() {
        let mut lcd = RecordingLcd::new(128, 128);
        let panel = TextPanel::new(Point::new(78, 78), Size::new(50, 50));
        panel.show(&mut lcd, &["1", "2"]).unwrap();

        assert_eq!(
            lcd.ops,
            vec![
                Op::Fill(panel.area(), Color::BACKGROUND),
                Op::Text("1".into(), Point::new(78, 78), Color::TEXT),
                Op::Text("2".into(), Point::new(78, 88), Color::TEXT),
            ]
        );
    }

    #[test]
    fn params_list_dimensions() {
        let mut lcd = RecordingLcd::new(480, 320);
        show_params(&mut lcd).unwrap();
        assert_eq!(lcd.ops[0], Op::Clear(Color::BACKGROUND));
        assert_eq!(lcd.texts(), vec!["Height 320", "Width 480"]);
    }

    #[test]
    fn format_overflow_is_reported() {
        let result = format::<(), 4>(format_args!("{}", 123_456));
        assert_eq!(result, Err(Error::BufferWrite));
    }
}
