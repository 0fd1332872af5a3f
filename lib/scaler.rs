use embedded_graphics::prelude::{Point, Size};

use crate::Sample;

/// Maps buffer positions and sample values to display pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scaler {
    len: usize,
    width: i32,
    center: Point,
    scale_y: i32,
}

impl Scaler {
    /// `vertical_units` is how many sample units span the display height.
    pub fn new(size: Size, len: usize, vertical_units: i32) -> Self {
        let width = size.width as i32;
        let height = size.height as i32;
        Scaler {
            len,
            width,
            center: Point::new(width / 2, height / 2),
            scale_y: if vertical_units > 0 {
                height / vertical_units
            } else {
                0
            },
        }
    }

    /// Index 0 lands on the first column and index `len - 1` on the last one.
    pub fn x(&self, index: usize) -> i32 {
        if self.len < 2 || self.width < 1 {
            return 0;
        }
        let span = (self.len - 1) as i64;
        let numerator = index as i64 * (self.width - 1) as i64;
        ((2 * numerator + span) / (2 * span)) as i32
    }

    pub fn y(&self, value: Sample) -> i32 {
        self.center.y - value * self.scale_y
    }

    pub fn point(&self, index: usize, value: Sample) -> Point {
        Point::new(self.x(index), self.y(value))
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn scale_y(&self) -> i32 {
        self.scale_y
    }
}
