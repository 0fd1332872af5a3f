use core::f32::consts::PI;
use core::ops::Index;

use crate::config::SeedWave;
use crate::Sample;

/// Fixed-length sample history. Always full, index 0 is the oldest sample.
pub struct RollingBuffer<T, const LEN: usize> {
    data: [T; LEN],
}

impl<T: Copy, const LEN: usize> RollingBuffer<T, LEN> {
    pub fn from_array(data: [T; LEN]) -> Self {
        RollingBuffer { data }
    }

    /// Drops the oldest sample and appends `value` as the newest.
    pub fn push(&mut self, value: T) {
        if LEN == 0 {
            return;
        }
        self.data.copy_within(1.., 0);
        self.data[LEN - 1] = value;
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub const fn len(&self) -> usize {
        LEN
    }

    pub const fn is_empty(&self) -> bool {
        LEN == 0
    }
}

impl<const LEN: usize> RollingBuffer<Sample, LEN> {
    pub fn seeded(wave: &SeedWave) -> Self {
        let mut data = [0; LEN];
        for (i, value) in data.iter_mut().enumerate() {
            *value = seed_value(wave, i, LEN);
        }
        RollingBuffer { data }
    }
}

impl<T, const LEN: usize> Index<usize> for RollingBuffer<T, LEN> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

fn seed_value(wave: &SeedWave, index: usize, len: usize) -> Sample {
    let angle = 2.0 * PI * wave.frequency * index as f32 / len as f32;
    libm::roundf(wave.offset + wave.amplitude * libm::sinf(angle)) as Sample
}
