use crate::interface::SampleSource;
use crate::Sample;

/// Turns raw readings into plotted samples.
pub struct Sampler<S> {
    source: S,
    divisor: u16,
}

impl<S> Sampler<S>
where
    S: SampleSource,
{
    pub fn new(source: S, divisor: u16) -> Self {
        Sampler {
            source,
            divisor: divisor.max(1),
        }
    }

    pub fn raw(&mut self) -> u16 {
        self.source.read()
    }

    pub fn sample(&mut self) -> Sample {
        let raw = self.raw();
        self.convert(raw)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn convert(&self, raw: u16) -> Sample {
        (raw / self.divisor) as Sample
    }
}
