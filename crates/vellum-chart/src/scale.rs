//! Mappings from data space to pixel space.

/// Continuous mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (`range.0 > range.1`), as value axes usually
/// are, with larger values drawn higher up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Position of `value` in the domain, 0 at the start and 1 at the end.
    ///
    /// A degenerate domain maps everything to the middle.
    pub fn normalize(&self, value: f64) -> f64 {
        let (min, max) = self.domain;
        if (max - min).abs() < f64::EPSILON {
            return 0.5;
        }
        (value - min) / (max - min)
    }

    /// Inverse of [`LinearScale::normalize`].
    pub fn denormalize(&self, normalized: f64) -> f64 {
        let (min, max) = self.domain;
        min + normalized * (max - min)
    }

    pub fn map(&self, value: f64) -> f32 {
        let (start, end) = self.range;
        start + (end - start) * self.normalize(value) as f32
    }

    pub fn invert(&self, position: f32) -> f64 {
        let (start, end) = self.range;
        if (end - start).abs() < f32::EPSILON {
            return self.denormalize(0.5);
        }
        self.denormalize(((position - start) / (end - start)) as f64)
    }
}

/// Evenly sized bands for a sequence of categories.
///
/// `padding` is the fraction of each step left empty, split evenly on
/// both sides of the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub range: (f32, f32),
    pub padding: f32,
}

impl BandScale {
    pub fn new(count: usize, range: (f32, f32)) -> Self {
        Self {
            count,
            range,
            padding: 0.0,
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding.clamp(0.0, 1.0);
        self
    }

    /// Distance between the starts of two neighbouring bands.
    pub fn step(&self) -> f32 {
        (self.range.1 - self.range.0) / self.count.max(1) as f32
    }

    pub fn bandwidth(&self) -> f32 {
        self.step() * (1.0 - self.padding)
    }

    pub fn start(&self, index: usize) -> f32 {
        self.range.0 + self.step() * (index as f32 + self.padding / 2.0)
    }

    pub fn center(&self, index: usize) -> f32 {
        self.start(index) + self.bandwidth() / 2.0
    }

    /// Split band `index` among `parts` series and return the center of
    /// sub-band `part`.
    pub fn sub_center(&self, index: usize, part: usize, parts: usize) -> f32 {
        let width = self.bandwidth() / parts.max(1) as f32;
        self.start(index) + width * (part as f32 + 0.5)
    }
}
