//! Deterministic sensor signal generators
//!
//! Every generator is seeded, so a failing test replays the same samples.

/// Read-noise characteristics of a sensor
#[derive(Debug, Clone, Copy)]
pub struct SensorModel {
    /// Peak amplitude of uniform read noise
    pub noise_amplitude: f32,
    /// Output resolution (0.1 for DHT22-class sensors)
    pub quantization: f32,
}

impl SensorModel {
    /// Typical consumer temperature sensor
    pub fn consumer_grade() -> Self {
        Self {
            noise_amplitude: 0.5,
            quantization: 0.1,
        }
    }

    /// Noise-free, unquantized reference sensor
    pub fn ideal() -> Self {
        Self {
            noise_amplitude: 0.0,
            quantization: 0.0,
        }
    }
}

/// Sample series generator
pub struct SignalGenerator {
    seed: u32,
    model: SensorModel,
}

impl SignalGenerator {
    pub fn new(model: SensorModel) -> Self {
        Self {
            seed: 0x1234_5678,
            model,
        }
    }

    /// Constant true value `level` seen through the sensor
    pub fn constant(&mut self, level: f32, samples: usize) -> Vec<f32> {
        (0..samples).map(|_| self.measure(level)).collect()
    }

    /// Step from `before` to `after` at sample index `at`
    pub fn step(&mut self, before: f32, after: f32, at: usize, samples: usize) -> Vec<f32> {
        (0..samples)
            .map(|i| self.measure(if i < at { before } else { after }))
            .collect()
    }

    /// Linear ramp changing by `slope` per sample
    pub fn ramp(&mut self, start: f32, slope: f32, samples: usize) -> Vec<f32> {
        (0..samples)
            .map(|i| self.measure(start + slope * i as f32))
            .collect()
    }

    fn measure(&mut self, truth: f32) -> f32 {
        let noise = (self.random_float() * 2.0 - 1.0) * self.model.noise_amplitude;
        let measured = truth + noise;

        if self.model.quantization > 0.0 {
            (measured / self.model.quantization).round() * self.model.quantization
        } else {
            measured
        }
    }

    fn random_float(&mut self) -> f32 {
        // Linear congruential generator
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.seed >> 8) as f32 / 16777216.0
    }
}
