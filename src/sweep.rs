use std::f32::consts::PI;

use ndarray::Array1;

pub const DEFAULT_SAMPLES: usize = 1000;

// Represents the set of observation angles the pattern is evaluated at, in
// radians over [-π/2, π/2]. Samples are strictly increasing and mirrored
// around broadside, so every angle has an exact floating point negative
// counterpart.
#[derive(Clone)]
pub struct AngleSweep {
    angles: Array1<f32>,
}

impl AngleSweep {
    pub fn full(samples: usize) -> AngleSweep {
        assert!(samples >= 2);
        let step = PI / (samples - 1) as f32;
        let mut angles = Array1::zeros(samples);
        // Fill outside-in so that angles[j] == -angles[samples - 1 - j] holds
        // bit for bit. For an odd count the middle sample stays exactly 0.
        for j in 0..samples / 2 {
            let a = PI / 2. - step * j as f32;
            angles[j] = -a;
            angles[samples - 1 - j] = a;
        }
        AngleSweep { angles }
    }

    pub fn start(&self) -> f32 {
        self.angles[0]
    }

    pub fn end(&self) -> f32 {
        self.angles[self.angles.len() - 1]
    }

    pub fn sample_count(&self) -> usize {
        self.angles.len()
    }

    // Nominal spacing between adjacent samples.
    pub fn step(&self) -> f32 {
        PI / (self.angles.len() - 1) as f32
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.angles.iter().copied()
    }

    pub fn angles(&self) -> &Array1<f32> {
        &self.angles
    }
}

impl Default for AngleSweep {
    fn default() -> Self {
        AngleSweep::full(DEFAULT_SAMPLES)
    }
}

impl From<AngleSweep> for Array1<f32> {
    fn from(sweep: AngleSweep) -> Self {
        sweep.angles
    }
}
