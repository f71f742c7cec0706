use ndarray::Array1;
use num::complex::Complex32;
use thiserror::Error;

use crate::{
    helper::{field_decibels, wave_number, wavelength},
    sweep::AngleSweep,
    taper::Taper,
};

// Geometry and electrical parameters of a uniform linear array. Spacing is
// given in wavelengths; the physical spacing is derived from the frequency.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayConfig {
    pub num_elements: usize,
    pub spacing: f32,
    pub freq_ghz: f32,
    pub steering_deg: f32,
    pub taper: Taper,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        ArrayConfig {
            num_elements: 8,
            spacing: 0.5,
            freq_ghz: 3.0,
            steering_deg: 30.,
            taper: Taper::Uniform,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    // A single element has no interference pattern to speak of.
    #[error("an array needs at least 2 elements, got {0}")]
    TooFewElements(usize),
    #[error("element spacing must be positive, got {0} wavelengths")]
    NonPositiveSpacing(f32),
    #[error("frequency must be positive, got {0} GHz")]
    NonPositiveFrequency(f32),
    #[error("steering angle {0}° lies outside [-90°, 90°]")]
    SteeringOutOfRange(f32),
}

impl ArrayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_elements < 2 {
            return Err(ConfigError::TooFewElements(self.num_elements));
        }
        if !(self.spacing > 0.) {
            return Err(ConfigError::NonPositiveSpacing(self.spacing));
        }
        if !(self.freq_ghz > 0.) {
            return Err(ConfigError::NonPositiveFrequency(self.freq_ghz));
        }
        if !(-90. ..=90.).contains(&self.steering_deg) {
            return Err(ConfigError::SteeringOutOfRange(self.steering_deg));
        }
        Ok(())
    }
}

// The computed angular power pattern: one dB value per sweep angle,
// normalized so that the global peak sits at exactly 0 dB. Values are not
// clipped; the display floor is a rendering concern.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    angles: Array1<f32>,
    power_db: Array1<f32>,
}

impl Pattern {
    pub fn angles(&self) -> Array1<f32> {
        self.angles.clone()
    }

    pub fn angles_ref(&self) -> &Array1<f32> {
        &self.angles
    }

    pub fn power_db(&self) -> Array1<f32> {
        self.power_db.clone()
    }

    pub fn power_db_ref(&self) -> &Array1<f32> {
        &self.power_db
    }

    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.angles
            .iter()
            .copied()
            .zip(self.power_db.iter().copied())
    }

    // Pattern with every value below the floor pulled up to it. Used for
    // display, where deep nulls would otherwise run off the chart.
    pub fn clipped(&self, floor_db: f32) -> Array1<f32> {
        self.power_db.mapv(|x| x.max(floor_db))
    }

    pub fn peak_index(&self) -> usize {
        self.power_db
            .iter()
            .enumerate()
            .max_by(|x, y| x.1.total_cmp(y.1))
            .unwrap()
            .0
    }

    // Angle of the main lobe, in radians.
    pub fn peak_angle(&self) -> f32 {
        self.angles[self.peak_index()]
    }

    // Angular width of the main lobe between its -3 dB crossings, in radians.
    // If a crossing falls outside the sweep the sweep edge is used.
    pub fn half_power_beamwidth(&self) -> f32 {
        let peak = self.peak_index();
        let mut lo = peak;
        while lo > 0 && self.power_db[lo - 1] > -3. {
            lo -= 1;
        }
        let mut hi = peak;
        while hi + 1 < self.power_db.len() && self.power_db[hi + 1] > -3. {
            hi += 1;
        }
        self.angles[hi] - self.angles[lo]
    }
}

/**
Computes the normalized far field array factor of a uniform linear array over
the given sweep:

```text
AF(θ) = Σₙ wₙ·exp(j(k·d·n·sin(θ) + n·φ))
```

where k is the wave number, d the physical element spacing, wₙ the taper
weights and φ the progressive phase that points the main lobe at the steering
angle. The magnitude is normalized against the single global peak over the
whole sweep and converted to field decibels, so the result is ≤ 0 everywhere
with equality at the peak.

Grating lobes for spacings of a wavelength and up are real physical behavior
and come through untouched.
*/
pub fn compute_pattern(config: &ArrayConfig, sweep: &AngleSweep) -> Result<Pattern, ConfigError> {
    config.validate()?;

    const i: Complex32 = Complex32::new(0., 1.);

    let λ = wavelength(config.freq_ghz * 1e9);
    let k = wave_number(λ);
    let d = config.spacing * λ;
    // Inter-element phase increment steering the beam.
    let φ = -k * d * config.steering_deg.to_radians().sin();
    let weights = config.taper.weights(config.num_elements);

    let af = sweep
        .iter()
        .map(|θ| {
            let mut acc = Complex32::new(0., 0.);
            for (n, w) in weights.iter().enumerate() {
                let n = n as f32;
                acc += *w * (i * (k * d * n * θ.sin() + n * φ)).exp();
            }
            acc
        })
        .collect::<Array1<Complex32>>();

    // Global peak normalization, taken once after the full sweep. The peak is
    // positive for any valid config since the weights are positive.
    let peak = af
        .iter()
        .map(|x| x.norm())
        .max_by(|x, y| x.total_cmp(y))
        .unwrap();

    let power_db = af.mapv(|x| field_decibels(x.norm() / peak));

    Ok(Pattern {
        angles: sweep.angles().clone(),
        power_db,
    })
}
