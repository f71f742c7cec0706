use std::f32::consts::PI;

// Rounded speed of light, 3e8 rather than the exact 299_792_458. The reference
// patterns for this model are computed with the rounded value.
pub const SPEED_OF_LIGHT: f32 = 3e8;

pub fn wavelength(f: f32) -> f32 {
    SPEED_OF_LIGHT / f
}

// Spatial frequency of the radiated wave, k = 2π/λ.
pub fn wave_number(λ: f32) -> f32 {
    2. * PI / λ
}

// Decibels of a field quantity (voltage-like, hence the factor 20).
pub fn field_decibels(x: f32) -> f32 {
    20. * x.log10()
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::{field_decibels, wave_number, wavelength};

    #[test]
    fn wavelength_at_3ghz() {
        assert_relative_eq!(wavelength(3e9), 0.1, epsilon = 1e-6);
    }

    #[test]
    fn wave_number_of_unit_wavelength() {
        assert_relative_eq!(wave_number(1.), 2. * std::f32::consts::PI);
    }

    #[test]
    fn field_decibels_of_ten_is_twenty() {
        assert_relative_eq!(field_decibels(10.), 20.);
        assert_relative_eq!(field_decibels(1.), 0.);
    }
}
