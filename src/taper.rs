use std::f32::consts::PI;

use ndarray::Array1;

// Amplitude weighting applied across the array elements. Tapering trades main
// lobe width for lower sidelobes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Taper {
    Uniform,
    Hamming,
}

impl Taper {
    pub fn weights(self, size: usize) -> Array1<f32> {
        match self {
            Taper::Uniform => Array1::ones(size),
            Taper::Hamming => hamming_window(size),
        }
    }
}

impl Default for Taper {
    fn default() -> Self {
        Taper::Uniform
    }
}

/**
This version of the hamming window uses the classic rounded coefficient 0.54,
which is what most numerical packages ship as their default. See equation
(134) in [1] for the family this belongs to.

[1] Armin Doerry, "Catalog of Window Taper Functions for Sidelobe Control", 2017.
           https://www.researchgate.net/profile/Armin_Doerry/publication/316281181_Catalog_of_Window_Taper_Functions_for_Sidelobe_Control/links/58f92cb2a6fdccb121c9d54d/Catalog-of-Window-Taper-Functions-for-Sidelobe-Control.pdf
*/
pub fn hamming_window(size: usize) -> Array1<f32> {
    const a0: f32 = 0.54;
    const a1: f32 = 1. - a0;
    Array1::linspace(-PI, PI, size).mapv(|x| a0 + a1 * x.cos())
}
