use std::ops::Index;
use rgb::RGBA;

use crate::{ColorRange, Error, Palette, PaletteGradient, Result, RGBColor};

/// `n` colors sampled at equal steps along a palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Ramp {
    colors: Vec<RGBA<f64>>, // Invariant: non-empty
}

impl Ramp {
    /// Sample `n` colors through the control points `palette`.
    ///
    /// Palettes are written from the last color of the ramp to the
    /// first: unless `reverse` is set, the control points are flipped
    /// before interpolating.  The first and last samples are exactly
    /// the first and last control points used.
    pub fn build(palette: &[RGBA<f64>], n: usize, reverse: bool)
                 -> Result<Ramp> {
        if palette.len() < 2 {
            return Err(Error::config(format!(
                "a ramp needs at least 2 colors, got {}", palette.len())))
        }
        if n == 0 {
            return Err(Error::config("a ramp needs at least 1 sample"))
        }
        let gradient: PaletteGradient<RGBA<f64>> =
            if reverse { PaletteGradient::new(palette.iter()) }
            else { PaletteGradient::new(palette.iter().rev()) };
        Ok(Ramp::sample(gradient, n))
    }

    /// Same as [`Ramp::build`] for a registered palette.
    pub fn from_palette<C: RGBColor>(palette: &Palette<'_, C>, n: usize,
                                     reverse: bool) -> Result<Ramp> {
        if n == 0 {
            return Err(Error::config("a ramp needs at least 1 sample"))
        }
        let gradient = if reverse { palette.gradient() }
                       else { palette.gradient_rev() };
        Ok(Ramp::sample(gradient, n))
    }

    fn sample<C: RGBColor>(gradient: PaletteGradient<C>, n: usize) -> Ramp {
        Ramp { colors: gradient.range(0., 1., n)
               .map(|(_, c)| c.to_rgba()).collect() }
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize { self.colors.len() }

    /// Always false: ramps have at least one sample.
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn get(&self, i: usize) -> Option<RGBA<f64>> {
        self.colors.get(i).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &RGBA<f64>> {
        self.colors.iter()
    }

    /// The samples converted to another color encoding.
    pub fn colors<C: RGBColor>(&self) -> Vec<C> {
        self.colors.iter().map(|&c| C::from_rgba(c)).collect()
    }
}

impl Index<usize> for Ramp {
    type Output = RGBA<f64>;

    fn index(&self, i: usize) -> &RGBA<f64> { &self.colors[i] }
}
