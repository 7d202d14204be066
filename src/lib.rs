//! Color per-residue values of a molecular structure with gradient ramps.
//!
//! - [`Palette`]s are looked up by name in a [`PaletteRegistry`]
//!   (all the built-in ramps, plus any added from a configuration).
//! - A [`Ramp`] samples a palette [`PaletteGradient`] at `n` points.
//! - A [`Mapper`] turns a [`ValueTable`] into [`ColorAssignment`]s
//!   by ranking each (transformed) value among equally spaced
//!   breakpoints.
//! - The assignments are finally sent to a [`Host`], e.g. written as
//!   a PyMOL script with [`PmlScript`].
//!
//! ```
//! use residue_colormap::{Mapper, MapParams, Mode, PaletteRegistry,
//!                        ValueTable};
//! let table = ValueTable::from_pairs([(1, 10.), (2, 20.), (3, 30.)])?;
//! let params = MapParams { mode: Mode::Raw, n: 3, ..MapParams::default() };
//! let mapping = Mapper::new(PaletteRegistry::builtin()?)
//!     .map_values(&table, &params)?;
//! assert_eq!(mapping.assignments.len(), 3);
//! # Ok::<(), residue_colormap::Error>(())
//! ```

use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGBA8};

mod error;
pub mod palettes;
mod ramp;
pub mod rank;
mod table;
pub mod transform;
mod mapper;
pub mod host;
pub mod config;

pub use error::{Error, Result};
pub use palettes::PaletteRegistry;
use palettes::ty::PaletteData;
pub use ramp::Ramp;
pub use table::{Column, TableSpec, ValueTable};
pub use transform::{Bounds, Mode};
pub use mapper::{ColorAssignment, MapParams, Mapper, Mapping, Overrides,
                 Selection, NEUTRAL};
pub use host::{Host, Image, PmlScript};
pub use config::Config;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64,
    b: f64,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and color of the position `k` (assuming it is
    /// in the range `0 ..= self.last`).  The end points are evaluated
    /// at exactly 0 and 1.
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let t = k as f64 / self.flast;
            let mut x = ((self.last - k) as f64 * self.a
                         + k as f64 * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, case is
    /// ignored).
    ///
    /// ```
    /// use rgb::RGB8;
    /// use residue_colormap::RGBColor;
    /// assert_eq!(RGB8::from_hex("#FF8000"), Some(RGB8::new(255, 128, 0)));
    /// assert_eq!(RGB8::from_hex("#FF80"), None);
    /// ```
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return None
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i .. i + 2], 16)
            .ok().map(f64::from);
        let a = if hex.len() == 8 { channel(6)? } else { 255. };
        Some(Self::from_rgba(RGBA { r: channel(0)?, g: channel(2)?,
                                    b: channel(4)?, a }))
    }

    /// The color as `#rrggbb` (alpha dropped).
    fn to_hex(&self) -> String {
        let RGBA { r, g, b, .. } = self.to_rgba();
        let c = |x: f64| x.round().clamp(0., 255.) as u8;
        format!("#{:02x}{:02x}{:02x}", c(r), c(g), c(b))
    }

    /// Red, green and blue as fractions in \[0, 1\], the form
    /// molecular viewers expect.
    fn to_fractions(&self) -> [f64; 3] {
        let RGBA { r, g, b, .. } = self.to_rgba();
        [r / 255., g / 255., b / 255.]
    }

    /// Return a linear (in RGBA space) gradient from color `c0` to
    /// color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use residue_colormap::{RGBColor, ColorRange};
    /// let red = RGB8::new(255, 0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// assert_eq!(grad.rgb(1.), blue);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        Gradient { c0: self.to_rgba(), c1: c1.to_rgba(),
                   color: PhantomData }
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8,  g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}

/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
pub struct Gradient<Color> {
    c0: RGBA<f64>,
    c1: RGBA<f64>,
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.  `t = 0.` and `t = 1.` give
    /// back the end colors bit for bit.
    #[inline]
    fn rgb_unsafe(&self, t: f64) -> Color {
        let mix = |x0: f64, x1: f64| (1. - t) * x0 + t * x1;
        let RGBA { r: r0, g: g0, b: b0, a: a0 } = self.c0;
        let RGBA { r: r1, g: g1, b: b1, a: a1 } = self.c1;
        Color::from_rgba(RGBA { r: mix(r0, r1), g: mix(g0, g1),
                                b: mix(b0, b1), a: mix(a0, a1) })
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unsafe(t.clamp(0., 1.)) }
}


/// A named palette borrowed from a [`PaletteRegistry`].
#[derive(Clone, Copy)]
pub struct Palette<'a, Color> {
    palette: &'a PaletteData,
    color: PhantomData<Color>,
}

impl<'a, Color: RGBColor> Palette<'a, Color> {
    fn new(palette: &'a PaletteData) -> Self {
        Self { palette, color: PhantomData }
    }
}

/// # Color palettes
///
/// Control points of a ramp, in the order they were written.
impl<'a, Color> Palette<'a, Color>
where Color: RGBColor {
    /// The name of the palette in its registry.
    pub fn name(&self) -> &'a str { &self.palette.name }

    /// Returns the number of colors in the palette.
    ///
    /// Palettes countains at least 2 colors.
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Returns the colors of the palette.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// Returns a gradient going through the palette colors in order.
    pub fn gradient(&self) -> PaletteGradient<Color> {
        PaletteGradient::new(self.palette.rgb.iter())
    }

    /// Same as [`Palette::gradient`] with the colors in reverse order.
    pub fn gradient_rev(&self) -> PaletteGradient<Color> {
        PaletteGradient::new(self.palette.rgb.iter().rev())
    }
}

/// A piecewise linear gradient through equally spaced control points.
pub struct PaletteGradient<Color> {
    gradients: Vec<Gradient<Color>>,
}

impl<Color> PaletteGradient<Color>
where Color: RGBColor {
    /// Gradient through `colors`.  There must be at least 2 of them
    /// for the gradient to be usable.
    pub(crate) fn new<'c>(colors: impl Iterator<Item = &'c RGBA<f64>>)
                          -> Self {
        let colors: Vec<_> = colors.copied().collect();
        PaletteGradient {
            gradients: colors.windows(2)
                .map(|c| Gradient { c0: c[0], c1: c[1],
                                    color: PhantomData })
                .collect() }
    }
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unsafe(tn.fract()) }
        else { self.gradients[n-1].rgb_unsafe(1.) }
    }
}
