//! Clipping and transforms applied to the values before bucketing.

use std::fmt;
use std::str::FromStr;
use log::warn;

use crate::{Error, Result};

/// How the values are transformed before being mapped to the ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Values are used as they are, clamped to the normalization
    /// bounds if any.
    Raw,
    /// Negative and positive values are divided by the magnitude of
    /// the most negative and most positive value respectively.
    Normalize,
    /// Base 2 logarithm, then scaled as [`Mode::Normalize`].
    Log2,
    /// Base 10 logarithm, then scaled as [`Mode::Normalize`].
    Log10,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raw" => Ok(Mode::Raw),
            "normalize" => Ok(Mode::Normalize),
            "log2" => Ok(Mode::Log2),
            "log10" => Ok(Mode::Log10),
            _ => Err(Error::config(format!(
                "unknown mode {s:?} (expected raw, normalize, log2 or log10)"))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Raw => "raw",
            Mode::Normalize => "normalize",
            Mode::Log2 => "log2",
            Mode::Log10 => "log10",
        })
    }
}

/// Optional lower and upper bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Bounds { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check that the bounds are numbers and that `min <= max`.
    /// `what` names the bounds in the error message.
    pub fn validate(&self, what: &str) -> Result<()> {
        for b in [self.min, self.max].into_iter().flatten() {
            if b.is_nan() {
                return Err(Error::config(format!("{what} bound is NaN")))
            }
        }
        match (self.min, self.max) {
            (Some(lo), Some(hi)) if lo > hi => Err(Error::config(format!(
                "{what} bounds out of order: min {lo} > max {hi}"))),
            _ => Ok(()),
        }
    }

    /// Clamp `x` into the bounds.
    pub fn clamp(&self, mut x: f64) -> f64 {
        if let Some(hi) = self.max { x = x.min(hi) }
        if let Some(lo) = self.min { x = x.max(lo) }
        x
    }
}

/// Clamp every value into `clip`.
pub fn clip(values: &mut [f64], clip: &Bounds) {
    if clip.is_unbounded() { return }
    for x in values { *x = clip.clamp(*x) }
}

/// Apply `mode` to `values`.
///
/// `norm` replaces the observed extrema used for scaling (and bounds
/// the values in [`Mode::Raw`]).  For the logarithms, `na` is used in
/// place of the logarithm of non-positive values; without it such
/// values are an error.
pub fn transform(values: &[f64], mode: Mode, norm: &Bounds, na: Option<f64>)
                 -> Result<Vec<f64>> {
    match mode {
        Mode::Raw => Ok(values.iter().map(|&x| norm.clamp(x)).collect()),
        Mode::Normalize => scale_signed(values, norm),
        Mode::Log2 => log(values, f64::log2, norm, na),
        Mode::Log10 => log(values, f64::log10, norm, na),
    }
}

fn log(values: &[f64], f: fn(f64) -> f64, norm: &Bounds, na: Option<f64>)
       -> Result<Vec<f64>> {
    let logs: Vec<f64> = values.iter().map(|&x| f(x)).collect();
    let scaled = scale_signed(&logs, norm)?;
    values.iter().zip(logs.iter().zip(scaled))
        .map(|(&x, (l, s))| {
            if l.is_finite() { return Ok(s) }
            match na {
                Some(na) => {
                    warn!("log of {x} is {l}, using {na}");
                    Ok(na)
                }
                None => Err(Error::Domain(format!(
                    "logarithm of {x} is undefined (set an NA value to \
                     substitute it)"))),
            }
        })
        .collect()
}

/// Divide negative values by |min| and positive ones by |max|, where
/// `min` and `max` are taken from `norm` or else from the finite
/// values.  Zero stays zero and non-finite values are left as they
/// are.
fn scale_signed(values: &[f64], norm: &Bounds) -> Result<Vec<f64>> {
    let finite = || values.iter().copied().filter(|x| x.is_finite());
    let lo = norm.min.or_else(|| finite().reduce(f64::min));
    let hi = norm.max.or_else(|| finite().reduce(f64::max));
    for (b, name) in [(norm.min, "min"), (norm.max, "max")] {
        if b == Some(0.) {
            return Err(Error::config(format!(
                "normalization {name} of 0 cannot scale values")))
        }
    }
    Ok(values.iter().map(|&x| {
        if !x.is_finite() { x }
        else if x < 0. { lo.map_or(x, |lo| x / lo.abs()) }
        else if x > 0. { hi.map_or(x, |hi| x / hi.abs()) }
        else { 0. }
    }).collect())
}
