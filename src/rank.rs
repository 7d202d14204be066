//! Rank queries on a sorted set of breakpoints.
//!
//! Every query is a binary search: the values satisfying a comparison
//! with the cutoff always form a contiguous slice of the sorted set.

use std::str::FromStr;

use crate::{Error, Result};

/// How values are compared with the cutoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// `value < cutoff`
    Less,
    /// `value <= cutoff`; a value equal to a breakpoint counts it.
    LessEqual,
    /// `value > cutoff`
    More,
    /// `value >= cutoff`
    MoreEqual,
    /// `value == cutoff`
    Equal,
}

impl FromStr for Comparison {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        use Comparison::*;
        match s {
            "less" => Ok(Less),
            "less.equal" => Ok(LessEqual),
            "more" => Ok(More),
            "more.equal" => Ok(MoreEqual),
            "equal" => Ok(Equal),
            _ => Err(Error::config(format!("unknown comparison {s:?}"))),
        }
    }
}

/// Sorted breakpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints {
    sorted: Vec<f64>,
}

impl Breakpoints {
    /// Sort `values` (NaN last).
    pub fn new(mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        Breakpoints { sorted: values }
    }

    /// `n` breakpoints `lo + i (hi - lo) / n`, `i = 0, …, n-1`: the
    /// left ends of `n` equal-width bins covering \[lo, hi\].  The
    /// breakpoints stay finite even when `hi - lo` overflows.
    pub fn spanning(lo: f64, hi: f64, n: usize) -> Self {
        let nf = n as f64;
        Breakpoints::new((0 .. n).map(|i| {
            let i = i as f64;
            let x = ((nf - i) * lo + i * hi) / nf;
            if x.is_finite() { x }
            else {
                let t = i / nf;
                (1. - t) * lo + t * hi
            }
        }).collect())
    }

    pub fn len(&self) -> usize { self.sorted.len() }

    pub fn is_empty(&self) -> bool { self.sorted.is_empty() }

    pub fn as_slice(&self) -> &[f64] { &self.sorted }

    /// First index whose breakpoint is not `< cutoff`.
    fn lower(&self, cutoff: f64) -> usize {
        self.sorted.partition_point(|&x| x < cutoff)
    }

    /// First index whose breakpoint is not `<= cutoff`.
    fn upper(&self, cutoff: f64) -> usize {
        self.sorted.partition_point(|&x| x <= cutoff)
    }

    /// The breakpoints `x` such that `x cmp cutoff`.
    pub fn hits(&self, cutoff: f64, cmp: Comparison) -> &[f64] {
        use Comparison::*;
        match cmp {
            Less => &self.sorted[.. self.lower(cutoff)],
            LessEqual => &self.sorted[.. self.upper(cutoff)],
            More => &self.sorted[self.upper(cutoff) ..],
            MoreEqual => &self.sorted[self.lower(cutoff) ..],
            Equal => {
                let i = self.lower(cutoff);
                &self.sorted[i .. self.upper(cutoff).max(i)]
            }
        }
    }

    /// Number of breakpoints `x` such that `x cmp cutoff`.
    pub fn tally(&self, cutoff: f64, cmp: Comparison) -> usize {
        self.hits(cutoff, cmp).len()
    }

    /// Fraction of the breakpoints `x` such that `x cmp cutoff`, in
    /// \[0, 1\].  It is `0.` when there are no breakpoints.
    pub fn fraction(&self, cutoff: f64, cmp: Comparison) -> f64 {
        if self.sorted.is_empty() { return 0. }
        self.tally(cutoff, cmp) as f64 / self.sorted.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Comparison::*;

    #[test]
    fn spanning_grid() {
        let b = Breakpoints::spanning(10., 30., 4);
        assert_eq!(b.as_slice(), &[10., 15., 20., 25.]);
        assert_eq!(Breakpoints::spanning(0., 1., 256).len(), 256);
        assert_eq!(Breakpoints::spanning(2., 2., 3).as_slice(), &[2., 2., 2.]);
    }

    #[test]
    fn spanning_wide_range() {
        let b = Breakpoints::spanning(-1e308, 1e308, 4);
        assert!(b.as_slice().iter().all(|x| x.is_finite()), "{b:?}");
        assert_eq!(b.as_slice()[0], -1e308);
        assert_eq!(b.as_slice()[2], 0.);
        assert_eq!(b.fraction(1e308, LessEqual), 1.);
        assert_eq!(b.fraction(-1e308, LessEqual), 0.25);
        let b = Breakpoints::spanning(f64::MAX / 2., f64::MAX, 8);
        assert!(b.as_slice().iter().all(|x| x.is_finite()), "{b:?}");
    }

    #[test]
    fn comparisons() {
        let b = Breakpoints::new(vec![3., 1., 2., 2., 4.]);
        assert_eq!(b.hits(2., Less), &[1.]);
        assert_eq!(b.hits(2., LessEqual), &[1., 2., 2.]);
        assert_eq!(b.hits(2., More), &[3., 4.]);
        assert_eq!(b.hits(2., MoreEqual), &[2., 2., 3., 4.]);
        assert_eq!(b.hits(2., Equal), &[2., 2.]);
        assert_eq!(b.tally(2.5, Equal), 0);
        assert_eq!(b.tally(0., LessEqual), 0);
        assert_eq!(b.tally(9., LessEqual), 5);
    }

    #[test]
    fn equal_breakpoint_is_counted() {
        let b = Breakpoints::spanning(0., 1., 4);
        assert_eq!(b.fraction(0.5, LessEqual), 0.75);
        assert_eq!(b.fraction(0.5, Less), 0.5);
        assert_eq!(b.fraction(0., LessEqual), 0.25);
        assert_eq!(b.fraction(-1., LessEqual), 0.);
        assert_eq!(b.fraction(1., LessEqual), 1.);
    }

    #[test]
    fn nan_cutoff() {
        let b = Breakpoints::spanning(0., 1., 4);
        assert_eq!(b.tally(f64::NAN, LessEqual), 0);
        assert_eq!(b.tally(f64::NAN, Equal), 0);
    }

    #[test]
    fn no_breakpoints() {
        assert_eq!(Breakpoints::new(vec![]).fraction(1., More), 0.);
    }

    #[test]
    fn parse() {
        assert_eq!("less.equal".parse::<Comparison>().unwrap(), LessEqual);
        assert!("around".parse::<Comparison>().is_err());
    }
}
