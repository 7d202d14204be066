use std::io::Write;
use std::str::FromStr;
use log::{debug, info};
use rgb::RGBA;
use serde::Serialize;

use crate::rank::{Breakpoints, Comparison};
use crate::transform::{self, Bounds, Mode};
use crate::{Error, PaletteRegistry, Ramp, Result, RGBColor, ValueTable};

/// Color of positions without data: RGB (0.85, 0.90, 0.90).
pub const NEUTRAL: RGBA<f64> =
    RGBA { r: 0.85 * 255., g: 0.90 * 255., b: 0.90 * 255., a: 255. };

/// Host selection `object,chain` restricting where colors apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub object: String,
    pub chain: String,
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(',') {
            Some((object, chain))
                if !object.trim().is_empty() && !chain.trim().is_empty() =>
                Ok(Selection { object: object.trim().to_string(),
                               chain: chain.trim().to_string() }),
            _ => Err(Error::config(format!(
                "selection {s:?} is not of the form \"object,chain\""))),
        }
    }
}

impl Selection {
    /// The host expression selecting residue `resi`.
    pub fn residue(&self, resi: i64) -> String {
        format!("{} and chain {} and resi {resi}", self.object, self.chain)
    }
}

/// Explicit colors for given (clipped) raw values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides(Vec<(f64, RGBA<f64>)>);

impl Overrides {
    pub fn new() -> Self { Overrides(Vec::new()) }

    /// Color `value` with `color` instead of the ramp.
    pub fn insert(&mut self, value: f64, color: RGBA<f64>) {
        match self.0.iter_mut().find(|(x, _)| *x == value) {
            Some(entry) => entry.1 = color,
            None => self.0.push((value, color)),
        }
    }

    /// The color registered for exactly `value`.
    pub fn get(&self, value: f64) -> Option<RGBA<f64>> {
        self.0.iter().find(|(x, _)| *x == value).map(|&(_, c)| c)
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// Parameters of a mapping.  `None` means “not set”.
#[derive(Clone, Debug, PartialEq)]
pub struct MapParams {
    /// Name of the palette in the registry.
    pub palette: String,
    pub reverse: bool,
    pub mode: Mode,
    /// Applied to the raw values before anything else.
    pub clip: Bounds,
    /// Scaling denominators and range of the breakpoints.
    pub norm: Bounds,
    /// Substitute for undefined logarithms.
    pub na: Option<f64>,
    /// Added to the 0-based rank of each position to give the residue
    /// number.
    pub adjust: i64,
    /// Number of ramp colors and of breakpoints.
    pub n: usize,
    pub selection: Option<Selection>,
    pub overrides: Overrides,
}

impl Default for MapParams {
    fn default() -> Self {
        MapParams {
            palette: "samba.color".to_string(),
            reverse: false,
            mode: Mode::Raw,
            clip: Bounds::default(),
            norm: Bounds::default(),
            na: None,
            adjust: 0,
            n: 256,
            selection: None,
            overrides: Overrides::new(),
        }
    }
}

/// The color of one position.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorAssignment {
    /// Rank of the position plus the adjustment.
    pub index: i64,
    pub position: i64,
    /// Value after clipping.
    pub value: f64,
    /// Value after the transform, the one that is ranked.
    pub transformed: f64,
    /// Fraction of the breakpoints `<=` the transformed value.
    pub fraction: f64,
    pub color: RGBA<f64>,
    /// Name under which the color is registered with the host.
    pub color_name: String,
    /// Host expression the color applies to.
    pub selection: String,
    pub identity: Option<String>,
}

/// Result of [`Mapper::map_values`].
#[derive(Clone, Debug, PartialEq)]
pub struct Mapping {
    pub palette: String,
    pub ramp: Ramp,
    /// Lowest and highest breakpoint range bounds.
    pub range: (f64, f64),
    /// One per position, by increasing position.
    pub assignments: Vec<ColorAssignment>,
}

#[derive(Serialize)]
struct ReportRow<'a> {
    index: i64,
    position: i64,
    value: f64,
    transformed: f64,
    fraction: f64,
    color_name: &'a str,
    color: String,
    identity: Option<&'a str>,
}

impl Mapping {
    /// Write the assignments as a tab separated table with a header.
    pub fn write_report<W: Write>(&self, out: W) -> Result<()> {
        let mut w = csv::WriterBuilder::new().delimiter(b'\t')
            .from_writer(out);
        for a in &self.assignments {
            w.serialize(ReportRow {
                index: a.index, position: a.position, value: a.value,
                transformed: a.transformed, fraction: a.fraction,
                color_name: &a.color_name, color: a.color.to_hex(),
                identity: a.identity.as_deref() })?;
        }
        w.flush()?;
        Ok(())
    }
}

/// Maps value tables to ramp colors using palettes of a registry.
pub struct Mapper<'r> {
    registry: &'r PaletteRegistry,
}

impl<'r> Mapper<'r> {
    pub fn new(registry: &'r PaletteRegistry) -> Self { Mapper { registry } }

    /// Build the ramp described by `params`.
    pub fn ramp(&self, params: &MapParams) -> Result<Ramp> {
        let palette = self.registry.get::<RGBA<f64>>(&params.palette)?;
        let ramp = Ramp::from_palette(&palette, params.n, params.reverse)?;
        info!("palette {}: {} control points, {} colors",
              palette.name(), palette.len(), ramp.len());
        Ok(ramp)
    }

    /// Color every position of `table`.
    ///
    /// Parameters are checked and the ramp built before any value is
    /// looked at.  Values are clipped, transformed, then ranked among
    /// `params.n` breakpoints evenly spread over the transformed range
    /// (or the normalization bounds); the rank fraction `f` selects
    /// ramp color `round(f (n - 1))`.
    pub fn map_values(&self, table: &ValueTable, params: &MapParams)
                      -> Result<Mapping> {
        let ramp = self.ramp(params)?;
        self.map_with_ramp(table, params, ramp)
    }

    /// Same as [`Mapper::map_values`] with a ramp already built by
    /// [`Mapper::ramp`].
    pub fn map_with_ramp(&self, table: &ValueTable, params: &MapParams,
                         ramp: Ramp) -> Result<Mapping> {
        params.clip.validate("clip")?;
        params.norm.validate("normalization")?;
        if table.is_empty() {
            return Err(Error::InputFormat("the table has no rows".into()))
        }

        let (positions, mut values): (Vec<i64>, Vec<f64>) =
            table.iter().unzip();
        transform::clip(&mut values, &params.clip);
        let transformed = transform::transform(&values, params.mode,
                                               &params.norm, params.na)?;

        let finite = || transformed.iter().copied().filter(|x| x.is_finite());
        let lo = params.norm.min
            .or_else(|| finite().reduce(f64::min)).unwrap_or(0.);
        let hi = params.norm.max
            .or_else(|| finite().reduce(f64::max)).unwrap_or(0.);
        let breaks = Breakpoints::spanning(lo, hi, params.n);
        info!("{} values in [{lo}, {hi}] ({}), {} breakpoints",
              transformed.len(), params.mode, breaks.len());

        let last = (ramp.len() - 1) as f64;
        let assignments = positions.iter().zip(values.iter().zip(&transformed))
            .enumerate()
            .map(|(i, (&position, (&value, &transformed)))| {
                let index = i as i64 + params.adjust;
                let fraction = breaks.fraction(transformed,
                                               Comparison::LessEqual);
                let color = params.overrides.get(value)
                    .unwrap_or(ramp[(fraction * last).round() as usize]);
                let selection = match &params.selection {
                    Some(s) => s.residue(index),
                    None => format!("resi {index}"),
                };
                let a = ColorAssignment {
                    index, position, value, transformed, fraction, color,
                    color_name: format!("res{index}"),
                    selection,
                    identity: table.identity(position).map(str::to_string),
                };
                debug!("{} {} {} {:.4} {}", a.index, a.position, a.value,
                       a.fraction, a.color_name);
                a
            })
            .collect();
        Ok(Mapping { palette: params.palette.clone(), ramp,
                     range: (lo, hi), assignments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn map(table: &ValueTable, params: &MapParams) -> Result<Mapping> {
        Mapper::new(PaletteRegistry::builtin().unwrap()).map_values(table, params)
    }

    fn table(pairs: &[(i64, f64)]) -> ValueTable {
        ValueTable::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn three_values() {
        let t = table(&[(1, 10.), (2, 20.), (3, 30.)]);
        let params = MapParams { n: 3, ..MapParams::default() };
        let m = map(&t, &params).unwrap();
        assert_eq!(m.ramp.len(), 3);
        let f: Vec<f64> = m.assignments.iter().map(|a| a.fraction).collect();
        assert!(f[0] < f[1] && f[1] < f[2]);
        assert_eq!(f[2], 1.);
        assert!(approx_eq!(f64, f[0], 1. / 3.));
        assert_eq!(m.assignments[2].color, m.ramp[2]);
        assert_eq!(m.assignments[0].color, m.ramp[1]);
        assert_eq!(m.range, (10., 30.));
    }

    #[test]
    fn fractions_in_unit_interval() {
        let t = table(&[(1, -5.), (2, 0.), (3, 1e-9), (4, 3.), (5, 1e6),
                        (6, -1e6), (7, 3.)]);
        for mode in [Mode::Raw, Mode::Normalize, Mode::Log2, Mode::Log10] {
            for n in [1, 2, 10, 256] {
                let params = MapParams { mode, n, na: Some(0.),
                                         ..MapParams::default() };
                for a in map(&t, &params).unwrap().assignments {
                    assert!((0. ..= 1.).contains(&a.fraction), "{a:?}");
                }
            }
        }
    }

    #[test]
    fn wide_range() {
        let t = table(&[(1, -1e308), (2, 0.), (3, 1e308)]);
        let m = map(&t, &MapParams { n: 4, ..MapParams::default() }).unwrap();
        let f: Vec<f64> = m.assignments.iter().map(|a| a.fraction).collect();
        assert_eq!(f, vec![0.25, 0.75, 1.]);
        assert_eq!(m.assignments[2].color, m.ramp[3]);
    }

    #[test]
    fn prebuilt_ramp() {
        let t = table(&[(1, 1.), (2, 2.)]);
        let params = MapParams { n: 8, ..MapParams::default() };
        let mapper = Mapper::new(PaletteRegistry::builtin().unwrap());
        let ramp = mapper.ramp(&params).unwrap();
        assert_eq!(mapper.map_with_ramp(&t, &params, ramp).unwrap(),
                   map(&t, &params).unwrap());
    }

    #[test]
    fn idempotent() {
        let t = table(&[(4, 0.3), (9, -2.), (12, 7.5)]);
        let params = MapParams { mode: Mode::Normalize,
                                 palette: "solar.flare".into(),
                                 ..MapParams::default() };
        assert_eq!(map(&t, &params).unwrap(), map(&t, &params).unwrap());
    }

    #[test]
    fn raw_values_round_trip() {
        let pairs = [(1, 0.25), (2, -3.5), (5, 0.), (8, 1e-3)];
        let m = map(&table(&pairs), &MapParams::default()).unwrap();
        for (a, (p, x)) in m.assignments.iter().zip(pairs) {
            assert_eq!((a.position, a.value, a.transformed), (p, x, x));
        }
    }

    #[test]
    fn index_adjust_and_selection() {
        let t = table(&[(10, 1.), (11, 2.)])
            .with_identities([(10, "L".to_string()), (11, "P".to_string())]);
        let params = MapParams {
            adjust: 1,
            selection: Some("2RD0,A".parse().unwrap()),
            ..MapParams::default() };
        let m = map(&t, &params).unwrap();
        let a = &m.assignments[1];
        assert_eq!((a.index, a.position), (2, 11));
        assert_eq!(a.color_name, "res2");
        assert_eq!(a.selection, "2RD0 and chain A and resi 2");
        assert_eq!(a.identity.as_deref(), Some("P"));
        let m = map(&t, &MapParams::default()).unwrap();
        assert_eq!(m.assignments[0].selection, "resi 0");
    }

    #[test]
    fn clipping_before_transform() {
        let t = table(&[(1, 0.001), (2, 0.004), (3, 0.5)]);
        let params = MapParams { clip: Bounds::new(None, Some(0.005)),
                                 ..MapParams::default() };
        let m = map(&t, &params).unwrap();
        assert_eq!(m.assignments[2].value, 0.005);
        assert_eq!(m.range, (0.001, 0.005));
        assert_eq!(m.assignments[2].fraction, 1.);
    }

    #[test]
    fn normalization_bounds_set_the_range() {
        let t = table(&[(1, 2.), (2, 5.)]);
        let params = MapParams { norm: Bounds::new(Some(0.), Some(10.)),
                                 n: 10, ..MapParams::default() };
        let m = map(&t, &params).unwrap();
        assert_eq!(m.range, (0., 10.));
        assert_eq!(m.assignments[0].fraction, 0.3);
        assert_eq!(m.assignments[1].fraction, 0.6);
    }

    #[test]
    fn overrides() {
        let t = table(&[(1, 0.), (2, 1.), (3, 2.)]);
        let mut overrides = Overrides::new();
        overrides.insert(0., NEUTRAL);
        let params = MapParams { overrides, ..MapParams::default() };
        let m = map(&t, &params).unwrap();
        assert_eq!(m.assignments[0].color, NEUTRAL);
        assert_ne!(m.assignments[1].color, NEUTRAL);
        assert_eq!(m.assignments[0].fraction, 1. / 256.);
    }

    #[test]
    fn log_of_zero_fails() {
        let t = table(&[(1, 0.), (2, 4.)]);
        let params = MapParams { mode: Mode::Log2, ..MapParams::default() };
        assert!(matches!(map(&t, &params), Err(Error::Domain(_))));
        let params = MapParams { na: Some(0.), ..params };
        let m = map(&t, &params).unwrap();
        assert_eq!(m.assignments[0].transformed, 0.);
    }

    #[test]
    fn unknown_palette_first() {
        // Log of 0 would fail too, but the palette is checked first.
        let t = table(&[(1, 0.)]);
        let params = MapParams { palette: "wolfgang.v1".into(),
                                 mode: Mode::Log2, ..MapParams::default() };
        assert!(matches!(map(&t, &params), Err(Error::Configuration(_))));
    }

    #[test]
    fn bad_bounds() {
        let t = table(&[(1, 0.)]);
        let params = MapParams { clip: Bounds::new(Some(1.), Some(0.)),
                                 ..MapParams::default() };
        assert!(matches!(map(&t, &params), Err(Error::Configuration(_))));
    }

    #[test]
    fn constant_values() {
        let t = table(&[(1, 4.), (2, 4.)]);
        let m = map(&t, &MapParams { n: 5, ..MapParams::default() }).unwrap();
        for a in &m.assignments {
            assert_eq!(a.fraction, 1.);
            assert_eq!(a.color, m.ramp[4]);
        }
    }

    #[test]
    fn report() {
        let t = table(&[(1, 10.), (2, 20.)])
            .with_identities([(1, "M".to_string())]);
        let params = MapParams { n: 2, palette: "citric".into(),
                                 reverse: true, ..MapParams::default() };
        let mut out = Vec::new();
        map(&t, &params).unwrap().write_report(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(),
                   "index\tposition\tvalue\ttransformed\tfraction\t\
                    color_name\tcolor\tidentity\n\
                    0\t1\t10.0\t10.0\t0.5\tres0\t#fff301\tM\n\
                    1\t2\t20.0\t20.0\t1.0\tres1\t#fff301\t\n");
    }

    #[test]
    fn selection_syntax() {
        assert!("2RD0".parse::<Selection>().is_err());
        assert!(",A".parse::<Selection>().is_err());
        let s: Selection = " 1abc , B ".parse().unwrap();
        assert_eq!(s.residue(7), "1abc and chain B and resi 7");
    }
}
