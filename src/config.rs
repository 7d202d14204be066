//! TOML description of a coloring run.
//!
//! ```toml
//! infile = "mapstructure_m2_kd.txt"
//! mode = "raw"
//! palette = "samba.color"
//! position = "position"
//! target = "function.delta.med"
//! identity = "reference"
//! adjust = 1
//! selection = "2RD0,A"
//! clip_max = 0.005
//! save = "m2_kd.png"
//!
//! [overrides]
//! "0" = "neutral"
//!
//! [palettes]
//! "my.ramp" = ["#000000", "#FF0000", "#FFFF00"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use rgb::RGBA;
use serde::Deserialize;

use crate::host::Image;
use crate::mapper::{MapParams, Overrides, NEUTRAL};
use crate::{Bounds, Column, Error, PaletteRegistry, Result, RGBColor,
            TableSpec};

/// Parameters of a run, as read from a TOML file.  Only `infile` is
/// required.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Delimited table of values.
    pub infile: PathBuf,
    pub mode: String,
    pub palette: String,
    pub reverse: bool,
    pub position: Column,
    pub target: Column,
    pub identity: Option<Column>,
    pub adjust: i64,
    /// `"object,chain"`.
    pub selection: Option<String>,
    pub clip_min: Option<f64>,
    pub clip_max: Option<f64>,
    pub norm_min: Option<f64>,
    pub norm_max: Option<f64>,
    pub na: Option<f64>,
    pub n: usize,
    pub delimiter: String,
    pub header: bool,
    /// Image rendered at the end of the script.
    pub save: Option<PathBuf>,
    pub dpi: u32,
    pub ray: bool,
    /// Where the PyMOL script goes (standard output if unset).
    pub script: Option<PathBuf>,
    /// Table of the assignments.
    pub report: Option<PathBuf>,
    /// Also define the ramp colors as `<palette>.<k>`.
    pub register_ramp: bool,
    /// Value → color (`#RRGGBB` or `neutral`).
    pub overrides: BTreeMap<String, String>,
    /// Extra palettes: name → colors.
    pub palettes: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableSpec::default();
        let params = MapParams::default();
        Config {
            infile: PathBuf::new(),
            mode: params.mode.to_string(),
            palette: params.palette,
            reverse: params.reverse,
            position: table.position,
            target: table.target,
            identity: None,
            adjust: params.adjust,
            selection: None,
            clip_min: None,
            clip_max: None,
            norm_min: None,
            norm_max: None,
            na: None,
            n: params.n,
            delimiter: "\t".to_string(),
            header: table.header,
            save: None,
            dpi: 300,
            ray: true,
            script: None,
            report: None,
            register_ramp: false,
            overrides: BTreeMap::new(),
            palettes: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let mut config = Self::from_toml(&fs::read_to_string(path)?)?;
        // Relative input paths are relative to the configuration.
        if let Some(dir) = path.parent() {
            for p in [Some(&mut config.infile), config.save.as_mut(),
                      config.script.as_mut(), config.report.as_mut()]
                .into_iter().flatten() {
                if p.is_relative() { *p = dir.join(&*p) }
            }
        }
        Ok(config)
    }

    pub fn from_toml(s: &str) -> Result<Config> {
        let config: Config = toml::from_str(s)?;
        if config.infile.as_os_str().is_empty() {
            return Err(Error::config("`infile` is required"))
        }
        Ok(config)
    }

    /// The built-in palettes plus those of the configuration.
    pub fn registry(&self) -> Result<PaletteRegistry> {
        let mut reg = PaletteRegistry::builtin()?.clone();
        for (name, hex) in &self.palettes {
            reg = reg.with_palette(name, hex.as_slice())?;
        }
        Ok(reg)
    }

    pub fn table_spec(&self) -> Result<TableSpec> {
        let delimiter = match self.delimiter.as_bytes() {
            &[d] => d,
            _ => return Err(Error::config(format!(
                "delimiter {:?} must be a single byte", self.delimiter))),
        };
        Ok(TableSpec { position: self.position.clone(),
                       target: self.target.clone(),
                       identity: self.identity.clone(),
                       delimiter, header: self.header })
    }

    pub fn map_params(&self) -> Result<MapParams> {
        let mut overrides = Overrides::new();
        for (value, color) in &self.overrides {
            let x: f64 = value.trim().parse().map_err(|_| Error::config(
                format!("override key {value:?} is not a number")))?;
            overrides.insert(x, parse_color(color)?);
        }
        Ok(MapParams {
            palette: self.palette.clone(),
            reverse: self.reverse,
            mode: self.mode.parse()?,
            clip: Bounds::new(self.clip_min, self.clip_max),
            norm: Bounds::new(self.norm_min, self.norm_max),
            na: self.na,
            adjust: self.adjust,
            n: self.n,
            selection: self.selection.as_deref().map(str::parse).transpose()?,
            overrides,
        })
    }

    pub fn image(&self) -> Option<Image> {
        self.save.as_ref().map(|path| Image { path: path.clone(),
                                              dpi: self.dpi, ray: self.ray })
    }
}

fn parse_color(s: &str) -> Result<RGBA<f64>> {
    if s.eq_ignore_ascii_case("neutral") { return Ok(NEUTRAL) }
    RGBA::<f64>::from_hex(s)
        .ok_or_else(|| Error::config(format!("invalid color {s:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn minimal() {
        let c = Config::from_toml("infile = \"values.txt\"").unwrap();
        assert_eq!(c.infile, PathBuf::from("values.txt"));
        assert_eq!(c.table_spec().unwrap(), TableSpec::default());
        assert_eq!(c.map_params().unwrap(), MapParams::default());
        assert!(c.image().is_none());
    }

    #[test]
    fn infile_required() {
        assert!(matches!(Config::from_toml("mode = \"raw\""),
                         Err(Error::Configuration(_))));
    }

    #[test]
    fn full() {
        let c = Config::from_toml(r##"
            infile = "m2.txt"
            mode = "log10"
            palette = "mine"
            reverse = true
            position = 0
            target = "function.delta.med"
            identity = "reference"
            adjust = 1
            selection = "2RD0,A"
            clip_min = -1.0
            clip_max = 0.01
            na = -1.0
            n = 64
            delimiter = ","
            save = "out.png"
            dpi = 150
            ray = false
            [overrides]
            "0" = "neutral"
            "1.5" = "#FF0000"
            [palettes]
            mine = ["#000000", "#FFFFFF"]
        "##).unwrap();
        let spec = c.table_spec().unwrap();
        assert_eq!(spec.position, Column::Index(0));
        assert_eq!(spec.target, Column::Name("function.delta.med".into()));
        assert_eq!(spec.delimiter, b',');
        let p = c.map_params().unwrap();
        assert_eq!(p.mode, Mode::Log10);
        assert_eq!(p.clip, Bounds::new(Some(-1.), Some(0.01)));
        assert_eq!(p.na, Some(-1.));
        assert_eq!(p.selection.unwrap().chain, "A");
        assert_eq!(p.overrides.get(0.), Some(NEUTRAL));
        assert_eq!(p.overrides.get(1.5).unwrap().r, 255.);
        let img = c.image().unwrap();
        assert_eq!((img.dpi, img.ray), (150, false));
        assert!(c.registry().unwrap().contains("mine"));
    }

    #[test]
    fn unknown_mode() {
        let c = Config::from_toml("infile = \"a\"\nmode = \"log\"").unwrap();
        assert!(matches!(c.map_params(), Err(Error::Configuration(_))));
    }

    #[test]
    fn bad_values() {
        let c = Config::from_toml("infile = \"a\"\ndelimiter = \"ab\"")
            .unwrap();
        assert!(c.table_spec().is_err());
        let c = Config::from_toml("infile = \"a\"\n[overrides]\nx = \"red\"")
            .unwrap();
        assert!(c.map_params().is_err());
        let c = Config::from_toml("infile = \"a\"\n[palettes]\np = [\"#000\"]")
            .unwrap();
        assert!(c.registry().is_err());
        assert!(matches!(Config::from_toml("infile = \"a\"\nmaxCut = 1"),
                         Err(Error::Toml(_))));
    }
}
