//! Registry of named palettes.

use std::collections::BTreeMap;
use lazy_static::lazy_static;

use crate::{Error, Palette, Result, RGBColor};

pub(crate) mod ty;
mod data;

use ty::PaletteData;

lazy_static! {
    static ref BUILTIN: std::result::Result<PaletteRegistry, String> =
        PaletteRegistry::from_table(data::BUILTIN)
        .map_err(|e| format!("built-in palettes: {e}"));
}

/// Immutable map from palette names to their colors.
///
/// The built-in registry is shared; registries with extra palettes are
/// built with [`PaletteRegistry::with_palette`].
#[derive(Clone, Debug, Default)]
pub struct PaletteRegistry {
    palettes: BTreeMap<String, PaletteData>,
}

impl PaletteRegistry {
    /// All the palettes shipped with the crate.
    pub fn builtin() -> Result<&'static PaletteRegistry> {
        BUILTIN.as_ref().map_err(|e| Error::config(e.clone()))
    }

    /// Parse a table of `(name, hex colors)`.  Every entry must be a
    /// valid palette with a distinct name.
    fn from_table(table: &[(&str, &[&str])]) -> Result<PaletteRegistry> {
        let mut palettes = BTreeMap::new();
        for &(name, hex) in table {
            let p = PaletteData::from_hex(name, hex)?;
            if palettes.insert(name.to_string(), p).is_some() {
                return Err(Error::config(format!(
                    "palette {name:?} defined twice")))
            }
        }
        Ok(PaletteRegistry { palettes })
    }

    /// Look up the palette `name`.
    pub fn get<Color: RGBColor>(&self, name: &str)
                                -> Result<Palette<'_, Color>> {
        match self.palettes.get(name) {
            Some(p) => Ok(Palette::new(p)),
            None => Err(Error::config(format!("unknown palette {name:?}"))),
        }
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.palettes.contains_key(name)
    }

    /// The palette names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }

    /// All palettes, sorted by name.
    pub fn iter<Color: RGBColor>(&self)
                                 -> impl Iterator<Item = Palette<'_, Color>> {
        self.palettes.values().map(Palette::new)
    }

    pub fn len(&self) -> usize { self.palettes.len() }

    pub fn is_empty(&self) -> bool { self.palettes.is_empty() }

    /// Return a copy of the registry where `name` maps to the `hex`
    /// colors (replacing any palette of the same name).
    pub fn with_palette<S: AsRef<str>>(&self, name: &str, hex: &[S])
                                       -> Result<PaletteRegistry> {
        let p = PaletteData::from_hex(name, hex)?;
        let mut palettes = self.palettes.clone();
        palettes.insert(name.to_string(), p);
        Ok(PaletteRegistry { palettes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::{RGB8, RGBA};

    #[test]
    fn every_builtin_parses() {
        let reg = PaletteRegistry::builtin().unwrap();
        assert_eq!(reg.len(), data::BUILTIN.len());
        for &(name, hex) in data::BUILTIN {
            let p = reg.get::<RGB8>(name).unwrap();
            assert_eq!(p.len(), hex.len(), "{name}");
        }
    }

    #[test]
    fn malformed_table() {
        let e = PaletteRegistry::from_table(
            &[("ok", &["#000000", "#FFFFFF"][..]),
              ("bad", &["#000000", "#FFF"][..])])
            .unwrap_err();
        assert!(matches!(e, Error::Configuration(_)), "{e}");
        let e = PaletteRegistry::from_table(
            &[("twice", &["#000000", "#FFFFFF"][..]),
              ("twice", &["#FFFFFF", "#000000"][..])]).unwrap_err();
        assert!(e.to_string().contains("twice"), "{e}");
        let e = PaletteRegistry::from_table(&[("one", &["#000000"][..])])
            .unwrap_err();
        assert!(matches!(e, Error::Configuration(_)), "{e}");
    }

    #[test]
    fn lookup() {
        let reg = PaletteRegistry::builtin().unwrap();
        let p = reg.get::<RGB8>("citric").unwrap();
        assert_eq!(p.name(), "citric");
        assert_eq!(p.colors(), vec![RGB8::new(0x03, 0xAB, 0x11),
                                    RGB8::new(0xFF, 0xF3, 0x01)]);
        assert!(reg.contains("brewer.celsius"));
        assert!(reg.names().any(|n| n == "white:mango"));
        let e = reg.get::<RGB8>("wolfgang.v1").err().unwrap();
        assert!(matches!(e, Error::Configuration(_)));
    }

    #[test]
    fn extend_without_touching_builtin() {
        let builtin = PaletteRegistry::builtin().unwrap();
        let reg = builtin.with_palette("mine", &["#000000", "#FFFFFF"])
            .unwrap();
        assert!(reg.contains("mine"));
        assert!(!builtin.contains("mine"));
        assert_eq!(reg.len(), builtin.len() + 1);
        let p = reg.get::<RGBA<f64>>("mine").unwrap();
        assert_eq!(p.colors()[1], RGBA { r: 255., g: 255., b: 255., a: 255. });
    }
}
