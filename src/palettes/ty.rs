pub(crate) use rgb::RGBA;

use crate::{Error, Result, RGBColor};

/// The control points of a named palette.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaletteData {
    pub(crate) name: String,
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2
}

impl PaletteData {
    /// Parse the `hex` colors of the palette `name`.
    pub(crate) fn from_hex<S: AsRef<str>>(name: &str, hex: &[S])
                                          -> Result<Self> {
        if hex.len() < 2 {
            return Err(Error::config(format!(
                "palette {name:?} needs at least 2 colors, got {}",
                hex.len())))
        }
        let rgb = hex.iter()
            .map(|h| RGBA::<f64>::from_hex(h.as_ref()).ok_or_else(|| Error::config(
                format!("palette {name:?}: invalid color {:?}", h.as_ref()))))
            .collect::<Result<Vec<_>>>()?;
        Ok(PaletteData { name: name.to_string(), rgb })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short() {
        assert!(matches!(PaletteData::from_hex("one", &["#000000"]),
                         Err(Error::Configuration(_))));
    }

    #[test]
    fn bad_color() {
        let e = PaletteData::from_hex("x", &["#000000", "red"]).unwrap_err();
        assert!(e.to_string().contains("\"red\""));
    }
}
