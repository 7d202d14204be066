//! Applying a [`Mapping`] to a molecular viewer.
//!
//! The viewer is abstracted by the [`Host`] trait so that mappings can
//! be computed and checked without it.  [`PmlScript`] implements it by
//! writing PyMOL commands.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use log::info;

use crate::{Mapping, Ramp, RGBColor};

/// The operations a molecular viewer must offer.
pub trait Host {
    /// Define (or redefine) the color `name` from RGB fractions in
    /// \[0, 1\].
    fn set_color(&mut self, name: &str, rgb: [f64; 3]) -> io::Result<()>;

    /// Color the atoms of `selection` with the color `name`.
    fn color(&mut self, name: &str, selection: &str) -> io::Result<()>;

    /// Render the scene and save it as a PNG image.
    fn png(&mut self, path: &Path, dpi: u32, ray: bool) -> io::Result<()>;
}

impl<H: Host + ?Sized> Host for &mut H {
    fn set_color(&mut self, name: &str, rgb: [f64; 3]) -> io::Result<()> {
        (**self).set_color(name, rgb)
    }

    fn color(&mut self, name: &str, selection: &str) -> io::Result<()> {
        (**self).color(name, selection)
    }

    fn png(&mut self, path: &Path, dpi: u32, ray: bool) -> io::Result<()> {
        (**self).png(path, dpi, ray)
    }
}

/// Where and how to save a rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub path: PathBuf,
    pub dpi: u32,
    /// Ray trace before saving.
    pub ray: bool,
}

impl Image {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Image { path: path.into(), dpi: 300, ray: true }
    }
}

/// Register and apply the color of every assignment, then save
/// `image` if requested.
pub fn apply<H: Host>(mapping: &Mapping, host: &mut H, image: Option<&Image>)
                      -> io::Result<()> {
    for a in &mapping.assignments {
        host.set_color(&a.color_name, a.color.to_fractions())?;
        host.color(&a.color_name, &a.selection)?;
    }
    info!("colored {} residues with {}", mapping.assignments.len(),
          mapping.palette);
    if let Some(img) = image {
        info!("saving {}", img.path.display());
        host.png(&img.path, img.dpi, img.ray)?;
    }
    Ok(())
}

/// Register the colors of `ramp` as `<name>.1`, …, `<name>.<n>`.
pub fn register_ramp<H: Host>(name: &str, ramp: &Ramp, host: &mut H)
                              -> io::Result<()> {
    for (k, c) in ramp.iter().enumerate() {
        host.set_color(&format!("{name}.{}", k + 1), c.to_fractions())?;
    }
    Ok(())
}

/// A [`Host`] writing a PyMOL command script.
pub struct PmlScript<W: Write> {
    out: W,
}

impl<W: Write> PmlScript<W> {
    pub fn new(out: W) -> Self { PmlScript { out } }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Host for PmlScript<W> {
    fn set_color(&mut self, name: &str, [r, g, b]: [f64; 3])
                 -> io::Result<()> {
        writeln!(self.out, "set_color {name}, [{r:.4}, {g:.4}, {b:.4}]")
    }

    fn color(&mut self, name: &str, selection: &str) -> io::Result<()> {
        writeln!(self.out, "color {name}, {selection}")
    }

    fn png(&mut self, path: &Path, dpi: u32, ray: bool) -> io::Result<()> {
        writeln!(self.out, "png {}, dpi={dpi}, ray={}", path.display(),
                 u8::from(ray))
    }
}
