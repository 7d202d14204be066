use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use residue_colormap::{PaletteRegistry, Ramp, RGBColor};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 c.to_hex())?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let out = env::args().nth(1).unwrap_or_else(|| "ramps.html".into());
    let mut fh = BufWriter::new(File::create(&out)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>residue-colormap: built-in ramps</title>\n\
                  </head>\n\
                  <body>")?;
    for p in PaletteRegistry::builtin()?.iter::<RGB8>() {
        writeln!(fh, "<h3>{}</h3>", p.name())?;
        table_of_colors(&mut fh, &p.colors(), 40,
                        &format!("{} colors, as written", p.len()))?;
        let ramp = Ramp::from_palette(&p, 128, false)?;
        table_of_colors(&mut fh, &ramp.colors::<RGB8>(), 3, "default ramp")?;
        let ramp = Ramp::from_palette(&p, 128, true)?;
        table_of_colors(&mut fh, &ramp.colors::<RGB8>(), 3, "reversed ramp")?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    fh.flush()?;
    Ok(())
}
