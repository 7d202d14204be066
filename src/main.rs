//! `residue-colormap <config.toml>`: write a PyMOL script coloring
//! residues by the values of a table.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use residue_colormap::{host, Config, Error, Mapper, PmlScript, Result,
                       ValueTable};

fn run() -> Result<()> {
    let path = env::args().nth(1).ok_or_else(|| Error::Configuration(
        "usage: residue-colormap <config.toml>".to_string()))?;
    let config = Config::from_path(&path)?;
    let registry = config.registry()?;
    let params = config.map_params()?;
    let mapper = Mapper::new(&registry);
    // Fail on a bad palette before reading any data.
    let ramp = mapper.ramp(&params)?;
    let table = ValueTable::from_path(&config.infile, &config.table_spec()?)?;
    let mapping = mapper.map_with_ramp(&table, &params, ramp)?;

    if let Some(report) = &config.report {
        mapping.write_report(BufWriter::new(File::create(report)?))?;
        log::info!("report written to {}", report.display());
    }

    let out: Box<dyn Write> = match &config.script {
        Some(p) => Box::new(File::create(p)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut script = PmlScript::new(BufWriter::new(out));
    if config.register_ramp {
        host::register_ramp(&mapping.palette, &mapping.ramp, &mut script)?;
    }
    host::apply(&mapping, &mut script, config.image().as_ref())?;
    script.finish()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        log::error!("{e}");
        process::exit(1);
    }
}
