use std::io;
use std::path::PathBuf;

use clap::Parser;
use pvt_core::{Phase, RawCurve};
use pvt_curves::PvtCurveCollection;

mod dataset;
mod error;
mod output;

use dataset::PvtDataset;
use error::CliResult;
use output::write_curve;

#[derive(Parser)]
#[command(name = "pvt-cli")]
#[command(about = "Extract per-cell PVT property curves from a result-set dataset", long_about = None)]
struct Cli {
    /// Path to the dataset YAML file
    dataset: PathBuf,

    /// Active cell to sample
    #[arg(long, default_value_t = 0)]
    cell: usize,

    /// Print the oil formation volume factor curve (Bo)
    #[arg(long)]
    bo: bool,

    /// Print the gas formation volume factor curve (Bg)
    #[arg(long)]
    bg: bool,

    /// Print the oil viscosity curve (mu_o)
    #[arg(long = "mu-o")]
    mu_o: bool,

    /// Print the gas viscosity curve (mu_g)
    #[arg(long = "mu-g")]
    mu_g: bool,

    /// Print the saturated dissolved gas/oil ratio curve (RsSat)
    #[arg(long = "rs-sat")]
    rs_sat: bool,

    /// Print the saturated vaporised oil/gas ratio curve (RvSat)
    #[arg(long = "rv-sat")]
    rv_sat: bool,

    /// Report in internal SI units, ignoring the dataset's output units
    #[arg(long)]
    si: bool,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let dataset = PvtDataset::load(&cli.dataset)?;
    let mut pvt = PvtCurveCollection::from_source(&dataset, &dataset)?;
    if !cli.si {
        pvt.set_output_units(dataset.output_units.clone());
    }

    let requests = [
        (cli.bo, "Bo", RawCurve::Fvf, Phase::Liquid),
        (cli.bg, "Bg", RawCurve::Fvf, Phase::Vapour),
        (cli.mu_o, "mu_o", RawCurve::Viscosity, Phase::Liquid),
        (cli.mu_g, "mu_g", RawCurve::Viscosity, Phase::Vapour),
        (cli.rs_sat, "rsSat", RawCurve::SaturatedState, Phase::Liquid),
        (cli.rv_sat, "rvSat", RawCurve::SaturatedState, Phase::Vapour),
    ];

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (wanted, name, curve, phase) in requests {
        if wanted {
            write_curve(&mut out, name, &pvt.pvt_curve(curve, phase, cli.cell))?;
        }
    }

    Ok(())
}
