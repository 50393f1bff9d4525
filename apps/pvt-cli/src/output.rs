//! Curve printing in the matrix block format downstream plotting tools
//! consume.

use std::io::{self, Write};

use pvt_core::PvtCurve;

/// Write `curve` as one `name{k} = [ ... ];` block per series, points as
/// `x y` rows in full-precision scientific notation.
pub fn write_curve(w: &mut impl Write, name: &str, curve: &PvtCurve) -> io::Result<()> {
    for (k, series) in curve.series().iter().enumerate() {
        writeln!(w, "{}{{{}}} = [", name, k + 1)?;

        for (x, y) in series.x.iter().zip(&series.y) {
            writeln!(w, "{:.16e} {:.16e}", x, y)?;
        }

        writeln!(w, "];")?;
        writeln!(w)?;
    }

    Ok(())
}
