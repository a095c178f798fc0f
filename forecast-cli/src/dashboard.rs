//! Interactive dashboard menu.
//!
//! An explicit read-dispatch loop over injected input/output streams, so
//! the whole surface is testable without a real console. The only way out
//! is the explicit exit choice (or the input stream closing underneath
//! us); a renderer failure propagates to the top-level handler.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;

use forecast_core::ForecastSeries;

use crate::charts;

const MENU: &str = "\
1) Temperature chart
2) Humidity chart
3) Conditions scatter
4) Save all charts to disk
5) Exit
";

/// Run the menu loop against real or test I/O, saving charts into the
/// current directory when asked.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: W,
    series: &ForecastSeries,
    city: &str,
) -> Result<()> {
    run_with_save_dir(input, output, series, city, Path::new("."))
}

pub fn run_with_save_dir<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    series: &ForecastSeries,
    city: &str,
    save_dir: &Path,
) -> Result<()> {
    loop {
        writeln!(output)?;
        write!(output, "{MENU}Choice: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // Input closed underneath us: treat it like the exit choice.
            writeln!(output)?;
            return Ok(());
        }

        match line.trim() {
            "1" => charts::temperature_plot(&mut output, series, city, None)?,
            "2" => charts::humidity_plot(&mut output, series, city, None)?,
            "3" => charts::description_scatter(&mut output, series, city, None)?,
            "4" => {
                charts::temperature_plot(&mut output, series, city, Some(save_dir))?;
                charts::humidity_plot(&mut output, series, city, Some(save_dir))?;
                charts::description_scatter(&mut output, series, city, Some(save_dir))?;
            }
            "5" => return Ok(()),
            other => {
                writeln!(output, "Invalid choice '{other}'. Enter a number between 1 and 5.")?;
            }
        }
    }
}
