//! Two simulated downloads sharing one region.
//!
//! The second file finishes early and overshoots its total, freezing its
//! line while the first keeps updating.

use std::time::Duration;

use bar_tally::{Bar, BarRenderer, Config, Error};

fn main() -> Result<(), Error> {
    let mut bars = BarRenderer::stdout(
        Config::new()
            .complete("=")
            .incomplete("-")
            .display("[:bar] :text :percent :time :completed/:total"),
    )?;

    let total = 100;
    let mut file1 = 0;
    let mut file2 = 0;
    while file1 <= total {
        file1 += 1;
        file2 += 2;
        bars.render(&[
            Bar::new(file1).total(total).text("file1"),
            Bar::new(file2).total(total).text("file2"),
        ])?;
        std::thread::sleep(Duration::from_millis(50));
    }
    Ok(())
}
