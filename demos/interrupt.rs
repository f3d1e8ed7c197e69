//! Interleaving log lines above an active bar with `println`.

use std::time::Duration;

use bar_tally::{Bar, BarRenderer, Config, Error};

fn main() -> Result<(), Error> {
    let mut bars = BarRenderer::stdout(
        Config::new()
            .width(40)
            .display(":bar :percent :time :completed/:total"),
    )?;

    let total = 80;
    for completed in 0..=total {
        bars.render(&[Bar::new(completed).total(total)])?;
        if completed % 20 == 0 {
            bars.println(format!("checkpoint at {completed}"))?;
        }
        std::thread::sleep(Duration::from_millis(60));
    }
    Ok(())
}
