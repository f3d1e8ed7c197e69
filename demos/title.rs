//! A titled group with the default styled fill tokens, cleared on finish.

use std::time::Duration;

use bar_tally::{Bar, BarRenderer, Config, Error};

fn main() -> Result<(), Error> {
    let mut bars = BarRenderer::stdout(
        Config::new()
            .title("installing packages")
            .width(30)
            .clear(true),
    )?;

    for i in 0..=50 {
        bars.render(&[
            Bar::new(i).total(50).text("resolve"),
            Bar::new(i * 2).total(100).text("fetch"),
            Bar::new(i / 2).total(25).text("link"),
        ])?;
        std::thread::sleep(Duration::from_millis(80));
    }
    println!("done");
    Ok(())
}
