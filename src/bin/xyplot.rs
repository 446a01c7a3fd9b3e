use anyhow::Context;
use std::io;
use xyplot::cli::parse_cli;
use xyplot::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let args = parse_cli();
    init_logging(args.verbose).context("could not initialise logging")?;
    match &args.config.savefig {
        Some(p) => log::info!("read data from stdin and plot to {}", p.display()),
        None => log::info!("read data from stdin and show the figure"),
    }
    xyplot::run(&args, io::stdin().lock()).context("could not plot the input")?;
    Ok(())
}
