use std::io::BufRead;
pub mod cli;
pub mod display;
pub mod error;
pub mod legend;
pub mod logging;
pub mod parse;
pub mod plotter;
pub mod style;

pub use error::{Error, ParseError, Result};
pub use legend::LegendLoc;
pub use parse::{read_points, Parser, Point};
pub use plotter::{PlotConfig, Plotter};

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// reads all the points from the input, then plots them as configured;
/// nothing is drawn if any line fails
pub fn run<R: BufRead>(args: &cli::PlotArgs, input: R) -> Result<()> {
    let parser = Parser::new(&args.separator)?;
    let points = read_points(&parser, input)?;
    Plotter::new(args.config.clone()).plot(&points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args_saving_to(path: std::path::PathBuf, separator: &str) -> cli::PlotArgs {
        cli::PlotArgs {
            separator: separator.to_string(),
            verbose: false,
            config: PlotConfig {
                savefig: Some(path),
                ..PlotConfig::default()
            },
        }
    }

    #[test]
    fn run_saves_the_figure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let args = args_saving_to(path.clone(), " ");
        run(&args, Cursor::new("100 1.2 1.4\n200 2.2 2.4\n")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn run_draws_nothing_on_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let args = args_saving_to(path.clone(), ",");
        let result = run(&args, Cursor::new("100,1.2\n200 2.2\n"));
        assert!(matches!(result, Err(Error::Parse { line: 2, .. })));
        assert!(!path.exists());
    }
}
