use super::VERSION;
use crate::legend::LegendLoc;
use crate::plotter::{PlotConfig, DEFAULT_SIZE, MAX_SIDE};
use clap::{App, Arg};
use std::ffi::OsString;
use std::path::PathBuf;

/// The parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArgs {
    pub separator: String,
    pub verbose: bool,
    pub config: PlotConfig,
}

fn validate_loc(v: String) -> Result<(), String> {
    v.parse::<LegendLoc>().map(|_| ()).map_err(|e| e.to_string())
}

fn validate_pixels(v: String) -> Result<(), String> {
    match v.parse::<u32>() {
        Ok(0) => Err(String::from("must be greater than zero")),
        Ok(p) if p > MAX_SIDE => Err(format!("must be at most {}", MAX_SIDE)),
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn pixels(v: Option<&str>) -> Result<u32, clap::Error> {
    v.unwrap_or_default()
        .parse::<u32>()
        .map_err(|e| clap::Error::value_validation_auto(e.to_string()))
}

fn build_app<'a, 'b>(default_width: &'a str, default_height: &'a str) -> App<'a, 'b> {
    let arg_savefig = Arg::with_name("savefig")
        .help("save the figure to this file, format from the extension (svg, png, bmp, jpg)")
        .long_help(
            "save the figure to this file, format from the extension (svg, png, bmp, jpg); \
             if not given, show the figure in a window",
        )
        .long("savefig")
        .takes_value(true);
    let arg_separator = Arg::with_name("separator")
        .help("field separator of the input lines")
        .long("separator")
        .takes_value(true)
        .default_value(" ");
    let arg_legend = Arg::with_name("legend")
        .help("legend entry for each data column, repeat once per column")
        .long("legend")
        .takes_value(true)
        .multiple(true)
        .number_of_values(1);
    let arg_loc = Arg::with_name("loc")
        .help("location of the legend")
        .long("loc")
        .takes_value(true)
        .default_value("upper right")
        .validator(validate_loc);
    let arg_title = Arg::with_name("title")
        .help("title of the figure")
        .long("title")
        .takes_value(true);
    let arg_xlabel = Arg::with_name("xlabel")
        .help("name of the x axis")
        .long("xlabel")
        .takes_value(true);
    let arg_ylabel = Arg::with_name("ylabel")
        .help("name of the y axis")
        .long("ylabel")
        .takes_value(true);
    let arg_width = Arg::with_name("width")
        .help("width of the figure, in pixels")
        .long("width")
        .takes_value(true)
        .default_value(default_width)
        .validator(validate_pixels);
    let arg_height = Arg::with_name("height")
        .help("height of the figure, in pixels")
        .long("height")
        .takes_value(true)
        .default_value(default_height)
        .validator(validate_pixels);
    let arg_verbose = Arg::with_name("verbose")
        .help("print verbose information")
        .short("v")
        .long("verbose")
        .takes_value(false)
        .required(false);
    App::new("xyplot")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about(
            "cli app to plot the numeric columns read from stdin; \
             first column x, then one series per column",
        )
        .arg(arg_savefig)
        .arg(arg_separator)
        .arg(arg_legend)
        .arg(arg_loc)
        .arg(arg_title)
        .arg(arg_xlabel)
        .arg(arg_ylabel)
        .arg(arg_width)
        .arg(arg_height)
        .arg(arg_verbose)
}

/// Parses the given arguments, the first one being the program name.
pub fn parse_cli_from<I, T>(args: I) -> Result<PlotArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let default_width = DEFAULT_SIZE.0.to_string();
    let default_height = DEFAULT_SIZE.1.to_string();
    let cli_args = build_app(&default_width, &default_height).get_matches_from_safe(args)?;

    let separator = String::from(cli_args.value_of("separator").unwrap_or(" "));
    let legend: Vec<String> = cli_args
        .values_of("legend")
        .map(|values| values.map(String::from).collect())
        .unwrap_or_default();
    let loc = cli_args
        .value_of("loc")
        .unwrap_or_default()
        .parse::<LegendLoc>()
        .map_err(|e| clap::Error::value_validation_auto(e.to_string()))?;
    let width = pixels(cli_args.value_of("width"))?;
    let height = pixels(cli_args.value_of("height"))?;
    let config = PlotConfig {
        savefig: cli_args.value_of_os("savefig").map(PathBuf::from),
        legend,
        loc,
        title: cli_args.value_of("title").map(String::from),
        xlabel: cli_args.value_of("xlabel").map(String::from),
        ylabel: cli_args.value_of("ylabel").map(String::from),
        size: (width, height),
    };
    Ok(PlotArgs {
        separator,
        verbose: cli_args.is_present("verbose"),
        config,
    })
}

/// Takes the CLI arguments of the process, exits with the usage on errors.
pub fn parse_cli() -> PlotArgs {
    parse_cli_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults() {
        let args = parse_cli_from(vec!["xyplot"]).unwrap();
        assert_eq!(args.separator, " ");
        assert!(!args.verbose);
        assert_eq!(args.config, PlotConfig::default());
    }

    #[test]
    fn all_flags() {
        let args = parse_cli_from(vec![
            "xyplot",
            "--savefig",
            "out.png",
            "--separator",
            ",",
            "--legend",
            "A",
            "--legend",
            "B",
            "--loc",
            "lower left",
            "--title",
            "T",
            "--xlabel",
            "X",
            "--ylabel",
            "Y",
            "--width",
            "800",
            "--height",
            "600",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.separator, ",");
        assert!(args.verbose);
        assert_eq!(
            args.config,
            PlotConfig {
                savefig: Some(PathBuf::from("out.png")),
                legend: vec!["A".to_string(), "B".to_string()],
                loc: LegendLoc::LowerLeft,
                title: Some("T".to_string()),
                xlabel: Some("X".to_string()),
                ylabel: Some("Y".to_string()),
                size: (800, 600),
            }
        );
    }

    #[test]
    fn largest_figure_is_accepted() {
        let args =
            parse_cli_from(vec!["xyplot", "--width", "10000", "--height", "10000"]).unwrap();
        assert_eq!(args.config.size, (MAX_SIDE, MAX_SIDE));
    }

    #[test]
    fn legend_keeps_the_flag_order() {
        let args =
            parse_cli_from(vec!["xyplot", "--legend", "second", "--legend", "first"]).unwrap();
        assert_eq!(args.config.legend, vec!["second", "first"]);
    }

    #[rstest]
    #[case(&["xyplot", "--loc", "top"])]
    #[case(&["xyplot", "--width", "0"])]
    #[case(&["xyplot", "--height", "tall"])]
    #[case(&["xyplot", "--width", "20000"])]
    #[case(&["xyplot", "--height", "10001"])]
    #[case(&["xyplot", "--unknown"])]
    fn invalid_arguments(#[case] args: &[&str]) {
        assert!(parse_cli_from(args.iter().copied()).is_err());
    }
}
