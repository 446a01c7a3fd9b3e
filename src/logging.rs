use env_logger::Env;

/// Installs the stderr logger, `warn` by default and `debug` when verbose.
/// RUST_LOG takes precedence over both.
pub fn init_logging(verbose: bool) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level(verbose)))
        .format_timestamp(None)
        .try_init()
}

fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
