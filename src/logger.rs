/// Initializes env_logger for console output.
///
/// Notices and warnings are shown by default; `--verbose` adds debug
/// diagnostics. `RUST_LOG` still overrides both.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
