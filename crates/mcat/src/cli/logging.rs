//! Logger setup for the `mcat` binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable holding the log filter, in `env_logger` syntax.
pub const LOG_ENV: &str = "MCAT_LOG";

/// Filter used when neither `MCAT_LOG` nor `-v` is given.
const DEFAULT_FILTER: &str = "warn";

/// Maps the `-v` count to a level. Zero leaves the environment filter in charge.
pub fn level_for_verbosity(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Installs the global logger, writing to stderr.
pub fn init(verbose: u8) {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, DEFAULT_FILTER));
    if let Some(level) = level_for_verbosity(verbose) {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), None);
        assert_eq!(level_for_verbosity(1), Some(LevelFilter::Info));
        assert_eq!(level_for_verbosity(2), Some(LevelFilter::Debug));
        assert_eq!(level_for_verbosity(3), Some(LevelFilter::Trace));
        assert_eq!(level_for_verbosity(9), Some(LevelFilter::Trace));
    }
}
