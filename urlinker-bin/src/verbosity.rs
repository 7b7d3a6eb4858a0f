//! The `-v` and `-q` flags.
//!
//! By default only warnings and errors are reported.
//! - `-q` only reports errors
//! - `-v` shows info
//! - `-vv` shows debug
//! - `-vvv` shows trace

use log::{Level, LevelFilter};

#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Verbosity {
    /// Pass many times for more log output
    ///
    /// By default, it'll only report warnings and errors. Passing `-v` one
    /// time also prints info messages, `-vv` enables debug logging and `-vvv`
    /// trace logging, which shows every rejected address.
    #[arg(
        long,
        short = 'v',
        action = clap::ArgAction::Count,
        global = true,
        help = Self::verbose_help(),
        conflicts_with = "quiet",
    )]
    verbose: u8,

    #[arg(
        long,
        short = 'q',
        action = clap::ArgAction::Count,
        global = true,
        help = Self::quiet_help(),
        conflicts_with = "verbose",
    )]
    quiet: u8,
}

impl Verbosity {
    /// Get the log level.
    pub(crate) const fn log_level(&self) -> Level {
        level_enum(self.verbosity())
    }

    /// Get the log level filter.
    pub(crate) fn log_level_filter(&self) -> LevelFilter {
        self.log_level().to_level_filter()
    }

    #[allow(clippy::cast_possible_wrap)]
    const fn verbosity(&self) -> i8 {
        level_value(Level::Warn) - (self.quiet as i8) + (self.verbose as i8)
    }

    const fn verbose_help() -> &'static str {
        "More output per occurrence"
    }

    const fn quiet_help() -> &'static str {
        "Less output per occurrence"
    }
}

const fn level_value(level: Level) -> i8 {
    match level {
        Level::Error => 0,
        Level::Warn => 1,
        Level::Info => 2,
        Level::Debug => 3,
        Level::Trace => 4,
    }
}

const fn level_enum(verbosity: i8) -> Level {
    match verbosity {
        i8::MIN..=0 => Level::Error,
        1 => Level::Warn,
        2 => Level::Info,
        3 => Level::Debug,
        _ => Level::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Parser)]
    struct Cli {
        #[clap(flatten)]
        verbose: Verbosity,
    }

    #[test]
    fn verify_app() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_log_level() {
        assert_eq!(Verbosity::default().log_level(), Level::Warn);
    }

    #[test]
    fn test_flags_change_level() {
        let level = |args: &[&str]| Cli::parse_from(args).verbose.log_level();

        assert_eq!(level(&["urlinker", "-q"]), Level::Error);
        assert_eq!(level(&["urlinker", "-qqq"]), Level::Error);
        assert_eq!(level(&["urlinker", "-v"]), Level::Info);
        assert_eq!(level(&["urlinker", "-vv"]), Level::Debug);
        assert_eq!(level(&["urlinker", "-vvvvv"]), Level::Trace);
    }

    #[test]
    fn test_log_level_filter() {
        let filter = |args: &[&str]| Cli::parse_from(args).verbose.log_level_filter();

        assert_eq!(filter(&["urlinker"]), LevelFilter::Warn);
        assert_eq!(filter(&["urlinker", "-v"]), LevelFilter::Info);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["urlinker", "-v", "-q"]).is_err());
    }
}
