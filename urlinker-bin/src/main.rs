//! `urlinker` turns bare web and e-mail addresses into HTML links.
//!
//! The urlinker binary is a wrapper around urlinker-lib, which provides
//! convenience functions for calling urlinker from the command-line.
//!
//! Link the addresses in a plain text file; everything else gets escaped:
//! ```sh
//! urlinker notes.txt
//! ```
//!
//! Link the addresses in the text content of an HTML page:
//! ```sh
//! urlinker --trusted-html page.html --output linked.html
//! ```
//!
//! Read from standard input:
//! ```sh
//! echo "Mail bob@example.com" | urlinker
//! ```
#![warn(clippy::all, clippy::pedantic)]
#![warn(
    absolute_paths_not_starting_with_crate,
    rustdoc::invalid_html_tags,
    missing_copy_implementations,
    missing_debug_implementations,
    semicolon_in_expressions_from_macros,
    unreachable_pub,
    unused_extern_crates,
    variant_size_differences,
    clippy::missing_const_for_fn
)]
#![deny(anonymous_parameters, macro_use_extern_crate)]
#![deny(missing_docs)]

use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Error, Result, bail};
use clap::Parser;
use formatters::log::init_logging;
use log::{debug, error, info};
use toml::Table;
use urlinker_lib::UrlLinker;

mod formatters;
mod options;
mod verbosity;

use crate::options::{Config, STDIN, Settings, URLINKER_CONFIG_FILE, UrlinkerOptions};

/// A C-like enum that can be cast to `i32` and used as process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitCode {
    Success = 0,
    // NOTE: exit code 1 is used for any `Result::Err` bubbled up to `main()`
    // using the `?` operator.
    #[allow(unused)]
    UnexpectedFailure = 1,
    ConfigFile = 3,
}

fn main() -> Result<()> {
    // std::process::exit doesn't guarantee that all destructors will be run,
    // therefore we wrap the main code in another function to ensure that.
    // See: https://doc.rust-lang.org/stable/std/process/fn.exit.html
    let exit_code = run_main()?;
    std::process::exit(exit_code);
}

/// Merge all provided config options into one.
/// This includes a potential config file and the command-line flags
fn load_config() -> Result<(UrlinkerOptions, Settings)> {
    let opts = UrlinkerOptions::parse();

    init_logging(&opts.config.verbose);

    // Load a potentially existing config file and merge the CLI flags into it
    let table = if let Some(config_file) = &opts.config_file {
        match Config::load_from_file(config_file) {
            Ok(table) => table,
            Err(e) => {
                bail!(
                    "Cannot load configuration file `{}`: {e:?}",
                    config_file.display()
                );
            }
        }
    } else {
        // If no config file was explicitly provided, we try to load the default
        // config file from the current directory if the file exists. This will
        // raise an error if the file is invalid, just like the explicitly
        // provided config file.
        let default_config = PathBuf::from(URLINKER_CONFIG_FILE);
        if default_config.is_file() {
            match Config::load_from_file(&default_config) {
                Ok(table) => table,
                Err(e) => {
                    bail!(
                        "Cannot load default configuration file `{}`: {e:?}",
                        default_config.display()
                    );
                }
            }
        } else {
            Table::new()
        }
    };

    let settings = opts
        .config
        .settings(table)
        .context("Invalid configuration")?;
    debug!("Using {settings:?}");

    Ok((opts, settings))
}

/// Load the configuration and call the urlinker entrypoint
fn run_main() -> Result<i32> {
    use std::process::exit;

    let (opts, settings) = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Error while loading config: {e:#}");
            exit(ExitCode::ConfigFile as i32);
        }
    };

    match run(&opts, settings) {
        Err(e) if Some(ErrorKind::BrokenPipe) == underlying_io_error_kind(&e) => {
            Ok(ExitCode::Success as i32)
        }
        res => res,
    }
}

/// Check if the given error can be traced back to an `io::ErrorKind`
/// This is helpful for troubleshooting the root cause of an error.
/// Code is taken from the anyhow documentation.
fn underlying_io_error_kind(error: &Error) -> Option<io::ErrorKind> {
    for cause in error.chain() {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            return Some(io_error.kind());
        }
    }
    None
}

/// Run urlinker on the given inputs
fn run(opts: &UrlinkerOptions, settings: Settings) -> Result<i32> {
    let linker = UrlLinker::new(settings.options).context("Cannot create linker")?;

    let mut writer: Box<dyn Write> = match &opts.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Cannot create output file `{}`", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    info!("Linking {} input(s)", opts.inputs.len());
    for input in &opts.inputs {
        let content = read_input(input)?;
        let linked = if settings.trusted_html {
            linker.link_urls_in_trusted_html(&content)
        } else {
            linker.link_urls_and_escape_html(&content)
        }
        .with_context(|| format!("Cannot link `{input}`"))?;

        writer.write_all(linked.as_bytes())?;
    }
    writer.flush()?;

    Ok(ExitCode::Success as i32)
}

/// Read an input file, or standard input for `-`
fn read_input(input: &str) -> Result<String> {
    if input == STDIN {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Cannot read from standard input")?;
        return Ok(content);
    }

    std::fs::read_to_string(input).with_context(|| format!("Cannot read input file `{input}`"))
}
