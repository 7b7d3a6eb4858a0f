use crate::verbosity::Verbosity;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use const_format::formatcp;
use std::{
    fs,
    path::{Path, PathBuf},
};
use toml::{Table, Value};
use urlinker_lib::{ALLOW_FTP_ADDRESSES, ALLOW_UPPER_CASE_URL_SCHEMES, Options};

pub(crate) const URLINKER_CONFIG_FILE: &str = "urlinker.toml";

/// Configuration key that switches the CLI to trusted HTML input.
/// All other keys are handed to [`Options::from_table`].
pub(crate) const TRUSTED_HTML: &str = "trustedHtml";

/// Input name for standard input
pub(crate) const STDIN: &str = "-";

// We use a custom help message here because we want to show the default
// value of the config file, but also be able to check if the user has
// provided a custom value. If they didn't, we won't throw an error if
// the file doesn't exist.
const HELP_MSG_CONFIG_FILE: &str = formatcp!(
    "Configuration file to use\n\n[default: {}]",
    URLINKER_CONFIG_FILE,
);

/// urlinker turns bare web and e-mail addresses into HTML links.
///
/// Plain text input is HTML-escaped, except for the inserted links. With
/// `--trusted-html` the input is treated as HTML and only addresses in its
/// text content are linked.
#[derive(Parser, Debug)]
#[command(version, about, next_display_order = None)]
pub(crate) struct UrlinkerOptions {
    /// Files to link, or `-` for standard input
    #[arg(name = "inputs", default_value = STDIN)]
    pub(crate) inputs: Vec<String>,

    /// Configuration file to use
    #[arg(short, long = "config")]
    #[arg(help = HELP_MSG_CONFIG_FILE)]
    pub(crate) config_file: Option<PathBuf>,

    /// Write the result to this file instead of standard output
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    #[clap(flatten)]
    pub(crate) config: Config,
}

/// Flags that can also be set in the configuration file
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Config {
    /// Treat the input as trusted HTML instead of plain text
    ///
    /// Tags, attribute values, character references and existing anchors are
    /// kept as they are and nothing is escaped.
    #[arg(long)]
    pub(crate) trusted_html: bool,

    /// Also link addresses starting with `ftp://`
    #[arg(long)]
    pub(crate) allow_ftp_addresses: bool,

    /// Match schemes and hosts regardless of case, e.g. `HTTP://EXAMPLE.COM`
    #[arg(long)]
    pub(crate) allow_upper_case_url_schemes: bool,

    #[command(flatten)]
    pub(crate) verbose: Verbosity,
}

/// Linker settings after merging the configuration file and the CLI
#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) trusted_html: bool,
    pub(crate) options: Options,
}

impl Config {
    /// Load a configuration table from a TOML file
    pub(crate) fn load_from_file(path: &Path) -> Result<Table> {
        // Read configuration file
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).with_context(|| "Failed to parse configuration file")
    }

    /// Merge the CLI flags into a configuration table and build the settings.
    ///
    /// A flag given on the command line wins over the file.
    pub(crate) fn settings(&self, mut table: Table) -> Result<Settings> {
        let trusted_html = match table.remove(TRUSTED_HTML) {
            None => false,
            Some(Value::Boolean(value)) => value,
            Some(other) => {
                return Err(anyhow!(
                    r#"Option "{TRUSTED_HTML}" must be of type "boolean", "{}" given."#,
                    other.type_str()
                ));
            }
        };

        for (enabled, key) in [
            (self.allow_ftp_addresses, ALLOW_FTP_ADDRESSES),
            (self.allow_upper_case_url_schemes, ALLOW_UPPER_CASE_URL_SCHEMES),
        ] {
            if enabled {
                table.insert(key.to_string(), Value::Boolean(true));
            }
        }

        Ok(Settings {
            trusted_html: trusted_html || self.trusted_html,
            options: Options::from_table(&table)?,
        })
    }
}
