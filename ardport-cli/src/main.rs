//! arduino-device - find a board's serial port from its serial number.
//!
//! ## Features
//!
//! - Print the device path of the board with a given USB serial number
//! - List serial numbers of connected boards
//! - Configurable manufacturer filter
//! - JSON output for scripts
//! - Shell completion generation
//! - Environment variable and config file defaults

use {
    anyhow::Result,
    ardport::{ARDUINO_MANUFACTURER_PATTERN, NativePortEnumerator},
    clap::{
        ArgAction, CommandFactory, FromArgMatches, Parser, error::ErrorKind, parser::ValueSource,
    },
    clap_complete::Shell,
    console::style,
    env_logger::Env,
    log::debug,
    std::{env, ffi::OsString, path::PathBuf},
};

mod commands;
mod config;
mod error;

use {
    commands::{
        completions::cmd_completions,
        list::{ListOptions, cmd_list},
        resolve::cmd_resolve,
    },
    config::Config,
    error::{CliError, EXIT_OK, EXIT_USAGE, exit_code, hint},
};

/// Find an Arduino's serial port from its USB serial number.
///
/// Environment variables:
///   ARDPORT_SERIAL        - Default serial number
///   ARDPORT_MANUFACTURER  - Manufacturer filter for --list (default: arduino)
#[derive(Parser)]
#[command(name = "arduino-device")]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Board's serial number (run with --list to list all connected devices).
    #[arg(short = 's', long = "serialnum", env = "ARDPORT_SERIAL")]
    serialnum: Option<String>,

    /// List all available Arduino serial numbers.
    #[arg(short, long)]
    list: bool,

    /// With --list, include ports from every manufacturer.
    #[arg(short, long, requires = "list")]
    all: bool,

    /// Manufacturer substring (case-insensitive) identifying supported boards.
    #[arg(long, value_name = "PATTERN", env = "ARDPORT_MANUFACTURER")]
    manufacturer: Option<String>,

    /// Output as JSON to stdout.
    #[arg(long)]
    json: bool,

    /// Verbose output level (-v, -vv for increasing detail).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-essential output).
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to a configuration file.
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Cli {
    /// Parse `args`, treating empty environment defaults as unset.
    ///
    /// An empty value typed on the command line is still a usage error.
    fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cmd = Self::command();
        let matches = cmd.try_get_matches_from_mut(args)?;
        let mut cli = Self::from_arg_matches(&matches)?;

        for (id, flag, value) in [
            ("serialnum", "--serialnum <SERIALNUM>", &mut cli.serialnum),
            ("manufacturer", "--manufacturer <PATTERN>", &mut cli.manufacturer),
        ] {
            if value.as_deref() != Some("") {
                continue;
            }
            if matches.value_source(id) != Some(ValueSource::EnvVariable) {
                return Err(cmd.error(
                    ErrorKind::InvalidValue,
                    format!("a value is required for '{flag}' but none was supplied"),
                ));
            }
            *value = None;
        }

        Ok(cli)
    }
}

fn main() {
    // --- NO_COLOR and TTY detection ---
    let stderr_is_tty = console::Term::stderr().is_term();
    if env::var_os("NO_COLOR").is_some() || !stderr_is_tty {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Help and version go to stdout with code 0; any other parse
    // failure is a usage error.
    let cli = match Cli::try_parse_args(env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { EXIT_USAGE } else { EXIT_OK });
        },
    };

    init_logging(&cli);

    let code = match run(&cli) {
        Ok(()) => EXIT_OK,
        Err(err) => {
            report(&err);
            exit_code(&err)
        },
    };
    std::process::exit(code);
}

fn init_logging(cli: &Cli) {
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_target(cli.verbose >= 2)
        .format_timestamp(if cli.verbose >= 2 {
            Some(env_logger::TimestampPrecision::Millis)
        } else {
            None
        })
        .init();

    debug!(
        "arduino-device v{} (verbose level: {})",
        env!("CARGO_PKG_VERSION"),
        cli.verbose
    );
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        cmd_completions(shell);
        return Ok(());
    }

    let config = if let Some(ref path) = cli.config_path {
        Config::load_from_path(path)
    } else {
        Config::load()
    };

    let pattern = cli
        .manufacturer
        .as_deref()
        .or_else(|| config.manufacturer())
        .unwrap_or(ARDUINO_MANUFACTURER_PATTERN);

    if cli.list {
        return cmd_list(
            &NativePortEnumerator,
            ListOptions {
                pattern,
                all: cli.all,
                json: cli.json,
            },
        );
    }

    let Some(serial) = cli
        .serialnum
        .as_deref()
        .or_else(|| config.serial())
    else {
        println!("No serial number specified...");
        let _ = Cli::command().print_help();
        return Err(CliError::MissingSerialNumber.into());
    };
    debug!("Resolving serial number '{serial}'");

    cmd_resolve(&NativePortEnumerator, serial, cli.json)
}

/// Print an error (and a hint, if any) to stderr. Stdout is left untouched.
fn report(err: &anyhow::Error) {
    eprintln!("{} {err:#}", style("Error:").red().bold());
    if let Some(hint) = hint(err) {
        eprintln!("  {}", style(hint).dim());
    }
}
