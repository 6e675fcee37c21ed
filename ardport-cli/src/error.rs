//! CLI error classes and process exit codes.
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! | 0    | Success (including help and version)     |
//! | 1    | Usage error or unexpected failure        |
//! | 2    | No connected board has the serial number |
//! | 3    | Several boards share the serial number   |
//! | 4    | Serial ports could not be enumerated     |

use thiserror::Error;

/// Successful run.
pub const EXIT_OK: i32 = 0;
/// Bad invocation, or any failure without a more specific code.
pub const EXIT_USAGE: i32 = 1;
/// [`ardport::Error::DeviceNotFound`].
pub const EXIT_NOT_FOUND: i32 = 2;
/// [`ardport::Error::AmbiguousDevice`].
pub const EXIT_AMBIGUOUS: i32 = 3;
/// [`ardport::Error::Enumeration`].
pub const EXIT_ENUMERATION: i32 = 4;

/// Failures raised by the presentation layer itself.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither `--serialnum` nor `--list` was given and no default is configured.
    #[error("No serial number specified (use --serialnum, or --list to see connected boards)")]
    MissingSerialNumber,
}

/// Map an error to the process exit code.
///
/// Library errors keep their code through any added context; everything
/// else, [`CliError`] included, exits with [`EXIT_USAGE`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match library_error(err) {
        Some(ardport::Error::DeviceNotFound { .. }) => EXIT_NOT_FOUND,
        Some(ardport::Error::AmbiguousDevice { .. }) => EXIT_AMBIGUOUS,
        Some(ardport::Error::Enumeration(_)) => EXIT_ENUMERATION,
        None => EXIT_USAGE,
    }
}

/// Short advice printed under an error, if there is any.
pub fn hint(err: &anyhow::Error) -> Option<&'static str> {
    Some(match library_error(err)? {
        ardport::Error::DeviceNotFound { .. } => {
            "Check that the board is plugged in, or run with --list to see connected boards."
        },
        ardport::Error::AmbiguousDevice { .. } => {
            "Unplug the extra boards, or reflash one of them with a distinct serial number."
        },
        ardport::Error::Enumeration(_) => {
            "Check that you have permission to read the system's serial devices."
        },
    })
}

fn library_error(err: &anyhow::Error) -> Option<&ardport::Error> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ardport::Error>())
}
