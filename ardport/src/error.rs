//! Error types for ardport.

use thiserror::Error;

/// Result type for ardport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ardport operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system query for serial ports failed.
    #[error("Failed to enumerate serial ports")]
    Enumeration(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No connected device reports the requested serial number.
    #[error("No connected device with serial number '{serial_number}'")]
    DeviceNotFound {
        /// Serial number that was requested.
        serial_number: String,
    },

    /// Several connected devices report the requested serial number.
    #[error(
        "{} connected devices share serial number '{serial_number}': {}",
        device_paths.len(),
        device_paths.join(", ")
    )]
    AmbiguousDevice {
        /// Serial number that was requested.
        serial_number: String,
        /// Paths of every device reporting that serial number.
        device_paths: Vec<String>,
    },
}

impl Error {
    /// Wrap any enumeration backend failure.
    pub fn enumeration<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Enumeration(err.into())
    }

    /// Serial number carried by resolution errors.
    pub fn serial_number(&self) -> Option<&str> {
        match self {
            Self::DeviceNotFound { serial_number } | Self::AmbiguousDevice { serial_number, .. } => {
                Some(serial_number.as_str())
            },
            Self::Enumeration(_) => None,
        }
    }
}

#[cfg(feature = "native")]
impl From<serialport::Error> for Error {
    fn from(err: serialport::Error) -> Self {
        Self::enumeration(err)
    }
}
