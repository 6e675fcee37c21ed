//! Serial port enumeration.
//!
//! Enumeration is split from resolution so that matching logic can run over
//! any snapshot of ports, whether it came from the operating system or was
//! built by hand:
//!
//! ```text
//! +----------------------+     +----------------------+
//! | NativePortEnumerator |     |     StaticPorts      |
//! |     (serialport)     |     |   (fixed snapshot)   |
//! +----------+-----------+     +----------+-----------+
//!            |                            |
//!            +-------------+--------------+
//!                          v
//!               +----------+-----------+
//!               |    PortEnumerator    |
//!               +----------+-----------+
//!                          v
//!               filter / resolve / Board
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ardport::port::{PortDescriptor, PortEnumerator, StaticPorts};
//!
//! let ports = StaticPorts::new(vec![
//!     PortDescriptor::new("/dev/ttyACM0").with_serial_number("AB12"),
//! ]);
//! let snapshot = ports.list_ports().unwrap();
//! assert_eq!(snapshot[0].device_path, "/dev/ttyACM0");
//! ```

#[cfg(feature = "native")]
pub mod native;

use crate::error::Result;

/// One serial connection point as reported at enumeration time.
///
/// Descriptors are snapshots: a fresh set is produced on every enumeration
/// and none of them track later changes to the hardware.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortDescriptor {
    /// OS path of the port (e.g., "/dev/ttyACM0" or "COM3").
    pub device_path: String,
    /// Manufacturer string (if available).
    pub manufacturer: Option<String>,
    /// Serial number (if available).
    pub serial_number: Option<String>,
    /// USB vendor ID (if available).
    pub vid: Option<u16>,
    /// USB product ID (if available).
    pub pid: Option<u16>,
    /// Product string (if available).
    pub product: Option<String>,
}

impl PortDescriptor {
    /// Create a descriptor that only knows its device path.
    pub fn new(device_path: impl Into<String>) -> Self {
        Self {
            device_path: device_path.into(),
            manufacturer: None,
            serial_number: None,
            vid: None,
            pid: None,
            product: None,
        }
    }

    /// Set the manufacturer string.
    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Set the serial number.
    #[must_use]
    pub fn with_serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    /// Set the USB vendor and product IDs.
    #[must_use]
    pub fn with_usb_ids(mut self, vid: u16, pid: u16) -> Self {
        self.vid = Some(vid);
        self.pid = Some(pid);
        self
    }

    /// Set the product string.
    #[must_use]
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Serial number, treating an empty string as absent.
    pub fn serial(&self) -> Option<&str> {
        self.serial_number
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}

/// Source of serial port snapshots.
///
/// Each call to [`PortEnumerator::list_ports`] must query afresh; the result
/// is owned by the caller and is not tied to later OS state.
pub trait PortEnumerator {
    /// List all serial ports visible right now.
    fn list_ports(&self) -> Result<Vec<PortDescriptor>>;
}

impl<E: PortEnumerator + ?Sized> PortEnumerator for &E {
    fn list_ports(&self) -> Result<Vec<PortDescriptor>> {
        (**self).list_ports()
    }
}

/// Enumerator over a fixed set of ports.
#[derive(Debug, Clone, Default)]
pub struct StaticPorts {
    ports: Vec<PortDescriptor>,
}

impl StaticPorts {
    /// Create an enumerator that always reports `ports`.
    pub fn new(ports: Vec<PortDescriptor>) -> Self {
        Self { ports }
    }
}

impl From<Vec<PortDescriptor>> for StaticPorts {
    fn from(ports: Vec<PortDescriptor>) -> Self {
        Self::new(ports)
    }
}

impl PortEnumerator for StaticPorts {
    fn list_ports(&self) -> Result<Vec<PortDescriptor>> {
        Ok(self
            .ports
            .clone())
    }
}

/// List all serial ports using the native enumerator.
#[cfg(feature = "native")]
pub fn list_ports() -> Result<Vec<PortDescriptor>> {
    native::NativePortEnumerator.list_ports()
}

#[cfg(feature = "native")]
pub use native::NativePortEnumerator;
