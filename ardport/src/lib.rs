//! # ardport
//!
//! A library for finding the serial port of a USB microcontroller board
//! (an Arduino, typically) by the serial number burned into its USB
//! interface rather than by a device path that changes between reboots.
//!
//! This crate provides:
//!
//! - Serial port enumeration with USB metadata
//! - Manufacturer-based filtering of enumerated ports
//! - Resolution of a serial number to exactly one port
//! - Board handles with an explicit, inspectable resolution cache
//!
//! The library never prints and never opens a port. Every failure is
//! returned as an [`Error`].
//!
//! ## Features
//!
//! - `native` (default): enumerate host ports via the `serialport` crate
//! - `serde`: Serialization support for [`PortDescriptor`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use ardport::{ARDUINO_MANUFACTURER_PATTERN, Error, connected_serial_numbers, list_ports};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ports = list_ports()?;
//!     for serial in connected_serial_numbers(&ports, ARDUINO_MANUFACTURER_PATTERN) {
//!         println!("found board {serial}");
//!     }
//!
//!     match ardport::resolve("85734323231351E0D0F1") {
//!         Ok(port) => println!("{}", port.device_path),
//!         Err(Error::DeviceNotFound { .. }) => eprintln!("plug the board in"),
//!         Err(Error::AmbiguousDevice { device_paths, .. }) => {
//!             eprintln!("duplicate serial on {}", device_paths.join(", "));
//!         },
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod device;
pub mod error;
pub mod filter;
pub mod port;
pub mod resolve;

// Re-exports for convenience
// Native-specific re-exports
#[cfg(feature = "native")]
pub use {filter::list_matching_ports, port::NativePortEnumerator, port::list_ports, resolve::resolve};
pub use {
    device::{Board, CachePolicy},
    error::{Error, Result},
    filter::{ARDUINO_MANUFACTURER_PATTERN, connected_serial_numbers, filter_by_manufacturer},
    port::{PortDescriptor, PortEnumerator, StaticPorts},
    resolve::{Resolver, resolve_in},
};
