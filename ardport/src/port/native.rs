//! Native serial port enumeration using the `serialport` crate.
//!
//! This module provides port discovery for native platforms
//! (Linux, macOS, Windows, FreeBSD, etc.).

use {
    crate::{
        error::Result,
        port::{PortDescriptor, PortEnumerator},
    },
    log::{debug, trace},
    serialport::{SerialPortInfo, SerialPortType},
};

/// Native port enumerator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePortEnumerator;

impl PortEnumerator for NativePortEnumerator {
    fn list_ports(&self) -> Result<Vec<PortDescriptor>> {
        let ports = serialport::available_ports().inspect_err(|e| {
            debug!("Failed to enumerate serial ports: {e}");
        })?;

        let descriptors: Vec<PortDescriptor> = ports
            .into_iter()
            .map(PortDescriptor::from)
            .collect();
        debug!("Enumerated {} serial port(s)", descriptors.len());

        Ok(descriptors)
    }
}

impl From<SerialPortInfo> for PortDescriptor {
    fn from(info: SerialPortInfo) -> Self {
        let mut port = PortDescriptor::new(info.port_name);

        // Only USB ports report vendor metadata
        if let SerialPortType::UsbPort(usb_info) = info.port_type {
            trace!(
                "Found USB port: {} (VID: {:04X}, PID: {:04X}, manufacturer: {:?}, serial: {:?})",
                port.device_path,
                usb_info.vid,
                usb_info.pid,
                usb_info.manufacturer,
                usb_info.serial_number
            );
            port.vid = Some(usb_info.vid);
            port.pid = Some(usb_info.pid);
            port.manufacturer = usb_info.manufacturer;
            port.serial_number = usb_info.serial_number;
            port.product = usb_info.product;
        } else {
            trace!("Found non-USB port: {}", port.device_path);
        }

        port
    }
}
