//! Manufacturer-based port filtering.
//!
//! Boards of one hardware family are recognised by a case-insensitive
//! substring of the manufacturer string their USB interface reports. The
//! default pattern matches genuine Arduino boards as well as clones that
//! advertise themselves as such.

use crate::port::PortDescriptor;

#[cfg(feature = "native")]
use {crate::error::Result, log::debug};

/// Default manufacturer pattern for Arduino boards.
pub const ARDUINO_MANUFACTURER_PATTERN: &str = "arduino";

/// Lazily select ports whose manufacturer contains `pattern`, ignoring case.
///
/// Ports without a manufacturer string (or with an empty one) never match.
/// Input order is preserved. The iterator borrows the snapshot and can be
/// cloned to walk it again.
pub fn filter_by_manufacturer<'a>(
    descriptors: &'a [PortDescriptor],
    pattern: &str,
) -> impl Iterator<Item = &'a PortDescriptor> + Clone + use<'a> {
    let needle = pattern.to_lowercase();
    descriptors
        .iter()
        .filter(move |port| manufacturer_matches(port, &needle))
}

/// Serial numbers of the ports matching `pattern`.
///
/// Matching ports that report no serial number are skipped.
pub fn connected_serial_numbers<'a>(
    descriptors: &'a [PortDescriptor],
    pattern: &str,
) -> impl Iterator<Item = &'a str> + Clone + use<'a> {
    filter_by_manufacturer(descriptors, pattern).filter_map(PortDescriptor::serial)
}

/// Enumerate native ports and keep those matching `pattern`.
#[cfg(feature = "native")]
pub fn list_matching_ports(pattern: &str) -> Result<Vec<PortDescriptor>> {
    let ports = crate::port::list_ports()?;
    let matching: Vec<PortDescriptor> = filter_by_manufacturer(&ports, pattern)
        .cloned()
        .collect();
    debug!(
        "{} of {} port(s) match manufacturer pattern '{pattern}'",
        matching.len(),
        ports.len()
    );
    Ok(matching)
}

/// `needle` must already be lowercase.
fn manufacturer_matches(port: &PortDescriptor, needle: &str) -> bool {
    match port.manufacturer.as_deref() {
        Some(manufacturer) if !manufacturer.is_empty() => manufacturer
            .to_lowercase()
            .contains(needle),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(path: &str, manufacturer: Option<&str>) -> PortDescriptor {
        let port = PortDescriptor::new(path);
        match manufacturer {
            Some(m) => port.with_manufacturer(m),
            None => port,
        }
    }

    #[test]
    fn test_empty_snapshot_yields_nothing() {
        assert_eq!(filter_by_manufacturer(&[], "arduino").count(), 0);
        assert_eq!(filter_by_manufacturer(&[], "").count(), 0);
    }

    #[test]
    fn test_case_insensitive_and_order_preserving() {
        let ports = vec![
            port("/dev/ttyACM0", Some("Arduino LLC")),
            port("/dev/ttyUSB0", Some("OtherCo")),
            port("/dev/ttyACM1", Some("genuine arduino clone")),
        ];

        let matched: Vec<&str> = filter_by_manufacturer(&ports, "arduino")
            .map(|p| p.device_path.as_str())
            .collect();
        assert_eq!(matched, ["/dev/ttyACM0", "/dev/ttyACM1"]);
    }

    #[test]
    fn test_uppercase_pattern_matches() {
        let ports = vec![port("/dev/ttyACM0", Some("Arduino (www.arduino.cc)"))];
        assert_eq!(filter_by_manufacturer(&ports, "ARDUINO").count(), 1);
    }

    #[test]
    fn test_missing_or_empty_manufacturer_never_matches() {
        let ports = vec![
            port("/dev/ttyS0", None),
            port("/dev/ttyS1", Some("")),
        ];
        assert_eq!(filter_by_manufacturer(&ports, "arduino").count(), 0);
        assert_eq!(filter_by_manufacturer(&ports, "").count(), 0);
    }

    #[test]
    fn test_iterator_can_be_walked_twice() {
        let ports = vec![
            port("/dev/ttyACM0", Some("Arduino LLC")),
            port("/dev/ttyUSB0", Some("FTDI")),
        ];
        let matches = filter_by_manufacturer(&ports, "arduino");
        assert_eq!(matches.clone().count(), 1);
        assert_eq!(matches.count(), 1);
    }

    #[test]
    fn test_connected_serial_numbers_skips_missing() {
        let ports = vec![
            port("/dev/ttyACM0", Some("Arduino LLC")).with_serial_number("AB12"),
            port("/dev/ttyACM1", Some("Arduino LLC")),
            port("/dev/ttyUSB0", Some("FTDI")).with_serial_number("FT01"),
            port("/dev/ttyACM2", Some("arduino.cc")).with_serial_number("CD34"),
        ];

        let serials: Vec<&str> = connected_serial_numbers(&ports, ARDUINO_MANUFACTURER_PATTERN).collect();
        assert_eq!(serials, ["AB12", "CD34"]);
    }
}
