//! Serial number to device resolution.
//!
//! Resolution maps a board's serial number to exactly one connected port.
//! Every call performs one fresh enumeration and nothing is remembered
//! between calls, so a board that was replugged onto a different path is
//! found at its new location.
//!
//! Matching is an exact, case-sensitive string comparison. Two connected
//! ports reporting the same serial number is reported as
//! [`Error::AmbiguousDevice`] rather than guessed at.

use {
    crate::{
        error::{Error, Result},
        port::{PortDescriptor, PortEnumerator},
    },
    log::debug,
};

/// Resolves serial numbers against a [`PortEnumerator`].
#[derive(Debug, Clone, Default)]
pub struct Resolver<E> {
    enumerator: E,
}

impl<E: PortEnumerator> Resolver<E> {
    /// Create a resolver over `enumerator`.
    pub fn new(enumerator: E) -> Self {
        Self { enumerator }
    }

    /// The enumerator this resolver queries.
    pub fn enumerator(&self) -> &E {
        &self.enumerator
    }

    /// Enumerate once and resolve `serial_number` to a single port.
    pub fn resolve(&self, serial_number: &str) -> Result<PortDescriptor> {
        let ports = self
            .enumerator
            .list_ports()?;
        resolve_in(ports, serial_number)
    }
}

/// Resolve `serial_number` within an already captured snapshot.
///
/// Ports with no serial number (or an empty one) are never candidates.
pub fn resolve_in(
    descriptors: impl IntoIterator<Item = PortDescriptor>,
    serial_number: &str,
) -> Result<PortDescriptor> {
    let mut matches: Vec<PortDescriptor> = descriptors
        .into_iter()
        .filter(|port| port.serial() == Some(serial_number))
        .collect();

    match matches.len() {
        0 => {
            debug!("No port reports serial number '{serial_number}'");
            Err(Error::DeviceNotFound {
                serial_number: serial_number.to_string(),
            })
        },
        1 => {
            let port = matches.remove(0);
            debug!(
                "Resolved serial number '{serial_number}' to {}",
                port.device_path
            );
            Ok(port)
        },
        n => {
            debug!("{n} ports report serial number '{serial_number}'");
            Err(Error::AmbiguousDevice {
                serial_number: serial_number.to_string(),
                device_paths: matches
                    .into_iter()
                    .map(|port| port.device_path)
                    .collect(),
            })
        },
    }
}

/// Resolve `serial_number` against the ports currently attached to this host.
#[cfg(feature = "native")]
pub fn resolve(serial_number: &str) -> Result<PortDescriptor> {
    Resolver::new(crate::port::NativePortEnumerator).resolve(serial_number)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::port::StaticPorts,
        std::cell::Cell,
    };

    fn ports(serials: &[(&str, &str)]) -> StaticPorts {
        StaticPorts::new(
            serials
                .iter()
                .map(|(path, serial)| PortDescriptor::new(*path).with_serial_number(*serial))
                .collect(),
        )
    }

    struct FailingPorts;

    impl PortEnumerator for FailingPorts {
        fn list_ports(&self) -> Result<Vec<PortDescriptor>> {
            Err(Error::enumeration("permission denied"))
        }
    }

    struct CountingPorts {
        inner: StaticPorts,
        calls: Cell<usize>,
    }

    impl PortEnumerator for CountingPorts {
        fn list_ports(&self) -> Result<Vec<PortDescriptor>> {
            self.calls
                .set(self.calls.get() + 1);
            self.inner
                .list_ports()
        }
    }

    #[test]
    fn test_zero_matches_is_not_found() {
        let resolver = Resolver::new(ports(&[("/dev/ttyACM0", "AB12"), ("/dev/ttyACM1", "CD34")]));

        let err = resolver
            .resolve("ZZ99")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DeviceNotFound { ref serial_number } if serial_number == "ZZ99"
        ));
    }

    #[test]
    fn test_single_match_resolves() {
        let _ = env_logger::builder()
            .is_test(true)
            .try_init();
        let resolver = Resolver::new(ports(&[("/dev/ttyACM0", "AB12"), ("/dev/ttyACM1", "CD34")]));

        let port = resolver
            .resolve("AB12")
            .unwrap();
        assert_eq!(port.device_path, "/dev/ttyACM0");
        assert_eq!(port.serial(), Some("AB12"));
    }

    #[test]
    fn test_duplicate_serials_are_ambiguous() {
        let resolver = Resolver::new(ports(&[
            ("/dev/ttyACM0", "AB12"),
            ("/dev/ttyUSB3", "CD34"),
            ("/dev/ttyACM1", "AB12"),
        ]));

        match resolver.resolve("AB12") {
            Err(Error::AmbiguousDevice {
                serial_number,
                device_paths,
            }) => {
                assert_eq!(serial_number, "AB12");
                assert_eq!(device_paths, ["/dev/ttyACM0", "/dev/ttyACM1"]);
            },
            other => panic!("expected AmbiguousDevice, got {other:?}"),
        }
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let resolver = Resolver::new(ports(&[("/dev/ttyACM0", "ab12")]));

        assert!(matches!(
            resolver.resolve("AB12"),
            Err(Error::DeviceNotFound { .. })
        ));
    }

    #[test]
    fn test_no_whitespace_normalization() {
        let resolver = Resolver::new(ports(&[("/dev/ttyACM0", "AB12")]));

        assert!(matches!(
            resolver.resolve(" AB12"),
            Err(Error::DeviceNotFound { .. })
        ));
    }

    #[test]
    fn test_ports_without_serial_never_match() {
        let resolver = Resolver::new(StaticPorts::new(vec![
            PortDescriptor::new("/dev/ttyS0"),
            PortDescriptor::new("/dev/ttyS1").with_serial_number(""),
        ]));

        assert!(matches!(
            resolver.resolve(""),
            Err(Error::DeviceNotFound { .. })
        ));
    }

    #[test]
    fn test_enumeration_failure_propagates() {
        let resolver = Resolver::new(FailingPorts);

        assert!(matches!(
            resolver.resolve("AB12"),
            Err(Error::Enumeration(_))
        ));
    }

    #[test]
    fn test_each_resolve_enumerates_once() {
        let counting = CountingPorts {
            inner: ports(&[("/dev/ttyACM0", "AB12")]),
            calls: Cell::new(0),
        };
        let resolver = Resolver::new(&counting);

        resolver
            .resolve("AB12")
            .unwrap();
        let _ = resolver.resolve("ZZ99");
        assert_eq!(counting.calls.get(), 2);
    }

    #[test]
    fn test_resolve_in_snapshot() {
        let snapshot = vec![
            PortDescriptor::new("COM3").with_serial_number("AB12"),
            PortDescriptor::new("COM4").with_serial_number("CD34"),
        ];

        let port = resolve_in(snapshot, "CD34").unwrap();
        assert_eq!(port.device_path, "COM4");
    }
}
