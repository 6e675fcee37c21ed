//! Board handles with an explicit resolution cache.
//!
//! A [`Board`] pairs a serial number with a [`PortEnumerator`] and remembers
//! the last successful resolution according to its [`CachePolicy`]. The
//! cache is never hidden: callers can inspect it with [`Board::cached`] and
//! drop it with [`Board::invalidate`] after a replug.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use ardport::{Board, CachePolicy, PortDescriptor, StaticPorts};
//!
//! let ports = StaticPorts::new(vec![
//!     PortDescriptor::new("/dev/ttyACM0").with_serial_number("AB12"),
//! ]);
//! let mut board = Board::new("AB12", ports)
//!     .with_cache_policy(CachePolicy::MaxAge(Duration::from_secs(5)));
//!
//! assert_eq!(board.port().unwrap().device_path, "/dev/ttyACM0");
//! assert!(board.cached().is_some());
//! ```

use {
    crate::{
        error::Result,
        port::{PortDescriptor, PortEnumerator},
        resolve::Resolver,
    },
    log::trace,
    std::time::{Duration, Instant},
};

/// When a resolved port may be reused without enumerating again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Resolve on every access.
    #[default]
    Never,
    /// Reuse until [`Board::invalidate`] is called.
    Manual,
    /// Reuse while the cached entry is younger than the given age.
    MaxAge(Duration),
}

#[derive(Debug, Clone)]
struct CachedPort {
    port: PortDescriptor,
    resolved_at: Instant,
}

impl CachedPort {
    fn is_fresh(&self, policy: CachePolicy) -> bool {
        match policy {
            CachePolicy::Never => false,
            CachePolicy::Manual => true,
            CachePolicy::MaxAge(max_age) => self
                .resolved_at
                .elapsed()
                < max_age,
        }
    }
}

/// A board identified by its serial number.
#[derive(Debug)]
pub struct Board<E> {
    serial_number: String,
    resolver: Resolver<E>,
    policy: CachePolicy,
    cache: Option<CachedPort>,
}

impl<E: PortEnumerator> Board<E> {
    /// Create a board handle that resolves through `enumerator`.
    pub fn new(serial_number: impl Into<String>, enumerator: E) -> Self {
        Self {
            serial_number: serial_number.into(),
            resolver: Resolver::new(enumerator),
            policy: CachePolicy::default(),
            cache: None,
        }
    }

    /// Set the cache policy.
    #[must_use]
    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Serial number this board is looked up by.
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Current cache policy.
    pub fn cache_policy(&self) -> CachePolicy {
        self.policy
    }

    /// Port for this board, resolving if the cache cannot be used.
    ///
    /// A failed resolution leaves the cache empty.
    pub fn port(&mut self) -> Result<&PortDescriptor> {
        let policy = self.policy;
        let cached = match self
            .cache
            .take()
            .filter(|cached| cached.is_fresh(policy))
        {
            Some(cached) => cached,
            None => {
                let port = self
                    .resolver
                    .resolve(&self.serial_number)?;
                trace!(
                    "Caching {} for board '{}' ({policy:?})",
                    port.device_path, self.serial_number
                );
                CachedPort {
                    port,
                    resolved_at: Instant::now(),
                }
            },
        };

        Ok(&self
            .cache
            .insert(cached)
            .port)
    }

    /// Last cached port, regardless of its age.
    pub fn cached(&self) -> Option<&PortDescriptor> {
        self.cache
            .as_ref()
            .map(|cached| &cached.port)
    }

    /// Drop the cached port so the next access enumerates again.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}

/// Board handle over the native enumerator.
#[cfg(feature = "native")]
impl Board<crate::port::NativePortEnumerator> {
    /// Create a board handle that resolves against the host's serial ports.
    pub fn native(serial_number: impl Into<String>) -> Self {
        Self::new(serial_number, crate::port::NativePortEnumerator)
    }
}
