//! QR versions and the smallest-version search.

use tracing::debug;

use crate::error::{QrError, Result};
use crate::qrcode::ErrorCorrectionLevel;
use crate::tables;

/// A QR code version (1–40).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported in the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported in the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is outside the range [1, 40]. Use `Version::try_from`
    /// for unchecked input.
    pub const fn new(ver: u8) -> Self {
        assert!(
            Version::MIN.value() <= ver && ver <= Version::MAX.value(),
            "Version number out of range",
        );
        Self(ver)
    }

    /// Returns the value, which is in the range [1, 40].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Width and height of a symbol of this version, in modules (21 to 177).
    pub const fn module_count(self) -> usize {
        (self.0 as usize) * 4 + 17
    }

    fn next(self) -> Option<Self> {
        (self.0 < Self::MAX.0).then(|| Self(self.0 + 1))
    }
}

impl TryFrom<u8> for Version {
    type Error = QrError;

    fn try_from(ver: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&ver) {
            Ok(Self(ver))
        } else {
            Err(QrError::InvalidVersion(ver))
        }
    }
}

/// Picks the smallest version that holds `byte_len` payload bytes at `level`.
///
/// # Errors
///
/// Returns [`QrError::CapacityExceeded`] if even version 40 is too small.
pub fn select_version(byte_len: usize, level: ErrorCorrectionLevel) -> Result<Version> {
    select_version_from(Version::MIN, byte_len, level)
}

/// Like [`select_version`], but never returns a version below `min`.
///
/// # Errors
///
/// Returns [`QrError::CapacityExceeded`] if no version from `min` to 40 is large enough.
pub fn select_version_from(
    min: Version,
    byte_len: usize,
    level: ErrorCorrectionLevel,
) -> Result<Version> {
    let mut version = min;
    loop {
        if byte_len <= tables::byte_capacity(version, level) {
            debug!(byte_len, ?level, version = version.value(), "selected version");
            return Ok(version);
        }
        match version.next() {
            Some(next) => version = next,
            None => {
                return Err(QrError::CapacityExceeded {
                    length: byte_len,
                    capacity: tables::byte_capacity(Version::MAX, level),
                    level,
                });
            }
        }
    }
}
