//! Error type shared by every stage of the encoder and the renderers.

use crate::qrcode::ErrorCorrectionLevel;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QrError>;

/// Everything that can go wrong while building or rendering a QR code.
///
/// Ways to handle a capacity error ([`QrError::is_capacity_exceeded`]):
///
/// - Decrease the error correction level if it was greater than `L`.
/// - Drop the minimum version hint, if one was given.
/// - Shorten the text. Non-ASCII text costs a 3-byte BOM plus up to 3 bytes per character.
/// - Propagate the error upward to the caller/user.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    /// No version between the requested minimum and 40 can hold the payload.
    #[error("data too long: {length} bytes, max capacity at level {level:?} is {capacity} bytes")]
    CapacityExceeded {
        length: usize,
        capacity: usize,
        level: ErrorCorrectionLevel,
    },

    /// The segments do not fit into the data codewords of the chosen version.
    #[error("code length overflow: {bits} bits > {capacity_bits} bits")]
    DataOverCapacity { bits: usize, capacity_bits: usize },

    /// A padded bit stream does not match the data codewords of its blocks.
    #[error("data buffer holds {bits} bits, blocks expect {expected_bits} bits")]
    DataLengthMismatch { bits: usize, expected_bits: usize },

    /// The block table has no row for this version and level.
    #[error("no RS block layout for version {version} at level {level:?}")]
    UnsupportedConfiguration {
        version: u8,
        level: ErrorCorrectionLevel,
    },

    #[error("version number out of range: {0}")]
    InvalidVersion(u8),

    #[error("mask pattern out of range: {0}")]
    InvalidMask(u8),

    #[error("unknown error correction level: {0:?}")]
    InvalidLevel(String),

    #[error("unknown Wi-Fi security type: {0:?}")]
    InvalidSecurity(String),

    /// `glog(0)` has no value in GF(256).
    #[error("logarithm of zero is undefined in GF(256)")]
    LogOfZero,

    #[error("module ({row}, {col}) is outside a {module_count}x{module_count} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        module_count: usize,
    },

    /// The grid was queried before `make()` succeeded.
    #[error("QR code has not been built yet")]
    NotBuilt,

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QrError {
    /// Returns `true` for both flavours of "the text does not fit".
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. } | Self::DataOverCapacity { .. }
        )
    }
}
