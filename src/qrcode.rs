#![forbid(unsafe_code)]
//! QR code model: the public entry point of the encoder.
//!
//! A [`QrModel`] collects byte-mode segments for one version and error correction
//! level, derives the codewords, tries all eight masks and keeps the finished
//! module grid. Renderers read the grid through the [`ModuleGrid`] trait.

use core::str::FromStr;

use tracing::debug;

use crate::codewords::create_data;
use crate::error::{QrError, Result};
use crate::mask::{best_mask_pattern, MaskPattern};
use crate::matrix::{BuildMode, ModuleMatrix};
use crate::segment::ByteSegment;
use crate::version::{select_version_from, Version};

/// Read access to a finished grid of modules, as consumed by renderers.
pub trait ModuleGrid {
    /// Width and height of the grid, in modules.
    fn module_count(&self) -> usize;

    /// Returns `true` if the module at (`row`, `col`) is dark.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::OutOfBounds`] for coordinates outside the grid and
    /// [`QrError::NotBuilt`] if there is no grid yet.
    fn is_dark(&self, row: usize, col: usize) -> Result<bool>;
}

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ErrorCorrectionLevel {
    /// Tolerates ~7% erroneous codewords.
    L,
    /// Tolerates ~15% erroneous codewords.
    M,
    /// Tolerates ~25% erroneous codewords.
    Q,
    /// Tolerates ~30% erroneous codewords.
    H,
}

impl ErrorCorrectionLevel {
    /// Row offset of this level in the version-indexed tables (L, M, Q, H order).
    pub(crate) fn ordinal(self) -> usize {
        use ErrorCorrectionLevel::*;
        match self {
            L => 0,
            M => 1,
            Q => 2,
            H => 3,
        }
    }

    /// Returns the 2-bit value stored in the format information.
    pub fn format_bits(self) -> u8 {
        use ErrorCorrectionLevel::*;
        match self {
            L => 1,
            M => 0,
            Q => 3,
            H => 2,
        }
    }
}

impl FromStr for ErrorCorrectionLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        use ErrorCorrectionLevel::*;
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(L),
            "m" | "medium" => Ok(M),
            "q" | "quartile" => Ok(Q),
            "h" | "high" => Ok(H),
            _ => Err(QrError::InvalidLevel(s.to_owned())),
        }
    }
}

/// Settings for [`QrModel::encode_with`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EncodeOptions {
    pub level: ErrorCorrectionLevel,
    /// Smallest version to consider; the search still grows past it as needed.
    pub min_version: Option<Version>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            level: ErrorCorrectionLevel::M,
            min_version: None,
        }
    }
}

/// A QR code under construction, and once [`make`](QrModel::make) succeeds, a finished symbol.
///
/// # Example
///
/// ```rust
/// use qrmint::qrcode::{ErrorCorrectionLevel, ModuleGrid, QrModel};
///
/// let qr = QrModel::encode_text("Hello, World!", ErrorCorrectionLevel::M).unwrap();
/// assert_eq!(qr.version().value(), 1);
/// assert_eq!(qr.module_count(), 21);
/// assert!(qr.is_dark(0, 0).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct QrModel {
    version: Version,
    level: ErrorCorrectionLevel,
    segments: Vec<ByteSegment>,
    data_cache: Option<Vec<u8>>,
    matrix: Option<ModuleMatrix>,
    mask: Option<MaskPattern>,
}

impl QrModel {
    /// An empty model for a fixed version and level.
    pub fn new(version: Version, level: ErrorCorrectionLevel) -> Self {
        Self {
            version,
            level,
            segments: Vec::new(),
            data_cache: None,
            matrix: None,
            mask: None,
        }
    }

    /// Encodes `text` in the smallest version that holds it and builds the symbol.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::CapacityExceeded`] if the text is too long for version 40 at `level`.
    pub fn encode_text(text: &str, level: ErrorCorrectionLevel) -> Result<Self> {
        Self::encode_with(text, &EncodeOptions { level, min_version: None })
    }

    /// Like [`encode_text`](Self::encode_text), with every setting taken from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::CapacityExceeded`] if no version from the minimum up to 40 fits.
    pub fn encode_with(text: &str, options: &EncodeOptions) -> Result<Self> {
        let segment = ByteSegment::new(text);
        let min = options.min_version.unwrap_or(Version::MIN);
        let version = select_version_from(min, segment.len(), options.level)?;
        let mut model = Self::new(version, options.level);
        model.add_segment(segment);
        model.make()?;
        Ok(model)
    }

    /// Appends `text` as a byte-mode segment.
    pub fn add_data(&mut self, text: &str) {
        self.add_segment(ByteSegment::new(text));
    }

    /// Appends a prepared segment. Any cached codewords and any built grid are dropped.
    pub fn add_segment(&mut self, segment: ByteSegment) {
        self.segments.push(segment);
        self.data_cache = None;
        self.matrix = None;
        self.mask = None;
    }

    /// Derives the codewords if needed, picks the best mask and builds the final grid.
    ///
    /// On error the model is left exactly as it was before the call.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::DataOverCapacity`] if the segments do not fit the version.
    pub fn make(&mut self) -> Result<()> {
        let codewords = match self.data_cache.take() {
            Some(cached) => cached,
            None => create_data(self.version, self.level, &self.segments)?,
        };
        let mask = best_mask_pattern(self.version, self.level, &codewords);
        let matrix = ModuleMatrix::build(self.version, self.level, mask, &codewords, BuildMode::Final);
        debug!(
            version = self.version.value(),
            level = ?self.level,
            mask = mask.value(),
            module_count = matrix.size(),
            "built QR code"
        );
        self.data_cache = Some(codewords);
        self.matrix = Some(matrix);
        self.mask = Some(mask);
        Ok(())
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn level(&self) -> ErrorCorrectionLevel {
        self.level
    }

    pub fn segments(&self) -> &[ByteSegment] {
        &self.segments
    }

    /// The mask chosen by the last successful [`make`](Self::make), if any.
    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    /// Final interleaved codewords, once they have been derived.
    pub fn codewords(&self) -> Option<&[u8]> {
        self.data_cache.as_deref()
    }

    pub fn is_built(&self) -> bool {
        self.matrix.is_some()
    }
}

impl ModuleGrid for QrModel {
    /// Side length of the symbol; known from the version even before building.
    fn module_count(&self) -> usize {
        self.version.module_count()
    }

    fn is_dark(&self, row: usize, col: usize) -> Result<bool> {
        match &self.matrix {
            Some(matrix) => matrix.is_dark(row, col),
            None => Err(QrError::NotBuilt),
        }
    }
}

impl ModuleGrid for ModuleMatrix {
    fn module_count(&self) -> usize {
        self.size()
    }

    fn is_dark(&self, row: usize, col: usize) -> Result<bool> {
        ModuleMatrix::is_dark(self, row, col)
    }
}
