//! Mask patterns and the penalty score used to pick one.

use tracing::trace;

use crate::error::{QrError, Result};
use crate::matrix::{BuildMode, ModuleMatrix};
use crate::qrcode::ErrorCorrectionLevel;
use crate::version::Version;

const PENALTY_N1: f64 = 3.0;
const PENALTY_N2: f64 = 3.0;
const PENALTY_N3: f64 = 40.0;
const PENALTY_N4: f64 = 10.0;

/// A mask pattern (0–7).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MaskPattern(u8);

impl MaskPattern {
    /// Creates a mask object from the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is outside the range [0, 7].
    pub const fn new(mask: u8) -> Self {
        assert!(mask <= 7, "Mask value out of range");
        Self(mask)
    }

    /// Returns the value, which is in the range [0, 7].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All eight patterns in index order.
    pub fn all() -> impl Iterator<Item = MaskPattern> {
        (0u8..8).map(MaskPattern)
    }

    /// Whether the module at (`row`, `col`) is flipped by this mask.
    pub fn is_inverted(self, row: usize, col: usize) -> bool {
        let (i, j) = (row, col);
        match self.0 {
            0 => (i + j) % 2 == 0,
            1 => i % 2 == 0,
            2 => j % 3 == 0,
            3 => (i + j) % 3 == 0,
            4 => (i / 2 + j / 3) % 2 == 0,
            5 => ((i * j) % 2) + ((i * j) % 3) == 0,
            6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            7 => (((i * j) % 3) + ((i + j) % 2)) % 2 == 0,
            _ => unreachable!(),
        }
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = QrError;

    fn try_from(mask: u8) -> Result<Self> {
        if mask <= 7 {
            Ok(Self(mask))
        } else {
            Err(QrError::InvalidMask(mask))
        }
    }
}

/// Penalty score of a finished grid; lower is better.
///
/// Sums four terms: crowded same-colour neighbourhoods, uniform 2x2 blocks,
/// finder-like `1011101` runs and the deviation from a 50% dark ratio.
pub fn lost_point(matrix: &ModuleMatrix) -> f64 {
    let n = matrix.size();
    let mut result: f64 = 0.0;

    // Same-colour modules among the up to eight neighbours
    for row in 0..n {
        for col in 0..n {
            let dark = matrix.dark(row, col);
            let mut same_count: usize = 0;
            for r in row.saturating_sub(1)..=(row + 1).min(n - 1) {
                for c in col.saturating_sub(1)..=(col + 1).min(n - 1) {
                    if (r, c) != (row, col) && matrix.dark(r, c) == dark {
                        same_count += 1;
                    }
                }
            }
            if same_count > 5 {
                result += PENALTY_N1 + (same_count - 5) as f64;
            }
        }
    }

    for row in 0..n - 1 {
        for col in 0..n - 1 {
            let color = matrix.dark(row, col);
            if color == matrix.dark(row + 1, col)
                && color == matrix.dark(row, col + 1)
                && color == matrix.dark(row + 1, col + 1)
            {
                result += PENALTY_N2;
            }
        }
    }

    const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];
    for row in 0..n {
        for col in 0..n - 6 {
            if (0..7).all(|k| matrix.dark(row, col + k) == FINDER_LIKE[k]) {
                result += PENALTY_N3;
            }
        }
    }
    for col in 0..n {
        for row in 0..n - 6 {
            if (0..7).all(|k| matrix.dark(row + k, col) == FINDER_LIKE[k]) {
                result += PENALTY_N3;
            }
        }
    }

    let dark_count = matrix.dark_count() as f64;
    let n = n as f64;
    let ratio = ((100.0 * dark_count) / n / n - 50.0).abs() / 5.0;
    result + ratio * PENALTY_N4
}

/// Builds a trial symbol for each mask and returns the one with the lowest penalty.
///
/// Ties go to the lower index.
pub fn best_mask_pattern(
    version: Version,
    level: ErrorCorrectionLevel,
    codewords: &[u8],
) -> MaskPattern {
    let mut best = MaskPattern::new(0);
    let mut min_lost_point = f64::INFINITY;
    for mask in MaskPattern::all() {
        let trial = ModuleMatrix::build(version, level, mask, codewords, BuildMode::Trial);
        let lost = lost_point(&trial);
        trace!(mask = mask.value(), lost, "mask trial");
        if lost < min_lost_point {
            min_lost_point = lost;
            best = mask;
        }
    }
    best
}
