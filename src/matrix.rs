//! Module grid construction: function patterns, format/version information and data placement.

use crate::bch::{bch_type_info, bch_type_number};
use crate::error::{QrError, Result};
use crate::mask::MaskPattern;
use crate::qrcode::ErrorCorrectionLevel;
use crate::tables;
use crate::version::Version;

/// Whether format and version information carry their real bits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuildMode {
    /// Mask trial: every information module and the dark anchor are left light.
    Trial,
    /// The symbol that is handed out.
    Final,
}

/// A square grid of modules; `None` marks a module nothing has been drawn on yet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<Option<bool>>,
}

impl ModuleMatrix {
    // All-unset grid of `size` x `size` modules.
    fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![None; size * size],
        }
    }

    /// Draws a complete symbol from scratch.
    ///
    /// # Arguments
    ///
    /// * `version` - Symbol version; fixes the grid size and pattern layout.
    /// * `level` - Error correction level recorded in the format information.
    /// * `mask` - Mask applied to every data module.
    /// * `codewords` - Final interleaved codewords, see [`crate::codewords::create_data`].
    /// * `mode` - [`BuildMode::Trial`] blanks format and version information.
    pub fn build(
        version: Version,
        level: ErrorCorrectionLevel,
        mask: MaskPattern,
        codewords: &[u8],
        mode: BuildMode,
    ) -> Self {
        let mut result = Self::new(version.module_count());
        let size = result.size;
        result.setup_finder_pattern(0, 0);
        result.setup_finder_pattern(size - 7, 0);
        result.setup_finder_pattern(0, size - 7);
        result.setup_position_adjust_pattern(version);
        result.setup_timing_pattern();
        result.setup_type_info(mode, level, mask);
        if version.value() >= 7 {
            result.setup_type_number(mode, version);
        }
        result.map_data(codewords, mask);
        result
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` for a dark module; unset modules read as light.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::OutOfBounds`] if the coordinates are outside the grid.
    pub fn is_dark(&self, row: usize, col: usize) -> Result<bool> {
        if row >= self.size || col >= self.size {
            return Err(QrError::OutOfBounds {
                row,
                col,
                module_count: self.size,
            });
        }
        Ok(self.dark(row, col))
    }

    pub(crate) fn dark(&self, row: usize, col: usize) -> bool {
        self.modules[row * self.size + col] == Some(true)
    }

    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m == Some(true)).count()
    }

    fn set(&mut self, row: usize, col: usize, isdark: bool) {
        self.modules[row * self.size + col] = Some(isdark);
    }

    fn is_set(&self, row: usize, col: usize) -> bool {
        self.modules[row * self.size + col].is_some()
    }

    // 7x7 finder plus its one-module separator, clipped at the grid edge.
    fn setup_finder_pattern(&mut self, row: usize, col: usize) {
        let size = self.size as i32;
        for r in -1i32..=7 {
            let y = row as i32 + r;
            if y < 0 || y >= size {
                continue;
            }
            for c in -1i32..=7 {
                let x = col as i32 + c;
                if x < 0 || x >= size {
                    continue;
                }
                let isdark = ((0..=6).contains(&r) && (c == 0 || c == 6))
                    || ((0..=6).contains(&c) && (r == 0 || r == 6))
                    || ((2..=4).contains(&r) && (2..=4).contains(&c));
                self.set(y as usize, x as usize, isdark);
            }
        }
    }

    fn setup_position_adjust_pattern(&mut self, version: Version) {
        let positions = tables::pattern_positions(version);
        for &row in positions {
            for &col in positions {
                let (row, col) = (usize::from(row), usize::from(col));
                if self.is_set(row, col) {
                    continue;
                }
                for r in -2i32..=2 {
                    for c in -2i32..=2 {
                        let isdark = r.abs() == 2 || c.abs() == 2 || (r == 0 && c == 0);
                        self.set(
                            (row as i32 + r) as usize,
                            (col as i32 + c) as usize,
                            isdark,
                        );
                    }
                }
            }
        }
    }

    fn setup_timing_pattern(&mut self) {
        for i in 8..self.size - 8 {
            if !self.is_set(i, 6) {
                self.set(i, 6, i % 2 == 0);
            }
            if !self.is_set(6, i) {
                self.set(6, i, i % 2 == 0);
            }
        }
    }

    fn setup_type_info(&mut self, mode: BuildMode, level: ErrorCorrectionLevel, mask: MaskPattern) {
        let data = (u32::from(level.format_bits()) << 3) | u32::from(mask.value());
        let bits = bch_type_info(data);
        let size = self.size;
        for i in 0..15 {
            let bit = mode == BuildMode::Final && get_bit(bits, i);
            // Vertical copy: down column 8, jumping the timing row, then the bottom-left corner.
            if i < 6 {
                self.set(i, 8, bit);
            } else if i < 8 {
                self.set(i + 1, 8, bit);
            } else {
                self.set(size - 15 + i, 8, bit);
            }
            // Horizontal copy: top-right corner, then leftward along row 8.
            if i < 8 {
                self.set(8, size - i - 1, bit);
            } else if i < 9 {
                self.set(8, 15 - i, bit);
            } else {
                self.set(8, 14 - i, bit);
            }
        }
        self.set(size - 8, 8, mode == BuildMode::Final);
    }

    fn setup_type_number(&mut self, mode: BuildMode, version: Version) {
        let bits = bch_type_number(u32::from(version.value()));
        let size = self.size;
        for i in 0..18 {
            let bit = mode == BuildMode::Final && get_bit(bits, i);
            self.set(i / 3, i % 3 + size - 11, bit);
            self.set(i % 3 + size - 11, i / 3, bit);
        }
    }

    /// Places codeword bits in the two-column zigzag from the bottom-right corner,
    /// skipping every module a pattern already claimed.
    fn map_data(&mut self, data: &[u8], mask: MaskPattern) {
        let size = self.size;
        let mut upward = true;
        let mut bit_index: usize = 0;
        let total_bits = data.len() * 8;
        let mut right = size - 1;
        loop {
            if right == 6 {
                right = 5;
            }
            for vert in 0..size {
                let row = if upward { size - 1 - vert } else { vert };
                for col in [right, right - 1] {
                    if self.is_set(row, col) {
                        continue;
                    }
                    let mut isdark = false;
                    if bit_index < total_bits {
                        isdark = (data[bit_index >> 3] >> (7 - (bit_index & 7))) & 1 == 1;
                    }
                    if mask.is_inverted(row, col) {
                        isdark = !isdark;
                    }
                    self.set(row, col, isdark);
                    bit_index += 1;
                }
            }
            upward = !upward;
            if right < 3 {
                break;
            }
            right -= 2;
        }
    }
}

fn get_bit(x: u32, i: usize) -> bool {
    ((x >> i) & 1) != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use ErrorCorrectionLevel::*;

    fn empty_build(v: u8, mode: BuildMode) -> ModuleMatrix {
        ModuleMatrix::build(Version::new(v), M, MaskPattern::new(0), &[], mode)
    }

    #[test]
    fn test_grid_side_for_every_version() {
        for v in 1..=40u8 {
            assert_eq!(empty_build(v, BuildMode::Trial).size(), usize::from(v) * 4 + 17);
        }
    }

    #[test]
    fn test_every_module_is_set_after_build() {
        for v in [1u8, 7, 14, 40] {
            let m = empty_build(v, BuildMode::Final);
            assert!(m.modules.iter().all(Option::is_some), "version {v}");
        }
    }

    #[test]
    fn test_finder_patterns_in_three_corners() {
        let m = empty_build(1, BuildMode::Final);
        let ring: Vec<bool> = (0..7).map(|c| m.dark(0, c)).collect();
        assert_eq!(ring, vec![true; 7]);
        assert!(m.dark(3, 3) && m.dark(3, 17) && m.dark(17, 3));
        assert!(!m.dark(1, 1) && !m.dark(7, 7));
        // Separator row under the top-left finder.
        assert!((0..8).all(|c| !m.dark(7, c)));
    }

    #[test]
    fn test_timing_pattern_alternates() {
        let m = empty_build(2, BuildMode::Final);
        for i in 8..m.size() - 8 {
            assert_eq!(m.dark(6, i), i % 2 == 0);
            assert_eq!(m.dark(i, 6), i % 2 == 0);
        }
    }

    #[test]
    fn test_alignment_pattern_skips_finders() {
        let m = empty_build(7, BuildMode::Final);
        // Centres at 6, 22, 38; (22, 22) and (6, 22) are drawn, (6, 6) belongs to a finder.
        assert!(m.dark(22, 22));
        assert!(!m.dark(22, 21));
        assert!(m.dark(20, 20));
        assert!(m.dark(6, 22));
        assert!(!m.dark(5, 23));
        assert!(!m.dark(6, 7));
    }

    #[test]
    fn test_trial_build_blanks_information_modules() {
        let m = empty_build(7, BuildMode::Trial);
        let size = m.size();
        assert!((0..9).all(|r| r == 6 || !m.dark(r, 8)));
        assert!(!m.dark(size - 8, 8));
        assert!((0..6).all(|r| (size - 11..size - 8).all(|c| !m.dark(r, c))));
    }

    #[test]
    fn test_final_build_writes_format_bits_twice() {
        let m = ModuleMatrix::build(Version::new(1), M, MaskPattern::new(5), &[], BuildMode::Final);
        let size = m.size();
        let bits = bch_type_info(0b00101);
        let vertical: Vec<bool> = [0, 1, 2, 3, 4, 5, 7, 8, 14, 15, 16, 17, 18, 19, 20]
            .iter()
            .map(|&r| m.dark(r, 8))
            .collect();
        let horizontal: Vec<bool> = [20, 19, 18, 17, 16, 15, 14, 13, 7, 5, 4, 3, 2, 1, 0]
            .iter()
            .map(|&c| m.dark(8, c))
            .collect();
        let expected: Vec<bool> = (0..15).map(|i| get_bit(bits, i)).collect();
        assert_eq!(vertical, expected);
        assert_eq!(horizontal, expected);
        assert!(m.dark(size - 8, 8));
    }

    #[test]
    fn test_version_information_blocks_mirror_each_other() {
        let m = empty_build(7, BuildMode::Final);
        let size = m.size();
        let bits = bch_type_number(7);
        for i in 0..18 {
            assert_eq!(m.dark(i / 3, i % 3 + size - 11), get_bit(bits, i));
            assert_eq!(m.dark(i % 3 + size - 11, i / 3), get_bit(bits, i));
        }
    }

    #[test]
    fn test_data_starts_at_bottom_right_going_up() {
        // Mask 1 inverts even rows, so row 20 reads inverted and row 19 does not.
        let m = ModuleMatrix::build(Version::new(1), L, MaskPattern::new(1), &[0b1010_0000], BuildMode::Final);
        assert!(!m.dark(20, 20));
        assert!(m.dark(20, 19));
        assert!(m.dark(19, 20));
        assert!(!m.dark(19, 19));
    }

    #[test]
    fn test_is_dark_rejects_out_of_range() {
        let m = empty_build(1, BuildMode::Final);
        assert!(matches!(
            m.is_dark(21, 0),
            Err(QrError::OutOfBounds { row: 21, col: 0, module_count: 21 })
        ));
        assert!(m.is_dark(20, 20).is_ok());
    }
}
