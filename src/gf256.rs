//! Arithmetic in GF(2^8) over the QR field polynomial x^8 + x^4 + x^3 + x^2 + 1.

use crate::error::{QrError, Result};

const EXP: [u8; 256] = build_exp_table();

/// `EXP_TABLE[i]` is α^i. Index 255 wraps back to 1.
pub static EXP_TABLE: [u8; 256] = EXP;

/// `LOG_TABLE[α^i]` is i. Entry 0 is unused.
pub static LOG_TABLE: [u8; 256] = build_log_table(&EXP);

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 8 {
        table[i] = 1 << i;
        i += 1;
    }
    while i < 256 {
        table[i] = table[i - 4] ^ table[i - 5] ^ table[i - 6] ^ table[i - 8];
        i += 1;
    }
    table
}

const fn build_log_table(exp: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Discrete logarithm of `n`. Fails for zero, which is not a power of α.
pub fn glog(n: u8) -> Result<i32> {
    if n == 0 {
        return Err(QrError::LogOfZero);
    }
    Ok(i32::from(LOG_TABLE[usize::from(n)]))
}

/// α^n for any integer `n`; α has order 255.
pub fn gexp(n: i32) -> u8 {
    EXP_TABLE[n.rem_euclid(255) as usize]
}
