//! Turns segments into the final interleaved data + error correction codeword sequence.

use tracing::warn;

use crate::bit_buffer::BitBuffer;
use crate::error::{QrError, Result};
use crate::polynomial::{error_correct_polynomial, Polynomial};
use crate::qrcode::ErrorCorrectionLevel;
use crate::segment::ByteSegment;
use crate::tables::{rs_blocks, RsBlock};
use crate::version::Version;

const PAD0: u32 = 0xEC;
const PAD1: u32 = 0x11;

/// Encodes `segments` for a symbol of `version` at `level`.
///
/// Writes every segment's header and payload, terminates and pads the bit
/// stream to the symbol's data capacity, then appends Reed-Solomon codewords.
///
/// # Errors
///
/// Returns [`QrError::DataOverCapacity`] if the segments need more bits than the
/// symbol has data codewords, or [`QrError::UnsupportedConfiguration`] if the
/// block table has no entry.
pub fn create_data(
    version: Version,
    level: ErrorCorrectionLevel,
    segments: &[ByteSegment],
) -> Result<Vec<u8>> {
    let blocks = rs_blocks(version, level)?;
    let mut buffer = BitBuffer::new();
    for seg in segments {
        buffer.put(seg.mode().mode_bits(), 4);
        buffer.put(seg.len() as u32, seg.mode().char_count_bits(version));
        seg.write(&mut buffer);
    }

    let total_data_count: usize = blocks.iter().map(|b| b.data_count).sum();
    let capacity_bits = total_data_count * 8;
    if buffer.len_in_bits() > capacity_bits {
        warn!(bits = buffer.len_in_bits(), capacity_bits, version = version.value(), "code length overflow");
        return Err(QrError::DataOverCapacity {
            bits: buffer.len_in_bits(),
            capacity_bits,
        });
    }

    // Terminator, only if it fits whole
    if buffer.len_in_bits() + 4 <= capacity_bits {
        buffer.put(0, 4);
    }
    while buffer.len_in_bits() % 8 != 0 {
        buffer.put_bit(false);
    }
    for &padbyte in [PAD0, PAD1].iter().cycle() {
        if buffer.len_in_bits() >= capacity_bits {
            break;
        }
        buffer.put(padbyte, 8);
    }

    create_bytes(&buffer, &blocks)
}

/// Splits the padded data across `blocks`, computes each block's EC codewords
/// and interleaves everything into transmission order.
///
/// # Errors
///
/// Returns [`QrError::DataLengthMismatch`] unless `buffer` holds exactly the
/// blocks' data codewords.
pub fn create_bytes(buffer: &BitBuffer, blocks: &[RsBlock]) -> Result<Vec<u8>> {
    let expected_bits = blocks.iter().map(|b| b.data_count).sum::<usize>() * 8;
    if buffer.len_in_bits() != expected_bits {
        return Err(QrError::DataLengthMismatch {
            bits: buffer.len_in_bits(),
            expected_bits,
        });
    }
    let bytes = buffer.as_bytes();
    let mut offset: usize = 0;
    let mut dcdata: Vec<&[u8]> = Vec::with_capacity(blocks.len());
    let mut ecdata: Vec<Vec<u8>> = Vec::with_capacity(blocks.len());

    for block in blocks {
        let data = &bytes[offset..offset + block.data_count];
        offset += block.data_count;

        let ec_count = block.ec_count();
        let generator = error_correct_polynomial(ec_count)?;
        let remainder = Polynomial::new(data, ec_count).modulo(&generator)?;
        let mut ec = vec![0u8; ec_count];
        let start = ec_count.saturating_sub(remainder.len());
        let skip = remainder.len().saturating_sub(ec_count);
        ec[start..].copy_from_slice(&remainder.coefficients()[skip..]);

        dcdata.push(data);
        ecdata.push(ec);
    }

    let total: usize = blocks.iter().map(|b| b.total_count).sum();
    let mut result = Vec::with_capacity(total);
    interleave(&dcdata, &mut result);
    interleave(&ecdata, &mut result);
    debug_assert_eq!(result.len(), total);
    Ok(result)
}

/// Emits column `i` of every block before column `i + 1`; shorter blocks drop out early.
fn interleave<T: AsRef<[u8]>>(blocks: &[T], out: &mut Vec<u8>) {
    let longest = blocks.iter().map(|b| b.as_ref().len()).max().unwrap_or(0);
    for i in 0..longest {
        for block in blocks {
            if let Some(&b) = block.as_ref().get(i) {
                out.push(b);
            }
        }
    }
}
