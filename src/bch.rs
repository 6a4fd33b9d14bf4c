//! BCH codes protecting the format information (15,5) and version information (18,6).

const G15: u32 = 0b101_0011_0111;
const G18: u32 = 0b1_1111_0010_0101;
const G15_MASK: u32 = 0b101_0100_0001_0010;

/// 15-bit format information for `data` = (level format bits << 3) | mask, already XOR-masked.
pub fn bch_type_info(data: u32) -> u32 {
    let mut d = data << 10;
    while bch_digit(d) >= bch_digit(G15) {
        d ^= G15 << (bch_digit(d) - bch_digit(G15));
    }
    ((data << 10) | d) ^ G15_MASK
}

/// 18-bit version information for version number `data`.
pub fn bch_type_number(data: u32) -> u32 {
    let mut d = data << 12;
    while bch_digit(d) >= bch_digit(G18) {
        d ^= G18 << (bch_digit(d) - bch_digit(G18));
    }
    (data << 12) | d
}

/// Number of significant bits in `data`.
pub fn bch_digit(data: u32) -> u32 {
    u32::BITS - data.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0x5412; "level M mask 0")]
    #[test_case(0b00101, 0x40CE; "level M mask 5")]
    #[test_case(0b01000, 0x77C4; "level L mask 0")]
    #[test_case(0b11111, 0x2BED; "level Q mask 7")]
    fn test_type_info_vectors(data: u32, expected: u32) {
        assert_eq!(bch_type_info(data), expected);
    }

    #[test_case(7, 0x07C94)]
    #[test_case(8, 0x085BC)]
    #[test_case(40, 0x28C69)]
    fn test_type_number_vectors(version: u32, expected: u32) {
        assert_eq!(bch_type_number(version), expected);
    }

    #[test]
    fn test_bch_digit() {
        assert_eq!(bch_digit(0), 0);
        assert_eq!(bch_digit(1), 1);
        assert_eq!(bch_digit(G15), 11);
        assert_eq!(bch_digit(G18), 13);
    }
}
