use super::bit_utils::BitStream;
use super::error::{QRError, QRResult};
use super::metadata::{ECLevel, Version};

// Encoder
//------------------------------------------------------------------------------

// Encodes data in byte mode with the smallest version that fits it
pub fn encode(data: &[u8], ec_level: ECLevel) -> QRResult<(BitStream, Version)> {
    let version = find_min_version(data.len(), ec_level)?;
    Ok((encode_with_version(data, version, ec_level)?, version))
}

pub fn encode_with_version(
    data: &[u8],
    version: Version,
    ec_level: ECLevel,
) -> QRResult<BitStream> {
    let bit_capacity = version.data_bit_capacity(ec_level);
    if encoded_bit_len(data.len(), version) > bit_capacity {
        return Err(QRError::CapacityExceeded);
    }

    let mut bs = BitStream::new(bit_capacity);
    push_header(data.len(), version, &mut bs);
    push_byte_data(data, &mut bs);
    push_terminator(&mut bs);
    pad_remaining_capacity(&mut bs);

    debug_assert!(bs.len() == bit_capacity, "Padded bit stream should fill the capacity");

    Ok(bs)
}

fn find_min_version(data_len: usize, ec_level: ECLevel) -> QRResult<Version> {
    (1..=40)
        .map(Version::new)
        .find(|v| encoded_bit_len(data_len, *v) <= v.data_bit_capacity(ec_level))
        .ok_or(QRError::CapacityExceeded)
}

fn encoded_bit_len(data_len: usize, version: Version) -> usize {
    MODE_INDICATOR_BIT_LEN + version.char_count_bit_len() + (data_len << 3)
}

// Writer for encoded data
//------------------------------------------------------------------------------

fn push_header(char_count: usize, version: Version, out: &mut BitStream) {
    out.push_bits(MODE_INDICATOR_BYTE, MODE_INDICATOR_BIT_LEN);
    let char_count_bit_len = version.char_count_bit_len();
    debug_assert!(
        char_count < (1 << char_count_bit_len),
        "Char count exceeds bit length: Char count {char_count}, Char count bits {char_count_bit_len}"
    );
    out.push_bits(char_count as u16, char_count_bit_len);
}

fn push_byte_data(data: &[u8], out: &mut BitStream) {
    for &byte in data {
        out.push_bits(byte, 8);
    }
}

// Up to 4 zero bits, as many as fit before the capacity
fn push_terminator(out: &mut BitStream) {
    let bit_len = out.len();
    let bit_capacity = out.capacity();
    if bit_len < bit_capacity {
        let term_len = std::cmp::min(4, bit_capacity - bit_len);
        out.push_bits(0u8, term_len);
    }
}

fn pad_remaining_capacity(out: &mut BitStream) {
    push_padding_bits(out);
    push_padding_codewords(out);
}

fn push_padding_bits(out: &mut BitStream) {
    let offset = out.len() & 7;
    if offset > 0 {
        out.push_bits(0u8, 8 - offset);
    }
}

fn push_padding_codewords(out: &mut BitStream) {
    let offset = out.len() & 7;
    debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {offset}");

    let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
    PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
        out.push_bits(pc, 8);
    });
}

// Global constants
//------------------------------------------------------------------------------

static MODE_INDICATOR_BYTE: u8 = 0b0100;

static MODE_INDICATOR_BIT_LEN: usize = 4;

static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

#[cfg(test)]
mod codec_tests {
    use test_case::test_case;

    use super::{encode, encode_with_version, find_min_version};
    use crate::common::error::QRError;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_encode_known_stream() {
        let (bs, version) = encode(b"hello", ECLevel::L).unwrap();
        assert_eq!(version, Version::new(1));
        let exp = [
            0x40, 0x56, 0x86, 0x56, 0xC6, 0xC6, 0xF0, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
            0x11, 0xEC, 0x11, 0xEC, 0x11,
        ];
        assert_eq!(bs.data(), exp);
    }

    #[test]
    fn test_encode_empty() {
        let (bs, version) = encode(b"", ECLevel::L).unwrap();
        assert_eq!(version, Version::new(1));
        assert_eq!(bs.len(), 19 << 3);
        // Mode indicator, zero char count and terminator, then padding
        assert_eq!(bs.data()[..4], [0x40, 0x00, 0xEC, 0x11]);
    }

    #[test]
    fn test_encode_wide_char_count() {
        let data = vec![0xAB; 200];
        let bs = encode_with_version(&data, Version::new(10), ECLevel::L).unwrap();
        // 0b0100 + 0000000011001000 + first payload byte
        assert_eq!(bs.data()[..4], [0x40, 0x0C, 0x8A, 0xBA]);
    }

    #[test_case(0, ECLevel::L, 1)]
    #[test_case(17, ECLevel::L, 1)]
    #[test_case(18, ECLevel::L, 2)]
    #[test_case(7, ECLevel::H, 1)]
    #[test_case(8, ECLevel::H, 2)]
    #[test_case(106, ECLevel::L, 5)]
    #[test_case(2953, ECLevel::L, 40)]
    fn test_find_min_version(data_len: usize, ec_level: ECLevel, exp_version: usize) {
        let version = find_min_version(data_len, ec_level).unwrap();
        assert_eq!(version, Version::new(exp_version));
    }

    #[test]
    fn test_find_min_version_overflow() {
        assert_eq!(find_min_version(2954, ECLevel::L), Err(QRError::CapacityExceeded));
    }

    #[test]
    fn test_encode_with_version_overflow() {
        let data = vec![0; 18];
        let res = encode_with_version(&data, Version::new(1), ECLevel::L);
        assert_eq!(res, Err(QRError::CapacityExceeded));
    }
}
