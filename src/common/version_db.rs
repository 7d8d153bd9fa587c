use super::metadata::ECLevel;

// Data codeword block layout per version & EC level
//------------------------------------------------------------------------------

// Versions either split data codewords into equally sized blocks, or into
// two groups of blocks whose sizes differ by one codeword
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum BlockLayout {
    Single { count: usize, data_len: usize },
    Split { count1: usize, data_len1: usize, count2: usize, data_len2: usize },
}

impl BlockLayout {
    pub fn block_count(&self) -> usize {
        match *self {
            Self::Single { count, .. } => count,
            Self::Split { count1, count2, .. } => count1 + count2,
        }
    }

    pub fn data_codewords(&self) -> usize {
        match *self {
            Self::Single { count, data_len } => count * data_len,
            Self::Split { count1, data_len1, count2, data_len2 } => {
                count1 * data_len1 + count2 * data_len2
            }
        }
    }
}

const fn one(ec_len: usize, count: usize, data_len: usize) -> (usize, BlockLayout) {
    (ec_len, BlockLayout::Single { count, data_len })
}

const fn two(
    ec_len: usize,
    count1: usize,
    data_len1: usize,
    count2: usize,
    data_len2: usize,
) -> (usize, BlockLayout) {
    (ec_len, BlockLayout::Split { count1, data_len1, count2, data_len2 })
}

// (EC codewords per block, data block layout), indexed by version - 1,
// then EC level (L, M, Q, H)
pub static EC_BLOCKS: [[(usize, BlockLayout); 4]; 40] = [
    [one(7, 1, 19), one(10, 1, 16), one(13, 1, 13), one(17, 1, 9)],
    [one(10, 1, 34), one(16, 1, 28), one(22, 1, 22), one(28, 1, 16)],
    [one(15, 1, 55), one(26, 1, 44), one(18, 2, 17), one(22, 2, 13)],
    [one(20, 1, 80), one(18, 2, 32), one(26, 2, 24), one(16, 4, 9)],
    [one(26, 1, 108), one(24, 2, 43), two(18, 2, 15, 2, 16), two(22, 2, 11, 2, 12)],
    [one(18, 2, 68), one(16, 4, 27), one(24, 4, 19), one(28, 4, 15)],
    [one(20, 2, 78), one(18, 4, 31), two(18, 2, 14, 4, 15), two(26, 4, 13, 1, 14)],
    [one(24, 2, 97), two(22, 2, 38, 2, 39), two(22, 4, 18, 2, 19), two(26, 4, 14, 2, 15)],
    [one(30, 2, 116), two(22, 3, 36, 2, 37), two(20, 4, 16, 4, 17), two(24, 4, 12, 4, 13)],
    [two(18, 2, 68, 2, 69), two(26, 4, 43, 1, 44), two(24, 6, 19, 2, 20), two(28, 6, 15, 2, 16)],
    [one(20, 4, 81), two(30, 1, 50, 4, 51), two(28, 4, 22, 4, 23), two(24, 3, 12, 8, 13)],
    [two(24, 2, 92, 2, 93), two(22, 6, 36, 2, 37), two(26, 4, 20, 6, 21), two(28, 7, 14, 4, 15)],
    [one(26, 4, 107), two(22, 8, 37, 1, 38), two(24, 8, 20, 4, 21), two(22, 12, 11, 4, 12)],
    [two(30, 3, 115, 1, 116), two(24, 4, 40, 5, 41), two(20, 11, 16, 5, 17), two(24, 11, 12, 5, 13)],
    [two(22, 5, 87, 1, 88), two(24, 5, 41, 5, 42), two(30, 5, 24, 7, 25), two(24, 11, 12, 7, 13)],
    [two(24, 5, 98, 1, 99), two(28, 7, 45, 3, 46), two(24, 15, 19, 2, 20), two(30, 3, 15, 13, 16)],
    [two(28, 1, 107, 5, 108), two(28, 10, 46, 1, 47), two(28, 1, 22, 15, 23), two(28, 2, 14, 17, 15)],
    [two(30, 5, 120, 1, 121), two(26, 9, 43, 4, 44), two(28, 17, 22, 1, 23), two(28, 2, 14, 19, 15)],
    [two(28, 3, 113, 4, 114), two(26, 3, 44, 11, 45), two(26, 17, 21, 4, 22), two(26, 9, 13, 16, 14)],
    [two(28, 3, 107, 5, 108), two(26, 3, 41, 13, 42), two(28, 15, 24, 5, 25), two(28, 15, 15, 10, 16)],
    [two(28, 4, 116, 4, 117), one(26, 17, 42), two(30, 17, 22, 6, 23), two(28, 19, 16, 6, 17)],
    [two(28, 2, 111, 7, 112), one(28, 17, 46), two(24, 7, 24, 16, 25), one(30, 34, 13)],
    [two(30, 4, 121, 5, 122), two(28, 4, 47, 14, 48), two(30, 11, 24, 14, 25), two(30, 16, 15, 14, 16)],
    [two(30, 6, 117, 4, 118), two(28, 6, 45, 14, 46), two(30, 11, 24, 16, 25), two(30, 30, 16, 2, 17)],
    [two(26, 8, 106, 4, 107), two(28, 8, 47, 13, 48), two(30, 7, 24, 22, 25), two(30, 22, 15, 13, 16)],
    [two(28, 10, 114, 2, 115), two(28, 19, 46, 4, 47), two(28, 28, 22, 6, 23), two(30, 33, 16, 4, 17)],
    [two(30, 8, 122, 4, 123), two(28, 22, 45, 3, 46), two(30, 8, 23, 26, 24), two(30, 12, 15, 28, 16)],
    [two(30, 3, 117, 10, 118), two(28, 3, 45, 23, 46), two(30, 4, 24, 31, 25), two(30, 11, 15, 31, 16)],
    [two(30, 7, 116, 7, 117), two(28, 21, 45, 7, 46), two(30, 1, 23, 37, 24), two(30, 19, 15, 26, 16)],
    [two(30, 5, 115, 10, 116), two(28, 19, 47, 10, 48), two(30, 15, 24, 25, 25), two(30, 23, 15, 25, 16)],
    [two(30, 13, 115, 3, 116), two(28, 2, 46, 29, 47), two(30, 42, 24, 1, 25), two(30, 23, 15, 28, 16)],
    [one(30, 17, 115), two(28, 10, 46, 23, 47), two(30, 10, 24, 35, 25), two(30, 19, 15, 35, 16)],
    [two(30, 17, 115, 1, 116), two(28, 14, 46, 21, 47), two(30, 29, 24, 19, 25), two(30, 11, 15, 46, 16)],
    [two(30, 13, 115, 6, 116), two(28, 14, 46, 23, 47), two(30, 44, 24, 7, 25), two(30, 59, 16, 1, 17)],
    [two(30, 12, 121, 7, 122), two(28, 12, 47, 26, 48), two(30, 39, 24, 14, 25), two(30, 22, 15, 41, 16)],
    [two(30, 6, 121, 14, 122), two(28, 6, 47, 34, 48), two(30, 46, 24, 10, 25), two(30, 2, 15, 64, 16)],
    [two(30, 17, 122, 4, 123), two(28, 29, 46, 14, 47), two(30, 49, 24, 10, 25), two(30, 24, 15, 46, 16)],
    [two(30, 4, 122, 18, 123), two(28, 13, 46, 32, 47), two(30, 48, 24, 14, 25), two(30, 42, 15, 32, 16)],
    [two(30, 20, 117, 4, 118), two(28, 40, 47, 7, 48), two(30, 43, 24, 22, 25), two(30, 10, 15, 67, 16)],
    [two(30, 19, 118, 6, 119), two(28, 18, 47, 31, 48), two(30, 34, 24, 34, 25), two(30, 20, 15, 61, 16)],
];

// Total codewords (data + error correction) per version
//------------------------------------------------------------------------------

pub static TOTAL_CODEWORDS: [usize; 40] = [
    26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761, 2876,
    3034, 3196, 3362, 3532, 3706,
];

// Alignment pattern center coordinates, indexed by version - 1
//------------------------------------------------------------------------------

pub static ALIGNMENT_POSITIONS: [&[i16]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

// Format & version info codes
//------------------------------------------------------------------------------

// 15 bit BCH codes for (EC level, mask pattern), format mask applied
pub static FORMAT_INFOS: [[u16; 8]; 4] = [
    [0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976],
    [0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0],
    [0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED],
    [0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B],
];

// 18 bit BCH codes for versions 7-40
pub static VERSION_INFOS: [u32; 34] = [
    0x07C94, 0x085BC, 0x09A99, 0x0A4D3, 0x0BBF6, 0x0C762, 0x0D847, 0x0E60D, 0x0F928, 0x10B78,
    0x1145D, 0x12A17, 0x13532, 0x149A6, 0x15683, 0x168C9, 0x177EC, 0x18EC4, 0x191E1, 0x1AFAB,
    0x1B08E, 0x1CC1A, 0x1D33F, 0x1ED75, 0x1F250, 0x209D5, 0x216F0, 0x228BA, 0x2379F, 0x24B0B,
    0x2542E, 0x26A64, 0x27541, 0x28C69,
];

pub fn format_info(ec_level: ECLevel, mask_pattern: u8) -> u32 {
    debug_assert!(mask_pattern < 8, "Invalid mask pattern: {mask_pattern}");
    FORMAT_INFOS[ec_level as usize][mask_pattern as usize] as u32
}

// Info module coordinates
//------------------------------------------------------------------------------

// Coordinates are listed most significant bit first; negative values index
// from the far edge of the grid

pub static FORMAT_INFO_COORDS_MAIN: [(i16, i16); 15] = [
    (0, 8),
    (1, 8),
    (2, 8),
    (3, 8),
    (4, 8),
    (5, 8),
    (7, 8),
    (8, 8),
    (8, 7),
    (8, 5),
    (8, 4),
    (8, 3),
    (8, 2),
    (8, 1),
    (8, 0),
];

pub static FORMAT_INFO_COORDS_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

pub static VERSION_INFO_COORDS_TR: [(i16, i16); 18] = [
    (5, -9),
    (5, -10),
    (5, -11),
    (4, -9),
    (4, -10),
    (4, -11),
    (3, -9),
    (3, -10),
    (3, -11),
    (2, -9),
    (2, -10),
    (2, -11),
    (1, -9),
    (1, -10),
    (1, -11),
    (0, -9),
    (0, -10),
    (0, -11),
];

pub static VERSION_INFO_COORDS_BL: [(i16, i16); 18] = [
    (-9, 5),
    (-10, 5),
    (-11, 5),
    (-9, 4),
    (-10, 4),
    (-11, 4),
    (-9, 3),
    (-10, 3),
    (-11, 3),
    (-9, 2),
    (-10, 2),
    (-11, 2),
    (-9, 1),
    (-10, 1),
    (-11, 1),
    (-9, 0),
    (-10, 0),
    (-11, 0),
];

// Global constants
//------------------------------------------------------------------------------

pub static FORMAT_INFO_BIT_LEN: usize = 15;

pub static VERSION_INFO_BIT_LEN: usize = 18;

pub const MAX_QR_SIZE: usize = 177 * 177;

pub const QUIET_ZONE_WIDTH: usize = 4;
