mod qr;

pub use qr::{Matrix, QR};
pub(crate) use qr::Module;

use std::ops::Deref;

use crate::common::{
    bit_utils::BitStream,
    codec::{encode, encode_with_version},
    ec::ecc,
    error::QRResult,
    mask::{apply_best_mask, MaskPattern},
    metadata::{ECLevel, Version},
    version_db::BlockLayout,
};

pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, ec_level: ECLevel::H, mask: None }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn metadata(&self) -> String {
        match self.version {
            Some(v) => format!("{{ Version: {}, Ec level: {:?} }}", *v, self.ec_level),
            None => format!("{{ Version: None, Ec level: {:?} }}", self.ec_level),
        }
    }
}

impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        println!("\nGenerating QR {}...", self.metadata());

        println!("Encoding data...");
        let (payload_bits, version) = match self.version {
            Some(v) => (encode_with_version(self.data, v, self.ec_level)?, v),
            None => encode(self.data, self.ec_level)?,
        };

        println!("Computing ecc & interleaving...");
        let (data_blocks, ecc_blocks) =
            Self::compute_ecc(payload_bits.data(), version, self.ec_level);
        let mut payload = BitStream::new(version.total_codewords() << 3);
        payload.extend(&Self::interleave(&data_blocks));
        payload.extend(&Self::interleave(&ecc_blocks));

        println!("Constructing QR...");
        let mut qr = QR::new(version, self.ec_level);
        qr.draw_all_function_patterns();
        qr.draw_encoding_region(payload);

        match self.mask {
            Some(m) => {
                println!("Applying mask {}...", *m);
                qr.apply_mask(m);
            }
            None => {
                println!("Finding & applying best mask...");
                apply_best_mask(&mut qr);
            }
        };

        println!("QR generated successfully: {}", qr.metadata());

        Ok(qr)
    }

    // ECC: Error correction codeword generator
    fn compute_ecc(data: &[u8], version: Version, ec_level: ECLevel) -> (Vec<&[u8]>, Vec<Vec<u8>>) {
        let data_blocks = Self::blockify(data, version, ec_level);

        let ecc_size_per_block = version.ecc_per_block(ec_level);
        let ecc_blocks = data_blocks.iter().map(|b| ecc(b, ecc_size_per_block)).collect::<Vec<_>>();

        (data_blocks, ecc_blocks)
    }

    pub(crate) fn blockify(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<&[u8]> {
        let layout = version.block_layout(ec_level);
        debug_assert!(
            layout.data_codewords() == data.len(),
            "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
            data.len(),
            layout.data_codewords()
        );

        match layout {
            BlockLayout::Single { count, data_len } => {
                let mut blocks = Vec::with_capacity(count);
                blocks.extend(data.chunks(data_len));
                blocks
            }
            BlockLayout::Split { count1, data_len1, count2, data_len2 } => {
                let split = count1 * data_len1;
                let mut blocks = Vec::with_capacity(count1 + count2);
                blocks.extend(data[..split].chunks(data_len1));
                blocks.extend(data[split..].chunks(data_len2));
                debug_assert!(
                    blocks.len() == count1 + count2,
                    "Block count mismatch: Blocks {}, Expected {}",
                    blocks.len(),
                    count1 + count2
                );
                blocks
            }
        }
    }

    // Emits the i-th codeword of every block in block order, for rising i
    pub(crate) fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let max_block_size = blocks.iter().map(|b| b.len()).max().expect("Blocks is empty");
        let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
        let mut res = Vec::with_capacity(total_size);
        for i in 0..max_block_size {
            for b in blocks {
                if i < b.len() {
                    res.push(b[i]);
                }
            }
        }
        res
    }
}

#[cfg(test)]
mod builder_tests {
    use test_case::test_case;

    use super::QRBuilder;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_add_ec_simple() {
        let msg = b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11";
        let expected_ecc = [b"\xc4\x23\x27\x77\xeb\xd7\xe7\xe2\x5d\x17"];
        let (_, ecc) = QRBuilder::compute_ecc(msg, Version::new(1), ECLevel::M);
        assert_eq!(&*ecc, expected_ecc);
    }

    #[test]
    fn test_add_ec_complex() {
        let msg = b"CUF\x86W&U\xc2w2\x06\x12\x06g&\xf6\xf6B\x07v\x86\xf2\x07&V\x16\xc6\xc7\x92\x06\
                    \xb6\xe6\xf7w2\x07v\x86W&R\x06\x86\x972\x07F\xf7vV\xc2\x06\x972\x10\xec\x11\xec\
                    \x11\xec\x11\xec";
        let expected_ec = [
            b"\xd5\xc7\x0b\x2d\x73\xf7\xf1\xdf\xe5\xf8\x9a\x75\x9a\x6f\x56\xa1\x6f\x27",
            b"\x57\xcc\x60\x3c\xca\xb6\x7c\x9d\xc8\x86\x1b\x81\xd1\x11\xa3\xa3\x78\x85",
            b"\x94\x74\xb1\xd4\x4c\x85\x4b\xf2\xee\x4c\xc3\xe6\xbd\x0a\x6c\xf0\xc0\x8d",
            b"\xeb\x9f\x05\xad\x18\x93\x3b\x21\x6a\x28\xff\xac\x52\x02\x83\x20\xb2\xec",
        ];
        let (_, ecc) = QRBuilder::compute_ecc(msg, Version::new(5), ECLevel::Q);
        assert_eq!(&*ecc, &expected_ec[..]);
    }

    #[test]
    fn test_blockify_split() {
        // Version 5 Q splits into 2 blocks of 15 and 2 blocks of 16
        let data = (0u8..62).collect::<Vec<_>>();
        let blocks = QRBuilder::blockify(&data, Version::new(5), ECLevel::Q);
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].len(), 15);
        assert_eq!(blocks[1].len(), 15);
        assert_eq!(blocks[2].len(), 16);
        assert_eq!(blocks[3].len(), 16);
        assert_eq!(blocks[0][0], 0);
        assert_eq!(blocks[2][0], 30);
    }

    #[test]
    fn test_interleave() {
        let blocks = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9, 0]];
        let interleaved = QRBuilder::interleave(&blocks);
        let exp_interleaved = vec![1, 4, 7, 2, 5, 8, 3, 6, 9, 0];
        assert_eq!(interleaved, exp_interleaved);
    }

    #[test_case("Hello, world!🌎", 1, ECLevel::L)]
    #[test_case("TEST", 1, ECLevel::M)]
    #[test_case("12345", 1, ECLevel::Q)]
    #[test_case("OK", 1, ECLevel::H)]
    fn test_build_minimal_version(data: &str, exp_version: usize, ec_level: ECLevel) {
        let qr = QRBuilder::new(data.as_bytes()).ec_level(ec_level).build().unwrap();
        assert_eq!(qr.version(), Version::new(exp_version));
        assert_eq!(qr.width(), Version::new(exp_version).width());
        assert!(qr.mask().is_some());
    }

    #[test]
    fn test_build_data_overflow() {
        let data = "a".repeat(2954);
        let res = QRBuilder::new(data.as_bytes()).ec_level(ECLevel::L).build();
        assert!(res.is_err());

        let res = QRBuilder::new(b"too much for v1")
            .version(Version::new(1))
            .ec_level(ECLevel::H)
            .build();
        assert!(res.is_err());
    }
}
