//! # qrgrid
//!
//! A Rust library for generating QR code module matrices with Reed-Solomon
//! error correction. Payloads are encoded in byte mode across versions 1-40
//! with all four error correction levels, and the result is the final
//! light/dark module matrix, quiet zone included. Rendering the matrix to
//! pixels or vectors is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrgrid::{generate, ECLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = generate("https://example.com", ECLevel::H)?;
//! for row in matrix.rows() {
//!     for &dark in row {
//!         print!("{}", if dark { "██" } else { "  " });
//!     }
//!     println!();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Full Configuration
//!
//! ```rust
//! use qrgrid::{ECLevel, MaskPattern, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"Hello, World!")
//!     .version(Version::new(2))     // QR version (size) - smallest fitting version if not set
//!     .ec_level(ECLevel::M)         // Error correction level - defaults to ECLevel::H
//!     .mask(MaskPattern::new(3))    // Mask pattern - best mask by penalty score if not set
//!     .build()?;
//!
//! let matrix = qr.to_matrix();
//! assert_eq!(matrix.width(), qr.width() + 8);
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! Versions 1-40, with sizes from 21x21 to 177x177 modules before the
//! quiet zone.
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction

pub mod builder;
pub(crate) mod common;

pub use builder::{Matrix, QRBuilder, QR};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, ECLevel, Version};

/// Encodes `data` as a byte mode QR symbol and returns its module matrix,
/// including the 4 module quiet zone border; `true` is a dark module.
///
/// Fails with [`QRError::CapacityExceeded`] when the UTF-8 byte length of
/// `data` exceeds the version 40 capacity at the requested EC level.
pub fn generate(data: &str, ec_level: ECLevel) -> QRResult<Matrix> {
    Ok(QRBuilder::new(data.as_bytes()).ec_level(ec_level).build()?.to_matrix())
}
