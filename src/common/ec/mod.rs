mod encoder;
mod galois;

pub use encoder::ecc;
pub use galois::{generator_poly, G};
