use std::ops::{Add, AddAssign, Mul};
use std::sync::OnceLock;

// GF(256) exponent & log tables
//------------------------------------------------------------------------------

struct FieldTables {
    exp: [u8; 512],
    log: [u8; 256],
}

// Computed once before first use, immutable afterwards; safe to share
// across threads without locking
static FIELD_TABLES: OnceLock<FieldTables> = OnceLock::new();

fn field_tables() -> &'static FieldTables {
    FIELD_TABLES.get_or_init(|| {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut x: usize = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLYNOMIAL;
            }
        }
        // Mirror the exponents past 255 to skip modular index arithmetic
        for i in 255..512 {
            exp[i] = exp[i - 255];
        }
        FieldTables { exp, log }
    })
}

// Galois field element
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct G(pub u8);

impl G {
    // Power of the field generator: alpha ^ exponent
    pub fn gen_pow(exponent: usize) -> Self {
        debug_assert!(exponent < 512, "Exponent out of table bounds: {exponent}");
        G(field_tables().exp[exponent])
    }
}

impl Add for G {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        G(self.0 ^ rhs.0)
    }
}

impl AddAssign for G {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Mul for G {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.0 == 0 || rhs.0 == 0 {
            return G(0);
        }
        let tables = field_tables();
        let log_sum = tables.log[self.0 as usize] as usize + tables.log[rhs.0 as usize] as usize;
        G(tables.exp[log_sum])
    }
}

// Generator polynomial
//------------------------------------------------------------------------------

// Built iteratively from (x - alpha^i) factors; coefficients are stored
// highest degree first with the monic leading term included
pub fn generator_poly(degree: usize) -> Vec<G> {
    debug_assert!(degree > 0, "Generator polynomial degree must be positive");

    let mut gen = Vec::with_capacity(degree + 1);
    gen.push(G(1));
    for i in 0..degree {
        let root = G::gen_pow(i);
        gen.push(G(0));
        for j in (1..gen.len()).rev() {
            let scaled = gen[j - 1] * root;
            gen[j] += scaled;
        }
    }
    gen
}


// Global constants
//------------------------------------------------------------------------------

static PRIMITIVE_POLYNOMIAL: usize = 0x11D;
