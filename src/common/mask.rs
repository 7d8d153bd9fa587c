use std::ops::Deref;

use super::metadata::Color;
use crate::builder::QR;

// Mask pattern
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> Self {
        debug_assert!(pattern < 8, "Invalid masking pattern");
        Self(pattern)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match self.0 {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid pattern"),
        }
    }
}

// Best mask search
//------------------------------------------------------------------------------

// Ties resolve to the lowest mask id: min_by_key keeps the first minimum
pub fn apply_best_mask(qr: &mut QR) -> MaskPattern {
    let best_mask = (0..8)
        .min_by_key(|&m| {
            let mut trial = qr.clone();
            trial.apply_mask(MaskPattern(m));
            compute_total_penalty(&trial)
        })
        .expect("Should return atleast 1 mask");
    let best_mask = MaskPattern(best_mask);
    qr.apply_mask(best_mask);
    best_mask
}

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen_h = compute_finder_pattern_penalty(qr, true);
    let fp_pen_v = compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    adj_pen + blk_pen + fp_pen_h + fp_pen_v + bal_pen
}

// Rule 1: each maximal run of 5 or more same colored modules in a row or
// column scores its length minus 2
fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let w = qr.width() as i16;
    let mut pen = 0;
    for i in 0..w {
        pen += line_run_penalty((0..w).map(|j| *qr.get(i, j)));
        pen += line_run_penalty((0..w).map(|j| *qr.get(j, i)));
    }
    pen
}

fn line_run_penalty(line: impl Iterator<Item = Color>) -> u32 {
    let mut pen = 0;
    let mut run = 0u32;
    let mut last = None;
    for clr in line {
        if last == Some(clr) {
            run += 1;
        } else {
            if run >= 5 {
                pen += run - 2;
            }
            last = Some(clr);
            run = 1;
        }
    }
    if run >= 5 {
        pen += run - 2;
    }
    pen
}

// Rule 2: every 2x2 block of same colored modules scores 3, overlaps counted
fn compute_block_penalty(qr: &QR) -> u32 {
    let w = qr.width() as i16;
    let mut pen = 0;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = *qr.get(r, c);
            if clr == *qr.get(r + 1, c) && clr == *qr.get(r, c + 1) && clr == *qr.get(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

// Rule 3: every 11 module window matching the finder-like sequence, in
// either orientation and either direction, scores 40
fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    let w = qr.width() as i16;
    let mut pen = 0;
    for i in 0..w {
        for j in 0..=w - FINDER_PATTERN.len() as i16 {
            let window = (j..j + FINDER_PATTERN.len() as i16)
                .map(|k| if is_hor { *qr.get(i, k) } else { *qr.get(k, i) });
            let fwd = window.clone().eq(FINDER_PATTERN.iter().copied());
            let rev = window.eq(FINDER_PATTERN.iter().rev().copied());
            if fwd || rev {
                pen += 40;
            }
        }
    }
    pen
}

// Rule 4: distance of the dark module percentage from 50, rounded to the
// nearest multiple of 5 towards 50, scores 10 per step of 5
fn compute_balance_penalty(qr: &QR) -> u32 {
    let w = qr.width();
    let total = w * w;
    let dark = qr.count_dark_modules();
    let pct = dark * 100 / total;
    let prev_five = pct / 5 * 5;
    let next_five = prev_five + 5;
    (prev_five.abs_diff(50).min(next_five.abs_diff(50)) / 5 * 10) as u32
}

// Global constants
//------------------------------------------------------------------------------

// Finder-like sequence: dark-light-dark-dark-dark-light-dark followed by
// four light modules
static FINDER_PATTERN: [Color; 11] = [
    Color::Dark,
    Color::Light,
    Color::Dark,
    Color::Dark,
    Color::Dark,
    Color::Light,
    Color::Dark,
    Color::Light,
    Color::Light,
    Color::Light,
    Color::Light,
];
