//! Table de correspondance cellule 2×4 → motif Braille (U+2800).
//!
//! A *cell value* packs the 2×4 block row by row, two bits per row, in the
//! same LSB-first order as the XBM rows it comes from:
//!
//! ```text
//! bit:  0 1      dot:  1 4
//!       2 3            2 5
//!       4 5            3 6
//!       6 7            7 8
//! ```
//!
//! Dot `n` is bit `n - 1` of the Unicode offset, which is not the cell order,
//! hence the table.

/// Braille base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Dot bit for each cell bit.
const DOT_OF_CELL_BIT: [u8; 8] = [0, 3, 1, 4, 2, 5, 6, 7];

/// Cell value → dot byte, with a dot on every set cell bit.
///
/// # Example
/// ```
/// use xb_braille::CELL_DOTS;
/// assert_eq!(CELL_DOTS[0b0000_0001], 0b0000_0001); // top-left → dot 1
/// assert_eq!(CELL_DOTS[0b0000_0010], 0b0000_1000); // top-right → dot 4
/// assert_eq!(CELL_DOTS[0b0100_0000], 0b0100_0000); // bottom-left → dot 7
/// ```
pub const CELL_DOTS: [u8; 256] = build_cell_dots();

const fn build_cell_dots() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut cell = 0;
    while cell < 256 {
        let mut dots = 0u8;
        let mut bit = 0;
        while bit < 8 {
            if cell & (1 << bit) != 0 {
                dots |= 1 << DOT_OF_CELL_BIT[bit];
            }
            bit += 1;
        }
        table[cell] = dots;
        cell += 1;
    }
    table
}

/// Braille character for a cell value under the given polarity.
///
/// By default dots are drawn on background (0) pixels; `negate` draws them
/// on ink (1) pixels instead.
///
/// # Example
/// ```
/// use xb_braille::cell_char;
/// assert_eq!(cell_char(0x00, false), '⣿');
/// assert_eq!(cell_char(0x00, true), '⠀');
/// assert_eq!(cell_char(0x01, true), '⠁');
/// ```
#[inline(always)]
#[must_use]
pub const fn cell_char(cell: u8, negate: bool) -> char {
    let lit = if negate { cell } else { !cell };
    match char::from_u32(BRAILLE_BASE + CELL_DOTS[lit as usize] as u32) {
        Some(c) => c,
        None => ' ',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_a_permutation() {
        let mut seen = [false; 256];
        for &dots in &CELL_DOTS {
            assert!(!seen[dots as usize], "dot byte {dots:#04x} produced twice");
            seen[dots as usize] = true;
        }
    }

    #[test]
    fn table_matches_dot_layout() {
        // (cell bit, expected dot number)
        let layout = [(0, 1), (2, 2), (4, 3), (1, 4), (3, 5), (5, 6), (6, 7), (7, 8)];
        for (bit, dot) in layout {
            assert_eq!(CELL_DOTS[1 << bit], 1 << (dot - 1), "cell bit {bit}");
        }
    }

    #[test]
    fn table_is_bitwise_linear() {
        for a in 0..=255u8 {
            assert_eq!(CELL_DOTS[usize::from(!a)], !CELL_DOTS[usize::from(a)]);
        }
    }

    #[test]
    fn polarities_complement_each_other() {
        for cell in 0..=255u8 {
            let pos = cell_char(cell, false) as u32 - BRAILLE_BASE;
            let neg = cell_char(cell, true) as u32 - BRAILLE_BASE;
            assert_eq!(pos ^ neg, 0xFF, "cell {cell:#04x}");
        }
    }

    #[test]
    fn every_char_is_in_the_braille_block() {
        for cell in 0..=255u8 {
            for negate in [false, true] {
                let c = cell_char(cell, negate) as u32;
                assert!((0x2800..=0x28FF).contains(&c));
            }
        }
    }
}
