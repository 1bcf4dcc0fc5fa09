use xb_core::Bitmap;

use crate::masks::cell_char;

/// Upper bound of the up-front reservation in [`render_into`], in bytes.
const RESERVE_LIMIT: usize = 4 * 1024 * 1024;

/// Gather the 2×4 block at cell (`cell_col`, `band`) into a cell value.
///
/// `band` is the index of the 4-row band, `cell_col` the index of the
/// 2-column cell. Rows past `height`, bytes missing from the data and the
/// right column of a trailing half cell all read as [`Bitmap::filler`].
#[inline(always)]
#[must_use]
pub fn assemble_cell(bitmap: &Bitmap, band: usize, cell_col: usize) -> u8 {
    let filler = bitmap.filler();
    let byte = cell_col / 4;
    let shift = (cell_col % 4) * 2;
    let top = band * 4;
    // right column past the last pixel column (odd width)
    let edge = if cell_col * 2 + 1 >= bitmap.width() as usize {
        0b10
    } else {
        0b00
    };

    let mut cell = 0u8;
    for dy in 0..4 {
        let row = u32::try_from(top + dy).unwrap_or(u32::MAX);
        let src = bitmap.row_byte(row, byte).unwrap_or(filler);
        let pair = ((src >> shift) & !edge & 0b11) | (filler & edge);
        cell |= pair << (dy * 2);
    }
    cell
}

/// Render a bitmap as Braille text.
///
/// Emits `ceil(height / 4)` lines of `ceil(width / 2)` characters, each
/// terminated by `\n`. Never fails, whatever the length of the pixel data.
///
/// # Example
/// ```
/// use xb_core::Bitmap;
/// // 4×4, all background.
/// let bm = Bitmap::new(4, 4, "blank", vec![0; 4], false);
/// assert_eq!(xb_braille::render(&bm), "⣿⣿\n");
/// let bm = Bitmap::new(4, 4, "blank", vec![0; 4], true);
/// assert_eq!(xb_braille::render(&bm), "⠀⠀\n");
/// ```
#[must_use]
pub fn render(bitmap: &Bitmap) -> String {
    let mut out = String::new();
    render_into(bitmap, &mut out);
    out
}

/// Same as [`render`], appending to an existing buffer.
pub fn render_into(bitmap: &Bitmap, out: &mut String) {
    let cols = bitmap.cell_columns();
    let rows = bitmap.cell_rows();
    let negate = bitmap.negate();

    out.reserve(reserve_hint(rows, cols));
    for band in 0..rows {
        for cell_col in 0..cols {
            out.push(cell_char(assemble_cell(bitmap, band, cell_col), negate));
        }
        out.push('\n');
    }
    log::trace!("{}: {rows} lignes × {cols} cellules", bitmap.name());
}

/// Output size for a `rows × cols` grid, capped at [`RESERVE_LIMIT`].
fn reserve_hint(rows: usize, cols: usize) -> usize {
    // Braille patterns are 3 bytes in UTF-8, plus one newline per line.
    cols.checked_mul(3)
        .and_then(|line| line.checked_add(1))
        .and_then(|line| line.checked_mul(rows))
        .map_or(RESERVE_LIMIT, |len| len.min(RESERVE_LIMIT))
}
