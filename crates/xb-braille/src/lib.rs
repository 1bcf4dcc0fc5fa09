/// Braille rendering engine for xbmbraille.
///
/// Converts a decoded [`xb_core::Bitmap`] into lines of Unicode Braille
/// patterns, one character per 2×4 pixel cell.
pub mod braille;
pub mod masks;

pub use braille::{render, render_into};
pub use masks::{BRAILLE_BASE, CELL_DOTS, cell_char};
