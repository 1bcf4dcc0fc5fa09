//! Décodeur XBM (X11 bitmap, format "version 11").
//!
//! The whole declaration block is recognised by a single anchored pattern:
//!
//! ```text
//! #define <id>_width <digits>
//! #define <id>_height <digits>
//! [#define <id>_x_hot <digits>
//!  #define <id>_y_hot <digits>]
//! static [const] [unsigned] char <name>_bits[] = { 0xHH, ... [,] }
//! ```
//!
//! The older X10 layout (`short` words) is not recognised.

use std::str;

use once_cell::sync::Lazy;
use regex::bytes::{Captures, Regex};
use xb_core::bitmap::stride_of;
use xb_core::{Bitmap, DecodeError, Dimension, MAX_SOURCE_LEN};

/// Width, height, optional hot spot and bits array, in this order.
#[allow(clippy::expect_used)]
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?mR)",
        r"^#define[ \t]+\S+_width[ \t]+(?<width>\d+)[ \t]*$\s*",
        r"^#define[ \t]+\S+_height[ \t]+(?<height>\d+)[ \t]*$\s*",
        r"(?:^#define[ \t]+\S+_x_hot[ \t]+\d+[ \t]*$\s*",
        r"^#define[ \t]+\S+_y_hot[ \t]+\d+[ \t]*$\s*)?",
        r"^static[ \t]+(?:const[ \t]+)?(?:unsigned[ \t]+)?char[ \t]+(?<name>\S+)_bits",
        r"[ \t]*\[[ \t]*\][ \t]*=[ \t]*\{",
        r"(?<body>\s*0x[[:xdigit:]]{1,2}(?:\s*,\s*0x[[:xdigit:]]{1,2})*)\s*,?\s*\}",
    ))
    .expect("XBM declaration pattern")
});

/// One byte literal inside the bits array.
#[allow(clippy::expect_used)]
static HEX_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0x(?<digits>[[:xdigit:]]{1,2})").expect("hex literal pattern"));

/// Decode an XBM source into a [`Bitmap`].
///
/// `negate` selects the rendering polarity and, when off, triggers the row
/// padding correction (see [`Bitmap::new`]).
///
/// The number of byte literals is not checked against `width` and `height`:
/// whatever is present is kept, and the renderer treats missing bytes as
/// blank.
///
/// # Errors
/// - [`DecodeError::Oversized`] if `source` exceeds [`MAX_SOURCE_LEN`].
/// - [`DecodeError::MalformedSource`] if the declarations are not found.
/// - [`DecodeError::InvalidDimension`] if width or height overflows `u32`.
/// - [`DecodeError::TooLarge`] if `stride × height` exceeds [`MAX_SOURCE_LEN`]
///   bytes (a zero width counts as one byte per row).
///
/// # Example
/// ```
/// let src = b"#define dot_width 4\n#define dot_height 1\nstatic char dot_bits[] = {\n0x01 };";
/// let bm = xb_source::decode(src, true).unwrap();
/// assert_eq!((bm.width(), bm.height(), bm.name()), (4, 1, "dot"));
/// assert_eq!(bm.data(), &[0x01]);
/// ```
pub fn decode(source: &[u8], negate: bool) -> Result<Bitmap, DecodeError> {
    if source.len() > MAX_SOURCE_LEN {
        return Err(DecodeError::Oversized {
            len: source.len(),
            max: MAX_SOURCE_LEN,
        });
    }

    let caps = DECLARATION
        .captures(source)
        .ok_or(DecodeError::MalformedSource)?;

    let width = parse_dimension(group(&caps, "width")?, Dimension::Width)?;
    let height = parse_dimension(group(&caps, "height")?, Dimension::Height)?;
    check_area(width, height)?;
    let name = String::from_utf8_lossy(group(&caps, "name")?).into_owned();

    let data = HEX_LITERAL
        .captures_iter(group(&caps, "body")?)
        .map(|lit| {
            let digits = str::from_utf8(group(&lit, "digits")?)
                .map_err(|_| DecodeError::MalformedSource)?;
            u8::from_str_radix(digits, 16).map_err(|_| DecodeError::MalformedSource)
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let expected = stride_of(width).saturating_mul(height as usize);
    if data.len() == expected {
        log::debug!("{name}: {width}×{height}, {} octets", data.len());
    } else {
        log::warn!(
            "{name}: {width}×{height} attend {expected} octets, {} trouvés",
            data.len()
        );
    }

    Ok(Bitmap::new(width, height, name, data, negate))
}

/// A source under the size cap holds far fewer literals than `MAX_SOURCE_LEN`,
/// so a larger declared area can only come from a bogus header.
fn check_area(width: u32, height: u32) -> Result<(), DecodeError> {
    // zero width still emits one line per band
    let stride = stride_of(width).max(1) as u64;
    if stride * u64::from(height) > MAX_SOURCE_LEN as u64 {
        return Err(DecodeError::TooLarge {
            width,
            height,
            max: MAX_SOURCE_LEN,
        });
    }
    Ok(())
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> Result<&'h [u8], DecodeError> {
    caps.name(name)
        .map(|m| m.as_bytes())
        .ok_or(DecodeError::MalformedSource)
}

fn parse_dimension(raw: &[u8], field: Dimension) -> Result<u32, DecodeError> {
    let text = str::from_utf8(raw).map_err(|_| DecodeError::MalformedSource)?;
    text.parse()
        .map_err(|source| DecodeError::InvalidDimension {
            field,
            value: text.to_owned(),
            source,
        })
}
