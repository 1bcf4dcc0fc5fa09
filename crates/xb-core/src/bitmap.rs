/// Monochrome bitmap decoded from an XBM source.
///
/// Pixels are packed LSB-first, row-major, `stride()` bytes per row. A set
/// bit is "ink" (foreground), a clear bit is background.
///
/// The padding bits past `width` in the last byte of each row are forced to
/// 1 at construction when `negate` is off, so that they never show up as
/// dots once rendered.
///
/// # Example
/// ```
/// use xb_core::Bitmap;
/// let bm = Bitmap::new(5, 2, "dot", vec![0x01, 0x00], false);
/// assert_eq!(bm.stride(), 1);
/// assert_eq!(bm.data(), &[0xE1, 0xE0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    name: String,
    data: Vec<u8>,
    negate: bool,
}

impl Bitmap {
    /// Builds a bitmap and applies the row padding correction.
    ///
    /// `data` is taken as-is: it may be shorter or longer than
    /// `stride() * height`. Rows whose last byte is missing are left alone.
    ///
    /// # Example
    /// ```
    /// use xb_core::Bitmap;
    /// // Negated bitmaps keep the source padding untouched.
    /// let bm = Bitmap::new(5, 1, "dot", vec![0x01], true);
    /// assert_eq!(bm.data(), &[0x01]);
    /// ```
    #[must_use]
    pub fn new(
        width: u32,
        height: u32,
        name: impl Into<String>,
        mut data: Vec<u8>,
        negate: bool,
    ) -> Self {
        if !negate && let Some(mask) = padding_mask(width) {
            let stride = stride_of(width);
            // chunks_exact skips a trailing partial row
            for row in data.chunks_exact_mut(stride).take(height as usize) {
                if let Some(last) = row.last_mut() {
                    *last |= mask;
                }
            }
        }
        Self {
            width,
            height,
            name: name.into(),
            data,
            negate,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Identifier taken from the `<name>_bits` declaration.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Packed pixel bytes, after padding correction.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Polarity chosen by the caller at decode time.
    #[must_use]
    pub fn negate(&self) -> bool {
        self.negate
    }

    /// Bytes per row: `ceil(width / 8)`.
    #[inline(always)]
    #[must_use]
    pub fn stride(&self) -> usize {
        stride_of(self.width)
    }

    /// Number of Braille characters per output line: `ceil(width / 2)`.
    #[must_use]
    pub fn cell_columns(&self) -> usize {
        self.width.div_ceil(2) as usize
    }

    /// Number of output lines: `ceil(height / 4)`.
    #[must_use]
    pub fn cell_rows(&self) -> usize {
        self.height.div_ceil(4) as usize
    }

    /// Pixel value used for positions outside the image.
    ///
    /// Always the value that renders as "no dot" under the current polarity.
    ///
    /// # Example
    /// ```
    /// use xb_core::Bitmap;
    /// assert_eq!(Bitmap::new(1, 1, "a", vec![0], false).filler(), 0xFF);
    /// assert_eq!(Bitmap::new(1, 1, "a", vec![0], true).filler(), 0x00);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn filler(&self) -> u8 {
        if self.negate { 0x00 } else { 0xFF }
    }

    /// Byte `index` of row `row`, or `None` when out of bounds.
    ///
    /// Out of bounds covers rows past `height`, bytes past `stride` and
    /// bytes missing from a short `data` buffer.
    #[inline(always)]
    #[must_use]
    pub fn row_byte(&self, row: u32, index: usize) -> Option<u8> {
        let stride = self.stride();
        if row >= self.height || index >= stride {
            return None;
        }
        self.data.get(row as usize * stride + index).copied()
    }

    /// Whether pixel (x, y) is ink. Out-of-bounds pixels read as background.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width {
            return false;
        }
        self.row_byte(y, (x / 8) as usize)
            .is_some_and(|b| (b >> (x % 8)) & 1 == 1)
    }
}

/// Bytes per row for a given width.
#[inline(always)]
#[must_use]
pub fn stride_of(width: u32) -> usize {
    width.div_ceil(8) as usize
}

/// Mask of the unused high bits in a row's last byte.
///
/// Returns `None` when `width` is byte-aligned.
///
/// # Example
/// ```
/// use xb_core::bitmap::padding_mask;
/// assert_eq!(padding_mask(16), None);
/// assert_eq!(padding_mask(5), Some(0b1110_0000));
/// assert_eq!(padding_mask(1), Some(0b1111_1110));
/// ```
#[must_use]
pub fn padding_mask(width: u32) -> Option<u8> {
    match width % 8 {
        0 => None,
        d => Some(!((1u8 << d) - 1)),
    }
}
