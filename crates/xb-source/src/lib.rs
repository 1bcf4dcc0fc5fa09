/// XBM sources for xbmbraille: the textual decoder and the capped input layer.

pub mod input;
pub mod xbm;

pub use input::{Input, load_bitmap, read_capped};
pub use xbm::decode;
