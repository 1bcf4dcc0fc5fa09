/// Shared types for xbmbraille: the decoded bitmap and its errors.
///
/// Every other crate of the workspace depends on this one; it has no
/// knowledge of the textual XBM syntax nor of Braille output.

pub mod bitmap;
pub mod error;

pub use bitmap::Bitmap;
pub use error::{DecodeError, Dimension};

/// Taille maximale d'une source XBM acceptée (1 MiB).
pub const MAX_SOURCE_LEN: usize = 1024 * 1024;
