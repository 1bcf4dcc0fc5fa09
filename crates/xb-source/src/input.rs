use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use xb_core::{Bitmap, MAX_SOURCE_LEN};

use crate::xbm::decode;

/// Where an XBM source is read from.
///
/// # Example
/// ```
/// use xb_source::Input;
/// use std::path::PathBuf;
/// assert_eq!(Input::from(PathBuf::from("-")), Input::Stdin);
/// assert_eq!(Input::from(PathBuf::from("a.xbm")).to_string(), "a.xbm");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Entrée standard (argument `-`).
    Stdin,
    /// Fichier sur disque.
    File(PathBuf),
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Input {
    /// Read the whole source, up to [`MAX_SOURCE_LEN`] bytes.
    ///
    /// # Errors
    /// Returns an error if the source cannot be opened or read, or is too large.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Stdin => read_capped(io::stdin().lock()).context("Lecture de l'entrée standard"),
            Self::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Impossible d'ouvrir {}", path.display()))?;
                read_capped(file).with_context(|| format!("Impossible de lire {}", path.display()))
            }
        }
    }
}

/// Read at most [`MAX_SOURCE_LEN`] bytes from `reader`.
///
/// One extra byte is requested so that an oversized stream is detected and
/// rejected instead of being silently truncated.
///
/// # Errors
/// Returns an error on I/O failure or if the stream exceeds the cap.
///
/// # Example
/// ```
/// let buf = xb_source::read_capped(&b"#define"[..]).unwrap();
/// assert_eq!(buf, b"#define");
/// ```
pub fn read_capped<R: Read>(reader: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .take(MAX_SOURCE_LEN as u64 + 1)
        .read_to_end(&mut buf)?;
    if buf.len() > MAX_SOURCE_LEN {
        anyhow::bail!("Source trop volumineuse (plus de {MAX_SOURCE_LEN} octets)");
    }
    Ok(buf)
}

/// Read and decode one input.
///
/// # Errors
/// Returns an error if reading or decoding fails; the input label is part
/// of the error context.
pub fn load_bitmap(input: &Input, negate: bool) -> Result<Bitmap> {
    let source = input.read()?;
    log::debug!("{input}: {} octets lus", source.len());
    decode(&source, negate).with_context(|| format!("Décodage de {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = "#define s_width 2\n#define s_height 1\nstatic char s_bits[] = { 0x01 };\n";

    #[test]
    fn cap_is_inclusive() {
        let exact = vec![b' '; MAX_SOURCE_LEN];
        assert_eq!(read_capped(&exact[..]).unwrap().len(), MAX_SOURCE_LEN);

        let over = vec![b' '; MAX_SOURCE_LEN + 1];
        let err = read_capped(&over[..]).unwrap_err();
        assert!(err.to_string().contains("volumineuse"));
    }

    #[test]
    fn file_input_is_decoded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();
        let input = Input::from(file.path().to_path_buf());
        let bm = load_bitmap(&input, true).unwrap();
        assert_eq!(bm.name(), "s");
        assert_eq!(bm.data(), &[0x01]);
    }

    #[test]
    fn missing_file_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = Input::from(dir.path().join("nope.xbm"));
        let err = load_bitmap(&input, false).unwrap_err();
        assert!(format!("{err:#}").contains("nope.xbm"));
    }

    #[test]
    fn decode_failure_carries_label_and_cause() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not an xbm").unwrap();
        let input = Input::from(file.path().to_path_buf());
        let err = load_bitmap(&input, false).unwrap_err();
        assert!(err.to_string().starts_with("Décodage de"));
        assert!(err.downcast_ref::<xb_core::DecodeError>().is_some());
    }
}
