use std::io::{self, Write};
use std::thread;

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use xb_core::Bitmap;
use xb_source::{Input, load_bitmap};

use crate::config::ViewConfig;

/// Bilan d'une exécution sur plusieurs entrées.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Images affichées.
    pub shown: usize,
    /// Entrées en échec (lecture ou décodage).
    pub failed: usize,
}

/// Writes rendered images one after the other to `out`.
pub struct Viewer<W: Write> {
    out: W,
    config: ViewConfig,
    buf: String,
}

impl<W: Write> Viewer<W> {
    /// Crée un visualiseur écrivant dans `out`.
    pub fn new(out: W, config: ViewConfig) -> Self {
        Self {
            out,
            config,
            buf: String::new(),
        }
    }

    /// Load and show every input in order.
    ///
    /// A failing input is logged and skipped; the others are still shown.
    ///
    /// # Errors
    /// Returns an error only if writing to the output fails.
    pub fn run(&mut self, inputs: &[Input]) -> Result<Summary> {
        let mut summary = Summary::default();
        for input in inputs {
            match load_bitmap(input, self.config.negate) {
                Ok(bitmap) => {
                    self.show(&input.to_string(), &bitmap)?;
                    summary.shown += 1;
                }
                Err(e) => {
                    log::error!("{input} : {e:#}");
                    summary.failed += 1;
                }
            }
        }
        log::info!("{} image(s) affichée(s), {} en échec", summary.shown, summary.failed);
        Ok(summary)
    }

    /// Show one bitmap: optional clear and label, the Braille text, then the delay.
    ///
    /// # Errors
    /// Returns an error if writing to the output fails.
    pub fn show(&mut self, label: &str, bitmap: &Bitmap) -> io::Result<()> {
        if self.config.clear {
            queue!(
                self.out,
                MoveTo(0, 0),
                Clear(ClearType::All),
                Clear(ClearType::Purge)
            )?;
        }
        if self.config.print_name {
            writeln!(self.out, "{label}")?;
        }

        self.buf.clear();
        xb_braille::render_into(bitmap, &mut self.buf);
        self.out.write_all(self.buf.as_bytes())?;
        self.out.flush()?;
        log::debug!(
            "{label}: {}×{} « {} »",
            bitmap.width(),
            bitmap.height(),
            bitmap.name()
        );

        let delay = self.config.delay;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(())
    }
}
