//! Human-facing reporter
//!
//! Output shape, one frame per inlining level:
//!
//! ```text
//! /src/util.h:5:9:
//! /src/main.c:40:7: bug: abs
//! ```

use crate::config::ColorMode;
use crate::shared::models::SourceLocationChain;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Text between the location chain and the message
pub const LEAD_IN: &str = " bug: ";

pub struct Reporter<W: WriteColor> {
    out: W,
    /// Computed once at construction
    interactive: bool,
}

impl Reporter<StandardStream> {
    /// Reporter bound to the process error stream
    pub fn stderr(color: ColorMode) -> Self {
        let interactive = match color {
            ColorMode::Auto => io::stderr().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        let choice = if interactive {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stderr(choice), interactive)
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the chain, innermost frame first, then the lead-in.
    /// No trailing newline; the message follows.
    pub fn emit_location(&mut self, chain: &SourceLocationChain) {
        if let Err(e) = self.write_location(chain) {
            tracing::debug!("reporter: failed to write location: {}", e);
        }
    }

    /// Print the message and terminate the report line
    pub fn emit_message(&mut self, message: &str) {
        if let Err(e) = self.write_message(message) {
            tracing::debug!("reporter: failed to write message: {}", e);
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn set_fg(&mut self, color: Color) -> io::Result<()> {
        if self.interactive {
            self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        }
        Ok(())
    }

    fn write_location(&mut self, chain: &SourceLocationChain) -> io::Result<()> {
        self.set_fg(Color::Cyan)?;
        for (i, frame) in chain.frames().iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            write!(self.out, "{}", frame)?;
        }
        self.set_fg(Color::Magenta)?;
        write!(self.out, "{}", LEAD_IN)
    }

    fn write_message(&mut self, message: &str) -> io::Result<()> {
        self.set_fg(Color::Cyan)?;
        writeln!(self.out, "{}", message)?;
        if self.interactive {
            self.out.reset()?;
        }
        Ok(())
    }
}
