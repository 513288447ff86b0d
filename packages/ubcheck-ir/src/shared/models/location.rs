//! Source locations
//!
//! `DebugLoc` is the opaque per-instruction metadata; `SourceLocationChain`
//! is its resolved form, innermost frame first, one frame per inlining level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle into a unit's debug info table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataId(pub u32);

/// Debug location attached to an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DebugLoc {
    pub line: u32,
    /// 0 when unknown
    pub column: u32,
    /// File scope
    pub scope: MetadataId,
    /// Call site this location was inlined into
    pub inlined_at: Option<MetadataId>,
}

impl DebugLoc {
    pub fn new(scope: MetadataId, line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            scope,
            inlined_at: None,
        }
    }

    pub fn inlined_at(mut self, site: MetadataId) -> Self {
        self.inlined_at = Some(site);
        self
    }
}

/// One resolved source position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFrame {
    pub directory: String,
    pub filename: String,
    pub line: u32,
    pub column: u32,
}

impl SourceFrame {
    pub fn new(
        directory: impl Into<String>,
        filename: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
            line,
            column,
        }
    }

    /// Directory and filename joined with a single separator
    pub fn path(&self) -> String {
        if self.directory.is_empty() || self.filename.starts_with('/') {
            self.filename.clone()
        } else if self.directory.ends_with('/') {
            format!("{}{}", self.directory, self.filename)
        } else {
            format!("{}/{}", self.directory, self.filename)
        }
    }
}

impl fmt::Display for SourceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:", self.path(), self.line)?;
        if self.column != 0 {
            write!(f, "{}:", self.column)?;
        }
        Ok(())
    }
}

/// Non-empty sequence of frames, innermost first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocationChain {
    frames: Vec<SourceFrame>,
}

impl SourceLocationChain {
    pub fn new(innermost: SourceFrame) -> Self {
        Self {
            frames: vec![innermost],
        }
    }

    /// Append the frame this chain's outermost frame was inlined into
    pub fn push_origin(&mut self, frame: SourceFrame) {
        self.frames.push(frame);
    }

    pub fn with_origin(mut self, frame: SourceFrame) -> Self {
        self.push_origin(frame);
        self
    }

    pub fn innermost(&self) -> &SourceFrame {
        &self.frames[0]
    }

    pub fn frames(&self) -> &[SourceFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
