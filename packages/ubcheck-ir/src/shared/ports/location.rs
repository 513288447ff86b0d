//! Location resolution port

use crate::shared::models::{DebugLoc, SourceLocationChain};

/// Resolves instruction debug metadata to source frames
pub trait LocationResolver {
    /// Innermost frame first, followed by each inlining origin.
    ///
    /// `None` if the innermost frame itself does not resolve. A chain stops
    /// silently at the first parent link that does not resolve.
    fn resolve(&self, loc: &DebugLoc) -> Option<SourceLocationChain>;
}
