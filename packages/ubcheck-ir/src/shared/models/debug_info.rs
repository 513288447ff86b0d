//! Per-unit debug metadata and location resolution

use super::location::{DebugLoc, MetadataId, SourceFrame, SourceLocationChain};
use crate::shared::ports::LocationResolver;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
struct FileScope {
    directory: String,
    filename: String,
}

/// Debug metadata: file scopes and inline call sites
#[derive(Debug, Clone, Default)]
pub struct DebugInfoTable {
    next_id: u32,
    scopes: FxHashMap<MetadataId, FileScope>,
    inline_sites: FxHashMap<MetadataId, DebugLoc>,
}

impl DebugInfoTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> MetadataId {
        let id = MetadataId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add_scope(
        &mut self,
        directory: impl Into<String>,
        filename: impl Into<String>,
    ) -> MetadataId {
        let id = self.allocate();
        self.scopes.insert(
            id,
            FileScope {
                directory: directory.into(),
                filename: filename.into(),
            },
        );
        id
    }

    /// Register the location a callee body was inlined into
    pub fn add_inline_site(&mut self, site: DebugLoc) -> MetadataId {
        let id = self.allocate();
        self.inline_sites.insert(id, site);
        id
    }

    fn frame(&self, loc: &DebugLoc) -> Option<SourceFrame> {
        let scope = self.scopes.get(&loc.scope)?;
        Some(SourceFrame::new(
            scope.directory.clone(),
            scope.filename.clone(),
            loc.line,
            loc.column,
        ))
    }
}

impl LocationResolver for DebugInfoTable {
    fn resolve(&self, loc: &DebugLoc) -> Option<SourceLocationChain> {
        let mut chain = SourceLocationChain::new(self.frame(loc)?);
        let mut parent = loc.inlined_at;
        let mut visited = FxHashSet::default();
        // Stop at the first link that does not resolve or was already walked
        while let Some(id) = parent {
            if !visited.insert(id) {
                tracing::debug!("inline chain revisits {:?}; truncated", id);
                break;
            }
            let Some(site) = self.inline_sites.get(&id) else {
                break;
            };
            let Some(frame) = self.frame(site) else {
                break;
            };
            chain.push_origin(frame);
            parent = site.inlined_at;
        }
        Some(chain)
    }
}
