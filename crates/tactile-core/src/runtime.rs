use crate::semantics::Role;
use crate::view::{Callback, View, ViewId};

/// Frame — output of composition for a tick: input targets + semantics.
#[derive(Clone, Default)]
pub struct Frame {
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
    pub focus_chain: Vec<ViewId>,
}

impl Frame {
    pub fn hit(&self, id: ViewId) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|h| h.id == id)
    }

    pub fn node(&self, id: ViewId) -> Option<&SemNode> {
        self.semantics_nodes.iter().find(|n| n.id == id)
    }

    /// Next id in the focus chain after `current`, wrapping at either end.
    /// Starts at the first (or last, when going backwards) entry if nothing
    /// in the chain is focused.
    pub fn next_focus(&self, current: Option<ViewId>, backwards: bool) -> Option<ViewId> {
        let chain = &self.focus_chain;
        if chain.is_empty() {
            return None;
        }
        let idx = current.and_then(|cur| chain.iter().position(|&id| id == cur));
        let next = match (idx, backwards) {
            (Some(0), true) => chain.len() - 1,
            (Some(i), true) => i - 1,
            (Some(i), false) => (i + 1) % chain.len(),
            (None, true) => chain.len() - 1,
            (None, false) => 0,
        };
        Some(chain[next])
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("hit_regions", &self.hit_regions.len())
            .field("semantics_nodes", &self.semantics_nodes)
            .field("focus_chain", &self.focus_chain)
            .finish()
    }
}

#[derive(Clone)]
pub struct HitRegion {
    pub id: ViewId,
    pub on_click: Option<Callback>,
    pub focusable: bool,
}

/// Flattened semantics node produced by composition.
///
/// Ids are stamped depth-first and shared with the matching `HitRegion`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SemNode {
    pub id: ViewId,
    pub role: Role,
    pub label: Option<String>,
    pub focused: bool,
    pub enabled: bool,
}

pub struct Scheduler {
    pub focused: Option<ViewId>,
    frames: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            focused: None,
            frames: 0,
        }
    }

    /// Number of frames composed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn compose<F>(
        &mut self,
        mut build_root: F,
        collect: impl Fn(&View, Option<ViewId>) -> (Vec<HitRegion>, Vec<SemNode>),
    ) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        let root = build_root(self);
        let (hits, sem) = collect(&root, self.focused);

        let focus_chain: Vec<ViewId> = hits.iter().filter(|h| h.focusable).map(|h| h.id).collect();

        // Focus on a node that went away (or became disabled) is dropped.
        if let Some(f) = self.focused {
            if !focus_chain.contains(&f) {
                log::debug!("focus {f} no longer focusable; clearing");
                self.focused = None;
            }
        }
        self.frames += 1;

        Frame {
            hit_regions: hits,
            semantics_nodes: sem,
            focus_chain,
        }
    }
}
