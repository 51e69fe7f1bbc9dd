//! Decoded UI widget tree
//!
//! The game's panel manager owns a tree of named widgets. Each read decodes a
//! fresh, owned copy of that tree; nothing in it points back into the game's
//! memory. Lookups go by name path and return an empty sentinel node when
//! any step is missing, so "not found" is tested with [`PanelNode::is_empty`].

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::memory::layout::{panel, panel_manager};
use crate::memory::{ByteBuffer, ReadMemory};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PanelNode {
    pub name: String,
    pub enabled: bool,
    pub visible: bool,
    /// Child count as reported by the game (unnamed children included)
    pub num_children: usize,
    pub extra_text: String,
    pub extra_text2: String,
    pub extra_text3: String,
    pub children: BTreeMap<String, PanelNode>,
}

static EMPTY_PANEL: PanelNode = PanelNode {
    name: String::new(),
    enabled: false,
    visible: false,
    num_children: 0,
    extra_text: String::new(),
    extra_text2: String::new(),
    extra_text3: String::new(),
    children: BTreeMap::new(),
};

impl PanelNode {
    /// The "not found" sentinel
    pub fn empty() -> &'static PanelNode {
        &EMPTY_PANEL
    }

    pub fn is_empty(&self) -> bool {
        *self == EMPTY_PANEL
    }

    /// Present, enabled and visible
    pub fn is_active(&self) -> bool {
        !self.is_empty() && self.enabled && self.visible
    }

    /// Named child, or the sentinel
    pub fn child(&self, name: &str) -> &PanelNode {
        self.children.get(name).unwrap_or(&EMPTY_PANEL)
    }

    /// Walk a path of child names starting below this node
    pub fn descend<S: AsRef<str>>(&self, path: &[S]) -> &PanelNode {
        path.iter()
            .try_fold(self, |node, name| node.children.get(name.as_ref()))
            .unwrap_or(&EMPTY_PANEL)
    }
}

/// Top-level panels, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PanelTree {
    roots: BTreeMap<String, PanelNode>,
}

impl PanelTree {
    pub fn new(roots: BTreeMap<String, PanelNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &BTreeMap<String, PanelNode> {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Resolve a path whose first element names a top-level panel
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> &PanelNode {
        let Some((first, rest)) = path.split_first() else {
            return &EMPTY_PANEL;
        };
        match self.roots.get(first.as_ref()) {
            Some(root) => root.descend(rest),
            None => &EMPTY_PANEL,
        }
    }

    /// Like [`resolve`](Self::resolve), moving the node out of the tree
    pub fn take<S: AsRef<str>>(mut self, path: &[S]) -> PanelNode {
        let Some((first, rest)) = path.split_first() else {
            return PanelNode::default();
        };
        let Some(mut node) = self.roots.remove(first.as_ref()) else {
            return PanelNode::default();
        };
        for name in rest {
            match node.children.remove(name.as_ref()) {
                Some(child) => node = child,
                None => return PanelNode::default(),
            }
        }
        node
    }
}

/// Decode the whole panel tree.
///
/// `manager_slot` is the absolute address holding the panel manager pointer.
/// An unreadable manager decodes to an empty tree.
pub fn read_panel_tree<R: ReadMemory + ?Sized>(reader: &R, manager_slot: u64) -> PanelTree {
    if manager_slot == 0 {
        return PanelTree::default();
    }
    let manager = reader.read_ptr(manager_slot);
    if manager == 0 {
        return PanelTree::default();
    }

    let roots_ptr = reader.read_ptr(manager.wrapping_add(panel_manager::ROOTS_PTR));
    let count = reader.read_u64(manager.wrapping_add(panel_manager::ROOTS_COUNT));

    let mut decoder = PanelDecoder {
        reader,
        visited: HashSet::new(),
    };
    let (_, roots) = decoder.children(roots_ptr, count, 0);
    debug!("Decoded {} top-level panels", roots.len());
    PanelTree { roots }
}

struct PanelDecoder<'a, R: ?Sized> {
    reader: &'a R,
    visited: HashSet<u64>,
}

impl<R: ReadMemory + ?Sized> PanelDecoder<'_, R> {
    fn children(
        &mut self,
        array_ptr: u64,
        count: u64,
        depth: usize,
    ) -> (usize, BTreeMap<String, PanelNode>) {
        let count = count.min(panel::MAX_CHILDREN) as usize;
        let mut children = BTreeMap::new();
        if depth >= panel::MAX_DEPTH {
            return (count, children);
        }

        for ptr in self.reader.read_ptr_array(array_ptr, count) {
            if let Some(node) = self.node(ptr, depth) {
                children.entry(node.name.clone()).or_insert(node);
            }
        }
        (count, children)
    }

    fn node(&mut self, address: u64, depth: usize) -> Option<PanelNode> {
        if address == 0 || !self.visited.insert(address) {
            return None;
        }

        let raw = self.reader.read_bytes(address, panel::NODE_SIZE);
        if raw.is_empty() {
            return None;
        }
        let raw = ByteBuffer::new(&raw);

        let name_len = raw.u64_at(panel::NAME_LEN) as usize;
        let name_max = if name_len == 0 {
            panel::MAX_NAME_LEN
        } else {
            name_len.min(panel::MAX_NAME_LEN)
        };
        let name = self.text(raw.u64_at(panel::NAME_PTR), name_max);
        if name.is_empty() {
            return None;
        }

        let (num_children, children) = self.children(
            raw.u64_at(panel::CHILDREN_PTR),
            raw.u64_at(panel::CHILDREN_COUNT),
            depth + 1,
        );

        Some(PanelNode {
            name,
            enabled: raw.flag_at(panel::ENABLED),
            visible: raw.flag_at(panel::VISIBLE),
            num_children,
            extra_text: self.text(raw.u64_at(panel::EXTRA_TEXT_PTR), panel::MAX_TEXT_LEN),
            extra_text2: self.text(raw.u64_at(panel::EXTRA_TEXT2_PTR), panel::MAX_TEXT_LEN),
            extra_text3: self.text(raw.u64_at(panel::EXTRA_TEXT3_PTR), panel::MAX_TEXT_LEN),
            children,
        })
    }

    fn text(&self, ptr: u64, max_len: usize) -> String {
        if ptr == 0 {
            return String::new();
        }
        self.reader.read_string(ptr, max_len)
    }
}
