//! Shared top-level overlay layer.
//!
//! Popups are mounted here instead of inside the trigger's own layout so
//! they escape any clipping container. A mounted node is owned by an
//! [`OverlayNode`] guard and unmounted when the guard drops, whichever way
//! the popup closes.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Debug, Default)]
struct OverlayNodes {
    next_id: u64,
    mounted: BTreeMap<u64, String>,
}

/// Handle to the application-wide overlay layer. Clones share the layer.
#[derive(Debug, Clone, Default)]
pub struct OverlaySurface {
    nodes: Rc<RefCell<OverlayNodes>>,
}

impl OverlaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&self, owner: impl Into<String>) -> OverlayNode {
        let mut nodes = self.nodes.borrow_mut();
        let id = nodes.next_id;
        nodes.next_id += 1;
        let owner = owner.into();
        log::debug!("Mounted overlay node {} for '{}'", id, owner);
        nodes.mounted.insert(id, owner);
        OverlayNode {
            id,
            nodes: Rc::downgrade(&self.nodes),
        }
    }

    pub fn mounted_count(&self) -> usize {
        self.nodes.borrow().mounted.len()
    }

    pub fn is_mounted(&self, id: u64) -> bool {
        self.nodes.borrow().mounted.contains_key(&id)
    }
}

/// A node mounted on an [`OverlaySurface`].
#[derive(Debug)]
pub struct OverlayNode {
    id: u64,
    nodes: Weak<RefCell<OverlayNodes>>,
}

impl OverlayNode {
    /// Stable address of this node on the surface.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for OverlayNode {
    fn drop(&mut self) {
        if let Some(nodes) = self.nodes.upgrade() {
            if nodes.borrow_mut().mounted.remove(&self.id).is_some() {
                log::debug!("Unmounted overlay node {}", self.id);
            }
        }
    }
}
