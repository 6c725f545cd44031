//! Outside-interaction dismissal.
//!
//! While the popup is open the controller holds exactly one page-level
//! pointer-down listener. The listener is a guard: closing the popup, or
//! dropping the controller, releases it.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use super::placement::{AnchorRect, PopupGeometry};

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Popup,
    Trigger,
    Outside,
}

/// A page-level pointer-down notification.
///
/// `sequence` increases with every UI event the host delivers (a frame
/// number works); it orders notifications against the event that opened
/// the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub sequence: u64,
    pub target: HitTarget,
}

/// Map a pointer position onto the popup, the trigger, or neither.
/// The popup wins where the two overlap.
pub fn classify_pointer(x: f32, y: f32, trigger: &AnchorRect, popup: Option<&PopupGeometry>) -> HitTarget {
    if popup.is_some_and(|popup| popup.contains(x, y)) {
        HitTarget::Popup
    } else if trigger.contains(x, y) {
        HitTarget::Trigger
    } else {
        HitTarget::Outside
    }
}

#[derive(Debug, Default)]
struct ListenerTable {
    next_id: u64,
    active: BTreeSet<u64>,
}

/// Registry of page-level pointer-down listeners shared by every widget on
/// the page. Clones share the registry.
#[derive(Debug, Clone, Default)]
pub struct PageListeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl PageListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> ListenerGuard {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.active.insert(id);
        ListenerGuard {
            id,
            table: Rc::downgrade(&self.table),
        }
    }

    pub fn active_count(&self) -> usize {
        self.table.borrow().active.len()
    }
}

/// A registered listener; unregisters on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    table: Weak<RefCell<ListenerTable>>,
}

impl ListenerGuard {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().active.remove(&self.id);
        }
    }
}

#[derive(Debug)]
struct Subscription {
    _guard: ListenerGuard,
    armed_after: u64,
}

/// Decides whether a pointer-down should close the open popup.
#[derive(Debug)]
pub struct DismissalController {
    listeners: PageListeners,
    subscription: Option<Subscription>,
}

impl DismissalController {
    pub fn new(listeners: PageListeners) -> Self {
        Self {
            listeners,
            subscription: None,
        }
    }

    /// Subscribe once the popup is open. `opened_at` is the sequence of the
    /// event that opened it; that event and anything older are ignored.
    pub fn arm(&mut self, opened_at: u64) {
        let guard = self.listeners.subscribe();
        log::debug!("Armed outside-click listener {} after event {}", guard.id(), opened_at);
        // Replacing drops any previous guard, so at most one listener exists.
        self.subscription = Some(Subscription {
            _guard: guard,
            armed_after: opened_at,
        });
    }

    pub fn disarm(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("Released outside-click listener");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.subscription.is_some()
    }

    /// True when the notification should dismiss the popup. Always false
    /// while unsubscribed.
    pub fn should_dismiss(&self, event: &PointerDown) -> bool {
        match &self.subscription {
            Some(subscription) => {
                event.sequence > subscription.armed_after && event.target == HitTarget::Outside
            }
            None => false,
        }
    }
}
