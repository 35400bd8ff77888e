//! Lifecycle of the assignment detail popup.
//!
//! At most one popup is alive. Every listener registered for a popup is held
//! as a [`Subscription`] by the slot, so tearing the popup down releases all
//! of them together.

/// Handle to a registered listener. Dropping it runs the teardown once.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn dispose(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

/// A popup element that can take itself out of the document.
pub trait PopupNode {
    fn remove(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupId(u64);

struct OpenPopup<N> {
    id: PopupId,
    node: N,
    subscriptions: Vec<Subscription>,
}

pub struct PopupSlot<N: PopupNode> {
    current: Option<OpenPopup<N>>,
    next_id: u64,
}

impl<N: PopupNode> Default for PopupSlot<N> {
    fn default() -> Self {
        Self {
            current: None,
            next_id: 0,
        }
    }
}

impl<N: PopupNode> PopupSlot<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of an already inserted popup node. Any popup shown
    /// before is removed and its subscriptions dropped first.
    pub fn show(&mut self, node: N) -> PopupId {
        if let Some(previous) = self.current.take() {
            previous.node.remove();
            drop(previous.subscriptions);
        }
        let id = PopupId(self.next_id);
        self.next_id += 1;
        self.current = Some(OpenPopup {
            id,
            node,
            subscriptions: Vec::new(),
        });
        id
    }

    /// Ties a listener to popup `id`. If that popup is already gone the
    /// subscription is released right away and `false` is returned.
    pub fn attach(&mut self, id: PopupId, subscription: Subscription) -> bool {
        match self.current.as_mut() {
            Some(open) if open.id == id => {
                open.subscriptions.push(subscription);
                true
            }
            _ => false,
        }
    }

    /// Removes popup `id` from the document and hands back its
    /// subscriptions. Listeners dismissing their own popup must not drop
    /// these while still running. Returns `None` if `id` is not the live
    /// popup, which makes repeated dismissal harmless.
    pub fn dismiss(&mut self, id: PopupId) -> Option<Vec<Subscription>> {
        if !self.is_current(id) {
            return None;
        }
        let open = self.current.take()?;
        open.node.remove();
        Some(open.subscriptions)
    }

    /// Dismisses whichever popup is live.
    pub fn close(&mut self) -> Option<Vec<Subscription>> {
        let id = self.current.as_ref()?.id;
        self.dismiss(id)
    }

    pub fn is_current(&self, id: PopupId) -> bool {
        self.current.as_ref().map(|open| open.id) == Some(id)
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.current
            .as_ref()
            .map(|open| open.subscriptions.len())
            .unwrap_or(0)
    }
}

/// Document clicks close the popup unless they land inside it or on the
/// element that opened it.
pub fn dismisses_on_click(inside_popup: bool, on_trigger: bool) -> bool {
    !inside_popup && !on_trigger
}

pub fn dismisses_on_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Stand-in document: the ids of popup nodes currently inserted.
    #[derive(Clone, Default)]
    struct FakeDocument {
        nodes: Rc<RefCell<Vec<u32>>>,
        listeners: Rc<Cell<usize>>,
    }

    impl FakeDocument {
        fn insert(&self, id: u32) -> FakeNode {
            self.nodes.borrow_mut().push(id);
            FakeNode {
                id,
                doc: self.clone(),
            }
        }

        fn listen(&self) -> Subscription {
            self.listeners.set(self.listeners.get() + 1);
            let listeners = self.listeners.clone();
            Subscription::new(move || listeners.set(listeners.get() - 1))
        }

        fn popups(&self) -> usize {
            self.nodes.borrow().len()
        }
    }

    struct FakeNode {
        id: u32,
        doc: FakeDocument,
    }

    impl PopupNode for FakeNode {
        fn remove(&self) {
            let mut nodes = self.doc.nodes.borrow_mut();
            let before = nodes.len();
            nodes.retain(|n| *n != self.id);
            assert_eq!(before, nodes.len() + 1, "node {} removed twice", self.id);
        }
    }

    fn open_with_listeners(slot: &mut PopupSlot<FakeNode>, doc: &FakeDocument, node: u32) -> PopupId {
        let id = slot.show(doc.insert(node));
        for _ in 0..3 {
            assert!(slot.attach(id, doc.listen()));
        }
        id
    }

    #[test]
    fn second_open_replaces_first() {
        let doc = FakeDocument::default();
        let mut slot = PopupSlot::new();
        let first = open_with_listeners(&mut slot, &doc, 1);
        assert_eq!(doc.popups(), 1);
        let second = open_with_listeners(&mut slot, &doc, 2);
        assert_eq!(doc.popups(), 1);
        assert_eq!(*doc.nodes.borrow(), vec![2]);
        assert_eq!(doc.listeners.get(), 3);
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    #[test]
    fn dismissal_releases_every_listener() {
        let doc = FakeDocument::default();
        let mut slot = PopupSlot::new();
        let id = open_with_listeners(&mut slot, &doc, 1);
        assert_eq!(slot.listener_count(), 3);

        let released = slot.dismiss(id).expect("popup was open");
        assert_eq!(doc.popups(), 0);
        assert_eq!(doc.listeners.get(), 3);
        drop(released);
        assert_eq!(doc.listeners.get(), 0);
        assert!(!slot.is_open());
    }

    #[test]
    fn later_dismissal_is_a_no_op() {
        let doc = FakeDocument::default();
        let mut slot = PopupSlot::new();
        let id = open_with_listeners(&mut slot, &doc, 1);
        drop(slot.dismiss(id));
        // An outside click after Escape must not remove the node again.
        assert!(slot.dismiss(id).is_none());
        assert_eq!(doc.popups(), 0);
    }

    #[test]
    fn stale_dismissal_leaves_new_popup_alone() {
        let doc = FakeDocument::default();
        let mut slot = PopupSlot::new();
        let old = open_with_listeners(&mut slot, &doc, 1);
        let new = open_with_listeners(&mut slot, &doc, 2);
        assert!(slot.dismiss(old).is_none());
        assert_eq!(*doc.nodes.borrow(), vec![2]);
        assert!(slot.is_current(new));
    }

    #[test]
    fn attaching_to_closed_popup_releases_immediately() {
        let doc = FakeDocument::default();
        let mut slot = PopupSlot::new();
        let id = open_with_listeners(&mut slot, &doc, 1);
        drop(slot.dismiss(id));
        assert!(!slot.attach(id, doc.listen()));
        assert_eq!(doc.listeners.get(), 0);
    }

    #[test]
    fn close_dismisses_live_popup() {
        let doc = FakeDocument::default();
        let mut slot = PopupSlot::new();
        open_with_listeners(&mut slot, &doc, 1);
        drop(slot.close());
        assert_eq!(doc.popups(), 0);
        assert_eq!(doc.listeners.get(), 0);
        assert!(slot.close().is_none());
    }

    #[test]
    fn subscription_teardown_runs_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || c.set(c.get() + 1));
        sub.dispose();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn click_and_key_decisions() {
        assert!(dismisses_on_click(false, false));
        assert!(!dismisses_on_click(true, false));
        assert!(!dismisses_on_click(false, true));
        assert!(dismisses_on_key("Escape"));
        assert!(dismisses_on_key("Esc"));
        assert!(!dismisses_on_key("Enter"));
    }
}
