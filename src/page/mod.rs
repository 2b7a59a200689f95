// SPDX-License-Identifier: MPL-2.0
//! DOM-like page model consumed by the notification manager.
//!
//! The manager only talks to the [`Page`] trait: element creation,
//! attachment and detachment, identifier lookup, class and text mutation,
//! markup injection for icons, and click subscription. [`Document`] is the
//! retained in-memory implementation shipped with the crate; the iced
//! renderer in [`crate::ui`] draws from it.
//!
//! # Events
//!
//! Events bubble from their target up to the root. A listener stops the
//! bubbling with [`Event::stop_propagation`].

mod document;

pub use document::Document;

use std::fmt;

/// Handle to an element of a [`Page`]. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Kinds of events a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

/// An event travelling from its target towards the root.
#[derive(Debug, Clone)]
pub struct Event {
    kind: EventKind,
    target: NodeId,
    current_target: NodeId,
    propagation_stopped: bool,
}

impl Event {
    #[must_use]
    pub fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            propagation_stopped: false,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The element the event was dispatched on.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The element whose listeners are currently running.
    #[must_use]
    pub fn current_target(&self) -> NodeId {
        self.current_target
    }

    /// Keeps the event from reaching ancestors of the current element.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    #[must_use]
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub(crate) fn set_current_target(&mut self, node: NodeId) {
        self.current_target = node;
    }
}

/// Callback attached to an element.
pub type Listener = Box<dyn FnMut(&mut Event)>;

/// The page operations the notification manager relies on.
///
/// Operations on unknown handles are ignored and queries on them return
/// empty values, so a stale handle never panics.
pub trait Page {
    /// Root element of the page.
    fn body(&self) -> NodeId;

    /// Finds an element attached to the page by its identifier.
    fn get_element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    fn tag(&self, node: NodeId) -> &str;

    fn set_id(&mut self, node: NodeId, id: &str);

    fn element_id(&self, node: NodeId) -> Option<&str>;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn classes(&self, node: NodeId) -> &[String];

    fn set_text(&mut self, node: NodeId, text: &str);

    fn text(&self, node: NodeId) -> &str;

    /// Injects raw markup, e.g. an icon-font glyph.
    fn set_markup(&mut self, node: NodeId, markup: &str);

    fn markup(&self, node: NodeId) -> &str;

    /// Appends `child` to `parent`, moving it if it already has a parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    fn children(&self, node: NodeId) -> &[NodeId];

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Returns whether `node` exists and is attached to the page.
    fn contains(&self, node: NodeId) -> bool;

    /// Detaches `node` and drops it together with its subtree and listeners.
    fn remove(&mut self, node: NodeId);

    fn add_event_listener(&mut self, node: NodeId, kind: EventKind, listener: Listener);

    /// Dispatches an event on `target` and bubbles it up.
    ///
    /// Returns `true` if at least one listener ran.
    fn dispatch_event(&mut self, target: NodeId, kind: EventKind) -> bool;

    /// Depth-first search for the first element under `root` (inclusive)
    /// carrying `class`.
    fn find_by_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        if self.has_class(root, class) {
            return Some(root);
        }
        self.children(root)
            .iter()
            .find_map(|&child| self.find_by_class(child, class))
    }
}
