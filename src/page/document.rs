// SPDX-License-Identifier: MPL-2.0
//! Retained in-memory page.

use super::{Event, EventKind, Listener, NodeId, Page};
use std::collections::HashMap;
use std::fmt;

struct Registered {
    kind: EventKind,
    callback: Listener,
}

struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    markup: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: Vec<Registered>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            markup: String::new(),
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("tag", &self.tag)
            .field("id", &self.id)
            .field("classes", &self.classes)
            .field("text", &self.text)
            .field("children", &self.children)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// An element tree rooted at a `body` element.
#[derive(Debug)]
pub struct Document {
    nodes: HashMap<NodeId, Node>,
    body: NodeId,
    next_raw: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a page holding only its `body`.
    #[must_use]
    pub fn new() -> Self {
        let body = NodeId::from_raw(0);
        let mut nodes = HashMap::new();
        nodes.insert(body, Node::new("body"));
        Self {
            nodes,
            body,
            next_raw: 1,
        }
    }

    /// Number of live elements, attached or not, including `body`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of listeners attached to `node`.
    #[must_use]
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.nodes.get(&node).map_or(0, |n| n.listeners.len())
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get_mut(&node).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.retain(|&child| child != node);
        }
    }

    fn drop_subtree(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(removed) = self.nodes.remove(&id) {
                stack.extend(removed.children);
            }
        }
    }

    fn find_by_id(&self, root: NodeId, id: &str) -> Option<NodeId> {
        let node = self.nodes.get(&root)?;
        if node.id.as_deref() == Some(id) {
            return Some(root);
        }
        node.children
            .iter()
            .find_map(|&child| self.find_by_id(child, id))
    }
}

impl Page for Document {
    fn body(&self) -> NodeId {
        self.body
    }

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_id(self.body, id)
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId::from_raw(self.next_raw);
        self.next_raw += 1;
        self.nodes.insert(id, Node::new(tag));
        id
    }

    fn tag(&self, node: NodeId) -> &str {
        self.nodes.get(&node).map_or("", |n| n.tag.as_str())
    }

    fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.id = Some(id.to_string());
        }
    }

    fn element_id(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).and_then(|n| n.id.as_deref())
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn classes(&self, node: NodeId) -> &[String] {
        self.nodes
            .get(&node)
            .map(|n| n.classes.as_slice())
            .unwrap_or_default()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.text = text.to_string();
        }
    }

    fn text(&self, node: NodeId) -> &str {
        self.nodes.get(&node).map_or("", |n| n.text.as_str())
    }

    fn set_markup(&mut self, node: NodeId, markup: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.markup = markup.to_string();
        }
    }

    fn markup(&self, node: NodeId) -> &str {
        self.nodes.get(&node).map_or("", |n| n.markup.as_str())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(&parent)
            || !self.nodes.contains_key(&child)
            || child == self.body
            || self.is_ancestor(child, parent)
        {
            return;
        }
        self.detach(child);
        if let Some(c) = self.nodes.get_mut(&child) {
            c.parent = Some(parent);
        }
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(child);
        }
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node) && self.is_ancestor(self.body, node)
    }

    fn remove(&mut self, node: NodeId) {
        if node == self.body {
            return;
        }
        self.detach(node);
        self.drop_subtree(node);
    }

    fn add_event_listener(&mut self, node: NodeId, kind: EventKind, listener: Listener) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.listeners.push(Registered {
                kind,
                callback: listener,
            });
        }
    }

    fn dispatch_event(&mut self, target: NodeId, kind: EventKind) -> bool {
        if !self.nodes.contains_key(&target) {
            return false;
        }
        let mut event = Event::new(kind, target);
        let mut handled = false;
        let mut current = Some(target);
        while let Some(id) = current {
            event.set_current_target(id);
            if let Some(node) = self.nodes.get_mut(&id) {
                for registered in node.listeners.iter_mut().filter(|r| r.kind == kind) {
                    (registered.callback)(&mut event);
                    handled = true;
                }
            }
            if event.is_propagation_stopped() {
                break;
            }
            current = self.parent(id);
        }
        handled
    }
}
