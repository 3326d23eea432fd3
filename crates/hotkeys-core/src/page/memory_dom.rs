//! In-memory element tree.

use super::dom::Dom;
use crate::error::{HotkeyError, HotkeyResult};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Handle to a node in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Snapshot of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNode {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub classes: Vec<String>,
    pub styles: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<NodeId>,
}

impl MemoryNode {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

/// Element tree with a `<body>` root.
///
/// Clones share the same tree.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Rc<RefCell<Vec<MemoryNode>>>,
}

const BODY: NodeId = NodeId(0);

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            nodes: Rc::new(RefCell::new(vec![MemoryNode::new("body")])),
        }
    }

    /// Snapshot of a node.
    ///
    /// # Panics
    /// If `id` was not created by this tree.
    pub fn node(&self, id: NodeId) -> MemoryNode {
        self.nodes.borrow()[id.0].clone()
    }

    fn update<T>(&self, id: NodeId, f: impl FnOnce(&mut MemoryNode) -> T) -> HotkeyResult<T> {
        let mut nodes = self.nodes.borrow_mut();
        let node = nodes
            .get_mut(id.0)
            .ok_or_else(|| HotkeyError::Dom(format!("Unknown node {:?}", id)))?;
        Ok(f(node))
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for MemoryDom {
    type Element = NodeId;

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    /// Only nodes attached under the body are found.
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let mut stack = vec![BODY];
        while let Some(current) = stack.pop() {
            let node = &nodes[current.0];
            if node.attribute("id") == Some(id) {
                return Some(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn create_element(&self, tag: &str) -> HotkeyResult<NodeId> {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(MemoryNode::new(tag));
        Ok(NodeId(nodes.len() - 1))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> HotkeyResult<()> {
        if self.nodes.borrow().get(child.0).is_none() {
            return Err(HotkeyError::Dom(format!("Unknown node {:?}", child)));
        }
        let child = *child;
        self.update(*parent, |node| node.children.push(child))
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) -> HotkeyResult<()> {
        self.update(*element, |node| {
            node.attributes.insert(name.to_string(), value.to_string());
        })
    }

    fn remove_attribute(&self, element: &NodeId, name: &str) -> HotkeyResult<()> {
        self.update(*element, |node| {
            node.attributes.remove(name);
        })
    }

    fn add_class(&self, element: &NodeId, class: &str) -> HotkeyResult<()> {
        self.update(*element, |node| {
            if !node.has_class(class) {
                node.classes.push(class.to_string());
            }
        })
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) -> HotkeyResult<()> {
        self.update(*element, |node| {
            node.styles.insert(property.to_string(), value.to_string());
        })
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        let _ = self.update(*element, |node| node.text = text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_nodes_are_not_found() {
        let dom = MemoryDom::new();
        let node = dom.create_element("div").unwrap();
        dom.set_attribute(&node, "id", "x").unwrap();

        assert_eq!(dom.element_by_id("x"), None);

        dom.append_child(&BODY, &node).unwrap();
        assert_eq!(dom.element_by_id("x"), Some(node));
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let dom = MemoryDom::new();
        dom.add_class(&BODY, "show").unwrap();
        dom.add_class(&BODY, "show").unwrap();

        assert_eq!(dom.node(BODY).classes, vec!["show"]);
    }
}
