use egui::{Pos2, Rect, Vec2};
use itertools::Itertools as _;

use super::{DragHost, HostError};
use crate::draggable::StyleProperty;
use crate::draggable::style::parse_px;

/// Handle to an element of a [`MemoryHost`]. Only valid for the host that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    layout_rect: Rect,
    style: ahash::HashMap<StyleProperty, String>,
}

impl Node {
    fn new(parent: Option<NodeId>, layout_rect: Rect) -> Self {
        Self {
            parent,
            children: Vec::new(),
            layout_rect,
            style: Default::default(),
        }
    }
}

/// An in-memory document: a node tree with inline styles and externally supplied layout.
///
/// Layout is not computed. Each element has a "static" layout rect set by the caller; an element
/// whose inline `position` is `fixed` is instead placed at its `left`/`top` (falling back to the
/// static rect per axis), keeping its static size. That is enough to drive a [`crate::Draggable`]
/// headlessly.
#[derive(Clone, Debug)]
pub struct MemoryHost {
    nodes: Vec<Node>,
    root: NodeId,
    viewport: Vec2,
}

impl MemoryHost {
    /// A document whose root spans the whole `viewport`.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            nodes: vec![Node::new(None, Rect::from_min_size(Pos2::ZERO, viewport))],
            root: NodeId(0),
            viewport,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a new element to `parent`.
    pub fn create_element(&mut self, parent: NodeId, layout_rect: Rect) -> NodeId {
        let id = self.create_detached_element(layout_rect);
        self.node_mut(id).parent = Some(parent);
        self.node_mut(parent).children.push(id);
        id
    }

    /// A new element outside the document tree.
    pub fn create_detached_element(&mut self, layout_rect: Rect) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(None, layout_rect));
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn layout_rect(&self, id: NodeId) -> Rect {
        self.node(id).layout_rect
    }

    pub fn set_layout_rect(&mut self, id: NodeId, rect: Rect) {
        self.node_mut(id).layout_rect = rect;
    }

    pub fn set_viewport_size(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// All inline style properties that are set, sorted by property.
    #[allow(clippy::iter_over_hash_type)] // sorted before returning
    pub fn inline_style(&self, id: NodeId) -> Vec<(StyleProperty, String)> {
        self.node(id)
            .style
            .iter()
            .map(|(property, value)| (*property, value.clone()))
            .sorted()
            .collect()
    }

    /// Take the element out of the document tree, keeping its own subtree.
    pub fn remove(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|&child| child != id);
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn style_px(&self, id: NodeId, property: StyleProperty) -> Option<f32> {
        self.node(id)
            .style
            .get(&property)
            .and_then(|value| parse_px(value))
    }
}

impl DragHost for MemoryHost {
    type Element = NodeId;

    fn bounding_rect(&self, element: &NodeId) -> Rect {
        let node = self.node(*element);
        let layout = node.layout_rect;
        if node.style.get(&StyleProperty::Position).map(String::as_str) != Some("fixed") {
            return layout;
        }

        let min = Pos2::new(
            self.style_px(*element, StyleProperty::Left)
                .unwrap_or(layout.min.x),
            self.style_px(*element, StyleProperty::Top)
                .unwrap_or(layout.min.y),
        );
        Rect::from_min_size(min, layout.size())
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn style(&self, element: &NodeId, property: StyleProperty) -> Option<String> {
        self.node(*element).style.get(&property).cloned()
    }

    fn set_style(&mut self, element: &NodeId, property: StyleProperty, value: Option<&str>) {
        let style = &mut self.node_mut(*element).style;
        match value {
            Some(value) => {
                style.insert(property, value.to_owned());
            }
            None => {
                style.remove(&property);
            }
        }
    }

    fn clone_shallow(&mut self, element: &NodeId) -> Result<NodeId, HostError> {
        let source = self.node(*element);
        let clone = Node {
            parent: None,
            children: Vec::new(),
            layout_rect: source.layout_rect,
            style: source.style.clone(),
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(clone);
        Ok(id)
    }

    fn replace_with(&mut self, old: &NodeId, new: &NodeId) -> Result<(), HostError> {
        let parent = self.parent(*old).ok_or(HostError::NoParent)?;
        self.remove(*new);

        let index = self
            .children(parent)
            .iter()
            .position(|child| child == old)
            .ok_or(HostError::NoParent)?;
        self.node_mut(parent).children[index] = *new;
        self.node_mut(*new).parent = Some(parent);
        self.node_mut(*old).parent = None;
        Ok(())
    }

    fn append_to_root(&mut self, element: &NodeId) -> Result<(), HostError> {
        self.remove(*element);
        let root = self.root;
        self.node_mut(root).children.push(*element);
        self.node_mut(*element).parent = Some(root);
        Ok(())
    }

    fn is_connected(&self, element: &NodeId) -> bool {
        let mut current = *element;
        loop {
            if current == self.root {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn is_root_child(&self, element: &NodeId) -> bool {
        self.parent(*element) == Some(self.root)
    }
}
