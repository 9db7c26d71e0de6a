use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Index of a node inside a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// The slice of a DOM the widget reads and writes.
///
/// Lookups are scoped to a subtree so partial-page swaps only touch the
/// replaced fragment.
pub trait PageDom {
    /// Root of the whole document.
    fn document(&self) -> NodeId;

    /// First element inside `scope` (inclusive) whose `id` is `id`.
    fn find_by_id(&self, scope: NodeId, id: &str) -> Option<NodeId>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Whether the node is still reachable from the document root.
    fn is_attached(&self, node: NodeId) -> bool;

    fn text_content(&self, node: NodeId) -> Option<String>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Drops every child of `node` and inserts `children` in order.
    fn replace_children(&mut self, node: NodeId, children: Vec<ElementSpec>) -> Vec<NodeId>;
}

/// Element to be inserted into a page, possibly with nested children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub text: String,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attribute("id", id)
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone)]
struct MemoryNode {
    tag: String,
    attributes: IndexMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed in-memory page for headless hosting and tests.
///
/// Removed nodes stay in the arena but lose their parent link.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    nodes: Vec<MemoryNode>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![MemoryNode {
                tag: "body".to_owned(),
                attributes: IndexMap::new(),
                text: String::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Appends `spec` (and its subtree) as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let ElementSpec {
            tag,
            attributes,
            text,
            children,
        } = spec;
        let id = NodeId(self.nodes.len());
        self.nodes.push(MemoryNode {
            tag,
            attributes,
            text,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(id);
        }
        for child in children {
            self.append_child(id, child);
        }
        id
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl PageDom for MemoryPage {
    fn document(&self) -> NodeId {
        NodeId(0)
    }

    fn find_by_id(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        let mut stack = vec![scope];
        while let Some(current) = stack.pop() {
            let node = self.nodes.get(current.0)?;
            if node.attributes.get("id").map(String::as_str) == Some(id) {
                return Some(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(node.0)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let root = self.document();
        let mut current = node;
        loop {
            if current == root {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn text_content(&self, node: NodeId) -> Option<String> {
        self.nodes.get(node.0).map(|node| node.text.clone())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes.get(node.0)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(node.0) {
            node.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn replace_children(&mut self, node: NodeId, children: Vec<ElementSpec>) -> Vec<NodeId> {
        let Some(parent) = self.nodes.get_mut(node.0) else {
            return Vec::new();
        };
        let removed = std::mem::take(&mut parent.children);
        for child in removed {
            if let Some(child) = self.nodes.get_mut(child.0) {
                child.parent = None;
            }
        }
        children
            .into_iter()
            .map(|spec| self.append_child(node, spec))
            .collect()
    }
}
