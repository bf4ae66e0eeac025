//! A synthetic in-memory markup tree.
//!
//! Test utilities, publicly available so downstream crates can exercise
//! extraction logic without going through a real markup parser.

use crate::node::MarkupNode;

#[derive(Debug, Clone)]
struct MockNodeData {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<usize>,
}

/// An arena of elements. Node `0` is the root element.
#[derive(Debug, Clone)]
pub struct MockTree {
    nodes: Vec<MockNodeData>,
}

/// A node handle that borrows its tree so it can navigate to its children.
#[derive(Debug, Clone, Copy)]
pub struct MockNode<'a> {
    pub id: usize,
    pub tree: &'a MockTree,
}

impl<'a> PartialEq for MockNode<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}
impl<'a> Eq for MockNode<'a> {}

impl MockTree {
    pub fn new(root_tag: &str) -> Self {
        Self {
            nodes: vec![MockNodeData {
                tag: root_tag.to_string(),
                attributes: Vec::new(),
                text: String::new(),
                children: Vec::new(),
            }],
        }
    }

    pub fn root_id(&self) -> usize {
        0
    }

    pub fn root(&self) -> MockNode<'_> {
        self.node(0)
    }

    pub fn node(&self, id: usize) -> MockNode<'_> {
        MockNode { id, tree: self }
    }

    /// Appends a new element under `parent` and returns its id.
    pub fn add_element(&mut self, parent: usize, tag: &str, attributes: &[(&str, &str)]) -> usize {
        let id = self.nodes.len();
        self.nodes.push(MockNodeData {
            tag: tag.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            text: String::new(),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Sets the text directly owned by `node`. It precedes any child text.
    pub fn set_text(&mut self, node: usize, text: &str) {
        self.nodes[node].text = text.to_string();
    }
}

impl<'a> MarkupNode<'a> for MockNode<'a> {
    fn tag_name(&self) -> &'a str {
        &self.tree.nodes[self.id].tag
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        let tree = self.tree;
        tree.nodes[self.id]
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn text(&self) -> String {
        let data = &self.tree.nodes[self.id];
        let mut s = data.text.clone();
        for child in self.children() {
            s.push_str(&child.text());
        }
        s
    }

    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        let tree = self.tree; // Re-borrow to help the lifetime checker
        Box::new(
            tree.nodes[self.id]
                .children
                .iter()
                .map(move |&id| MockNode { id, tree }),
        )
    }
}
