//! Defines the narrow read-only contract template extraction needs from a
//! markup tree.
use std::fmt::Debug;

/// A read-only element in a template document.
///
/// Extraction code is written exclusively against this trait so it can run on
/// any markup backend (roxmltree, a synthetic tree in tests, ...).
///
/// `'a` is the lifetime of the underlying document.
pub trait MarkupNode<'a>: Debug + Clone + Copy + PartialEq + Eq {
    /// The local tag name (e.g. `path`), without namespace prefix.
    fn tag_name(&self) -> &'a str;

    /// The value of the attribute with the given local name.
    fn attribute(&self, name: &str) -> Option<&'a str>;

    /// Concatenation of all descendant text, in document order.
    fn text(&self) -> String;

    /// An iterator over the element children of this node, in document order.
    /// Text, comments and processing instructions are not included.
    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The `id` attribute.
    fn id(&self) -> Option<&'a str> {
        self.attribute("id")
    }

    /// The whitespace-separated entries of the `class` attribute.
    fn class_names(&self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self.attribute("class") {
            Some(classes) => Box::new(classes.split_whitespace()),
            None => Box::new(std::iter::empty()),
        }
    }
}

/// Pre-order traversal of `node` and all of its element descendants.
pub fn descendants<'a, N: MarkupNode<'a> + 'a>(node: N) -> impl Iterator<Item = N> + 'a {
    let mut stack = vec![node];
    std::iter::from_fn(move || {
        let next = stack.pop()?;
        let mut children: Vec<N> = next.children().collect();
        children.reverse();
        stack.extend(children);
        Some(next)
    })
}

/// Returns the first element in document order whose `id` equals `id`.
pub fn find_by_id<'a, N: MarkupNode<'a> + 'a>(root: N, id: &str) -> Option<N> {
    descendants(root).find(|n| n.id() == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTree;

    #[test]
    fn test_find_by_id_returns_first_in_document_order() {
        let mut tree = MockTree::new("svg");
        let root = tree.root_id();
        let g = tree.add_element(root, "g", &[("id", "outer")]);
        let first = tree.add_element(g, "text", &[("id", "dup")]);
        tree.set_text(first, "first");
        let second = tree.add_element(root, "text", &[("id", "dup")]);
        tree.set_text(second, "second");

        let found = find_by_id(tree.root(), "dup").unwrap();
        assert_eq!(found.text(), "first");
        assert!(find_by_id(tree.root(), "missing").is_none());
    }

    #[test]
    fn test_descendants_is_preorder() {
        let mut tree = MockTree::new("svg");
        let root = tree.root_id();
        let a = tree.add_element(root, "a", &[]);
        tree.add_element(a, "b", &[]);
        tree.add_element(root, "c", &[]);

        let names: Vec<&str> = descendants(tree.root()).map(|n| n.tag_name()).collect();
        assert_eq!(names, vec!["svg", "a", "b", "c"]);
    }

    #[test]
    fn test_class_names_split_on_whitespace() {
        let mut tree = MockTree::new("svg");
        let root = tree.root_id();
        let p = tree.add_element(root, "path", &[("class", "monochrome-0  hierarchical-0:secondary")]);

        let classes: Vec<&str> = tree.node(p).class_names().collect();
        assert_eq!(classes, vec!["monochrome-0", "hierarchical-0:secondary"]);
        assert_eq!(tree.root().class_names().count(), 0);
    }
}
