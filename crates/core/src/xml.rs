//! An implementation of the `MarkupNode` trait for the `roxmltree` crate.

use crate::error::ReadError;
use sfsym_markup::MarkupNode;

/// A parsed template document.
///
/// Holds the `roxmltree` tree and hands out element handles borrowing it.
pub struct XmlDocument<'a> {
    doc: roxmltree::Document<'a>,
}

impl<'a> XmlDocument<'a> {
    /// Parses template markup. Document type declarations are accepted since
    /// exported templates usually carry one.
    pub fn parse(text: &'a str) -> Result<Self, ReadError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)?;
        Ok(XmlDocument { doc })
    }

    /// The document element (`<svg>` for templates).
    pub fn root_element(&'a self) -> XmlNode<'a> {
        XmlNode(self.doc.root_element())
    }
}

/// An element of an [`XmlDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlNode<'a>(roxmltree::Node<'a, 'a>);

impl<'a> MarkupNode<'a> for XmlNode<'a> {
    fn tag_name(&self) -> &'a str {
        self.0.tag_name().name()
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        self.0.attribute(name)
    }

    fn text(&self) -> String {
        self.0
            .descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect()
    }

    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        Box::new(self.0.children().filter(|c| c.is_element()).map(XmlNode))
    }
}
