//! Renderable content units of the document tree.

use std::any::Any;
use std::fmt::{self, Write};
use std::rc::Rc;

use crate::element::Element;
use crate::render;
use crate::Result;

/// A dynamically rendered leaf.
///
/// Implementations receive the opaque model value threaded through
/// [`Element::render_model`] and may resolve their content from it. The
/// core never inspects the model; it only forwards it.
pub trait Renderable {
    fn render_to(&self, out: &mut dyn Write, model: Option<&dyn Any>) -> Result<()>;
}

/// Any content unit that can appear in the document tree.
#[derive(Clone)]
pub enum Node {
    /// A tag-bearing container (or a fragment, when the tag name is empty)
    Element(Element),

    /// Literal text, passed through the configured escaper at render time
    Text(String),

    /// Literal text emitted verbatim, bypassing the escaper
    Raw(String),

    /// A model-aware leaf resolved at render time
    Dynamic(Rc<dyn Renderable>),

    /// Nothing. Produced by conditional helpers; silently dropped on append.
    Empty,
}

impl Node {
    /// Escaped text leaf
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Verbatim text leaf
    pub fn raw(content: impl Into<String>) -> Self {
        Node::Raw(content.into())
    }

    /// Model-aware leaf
    pub fn dynamic(renderable: impl Renderable + 'static) -> Self {
        Node::Dynamic(Rc::new(renderable))
    }

    /// Render this node compactly into a string
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_to(&mut out, None)?;
        Ok(out)
    }

    /// Render this node into the sink, threading the model value (if any)
    /// to every descendant
    pub fn render_to(&self, out: &mut dyn Write, model: Option<&dyn Any>) -> Result<()> {
        render::render_node(self, out, model)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => f.debug_tuple("Element").field(el).finish(),
            Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Node::Raw(text) => f.debug_tuple("Raw").field(text).finish(),
            Node::Dynamic(_) => f.write_str("Dynamic(..)"),
            Node::Empty => f.write_str("Empty"),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&Element> for Node {
    fn from(element: &Element) -> Self {
        Node::Element(element.clone())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(node: Option<T>) -> Self {
        match node {
            Some(node) => node.into(),
            None => Node::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let node = Node::text("a < b & c");
        assert_eq!(node.render().unwrap(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_raw_is_verbatim() {
        let node = Node::raw("<br>");
        assert_eq!(node.render().unwrap(), "<br>");
    }

    #[test]
    fn test_none_becomes_empty() {
        let node: Node = None::<Node>.into();
        assert!(matches!(node, Node::Empty));
        assert_eq!(node.render().unwrap(), "");
    }

    #[test]
    fn test_dynamic_without_model() {
        struct Stamp;
        impl Renderable for Stamp {
            fn render_to(&self, out: &mut dyn Write, _model: Option<&dyn Any>) -> Result<()> {
                out.write_str("stamp")?;
                Ok(())
            }
        }

        assert_eq!(Node::dynamic(Stamp).render().unwrap(), "stamp");
    }
}
