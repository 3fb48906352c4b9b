//! Tag-bearing elements: attribute management, child management, rendering.

use std::any::Any;
use std::cell::{Ref, RefCell};
use std::fmt::Write;
use std::rc::Rc;

use crate::attribute::{AttrValue, Attribute};
use crate::node::Node;
use crate::render;
use crate::{Error, Result};

#[derive(Debug)]
pub(crate) struct ElementData {
    pub(crate) tag_name: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) children: Vec<Node>,
}

/// A tag-bearing node owning an ordered attribute collection and an ordered
/// child sequence.
///
/// `Element` is a cheap-to-clone handle: clones share the same underlying
/// element, so chained mutation calls and stored references observe the same
/// state. An element with an empty tag name is a *fragment*: it emits no
/// open/close tag, only its children's output.
///
/// Handles are single-threaded. A finished tree may be rendered repeatedly
/// (rendering never mutates), but construction and rendering must not be
/// interleaved from different call sites holding the same handle.
///
/// ```rust
/// use tagforge_core::Element;
///
/// let list = Element::new("ul")
///     .with(Element::new("li").with_text("one"))
///     .with(Element::new("li").with_text("two"));
/// assert_eq!(list.render().unwrap(), "<ul><li>one</li><li>two</li></ul>");
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    inner: Rc<RefCell<ElementData>>,
}

impl Element {
    /// Create an element with the given tag name
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementData {
                tag_name: tag_name.into(),
                attributes: Vec::new(),
                children: Vec::new(),
            })),
        }
    }

    /// Create a fragment: an element without a tag name, rendering only
    /// its children
    pub fn fragment() -> Self {
        Self::new("")
    }

    /// The tag name, or `None` for fragments
    pub fn tag_name(&self) -> Option<String> {
        let data = self.inner.borrow();
        if data.tag_name.is_empty() {
            None
        } else {
            Some(data.tag_name.clone())
        }
    }

    /// Whether this element emits open/close tags at all
    pub fn has_tag_name(&self) -> bool {
        !self.inner.borrow().tag_name.is_empty()
    }

    pub(crate) fn data(&self) -> Ref<'_, ElementData> {
        self.inner.borrow()
    }

    // ---- attributes -------------------------------------------------------

    /// The attribute-set primitive.
    ///
    /// An absent value appends a valueless attribute unconditionally
    /// (valueless attributes are never deduplicated against each other).
    /// A present value overwrites the first same-named attribute in place,
    /// keeping its position, or appends a new attribute at the end.
    pub(crate) fn set_attribute(&self, name: &str, value: Option<&str>) {
        let mut data = self.inner.borrow_mut();
        match value {
            None => data.attributes.push(Attribute::valueless(name)),
            Some(value) => {
                if let Some(existing) = data.attributes.iter_mut().find(|a| a.name() == name) {
                    existing.set_value(value.to_string());
                } else {
                    data.attributes.push(Attribute::new(name, value));
                }
            }
        }
    }

    /// Set an attribute and return the element for chaining.
    ///
    /// Passing `None::<&str>` attaches a valueless attribute; see
    /// [`AttrValue`] for the accepted argument shapes.
    pub fn attr(&self, name: &str, value: impl Into<AttrValue>) -> Element {
        self.set_attribute(name, value.into().0.as_deref());
        self.clone()
    }

    /// Attach a valueless (boolean) attribute
    pub fn bool_attr(&self, name: &str) -> Element {
        self.set_attribute(name, None);
        self.clone()
    }

    /// Set an attribute only when the condition holds
    pub fn attr_if(&self, condition: bool, name: &str, value: impl Into<AttrValue>) -> Element {
        if condition {
            self.attr(name, value)
        } else {
            self.clone()
        }
    }

    /// Replace any same-named attributes with the given attribute object.
    ///
    /// Unlike [`Element::attr`], this is a full object replacement: every
    /// existing attribute with the same name is removed and the new one is
    /// appended at the end.
    pub fn replace_attr(&self, attribute: Attribute) -> Element {
        let mut data = self.inner.borrow_mut();
        data.attributes.retain(|a| a.name() != attribute.name());
        data.attributes.push(attribute);
        drop(data);
        self.clone()
    }

    /// Whether an attribute with this name exists *and* holds a value.
    ///
    /// A valueless attribute of the same name reports `false`: the first
    /// same-named attribute is consulted and only a present value counts.
    /// This asymmetry is a compatibility contract, not an oversight.
    pub fn has_attr(&self, name: &str) -> bool {
        self.inner
            .borrow()
            .attributes
            .iter()
            .find(|a| a.name() == name)
            .map_or(false, Attribute::is_set)
    }

    /// The value of the first attribute with this name, if it has one
    pub fn attr_value(&self, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .attributes
            .iter()
            .find(|a| a.name() == name)
            .and_then(|a| a.value().map(str::to_string))
    }

    /// Snapshot of the attribute collection, in insertion order
    pub fn attributes(&self) -> Vec<Attribute> {
        self.inner.borrow().attributes.clone()
    }

    // ---- children ---------------------------------------------------------

    /// Append a child node.
    ///
    /// [`Node::Empty`] children (the result of a failed condition) are
    /// dropped silently. Appending an element to itself, or to anything
    /// inside its own subtree, fails with [`Error::SelfAppend`] and leaves
    /// the children unchanged.
    pub fn append(&self, child: impl Into<Node>) -> Result<()> {
        match child.into() {
            Node::Empty => Ok(()),
            Node::Element(child) if child.contains(self) => Err(Error::SelfAppend),
            child => {
                self.inner.borrow_mut().children.push(child);
                Ok(())
            }
        }
    }

    /// Append a child and return the element for chaining.
    ///
    /// # Panics
    ///
    /// Panics on self-append. Use [`Element::append`] to handle that case
    /// without panicking.
    pub fn with(&self, child: impl Into<Node>) -> Element {
        match self.append(child) {
            Ok(()) => self.clone(),
            Err(err) => panic!("{err}"),
        }
    }

    /// Append every node of an iterator
    ///
    /// # Panics
    ///
    /// Panics on self-append, like [`Element::with`].
    pub fn with_all<I>(&self, children: I) -> Element
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        for child in children {
            self.with(child);
        }
        self.clone()
    }

    /// Append an escaped text leaf
    pub fn with_text(&self, text: impl Into<String>) -> Element {
        self.with(Node::Text(text.into()))
    }

    /// Apply further mutations only when the condition holds:
    ///
    /// ```rust
    /// use tagforge_core::Element;
    ///
    /// let logged_in = false;
    /// let nav = Element::new("nav")
    ///     .when(logged_in, |n| {
    ///         n.with_text("log out");
    ///     });
    /// assert_eq!(nav.render().unwrap(), "<nav></nav>");
    /// ```
    pub fn when(&self, condition: bool, f: impl FnOnce(&Element)) -> Element {
        if condition {
            f(self);
        }
        self.clone()
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// Snapshot of the child sequence (element children share state with
    /// the originals; they are handles, not copies)
    pub fn children(&self) -> Vec<Node> {
        self.inner.borrow().children.clone()
    }

    /// Whether `target` is this element or a descendant of it
    fn contains(&self, target: &Element) -> bool {
        if Rc::ptr_eq(&self.inner, &target.inner) {
            return true;
        }
        self.inner
            .borrow()
            .children
            .iter()
            .any(|child| matches!(child, Node::Element(el) if el.contains(target)))
    }

    // ---- rendering --------------------------------------------------------

    /// Compact rendering: a single self-contained string with no inserted
    /// whitespace beyond what the nodes themselves contain
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_to(&mut out)?;
        Ok(out)
    }

    /// Compact rendering into a caller-supplied sink
    pub fn render_to(&self, out: &mut dyn Write) -> Result<()> {
        render::render_element(self, out, None)
    }

    /// Compact rendering with an opaque model value threaded to every
    /// dynamic leaf and attribute hook.
    ///
    /// For a tree whose nodes ignore the model, the output is identical to
    /// [`Element::render`]: both run the same traversal.
    pub fn render_model(&self, model: &dyn Any) -> Result<String> {
        let mut out = String::new();
        self.render_model_to(&mut out, model)?;
        Ok(out)
    }

    /// Model-threaded rendering into a caller-supplied sink
    pub fn render_model_to(&self, out: &mut dyn Write, model: &dyn Any) -> Result<()> {
        render::render_element(self, out, Some(model))
    }

    /// Formatted rendering: one tag per line, children indented one level
    /// deeper than their parent, using the process-wide indenter.
    ///
    /// Content inside the self-formatting tags `textarea` and `pre` is kept
    /// byte-for-byte, with no indentation added.
    pub fn render_formatted(&self) -> Result<String> {
        render::render_formatted(self, 0)
    }
}

/// Two elements are equal when they render to the same markup
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self.render(), other.render()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_end_to_end() {
        let el = Element::new("div").attr("class", "x").with(Node::text("hi"));
        assert_eq!(el.render().unwrap(), "<div class=\"x\">hi</div>");
    }

    #[test]
    fn test_render_is_deterministic() {
        let el = Element::new("div")
            .attr("id", "a")
            .bool_attr("hidden")
            .with(Element::new("span").with_text("x"));
        assert_eq!(el.render().unwrap(), el.render().unwrap());
    }

    #[test]
    fn test_fragment_renders_children_only() {
        let frag = Element::fragment().with(Node::text("a")).with(Node::text("b"));
        assert_eq!(frag.render().unwrap(), "ab");
    }

    #[test]
    fn test_attr_overwrite_preserves_position() {
        let el = Element::new("div").attr("a", "1").attr("b", "2").attr("a", "3");
        let attrs = el.attributes();
        assert_eq!(attrs.len(), 2);
        assert_eq!((attrs[0].name(), attrs[0].value()), ("a", Some("3")));
        assert_eq!((attrs[1].name(), attrs[1].value()), ("b", Some("2")));
    }

    #[test]
    fn test_valueless_attributes_accumulate() {
        let el = Element::new("input").bool_attr("checked").bool_attr("checked");
        assert_eq!(el.attributes().len(), 2);
        assert_eq!(el.render().unwrap(), "<input checked checked></input>");
    }

    #[test]
    fn test_has_attr_ignores_valueless() {
        let el = Element::new("input").bool_attr("checked");
        assert!(!el.has_attr("checked"));
        el.attr("value", "on");
        assert!(el.has_attr("value"));
        assert!(!el.has_attr("missing"));
    }

    #[test]
    fn test_replace_attr_moves_to_end() {
        let el = Element::new("div").attr("a", "1").attr("b", "2");
        el.replace_attr(Attribute::new("a", "9"));
        let attrs = el.attributes();
        assert_eq!((attrs[0].name(), attrs[0].value()), ("b", Some("2")));
        assert_eq!((attrs[1].name(), attrs[1].value()), ("a", Some("9")));
    }

    #[test]
    fn test_attr_value() {
        let el = Element::new("a").attr("href", "/home");
        assert_eq!(el.attr_value("href"), Some("/home".to_string()));
        assert_eq!(el.attr_value("title"), None);
    }

    #[test]
    fn test_self_append_is_rejected() {
        let el = Element::new("div").with_text("x");
        assert!(matches!(el.append(el.clone()), Err(Error::SelfAppend)));
        assert_eq!(el.child_count(), 1);
    }

    #[test]
    fn test_ancestor_append_is_rejected() {
        let parent = Element::new("div");
        let child = Element::new("span");
        parent.append(&child).unwrap();
        assert!(matches!(child.append(&parent), Err(Error::SelfAppend)));
        assert_eq!(child.child_count(), 0);
    }

    #[test]
    #[should_panic(expected = "cannot append an element to itself")]
    fn test_with_panics_on_self_append() {
        let el = Element::new("div");
        el.with(&el);
    }

    #[test]
    fn test_empty_child_is_dropped() {
        let el = Element::new("div");
        el.append(None::<Node>).unwrap();
        assert_eq!(el.child_count(), 0);
        assert_eq!(el.render().unwrap(), "<div></div>");
    }

    #[test]
    fn test_with_all() {
        let el = Element::new("ul").with_all(["a", "b"].map(|s| Element::new("li").with_text(s)));
        assert_eq!(el.render().unwrap(), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_handles_share_state() {
        let el = Element::new("div");
        let alias = el.clone();
        alias.attr("id", "shared");
        assert_eq!(el.render().unwrap(), "<div id=\"shared\"></div>");
    }

    #[test]
    fn test_equality_by_rendered_output() {
        let a = Element::new("p").with_text("x");
        let b = Element::new("p").with_text("x");
        assert_eq!(a, b);
        b.attr("id", "b");
        assert_ne!(a, b);
    }
}
