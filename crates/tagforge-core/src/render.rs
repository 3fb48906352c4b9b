//! Compact, model-threaded, and formatted tree rendering.
//!
//! Compact and model-threaded rendering are one traversal: compact is the
//! `None`-model case. Formatted rendering is a separate recursion over the
//! nesting level that reuses the same open/close-tag primitives.

use std::any::Any;
use std::fmt::Write;

use crate::config;
use crate::element::Element;
use crate::node::Node;
use crate::Result;

/// Tags whose inner whitespace is visible in the browser and must be kept
/// byte-for-byte
const SELF_FORMATTING_TAGS: &[&str] = &["textarea", "pre"];

fn is_self_formatting(tag: &str) -> bool {
    SELF_FORMATTING_TAGS.contains(&tag)
}

pub(crate) fn render_node(node: &Node, out: &mut dyn Write, model: Option<&dyn Any>) -> Result<()> {
    match node {
        Node::Element(el) => render_element(el, out, model),
        Node::Text(text) => {
            out.write_str(&config::escape_text(text))?;
            Ok(())
        }
        Node::Raw(text) => {
            out.write_str(text)?;
            Ok(())
        }
        Node::Dynamic(renderable) => renderable.render_to(out, model),
        Node::Empty => Ok(()),
    }
}

/// Depth-first: open tag, children in insertion order, close tag
pub(crate) fn render_element(
    el: &Element,
    out: &mut dyn Write,
    model: Option<&dyn Any>,
) -> Result<()> {
    render_open_tag(el, out, model)?;
    let data = el.data();
    for child in &data.children {
        render_node(child, out, model)?;
    }
    drop(data);
    render_close_tag(el, out)
}

/// Emit `<tag` plus every attribute in insertion order plus `>`, or nothing
/// for a fragment
fn render_open_tag(el: &Element, out: &mut dyn Write, model: Option<&dyn Any>) -> Result<()> {
    let data = el.data();
    if data.tag_name.is_empty() {
        return Ok(());
    }
    out.write_char('<')?;
    out.write_str(&data.tag_name)?;
    for attribute in &data.attributes {
        attribute.render_to(out, model)?;
    }
    out.write_char('>')?;
    Ok(())
}

/// Emit `</tag>`, or nothing for a fragment
fn render_close_tag(el: &Element, out: &mut dyn Write) -> Result<()> {
    let data = el.data();
    if data.tag_name.is_empty() {
        return Ok(());
    }
    out.write_str("</")?;
    out.write_str(&data.tag_name)?;
    out.write_char('>')?;
    Ok(())
}

/// Formatted (indented) rendering at the given nesting level.
///
/// The level passed down is the absolute depth, so a child fragment already
/// carries its inner indentation when it comes back; the indenter only has
/// to prefix its first line. Tag-bearing children introduce a level,
/// fragments do not. Childless elements keep their open and close tag on
/// one line.
pub(crate) fn render_formatted(el: &Element, lvl: usize) -> Result<String> {
    let mut out = String::new();
    render_open_tag(el, &mut out, None)?;

    let data = el.data();
    let has_tag = !data.tag_name.is_empty();
    let self_formatting = has_tag && is_self_formatting(&data.tag_name);

    if has_tag && !self_formatting && !data.children.is_empty() {
        out.push('\n');
    }
    for child in &data.children {
        let lvl = lvl + 1;
        match child {
            Node::Element(child_el) if child_el.has_tag_name() => {
                out.push_str(&config::indent(lvl, &render_formatted(child_el, lvl)?));
            }
            // A fragment introduces no nesting level of its own
            Node::Element(child_el) => {
                out.push_str(&config::indent(lvl - 1, &render_formatted(child_el, lvl - 1)?));
            }
            Node::Empty => {}
            _ if self_formatting => {
                let mut rendered = String::new();
                render_node(child, &mut rendered, None)?;
                out.push_str(&rendered);
            }
            _ => {
                let mut rendered = String::new();
                render_node(child, &mut rendered, None)?;
                out.push_str(&config::indent(lvl, &rendered));
                out.push('\n');
            }
        }
    }
    if !self_formatting && !data.children.is_empty() {
        out.push_str(&config::indent(lvl, ""));
    }
    drop(data);

    render_close_tag(el, &mut out)?;
    if has_tag {
        out.push('\n');
    }
    Ok(out)
}
