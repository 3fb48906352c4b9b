//! Tag factory functions and composition helpers.
//!
//! One zero-argument factory per standard HTML5 element, generated from a
//! name table; [`tag`] covers arbitrary tag names.

use tagforge_core::{Element, Node};

macro_rules! tag_factories {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Create a `<", stringify!($name), ">` element.")]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    };
}

tag_factories! {
    a, abbr, address, area, article, aside, audio,
    b, base, bdi, bdo, blockquote, body, br, button,
    canvas, caption, cite, code, col, colgroup,
    datalist, dd, del, details, dfn, dialog, div, dl, dt,
    em, embed,
    fieldset, figcaption, figure, footer, form,
    h1, h2, h3, h4, h5, h6, head, header, hr, html,
    i, iframe, img, input, ins,
    kbd,
    label, legend, li, link,
    main, map, mark, menu, meta, meter,
    nav, noscript,
    object, ol, optgroup, option, output,
    p, param, picture, pre, progress,
    q,
    rp, rt, ruby,
    s, samp, script, section, select, small, source, span, strong, style,
    sub, summary, sup,
    table, tbody, td, textarea, tfoot, th, thead, time, title, tr, track,
    u, ul,
    var, video,
    wbr,
}

/// Create an element with an arbitrary tag name
pub fn tag(name: &str) -> Element {
    Element::new(name)
}

/// Group nodes without a wrapping tag
pub fn fragment() -> Element {
    Element::fragment()
}

/// Escaped text leaf
pub fn text(content: impl Into<String>) -> Node {
    Node::text(content)
}

/// Verbatim text leaf, bypassing the escaper
pub fn raw(content: impl Into<String>) -> Node {
    Node::raw(content)
}

/// A fragment over a collection of nodes
pub fn each<I>(items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    fragment().with_all(items)
}

/// The node if the condition holds, nothing otherwise.
///
/// The "nothing" case is dropped silently on append, so conditional content
/// needs no branching at the call site.
pub fn iff(condition: bool, node: impl Into<Node>) -> Node {
    if condition {
        node.into()
    } else {
        Node::Empty
    }
}
