//! # tagforge
//!
//! Build HTML documents programmatically: construct a tree of typed nodes
//! and render it to markup, either compact or indented.
//!
//! No validation is performed; the renderer emits whatever tag and
//! attribute names it is given, syntactically well-formed but semantically
//! unchecked.
//!
//! ## Example
//!
//! ```rust
//! use tagforge::{div, span, Attrs};
//!
//! let card = div()
//!     .with_class("card")
//!     .with(span().with_text("Hello"));
//!
//! assert_eq!(card.render().unwrap(), "<div class=\"card\"><span>Hello</span></div>");
//! ```
//!
//! ## Formatted output
//!
//! ```rust
//! use tagforge::{div, span};
//!
//! let page = div().with(span());
//! assert_eq!(page.render_formatted().unwrap(), "<div>\n  <span></span>\n</div>\n");
//! ```
//!
//! ## Conditional composition
//!
//! [`iff`] yields a droppable empty node when the condition fails, so
//! "maybe nothing" content composes without branching at the call site:
//!
//! ```rust
//! use tagforge::{div, iff, text};
//!
//! let admin = false;
//! let menu = div().with(text("home")).with(iff(admin, text("settings")));
//! assert_eq!(menu.render().unwrap(), "<div>home</div>");
//! ```

mod attrs;
mod tags;

pub use attrs::Attrs;
pub use tags::*;

pub use tagforge_core::{
    config, escape, AttrValue, Attribute, Element, Error, FixedIndenter, Indenter, Node,
    Renderable, Result,
};
