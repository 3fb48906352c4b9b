//! tagforge-core - HTML node tree and rendering
//!
//! This crate provides the document tree (elements, attributes, text leaves)
//! and the three rendering traversals over it. The convenience surface
//! (tag factories, named attribute setters) lives in the `tagforge` crate.
//!
//! # Architecture
//!
//! ```text
//! Element / Node tree ──compact──────▶ single-line markup
//!                     ──formatted────▶ indented multi-line markup
//!                     ──model-aware──▶ markup with dynamic leaves resolved
//! ```
//!
//! All three traversals are read-only: rendering the same unmutated tree
//! twice yields identical output.
//!
//! # Example
//!
//! ```rust
//! use tagforge_core::{Element, Node};
//!
//! let para = Element::new("p")
//!     .attr("class", "intro")
//!     .with(Node::text("hello"));
//!
//! assert_eq!(para.render().unwrap(), "<p class=\"intro\">hello</p>");
//! ```

mod attribute;
pub mod config;
mod element;
pub mod escape;
mod node;
mod render;

pub use attribute::{AttrValue, Attribute};
pub use config::{FixedIndenter, Indenter};
pub use element::Element;
pub use node::{Node, Renderable};

/// Error type for tree construction and rendering
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot append an element to itself or to its own descendants")]
    SelfAppend,

    #[error("write error: {0}")]
    Write(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
