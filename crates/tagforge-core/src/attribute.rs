//! Attribute name/value pairs attached to elements.

use std::any::Any;
use std::fmt::{self, Write};

use crate::Result;

/// A single attribute: a name with an optional value.
///
/// A valued attribute renders as ` name="value"`, a valueless one as
/// ` name` (the leading space lets attributes concatenate directly after
/// the tag name). Within one element, valued attributes are unique by name;
/// valueless attributes may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: Option<String>,
}

impl Attribute {
    /// Create a valued attribute
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a valueless attribute (e.g. a boolean HTML attribute)
    pub fn valueless(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether this attribute currently holds a value
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = Some(value);
    }

    /// Render this attribute into the sink.
    ///
    /// The model value is forwarded to keep the call shape shared with
    /// dynamic attribute implementations; this implementation ignores it.
    pub fn render_to(&self, out: &mut dyn Write, _model: Option<&dyn Any>) -> Result<()> {
        out.write_char(' ')?;
        out.write_str(&self.name)?;
        if let Some(value) = &self.value {
            write!(out, "=\"{}\"", value)?;
        }
        Ok(())
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}=\"{}\"", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// Argument type for attribute setters.
///
/// A `&str` or `String` sets a value; `None` attaches a valueless attribute:
///
/// ```rust
/// use tagforge_core::Element;
///
/// let input = Element::new("input")
///     .attr("type", "checkbox")
///     .attr("checked", None::<&str>);
/// assert_eq!(input.render().unwrap(), "<input type=\"checkbox\" checked></input>");
/// ```
pub struct AttrValue(pub(crate) Option<String>);

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue(Some(value.to_string()))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue(Some(value))
    }
}

impl From<Option<&str>> for AttrValue {
    fn from(value: Option<&str>) -> Self {
        AttrValue(value.map(str::to_string))
    }
}

impl From<Option<String>> for AttrValue {
    fn from(value: Option<String>) -> Self {
        AttrValue(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_valued() {
        let mut out = String::new();
        Attribute::new("class", "card").render_to(&mut out, None).unwrap();
        assert_eq!(out, " class=\"card\"");
    }

    #[test]
    fn test_render_valueless() {
        let mut out = String::new();
        Attribute::valueless("checked").render_to(&mut out, None).unwrap();
        assert_eq!(out, " checked");
    }

    #[test]
    fn test_display() {
        assert_eq!(Attribute::new("id", "x").to_string(), "id=\"x\"");
        assert_eq!(Attribute::valueless("hidden").to_string(), "hidden");
    }

    #[test]
    fn test_is_set() {
        assert!(Attribute::new("id", "x").is_set());
        assert!(!Attribute::valueless("hidden").is_set());
    }
}
