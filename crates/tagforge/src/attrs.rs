//! Named attribute setters for [`Element`].
//!
//! The catalog is data-driven: a name table expands into one trait method
//! per attribute, each a one-line call into [`Element::attr`]. Conditional
//! twins are intentionally absent; combine [`Element::when`],
//! [`Element::attr_if`] or [`crate::iff`] instead.

use tagforge_core::Element;

macro_rules! attrs_trait {
    (
        valued { $(($vmethod:ident, $vname:literal),)* }
        boolean { $(($bmethod:ident, $bname:literal),)* }
    ) => {
        /// Extension trait mapping semantic attribute names onto the
        /// generic setter.
        pub trait Attrs: Sized {
            $(
                #[doc = concat!("Set the `", $vname, "` attribute.")]
                fn $vmethod(self, value: &str) -> Self;
            )*
            $(
                #[doc = concat!("Attach the boolean `", $bname, "` attribute.")]
                fn $bmethod(self) -> Self;
            )*

            /// Set a `data-*` attribute
            fn with_data(self, key: &str, value: &str) -> Self;

            /// Set the `class` attribute from a list of class names
            fn with_classes(self, classes: &[&str]) -> Self;
        }

        impl Attrs for Element {
            $(
                fn $vmethod(self, value: &str) -> Self {
                    self.attr($vname, value)
                }
            )*
            $(
                fn $bmethod(self) -> Self {
                    self.bool_attr($bname)
                }
            )*

            fn with_data(self, key: &str, value: &str) -> Self {
                self.attr(&format!("data-{key}"), value)
            }

            fn with_classes(self, classes: &[&str]) -> Self {
                self.attr("class", classes.join(" ").trim())
            }
        }
    };
}

attrs_trait! {
    valued {
        (with_action, "action"),
        (with_alt, "alt"),
        (with_charset, "charset"),
        (with_class, "class"),
        (with_content, "content"),
        (with_dir, "dir"),
        (with_href, "href"),
        (with_id, "id"),
        (with_lang, "lang"),
        (with_method, "method"),
        (with_name, "name"),
        (with_placeholder, "placeholder"),
        (with_rel, "rel"),
        (with_role, "role"),
        (with_src, "src"),
        (with_style, "style"),
        (with_target, "target"),
        (with_title, "title"),
        (with_type, "type"),
        (with_value, "value"),
    }
    boolean {
        (is_auto_complete, "autocomplete"),
        (is_auto_focus, "autofocus"),
        (is_hidden, "hidden"),
        (is_required, "required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{div, input};

    #[test]
    fn test_valued_setter() {
        let el = div().with_id("top").with_class("wide");
        assert_eq!(el.render().unwrap(), "<div id=\"top\" class=\"wide\"></div>");
    }

    #[test]
    fn test_boolean_setter() {
        let el = input().with_type("text").is_required();
        assert_eq!(el.render().unwrap(), "<input type=\"text\" required></input>");
    }

    #[test]
    fn test_with_data() {
        let el = div().with_data("row", "4");
        assert_eq!(el.render().unwrap(), "<div data-row=\"4\"></div>");
    }

    #[test]
    fn test_with_classes_joins_names() {
        let el = div().with_classes(&["card", "wide"]);
        assert_eq!(el.render().unwrap(), "<div class=\"card wide\"></div>");
    }

    #[test]
    fn test_setters_share_overwrite_semantics() {
        let el = div().with_class("a").with_class("b");
        assert_eq!(el.render().unwrap(), "<div class=\"b\"></div>");
    }

    #[test]
    fn test_attr_if() {
        let el = div().attr_if(true, "id", "x").attr_if(false, "class", "y");
        assert_eq!(el.render().unwrap(), "<div id=\"x\"></div>");
    }
}
