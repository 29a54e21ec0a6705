//! Style attributes accepted by drawing calls.
//!
//! Keys form a closed set. Each element kind maps the keys it understands
//! onto SVG properties and rejects the rest.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::{GaugeError, Result};

use super::fmt_num;

/// A recognized style key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    Color,
    Width,
    Fill,
    Family,
    Size,
    Anchor,
}

impl StyleKey {
    pub fn name(self) -> &'static str {
        match self {
            StyleKey::Color => "color",
            StyleKey::Width => "width",
            StyleKey::Fill => "fill",
            StyleKey::Family => "family",
            StyleKey::Size => "size",
            StyleKey::Anchor => "anchor",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKey {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "color" => Ok(StyleKey::Color),
            "width" => Ok(StyleKey::Width),
            "fill" => Ok(StyleKey::Fill),
            "family" => Ok(StyleKey::Family),
            "size" => Ok(StyleKey::Size),
            "anchor" => Ok(StyleKey::Anchor),
            other => Err(GaugeError::UnsupportedStyle {
                keys: vec![other.to_string()],
            }),
        }
    }
}

/// Mapping from style keys to values, ordered by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    entries: BTreeMap<StyleKey, String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style from named pairs, reporting every unknown name at once.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut style = Style::new();
        let mut unknown = Vec::new();
        for (key, value) in pairs {
            match key.as_ref().parse::<StyleKey>() {
                Ok(key) => style = style.with(key, value),
                Err(_) => unknown.push(key.as_ref().to_string()),
            }
        }
        if !unknown.is_empty() {
            return Err(GaugeError::UnsupportedStyle { keys: unknown });
        }
        Ok(style)
    }

    pub fn with(mut self, key: StyleKey, value: impl Into<String>) -> Self {
        self.entries.insert(key, value.into());
        self
    }

    pub fn color(self, color: impl Into<String>) -> Self {
        self.with(StyleKey::Color, color)
    }

    pub fn width(self, width: f64) -> Self {
        self.with(StyleKey::Width, fmt_num(width))
    }

    pub fn fill(self, fill: impl Into<String>) -> Self {
        self.with(StyleKey::Fill, fill)
    }

    pub fn family(self, family: impl Into<String>) -> Self {
        self.with(StyleKey::Family, family)
    }

    pub fn size(self, size: f64) -> Self {
        self.with(StyleKey::Size, fmt_num(size))
    }

    pub fn anchor(self, anchor: impl Into<String>) -> Self {
        self.with(StyleKey::Anchor, anchor)
    }

    pub fn get(&self, key: StyleKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map onto SVG properties for an element kind, failing on keys the
    /// kind does not understand.
    pub(crate) fn to_css(&self, kind: ElementKind) -> Result<String> {
        let unsupported: Vec<String> = self
            .entries
            .keys()
            .filter(|key| kind.property(**key).is_none())
            .map(|key| key.to_string())
            .collect();
        if !unsupported.is_empty() {
            return Err(GaugeError::UnsupportedStyle { keys: unsupported });
        }

        let mut css = String::new();
        for (key, value) in &self.entries {
            if let Some(property) = kind.property(*key) {
                css.push_str(property);
                css.push(':');
                css.push_str(value);
                css.push(';');
            }
        }
        Ok(css)
    }
}

/// Drawable element kinds, as far as styling is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    Line,
    Path,
    Text,
}

impl ElementKind {
    fn property(self, key: StyleKey) -> Option<&'static str> {
        match (self, key) {
            (ElementKind::Line | ElementKind::Path, StyleKey::Color) => Some("stroke"),
            (ElementKind::Line | ElementKind::Path, StyleKey::Width) => Some("stroke-width"),
            (ElementKind::Path, StyleKey::Fill) => Some("fill"),
            (ElementKind::Text, StyleKey::Color) => Some("fill"),
            (ElementKind::Text, StyleKey::Family) => Some("font-family"),
            (ElementKind::Text, StyleKey::Size) => Some("font-size"),
            (ElementKind::Text, StyleKey::Anchor) => Some("text-anchor"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        let style = Style::from_pairs([("color", "black"), ("width", "24")]).unwrap();
        assert_eq!(style.get(StyleKey::Color), Some("black"));
        assert_eq!(style.get(StyleKey::Width), Some("24"));
    }

    #[test]
    fn unknown_keys_are_named() {
        let err = Style::from_pairs([("opacity", "0.5"), ("color", "red"), ("dash", "4")])
            .unwrap_err();
        match err {
            GaugeError::UnsupportedStyle { keys } => assert_eq!(keys, ["opacity", "dash"]),
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            "opacity".parse::<StyleKey>(),
            Err(GaugeError::UnsupportedStyle { .. })
        ));
    }

    #[test]
    fn error_message_lists_keys() {
        let err = Style::from_pairs([("opacity", "1"), ("blur", "2")]).unwrap_err();
        assert_eq!(err.to_string(), "unsupported style attributes: 'opacity', 'blur'");
    }

    #[test]
    fn maps_per_element_kind() {
        let stroke = Style::new().color("black").width(24.0).fill("none");
        assert_eq!(
            stroke.to_css(ElementKind::Path).unwrap(),
            "stroke:black;stroke-width:24;fill:none;"
        );

        let text = Style::new().color("black").family("Helvetica").size(90.0).anchor("middle");
        assert_eq!(
            text.to_css(ElementKind::Text).unwrap(),
            "fill:black;font-family:Helvetica;font-size:90;text-anchor:middle;"
        );
    }

    #[test]
    fn rejects_keys_foreign_to_the_element() {
        let style = Style::new().color("black").size(12.0).family("Courier");
        match style.to_css(ElementKind::Line).unwrap_err() {
            GaugeError::UnsupportedStyle { keys } => assert_eq!(keys, ["family", "size"]),
            other => panic!("unexpected error: {other}"),
        }
    }
}
