use std::fmt;

use serde::{Serialize, Serializer};

/// Separator used when a [`TokenPath`] is flattened into a single key.
pub const SLUG_SEPARATOR: char = '-';

/// Scale step (`500`) or named key (`"start"`) of a color entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKey {
    Step(u16),
    Name(&'static str),
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(step) => write!(f, "{step}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl Serialize for TokenKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Step(step) => serializer.serialize_u16(*step),
            Self::Name(name) => serializer.serialize_str(name),
        }
    }
}

/// Hierarchical semantic token name held as its segments (`TP`, `text`, `primary`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPath(&'static [&'static str]);

impl TokenPath {
    pub const fn new(segments: &'static [&'static str]) -> Self {
        Self(segments)
    }

    pub const fn segments(&self) -> &'static [&'static str] {
        self.0
    }

    pub fn leaf(&self) -> &'static str {
        self.0.last().copied().unwrap_or_default()
    }

    /// Dotted display form, e.g. `TP.text.primary`.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }

    /// Flat, delimiter-safe key, e.g. `TP-text-primary`.
    ///
    /// Injective as long as every segment satisfies [`is_valid_segment`].
    pub fn slug(&self) -> String {
        join_slug(self.0.iter().copied())
    }

    /// CSS custom property name, e.g. `TP.text.linkHover` becomes `--tp-text-link-hover`.
    ///
    /// Kebab-casing folds case, so distinct paths can share a name;
    /// [`validate`](super::validate) reports those collisions.
    pub fn css_var(&self) -> String {
        let segments: Vec<_> = self.0.iter().copied().map(kebab).collect();
        format!("--{}", segments.join("-"))
    }

    pub fn joined(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    pub fn invalid_segments(&self) -> Vec<&'static str> {
        self.0
            .iter()
            .copied()
            .filter(|segment| !is_valid_segment(segment))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.invalid_segments().is_empty()
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

impl Serialize for TokenPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.dotted())
    }
}

/// Flat key for a dotted name such as a component token (`cta.primary.text`).
///
/// Same mapping as [`TokenPath::slug`]; injective while every segment is valid.
pub fn dotted_slug(dotted: &str) -> String {
    join_slug(dotted.split('.'))
}

/// Segments of a dotted name that break the segment grammar.
pub fn invalid_dotted_segments(dotted: &str) -> Vec<&str> {
    dotted
        .split('.')
        .filter(|segment| !is_valid_segment(segment))
        .collect()
}

fn join_slug<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    let mut slug = String::new();
    for (index, segment) in segments.enumerate() {
        if index > 0 {
            slug.push(SLUG_SEPARATOR);
        }
        slug.push_str(segment);
    }
    slug
}

fn kebab(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut previous_lower = false;
    for ch in segment.chars() {
        if ch.is_ascii_uppercase() {
            if previous_lower {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
        previous_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
    }
    out
}

/// Segments are ASCII alphanumerics or `_`; neither `.` nor the slug separator may appear.
pub fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Reference to a primitive color by `<group-slug>-<token>`, e.g. `tp-slate-700`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PrimitiveRef(&'static str);

impl PrimitiveRef {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Splits into `(group slug, token)` at the last separator.
    pub fn split(&self) -> Option<(&'static str, &'static str)> {
        let (group, token) = self.0.rsplit_once(SLUG_SEPARATOR)?;
        if group.is_empty() || token.is_empty() {
            return None;
        }
        Some((group, token))
    }
}

impl fmt::Display for PrimitiveRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_path_renders_dotted_and_slug_forms() {
        let path = TokenPath::new(&["TP", "text", "primary"]);
        assert_eq!(path.dotted(), "TP.text.primary");
        assert_eq!(path.slug(), "TP-text-primary");
        assert_eq!(path.joined("/"), "TP/text/primary");
        assert_eq!(path.leaf(), "primary");
        assert!(path.is_valid());
    }

    #[test]
    fn token_path_rejects_separator_inside_segment() {
        let ambiguous = TokenPath::new(&["TP", "text-primary"]);
        assert!(!ambiguous.is_valid());
        assert_eq!(ambiguous.invalid_segments(), vec!["text-primary"]);

        let dotted = TokenPath::new(&["TP", "text.primary"]);
        assert!(!dotted.is_valid());
        assert!(!TokenPath::new(&[]).is_valid());
    }

    #[test]
    fn css_var_kebab_cases_each_segment() {
        assert_eq!(
            TokenPath::new(&["TP", "text", "linkHover"]).css_var(),
            "--tp-text-link-hover"
        );
        assert_eq!(
            TokenPath::new(&["TP", "bg", "brandSubtle"]).css_var(),
            "--tp-bg-brand-subtle"
        );
        assert_eq!(
            TokenPath::new(&["TP", "text", "link_hover"]).css_var(),
            TokenPath::new(&["TP", "text", "linkHover"]).css_var()
        );
    }

    #[test]
    fn dotted_slug_matches_token_path_slug() {
        assert_eq!(dotted_slug("cta.primary.background"), "cta-primary-background");
        assert_eq!(
            dotted_slug("TP.text.primary"),
            TokenPath::new(&["TP", "text", "primary"]).slug()
        );
        assert_eq!(invalid_dotted_segments("input.border-focus"), vec!["border-focus"]);
        assert!(invalid_dotted_segments("input.borderFocus").is_empty());
    }

    #[test]
    fn token_key_display_matches_serialized_form() {
        assert_eq!(TokenKey::Step(500).to_string(), "500");
        assert_eq!(TokenKey::Name("start").to_string(), "start");
        assert_eq!(serde_json::to_value(TokenKey::Step(50)).unwrap(), 50);
        assert_eq!(serde_json::to_value(TokenKey::Name("end")).unwrap(), "end");
    }

    #[test]
    fn primitive_ref_splits_on_last_separator() {
        assert_eq!(
            PrimitiveRef::new("tp-slate-700").split(),
            Some(("tp-slate", "700"))
        );
        assert_eq!(
            PrimitiveRef::new("tp-gradient-start").split(),
            Some(("tp-gradient", "start"))
        );
        assert_eq!(PrimitiveRef::new("slate").split(), None);
        assert_eq!(PrimitiveRef::new("tp-").split(), None);
    }
}
