//! Immutable source-of-truth token data for the Tatva Practice design system.
//!
//! Everything here is `'static`: the registry is built at compile time and
//! never mutated, so every compiler can share it freely.

mod components;
mod functional;
mod path;
mod primitives;
pub mod query;
mod scales;
mod semantic;
mod typography;
pub mod validate;

use serde::Serialize;

pub use path::{
    dotted_slug, invalid_dotted_segments, is_valid_segment, PrimitiveRef, TokenKey, TokenPath,
    SLUG_SEPARATOR,
};
pub use validate::{validate, RegistryDefect, ValidationError, ValidationResult};

pub const SYSTEM_NAME: &str = "Tatva Practice";
pub const SYSTEM_SLUG: &str = "tatva-practice";
pub const SYSTEM_VERSION: &str = "2.2.0";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    pub token: TokenKey,
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<&'static str>,
}

/// One brand or neutral scale, e.g. "TP Blue".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorGroup {
    /// Stable export key (`primary`).
    pub key: &'static str,
    /// Primitive reference prefix (`tp-blue`).
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: &'static [ColorEntry],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalSubgroup {
    pub key: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub colors: &'static [ColorEntry],
}

/// Family of related status scales (success, warning, error, info).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalGroup {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub subgroups: &'static [FunctionalSubgroup],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColorGroupKind {
    Flat(ColorGroup),
    Functional(FunctionalGroup),
}

impl ColorGroupKind {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Flat(group) => group.key,
            Self::Functional(group) => group.key,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Flat(group) => group.name,
            Self::Functional(group) => group.name,
        }
    }

    pub fn color_count(&self) -> usize {
        match self {
            Self::Flat(group) => group.colors.len(),
            Self::Functional(group) => group.subgroups.iter().map(|sub| sub.colors.len()).sum(),
        }
    }

    /// Flat view over every scale in this group.
    pub fn scales(&self) -> Vec<ColorScale> {
        match self {
            Self::Flat(group) => vec![ColorScale {
                key: group.key,
                slug: group.slug,
                name: group.name,
                description: group.description,
                family: None,
                colors: group.colors,
            }],
            Self::Functional(group) => group
                .subgroups
                .iter()
                .map(|sub| ColorScale {
                    key: sub.key,
                    slug: sub.slug,
                    name: sub.name,
                    description: group.description,
                    family: Some(group.name),
                    colors: sub.colors,
                })
                .collect(),
        }
    }
}

/// A single addressable color ramp: a flat group or one functional subgroup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub key: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub family: Option<&'static str>,
    pub colors: &'static [ColorEntry],
}

impl ColorScale {
    pub fn reference(&self, entry: &ColorEntry) -> String {
        format!("{}{}{}", self.slug, SLUG_SEPARATOR, entry.token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticToken {
    pub token: TokenPath,
    pub usage: &'static str,
    pub source: PrimitiveRef,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokenGroup {
    pub name: &'static str,
    pub tokens: &'static [SemanticToken],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTokenCategory {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub groups: &'static [SemanticTokenGroup],
}

impl SemanticTokenCategory {
    pub fn token_count(&self) -> usize {
        self.groups.iter().map(|group| group.tokens.len()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    pub token: &'static str,
    pub font_family: &'static str,
    pub font_size: f64,
    pub font_weight: u16,
    pub line_height: f64,
    pub letter_spacing: &'static str,
    pub usage: &'static str,
}

impl TypographyToken {
    pub fn font_size_css(&self) -> String {
        px(self.font_size)
    }

    pub fn line_height_css(&self) -> String {
        px(self.line_height)
    }
}

/// Pixel-valued scale entry shared by spacing, radius, sizing and border width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionToken {
    pub token: &'static str,
    pub px: f64,
    pub usage: &'static str,
}

impl DimensionToken {
    pub fn css(&self) -> String {
        px(self.px)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpacityToken {
    pub token: &'static str,
    pub value: f64,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowLayer {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: &'static str,
    pub alpha: f64,
}

impl ShadowLayer {
    pub fn css(&self) -> String {
        format!(
            "{} {} {} {} {}",
            px(self.x),
            px(self.y),
            px(self.blur),
            px(self.spread),
            crate::color::rgba_css(self.color, self.alpha)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowToken {
    pub token: &'static str,
    pub layers: &'static [ShadowLayer],
    pub usage: &'static str,
}

impl ShadowToken {
    pub fn css(&self) -> String {
        if self.layers.is_empty() {
            return "none".to_string();
        }
        self.layers
            .iter()
            .map(ShadowLayer::css)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub color: &'static str,
    pub position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientToken {
    pub token: &'static str,
    pub angle: u16,
    pub stops: &'static [GradientStop],
    pub usage: &'static str,
}

impl GradientToken {
    pub fn css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|stop| format!("{} {}%", stop.color, format_number(stop.position)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("linear-gradient({}deg, {stops})", self.angle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridToken {
    pub token: &'static str,
    pub columns: u8,
    pub gutter: f64,
    pub margin: f64,
    pub min_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_content_width: Option<f64>,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSizeToken {
    pub token: &'static str,
    pub height: f64,
    pub padding_x: f64,
    pub font_size: f64,
    pub icon_size: f64,
    pub gap: f64,
    pub radius: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaVariantToken {
    pub token: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub hover_background: &'static str,
    pub pressed_background: &'static str,
    pub disabled_opacity: &'static str,
    pub usage: &'static str,
}

/// Component-scoped alias consumed by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentToken {
    pub token: &'static str,
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_var: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTokenGroup {
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tokens: &'static [ComponentToken],
}

#[derive(Debug)]
pub struct Registry {
    pub color_groups: &'static [ColorGroupKind],
    pub semantic: &'static [SemanticTokenCategory],
    pub typography: &'static [TypographyToken],
    pub spacing: &'static [DimensionToken],
    pub radius: &'static [DimensionToken],
    pub sizing: &'static [DimensionToken],
    pub opacity: &'static [OpacityToken],
    pub border_width: &'static [DimensionToken],
    pub shadows: &'static [ShadowToken],
    pub gradients: &'static [GradientToken],
    pub grid: &'static [GridToken],
    pub cta_sizes: &'static [CtaSizeToken],
    pub cta_variants: &'static [CtaVariantToken],
    pub components: &'static [ComponentTokenGroup],
}

static REGISTRY: Registry = Registry {
    color_groups: &[
        ColorGroupKind::Flat(primitives::TP_BLUE),
        ColorGroupKind::Flat(primitives::TP_VIOLET),
        ColorGroupKind::Flat(primitives::TP_SLATE),
        ColorGroupKind::Flat(primitives::TP_BASE),
        ColorGroupKind::Flat(primitives::TP_GRADIENT),
        ColorGroupKind::Functional(functional::FUNCTIONAL),
    ],
    semantic: semantic::SEMANTIC_CATEGORIES,
    typography: typography::TYPOGRAPHY,
    spacing: scales::SPACING,
    radius: scales::RADIUS,
    sizing: scales::SIZING,
    opacity: scales::OPACITY,
    border_width: scales::BORDER_WIDTH,
    shadows: scales::SHADOWS,
    gradients: scales::GRADIENTS,
    grid: scales::GRID,
    cta_sizes: scales::CTA_SIZES,
    cta_variants: scales::CTA_VARIANTS,
    components: components::COMPONENT_TOKENS,
};

/// The process-wide token registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    pub fn group(&self, key: &str) -> Option<&ColorGroupKind> {
        self.color_groups.iter().find(|group| group.key() == key)
    }

    pub fn color_scales(&self) -> Vec<ColorScale> {
        self.color_groups
            .iter()
            .flat_map(ColorGroupKind::scales)
            .collect()
    }

    pub fn scale(&self, key: &str) -> Option<ColorScale> {
        self.color_scales().into_iter().find(|scale| scale.key == key)
    }

    pub fn resolve_primitive(&self, reference: PrimitiveRef) -> Option<&'static ColorEntry> {
        let (slug, token) = reference.split()?;
        self.color_scales()
            .into_iter()
            .find(|scale| scale.slug == slug)?
            .colors
            .iter()
            .find(|entry| entry.token.to_string() == token)
    }

    /// Every semantic token with its category and group, in declaration order.
    pub fn semantic_tokens(
        &self,
    ) -> impl Iterator<Item = (&'static SemanticTokenCategory, &'static SemanticTokenGroup, &'static SemanticToken)>
    {
        self.semantic.iter().flat_map(|category| {
            category.groups.iter().flat_map(move |group| {
                group
                    .tokens
                    .iter()
                    .map(move |token| (category, group, token))
            })
        })
    }

    pub fn shadow(&self, token: &str) -> Option<&'static ShadowToken> {
        self.shadows.iter().find(|shadow| shadow.token == token)
    }

    pub fn typography_token(&self, token: &str) -> Option<&'static TypographyToken> {
        self.typography.iter().find(|entry| entry.token == token)
    }
}

/// Renders a pixel value without a trailing `.0`.
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Parses `"16px"` / `"16"` into a pixel number.
pub fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    number.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tp_blue_is_addressable_by_stable_key() {
        let group = registry().group("primary").expect("primary group");
        assert_eq!(group.name(), "TP Blue");
        assert_eq!(group.color_count(), 10);
    }

    #[test]
    fn functional_group_flattens_into_one_scale_per_subgroup() {
        let group = registry().group("functional").expect("functional group");
        let scales = group.scales();
        let keys: Vec<_> = scales.iter().map(|scale| scale.key).collect();
        assert_eq!(keys, vec!["success", "warning", "error", "info"]);
        assert!(scales.iter().all(|scale| scale.family == Some("Functional")));
        assert_eq!(
            group.color_count(),
            scales.iter().map(|scale| scale.colors.len()).sum::<usize>()
        );
    }

    #[test]
    fn resolve_primitive_finds_flat_and_functional_entries() {
        let registry = registry();
        let slate = registry
            .resolve_primitive(PrimitiveRef::new("tp-slate-700"))
            .expect("slate 700");
        assert_eq!(slate.value, "#334155");

        let error = registry
            .resolve_primitive(PrimitiveRef::new("tp-error-600"))
            .expect("error 600");
        assert_eq!(error.value, "#D92D20");

        let start = registry
            .resolve_primitive(PrimitiveRef::new("tp-gradient-start"))
            .expect("gradient start");
        assert_eq!(start.token, TokenKey::Name("start"));

        assert!(registry
            .resolve_primitive(PrimitiveRef::new("tp-slate-950"))
            .is_none());
        assert!(registry
            .resolve_primitive(PrimitiveRef::new("tp-teal-500"))
            .is_none());
    }

    #[test]
    fn css_renderers_drop_trailing_zero_fractions() {
        assert_eq!(px(16.0), "16px");
        assert_eq!(px(0.5), "0.5px");
        assert_eq!(parse_px("24px"), Some(24.0));
        assert_eq!(parse_px(" 9999 "), Some(9999.0));
        assert_eq!(parse_px("auto"), None);
    }

    #[test]
    fn gradient_and_shadow_render_css() {
        let brand = registry()
            .gradients
            .iter()
            .find(|gradient| gradient.token == "brand")
            .expect("brand gradient");
        assert_eq!(
            brand.css(),
            "linear-gradient(135deg, #4B4AD5 0%, #8A4FE0 100%)"
        );

        let none = registry().shadow("none").expect("none shadow");
        assert_eq!(none.css(), "none");
        let sm = registry().shadow("sm").expect("sm shadow");
        assert!(sm.css().starts_with("0px 1px 2px 0px rgba(15, 23, 42, 0.06)"));
    }
}
