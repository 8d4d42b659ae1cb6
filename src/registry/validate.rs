//! Registry integrity checks run before exports.

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

use super::{invalid_dotted_segments, Registry, TokenPath};
use crate::color::parse_hex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryDefect {
    DuplicateToken { scope: String, token: String },
    DuplicateGroupKey { key: String },
    DuplicateGroupSlug { slug: String },
    DanglingSource { token: String, source: String },
    ValueMismatch { token: String, source: String, expected: String, actual: String },
    InvalidPath { token: String, segment: String },
    SlugCollision { slug: String, first: String, second: String },
    PathPrefixConflict { prefix: String, path: String },
    CssVarCollision { name: String, first: String, second: String },
    InvalidComponentSegment { token: String, segment: String },
    MalformedHex { scope: String, token: String, value: String },
    DanglingReference { scope: String, token: String, reference: String },
}

impl fmt::Display for RegistryDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateToken { scope, token } => {
                write!(f, "duplicate token `{token}` in {scope}")
            }
            Self::DuplicateGroupKey { key } => write!(f, "duplicate color group key `{key}`"),
            Self::DuplicateGroupSlug { slug } => write!(f, "duplicate color group slug `{slug}`"),
            Self::DanglingSource { token, source } => {
                write!(f, "semantic token `{token}` references missing primitive `{source}`")
            }
            Self::ValueMismatch {
                token,
                source,
                expected,
                actual,
            } => write!(
                f,
                "semantic token `{token}` has value {actual} but `{source}` is {expected}"
            ),
            Self::InvalidPath { token, segment } => {
                write!(f, "semantic token `{token}` has invalid segment `{segment}`")
            }
            Self::SlugCollision {
                slug,
                first,
                second,
            } => write!(f, "`{first}` and `{second}` both flatten to `{slug}`"),
            Self::PathPrefixConflict { prefix, path } => {
                write!(f, "semantic token `{prefix}` is also a group in `{path}`")
            }
            Self::CssVarCollision {
                name,
                first,
                second,
            } => write!(f, "`{first}` and `{second}` both declare custom property `{name}`"),
            Self::InvalidComponentSegment { token, segment } => {
                write!(f, "component token `{token}` has invalid segment `{segment}`")
            }
            Self::MalformedHex {
                scope,
                token,
                value,
            } => write!(f, "malformed hex `{value}` for `{token}` in {scope}"),
            Self::DanglingReference {
                scope,
                token,
                reference,
            } => write!(f, "`{token}` in {scope} points at missing `{reference}`"),
        }
    }
}

#[derive(Debug, Error)]
#[error("token registry has {} defect(s)", .defects.len())]
pub struct ValidationError {
    pub defects: Vec<RegistryDefect>,
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Collects every defect instead of stopping at the first one.
pub fn validate(registry: &Registry) -> ValidationResult<()> {
    let mut defects = Vec::new();

    check_color_groups(registry, &mut defects);
    check_semantic(registry, &mut defects);
    check_scales(registry, &mut defects);
    check_components(registry, &mut defects);
    check_custom_properties(registry, &mut defects);

    if defects.is_empty() {
        tracing::debug!("token registry passed validation");
        Ok(())
    } else {
        for defect in &defects {
            tracing::warn!(%defect, "token registry defect");
        }
        Err(ValidationError { defects })
    }
}

fn check_color_groups(registry: &Registry, defects: &mut Vec<RegistryDefect>) {
    let mut keys = HashSet::new();
    let mut slugs = HashSet::new();
    for group in registry.color_groups {
        if !keys.insert(group.key()) {
            defects.push(RegistryDefect::DuplicateGroupKey {
                key: group.key().to_string(),
            });
        }
    }

    for scale in registry.color_scales() {
        if scale.family.is_some() && !keys.insert(scale.key) {
            defects.push(RegistryDefect::DuplicateGroupKey {
                key: scale.key.to_string(),
            });
        }
        if !slugs.insert(scale.slug) {
            defects.push(RegistryDefect::DuplicateGroupSlug {
                slug: scale.slug.to_string(),
            });
        }
        let scope = format!("color group `{}`", scale.name);
        check_unique(
            &scope,
            scale.colors.iter().map(|entry| entry.token.to_string()),
            defects,
        );
        for entry in scale.colors {
            if parse_hex(entry.value).is_none() {
                defects.push(RegistryDefect::MalformedHex {
                    scope: scope.clone(),
                    token: entry.token.to_string(),
                    value: entry.value.to_string(),
                });
            }
        }
    }
}

fn check_semantic(registry: &Registry, defects: &mut Vec<RegistryDefect>) {
    let mut paths = HashSet::new();
    let mut slugs: Vec<(String, TokenPath)> = Vec::new();

    for (category, _, semantic) in registry.semantic_tokens() {
        let dotted = semantic.token.dotted();
        if !paths.insert(dotted.clone()) {
            defects.push(RegistryDefect::DuplicateToken {
                scope: format!("semantic category `{}`", category.name),
                token: dotted.clone(),
            });
        }

        for segment in semantic.token.invalid_segments() {
            defects.push(RegistryDefect::InvalidPath {
                token: dotted.clone(),
                segment: segment.to_string(),
            });
        }

        let slug = semantic.token.slug();
        if let Some((_, first)) = slugs
            .iter()
            .find(|(existing, path)| *existing == slug && *path != semantic.token)
        {
            defects.push(RegistryDefect::SlugCollision {
                slug: slug.clone(),
                first: first.dotted(),
                second: dotted.clone(),
            });
        }
        slugs.push((slug, semantic.token));

        match registry.resolve_primitive(semantic.source) {
            None => defects.push(RegistryDefect::DanglingSource {
                token: dotted,
                source: semantic.source.to_string(),
            }),
            Some(primitive) if !primitive.value.eq_ignore_ascii_case(semantic.value) => {
                defects.push(RegistryDefect::ValueMismatch {
                    token: dotted,
                    source: semantic.source.to_string(),
                    expected: primitive.value.to_string(),
                    actual: semantic.value.to_string(),
                });
            }
            Some(_) => {}
        }
    }

    for (_, _, semantic) in registry.semantic_tokens() {
        let segments = semantic.token.segments();
        for end in 1..segments.len() {
            let prefix = segments[..end].join(".");
            if paths.contains(&prefix) {
                defects.push(RegistryDefect::PathPrefixConflict {
                    prefix,
                    path: semantic.token.dotted(),
                });
            }
        }
    }
}

fn check_scales(registry: &Registry, defects: &mut Vec<RegistryDefect>) {
    check_unique(
        "typography",
        registry.typography.iter().map(|entry| entry.token.to_string()),
        defects,
    );
    for (scope, scale) in [
        ("spacing", registry.spacing),
        ("radius", registry.radius),
        ("sizing", registry.sizing),
        ("border width", registry.border_width),
    ] {
        check_unique(scope, scale.iter().map(|entry| entry.token.to_string()), defects);
    }
    check_unique(
        "opacity",
        registry.opacity.iter().map(|entry| entry.token.to_string()),
        defects,
    );
    check_unique(
        "shadows",
        registry.shadows.iter().map(|entry| entry.token.to_string()),
        defects,
    );
    check_unique(
        "gradients",
        registry.gradients.iter().map(|entry| entry.token.to_string()),
        defects,
    );
    check_unique(
        "grid",
        registry.grid.iter().map(|entry| entry.token.to_string()),
        defects,
    );
    check_unique(
        "CTA sizes",
        registry.cta_sizes.iter().map(|entry| entry.token.to_string()),
        defects,
    );
    check_unique(
        "CTA variants",
        registry.cta_variants.iter().map(|entry| entry.token.to_string()),
        defects,
    );

    for shadow in registry.shadows {
        for layer in shadow.layers {
            check_hex("shadows", shadow.token, layer.color, defects);
        }
    }
    for gradient in registry.gradients {
        for stop in gradient.stops {
            check_hex("gradients", gradient.token, stop.color, defects);
        }
    }
    for size in registry.cta_sizes {
        if !registry.radius.iter().any(|radius| radius.token == size.radius) {
            defects.push(RegistryDefect::DanglingReference {
                scope: "CTA sizes".to_string(),
                token: size.token.to_string(),
                reference: format!("TP.radius.{}", size.radius),
            });
        }
    }
    for variant in registry.cta_variants {
        for value in [
            variant.background,
            variant.text,
            variant.border,
            variant.hover_background,
            variant.pressed_background,
        ] {
            check_hex("CTA variants", variant.token, value, defects);
        }
        if !registry
            .opacity
            .iter()
            .any(|opacity| opacity.token == variant.disabled_opacity)
        {
            defects.push(RegistryDefect::DanglingReference {
                scope: "CTA variants".to_string(),
                token: variant.token.to_string(),
                reference: format!("TP.opacity.{}", variant.disabled_opacity),
            });
        }
    }
}

fn check_components(registry: &Registry, defects: &mut Vec<RegistryDefect>) {
    for group in registry.components {
        let scope = format!("component category `{}`", group.category);
        check_unique(
            &scope,
            group.tokens.iter().map(|token| token.token.to_string()),
            defects,
        );
        for token in group.tokens {
            for segment in invalid_dotted_segments(token.token) {
                defects.push(RegistryDefect::InvalidComponentSegment {
                    token: token.token.to_string(),
                    segment: segment.to_string(),
                });
            }
            if token.value.starts_with("TP.") && !registry.resolves_reference(token.value) {
                defects.push(RegistryDefect::DanglingReference {
                    scope: scope.clone(),
                    token: token.token.to_string(),
                    reference: token.value.to_string(),
                });
            }
        }
    }
}

fn check_custom_properties(registry: &Registry, defects: &mut Vec<RegistryDefect>) {
    let mut owners: HashMap<String, String> = HashMap::new();
    for property in registry.custom_properties() {
        match owners.get(&property.name) {
            Some(first) => defects.push(RegistryDefect::CssVarCollision {
                name: property.name,
                first: first.clone(),
                second: property.owner,
            }),
            None => {
                owners.insert(property.name, property.owner);
            }
        }
    }
}

fn check_unique(
    scope: &str,
    tokens: impl Iterator<Item = String>,
    defects: &mut Vec<RegistryDefect>,
) {
    let mut seen = HashSet::new();
    for token in tokens {
        if !seen.insert(token.clone()) {
            defects.push(RegistryDefect::DuplicateToken {
                scope: scope.to_string(),
                token,
            });
        }
    }
}

fn check_hex(scope: &str, token: &str, value: &str, defects: &mut Vec<RegistryDefect>) {
    if parse_hex(value).is_none() {
        defects.push(RegistryDefect::MalformedHex {
            scope: scope.to_string(),
            token: token.to_string(),
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{
        registry, ColorEntry, ColorGroup, ColorGroupKind, ComponentToken, ComponentTokenGroup,
        PrimitiveRef, SemanticToken, SemanticTokenCategory, SemanticTokenGroup, TokenKey,
    };

    const FIXTURE_COLORS: &[ColorEntry] = &[
        ColorEntry {
            token: TokenKey::Step(500),
            value: "#4B4AD5",
            usage: None,
        },
        ColorEntry {
            token: TokenKey::Step(500),
            value: "#zzzzzz",
            usage: None,
        },
    ];

    const FIXTURE_GROUPS: &[ColorGroupKind] = &[ColorGroupKind::Flat(ColorGroup {
        key: "primary",
        slug: "tp-blue",
        name: "TP Blue",
        description: "",
        colors: FIXTURE_COLORS,
    })];

    const FIXTURE_SEMANTIC: &[SemanticTokenCategory] = &[SemanticTokenCategory {
        key: "text",
        name: "Text",
        description: "",
        groups: &[SemanticTokenGroup {
            name: "Content",
            tokens: &[
                SemanticToken {
                    token: TokenPath::new(&["TP", "text", "primary"]),
                    usage: "",
                    source: PrimitiveRef::new("tp-slate-700"),
                    value: "#334155",
                },
                SemanticToken {
                    token: TokenPath::new(&["TP", "text-primary"]),
                    usage: "",
                    source: PrimitiveRef::new("tp-blue-500"),
                    value: "#000000",
                },
            ],
        }],
    }];

    const FIXTURE_COMPONENTS: &[ComponentTokenGroup] = &[ComponentTokenGroup {
        category: "card",
        name: "Cards",
        description: "",
        tokens: &[ComponentToken {
            token: "card.shadow",
            value: "TP.shadow.enormous",
            css_var: None,
            property: None,
            description: None,
        }],
    }];

    fn defective_registry() -> Registry {
        let base = registry();
        Registry {
            color_groups: FIXTURE_GROUPS,
            semantic: FIXTURE_SEMANTIC,
            components: FIXTURE_COMPONENTS,
            ..*base
        }
    }

    #[test]
    fn shipped_registry_has_no_defects() {
        let result = validate(registry());
        if let Err(err) = &result {
            let listed: Vec<String> = err.defects.iter().map(ToString::to_string).collect();
            panic!("unexpected defects: {listed:#?}");
        }
    }

    #[test]
    fn validation_reports_every_defect_kind_in_fixture() {
        let err = validate(&defective_registry()).unwrap_err();
        let defects = &err.defects;

        assert!(defects.contains(&RegistryDefect::DuplicateToken {
            scope: "color group `TP Blue`".to_string(),
            token: "500".to_string(),
        }));
        assert!(defects.contains(&RegistryDefect::MalformedHex {
            scope: "color group `TP Blue`".to_string(),
            token: "500".to_string(),
            value: "#zzzzzz".to_string(),
        }));
        assert!(defects.contains(&RegistryDefect::DanglingSource {
            token: "TP.text.primary".to_string(),
            source: "tp-slate-700".to_string(),
        }));
        assert!(defects.contains(&RegistryDefect::InvalidPath {
            token: "TP.text-primary".to_string(),
            segment: "text-primary".to_string(),
        }));
        assert!(defects.contains(&RegistryDefect::SlugCollision {
            slug: "TP-text-primary".to_string(),
            first: "TP.text.primary".to_string(),
            second: "TP.text-primary".to_string(),
        }));
        assert!(defects.contains(&RegistryDefect::ValueMismatch {
            token: "TP.text-primary".to_string(),
            source: "tp-blue-500".to_string(),
            expected: "#4B4AD5".to_string(),
            actual: "#000000".to_string(),
        }));
        assert!(defects.contains(&RegistryDefect::DanglingReference {
            scope: "component category `card`".to_string(),
            token: "card.shadow".to_string(),
            reference: "TP.shadow.enormous".to_string(),
        }));
    }

    #[test]
    fn validation_error_summarizes_defect_count() {
        let err = validate(&defective_registry()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("token registry has {} defect(s)", err.defects.len())
        );
    }

    const KEBAB_TWINS: &[SemanticTokenCategory] = &[SemanticTokenCategory {
        key: "text",
        name: "Text",
        description: "",
        groups: &[SemanticTokenGroup {
            name: "Links",
            tokens: &[
                SemanticToken {
                    token: TokenPath::new(&["TP", "text", "linkHover"]),
                    usage: "",
                    source: PrimitiveRef::new("tp-blue-500"),
                    value: "#4B4AD5",
                },
                SemanticToken {
                    token: TokenPath::new(&["TP", "text", "link_hover"]),
                    usage: "",
                    source: PrimitiveRef::new("tp-base-white"),
                    value: "#FFFFFF",
                },
            ],
        }],
    }];

    const NESTED_PATHS: &[SemanticTokenCategory] = &[SemanticTokenCategory {
        key: "bg",
        name: "Background",
        description: "",
        groups: &[SemanticTokenGroup {
            name: "Surfaces",
            tokens: &[
                SemanticToken {
                    token: TokenPath::new(&["TP", "bg"]),
                    usage: "",
                    source: PrimitiveRef::new("tp-blue-500"),
                    value: "#4B4AD5",
                },
                SemanticToken {
                    token: TokenPath::new(&["TP", "bg", "surface"]),
                    usage: "",
                    source: PrimitiveRef::new("tp-base-white"),
                    value: "#FFFFFF",
                },
            ],
        }],
    }];

    const DASHED_COMPONENTS: &[ComponentTokenGroup] = &[ComponentTokenGroup {
        category: "input",
        name: "Inputs",
        description: "",
        tokens: &[
            ComponentToken {
                token: "input.border-focus",
                value: "#4B4AD5",
                css_var: Some("--tp-input-ring"),
                property: None,
                description: None,
            },
            ComponentToken {
                token: "input.ring",
                value: "#4B4AD5",
                css_var: Some("--tp-input-ring"),
                property: None,
                description: None,
            },
        ],
    }];

    #[test]
    fn kebab_twins_are_reported_as_custom_property_collisions() {
        let fixture = Registry {
            semantic: KEBAB_TWINS,
            ..*registry()
        };
        let err = validate(&fixture).unwrap_err();
        assert!(err.defects.contains(&RegistryDefect::CssVarCollision {
            name: "--tp-text-link-hover".to_string(),
            first: "TP.text.linkHover".to_string(),
            second: "TP.text.link_hover".to_string(),
        }));
    }

    #[test]
    fn token_paths_that_prefix_other_paths_are_rejected() {
        let fixture = Registry {
            semantic: NESTED_PATHS,
            ..*registry()
        };
        let err = validate(&fixture).unwrap_err();
        assert!(err.defects.contains(&RegistryDefect::PathPrefixConflict {
            prefix: "TP.bg".to_string(),
            path: "TP.bg.surface".to_string(),
        }));
    }

    #[test]
    fn component_keys_must_slug_without_ambiguity() {
        let fixture = Registry {
            components: DASHED_COMPONENTS,
            ..*registry()
        };
        let err = validate(&fixture).unwrap_err();
        assert!(err.defects.contains(&RegistryDefect::InvalidComponentSegment {
            token: "input.border-focus".to_string(),
            segment: "border-focus".to_string(),
        }));
        assert!(err.defects.contains(&RegistryDefect::CssVarCollision {
            name: "--tp-input-ring".to_string(),
            first: "input.border-focus".to_string(),
            second: "input.ring".to_string(),
        }));
    }
}
