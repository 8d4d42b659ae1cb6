//! Read-only filters and aggregations over the registry.

use serde::Serialize;

use super::{registry, ComponentToken, Registry};

/// A component token paired with the category it was declared under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatComponentToken {
    pub category: &'static str,
    #[serde(flatten)]
    pub token: &'static ComponentToken,
}

/// One `:root` custom property emitted for a registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomProperty {
    /// Property name including the leading `--`.
    pub name: String,
    /// Registry entry the property was derived from.
    pub owner: String,
    pub value: String,
    /// Component values are raw `TP.` pointers rather than CSS.
    pub component: bool,
}

/// Per-category entry counts, in compiler traversal order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCounts {
    pub primitive_colors: usize,
    pub functional_colors: usize,
    pub semantic: usize,
    pub typography: usize,
    pub spacing: usize,
    pub radius: usize,
    pub sizing: usize,
    pub opacity: usize,
    pub border_width: usize,
    pub shadows: usize,
    pub gradients: usize,
    pub grid: usize,
    pub cta_sizes: usize,
    pub cta_variants: usize,
    pub components: usize,
    pub total: usize,
}

impl Registry {
    pub fn tokens_by_category(&self, category: &str) -> &'static [ComponentToken] {
        self.components
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.tokens)
            .unwrap_or(&[])
    }

    pub fn all_tokens_flat(&self) -> Vec<FlatComponentToken> {
        self.components
            .iter()
            .flat_map(|group| {
                group.tokens.iter().map(move |token| FlatComponentToken {
                    category: group.category,
                    token,
                })
            })
            .collect()
    }

    pub fn token_count(&self) -> usize {
        self.components.iter().map(|group| group.tokens.len()).sum()
    }

    pub fn primitive_color_count(&self) -> usize {
        self.color_scales()
            .iter()
            .map(|scale| scale.colors.len())
            .sum()
    }

    pub fn semantic_count(&self) -> usize {
        self.semantic.iter().map(|category| category.token_count()).sum()
    }

    pub fn counts(&self) -> TokenCounts {
        let all_colors = self.primitive_color_count();
        let functional_colors = self
            .color_scales()
            .iter()
            .filter(|scale| scale.family.is_some())
            .map(|scale| scale.colors.len())
            .sum();
        let mut counts = TokenCounts {
            primitive_colors: all_colors - functional_colors,
            functional_colors,
            semantic: self.semantic_count(),
            typography: self.typography.len(),
            spacing: self.spacing.len(),
            radius: self.radius.len(),
            sizing: self.sizing.len(),
            opacity: self.opacity.len(),
            border_width: self.border_width.len(),
            shadows: self.shadows.len(),
            gradients: self.gradients.len(),
            grid: self.grid.len(),
            cta_sizes: self.cta_sizes.len(),
            cta_variants: self.cta_variants.len(),
            components: self.token_count(),
            total: 0,
        };
        counts.total = counts.primitive_colors
            + counts.functional_colors
            + counts.semantic
            + counts.typography
            + counts.spacing
            + counts.radius
            + counts.sizing
            + counts.opacity
            + counts.border_width
            + counts.shadows
            + counts.gradients
            + counts.grid
            + counts.cta_sizes
            + counts.cta_variants
            + counts.components;
        counts
    }

    /// Every custom property the preview stylesheet declares, in declaration order.
    pub fn custom_properties(&self) -> Vec<CustomProperty> {
        let mut properties = Vec::new();
        let mut push = |name: String, owner: String, value: String, component: bool| {
            properties.push(CustomProperty {
                name,
                owner,
                value,
                component,
            });
        };

        for scale in self.color_scales() {
            for entry in scale.colors {
                let reference = scale.reference(entry);
                push(format!("--{reference}"), reference, entry.value.to_string(), false);
            }
        }
        for (_, _, token) in self.semantic_tokens() {
            push(token.token.css_var(), token.token.dotted(), token.value.to_string(), false);
        }
        for (scale, tokens) in [
            ("spacing", self.spacing),
            ("radius", self.radius),
            ("sizing", self.sizing),
        ] {
            for entry in tokens {
                push(
                    format!("--tp-{scale}-{}", entry.token),
                    format!("TP.{scale}.{}", entry.token),
                    entry.css(),
                    false,
                );
            }
        }
        for shadow in self.shadows {
            push(
                format!("--tp-shadow-{}", shadow.token),
                format!("TP.shadow.{}", shadow.token),
                shadow.css(),
                false,
            );
        }
        for group in self.components {
            for token in group.tokens {
                if let Some(css_var) = token.css_var {
                    push(css_var.to_string(), token.token.to_string(), token.value.to_string(), true);
                }
            }
        }
        properties
    }

    /// Whether a textual `TP.` pointer (e.g. `TP.shadow.lg`, `TP.text.primary`) names a registry entry.
    pub fn resolves_reference(&self, reference: &str) -> bool {
        let Some(rest) = reference.strip_prefix("TP.") else {
            return false;
        };
        let Some((scale, token)) = rest.split_once('.') else {
            return false;
        };
        match scale {
            "shadow" => self.shadows.iter().any(|entry| entry.token == token),
            "radius" => self.radius.iter().any(|entry| entry.token == token),
            "spacing" => self.spacing.iter().any(|entry| entry.token == token),
            "sizing" => self.sizing.iter().any(|entry| entry.token == token),
            "borderWidth" => self.border_width.iter().any(|entry| entry.token == token),
            "opacity" => self.opacity.iter().any(|entry| entry.token == token),
            "gradient" => self.gradients.iter().any(|entry| entry.token == token),
            "typography" => self.typography.iter().any(|entry| entry.token == token),
            _ => self
                .semantic_tokens()
                .any(|(_, _, semantic)| semantic.token.dotted() == reference),
        }
    }
}

pub fn tokens_by_category(category: &str) -> &'static [ComponentToken] {
    registry().tokens_by_category(category)
}

pub fn all_tokens_flat() -> Vec<FlatComponentToken> {
    registry().all_tokens_flat()
}

pub fn token_count() -> usize {
    registry().token_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_by_category_returns_declared_group() {
        let cta = tokens_by_category("cta");
        assert!(!cta.is_empty());
        assert!(cta.iter().all(|token| token.token.starts_with("cta.")));
        assert!(tokens_by_category("prescription").is_empty());
    }

    #[test]
    fn flat_listing_matches_count_and_keeps_categories() {
        let flat = all_tokens_flat();
        assert_eq!(flat.len(), token_count());

        let registry = registry();
        for group in registry.components {
            let in_category = flat
                .iter()
                .filter(|entry| entry.category == group.category)
                .count();
            assert_eq!(in_category, group.tokens.len());
        }
        assert_eq!(flat[0].category, registry.components[0].category);
    }

    #[test]
    fn flat_token_serializes_category_beside_token_fields() {
        let flat = all_tokens_flat();
        let value = serde_json::to_value(flat[0]).unwrap();
        assert_eq!(value["category"], "cta");
        assert_eq!(value["token"], "cta.primary.background");
        assert_eq!(value["cssVar"], "--tp-cta-primary-bg");
    }

    #[test]
    fn counts_total_is_sum_of_categories() {
        let counts = registry().counts();
        assert_eq!(counts.primitive_colors, 35);
        assert_eq!(counts.functional_colors, 40);
        assert_eq!(counts.components, token_count());
        assert_eq!(
            counts.primitive_colors + counts.functional_colors,
            registry().primitive_color_count()
        );
        assert!(counts.total > counts.semantic + counts.components);
    }

    #[test]
    fn textual_pointers_resolve_against_scales_and_semantic_tokens() {
        let registry = registry();
        assert!(registry.resolves_reference("TP.shadow.lg"));
        assert!(registry.resolves_reference("TP.text.primary"));
        assert!(registry.resolves_reference("TP.typography.Body Small"));
        assert!(registry.resolves_reference("TP.opacity.60"));
        assert!(!registry.resolves_reference("TP.shadow.huge"));
        assert!(!registry.resolves_reference("TP.text.missing"));
        assert!(!registry.resolves_reference("shadow.lg"));
    }

    #[test]
    fn custom_properties_cover_every_layer_with_unique_names() {
        let registry = registry();
        let properties = registry.custom_properties();
        let find = |name: &str| properties.iter().find(|property| property.name == name);

        assert_eq!(find("--tp-blue-500").map(|p| p.value.as_str()), Some("#4B4AD5"));
        assert_eq!(
            find("--tp-text-primary").map(|p| p.owner.as_str()),
            Some("TP.text.primary")
        );
        assert_eq!(find("--tp-spacing-4").map(|p| p.value.as_str()), Some("16px"));
        let cta = find("--tp-cta-primary-bg").expect("component property");
        assert!(cta.component);
        assert_eq!(cta.value, "TP.interactive.primary");

        let names: std::collections::HashSet<_> =
            properties.iter().map(|property| property.name.as_str()).collect();
        assert_eq!(names.len(), properties.len());
    }
}
