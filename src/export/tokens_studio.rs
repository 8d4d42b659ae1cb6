use serde_json::{json, Map, Value};

use super::{registry_metadata, Compiler, Document, ExportContext};
use crate::registry::{format_number, DimensionToken, Registry};

/// Tokens Studio for Figma: token sets `core`, `semantic` and `components`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokensStudio;

const ID: &str = "tokens-studio";
const TOKEN_SETS: [&str; 3] = ["core", "semantic", "components"];

impl Compiler for TokensStudio {
    fn id(&self) -> &'static str {
        ID
    }

    fn label(&self) -> &'static str {
        "Tokens Studio"
    }

    fn compile(&self, registry: &Registry, context: &ExportContext) -> Document {
        let mut doc = Map::new();
        doc.insert("core".into(), core_set(registry));
        doc.insert("semantic".into(), semantic_set(registry));
        doc.insert("components".into(), component_set(registry));
        doc.insert(
            "$themes".into(),
            json!([{
                "id": "light",
                "name": "Light",
                "selectedTokenSets": {
                    "core": "source",
                    "semantic": "enabled",
                    "components": "enabled",
                },
            }]),
        );

        let mut metadata = Map::new();
        metadata.insert("tokenSetOrder".into(), json!(TOKEN_SETS));
        if let Value::Object(block) = registry_metadata(registry, context, ID) {
            metadata.extend(block);
        }
        doc.insert("$metadata".into(), Value::Object(metadata));

        Document::Json(Value::Object(doc))
    }
}

fn token(value: Value, kind: &str, description: &str) -> Value {
    json!({
        "value": value,
        "type": kind,
        "description": description,
    })
}

fn core_set(registry: &Registry) -> Value {
    let mut core = Map::new();

    let mut colors = Map::new();
    for scale in registry.color_scales() {
        let mut ramp = Map::new();
        for entry in scale.colors {
            ramp.insert(
                entry.token.to_string(),
                token(
                    json!(entry.value),
                    "color",
                    entry.usage.unwrap_or(scale.description),
                ),
            );
        }
        colors.insert(scale.key.into(), Value::Object(ramp));
    }
    core.insert("color".into(), Value::Object(colors));

    let mut typography = Map::new();
    for entry in registry.typography {
        typography.insert(
            entry.token.into(),
            token(
                json!({
                    "fontFamily": entry.font_family,
                    "fontSize": entry.font_size_css(),
                    "fontWeight": entry.font_weight.to_string(),
                    "lineHeight": entry.line_height_css(),
                    "letterSpacing": entry.letter_spacing,
                }),
                "typography",
                entry.usage,
            ),
        );
    }
    core.insert("typography".into(), Value::Object(typography));

    core.insert("spacing".into(), dimensions(registry.spacing, "spacing"));
    core.insert(
        "borderRadius".into(),
        dimensions(registry.radius, "borderRadius"),
    );
    core.insert("sizing".into(), dimensions(registry.sizing, "sizing"));

    let opacity: Map<_, _> = registry
        .opacity
        .iter()
        .map(|entry| {
            (
                entry.token.to_string(),
                token(
                    json!(format!("{}%", format_number((entry.value * 100.0).round()))),
                    "opacity",
                    entry.usage,
                ),
            )
        })
        .collect();
    core.insert("opacity".into(), Value::Object(opacity));

    core.insert(
        "borderWidth".into(),
        dimensions(registry.border_width, "borderWidth"),
    );

    let shadows: Map<_, _> = registry
        .shadows
        .iter()
        .map(|shadow| {
            let layers: Vec<_> = shadow
                .layers
                .iter()
                .map(|layer| {
                    json!({
                        "x": format_number(layer.x),
                        "y": format_number(layer.y),
                        "blur": format_number(layer.blur),
                        "spread": format_number(layer.spread),
                        "color": crate::color::rgba_css(layer.color, layer.alpha),
                        "type": "dropShadow",
                    })
                })
                .collect();
            (
                shadow.token.to_string(),
                token(json!(layers), "boxShadow", shadow.usage),
            )
        })
        .collect();
    core.insert("boxShadow".into(), Value::Object(shadows));

    let gradients: Map<_, _> = registry
        .gradients
        .iter()
        .map(|gradient| {
            (
                gradient.token.to_string(),
                token(json!(gradient.css()), "color", gradient.usage),
            )
        })
        .collect();
    core.insert("gradient".into(), Value::Object(gradients));

    let grid: Map<_, _> = registry
        .grid
        .iter()
        .map(|grid| {
            let mut value = json!({
                "columns": grid.columns.to_string(),
                "gutter": crate::registry::px(grid.gutter),
                "margin": crate::registry::px(grid.margin),
                "minWidth": crate::registry::px(grid.min_width),
            });
            if let (Some(max), Value::Object(map)) = (grid.max_content_width, &mut value) {
                map.insert("maxContentWidth".into(), json!(crate::registry::px(max)));
            }
            (grid.token.to_string(), token(value, "composition", grid.usage))
        })
        .collect();
    core.insert("grid".into(), Value::Object(grid));

    let sizes: Map<_, _> = registry
        .cta_sizes
        .iter()
        .map(|size| {
            (
                size.token.to_string(),
                token(
                    json!({
                        "height": crate::registry::px(size.height),
                        "paddingX": crate::registry::px(size.padding_x),
                        "fontSize": crate::registry::px(size.font_size),
                        "iconSize": crate::registry::px(size.icon_size),
                        "gap": crate::registry::px(size.gap),
                        "borderRadius": format!("{{borderRadius.{}}}", size.radius),
                    }),
                    "composition",
                    size.usage,
                ),
            )
        })
        .collect();
    let variants: Map<_, _> = registry
        .cta_variants
        .iter()
        .map(|variant| {
            (
                variant.token.to_string(),
                token(
                    json!({
                        "fill": variant.background,
                        "color": variant.text,
                        "borderColor": variant.border,
                        "fillHover": variant.hover_background,
                        "fillPressed": variant.pressed_background,
                        "disabledOpacity": format!("{{opacity.{}}}", variant.disabled_opacity),
                    }),
                    "composition",
                    variant.usage,
                ),
            )
        })
        .collect();
    core.insert(
        "cta".into(),
        json!({ "size": sizes, "variant": variants }),
    );

    Value::Object(core)
}

fn dimensions(tokens: &[DimensionToken], kind: &str) -> Value {
    let map: Map<_, _> = tokens
        .iter()
        .map(|entry| (entry.token.to_string(), token(json!(entry.css()), kind, entry.usage)))
        .collect();
    Value::Object(map)
}

fn semantic_set(registry: &Registry) -> Value {
    let mut root = Map::new();
    for (_, _, semantic) in registry.semantic_tokens() {
        let inserted = insert_path(
            &mut root,
            semantic.token.segments(),
            token(
                json!(semantic.value),
                "color",
                &format!("{} (source: {})", semantic.usage, semantic.source),
            ),
        );
        if !inserted {
            tracing::warn!(token = %semantic.token, "semantic path conflicts with another token; skipped");
        }
    }
    Value::Object(root)
}

fn component_set(registry: &Registry) -> Value {
    let mut root = Map::new();
    for group in registry.components {
        let mut category = Map::new();
        for component in group.tokens {
            let name = component
                .token
                .strip_prefix(group.category)
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(component.token);
            category.insert(
                name.to_string(),
                token(
                    json!(studio_reference(component.value)),
                    component_kind(component.property, component.value),
                    component.description.unwrap_or_default(),
                ),
            );
        }
        root.insert(group.category.into(), Value::Object(category));
    }
    Value::Object(root)
}

/// Nests `leaf` under `segments`. Never descends into or replaces an existing
/// token, so a path that prefixes another one is rejected rather than merged.
fn insert_path(root: &mut Map<String, Value>, segments: &[&str], leaf: Value) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };
    let mut cursor = root;
    for segment in parents {
        let child = cursor
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match child {
            Value::Object(next) if !is_token(next) => cursor = next,
            _ => return false,
        }
    }
    if cursor.contains_key(*last) {
        return false;
    }
    cursor.insert(last.to_string(), leaf);
    true
}

fn is_token(node: &Map<String, Value>) -> bool {
    node.contains_key("value") && node.contains_key("type")
}

/// Rewrites a textual `TP.` pointer into Tokens Studio `{alias}` syntax.
fn studio_reference(value: &str) -> String {
    let Some(rest) = value.strip_prefix("TP.") else {
        return value.to_string();
    };
    let (scale, token) = rest.split_once('.').unwrap_or((rest, ""));
    let core_set = match scale {
        "shadow" => Some("boxShadow"),
        "radius" => Some("borderRadius"),
        "spacing" => Some("spacing"),
        "sizing" => Some("sizing"),
        "opacity" => Some("opacity"),
        "borderWidth" => Some("borderWidth"),
        "gradient" => Some("gradient"),
        "typography" => Some("typography"),
        _ => None,
    };
    match core_set {
        Some(set) => format!("{{{set}.{token}}}"),
        None => format!("{{{value}}}"),
    }
}

fn component_kind(property: Option<&str>, value: &str) -> &'static str {
    match property {
        Some("color" | "background-color" | "border-color" | "border-bottom-color") => "color",
        Some("border-radius") => "borderRadius",
        Some("box-shadow") => "boxShadow",
        Some("padding" | "padding-inline") => "spacing",
        Some("width" | "height") => "sizing",
        Some("opacity") => "opacity",
        Some("font") => "typography",
        _ if value.ends_with("px") => "dimension",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::{fixed_context, json};
    use crate::registry::registry;

    fn compile() -> Value {
        json(TokensStudio.compile(registry(), &fixed_context()))
    }

    #[test]
    fn h1_typography_uses_css_strings() {
        let doc = compile();
        let h1 = &doc["core"]["typography"]["H1"];
        assert_eq!(h1["type"], "typography");
        assert_eq!(h1["value"]["fontSize"], "36px");
        assert_eq!(h1["value"]["fontWeight"], "700");
        assert_eq!(h1["value"]["lineHeight"], "44px");
    }

    #[test]
    fn colors_are_wrapped_hex_values() {
        let doc = compile();
        let blue = &doc["core"]["color"]["primary"]["500"];
        assert_eq!(blue["value"], "#4B4AD5");
        assert_eq!(blue["type"], "color");
        assert_eq!(blue["description"], "Primary brand color");

        let success = &doc["core"]["color"]["success"]["500"];
        assert_eq!(success["value"], "#12B76A");
        assert!(success["description"].as_str().unwrap().starts_with("Status scales"));
    }

    #[test]
    fn semantic_set_nests_by_path_segment() {
        let doc = compile();
        let primary = &doc["semantic"]["TP"]["text"]["primary"];
        assert_eq!(primary["value"], "#0F172A");
        assert!(primary["description"]
            .as_str()
            .unwrap()
            .contains("tp-slate-900"));

        let leaves: usize = doc["semantic"]["TP"]
            .as_object()
            .unwrap()
            .values()
            .map(|category| category.as_object().unwrap().len())
            .sum();
        assert_eq!(leaves, registry().semantic_count());
    }

    #[test]
    fn themes_manifest_enables_every_token_set() {
        let doc = compile();
        let themes = doc["$themes"].as_array().unwrap();
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0]["name"], "Light");
        for set in TOKEN_SETS {
            assert!(themes[0]["selectedTokenSets"].get(set).is_some(), "{set}");
        }
        assert_eq!(doc["$metadata"]["tokenSetOrder"], json!(TOKEN_SETS));
        assert_eq!(doc["$metadata"]["version"], "2.2.0");
    }

    #[test]
    fn component_pointers_become_aliases() {
        assert_eq!(studio_reference("TP.shadow.lg"), "{boxShadow.lg}");
        assert_eq!(studio_reference("TP.text.primary"), "{TP.text.primary}");
        assert_eq!(studio_reference("40px"), "40px");

        let doc = compile();
        let card_shadow = &doc["components"]["card"]["shadowRaised"];
        assert_eq!(card_shadow["value"], "{boxShadow.lg}");
        assert_eq!(card_shadow["type"], "boxShadow");
    }

    #[test]
    fn opacity_renders_as_percentages() {
        let doc = compile();
        assert_eq!(doc["core"]["opacity"]["40"]["value"], "40%");
        assert_eq!(doc["core"]["opacity"]["5"]["value"], "5%");
    }

    #[test]
    fn prefix_paths_never_nest_inside_a_token() {
        let leaf = |value: &str| token(json!(value), "color", "");

        let mut root = Map::new();
        assert!(insert_path(&mut root, &["TP", "bg"], leaf("#4B4AD5")));
        assert!(!insert_path(&mut root, &["TP", "bg", "surface"], leaf("#FFFFFF")));
        assert_eq!(root["TP"]["bg"]["value"], "#4B4AD5");
        assert!(root["TP"]["bg"].get("surface").is_none());

        let mut reversed = Map::new();
        assert!(insert_path(&mut reversed, &["TP", "bg", "surface"], leaf("#FFFFFF")));
        assert!(!insert_path(&mut reversed, &["TP", "bg"], leaf("#4B4AD5")));
        assert_eq!(reversed["TP"]["bg"]["surface"]["value"], "#FFFFFF");
    }
}
