use serde_json::{json, Map, Value};

use super::{registry_metadata, Compiler, Document, ExportContext};
use crate::registry::{dotted_slug, format_number, px, DimensionToken, Registry};

/// Style Dictionary source tree: every leaf is `{ "value": ... }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleDictionary;

const ID: &str = "style-dictionary";

impl Compiler for StyleDictionary {
    fn id(&self) -> &'static str {
        ID
    }

    fn label(&self) -> &'static str {
        "Style Dictionary"
    }

    fn compile(&self, registry: &Registry, context: &ExportContext) -> Document {
        let mut doc = Map::new();

        let mut color = Map::new();
        for scale in registry.color_scales() {
            let ramp: Map<_, _> = scale
                .colors
                .iter()
                .map(|entry| (entry.token.to_string(), leaf(json!(entry.value), entry.usage)))
                .collect();
            color.insert(scale.key.into(), Value::Object(ramp));
        }
        doc.insert("color".into(), Value::Object(color));

        let semantic: Map<_, _> = registry
            .semantic_tokens()
            .map(|(_, _, token)| {
                let mut value = leaf(json!(token.value), Some(token.usage));
                if let Value::Object(map) = &mut value {
                    map.insert(
                        "attributes".into(),
                        json!({ "source": token.source, "path": token.token }),
                    );
                }
                (token.token.slug(), value)
            })
            .collect();
        doc.insert("semantic".into(), Value::Object(semantic));

        let typography: Map<_, _> = registry
            .typography
            .iter()
            .map(|entry| {
                (
                    entry.token.to_string(),
                    json!({
                        "fontFamily": { "value": entry.font_family },
                        "fontSize": { "value": entry.font_size_css() },
                        "fontWeight": { "value": entry.font_weight },
                        "lineHeight": { "value": entry.line_height_css() },
                        "letterSpacing": { "value": entry.letter_spacing },
                    }),
                )
            })
            .collect();
        doc.insert("typography".into(), Value::Object(typography));

        doc.insert(
            "size".into(),
            json!({
                "spacing": dimensions(registry.spacing),
                "radius": dimensions(registry.radius),
                "sizing": dimensions(registry.sizing),
                "borderWidth": dimensions(registry.border_width),
            }),
        );

        let opacity: Map<_, _> = registry
            .opacity
            .iter()
            .map(|entry| (entry.token.to_string(), leaf(json!(entry.value), Some(entry.usage))))
            .collect();
        doc.insert("opacity".into(), Value::Object(opacity));

        let shadow: Map<_, _> = registry
            .shadows
            .iter()
            .map(|entry| (entry.token.to_string(), leaf(json!(entry.css()), Some(entry.usage))))
            .collect();
        doc.insert("shadow".into(), Value::Object(shadow));

        let gradient: Map<_, _> = registry
            .gradients
            .iter()
            .map(|entry| (entry.token.to_string(), leaf(json!(entry.css()), Some(entry.usage))))
            .collect();
        doc.insert("gradient".into(), Value::Object(gradient));

        let grid: Map<_, _> = registry
            .grid
            .iter()
            .map(|entry| {
                let mut fields = json!({
                    "columns": { "value": entry.columns },
                    "gutter": { "value": px(entry.gutter) },
                    "margin": { "value": px(entry.margin) },
                    "minWidth": { "value": px(entry.min_width) },
                });
                if let (Some(max), Value::Object(map)) = (entry.max_content_width, &mut fields) {
                    map.insert("maxContentWidth".into(), json!({ "value": px(max) }));
                }
                (entry.token.to_string(), fields)
            })
            .collect();
        doc.insert("grid".into(), Value::Object(grid));

        let sizes: Map<_, _> = registry
            .cta_sizes
            .iter()
            .map(|size| {
                (
                    size.token.to_string(),
                    json!({
                        "height": { "value": px(size.height) },
                        "paddingX": { "value": px(size.padding_x) },
                        "fontSize": { "value": px(size.font_size) },
                        "iconSize": { "value": px(size.icon_size) },
                        "gap": { "value": px(size.gap) },
                        "radius": { "value": format!("{{size.radius.{}.value}}", size.radius) },
                    }),
                )
            })
            .collect();
        let variants: Map<_, _> = registry
            .cta_variants
            .iter()
            .map(|variant| {
                (
                    variant.token.to_string(),
                    json!({
                        "background": { "value": variant.background },
                        "text": { "value": variant.text },
                        "border": { "value": variant.border },
                        "hoverBackground": { "value": variant.hover_background },
                        "pressedBackground": { "value": variant.pressed_background },
                        "disabledOpacity": {
                            "value": format!("{{opacity.{}.value}}", variant.disabled_opacity)
                        },
                    }),
                )
            })
            .collect();
        doc.insert("cta".into(), json!({ "size": sizes, "variant": variants }));

        let mut component = Map::new();
        for group in registry.components {
            let tokens: Map<_, _> = group
                .tokens
                .iter()
                .map(|token| {
                    let mut value = leaf(json!(token.value), token.description);
                    if let (Some(css_var), Value::Object(map)) = (token.css_var, &mut value) {
                        map.insert("attributes".into(), json!({ "cssVar": css_var }));
                    }
                    (dotted_slug(token.token), value)
                })
                .collect();
            component.insert(group.category.into(), Value::Object(tokens));
        }
        doc.insert("component".into(), Value::Object(component));

        doc.insert(
            "$metadata".into(),
            registry_metadata(registry, context, ID),
        );

        Document::Json(Value::Object(doc))
    }
}

fn leaf(value: Value, comment: Option<&str>) -> Value {
    let mut map = Map::new();
    map.insert("value".into(), value);
    if let Some(comment) = comment {
        map.insert("comment".into(), json!(comment));
    }
    Value::Object(map)
}

fn dimensions(tokens: &[DimensionToken]) -> Value {
    let map: Map<_, _> = tokens
        .iter()
        .map(|entry| {
            let mut value = leaf(json!(entry.css()), Some(entry.usage));
            if let Value::Object(fields) = &mut value {
                fields.insert(
                    "attributes".into(),
                    json!({ "px": format_number(entry.px) }),
                );
            }
            (entry.token.to_string(), value)
        })
        .collect();
    Value::Object(map)
}
