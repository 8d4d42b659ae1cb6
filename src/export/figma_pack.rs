use serde_json::{json, Map, Value};

use super::{registry_metadata, Compiler, Document, ExportContext};
use crate::registry::{format_number, DimensionToken, Registry};

/// Fixed name kept for importers that predate versioned file names.
pub const LEGACY_PACK_FILE_NAME: &str = "tatva_practice_tokens.json";

/// The original single-file Figma token pack (`$type`/`$value` entries).
#[derive(Debug, Clone, Copy, Default)]
pub struct FigmaTokenPack;

const ID: &str = "figma-tokens";

impl Compiler for FigmaTokenPack {
    fn id(&self) -> &'static str {
        ID
    }

    fn label(&self) -> &'static str {
        "Figma Token Pack (legacy)"
    }

    fn file_name(&self, _context: &ExportContext) -> String {
        LEGACY_PACK_FILE_NAME.to_string()
    }

    fn compile(&self, registry: &Registry, context: &ExportContext) -> Document {
        let mut doc = Map::new();

        for scale in registry.color_scales() {
            let group: Map<_, _> = scale
                .colors
                .iter()
                .map(|entry| {
                    let token = entry.token.to_string();
                    let custom_id = format!("{}:{token}", scale.slug);
                    (
                        token,
                        entry_value(
                            "color",
                            json!(entry.value),
                            entry.usage.unwrap_or(scale.description),
                            &custom_id,
                        ),
                    )
                })
                .collect();
            doc.insert(scale.slug.into(), Value::Object(group));
        }

        let semantic: Map<_, _> = registry
            .semantic_tokens()
            .map(|(_, _, token)| {
                let mut value = entry_value(
                    "color",
                    json!(token.value),
                    token.usage,
                    &format!("semantic:{}", token.token.slug()),
                );
                if let Some(extensions) = value.get_mut("$extensions").and_then(Value::as_object_mut) {
                    extensions.insert("source".into(), json!(token.source));
                }
                (token.token.dotted(), value)
            })
            .collect();
        doc.insert("semantic".into(), Value::Object(semantic));

        let typography: Map<_, _> = registry
            .typography
            .iter()
            .map(|entry| {
                (
                    entry.token.to_string(),
                    entry_value(
                        "typography",
                        json!({
                            "fontFamily": entry.font_family,
                            "fontSize": entry.font_size_css(),
                            "fontWeight": entry.font_weight,
                            "lineHeight": entry.line_height_css(),
                            "letterSpacing": entry.letter_spacing,
                        }),
                        entry.usage,
                        &format!("typography:{}", entry.token.replace(' ', "-")),
                    ),
                )
            })
            .collect();
        doc.insert("typography".into(), Value::Object(typography));

        for (key, tokens) in [
            ("spacing", registry.spacing),
            ("radius", registry.radius),
            ("sizing", registry.sizing),
            ("borderWidth", registry.border_width),
        ] {
            doc.insert(key.into(), dimensions(key, tokens));
        }

        let opacity: Map<_, _> = registry
            .opacity
            .iter()
            .map(|entry| {
                (
                    entry.token.to_string(),
                    entry_value(
                        "number",
                        json!(entry.value),
                        entry.usage,
                        &format!("opacity:{}", entry.token),
                    ),
                )
            })
            .collect();
        doc.insert("opacity".into(), Value::Object(opacity));

        let shadow: Map<_, _> = registry
            .shadows
            .iter()
            .map(|entry| {
                (
                    entry.token.to_string(),
                    entry_value(
                        "shadow",
                        json!(entry.css()),
                        entry.usage,
                        &format!("shadow:{}", entry.token),
                    ),
                )
            })
            .collect();
        doc.insert("shadow".into(), Value::Object(shadow));

        let gradient: Map<_, _> = registry
            .gradients
            .iter()
            .map(|entry| {
                (
                    entry.token.to_string(),
                    entry_value(
                        "gradient",
                        json!(entry.css()),
                        entry.usage,
                        &format!("gradient:{}", entry.token),
                    ),
                )
            })
            .collect();
        doc.insert("gradient".into(), Value::Object(gradient));

        doc.insert(
            "$metadata".into(),
            registry_metadata(registry, context, ID),
        );

        Document::Json(Value::Object(doc))
    }
}

fn entry_value(kind: &str, value: Value, description: &str, custom_id: &str) -> Value {
    json!({
        "$type": kind,
        "$value": value,
        "$description": description,
        "$extensions": {
            "com.figma": {
                "variableId": format!("VariableID:custom:{custom_id}"),
            },
        },
    })
}

fn dimensions(group: &str, tokens: &[DimensionToken]) -> Value {
    let map: Map<_, _> = tokens
        .iter()
        .map(|entry| {
            let mut value = entry_value(
                "dimension",
                json!(entry.css()),
                entry.usage,
                &format!("{group}:{}", entry.token),
            );
            if let Some(extensions) = value.get_mut("$extensions").and_then(Value::as_object_mut) {
                extensions.insert("px".into(), json!(format_number(entry.px)));
            }
            (entry.token.to_string(), value)
        })
        .collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::export::test_support::{fixed_context, json};
    use crate::registry::registry;

    fn compile() -> Value {
        json(FigmaTokenPack.compile(registry(), &fixed_context()))
    }

    fn variable_ids(value: &Value, ids: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                if let Some(id) = map
                    .get("$extensions")
                    .and_then(|ext| ext["com.figma"]["variableId"].as_str())
                {
                    ids.push(id.to_string());
                }
                for child in map.values() {
                    variable_ids(child, ids);
                }
            }
            Value::Array(items) => items.iter().for_each(|item| variable_ids(item, ids)),
            _ => {}
        }
    }

    #[test]
    fn file_name_is_fixed() {
        assert_eq!(
            FigmaTokenPack.file_name(&fixed_context()),
            "tatva_practice_tokens.json"
        );
    }

    #[test]
    fn primitive_groups_are_keyed_by_slug() {
        let doc = compile();
        let blue = &doc["tp-blue"]["500"];
        assert_eq!(blue["$type"], "color");
        assert_eq!(blue["$value"], "#4B4AD5");
        assert_eq!(
            blue["$extensions"]["com.figma"]["variableId"],
            "VariableID:custom:tp-blue:500"
        );
        assert_eq!(doc["tp-error"]["600"]["$value"], "#D92D20");
        for scale in registry().color_scales() {
            assert_eq!(
                doc[scale.slug].as_object().map(|group| group.len()),
                Some(scale.colors.len()),
                "{}",
                scale.slug
            );
        }
    }

    #[test]
    fn variable_ids_are_unique() {
        let doc = compile();
        let mut ids = Vec::new();
        variable_ids(&doc, &mut ids);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.len() > registry().semantic_count());
    }

    #[test]
    fn semantic_entries_record_their_source() {
        let doc = compile();
        let primary = &doc["semantic"]["TP.text.primary"];
        assert_eq!(primary["$value"], "#0F172A");
        assert_eq!(primary["$extensions"]["source"], "tp-slate-900");
    }
}
