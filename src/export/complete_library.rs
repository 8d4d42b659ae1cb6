use serde::Serialize;
use serde_json::{json, Map, Value};

use super::{registry_metadata, Compiler, Document, ExportContext};
use crate::registry::{ColorGroupKind, DimensionToken, Registry};

/// Every registry category as plain data, one object per category with its count.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteLibrary;

const ID: &str = "complete-library";

impl Compiler for CompleteLibrary {
    fn id(&self) -> &'static str {
        ID
    }

    fn label(&self) -> &'static str {
        "Complete Library"
    }

    fn compile(&self, registry: &Registry, context: &ExportContext) -> Document {
        let counts = registry.counts();
        let mut doc = Map::new();
        doc.insert("metadata".into(), registry_metadata(registry, context, ID));

        let flat: Vec<_> = registry
            .color_groups
            .iter()
            .filter_map(|group| match group {
                ColorGroupKind::Flat(group) => Some(group),
                ColorGroupKind::Functional(_) => None,
            })
            .collect();
        let functional: Vec<_> = registry
            .color_groups
            .iter()
            .filter_map(|group| match group {
                ColorGroupKind::Functional(group) => Some(group),
                ColorGroupKind::Flat(_) => None,
            })
            .collect();

        doc.insert(
            "primitives".into(),
            section(counts.primitive_colors, "groups", &flat),
        );
        doc.insert(
            "functional".into(),
            section(counts.functional_colors, "groups", &functional),
        );
        doc.insert(
            "semantic".into(),
            section(counts.semantic, "categories", registry.semantic),
        );
        doc.insert(
            "typography".into(),
            section(
                counts.typography,
                "tokens",
                &registry
                    .typography
                    .iter()
                    .map(|entry| {
                        json!({
                            "token": entry.token,
                            "fontFamily": entry.font_family,
                            "fontSize": entry.font_size_css(),
                            "fontWeight": entry.font_weight,
                            "lineHeight": entry.line_height_css(),
                            "letterSpacing": entry.letter_spacing,
                            "usage": entry.usage,
                        })
                    })
                    .collect::<Vec<_>>(),
            ),
        );
        doc.insert("spacing".into(), dimensions(registry.spacing));
        doc.insert("radius".into(), dimensions(registry.radius));
        doc.insert("sizing".into(), dimensions(registry.sizing));
        doc.insert(
            "opacity".into(),
            section(counts.opacity, "tokens", registry.opacity),
        );
        doc.insert("borderWidth".into(), dimensions(registry.border_width));
        doc.insert(
            "shadows".into(),
            section(
                counts.shadows,
                "tokens",
                &registry
                    .shadows
                    .iter()
                    .map(|shadow| with_css(shadow, shadow.css()))
                    .collect::<Vec<_>>(),
            ),
        );
        doc.insert(
            "gradients".into(),
            section(
                counts.gradients,
                "tokens",
                &registry
                    .gradients
                    .iter()
                    .map(|gradient| with_css(gradient, gradient.css()))
                    .collect::<Vec<_>>(),
            ),
        );
        doc.insert("grid".into(), section(counts.grid, "tokens", registry.grid));
        doc.insert(
            "cta".into(),
            json!({
                "count": counts.cta_sizes + counts.cta_variants,
                "sizes": registry.cta_sizes,
                "variants": registry.cta_variants,
            }),
        );
        doc.insert(
            "components".into(),
            section(counts.components, "categories", registry.components),
        );

        Document::Json(Value::Object(doc))
    }
}

fn section<T: Serialize + ?Sized>(count: usize, field: &str, items: &T) -> Value {
    let mut map = Map::new();
    map.insert("count".into(), json!(count));
    map.insert(field.into(), serde_json::to_value(items).unwrap_or(Value::Null));
    Value::Object(map)
}

fn dimensions(tokens: &[DimensionToken]) -> Value {
    let entries: Vec<_> = tokens
        .iter()
        .map(|entry| {
            json!({
                "token": entry.token,
                "value": entry.css(),
                "px": entry.px,
                "usage": entry.usage,
            })
        })
        .collect();
    section(tokens.len(), "tokens", &entries)
}

fn with_css<T: Serialize>(token: &T, css: String) -> Value {
    let mut value = serde_json::to_value(token).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        map.insert("css".into(), Value::String(css));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::{fixed_context, json};
    use crate::registry::registry;

    fn compile() -> Value {
        json(CompleteLibrary.compile(registry(), &fixed_context()))
    }

    #[test]
    fn section_counts_match_entry_lengths() {
        let doc = compile();
        for (section, field) in [
            ("semantic", "categories"),
            ("typography", "tokens"),
            ("spacing", "tokens"),
            ("radius", "tokens"),
            ("sizing", "tokens"),
            ("opacity", "tokens"),
            ("borderWidth", "tokens"),
            ("shadows", "tokens"),
            ("gradients", "tokens"),
            ("grid", "tokens"),
        ] {
            let entries = doc[section][field].as_array().expect(section);
            if section == "semantic" {
                let total: usize = entries
                    .iter()
                    .flat_map(|category| category["groups"].as_array().unwrap())
                    .map(|group| group["tokens"].as_array().unwrap().len())
                    .sum();
                assert_eq!(doc[section]["count"], total);
            } else {
                assert_eq!(doc[section]["count"], entries.len(), "{section}");
            }
        }
    }

    #[test]
    fn color_groups_keep_hex_strings_and_kind_tags() {
        let doc = compile();
        let blue = &doc["primitives"]["groups"][0];
        assert_eq!(blue["name"], "TP Blue");
        assert_eq!(blue["colors"][5]["token"], 500);
        assert_eq!(blue["colors"][5]["value"], "#4B4AD5");

        let functional = &doc["functional"]["groups"][0];
        assert_eq!(functional["subgroups"][0]["key"], "success");
        assert_eq!(doc["functional"]["count"], 40);
    }

    #[test]
    fn metadata_leads_the_document() {
        let doc = compile();
        let first_key = doc.as_object().unwrap().keys().next().cloned();
        assert_eq!(first_key.as_deref(), Some("metadata"));
        assert_eq!(doc["metadata"]["format"], "complete-library");
        assert_eq!(doc["metadata"]["tokenCounts"]["semantic"], 58);
    }

    #[test]
    fn shadows_and_gradients_carry_css() {
        let doc = compile();
        assert_eq!(doc["shadows"]["tokens"][0]["css"], "none");
        assert_eq!(
            doc["gradients"]["tokens"][0]["css"],
            "linear-gradient(135deg, #4B4AD5 0%, #8A4FE0 100%)"
        );
    }

    #[test]
    fn semantic_tokens_serialize_dotted_names_and_sources() {
        let doc = compile();
        let first = &doc["semantic"]["categories"][0]["groups"][0]["tokens"][0];
        assert_eq!(first["token"], "TP.text.primary");
        assert_eq!(first["source"], "tp-slate-900");
    }
}
