use serde::Serialize;
use serde_json::{json, Value};

use super::{registry_metadata, Compiler, Document, ExportContext};
use crate::color::hex_to_rgb_normalized;
use crate::registry::{DimensionToken, Registry};

/// Figma Variables REST shape: flat collection and variable arrays, one
/// "Light" mode per collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct FigmaVariables;

const ID: &str = "figma-variables";
const MODE_NAME: &str = "Light";
const ALL_SCOPES: &str = "ALL_SCOPES";

impl Compiler for FigmaVariables {
    fn id(&self) -> &'static str {
        ID
    }

    fn label(&self) -> &'static str {
        "Figma Variables"
    }

    fn compile(&self, registry: &Registry, context: &ExportContext) -> Document {
        let mut builder = Builder::default();

        let primitives = builder.collection("Primitives");
        for scale in registry.color_scales() {
            for entry in scale.colors {
                let token = entry.token.to_string();
                builder.variable(
                    &primitives,
                    format!("{}/{token}", scale.name),
                    ResolvedType::Color,
                    entry.usage.unwrap_or(scale.description),
                    color_value(entry.value),
                    format!("{}:{token}", scale.slug),
                );
            }
        }

        let semantic = builder.collection("Semantic");
        for (_, _, token) in registry.semantic_tokens() {
            builder.variable(
                &semantic,
                token.token.joined("/"),
                ResolvedType::Color,
                token.usage,
                color_value(token.value),
                format!("semantic:{}", token.token.slug()),
            );
        }

        for (name, group, tokens) in [
            ("Spacing", "spacing", registry.spacing),
            ("Radius", "radius", registry.radius),
            ("Sizing", "sizing", registry.sizing),
        ] {
            let collection = builder.collection(name);
            builder.dimensions(&collection, name, group, tokens);
        }

        Document::Json(json!({
            "variableCollections": builder.collections,
            "variables": builder.variables,
            "metadata": registry_metadata(registry, context, ID),
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum ResolvedType {
    Color,
    Float,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Mode {
    mode_id: String,
    name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Collection {
    id: String,
    name: &'static str,
    modes: Vec<Mode>,
    default_mode_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Variable {
    id: String,
    name: String,
    resolved_type: ResolvedType,
    description: String,
    values_by_mode: serde_json::Map<String, Value>,
    scopes: [&'static str; 1],
    collection_id: String,
    extensions: Extensions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Extensions {
    custom_id: String,
}

/// Hands out sequential `collection-{n}`, `mode-{n}` and `var-{n}` ids.
#[derive(Debug, Default)]
struct Builder {
    collections: Vec<Collection>,
    variables: Vec<Variable>,
}

impl Builder {
    fn collection(&mut self, name: &'static str) -> CollectionHandle {
        let n = self.collections.len() + 1;
        let mode_id = format!("mode-{n}");
        let collection = Collection {
            id: format!("collection-{n}"),
            name,
            modes: vec![Mode {
                mode_id: mode_id.clone(),
                name: MODE_NAME,
            }],
            default_mode_id: mode_id.clone(),
        };
        let handle = CollectionHandle {
            id: collection.id.clone(),
            mode_id,
        };
        self.collections.push(collection);
        handle
    }

    fn variable(
        &mut self,
        collection: &CollectionHandle,
        name: String,
        resolved_type: ResolvedType,
        description: &str,
        value: Value,
        custom_id: String,
    ) {
        let mut values_by_mode = serde_json::Map::new();
        values_by_mode.insert(collection.mode_id.clone(), value);
        self.variables.push(Variable {
            id: format!("var-{}", self.variables.len() + 1),
            name,
            resolved_type,
            description: description.to_string(),
            values_by_mode,
            scopes: [ALL_SCOPES],
            collection_id: collection.id.clone(),
            extensions: Extensions {
                custom_id: format!("VariableID:custom:{custom_id}"),
            },
        });
    }

    fn dimensions(
        &mut self,
        collection: &CollectionHandle,
        name: &str,
        group: &str,
        tokens: &[DimensionToken],
    ) {
        for entry in tokens {
            self.variable(
                collection,
                format!("{name}/{}", entry.token),
                ResolvedType::Float,
                entry.usage,
                json!(entry.px),
                format!("{group}:{}", entry.token),
            );
        }
    }
}

struct CollectionHandle {
    id: String,
    mode_id: String,
}

fn color_value(hex: &str) -> Value {
    json!(hex_to_rgb_normalized(hex).with_alpha(1.0))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::export::test_support::{fixed_context, json};
    use crate::registry::registry;

    fn compile() -> Value {
        json(FigmaVariables.compile(registry(), &fixed_context()))
    }

    fn variables(doc: &Value) -> &Vec<Value> {
        doc["variables"].as_array().expect("variables array")
    }

    #[test]
    fn variable_count_covers_colors_dimensions_and_semantic() {
        let registry = registry();
        let counts = registry.counts();
        let doc = compile();
        assert_eq!(
            variables(&doc).len(),
            counts.primitive_colors
                + counts.functional_colors
                + counts.spacing
                + counts.radius
                + counts.sizing
                + counts.semantic
        );
    }

    #[test]
    fn ids_and_custom_ids_are_unique() {
        let doc = compile();
        let vars = variables(&doc);
        let ids: HashSet<_> = vars.iter().map(|v| v["id"].as_str().unwrap()).collect();
        let custom: HashSet<_> = vars
            .iter()
            .map(|v| v["extensions"]["customId"].as_str().unwrap())
            .collect();
        assert_eq!(ids.len(), vars.len());
        assert_eq!(custom.len(), vars.len());
    }

    #[test]
    fn colors_are_normalized_floats_never_hex() {
        let doc = compile();
        let blue = variables(&doc)
            .iter()
            .find(|v| v["name"] == "TP Blue/500")
            .expect("TP Blue/500");
        assert_eq!(blue["resolvedType"], "COLOR");
        assert_eq!(blue["scopes"], json!(["ALL_SCOPES"]));
        assert_eq!(
            blue["extensions"]["customId"],
            "VariableID:custom:tp-blue:500"
        );

        let mode = blue["collectionId"].as_str().unwrap().replace("collection", "mode");
        let value = &blue["valuesByMode"][mode.as_str()];
        assert!((value["r"].as_f64().unwrap() - 75.0 / 255.0).abs() < 1e-9);
        assert_eq!(value["a"], 1.0);
        assert!(!value.is_string());
    }

    #[test]
    fn dimensions_are_float_variables() {
        let doc = compile();
        let spacing = variables(&doc)
            .iter()
            .find(|v| v["name"] == "Spacing/4")
            .expect("Spacing/4");
        assert_eq!(spacing["resolvedType"], "FLOAT");
        let mode_value = spacing["valuesByMode"]
            .as_object()
            .and_then(|modes| modes.values().next())
            .cloned();
        assert_eq!(mode_value, Some(json!(16.0)));
    }

    #[test]
    fn collections_declare_a_single_light_mode() {
        let doc = compile();
        let collections = doc["variableCollections"].as_array().unwrap();
        let names: Vec<_> = collections.iter().map(|c| c["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Primitives", "Semantic", "Spacing", "Radius", "Sizing"]);
        for collection in collections {
            let modes = collection["modes"].as_array().unwrap();
            assert_eq!(modes.len(), 1);
            assert_eq!(modes[0]["name"], "Light");
            assert_eq!(modes[0]["modeId"], collection["defaultModeId"]);
        }
    }

    #[test]
    fn semantic_names_use_slash_separated_segments() {
        let doc = compile();
        let primary = variables(&doc)
            .iter()
            .find(|v| v["name"] == "TP/text/primary")
            .expect("semantic text primary");
        assert_eq!(
            primary["extensions"]["customId"],
            "VariableID:custom:semantic:TP-text-primary"
        );
    }
}
