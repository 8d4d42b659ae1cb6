use serde::Serialize;
use serde_json::{json, Value};

use super::catalog::{component_catalog, ComponentSpec};
use super::{Compiler, Document, ExportContext, ExportMetadata};
use crate::registry::Registry;

/// Component contract catalog. Shares the dispatcher but not the registry data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentSpecs;

const ID: &str = "component-specs";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogCounts {
    components: usize,
    categories: usize,
    props: usize,
    token_refs: usize,
}

impl CatalogCounts {
    fn of(catalog: &[ComponentSpec]) -> Self {
        let mut categories: Vec<_> = catalog.iter().map(|spec| spec.category).collect();
        categories.sort_unstable();
        categories.dedup();
        Self {
            components: catalog.len(),
            categories: categories.len(),
            props: catalog.iter().map(|spec| spec.props.len()).sum(),
            token_refs: catalog.iter().map(|spec| spec.token_refs.len()).sum(),
        }
    }
}

impl Compiler for ComponentSpecs {
    fn id(&self) -> &'static str {
        ID
    }

    fn label(&self) -> &'static str {
        "Component Specs"
    }

    fn compile(&self, _registry: &Registry, context: &ExportContext) -> Document {
        let catalog = component_catalog();
        Document::Json(json!({
            "metadata": ExportMetadata::new(context, ID, CatalogCounts::of(catalog)).to_value(),
            "components": catalog,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::{fixed_context, json};
    use crate::registry::registry;

    #[test]
    fn metadata_counts_components() {
        let doc = json(ComponentSpecs.compile(registry(), &fixed_context()));
        let components = doc["components"].as_array().expect("components");
        assert_eq!(doc["metadata"]["tokenCounts"]["components"], components.len());
        assert_eq!(doc["metadata"]["format"], "component-specs");
        assert_eq!(components[0]["name"], "Button");
        assert_eq!(components[0]["props"][0]["type"], "string");
        assert!(components[0]["tokenRefs"]
            .as_array()
            .unwrap()
            .contains(&Value::from("cta.radius")));
    }

    #[test]
    fn categories_are_counted_once() {
        let counts = CatalogCounts::of(component_catalog());
        assert_eq!(counts.categories, 7);
        assert!(counts.props >= counts.components);
    }
}
