//! Format compilers and the dispatcher that routes a format id to one of them.
//!
//! Every compiler is a pure function of the [`Registry`] and an
//! [`ExportContext`]; the only side effect in the pipeline is the final
//! [`DownloadSink`](crate::storage::DownloadSink) write.

mod catalog;
mod complete_library;
mod component_specs;
mod dispatch;
mod figma_pack;
mod figma_variables;
mod html_preview;
mod style_dictionary;
mod tokens_studio;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::registry::{Registry, SYSTEM_NAME, SYSTEM_SLUG, SYSTEM_VERSION};
use crate::storage::SinkError;

pub use catalog::{component_catalog, ComponentSpec, PropSpec};
pub use complete_library::CompleteLibrary;
pub use component_specs::ComponentSpecs;
pub use dispatch::{
    compiler, compilers, dispatch, export_all, export_component_specs, export_figma_html,
    export_figma_tokens, export_for_figma, format_ids, FigmaFormat,
};
pub use figma_pack::{FigmaTokenPack, LEGACY_PACK_FILE_NAME};
pub use figma_variables::FigmaVariables;
pub use html_preview::HtmlPreview;
pub use style_dictionary::StyleDictionary;
pub use tokens_studio::TokensStudio;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unknown export format `{id}` (known formats: {known})")]
    UnknownFormat { id: String, known: String },
    #[error("failed to save {file_name}")]
    Sink {
        file_name: String,
        #[source]
        source: SinkError,
    },
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// A compiled, self-contained export.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(Value),
    Html(String),
}

impl Document {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Html(_) => None,
        }
    }

    pub fn as_html(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Html(html) => Some(html),
        }
    }

    pub const fn media_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Html(_) => "text/html",
        }
    }

    /// Pretty JSON with insertion-ordered keys, or the raw HTML.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Json(value) => {
                let mut rendered = serde_json::to_string_pretty(value)?;
                rendered.push('\n');
                Ok(rendered)
            }
            Self::Html(html) => Ok(html.clone()),
        }
    }
}

/// Per-invocation inputs that are not part of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportContext {
    pub system_name: &'static str,
    pub system_slug: &'static str,
    pub version: &'static str,
    pub exported_at: DateTime<Utc>,
}

impl ExportContext {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(exported_at: DateTime<Utc>) -> Self {
        Self {
            system_name: SYSTEM_NAME,
            system_slug: SYSTEM_SLUG,
            version: SYSTEM_VERSION,
            exported_at,
        }
    }

    pub fn exported_at_rfc3339(&self) -> String {
        self.exported_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// `<system>-<format>-v<version>.<extension>`
    pub fn versioned_file_name(&self, format: &str, extension: &str) -> String {
        format!(
            "{}-{format}-v{}.{extension}",
            self.system_slug, self.version
        )
    }
}

impl Default for ExportContext {
    fn default() -> Self {
        Self::now()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata<C: Serialize> {
    pub name: &'static str,
    pub version: &'static str,
    pub exported_at: String,
    pub format: &'static str,
    pub token_counts: C,
}

impl<C: Serialize> ExportMetadata<C> {
    pub fn new(context: &ExportContext, format: &'static str, token_counts: C) -> Self {
        Self {
            name: context.system_name,
            version: context.version,
            exported_at: context.exported_at_rfc3339(),
            format,
            token_counts,
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Metadata block carrying the registry-wide token counts.
pub fn registry_metadata(
    registry: &Registry,
    context: &ExportContext,
    format: &'static str,
) -> Value {
    ExportMetadata::new(context, format, registry.counts()).to_value()
}

/// One target schema.
pub trait Compiler: Send + Sync {
    /// Stable format id used by the dispatcher (e.g. `"style-dictionary"`).
    fn id(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn extension(&self) -> &'static str {
        "json"
    }

    fn file_name(&self, context: &ExportContext) -> String {
        context.versioned_file_name(self.id(), self.extension())
    }

    fn compile(&self, registry: &Registry, context: &ExportContext) -> Document;
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::TimeZone;
    use serde_json::Value;

    use super::*;

    pub(crate) fn fixed_context() -> ExportContext {
        ExportContext::at(
            Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
                .single()
                .expect("valid timestamp"),
        )
    }

    /// Removes every `exportedAt` field so two compilations can be compared.
    pub(crate) fn strip_exported_at(value: &mut Value) {
        match value {
            Value::Object(map) => {
                map.remove("exportedAt");
                for child in map.values_mut() {
                    strip_exported_at(child);
                }
            }
            Value::Array(items) => {
                for child in items {
                    strip_exported_at(child);
                }
            }
            _ => {}
        }
    }

    pub(crate) fn json(document: Document) -> Value {
        document.as_json().cloned().expect("expected a JSON document")
    }
}
