use std::fmt;
use std::str::FromStr;

use super::{
    CompleteLibrary, Compiler, ComponentSpecs, ExportContext, ExportError, ExportResult,
    FigmaTokenPack, FigmaVariables, HtmlPreview, StyleDictionary, TokensStudio,
};
use crate::registry::{registry, Registry};
use crate::storage::{DownloadSink, SavedExport};

static COMPILERS: &[&dyn Compiler] = &[
    &CompleteLibrary,
    &TokensStudio,
    &FigmaVariables,
    &StyleDictionary,
    &FigmaTokenPack,
    &ComponentSpecs,
    &HtmlPreview,
];

/// Every registered compiler, in menu order.
pub fn compilers() -> &'static [&'static dyn Compiler] {
    COMPILERS
}

pub fn format_ids() -> Vec<&'static str> {
    COMPILERS.iter().map(|compiler| compiler.id()).collect()
}

pub fn compiler(format_id: &str) -> ExportResult<&'static dyn Compiler> {
    COMPILERS
        .iter()
        .copied()
        .find(|compiler| compiler.id() == format_id)
        .ok_or_else(|| ExportError::UnknownFormat {
            id: format_id.to_string(),
            known: format_ids().join(", "),
        })
}

/// Compiles `format_id` and hands the document to `sink`.
pub fn dispatch(
    format_id: &str,
    registry: &Registry,
    context: &ExportContext,
    sink: &dyn DownloadSink,
) -> ExportResult<SavedExport> {
    let compiler = compiler(format_id)?;
    tracing::debug!(format = compiler.id(), "compiling export");

    let document = compiler.compile(registry, context);
    let file_name = compiler.file_name(context);
    let saved = sink
        .save(&file_name, &document)
        .map_err(|source| ExportError::Sink {
            file_name: file_name.clone(),
            source,
        })?;

    tracing::info!(
        format = compiler.id(),
        file = %saved.file_name,
        path = ?saved.path,
        bytes = saved.bytes,
        "saved export"
    );
    Ok(saved)
}

/// Runs every registered compiler; stops at the first sink failure.
pub fn export_all(
    registry: &Registry,
    context: &ExportContext,
    sink: &dyn DownloadSink,
) -> ExportResult<Vec<SavedExport>> {
    COMPILERS
        .iter()
        .map(|compiler| dispatch(compiler.id(), registry, context, sink))
        .collect()
}

/// The four formats offered by the Figma export menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigmaFormat {
    CompleteLibrary,
    TokensStudio,
    FigmaVariables,
    StyleDictionary,
}

impl FigmaFormat {
    pub const ALL: [Self; 4] = [
        Self::CompleteLibrary,
        Self::TokensStudio,
        Self::FigmaVariables,
        Self::StyleDictionary,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::CompleteLibrary => "complete-library",
            Self::TokensStudio => "tokens-studio",
            Self::FigmaVariables => "figma-variables",
            Self::StyleDictionary => "style-dictionary",
        }
    }
}

impl fmt::Display for FigmaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FigmaFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.id() == value)
            .ok_or_else(|| ExportError::UnknownFormat {
                id: value.to_string(),
                known: Self::ALL.map(Self::id).join(", "),
            })
    }
}

pub fn export_for_figma(format: FigmaFormat, sink: &dyn DownloadSink) -> ExportResult<SavedExport> {
    dispatch(format.id(), registry(), &ExportContext::now(), sink)
}

/// Legacy single-file pack under its fixed name.
pub fn export_figma_tokens(sink: &dyn DownloadSink) -> ExportResult<SavedExport> {
    dispatch(FigmaTokenPack.id(), registry(), &ExportContext::now(), sink)
}

pub fn export_component_specs(sink: &dyn DownloadSink) -> ExportResult<SavedExport> {
    dispatch(ComponentSpecs.id(), registry(), &ExportContext::now(), sink)
}

pub fn export_figma_html(sink: &dyn DownloadSink) -> ExportResult<SavedExport> {
    dispatch(HtmlPreview.id(), registry(), &ExportContext::now(), sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::fixed_context;
    use crate::storage::MemorySink;

    #[test]
    fn unknown_format_is_an_error_not_a_no_op() {
        let sink = MemorySink::default();
        let err = dispatch("sketch", registry(), &fixed_context(), &sink)
            .expect_err("unknown format");
        match err {
            ExportError::UnknownFormat { id, known } => {
                assert_eq!(id, "sketch");
                assert!(known.contains("style-dictionary"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn dispatch_saves_under_versioned_name() {
        let sink = MemorySink::default();
        let saved = dispatch("style-dictionary", registry(), &fixed_context(), &sink)
            .expect("export succeeds");
        assert_eq!(saved.file_name, "tatva-practice-style-dictionary-v2.2.0.json");
        assert!(saved.bytes > 0);

        let stored = sink.get(&saved.file_name).expect("stored document");
        assert!(stored.starts_with('{'));
        assert!(stored.contains("\"#4B4AD5\""));
    }

    #[test]
    fn legacy_and_html_exports_use_their_own_names() {
        let sink = MemorySink::default();
        assert_eq!(
            export_figma_tokens(&sink).unwrap().file_name,
            "tatva_practice_tokens.json"
        );
        let html = export_figma_html(&sink).unwrap();
        assert!(html.file_name.ends_with(".html"));
        assert!(sink.get(&html.file_name).unwrap().starts_with("<!DOCTYPE html>"));
        assert!(export_component_specs(&sink)
            .unwrap()
            .file_name
            .contains("-component-specs-v"));
    }

    #[test]
    fn figma_formats_parse_from_ids() {
        for format in FigmaFormat::ALL {
            assert_eq!(format.id().parse::<FigmaFormat>().unwrap(), format);
            assert!(compiler(format.id()).is_ok());
        }
        assert!("figma-tokens".parse::<FigmaFormat>().is_err());

        let sink = MemorySink::default();
        let saved = export_for_figma(FigmaFormat::TokensStudio, &sink).unwrap();
        assert!(saved.file_name.contains("tokens-studio"));
    }

    #[test]
    fn export_all_writes_one_file_per_compiler() {
        let sink = MemorySink::default();
        let saved = export_all(registry(), &fixed_context(), &sink).expect("all exports");
        assert_eq!(saved.len(), compilers().len());
        assert_eq!(sink.len(), compilers().len());
    }
}
