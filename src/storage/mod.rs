use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::export::Document;

const PARTIAL_SUFFIX: &str = ".part";

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("file name `{0}` is not a plain file name")]
    InvalidFileName(String),
    #[error("failed to render document: {0}")]
    Render(#[from] serde_json::Error),
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type SinkResult<T> = std::result::Result<T, SinkError>;

/// What a sink did with one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedExport {
    pub file_name: String,
    /// `None` when the document did not land on disk (stdout, memory).
    pub path: Option<PathBuf>,
    pub bytes: usize,
}

/// Terminal side effect of an export.
pub trait DownloadSink {
    fn save(&self, file_name: &str, document: &Document) -> SinkResult<SavedExport>;
}

#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn target_path(&self, file_name: &str) -> SinkResult<PathBuf> {
        validate_file_name(file_name)?;
        Ok(self.dir.join(file_name))
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, file_name: &str, document: &Document) -> SinkResult<SavedExport> {
        let target = self.target_path(file_name)?;
        let rendered = document.render()?;

        fs::create_dir_all(&self.dir).map_err(|source| SinkError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let partial = self.dir.join(format!(".{file_name}{PARTIAL_SUFFIX}"));
        write_then_rename(&partial, &target, rendered.as_bytes())?;

        tracing::debug!(path = %target.display(), bytes = rendered.len(), "wrote export");
        Ok(SavedExport {
            file_name: file_name.to_string(),
            path: Some(target),
            bytes: rendered.len(),
        })
    }
}

fn write_then_rename(partial: &Path, target: &Path, bytes: &[u8]) -> SinkResult<()> {
    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source: io::Error| SinkError::Io { path, source }
    };

    fs::write(partial, bytes).map_err(io_error(partial))?;
    if let Err(err) = fs::rename(partial, target) {
        let _ = fs::remove_file(partial);
        return Err(io_error(target)(err));
    }
    Ok(())
}

fn validate_file_name(file_name: &str) -> SinkResult<()> {
    let plain = !file_name.is_empty()
        && file_name != "."
        && file_name != ".."
        && !file_name.contains(['/', '\\', '\0']);
    if plain {
        Ok(())
    } else {
        Err(SinkError::InvalidFileName(file_name.to_string()))
    }
}

/// Writes the rendered document to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DownloadSink for StdoutSink {
    fn save(&self, file_name: &str, document: &Document) -> SinkResult<SavedExport> {
        validate_file_name(file_name)?;
        let rendered = document.render()?;
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|source| SinkError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        Ok(SavedExport {
            file_name: file_name.to_string(),
            path: None,
            bytes: rendered.len(),
        })
    }
}

/// Keeps rendered documents keyed by file name; later saves replace earlier ones.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: RefCell<Vec<(String, String)>>,
}

impl MemorySink {
    pub fn get(&self, file_name: &str) -> Option<String> {
        self.files
            .borrow()
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, contents)| contents.clone())
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.borrow().iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl DownloadSink for MemorySink {
    fn save(&self, file_name: &str, document: &Document) -> SinkResult<SavedExport> {
        validate_file_name(file_name)?;
        let rendered = document.render()?;
        let bytes = rendered.len();

        let mut files = self.files.borrow_mut();
        match files.iter_mut().find(|(name, _)| name == file_name) {
            Some((_, contents)) => *contents = rendered,
            None => files.push((file_name.to_string(), rendered)),
        }

        Ok(SavedExport {
            file_name: file_name.to_string(),
            path: None,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn with_temp_dir<T>(f: impl FnOnce(&Path) -> T) -> T {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "tatva-tokens-sink-test-{}-{nanos}",
            std::process::id()
        ));
        let result = f(&dir);
        let _ = fs::remove_dir_all(&dir);
        result
    }

    #[test]
    fn directory_sink_creates_missing_directories() {
        with_temp_dir(|root| {
            let sink = DirectorySink::new(root.join("nested/out"));
            let document = Document::Json(json!({ "b": 1, "a": [true] }));
            let saved = sink.save("tokens.json", &document).unwrap();

            let path = saved.path.clone().unwrap();
            assert_eq!(path, root.join("nested/out/tokens.json"));
            let written = fs::read_to_string(&path).unwrap();
            assert_eq!(written, document.render().unwrap());
            assert_eq!(saved.bytes, written.len());
            assert!(!root.join("nested/out/.tokens.json.part").exists());
        });
    }

    #[test]
    fn directory_sink_overwrites_previous_export() {
        with_temp_dir(|root| {
            let sink = DirectorySink::new(root);
            sink.save("preview.html", &Document::Html("<p>old</p>".into()))
                .unwrap();
            sink.save("preview.html", &Document::Html("<p>new</p>".into()))
                .unwrap();
            assert_eq!(
                fs::read_to_string(root.join("preview.html")).unwrap(),
                "<p>new</p>"
            );
        });
    }

    #[test]
    fn rejects_paths_posing_as_file_names() {
        let sink = MemorySink::default();
        let document = Document::Html(String::new());
        for name in ["", ".", "..", "../escape.json", "dir/file.json", "a\\b"] {
            assert!(
                matches!(
                    sink.save(name, &document),
                    Err(SinkError::InvalidFileName(_))
                ),
                "{name:?}"
            );
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn memory_sink_replaces_documents_with_the_same_name() {
        let sink = MemorySink::default();
        sink.save("a.json", &Document::Json(json!(1))).unwrap();
        sink.save("b.json", &Document::Json(json!(2))).unwrap();
        sink.save("a.json", &Document::Json(json!(3))).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.file_names(), vec!["a.json", "b.json"]);
        assert_eq!(sink.get("a.json").as_deref(), Some("3\n"));
        assert_eq!(sink.get("missing.json"), None);
    }
}
