//! Project document loading.

use scenewright_core::ProjectContext;
use scenewright_error::{ScenewrightResult, StorageError, StorageErrorKind};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Reads project documents from a data directory.
///
/// Layout:
///
/// ```text
/// data/
/// ├── style_guide.md
/// └── canon/
///     ├── characters.md
///     ├── world.md
///     └── timeline.md
/// ```
///
/// Every `canon/*.md` file becomes a document named after its file stem.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    data_dir: PathBuf,
}

impl ProjectStore {
    /// Create a store rooted at `data_dir`. Nothing is read until
    /// [`load_context`](Self::load_context).
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Root of the project data.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the style guide and canon notes.
    ///
    /// Missing files and directories yield an empty context.
    ///
    /// # Errors
    ///
    /// Returns an error if a document exists but cannot be read.
    #[instrument(skip(self), fields(data_dir = %self.data_dir.display()))]
    pub async fn load_context(&self) -> ScenewrightResult<ProjectContext> {
        let mut context = ProjectContext::default();

        let style_guide = self.data_dir.join("style_guide.md");
        if let Some(text) = read_optional(&style_guide).await? {
            context.insert(ProjectContext::STYLE_GUIDE, text);
        }

        let canon_dir = self.data_dir.join("canon");
        let mut entries = match tokio::fs::read_dir(&canon_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %canon_dir.display(), "No canon directory");
                info!(documents = context.len(), "Loaded project context");
                return Ok(context);
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    canon_dir.display(),
                    e
                )))
                .into());
            }
        };

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                canon_dir.display(),
                e
            )))
        })? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if let Some(text) = read_optional(&path).await? {
                debug!(document = name, bytes = text.len(), "Loaded canon document");
                context.insert(name.to_string(), text);
            }
        }

        info!(documents = context.len(), "Loaded project context");
        Ok(context)
    }
}

async fn read_optional(path: &Path) -> ScenewrightResult<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()),
    }
}
