//! Generated scene persistence.

use crate::SceneReport;
use chrono::Local;
use scenewright_error::{ScenewrightResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Default file name for a saved scene.
const DEFAULT_SCENE_FILE: &str = "generated_scene.md";

/// Writes scenes under an output directory.
#[derive(Debug, Clone)]
pub struct OutputStore {
    output_dir: PathBuf,
}

impl OutputStore {
    /// Create a store rooted at `output_dir`. The directory is created on first write.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Root of the saved scenes.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `content` to `explicit_path`, or to `{output_dir}/generated_scene.md`.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit_path` does not name a file, or if the
    /// parent directory cannot be created or the file cannot be written.
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    pub async fn save(
        &self,
        content: &str,
        explicit_path: Option<&Path>,
    ) -> ScenewrightResult<PathBuf> {
        let path = match explicit_path {
            Some(path) if path.file_name().is_none() => {
                return Err(StorageError::new(StorageErrorKind::InvalidPath(format!(
                    "{}: not a file path",
                    path.display()
                )))
                .into());
            }
            Some(path) => path.to_path_buf(),
            None => self.output_dir.join(DEFAULT_SCENE_FILE),
        };
        write_file(&path, content).await?;
        info!(path = %path.display(), "Saved scene");
        Ok(path)
    }

    /// Write a timestamped `scene_YYYYMMDD_HHMMSS.md` report.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    #[instrument(skip(self, report))]
    pub async fn save_report(&self, report: &SceneReport<'_>) -> ScenewrightResult<PathBuf> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = self.output_dir.join(format!("scene_{}.md", stamp));
        write_file(&path, &report.render()).await?;
        info!(path = %path.display(), "Saved scene report");
        Ok(path)
    }
}

async fn write_file(path: &Path, content: &str) -> ScenewrightResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    tokio::fs::write(path, content).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    Ok(())
}
