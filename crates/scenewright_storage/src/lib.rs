//! Project documents and generated scene persistence.
//!
//! - [`ProjectStore`] reads the style guide and canon notes into a
//!   [`ProjectContext`](scenewright_core::ProjectContext).
//! - [`OutputStore`] writes final scenes and timestamped reports.
//!
//! # Example
//!
//! ```rust,no_run
//! use scenewright_storage::{OutputStore, ProjectStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = ProjectStore::new("data").load_context().await?;
//! println!("Loaded {} documents", context.len());
//!
//! let path = OutputStore::new("output").save("Era uma vez...", None).await?;
//! println!("Saved to {}", path.display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod output;
mod project;
mod report;

pub use output::OutputStore;
pub use project::ProjectStore;
pub use report::SceneReport;
