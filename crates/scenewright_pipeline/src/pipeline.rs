//! Brief-to-scene orchestration.

use crate::{Editor, Planner, Writer};
use scenewright_core::{Brief, FinalContent, ProjectContext, SceneContent, ScenePlan};
use scenewright_interface::Health;
use tracing::{info, instrument};

/// Everything a single pipeline run produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct SceneOutcome {
    /// Structured outline
    plan: ScenePlan,
    /// First draft
    draft: SceneContent,
    /// Edited scene
    final_content: FinalContent,
}

/// Runs plan, write and edit in sequence.
///
/// Each call to [`process`](Self::process) is self-contained; the pipeline
/// holds no state that changes between calls.
#[derive(Debug)]
pub struct ScenePipeline<G> {
    planner: Planner,
    writer: Writer<G>,
    editor: Editor,
    context: ProjectContext,
}

impl<G: Health> ScenePipeline<G> {
    /// Create a pipeline around a writer and the project documents.
    pub fn new(writer: Writer<G>, context: ProjectContext) -> Self {
        Self {
            planner: Planner::new(),
            writer,
            editor: Editor::new(),
            context,
        }
    }

    /// The writer used for drafts.
    pub fn writer(&self) -> &Writer<G> {
        &self.writer
    }

    /// Project documents passed to the writer.
    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// Turn a brief into a plan, a draft and the final scene.
    #[instrument(skip_all, fields(brief_length = brief.as_str().len()))]
    pub async fn process(&self, brief: &Brief) -> SceneOutcome {
        info!("Planning scene");
        let plan = self.planner.plan(brief);

        info!("Writing draft");
        let draft = self.writer.write(brief, &plan, &self.context).await;

        info!(source = %draft.source(), "Editing draft");
        let final_content = self.editor.edit(&draft, brief, &plan);

        info!(final_length = final_content.as_str().len(), "Scene complete");
        SceneOutcome {
            plan,
            draft,
            final_content,
        }
    }
}
