//! Markdown report bundling every stage of one run.

use scenewright_core::{Brief, FinalContent, SceneContent, ScenePlan};

/// Everything a run produced, rendered as one markdown document.
///
/// # Examples
///
/// ```
/// use scenewright_core::{Brief, DraftSource, FinalContent, SceneContent, ScenePlan};
/// use scenewright_storage::SceneReport;
///
/// let brief = Brief::from("Uma cena na biblioteca.");
/// let plan = ScenePlan::new("## ESTRUTURA DA CENA");
/// let draft = SceneContent::new("Rascunho.", DraftSource::Fallback);
/// let final_content = FinalContent::new("Versão final.");
///
/// let report = SceneReport::new(&brief, &plan, &draft, &final_content).without_draft();
/// let text = report.render();
///
/// assert!(text.starts_with("# Cena Gerada"));
/// assert!(text.contains("## Plano da Cena"));
/// assert!(!text.contains("## Primeira Versão"));
/// ```
#[derive(Debug, Clone)]
pub struct SceneReport<'a> {
    /// Brief the scene was written from
    brief: &'a Brief,
    /// Outline
    plan: &'a ScenePlan,
    /// Draft before editing
    draft: &'a SceneContent,
    /// Edited scene
    final_content: &'a FinalContent,
    /// Whether the outline section is rendered
    include_plan: bool,
    /// Whether the draft section is rendered
    include_draft: bool,
}

impl<'a> SceneReport<'a> {
    /// Report with every section included.
    pub fn new(
        brief: &'a Brief,
        plan: &'a ScenePlan,
        draft: &'a SceneContent,
        final_content: &'a FinalContent,
    ) -> Self {
        Self {
            brief,
            plan,
            draft,
            final_content,
            include_plan: true,
            include_draft: true,
        }
    }

    /// Drop the outline section.
    pub fn without_plan(mut self) -> Self {
        self.include_plan = false;
        self
    }

    /// Drop the draft section.
    pub fn without_draft(mut self) -> Self {
        self.include_draft = false;
        self
    }

    /// Render the markdown document.
    pub fn render(&self) -> String {
        let mut out = format!("# Cena Gerada\n\n**Brief:** {}\n\n", self.brief);
        if self.include_plan {
            out.push_str(&format!("## Plano da Cena\n\n{}\n\n", self.plan));
        }
        if self.include_draft {
            out.push_str(&format!("## Primeira Versão\n\n{}\n\n", self.draft.text()));
        }
        out.push_str(&format!("## Versão Final\n\n{}\n", self.final_content));
        out
    }
}
