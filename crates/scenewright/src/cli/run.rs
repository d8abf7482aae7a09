//! Scene generation command handler.

use scenewright::{
    Brief, OllamaClient, OutputStore, PipelineError, PipelineErrorKind, ProjectStore,
    SceneOutcome, ScenePipeline, SceneReport, ScenewrightConfig, ScenewrightResult, Writer,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// What the run command shows and saves besides the final scene.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    output: Option<PathBuf>,
    report: bool,
    show_plan: bool,
    show_draft: bool,
}

impl RunOptions {
    /// Create run options.
    pub fn new(output: Option<PathBuf>, report: bool, show_plan: bool, show_draft: bool) -> Self {
        Self {
            output,
            report,
            show_plan,
            show_draft,
        }
    }

    /// Explicit output path for the final scene.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

/// Generate, print and save a scene for `brief`.
#[instrument(skip(config, brief, options), fields(brief_length = brief.len()))]
pub async fn run_scene(
    config: &ScenewrightConfig,
    brief: &str,
    options: &RunOptions,
) -> ScenewrightResult<()> {
    let brief = Brief::new(brief);
    if brief.is_blank() {
        return Err(PipelineError::new(PipelineErrorKind::EmptyBrief).into());
    }

    let project = ProjectStore::new(&config.project.data_dir);
    let context = project.load_context().await?;
    debug!(data_dir = %project.data_dir().display(), "Project data directory");

    let client = OllamaClient::from_config(config)?;
    let writer = Writer::connect(client, config.generation.clone()).await;
    let pipeline = ScenePipeline::new(writer, context);

    info!(documents = pipeline.context().len(), "Loaded project context");
    if pipeline.writer().is_fallback() {
        warn!(
            model = %config.provider.model,
            "Ollama unavailable, scenes will be assembled from fallback templates"
        );
    }

    let outcome = pipeline.process(&brief).await;

    print_outcome(&outcome, options);

    let store = OutputStore::new(&config.project.output_dir);
    debug!(output_dir = %store.output_dir().display(), "Output directory");
    let path = store
        .save(outcome.final_content().as_str(), options.output())
        .await?;
    println!("Scene saved to {}", path.display());

    if options.report {
        let mut report = SceneReport::new(
            &brief,
            outcome.plan(),
            outcome.draft(),
            outcome.final_content(),
        );
        if !options.show_plan {
            report = report.without_plan();
        }
        if !options.show_draft {
            report = report.without_draft();
        }
        let report_path = store.save_report(&report).await?;
        println!("Report saved to {}", report_path.display());
    }

    Ok(())
}

fn print_outcome(outcome: &SceneOutcome, options: &RunOptions) {
    if options.show_plan {
        println!("\nScene Plan:");
        println!("===========");
        println!("{}", outcome.plan());
    }

    if options.show_draft {
        println!("\nFirst Draft ({}):", outcome.draft().source());
        println!("============");
        println!("{}", outcome.draft().text());
    }

    println!("\nFinal Scene:");
    println!("============");
    println!("{}", outcome.final_content());
    println!();
}
