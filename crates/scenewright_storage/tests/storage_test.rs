//! Tests for project loading and scene persistence.

use scenewright_core::{Brief, DraftSource, FinalContent, ProjectContext, SceneContent, ScenePlan};
use scenewright_error::{ScenewrightErrorKind, StorageErrorKind};
use scenewright_storage::{OutputStore, ProjectStore, SceneReport};
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_data_dir_yields_empty_context() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path().join("nope"));

    let context = store.load_context().await.unwrap();

    assert!(context.is_empty());
    assert_eq!(context.style_guide(), "");
}

#[tokio::test]
async fn test_loads_style_guide_and_canon_by_stem() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path();
    std::fs::create_dir_all(data.join("canon")).unwrap();
    std::fs::write(data.join("style_guide.md"), "Frases curtas.").unwrap();
    std::fs::write(data.join("canon/characters.md"), "Ivana: detetive.").unwrap();
    std::fs::write(data.join("canon/world.md"), "São Paulo, 2031.").unwrap();
    std::fs::write(data.join("canon/notes.txt"), "ignored").unwrap();

    let context = ProjectStore::new(data).load_context().await.unwrap();

    assert_eq!(context.len(), 3);
    assert_eq!(context.style_guide(), "Frases curtas.");
    assert_eq!(context.characters(), "Ivana: detetive.");
    assert_eq!(context.world(), "São Paulo, 2031.");
    assert_eq!(context.timeline(), "");
    assert_eq!(context.document("notes"), "");
    assert!(context.names().any(|n| n == ProjectContext::WORLD));
}

#[tokio::test]
async fn test_save_defaults_to_generated_scene_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = OutputStore::new(temp_dir.path().join("output"));

    let path = store.save("Era uma vez.", None).await.unwrap();

    assert!(path.ends_with("output/generated_scene.md"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "Era uma vez.");
}

#[tokio::test]
async fn test_save_honours_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let store = OutputStore::new(temp_dir.path().join("output"));
    let target = temp_dir.path().join("chapters/one.md");

    let path = store.save("Capítulo um.", Some(&target)).await.unwrap();

    assert_eq!(path, target);
    assert_eq!(std::fs::read_to_string(target).unwrap(), "Capítulo um.");
}

#[tokio::test]
async fn test_save_rejects_path_without_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let store = OutputStore::new(temp_dir.path().join("output"));
    let target = temp_dir.path().join("chapters").join("..");

    let err = store.save("Capítulo um.", Some(&target)).await.unwrap_err();

    match err.kind() {
        ScenewrightErrorKind::Storage(storage) => {
            assert!(matches!(storage.kind, StorageErrorKind::InvalidPath(_)));
        }
        other => panic!("unexpected error kind: {other}"),
    }
    assert!(!store.output_dir().exists());
}

#[test]
fn test_stores_report_their_roots() {
    assert_eq!(
        ProjectStore::new("data").data_dir(),
        std::path::Path::new("data")
    );
    assert_eq!(
        OutputStore::new("output").output_dir(),
        std::path::Path::new("output")
    );
}

#[tokio::test]
async fn test_save_report_writes_timestamped_markdown() {
    let temp_dir = TempDir::new().unwrap();
    let store = OutputStore::new(temp_dir.path());

    let brief = Brief::from("Cena na biblioteca.");
    let plan = ScenePlan::new("## ESTRUTURA DA CENA");
    let draft = SceneContent::new("Rascunho.", DraftSource::Fallback);
    let final_content = FinalContent::new("Final.");
    let report = SceneReport::new(&brief, &plan, &draft, &final_content);

    let path = store.save_report(&report).await.unwrap();

    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("scene_") && name.ends_with(".md"));

    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.contains("**Brief:** Cena na biblioteca."));
    assert!(text.contains("## Primeira Versão\n\nRascunho."));
    assert!(text.ends_with("## Versão Final\n\nFinal.\n"));
}
