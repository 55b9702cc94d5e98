use std::fs;
use std::path::PathBuf;

use plugin_init::error::Error;
use plugin_init::loader::{LocalLoader, TemplateFile, TemplateLoader};
use plugin_init::naming::{CodePolicy, PluginContext, PluginName};
use plugin_init::processor::{ensure_output_dir, is_relative_path_valid, write_plugin, Processor};
use plugin_init::renderer::TokenRenderer;
use tempfile::TempDir;

fn chorus() -> PluginContext {
    PluginContext::new(&PluginName::parse("Chorus").unwrap(), CodePolicy::Padded)
}

#[test]
fn test_ensure_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    let new_dir = path.join("new_dir");
    assert_eq!(ensure_output_dir(&new_dir).unwrap(), new_dir);
    assert!(!new_dir.exists());

    assert!(matches!(
        ensure_output_dir(path),
        Err(Error::OutputDirectoryExistsError { .. })
    ));
}

#[test]
fn test_is_relative_path_valid() {
    assert!(is_relative_path_valid("CMakeLists.txt"));
    assert!(is_relative_path_valid("resources/CMakeLists.txt"));
    assert!(!is_relative_path_valid(""));
    assert!(!is_relative_path_valid("/etc/passwd"));
    assert!(!is_relative_path_valid("../CMakeLists.txt"));
    assert!(!is_relative_path_valid("./CMakeLists.txt"));
}

#[test]
fn test_process_resolves_nested_target() {
    let renderer = TokenRenderer::new().unwrap();
    let context = chorus();
    let plugin_dir = PathBuf::from("plugins/Chorus");
    let processor = Processor::new(&renderer, &context, &plugin_dir);

    let processed = processor
        .process(&TemplateFile {
            path: PathBuf::from("resources/CMakeLists.txt"),
            content: "juce_add_binary_data(TemplateResources)".to_string(),
        })
        .unwrap();

    assert_eq!(processed.target, PathBuf::from("plugins/Chorus/resources/CMakeLists.txt"));
    assert_eq!(processed.content, "juce_add_binary_data(ChorusResources)");
}

#[test]
fn test_process_rejects_escaping_path() {
    let renderer = TokenRenderer::new().unwrap();
    let context = chorus();
    let plugin_dir = PathBuf::from("plugins/Chorus");
    let processor = Processor::new(&renderer, &context, &plugin_dir);

    let result = processor.process(&TemplateFile {
        path: PathBuf::from("../Evil.h"),
        content: String::new(),
    });
    assert!(matches!(result, Err(Error::TemplateError(_))));
}

#[test]
fn test_write_plugin_refuses_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let plugin_dir = temp_dir.path().join("plugins/Chorus");
    fs::create_dir_all(&plugin_dir).unwrap();

    let renderer = TokenRenderer::new().unwrap();
    let context = chorus();
    let processor = Processor::new(&renderer, &context, &plugin_dir);
    let files = processor
        .process_all(&[TemplateFile {
            path: PathBuf::from("Params.h"),
            content: "struct TemplateParams {};".to_string(),
        }])
        .unwrap();

    let result = write_plugin(&plugin_dir, &files);
    assert!(matches!(result, Err(Error::OutputDirectoryExistsError { .. })));
    assert!(!plugin_dir.join("Params.h").exists());
}

#[test]
fn test_write_plugin_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let plugin_dir = temp_dir.path().join("demos/Chorus");

    let renderer = TokenRenderer::new().unwrap();
    let context = chorus();
    let processor = Processor::new(&renderer, &context, &plugin_dir);
    let files = processor
        .process_all(&[
            TemplateFile {
                path: PathBuf::from("Params.h"),
                content: "struct TemplateParams {};".to_string(),
            },
            TemplateFile {
                path: PathBuf::from("resources/CMakeLists.txt"),
                content: "# Template resources".to_string(),
            },
        ])
        .unwrap();

    write_plugin(&plugin_dir, &files).unwrap();
    assert_eq!(
        fs::read_to_string(plugin_dir.join("Params.h")).unwrap(),
        "struct ChorusParams {};"
    );
    assert_eq!(
        fs::read_to_string(plugin_dir.join("resources/CMakeLists.txt")).unwrap(),
        "# Chorus resources"
    );
}

#[test]
fn test_local_loader_custom_manifest() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.h"), "Template").unwrap();

    let loader = LocalLoader::with_manifest(
        temp_dir.path(),
        vec![PathBuf::from("a.h"), PathBuf::from("b.h")],
    );
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.files.len(), 1);
    assert_eq!(loaded.files[0].content, "Template");
    assert_eq!(loaded.skipped, vec![PathBuf::from("b.h")]);
}

#[test]
fn test_local_loader_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let loader = LocalLoader::new(temp_dir.path().join("_Template"));
    assert!(matches!(
        loader.load(),
        Err(Error::TemplateDoesNotExistsError { .. })
    ));
}
