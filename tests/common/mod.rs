#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const MANIFEST_FILES: [&str; 8] = [
    "CMakeLists.txt",
    "Params.h",
    "PluginProcessor.h",
    "PluginProcessor.cpp",
    "PluginEditor.h",
    "PluginEditor.cpp",
    "PluginLookAndFeel.h",
    "resources/CMakeLists.txt",
];

pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/_Template")
}

pub fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from) {
        let entry = entry.unwrap();
        let target = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// A scratch repository with the fixture template at plugins/_Template.
pub fn repo_with_template() -> TempDir {
    let repo = TempDir::new().unwrap();
    copy_tree(&fixture_dir(), &repo.path().join("plugins/_Template"));
    repo
}

/// Every file under `dir`, relative to it, with `/` separators, sorted.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
