//! Integration tests for the filesystem-backed document store.

use std::fs;

use framedex_core::{DocumentStore, FrameIndexEngine, FramedexError, FsDocumentStore};
use serde_json::json;
use tempfile::TempDir;

fn write_board(dir: &std::path::Path, name: &str, frame_names: &[&str]) -> std::path::PathBuf {
    let elements: Vec<serde_json::Value> = frame_names
        .iter()
        .map(|n| json!({"type": "frame", "name": n}))
        .collect();
    let payload = json!({"elements": elements}).to_string();
    let path = dir.join(name);
    fs::write(&path, format!("# Board\n\n```json\n{payload}\n```\n")).unwrap();
    path
}

#[test]
fn lists_only_tracked_documents() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    write_board(dir.path(), "a.diagram.md", &["A"]);
    write_board(&dir.path().join("nested"), "b.diagram.md", &["B"]);
    fs::write(dir.path().join("notes.md"), "not a diagram").unwrap();

    let store = FsDocumentStore::new(dir.path());
    let candidates = store.list_candidate_documents().unwrap();
    assert_eq!(candidates.len(), 2);
    let shorts: Vec<&str> = candidates.iter().map(|c| c.short_name.as_str()).collect();
    assert_eq!(shorts, vec!["a.diagram.md", "b.diagram.md"]);
    assert!(candidates.iter().all(|c| c.mod_time_stamp > 0));
}

#[test]
fn reads_and_stamps_documents() {
    let dir = TempDir::new().unwrap();
    let path = write_board(dir.path(), "a.diagram.md", &["A"]);
    let identity = path.display().to_string();

    let store = FsDocumentStore::new(dir.path());
    let text = store.read_document(&identity).unwrap();
    assert!(text.contains("```json"));
    assert!(store.document_stamp(&identity).unwrap() > 0);

    let err = store
        .document_stamp(&dir.path().join("missing.diagram.md").display().to_string())
        .unwrap_err();
    assert!(matches!(err, FramedexError::Read { .. }));
}

#[test]
fn missing_root_fails_enumeration() {
    let dir = TempDir::new().unwrap();
    let store = FsDocumentStore::new(dir.path().join("nope"));
    assert!(store.list_candidate_documents().is_err());
}

#[test]
fn engine_scans_a_directory_of_boards() {
    let dir = TempDir::new().unwrap();
    write_board(dir.path(), "a.diagram.md", &["Intro", "Detail"]);
    write_board(dir.path(), "b.diagram.md", &["Summary"]);

    let mut engine = FrameIndexEngine::new(FsDocumentStore::new(dir.path()));
    let report = engine.scan_all().unwrap();
    assert_eq!(report.processed, 2);
    assert_eq!(report.misses, 2);

    let frames = engine.frames_for_document("a.diagram.md");
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].name, "Intro");
    assert_eq!(engine.frames_for_document("b.diagram.md").len(), 1);

    // Unchanged files hit the cache on the next pass.
    let second = engine.scan_all().unwrap();
    assert_eq!(second.hits, 2);
    assert_eq!(second.misses, 0);
}
