//! Integration tests for playground scaffolding against real adapters.

use std::path::Path;
use std::sync::Arc;

use devkit_adapters::{LocalFilesystem, MemoryFilesystem, RecordingOpener};
use devkit_core::prelude::*;
use tempfile::TempDir;

fn params(location: impl AsRef<Path>, template: PlaygroundTemplate) -> CreationParameters {
    CreationParameters::new(
        PlaygroundName::new("Demo").unwrap(),
        location.as_ref(),
        template,
        PlaygroundPlatform::Ios,
    )
}

#[test]
fn creates_ios_empty_playground_under_home() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir(home.path().join("Playgrounds")).unwrap();

    let service = PlaygroundService::new(
        Box::new(LocalFilesystem::new()),
        Arc::new(RecordingOpener::new()),
    )
    .with_home_dir(home.path());

    let playground = service
        .create(&params("~/Playgrounds", PlaygroundTemplate::Empty))
        .unwrap();

    let root = home.path().join("Playgrounds/Demo.playground");
    assert_eq!(playground.path, root);
    assert!(!playground.already_exists);

    assert!(root.join("timeline.xctimeline").is_file());
    assert!(
        root.join("playground.xcworkspace/contents.xcworkspacedata")
            .is_file()
    );
    let settings = std::fs::read_to_string(root.join("contents.xcplayground")).unwrap();
    assert!(settings.contains("target-platform='ios'"));
    let source = std::fs::read_to_string(root.join("Contents.swift")).unwrap();
    assert_eq!(source.trim(), "import Foundation");
}

#[test]
fn second_create_reports_existing_without_writing() {
    let tmp = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(tmp.path()).unwrap();

    let service = PlaygroundService::new(Box::new(fs.clone()), Arc::new(RecordingOpener::new()));
    let first = service
        .create(&params(tmp.path(), PlaygroundTemplate::SwiftUi))
        .unwrap();
    assert!(!first.already_exists);

    let before = fs.mutation_count();
    let second = service
        .create(&params(tmp.path(), PlaygroundTemplate::SwiftUi))
        .unwrap();

    assert!(second.already_exists);
    assert_eq!(second.path, first.path);
    assert_eq!(fs.mutation_count(), before);
}

#[test]
fn existing_directory_on_disk_is_not_modified() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("Demo.playground");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(root.join("keep.txt"), "mine").unwrap();

    let service = PlaygroundService::new(
        Box::new(LocalFilesystem::new()),
        Arc::new(RecordingOpener::new()),
    );
    let playground = service
        .create(&params(tmp.path(), PlaygroundTemplate::Empty))
        .unwrap();

    assert!(playground.already_exists);
    assert!(!root.join("Contents.swift").exists());
    assert_eq!(std::fs::read_to_string(root.join("keep.txt")).unwrap(), "mine");
}

#[test]
fn injected_write_failure_removes_directory() {
    for file in [
        "timeline.xctimeline",
        "playground.xcworkspace/contents.xcworkspacedata",
        "Contents.swift",
        "contents.xcplayground",
    ] {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/work")).unwrap();
        let root = Path::new("/work/Demo.playground");
        fs.fail_writes_to(root.join(file));

        let service =
            PlaygroundService::new(Box::new(fs.clone()), Arc::new(RecordingOpener::new()));
        let err = service
            .create(&params("/work", PlaygroundTemplate::Empty))
            .unwrap_err();

        assert!(err.to_string().contains(file), "{err}");
        assert!(!fs.exists(root), "{file}: directory left behind");
        assert!(fs.list_files().is_empty(), "{file}: files left behind");
    }
}

#[test]
fn cleanup_failure_still_surfaces_write_error() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/work")).unwrap();
    fs.fail_writes_to("/work/Demo.playground/Contents.swift");
    fs.fail_removals();

    let service = PlaygroundService::new(Box::new(fs.clone()), Arc::new(RecordingOpener::new()));
    let err = service
        .create(&params("/work", PlaygroundTemplate::Empty))
        .unwrap_err();

    assert!(err.to_string().contains("Injected write failure"));
    assert!(!err.to_string().contains("removal"));
}

#[test]
fn missing_location_fails_without_creating_anything() {
    let tmp = TempDir::new().unwrap();
    let service = PlaygroundService::new(
        Box::new(LocalFilesystem::new()),
        Arc::new(RecordingOpener::new()),
    );

    let err = service
        .create(&params(tmp.path().join("missing"), PlaygroundTemplate::Empty))
        .unwrap_err();

    assert!(matches!(err, DevkitError::Application(_)));
    assert!(!tmp.path().join("missing").exists());
}

#[test]
fn open_action_uses_resolved_path() {
    let tmp = TempDir::new().unwrap();
    let opener = RecordingOpener::new();
    let service = PlaygroundService::new(
        Box::new(LocalFilesystem::new()),
        Arc::new(opener.clone()),
    );

    let playground = service
        .create(&params(tmp.path(), PlaygroundTemplate::SwiftUi))
        .unwrap();
    playground.open().unwrap();

    assert_eq!(opener.opened(), vec![tmp.path().join("Demo.playground")]);
}
