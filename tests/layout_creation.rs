use fs_testbed::TemporaryProject;

const LAYOUT: &str = r#"---
- !directory
    name: fixtures
    entries:
      - !file
          name: data.txt
          seed: !text "payload"
      - !directory
          name: nested
          entries:
            - !file
                name: empty.txt
- !file
    name: from_manifest.toml
    seed: !copy_from Cargo.toml
- !link
    name: data_link.txt
    target: fixtures/data.txt
"#;

#[test]
fn layout_builds_directories_files_and_links() {
    let project = TemporaryProject::new().expect("failed to create the temporary project");
    project.scaffold(LAYOUT).expect("failed to scaffold the layout");

    assert_eq!(project.read("fixtures/data.txt").unwrap(), "payload");
    assert!(project.abspath("fixtures/nested/empty.txt").exists());

    let manifest = project.read("from_manifest.toml").unwrap();
    assert!(manifest.contains("[package]"));

    // Reading through the link resolves to the seeded file.
    let through_link = std::fs::read_to_string(project.abspath("data_link.txt")).unwrap();
    assert_eq!(through_link, "payload");
}

#[test]
fn layout_accepts_json_documents() {
    let project = TemporaryProject::new().expect("failed to create the temporary project");
    project
        .scaffold(r#"[{"file":{"name":"test.txt","seed":{"text":"from json"}}}]"#)
        .expect("failed to scaffold the JSON layout");

    assert_eq!(project.read("test.txt").unwrap(), "from json");
}

#[test]
fn an_empty_layout_is_rejected() {
    let project = TemporaryProject::new().expect("failed to create the temporary project");
    let error = project.scaffold("").unwrap_err();
    assert!(error.is_empty_layout());
}

#[test]
fn a_scaffolded_tree_appears_in_snapshots() {
    let project = TemporaryProject::new().expect("failed to create the temporary project");
    let before = project.snapshot().unwrap();

    project.scaffold(LAYOUT).expect("failed to scaffold the layout");
    let after = project.snapshot().unwrap();

    let diff = &after - &before;
    assert!(diff.added().contains("fixtures/data.txt"));
    assert!(diff.added().contains("fixtures/nested/empty.txt"));
    assert!(diff.added().contains("from_manifest.toml"));
    assert!(diff.removed().is_empty());
}
