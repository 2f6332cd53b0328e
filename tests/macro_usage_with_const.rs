use std::path::PathBuf;

use testbed_test_macro::testbed_test;

const LAYOUT: &str = r##"
- !directory
    name: docs
    entries:
      - !file
          name: index.md
          seed: !text "# index"
"##;

#[testbed_test(layout = LAYOUT)]
fn scaffold_from_a_const_layout(project: &fs_testbed::TemporaryProject) -> std::io::Result<()> {
    let path = PathBuf::from(project.path()).join("docs/index.md");
    let content = std::fs::read_to_string(path)?;
    assert_eq!(content, "# index");
    Ok(())
}
