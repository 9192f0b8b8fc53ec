use std::fs;

use tempfile::TempDir;

use super::{discover, is_candidate};

const VALID: &str = "const settings = { port: 55916 };\nexport default settings;\n";

#[test]
fn candidate_requires_a_parsable_literal() {
    let dir = TempDir::new().unwrap();

    let good = dir.path().join("settings.js");
    fs::write(&good, VALID).unwrap();
    assert!(is_candidate(&good));

    let bad = dir.path().join("other.js");
    fs::write(&bad, "export const config = { port: 1 };\n").unwrap();
    assert!(!is_candidate(&bad));

    assert!(!is_candidate(&dir.path().join("missing.js")));
}

#[test]
fn discover_probes_conventional_layouts() {
    let root = TempDir::new().unwrap();

    let install = root.path().join("mindcraft");
    fs::create_dir(&install).unwrap();
    fs::write(install.join("settings.js"), VALID).unwrap();

    fs::write(root.path().join("settings.js"), VALID).unwrap();

    // A mindcraft dir whose settings file does not parse is skipped.
    let broken = root.path().join("mindcraft-main");
    fs::create_dir(&broken).unwrap();
    fs::write(broken.join("settings.js"), "not javascript settings").unwrap();

    let found = discover(&[root.path().to_path_buf()]);
    assert_eq!(
        found,
        vec![
            install.join("settings.js"),
            root.path().join("settings.js"),
        ]
    );
}

#[test]
fn discover_accepts_a_direct_file_root() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("settings.js");
    fs::write(&file, VALID).unwrap();

    let found = discover(&[file.clone()]);
    assert_eq!(found, vec![file]);
}

#[test]
fn discover_deduplicates_across_roots() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("settings.js");
    fs::write(&file, VALID).unwrap();

    let roots = vec![dir.path().to_path_buf(), dir.path().to_path_buf()];
    let found = discover(&roots);
    assert_eq!(found.len(), 1);
}
