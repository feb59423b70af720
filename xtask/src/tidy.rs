use std::{
    fs,
    path::{Path, PathBuf},
};

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap().to_path_buf()
}

fn rust_files(dir: &Path, acc: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            if path.file_name().unwrap() != "target" {
                rust_files(&path, acc);
            }
        } else if path.extension().map_or(false, |it| it == "rs") {
            acc.push(path);
        }
    }
}

#[test]
fn no_trailing_whitespace_or_tabs() {
    let root = project_root();
    let mut files = Vec::new();
    rust_files(&root.join("crates"), &mut files);
    rust_files(&root.join("xtask"), &mut files);
    assert!(!files.is_empty());

    let mut bad = Vec::new();
    for file in files {
        let text = fs::read_to_string(&file).unwrap();
        for (i, line) in text.lines().enumerate() {
            if line.ends_with(' ') || line.contains('\t') {
                bad.push(format!("{}:{}", file.display(), i + 1));
            }
        }
    }
    if !bad.is_empty() {
        panic!("trailing whitespace or tabs:\n{}", bad.join("\n"));
    }
}

#[test]
fn single_version() {
    let manifest = fs::read_to_string(project_root().join("crates/cmdspec/Cargo.toml")).unwrap();
    assert!(
        manifest.lines().any(|it| it.trim() == "version.workspace = true"),
        "cmdspec must take its version from the workspace"
    );
}
