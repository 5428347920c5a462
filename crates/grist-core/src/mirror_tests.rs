use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::mirror::{RelativeGrammarPath, relativize};

fn root() -> PathBuf {
    PathBuf::from("/project/src/grammars")
}

#[test]
fn file_at_root_has_empty_subdir() {
    let rel = relativize(&root(), &root().join("A.g"));

    assert!(rel.is_at_root());
    assert_eq!(rel.subdir(), Path::new(""));
    assert_eq!(rel.subdir_prefix(), "");
    assert_eq!(rel.file_name(), "A.g");
    assert_eq!(rel.to_path_buf(), PathBuf::from("A.g"));
    assert_eq!(rel.to_string(), "A.g");
}

#[test]
fn nested_file_keeps_subdir() {
    let rel = relativize(&root(), &root().join("sub").join("B.g"));

    assert!(!rel.is_at_root());
    assert_eq!(rel.subdir(), Path::new("sub"));
    assert_eq!(rel.subdir_prefix(), format!("sub{MAIN_SEPARATOR}"));
    assert_eq!(rel.to_path_buf(), Path::new("sub").join("B.g"));
    assert_eq!(rel.to_string(), format!("sub{MAIN_SEPARATOR}B.g"));
}

#[test]
fn deep_nesting() {
    let file = root().join("org").join("acme").join("Expr.g");
    let rel = relativize(&root(), &file);

    assert_eq!(rel.subdir(), Path::new("org").join("acme"));
    assert_eq!(rel.file_name(), "Expr.g");
}

#[test]
fn round_trip_reconstructs_file() {
    for file in [
        root().join("A.g"),
        root().join("sub").join("B.g"),
        root().join("a").join("b").join("c").join("D.g"),
    ] {
        let rel = relativize(&root(), &file);
        assert_eq!(rel.resolve(&root()), file);
        assert_eq!(root().join(rel.to_path_buf()), file);
    }
}

#[test]
fn output_dir_mirrors_input_layout() {
    let out = PathBuf::from("/project/target/generated");

    let top = relativize(&root(), &root().join("A.g"));
    assert_eq!(top.output_dir(&out), out);

    let nested = relativize(&root(), &root().join("sub").join("B.g"));
    assert_eq!(nested.output_dir(&out), out.join("sub"));
}

#[test]
fn rejects_paths_not_strictly_under_root() {
    assert!(RelativeGrammarPath::from_paths(&root(), Path::new("/elsewhere/A.g")).is_none());
    assert!(RelativeGrammarPath::from_paths(&root(), &root()).is_none());
    assert!(
        RelativeGrammarPath::from_paths(&root(), Path::new("/project/src/grammars2/A.g"))
            .is_none()
    );
    assert!(
        RelativeGrammarPath::from_paths(&root(), &root().join("..").join("A.g")).is_none()
    );
}

#[test]
fn relative_roots_work_too() {
    let rel = RelativeGrammarPath::from_paths(Path::new("grammars"), Path::new("grammars/x/Y.g"))
        .unwrap();
    assert_eq!(rel.subdir(), Path::new("x"));
}

#[test]
#[should_panic(expected = "to be prefixed with")]
fn relativize_panics_outside_root() {
    relativize(&root(), Path::new("/elsewhere/A.g"));
}

#[test]
fn ordering_is_by_subdir_then_name() {
    let mut paths = vec![
        relativize(&root(), &root().join("sub").join("B.g")),
        relativize(&root(), &root().join("Z.g")),
        relativize(&root(), &root().join("A.g")),
    ];
    paths.sort();
    let names: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
    assert_eq!(
        names,
        ["A.g".to_owned(), "Z.g".to_owned(), format!("sub{MAIN_SEPARATOR}B.g")]
    );
}
