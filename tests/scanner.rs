use archgraph::config::ExtractorConfig;
use archgraph::core::scanner::FileScanner;
use archgraph::error::ExtractError;
use std::fs;
use std::path::{Path, PathBuf};

fn touch<P: AsRef<Path>>(p: P) {
    fs::write(p, "// test").unwrap();
}

#[test]
fn scanner_recurses_and_filters_by_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("a/deep")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();

    touch(root.join("Zero.java"));
    touch(root.join("a/One.java"));
    touch(root.join("a/deep/Two.java"));
    touch(root.join("b/Three.java"));
    touch(root.join("b/notes.txt"));
    touch(root.join("b/Script.javax"));

    let scanner = FileScanner::new(&ExtractorConfig::default());
    let files: Vec<PathBuf> = scanner
        .scan(root)
        .unwrap()
        .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
        .collect();

    assert_eq!(
        files,
        vec![
            PathBuf::from("Zero.java"),
            PathBuf::from("a/One.java"),
            PathBuf::from("a/deep/Two.java"),
            PathBuf::from("b/Three.java"),
        ]
    );
}

#[test]
fn scanner_honors_configured_extension_with_leading_dot() {
    let dir = tempfile::TempDir::new().unwrap();
    touch(dir.path().join("Main.java"));
    touch(dir.path().join("Main.kt"));

    let config = ExtractorConfig {
        extension: ".kt".to_string(),
        ..ExtractorConfig::default()
    };
    let files: Vec<PathBuf> = FileScanner::new(&config)
        .scan(dir.path())
        .unwrap()
        .collect();
    assert_eq!(files, vec![dir.path().join("Main.kt")]);
}

#[test]
fn missing_or_non_directory_root_is_an_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let scanner = FileScanner::new(&ExtractorConfig::default());

    let missing = scanner.scan(&dir.path().join("nope"));
    assert!(matches!(missing, Err(ExtractError::Io { .. })));

    let file = dir.path().join("Single.java");
    touch(&file);
    assert!(matches!(scanner.scan(&file), Err(ExtractError::Io { .. })));
}

#[cfg(unix)]
#[test]
fn broken_links_and_link_cycles_are_skipped() {
    use archgraph::core::ArchitectureExtractor;
    use std::os::unix::fs::symlink;

    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("pkg/nested")).unwrap();
    fs::write(root.join("pkg/Good.java"), "class Good { void run() {} }\n").unwrap();
    symlink(root.join("pkg/Gone.java"), root.join("pkg/Dangling.java")).unwrap();
    symlink(root.join("pkg"), root.join("pkg/nested/back")).unwrap();

    let config = ExtractorConfig {
        follow_links: true,
        ..ExtractorConfig::default()
    };
    let files: Vec<PathBuf> = FileScanner::new(&config).scan(root).unwrap().collect();
    assert_eq!(files, vec![root.join("pkg/Good.java")]);

    let extraction = ArchitectureExtractor::new(config)
        .unwrap()
        .extract(root)
        .unwrap();
    assert_eq!(extraction.files_scanned, 1);
    assert!(extraction.failures.is_empty());
    assert_eq!(extraction.graph.classes.len(), 1);
    assert_eq!(extraction.graph.classes[0].class_name(), "Good");
}
