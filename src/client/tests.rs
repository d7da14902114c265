use super::*;
use std::fs;
use tempfile::TempDir;

fn client_for(root: &Path) -> ScanClient {
    let mut config = Config::default();
    config.scan.code_root = root.to_string_lossy().to_string();
    ScanClient::with_config(config).unwrap()
}

#[test]
fn test_with_config_rejects_invalid_config() {
    let mut config = Config::default();
    config.extraction.lookahead_cap = 0;
    assert!(ScanClient::with_config(config).is_err());
}

#[test]
fn test_code_root_is_resolved() {
    let dir = TempDir::new().unwrap();
    let client = client_for(dir.path());
    assert_eq!(client.code_root(), dir.path());
}

#[test]
fn test_scan_empty_directory() {
    let dir = TempDir::new().unwrap();
    let response = client_for(dir.path()).scan().unwrap();

    assert!(response.is_empty());
    assert_eq!(response.files_found, 0);
    assert_eq!(response.functions_extracted, 0);
    assert!(response.records.is_empty());
}

#[test]
fn test_scan_missing_directory() {
    let dir = TempDir::new().unwrap();
    let response = client_for(&dir.path().join("missing")).scan().unwrap();
    assert_eq!(response.files_found, 0);
    assert_eq!(response.functions_extracted, 0);
}

#[test]
fn test_scan_collects_records_across_files() {
    let dir = TempDir::new().unwrap();
    let pkg = dir.path().join("pkg");
    fs::create_dir(&pkg).unwrap();
    fs::write(
        dir.path().join("a.py"),
        "def one():\n    return 1\n\ndef two():\n    return 2\n",
    )
    .unwrap();
    fs::write(pkg.join("b.py"), "class B:\n    def method(self):\n        pass\n").unwrap();
    fs::write(pkg.join("c.py"), "def three(x,\n          y\n):\n    return x\n").unwrap();

    let response = client_for(dir.path()).scan().unwrap();
    assert_eq!(response.files_found, 3);
    assert_eq!(response.functions_extracted, 3);

    let names: Vec<&str> = response
        .records
        .iter()
        .map(|r| r.function_name.as_str())
        .collect();
    assert_eq!(names, vec!["one", "two", "three"]);
    assert!(response.records[2].filepath.ends_with("c.py"));
    assert_eq!(
        response.records[2].code,
        "def three(x,\n          y\n):\n    return x\n"
    );
}

#[test]
fn test_scan_aborts_on_malformed_definition() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "def fine():\n    pass\n").unwrap();
    fs::write(dir.path().join("b.py"), "def broken\n    pass\n").unwrap();

    let err = client_for(dir.path()).scan().unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("no parameter list"));
    assert!(message.contains("b.py"));
}

#[test]
fn test_discover_then_extract() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("m.py"), "def f():\n    pass\n").unwrap();
    fs::write(dir.path().join("notes.md"), "def g():\n").unwrap();

    let client = client_for(dir.path());
    let files = client.discover_files().unwrap();
    assert_eq!(files.len(), 1);

    let records = client.extract_all(&files).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].function_name, "f");
}

#[test]
fn test_scan_files_reports_counts_for_given_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "def f():\n    pass\n\ndef g():\n    pass\n").unwrap();
    fs::write(dir.path().join("b.py"), "x = 1\n").unwrap();

    let client = client_for(dir.path());
    let files = client.discover_files().unwrap();
    let response = client.scan_files(&files).unwrap();

    assert!(!response.is_empty());
    assert_eq!(response.code_root, dir.path().to_string_lossy());
    assert_eq!(response.files_found, 2);
    assert_eq!(response.functions_extracted, 2);
    assert_eq!(response.records.len(), 2);
}

#[test]
fn test_scan_files_with_no_files_is_empty() {
    let dir = TempDir::new().unwrap();
    let response = client_for(dir.path()).scan_files(&[]).unwrap();

    assert!(response.is_empty());
    assert_eq!(response.functions_extracted, 0);
}

#[test]
#[cfg(unix)]
fn test_scan_fails_on_dangling_symlink() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.py"), "def f():\n    pass\n").unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone.py"), dir.path().join("b.py")).unwrap();

    let err = client_for(dir.path()).scan().unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to read file"));
    assert!(message.contains("b.py"));
}
