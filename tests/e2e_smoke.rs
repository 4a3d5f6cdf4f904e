use std::fs;
use std::path::Path;
use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_package-info-gen")
}

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "class X {}\n").unwrap();
}

fn write_config(root: &Path, body: &str) -> std::path::PathBuf {
    let path = root.join("package-info.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn e2e_generate_missing_package_info() {
    let tdir = tempfile::tempdir().unwrap();
    let root = tdir.path();
    touch(root, "src/main/java/Foo.java");
    touch(root, "src/main/java/net/example/missing/Test.java");
    touch(root, "src/main/java/net/example/present/Test.java");
    touch(root, "src/main/java/net/example/present/package-info.java");
    touch(root, "src/main/java/org/unmatched/Other.java");

    let config = write_config(
        root,
        r#"[package_info]
source_roots = ["src/main/java"]

[[package_info.packages]]
pattern = "net\\.example\\..*"
lines = ["// example"]
"#,
    );

    let output = Command::new(bin())
        .current_dir(root)
        .env_remove("RUST_LOG")
        .args(["generate", "--config", config.to_str().unwrap()])
        .output()
        .expect("failed to run package-info-gen generate");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let out = root.join("target/generated-sources/package-info");
    assert_eq!(
        fs::read_to_string(out.join("net/example/missing/package-info.java")).unwrap(),
        "// example\npackage net.example.missing;\n\n"
    );
    assert!(!out.join("net/example/present/package-info.java").exists());
    assert!(!out.join("org").exists());
    assert!(!out.join("package-info.java").exists());

    // the output directory is reported as an extra compile root
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.lines().any(|l| Path::new(l) == out),
        "compile roots: {}",
        stdout
    );
}

#[test]
fn e2e_empty_rules_is_a_clean_no_op() {
    let tdir = tempfile::tempdir().unwrap();
    let root = tdir.path();
    touch(root, "src/main/java/net/example/Test.java");
    let config = write_config(root, "[package_info]\npackages = []\n");

    let output = Command::new(bin())
        .current_dir(root)
        .env_remove("RUST_LOG")
        .args(["generate", "--config", config.to_str().unwrap()])
        .output()
        .expect("failed to run package-info-gen generate");

    assert!(output.status.success());
    assert!(!root.join("target").exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no packages given"));
}

#[test]
fn e2e_invalid_pattern_fails() {
    let tdir = tempfile::tempdir().unwrap();
    let root = tdir.path();
    touch(root, "src/main/java/net/example/Test.java");
    let config = write_config(
        root,
        "[package_info]\n[[package_info.packages]]\npattern = \"net.(\"\n",
    );

    let output = Command::new(bin())
        .current_dir(root)
        .env_remove("RUST_LOG")
        .args(["generate", "--config", config.to_str().unwrap()])
        .output()
        .expect("failed to run package-info-gen generate");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not generate package-info.java"));
}
