use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn run(config_dir: &Path, args: &[&str]) -> std::process::Output {
    let config = config_dir.join("tintpick.conf");
    Command::new(env!("CARGO_BIN_EXE_tintpick"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("failed to run tintpick")
}

#[test]
fn version_prints_version_string() {
    let output = Command::new(env!("CARGO_BIN_EXE_tintpick"))
        .arg("--version")
        .output()
        .expect("failed to run tintpick");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("tintpick "));
}

#[test]
fn script_mode_runs_file_and_exits() {
    let tmp_dir = TempDir::new().unwrap();
    let script = tmp_dir.path().join("mix.cp");
    let exported = tmp_dir.path().join("out.cp");
    fs::write(
        &script,
        format!(
            "+ red 10\n+ green 5\n= blue 255\nbg true\nout\nbogus\nexport {}\n",
            exported.display()
        ),
    )
    .unwrap();

    let output = run(tmp_dir.path(), &[script.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("HEX: #0a05ff"));
    assert!(stdout.contains("RGB: rgb(10, 5, 255)"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: command not found: bogus"));

    assert_eq!(
        fs::read_to_string(exported).unwrap(),
        "= red 10\n= green 5\n= blue 255\nbg true\n\n"
    );
}

#[test]
fn script_exit_code_is_forwarded() {
    let tmp_dir = TempDir::new().unwrap();
    let script = tmp_dir.path().join("quit.cp");
    fs::write(&script, "exit 3\nout\n").unwrap();

    let output = run(tmp_dir.path(), &[script.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn out_of_range_exit_code_becomes_failure() {
    let tmp_dir = TempDir::new().unwrap();
    for code in ["300", "-1"] {
        let script = tmp_dir.path().join("quit.cp");
        fs::write(&script, format!("exit {code}\n")).unwrap();

        let output = run(tmp_dir.path(), &[script.to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(1), "exit {code}");
    }
}

#[test]
fn missing_script_exits_failure() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run(tmp_dir.path(), &["does-not-exist.cp"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: file not found"));
}
