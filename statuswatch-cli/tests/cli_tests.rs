use std::process::Command;

fn run_statuswatch(args: &[&str]) -> Result<String, String> {
    let output = Command::new("cargo")
        .args(["run", "--bin", "statuswatch", "--"])
        .args(args)
        .output()
        .map_err(|e| format!("Failed to run statuswatch: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Command failed: {}", stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[test]
fn test_help_lists_options() {
    let help = run_statuswatch(&["--help"]).expect("help should succeed");
    assert!(help.contains("--config-file"));
    assert!(help.contains("--interval"));
    assert!(help.contains("--once"));
}

#[test]
fn test_version_reports_name() {
    let version = run_statuswatch(&["--version"]).expect("version should succeed");
    assert!(version.contains("statuswatch"));
}
