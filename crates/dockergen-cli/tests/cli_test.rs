use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn dockergen() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("dockergen");
    cmd.env_remove("DOCKERGEN_TEMPLATE_DIR");
    cmd
}

fn write_example_config(tmp: &TempDir) -> std::path::PathBuf {
    let config = serde_json::json!({
        "service_name": "my_service",
        "base_image": "python:3.9-slim",
        "copy_files": [
            {"src": "env_vars.txt", "dest": "/usr/src/app/env_vars.txt"}
        ],
        "run_commands": ["./export_env_vars.sh"],
        "env_vars": [{"name": "ENV_VAR1", "value": "value1"}],
        "arguments": ["--arg1=value1"]
    });
    let path = tmp.path().join("config.json");
    std::fs::write(&path, config.to_string()).unwrap();
    path
}

// ── Help / Version ──

#[test]
fn shows_help() {
    dockergen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Render a Dockerfile"));
}

#[test]
fn shows_version() {
    dockergen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dockergen"));
}

// ── Argument Count ──

#[test]
fn no_arguments_prints_usage() {
    dockergen()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn single_argument_prints_usage() {
    dockergen()
        .arg("config.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_argument_prints_usage() {
    let tmp = TempDir::new().unwrap();

    dockergen()
        .current_dir(tmp.path())
        .args(["config.json", "out", "extra"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    assert!(!tmp.path().join("out").exists());
}

// ── Generation ──

#[test]
fn generates_artifacts_into_target_dir() {
    let tmp = TempDir::new().unwrap();
    let config = write_example_config(&tmp);
    let target = tmp.path().join("test");

    dockergen()
        .arg(&config)
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("my_service_Dockerfile generated at"))
        .stdout(predicate::str::contains("my_service_build.sh generated at"))
        .stdout(predicate::str::contains(
            "my_service_entrypoint.sh generated at",
        ));

    let dockerfile = std::fs::read_to_string(target.join("my_service_Dockerfile")).unwrap();
    assert!(dockerfile.contains("FROM python:3.9-slim"));
    assert!(target.join("my_service_build.sh").exists());
    assert!(target.join("my_service_entrypoint.sh").exists());
}

#[cfg(unix)]
#[test]
fn scripts_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let config = write_example_config(&tmp);
    let target = tmp.path().join("out");

    dockergen().arg(&config).arg(&target).assert().success();

    for name in ["my_service_build.sh", "my_service_entrypoint.sh"] {
        let mode = std::fs::metadata(target.join(name))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755, "{name}");
    }
}

#[test]
fn missing_config_fails() {
    let tmp = TempDir::new().unwrap();

    dockergen()
        .arg(tmp.path().join("missing.json"))
        .arg(tmp.path().join("out"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn malformed_config_fails_without_output() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.json");
    std::fs::write(&config, "{ \"service_name\": ").unwrap();
    let target = tmp.path().join("out");

    dockergen()
        .arg(&config)
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));

    assert!(!target.exists());
}

#[test]
fn missing_base_image_is_render_error() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.json");
    std::fs::write(&config, r#"{"service_name": "svc"}"#).unwrap();

    dockergen()
        .arg(&config)
        .arg(tmp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to render template Dockerfile.j2",
        ));
}

// ── Template Directory ──

#[test]
fn template_dir_option_overrides_builtins() {
    let tmp = TempDir::new().unwrap();
    let config = write_example_config(&tmp);
    let templates = tmp.path().join("templates");
    std::fs::create_dir(&templates).unwrap();
    std::fs::write(templates.join("Dockerfile.j2"), "FROM {{ base_image }} AS custom\n").unwrap();
    std::fs::write(templates.join("build.sh.j2"), "#!/bin/sh\necho {{ service_name }}\n").unwrap();
    std::fs::write(templates.join("entrypoint.sh.j2"), "#!/bin/sh\nexec \"$@\"\n").unwrap();
    let target = tmp.path().join("out");

    dockergen()
        .arg("--template-dir")
        .arg(&templates)
        .arg(&config)
        .arg(&target)
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(target.join("my_service_Dockerfile")).unwrap(),
        "FROM python:3.9-slim AS custom\n"
    );
    assert_eq!(
        std::fs::read_to_string(target.join("my_service_build.sh")).unwrap(),
        "#!/bin/sh\necho my_service\n"
    );
}

#[test]
fn template_dir_from_env() {
    let tmp = TempDir::new().unwrap();
    let config = write_example_config(&tmp);
    let templates = tmp.path().join("templates");
    std::fs::create_dir(&templates).unwrap();
    std::fs::write(templates.join("Dockerfile.j2"), "FROM {{ base_image }}\n").unwrap();
    let target = tmp.path().join("out");

    dockergen()
        .env("DOCKERGEN_TEMPLATE_DIR", &templates)
        .arg(&config)
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("build.sh.j2"));

    // Dockerfile precedes the missing build script and stays on disk
    assert!(target.join("my_service_Dockerfile").exists());
    assert!(!target.join("my_service_build.sh").exists());
    assert!(!target.join("my_service_entrypoint.sh").exists());
}

#[test]
fn nonexistent_template_dir_fails() {
    let tmp = TempDir::new().unwrap();
    let config = write_example_config(&tmp);

    dockergen()
        .arg("--template-dir")
        .arg(tmp.path().join("nope"))
        .arg(&config)
        .arg(tmp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("template directory"));
}
