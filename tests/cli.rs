use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const T2_MICRO: &str = r#"{"t2.micro": {"vcpus": 1, "memory_mb": 1024}}"#;

/// Creates a data directory holding `<cloud>.json` for every provider.
fn create_data_dir() -> TempDir {
    let dir = TempDir::new().expect("Creating temp data dir failed");
    for cloud in ["aws", "azure", "gce"] {
        fs::write(dir.path().join(format!("{cloud}.json")), T2_MICRO)
            .expect("Writing instance data failed");
    }
    dir
}

/// Creates a milpa tree with the instanceselector package directory in place.
fn create_milpa_dir() -> TempDir {
    let dir = TempDir::new().expect("Creating temp milpa dir failed");
    fs::create_dir_all(dir.path().join("pkg/util/instanceselector"))
        .expect("Creating package dir failed");
    dir
}

fn instance_data_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("instance-data").expect("Binary exists");
    cmd.current_dir(cwd)
        .env_remove("MILPA_DIR")
        .env_remove("GOPATH")
        .env_remove("INSTANCE_DATA_DIR");
    cmd
}

#[test]
fn local_mode_writes_go_sources_for_every_provider() {
    let data = create_data_dir();
    let milpa = create_milpa_dir();

    instance_data_cmd(data.path())
        .env("MILPA_DIR", milpa.path())
        .env("INSTANCE_DATA_DIR", data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("aws_instance_data.go"));

    let pkg = milpa.path().join("pkg/util/instanceselector");
    for cloud in ["aws", "azure", "gce"] {
        let written = fs::read_to_string(pkg.join(format!("{cloud}_instance_data.go")))
            .expect("generated file exists");
        assert_eq!(
            written,
            format!(
                "package instanceselector\n\nconst {cloud}InstanceJson = `\n{{\n    \"t2.micro\": {{\n        \"vcpus\": 1,\n        \"memory_mb\": 1024\n    }}\n}}\n`"
            )
        );
    }
}

#[test]
fn local_mode_is_reproducible() {
    let data = create_data_dir();
    let milpa = create_milpa_dir();
    let target = milpa
        .path()
        .join("pkg/util/instanceselector/azure_instance_data.go");

    let mut outputs = Vec::new();
    for _ in 0..2 {
        instance_data_cmd(data.path())
            .env("MILPA_DIR", milpa.path())
            .env("INSTANCE_DATA_DIR", data.path())
            .assert()
            .success();
        outputs.push(fs::read(&target).expect("generated file exists"));
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn local_mode_falls_back_to_gopath() {
    let data = create_data_dir();
    let gopath = TempDir::new().unwrap();
    let pkg = gopath
        .path()
        .join("src/github.com/elotl/milpa/pkg/util/instanceselector");
    fs::create_dir_all(&pkg).unwrap();

    instance_data_cmd(data.path())
        .env("GOPATH", gopath.path())
        .env("INSTANCE_DATA_DIR", data.path())
        .assert()
        .success();

    assert!(pkg.join("gce_instance_data.go").exists());
}

#[test]
fn local_mode_without_milpa_dir_fails_and_writes_nothing() {
    let data = create_data_dir();
    let milpa = create_milpa_dir();

    instance_data_cmd(data.path())
        .env("INSTANCE_DATA_DIR", data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("MILPA_DIR"));

    let pkg = milpa.path().join("pkg/util/instanceselector");
    assert_eq!(fs::read_dir(pkg).unwrap().count(), 0);
}

#[test]
fn missing_package_directory_fails() {
    let data = create_data_dir();
    let empty_milpa = TempDir::new().unwrap();

    instance_data_cmd(data.path())
        .env("MILPA_DIR", empty_milpa.path())
        .env("INSTANCE_DATA_DIR", data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("aws_instance_data.go"));
}

#[test]
fn missing_provider_document_stops_the_run() {
    let data = create_data_dir();
    fs::remove_file(data.path().join("azure.json")).unwrap();
    let milpa = create_milpa_dir();

    instance_data_cmd(data.path())
        .env("MILPA_DIR", milpa.path())
        .env("INSTANCE_DATA_DIR", data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("azure"));

    let pkg = milpa.path().join("pkg/util/instanceselector");
    assert!(pkg.join("aws_instance_data.go").exists());
    assert!(!pkg.join("gce_instance_data.go").exists());
}

#[test]
fn unknown_flag_prints_usage_and_fails() {
    let data = create_data_dir();
    instance_data_cmd(data.path())
        .arg("--s3")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_upload_flag() {
    let data = create_data_dir();
    instance_data_cmd(data.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--upload"));
}
