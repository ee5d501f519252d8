use std::{fs, path::PathBuf};

use tempfile::tempdir;

use trellis_cli::{Args, run};

/// Fixture diagrams live at the workspace root, not in the crate
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("fixtures")
}

fn args(input: PathBuf, output: PathBuf, config: Option<PathBuf>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: config.map(|path| path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("model.json");

    run(&args(fixtures_path(), output_path.clone(), None)).expect("Failed to compile fixtures");

    let json = fs::read_to_string(&output_path).expect("Output was not written");
    let model: serde_json::Value = serde_json::from_str(&json).expect("Output is not JSON");

    // Entities are written in discovery order
    let positions: Vec<_> = ["IRuntime", "IModuleType1", "BaseModule", "Module1"]
        .iter()
        .map(|name| json.find(&format!("\"{name}\": {{")).expect("Entity missing"))
        .collect();
    assert!(positions.is_sorted(), "Unexpected entity order: {positions:?}");
    assert_eq!(model.as_object().unwrap().len(), 4);

    let module = &model["Module1"];
    assert_eq!(module["include_guard"], "PROJECT_MODULE1_H");
    assert_eq!(module["inherits"], serde_json::json!(["base::BaseModule"]));
    assert_eq!(
        module["implements"],
        serde_json::json!([
            "interfaces::IRuntime",
            "interfaces::IModuleType1",
            "IRuntime"
        ])
    );
    assert_eq!(module["members"]["public"][0]["name"], "name");
    assert_eq!(module["members"]["private"][0]["type"], "int");
    assert_eq!(
        module["methods"]["private"][0]["params"],
        serde_json::json!(["int level", "bool hard"])
    );
    assert_eq!(module["methods"]["public"][2]["return_type"], "bool");

    let runtime = &model["IRuntime"];
    assert_eq!(runtime["kind"], "interface");
    assert_eq!(runtime["include_guard"], "INTERFACES_IRUNTIME_H");
    assert_eq!(runtime["methods"]["public"][1]["stereotypes"]["noexcept"], true);
    assert_eq!(runtime["source_files"].as_array().unwrap().len(), 2);

    assert_eq!(model["BaseModule"]["kind"], "class");
}

#[test]
fn e2e_smoke_test_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_dir = temp_dir.path().join("diagrams");
    fs::create_dir(&input_dir).unwrap();
    fs::write(input_dir.join("a.uml"), "class A extends lib.Base {\n}").unwrap();
    fs::write(input_dir.join("b.puml"), "class Skipped {\n}").unwrap();

    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[input]\nextension = \"uml\"\n\n[model]\nnamespace_separator = \"/\"\n",
    )
    .unwrap();

    let output_path = temp_dir.path().join("out.json");
    run(&args(input_dir, output_path.clone(), Some(config_path)))
        .expect("Failed to compile with config");

    let model: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert!(model.get("Skipped").is_none());
    assert_eq!(model["A"]["inherits"], serde_json::json!(["lib/Base"]));
}

#[test]
fn e2e_smoke_test_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("model.json");

    let result = run(&args(
        temp_dir.path().join("does-not-exist"),
        output_path.clone(),
        None,
    ));

    assert!(result.is_err(), "Missing input should fail");
    assert!(!output_path.exists(), "No output should be written on failure");
}
