mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let absent = env.run_json(&["report"]);
    assert_eq!(absent["ok"], true);
    validate("report.schema.json", &absent["data"]);

    env.write_version("not json");
    let invalid = env.run_json(&["report"]);
    validate("report.schema.json", &invalid["data"]);

    env.write_version("{\"version\": \"4.4.0\"}");
    let gone = env.workdir.join("deleted");
    let skipped = env.run_json(&["--current-dir", gone.to_str().unwrap(), "report"]);
    validate("report.schema.json", &skipped["data"]);
}
