// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Integration test: drives a scratch ZoKrates project through the public
//! `pzk_sdk::` API only.

use std::fs;
use std::path::Path;

use pzk_sdk::codec::b64_url_decode;
use pzk_sdk::generate::{generate_module_at, generate_proof, generate_test, prepare_test};
use pzk_sdk::serialize::deserialize_proof_string;
use pzk_sdk::state::{load_state, save_state, GeneratorState};
use pzk_sdk::zokrates::ZokratesProject;
use pzk_sdk::{Artifact, ProofType, PzkError, Scalar};
use serde_json::json;

const ABI: &str = r#"{
  "inputs": [{"name": "x", "public": true, "type": "field"}],
  "output": {"type": "field"}
}"#;

fn write_project(dir: &Path, abi: &str, proof: serde_json::Value, vk: serde_json::Value) {
    fs::write(dir.join("abi.json"), abi).unwrap();
    fs::write(dir.join("proof.json"), proof.to_string()).unwrap();
    fs::write(dir.join("verification.key"), vk.to_string()).unwrap();
}

fn proof_json() -> serde_json::Value {
    json!({
        "scheme": "g16",
        "curve": "bn128",
        "proof": {
            "a": ["0x01", "0x02"],
            "b": [["0x03", "0x04"], ["0x05", "0x06"]],
            "c": ["0x07", "0x08"]
        },
        "inputs": ["0x01", "0x02"]
    })
}

fn vk_json() -> serde_json::Value {
    json!({
        "scheme": "g16",
        "curve": "bn128",
        "alpha": ["0xa1", "0xa2"],
        "beta": [["0xb1", "0xb2"], ["0xb3", "0xb4"]],
        "gamma": [["0xc1", "0xc2"], ["0xc3", "0xc4"]],
        "delta": [["0xd1", "0xd2"], ["0xd3", "0xd4"]],
        "gamma_abc": [["0x11", "0x12"], ["0x21", "0x22"], ["0x31", "0x32"]]
    })
}

fn project() -> (tempfile::TempDir, ZokratesProject) {
    let tmp = tempfile::tempdir().unwrap();
    write_project(tmp.path(), ABI, proof_json(), vk_json());
    let project = ZokratesProject::new(tmp.path());
    (tmp, project)
}

// ── module generation ──

#[test]
fn module_binds_input_and_output() {
    let (_tmp, project) = project();
    let module = generate_module_at(&project, "verifier", ProofType::String, "T").unwrap();
    assert_eq!(module.file_name, "verifier.pact");
    assert!(module.contents.contains("(defun verify:bool (x:integer out:integer proof:string)"));
    assert!(module.contents.contains("(pub-inputs [x, out])"));
    // 0xa1 = 161
    assert!(module.contents.contains("\"x\": 161"));
}

#[test]
fn module_written_to_dir() {
    let (_tmp, project) = project();
    let out = tempfile::tempdir().unwrap();
    let module = generate_module_at(&project, "zk", ProofType::Object, "T").unwrap();
    let path = module.write_to(out.path()).unwrap();
    assert_eq!(path, out.path().join("zk.pact"));
    assert_eq!(fs::read_to_string(path).unwrap(), module.contents);
}

#[test]
fn rejected_key_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let mut vk = vk_json();
    vk["scheme"] = json!("gm17");
    write_project(tmp.path(), ABI, proof_json(), vk);
    let project = ZokratesProject::new(tmp.path());

    let err = generate_module_at(&project, "verifier", ProofType::String, "T").unwrap_err();
    assert!(matches!(
        err,
        PzkError::UnsupportedScheme { artifact: Artifact::VerificationKey, .. }
    ));
    assert!(!tmp.path().join("verifier.pact").exists());
}

#[test]
fn missing_file_names_path() {
    let tmp = tempfile::tempdir().unwrap();
    let project = ZokratesProject::new(tmp.path());
    match project.abi() {
        Err(PzkError::Io { path, .. }) => assert!(path.ends_with("abi.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

// ── test generation ──

#[test]
fn test_requires_module() {
    let (_tmp, project) = project();
    let err = generate_test(&project, &GeneratorState::default(), Path::new(".")).unwrap_err();
    assert!(matches!(err, PzkError::NoModuleGenerated));
}

#[test]
fn test_binds_scalar_arguments() {
    let (_tmp, project) = project();
    let mut st = GeneratorState::default();
    st.record_module("verifier", ProofType::Object);

    let prepared = prepare_test(&project, &st).unwrap();
    let names: Vec<_> = prepared.bound.iter().map(|b| b.argument.name()).collect();
    assert_eq!(names, ["x", "out"]);
    assert!(prepared.bound.iter().all(|b| b.argument.length() == 1));

    let file = prepared.render(Path::new("/lib"));
    assert_eq!(file.file_name, "verifier.repl");
    assert!(file.contents.contains(
        r#"(verifier.verify 1 2 {"A": {"x": 1, "y": 2}, "B": {"x": [3, 4], "y": [5, 6]}, "C": {"x": 7, "y": 8}})"#
    ));
}

#[test]
fn test_rejects_input_count_mismatch() {
    let tmp = tempfile::tempdir().unwrap();
    let abi = r#"{
      "inputs": [
        {"name": "a", "public": true, "type": "field"},
        {"name": "b", "public": true, "type": "array", "components": {"size": 3, "type": "field"}}
      ],
      "output": {"type": "tuple", "components": {"elements": []}}
    }"#;
    let mut proof = proof_json();
    proof["inputs"] = json!(["0x1", "0x2", "0x3"]);
    write_project(tmp.path(), abi, proof, vk_json());
    let project = ZokratesProject::new(tmp.path());

    let mut st = GeneratorState::default();
    st.record_module("verifier", ProofType::String);
    assert!(matches!(
        prepare_test(&project, &st),
        Err(PzkError::ArgumentCountMismatch { expected: 4, actual: 3 })
    ));
}

// ── proof generation ──

#[test]
fn proof_string_roundtrip() {
    let (_tmp, project) = project();
    let st = GeneratorState::default();
    let quoted = generate_proof(&project, &st, Some(ProofType::String)).unwrap();
    let inner = quoted.trim_matches('"');
    assert_eq!(b64_url_decode(inner).unwrap().len(), 256);
    let proof = deserialize_proof_string(inner).unwrap();
    assert_eq!(proof, project.proof().unwrap());
    assert_eq!(proof.c.y, Scalar::from(8u64));
}

#[test]
fn oversized_proof_coordinate_names_artifact() {
    let tmp = tempfile::tempdir().unwrap();
    let mut proof = proof_json();
    proof["proof"]["c"] = json!(["0x07", format!("0x1{}", "0".repeat(64))]);
    write_project(tmp.path(), ABI, proof, vk_json());
    let project = ZokratesProject::new(tmp.path());

    let err = generate_proof(&project, &GeneratorState::default(), Some(ProofType::String))
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("proof.json"), "{msg}");
    assert!(msg.contains("`c[1]`"), "{msg}");
    assert!(msg.contains("33 bytes"), "{msg}");
}

#[test]
fn proof_type_mismatch_across_invocations() {
    let (_tmp, project) = project();
    let state_dir = tempfile::tempdir().unwrap();
    let state_path = state_dir.path().join(".pact_zk_state");

    // first invocation: module generated for object proofs
    let mut st = load_state(&state_path);
    generate_module_at(&project, "verifier", ProofType::Object, "T").unwrap();
    st.record_module("verifier", ProofType::Object);
    save_state(&state_path, &st).unwrap();

    // second invocation: string proof requested
    let st = load_state(&state_path);
    assert!(matches!(
        generate_proof(&project, &st, Some(ProofType::String)),
        Err(PzkError::ProofTypeMismatch { .. })
    ));
    let object = generate_proof(&project, &st, None).unwrap();
    assert!(object.starts_with('{'));
}
