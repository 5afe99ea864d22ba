// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Pact module and REPL templates.
//!
//! Pure text substitution; every piece of content is computed by the
//! binder and serializer before it reaches a template.

use std::path::Path;

use crate::binder::{render_public_inputs, render_signature};
use crate::{CircuitArgument, ProofType, PzkError, PzkResult, Value, VerificationKey};

pub const MODULE_EXT: &str = "pact";
pub const TEST_EXT: &str = "repl";

/// Support-library files the REPL loads before the module.
pub const UTIL_LIB_FILES: [&str; 3] = ["util-lists.pact", "util-strings.pact", "util-zk.pact"];

pub fn module_file_name(module_name: &str) -> String {
    format!("{module_name}.{MODULE_EXT}")
}

pub fn test_file_name(module_name: &str) -> String {
    format!("{module_name}.{TEST_EXT}")
}

pub struct ModuleParams<'a> {
    pub module_name: &'a str,
    pub verification_key: &'a VerificationKey,
    /// Public inputs followed by the output.
    pub public_abi: &'a [CircuitArgument],
    pub proof_type: ProofType,
    pub generated_at: &'a str,
}

pub struct TestParams<'a> {
    pub lib_dir: &'a Path,
    pub module_name: &'a str,
    /// Rendered by [`crate::binder::render_call_arguments`].
    pub call_arguments: &'a str,
    /// Rendered by [`crate::serialize::render_proof`].
    pub proof_literal: &'a str,
}

/// Verification key as a pretty literal, continuation lines indented to sit
/// inside the `defconst`.
pub fn render_verification_key(vk: &VerificationKey) -> PzkResult<String> {
    let pretty = Value::from(vk).render_pretty(1).map_err(PzkError::Render)?;
    Ok(pretty.lines().collect::<Vec<_>>().join("\n    "))
}

pub fn render_module(p: &ModuleParams<'_>) -> PzkResult<String> {
    let mut func_arguments = render_signature(p.public_abi);
    let (proof_param, proof_object) = match p.proof_type {
        ProofType::String => ("proof:string", "(deserialize-proof proof)"),
        ProofType::Object => ("proof:object{groth16-proof}", "proof"),
    };
    if !func_arguments.is_empty() {
        func_arguments.push(' ');
    }
    func_arguments.push_str(proof_param);

    let vkey = render_verification_key(p.verification_key)?;
    let pub_inputs = render_public_inputs(p.public_abi);

    Ok(format!(
        r#"
;; Generated by pact-zk-gen at {generated_at}
(module {module_name} GOVERNANCE
  (use free.util-zk)

  (defcap GOVERNANCE ()
    ;The default behaviour is to create non-upgradable module but this can be changed here
    false)

  (defconst V-KEY:object{{groth16-verify-key}} {vkey})

  (defun verify:bool ({func_arguments})
    (let ((pub-inputs {pub_inputs})
          (_proof {proof_object}))
      (verify-groth16-proof V-KEY pub-inputs _proof))
  )
)
"#,
        generated_at = p.generated_at,
        module_name = p.module_name,
    ))
}

pub fn render_test(p: &TestParams<'_>) -> String {
    let lib_dir = p.lib_dir.display();
    let loads: Vec<String> = UTIL_LIB_FILES
        .iter()
        .map(|f| format!("(load \"{lib_dir}/{f}\")"))
        .collect();

    format!(
        r#"
(begin-tx)
(module G GOV
  (defcap GOV () true)
  (defconst GUARD_SUCCESS (create-user-guard (success)))
  (defun success () true)
)
(define-namespace 'free GUARD_SUCCESS GUARD_SUCCESS)

(namespace 'free)
{loads}
(commit-tx)

(begin-tx)
(load "{module_file}")

(let ((result
        ({module_name}.verify {arguments} {proof})
     ))
  (print (format "Proof verification result: {{}}" [result] ))
)
"#,
        loads = loads.join("\n"),
        module_file = module_file_name(p.module_name),
        module_name = p.module_name,
        arguments = p.call_arguments,
        proof = p.proof_literal,
    )
}
