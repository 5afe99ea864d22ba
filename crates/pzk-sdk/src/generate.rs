// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! End-to-end generation steps.
//!
//! Each step reads and validates everything it needs and renders its output
//! in memory; nothing is written until [`GeneratedFile::write_to`] is
//! called, so a failing step leaves no partial artifacts behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::binder::{bind, render_call_arguments, BoundArgument};
use crate::emit::{self, ModuleParams, TestParams};
use crate::serialize::render_proof;
use crate::state::GeneratorState;
use crate::zokrates::ZokratesProject;
use crate::{ProofType, PzkError, PzkResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub contents: String,
}

impl GeneratedFile {
    /// Writes into `dir`, replacing any file of the same name.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> PzkResult<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        fs::write(&path, &self.contents).map_err(|source| PzkError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

pub fn generate_module(
    project: &ZokratesProject,
    module_name: &str,
    proof_type: ProofType,
) -> PzkResult<GeneratedFile> {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string();
    generate_module_at(project, module_name, proof_type, &now)
}

/// [`generate_module`] with a fixed timestamp.
pub fn generate_module_at(
    project: &ZokratesProject,
    module_name: &str,
    proof_type: ProofType,
    generated_at: &str,
) -> PzkResult<GeneratedFile> {
    let abi = project.abi()?;
    let vk = project.verification_key()?;
    let public_abi = abi.public_abi();

    let contents = emit::render_module(&ModuleParams {
        module_name,
        verification_key: &vk,
        public_abi: &public_abi,
        proof_type,
        generated_at,
    })?;
    Ok(GeneratedFile {
        file_name: emit::module_file_name(module_name),
        contents,
    })
}

/// Everything a test script needs except the support-library location.
#[derive(Debug, Clone)]
pub struct PreparedTest {
    pub module_name: String,
    pub proof_type: ProofType,
    pub bound: Vec<BoundArgument>,
    pub proof_literal: String,
}

impl PreparedTest {
    pub fn render(&self, lib_dir: &Path) -> GeneratedFile {
        let call_arguments = render_call_arguments(&self.bound);
        GeneratedFile {
            file_name: emit::test_file_name(&self.module_name),
            contents: emit::render_test(&TestParams {
                lib_dir,
                module_name: &self.module_name,
                call_arguments: &call_arguments,
                proof_literal: &self.proof_literal,
            }),
        }
    }
}

/// Binds the proof's public values to the ABI of the recorded module and
/// serializes the proof the way that module expects it.
pub fn prepare_test(project: &ZokratesProject, state: &GeneratorState) -> PzkResult<PreparedTest> {
    let (module_name, proof_type) = state.require_module()?;

    let abi = project.abi()?;
    let artifact = project.proof_artifact()?;
    let bound = bind(&abi.public_abi(), &artifact.inputs)?;
    let proof_literal = render_proof(&artifact.proof, proof_type)?;

    Ok(PreparedTest {
        module_name: module_name.to_string(),
        proof_type,
        bound,
        proof_literal,
    })
}

pub fn generate_test(
    project: &ZokratesProject,
    state: &GeneratorState,
    lib_dir: &Path,
) -> PzkResult<GeneratedFile> {
    Ok(prepare_test(project, state)?.render(lib_dir))
}

/// Proof literal for the recorded (or requested) proof type.
pub fn generate_proof(
    project: &ZokratesProject,
    state: &GeneratorState,
    requested: Option<ProofType>,
) -> PzkResult<String> {
    let proof_type = state.resolve_proof_type(requested)?;
    render_proof(&project.proof()?, proof_type)
}
