// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Record of the last generated module, carried between invocations.
//!
//! The record is a plain value handed to each generation step. Persisting it
//! is optional: [`load_state`] treats a missing, empty or unparsable file as
//! a fresh state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ProofType, PzkError, PzkResult};

pub const DEFAULT_STATE_FILE: &str = ".pact_zk_state";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorState {
    pub last_module: Option<String>,
    pub last_proof_type: Option<ProofType>,
}

impl GeneratorState {
    pub fn record_module(&mut self, module_name: &str, proof_type: ProofType) {
        self.last_module = Some(module_name.to_string());
        self.last_proof_type = Some(proof_type);
    }

    /// Name and proof type of the last generated module.
    pub fn require_module(&self) -> PzkResult<(&str, ProofType)> {
        match &self.last_module {
            Some(name) => Ok((name.as_str(), self.last_proof_type.unwrap_or_default())),
            None => Err(PzkError::NoModuleGenerated),
        }
    }

    /// Proof type for a standalone proof. An explicit request must agree
    /// with the recorded module; without one the recorded type (or the
    /// default) is used.
    pub fn resolve_proof_type(&self, requested: Option<ProofType>) -> PzkResult<ProofType> {
        match (self.last_proof_type, requested) {
            (Some(recorded), Some(requested)) if recorded != requested => {
                Err(PzkError::ProofTypeMismatch {
                    recorded,
                    requested,
                })
            }
            (_, Some(requested)) => Ok(requested),
            (recorded, None) => Ok(recorded.unwrap_or_default()),
        }
    }
}

pub fn load_state(path: &Path) -> GeneratorState {
    fs::read_to_string(path)
        .ok()
        .and_then(|data| serde_json::from_str(&data).ok())
        .unwrap_or_default()
}

pub fn save_state(path: &Path, state: &GeneratorState) -> PzkResult<()> {
    let io_err = |source| PzkError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(state).map_err(PzkError::Render)?;
    fs::write(path, json).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_no_module() {
        assert!(matches!(
            GeneratorState::default().require_module(),
            Err(PzkError::NoModuleGenerated)
        ));
    }

    #[test]
    fn record_then_require() {
        let mut st = GeneratorState::default();
        st.record_module("verifier", ProofType::Object);
        assert_eq!(st.require_module().unwrap(), ("verifier", ProofType::Object));
    }

    #[test]
    fn proof_type_resolution() {
        let fresh = GeneratorState::default();
        assert_eq!(fresh.resolve_proof_type(None).unwrap(), ProofType::String);
        assert_eq!(
            fresh.resolve_proof_type(Some(ProofType::Object)).unwrap(),
            ProofType::Object
        );

        let mut st = GeneratorState::default();
        st.record_module("m", ProofType::Object);
        assert_eq!(st.resolve_proof_type(None).unwrap(), ProofType::Object);
        assert_eq!(
            st.resolve_proof_type(Some(ProofType::Object)).unwrap(),
            ProofType::Object
        );
        assert!(matches!(
            st.resolve_proof_type(Some(ProofType::String)),
            Err(PzkError::ProofTypeMismatch {
                recorded: ProofType::Object,
                requested: ProofType::String
            })
        ));
    }

    #[test]
    fn persist_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join(DEFAULT_STATE_FILE);
        let mut st = GeneratorState::default();
        st.record_module("verifier", ProofType::String);
        save_state(&path, &st).unwrap();
        assert_eq!(load_state(&path), st);
    }

    #[test]
    fn missing_or_corrupt_is_fresh() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_STATE_FILE);
        assert_eq!(load_state(&path), GeneratorState::default());

        fs::write(&path, "not json at all").unwrap();
        assert_eq!(load_state(&path), GeneratorState::default());

        fs::write(&path, "").unwrap();
        assert_eq!(load_state(&path), GeneratorState::default());
    }
}
