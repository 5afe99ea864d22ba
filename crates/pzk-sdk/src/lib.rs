// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # pzk-sdk
//!
//! Turns a ZoKrates project (`abi.json`, `proof.json`, `verification.key`)
//! into a Pact verifier module and a REPL script that exercises it.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | *crate root* | Re-exports the typed model from `pzk-types` |
//! | [`zokrates`] | Loads and validates the three ZoKrates artifacts |
//! | [`binder`] | Aligns ABI arguments with flat input values and renders them |
//! | [`serialize`] | Proof → Pact string / object literal |
//! | [`emit`] | Module and REPL templates |
//! | [`state`] | Record of the last generated module, passed explicitly |
//! | [`generate`] | End-to-end generation steps |
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use pzk_sdk::{generate, state, zokrates::ZokratesProject, ProofType};
//!
//! # fn example() -> pzk_sdk::PzkResult<()> {
//! let project = ZokratesProject::new(".");
//! let mut st = state::GeneratorState::default();
//!
//! let module = generate::generate_module(&project, "verifier", ProofType::String)?;
//! module.write_to(".")?;
//! st.record_module("verifier", ProofType::String);
//!
//! let proof = generate::generate_proof(&project, &st, None)?;
//! println!("{proof}");
//! # Ok(())
//! # }
//! ```

pub use pzk_types::{
    abi, codec, error, model, value, Abi, AbiInput, Artifact, CircuitArgument, CodecError,
    ElementType, G1Point, G2Point, Proof, ProofType, ProvingParameters, PzkError, PzkResult,
    Scalar, Value, VerificationKey,
};

pub mod binder;
pub mod emit;
pub mod generate;
pub mod serialize;
pub mod state;
pub mod zokrates;
