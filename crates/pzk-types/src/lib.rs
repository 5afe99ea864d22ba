// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Shared types for pact-zk.
//!
//! Holds the typed model of the ZoKrates artifacts (ABI, proof, verification
//! key), the numeric codec used to move field elements between hex, fixed
//! width bytes and base64url, and the canonical value tree whose flattening
//! fixes the order in which a proof is serialized.

pub mod abi;
pub mod codec;
pub mod error;
pub mod model;
pub mod value;

pub use abi::{Abi, AbiInput, CircuitArgument, ElementType};
pub use codec::{Scalar, SCALAR_BYTES};
pub use error::{Artifact, CodecError, PzkError, PzkResult};
pub use model::{
    G1Point, G2Point, Proof, ProofType, ProvingParameters, VerificationKey, ACCEPTED_CURVE,
    ACCEPTED_SCHEME,
};
pub use value::Value;
